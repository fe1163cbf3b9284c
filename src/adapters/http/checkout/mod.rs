//! HTTP adapter for checkout endpoints.
//!
//! Exposes checkout session creation via REST API:
//! - `POST /checkout/order` - Start an order checkout
//! - `POST /checkout/donation` - Start a donation checkout
//!
//! Both return a `{url}` body pointing at the provider's hosted page.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::*;
pub use handlers::CheckoutAppState;
pub use routes::checkout_router;
