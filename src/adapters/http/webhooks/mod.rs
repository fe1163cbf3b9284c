//! HTTP adapter for the payment provider webhook.
//!
//! Exposes a single endpoint:
//! - `POST /webhook` - Receive and reconcile a Stripe event
//!
//! The route reads the raw body and the `Stripe-Signature` header;
//! verification and idempotent settlement happen in the application
//! layer.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::WebhookAck;
pub use handlers::WebhookAppState;
pub use routes::webhook_router;
