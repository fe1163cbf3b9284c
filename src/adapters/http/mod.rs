//! HTTP adapters - REST API implementations.
//!
//! Each domain module has its own HTTP adapter for endpoint exposure.
//! `router` assembles them into the application router; `error` carries
//! the shared error envelope; `middleware` holds the admin guard.

pub mod auth;
pub mod catalog;
pub mod checkout;
pub mod error;
pub mod middleware;
pub mod router;
pub mod webhooks;

// Re-export key types for convenience
pub use auth::{auth_router, AuthAppState};
pub use catalog::{catalog_router, CatalogAppState};
pub use checkout::{checkout_router, CheckoutAppState};
pub use error::{ApiError, ErrorResponse};
pub use router::{api_router, AppStates};
pub use webhooks::{webhook_router, WebhookAppState};
