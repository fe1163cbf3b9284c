//! Payment handlers.
//!
//! The webhook processing command handler. Checkout session creation
//! lives under `checkout`; this module owns the asynchronous settlement
//! path.

mod process_webhook;

pub use process_webhook::{ProcessWebhookCommand, ProcessWebhookHandler};
