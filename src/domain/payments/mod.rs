//! Payments domain module.
//!
//! Stripe-facing value objects plus the webhook verification and
//! idempotent reconciliation stack.
//!
//! # Module Structure
//!
//! - `stripe_event` - Parsed Stripe event envelope
//! - `webhook_verifier` - Signature and timestamp verification
//! - `webhook_errors` - Webhook processing error taxonomy
//! - `webhook_processor` - Idempotent event processing pipeline
//! - `session_event_handler` - Order/donation settlement from session events

mod session_event_handler;
mod stripe_event;
mod webhook_errors;
mod webhook_processor;
mod webhook_verifier;

pub use session_event_handler::CheckoutSessionEventHandler;
pub use stripe_event::{StripeEvent, StripeEventData, StripeEventType};
pub use webhook_errors::WebhookError;
pub use webhook_processor::{
    HandlerRegistry, IdempotentWebhookProcessor, WebhookDispatcher, WebhookEventHandler,
};
pub use webhook_verifier::{SignatureHeader, StripeWebhookVerifier};

#[cfg(test)]
pub use stripe_event::StripeEventBuilder;
