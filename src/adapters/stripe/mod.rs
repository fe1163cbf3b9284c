//! Stripe payment provider adapter.
//!
//! Implements the `PaymentProvider` port for Stripe integration, including:
//! - One-off checkout sessions for orders and donations
//! - Webhook signature verification
//!
//! # Security
//!
//! - Webhook signatures use HMAC-SHA256 with constant-time comparison
//! - Timestamps are validated to prevent replay attacks (5-minute window)
//! - All secrets are handled via `secrecy::SecretString`
//!
//! # Configuration
//!
//! Required environment variables:
//! - `FLASHSALE__PAYMENT__STRIPE_API_KEY`: Stripe secret API key
//! - `FLASHSALE__PAYMENT__STRIPE_WEBHOOK_SECRET`: Webhook signing secret
//!   (whsec_...), optional in development

mod mock_payment_provider;
mod stripe_adapter;

pub use mock_payment_provider::MockPaymentProvider;
pub use stripe_adapter::{StripeConfig, StripePaymentAdapter};
