//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Persistence Ports
//!
//! - `ProductRepository` - Catalog aggregate persistence
//! - `OrderStore` - Order persistence and conditional settlement
//! - `DonationStore` - Donation persistence and conditional settlement
//! - `WebhookEventLog` - Stripe webhook idempotency ledger
//!
//! ## Payment Ports
//!
//! - `PaymentProvider` - Hosted checkout sessions and webhook verification

mod donation_store;
mod order_store;
mod payment_provider;
mod product_repository;
mod webhook_event_log;

pub use donation_store::DonationStore;
pub use order_store::OrderStore;
pub use payment_provider::{
    CheckoutLineItem, CheckoutSession, CreateSessionRequest, PaymentError, PaymentErrorCode,
    PaymentProvider,
};
pub use product_repository::ProductRepository;
pub use webhook_event_log::{SaveResult, WebhookEventLog, WebhookEventRecord, WebhookResult};
