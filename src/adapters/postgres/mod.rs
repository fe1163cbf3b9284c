//! PostgreSQL adapters - Database implementations for storage ports.
//!
//! One adapter per port:
//! - `PostgresProductRepository` - Catalog persistence
//! - `PostgresOrderStore` - Orders with JSONB line-item snapshots
//! - `PostgresDonationStore` - Donation persistence
//! - `PostgresWebhookEventLog` - Durable webhook dedup ledger

mod donation_store;
mod order_store;
mod product_repository;
mod webhook_event_log;

pub use donation_store::PostgresDonationStore;
pub use order_store::PostgresOrderStore;
pub use product_repository::PostgresProductRepository;
pub use webhook_event_log::PostgresWebhookEventLog;
