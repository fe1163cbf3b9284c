//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod catalog;
pub mod checkout;
pub mod payments;

pub use catalog::{
    CreateProductCommand, CreateProductHandler, CreateProductResult, DeleteProductCommand,
    DeleteProductHandler, DeleteProductResult, GetProductHandler, GetProductQuery,
    GetProductResult, ListProductsHandler, ListProductsResult, UpdateProductCommand,
    UpdateProductHandler, UpdateProductResult,
};
pub use checkout::{
    CreateDonationCheckoutCommand, CreateDonationCheckoutHandler, CreateDonationCheckoutResult,
    CreateOrderCheckoutCommand, CreateOrderCheckoutHandler, CreateOrderCheckoutResult,
    OrderItemRequest,
};
pub use payments::{ProcessWebhookCommand, ProcessWebhookHandler};
