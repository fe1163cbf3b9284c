//! Catalog handlers.
//!
//! Command and query handlers for product management:
//!
//! ## Commands (admin only)
//! - Creating products
//! - Patching product fields
//! - Deleting products
//!
//! ## Queries (public)
//! - List the catalog
//! - Get a single product

mod create_product;
mod delete_product;
mod get_product;
mod list_products;
mod update_product;

// Commands
pub use create_product::{CreateProductCommand, CreateProductHandler, CreateProductResult};
pub use delete_product::{DeleteProductCommand, DeleteProductHandler, DeleteProductResult};
pub use update_product::{UpdateProductCommand, UpdateProductHandler, UpdateProductResult};

// Queries
pub use get_product::{GetProductHandler, GetProductQuery, GetProductResult};
pub use list_products::{ListProductsHandler, ListProductsResult};
