//! HTTP adapter for catalog endpoints.
//!
//! Exposes the product catalog via REST API:
//! - `GET /products` - List all products, newest first
//! - `GET /products/:id` - Get a single product
//! - `POST /products` - Create a product (admin)
//! - `PUT /products/:id` - Update a product (admin)
//! - `DELETE /products/:id` - Delete a product (admin)

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::*;
pub use handlers::CatalogAppState;
pub use routes::catalog_router;
