//! Catalog module - admin-managed products.

mod product;

pub use product::{Product, ProductPatch};
