//! Product repository port (catalog persistence).
//!
//! Defines the contract for persisting and retrieving Product aggregates.
//! Implementations handle the actual database operations.
//!
//! # Design
//!
//! - **Aggregate-oriented**: Handlers load, mutate, and write back whole products
//! - **Admin write path**: Create/update/delete are admin-only at the HTTP layer
//! - **Price authority**: Checkout reads prices from here, never from client input
//!
//! # Example
//!
//! ```ignore
//! async fn rename_product(
//!     repo: &dyn ProductRepository,
//!     id: &ProductId,
//!     title: &str,
//! ) -> Result<Product, DomainError> {
//!     let mut product = repo
//!         .find_by_id(id)
//!         .await?
//!         .ok_or_else(|| DomainError::new(ErrorCode::ProductNotFound, "Product not found"))?;
//!
//!     let patch = ProductPatch {
//!         title: Some(title.to_string()),
//!         ..Default::default()
//!     };
//!     product.apply_patch(patch);
//!
//!     repo.update(&product).await?;
//!     Ok(product)
//! }
//! ```

use async_trait::async_trait;

use crate::domain::catalog::Product;
use crate::domain::foundation::{DomainError, ProductId};

/// Repository port for Product aggregate persistence.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Save a new product.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn save(&self, product: &Product) -> Result<(), DomainError>;

    /// Update an existing product.
    ///
    /// # Errors
    ///
    /// - `ProductNotFound` if the product doesn't exist
    /// - `DatabaseError` on persistence failure
    async fn update(&self, product: &Product) -> Result<(), DomainError>;

    /// Find a product by its ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &ProductId) -> Result<Option<Product>, DomainError>;

    /// List all products, newest first.
    async fn list_all(&self) -> Result<Vec<Product>, DomainError>;

    /// Delete a product.
    ///
    /// # Errors
    ///
    /// - `ProductNotFound` if the product doesn't exist
    /// - `DatabaseError` on persistence failure
    async fn delete(&self, id: &ProductId) -> Result<(), DomainError>;
}
