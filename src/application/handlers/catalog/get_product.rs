//! GetProductHandler - Query handler for fetching a single product.

use std::sync::Arc;

use crate::domain::catalog::Product;
use crate::domain::foundation::{DomainError, ErrorCode, ProductId};
use crate::ports::ProductRepository;

/// Query for a single product by ID.
#[derive(Debug, Clone)]
pub struct GetProductQuery {
    pub id: ProductId,
}

/// Result of a product lookup.
#[derive(Debug, Clone)]
pub struct GetProductResult {
    pub product: Product,
}

/// Handler for fetching one product.
pub struct GetProductHandler {
    repository: Arc<dyn ProductRepository>,
}

impl GetProductHandler {
    pub fn new(repository: Arc<dyn ProductRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: GetProductQuery) -> Result<GetProductResult, DomainError> {
        let product = self
            .repository
            .find_by_id(&query.id)
            .await?
            .ok_or_else(|| {
                DomainError::new(
                    ErrorCode::ProductNotFound,
                    format!("Product not found: {}", query.id),
                )
            })?;

        Ok(GetProductResult { product })
    }
}
