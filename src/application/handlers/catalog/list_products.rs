//! ListProductsHandler - Query handler for the public catalog listing.

use std::sync::Arc;

use crate::domain::catalog::Product;
use crate::domain::foundation::DomainError;
use crate::ports::ProductRepository;

/// Result of listing the catalog.
#[derive(Debug, Clone)]
pub struct ListProductsResult {
    pub products: Vec<Product>,
}

/// Handler for listing all products, newest first.
pub struct ListProductsHandler {
    repository: Arc<dyn ProductRepository>,
}

impl ListProductsHandler {
    pub fn new(repository: Arc<dyn ProductRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self) -> Result<ListProductsResult, DomainError> {
        let products = self.repository.list_all().await?;
        Ok(ListProductsResult { products })
    }
}
