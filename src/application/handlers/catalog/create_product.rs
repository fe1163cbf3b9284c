//! CreateProductHandler - Command handler for adding a product to the catalog.

use std::sync::Arc;

use crate::domain::catalog::Product;
use crate::domain::foundation::{DomainError, ProductId};
use crate::ports::ProductRepository;

/// Command to create a new product.
#[derive(Debug, Clone)]
pub struct CreateProductCommand {
    pub title: String,
    pub description: Option<String>,
    pub price_cents: i64,
    pub stock: i32,
    pub image: Option<String>,
}

/// Result of successful product creation.
#[derive(Debug, Clone)]
pub struct CreateProductResult {
    pub product: Product,
}

/// Handler for creating catalog products.
pub struct CreateProductHandler {
    repository: Arc<dyn ProductRepository>,
}

impl CreateProductHandler {
    pub fn new(repository: Arc<dyn ProductRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        cmd: CreateProductCommand,
    ) -> Result<CreateProductResult, DomainError> {
        // 1. Build the aggregate (validates title, price, stock)
        let product = Product::create(
            ProductId::new(),
            cmd.title,
            cmd.description,
            cmd.price_cents,
            cmd.stock,
            cmd.image,
        )?;

        // 2. Persist
        self.repository.save(&product).await?;

        Ok(CreateProductResult { product })
    }
}
