//! DeleteProductHandler - Command handler for removing catalog products.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, ProductId};
use crate::ports::ProductRepository;

/// Command to delete a product.
#[derive(Debug, Clone)]
pub struct DeleteProductCommand {
    pub id: ProductId,
}

/// Result of a successful deletion.
#[derive(Debug, Clone)]
pub struct DeleteProductResult {
    pub id: ProductId,
}

/// Handler for deleting products.
///
/// Orders keep an immutable snapshot of title and price, so deleting a
/// product never corrupts order history.
pub struct DeleteProductHandler {
    repository: Arc<dyn ProductRepository>,
}

impl DeleteProductHandler {
    pub fn new(repository: Arc<dyn ProductRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        cmd: DeleteProductCommand,
    ) -> Result<DeleteProductResult, DomainError> {
        self.repository.delete(&cmd.id).await?;
        Ok(DeleteProductResult { id: cmd.id })
    }
}
