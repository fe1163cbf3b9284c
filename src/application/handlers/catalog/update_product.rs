//! UpdateProductHandler - Command handler for patching catalog products.

use std::sync::Arc;

use crate::domain::catalog::{Product, ProductPatch};
use crate::domain::foundation::{DomainError, ErrorCode, ProductId};
use crate::ports::ProductRepository;

/// Command to update an existing product.
///
/// Absent patch fields leave the stored value untouched.
#[derive(Debug, Clone)]
pub struct UpdateProductCommand {
    pub id: ProductId,
    pub patch: ProductPatch,
}

/// Result of a successful update.
#[derive(Debug, Clone)]
pub struct UpdateProductResult {
    pub product: Product,
}

/// Handler for patching products.
pub struct UpdateProductHandler {
    repository: Arc<dyn ProductRepository>,
}

impl UpdateProductHandler {
    pub fn new(repository: Arc<dyn ProductRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        cmd: UpdateProductCommand,
    ) -> Result<UpdateProductResult, DomainError> {
        // 1. Validate the patch before touching storage
        cmd.patch.validate()?;

        // 2. Load the current aggregate
        let mut product = self.repository.find_by_id(&cmd.id).await?.ok_or_else(|| {
            DomainError::new(
                ErrorCode::ProductNotFound,
                format!("Product not found: {}", cmd.id),
            )
        })?;

        // 3. Apply and persist
        product.apply_patch(cmd.patch);
        self.repository.update(&product).await?;

        Ok(UpdateProductResult { product })
    }
}
