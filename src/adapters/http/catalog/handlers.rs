//! HTTP handlers for catalog endpoints.
//!
//! Handlers translate between HTTP requests and the application layer,
//! delegating all business logic to command/query handlers.

use std::str::FromStr;
use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use crate::adapters::http::error::ApiError;
use crate::application::handlers::catalog::{
    CreateProductCommand, CreateProductHandler, DeleteProductCommand, DeleteProductHandler,
    GetProductHandler, GetProductQuery, ListProductsHandler, UpdateProductCommand,
    UpdateProductHandler,
};
use crate::domain::foundation::{DomainError, ErrorCode, ProductId};
use crate::ports::ProductRepository;

use super::dto::{
    CreateProductRequest, DeleteProductResponse, ProductResponse, UpdateProductRequest,
};

/// Shared state for catalog handlers.
#[derive(Clone)]
pub struct CatalogAppState {
    pub products: Arc<dyn ProductRepository>,
}

impl CatalogAppState {
    pub fn new(products: Arc<dyn ProductRepository>) -> Self {
        Self { products }
    }

    /// Creates a list products handler.
    pub fn list_products_handler(&self) -> ListProductsHandler {
        ListProductsHandler::new(self.products.clone())
    }

    /// Creates a get product handler.
    pub fn get_product_handler(&self) -> GetProductHandler {
        GetProductHandler::new(self.products.clone())
    }

    /// Creates a create product handler.
    pub fn create_product_handler(&self) -> CreateProductHandler {
        CreateProductHandler::new(self.products.clone())
    }

    /// Creates an update product handler.
    pub fn update_product_handler(&self) -> UpdateProductHandler {
        UpdateProductHandler::new(self.products.clone())
    }

    /// Creates a delete product handler.
    pub fn delete_product_handler(&self) -> DeleteProductHandler {
        DeleteProductHandler::new(self.products.clone())
    }
}

fn parse_product_id(raw: &str) -> Result<ProductId, DomainError> {
    ProductId::from_str(raw).map_err(|_| {
        DomainError::new(ErrorCode::InvalidFormat, "Invalid product ID")
            .with_detail("id", raw.to_string())
    })
}

/// GET /products
///
/// Lists all products, newest first.
pub async fn list_products(
    State(state): State<CatalogAppState>,
) -> Result<impl IntoResponse, ApiError> {
    let handler = state.list_products_handler();
    let result = handler.handle().await?;

    let products: Vec<ProductResponse> =
        result.products.into_iter().map(ProductResponse::from).collect();

    Ok(Json(products))
}

/// GET /products/:id
///
/// Fetches a single product by ID.
pub async fn get_product(
    State(state): State<CatalogAppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let product_id = parse_product_id(&id)?;

    let handler = state.get_product_handler();
    let result = handler.handle(GetProductQuery { id: product_id }).await?;

    Ok(Json(ProductResponse::from(result.product)))
}

/// POST /products
///
/// Creates a new product. Requires an admin token.
pub async fn create_product(
    State(state): State<CatalogAppState>,
    Json(request): Json<CreateProductRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let handler = state.create_product_handler();
    let result = handler
        .handle(CreateProductCommand {
            title: request.title,
            description: request.description,
            price_cents: request.price_cents,
            stock: request.stock,
            image: request.image,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(ProductResponse::from(result.product))))
}

/// PUT /products/:id
///
/// Applies a partial update to a product. Requires an admin token.
pub async fn update_product(
    State(state): State<CatalogAppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateProductRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let product_id = parse_product_id(&id)?;

    let handler = state.update_product_handler();
    let result = handler
        .handle(UpdateProductCommand {
            id: product_id,
            patch: request.into(),
        })
        .await?;

    Ok(Json(ProductResponse::from(result.product)))
}

/// DELETE /products/:id
///
/// Removes a product from the catalog. Requires an admin token.
pub async fn delete_product(
    State(state): State<CatalogAppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let product_id = parse_product_id(&id)?;

    let handler = state.delete_product_handler();
    handler.handle(DeleteProductCommand { id: product_id }).await?;

    Ok(Json(DeleteProductResponse { success: true }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::Product;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct InMemoryProducts {
        items: Mutex<Vec<Product>>,
    }

    impl InMemoryProducts {
        fn new() -> Self {
            Self {
                items: Mutex::new(Vec::new()),
            }
        }

        fn with(products: Vec<Product>) -> Self {
            Self {
                items: Mutex::new(products),
            }
        }
    }

    #[async_trait]
    impl ProductRepository for InMemoryProducts {
        async fn save(&self, product: &Product) -> Result<(), DomainError> {
            self.items.lock().unwrap().push(product.clone());
            Ok(())
        }

        async fn update(&self, product: &Product) -> Result<(), DomainError> {
            let mut items = self.items.lock().unwrap();
            let existing = items
                .iter_mut()
                .find(|p| p.id == product.id)
                .ok_or_else(|| DomainError::new(ErrorCode::ProductNotFound, "Product not found"))?;
            *existing = product.clone();
            Ok(())
        }

        async fn find_by_id(&self, id: &ProductId) -> Result<Option<Product>, DomainError> {
            Ok(self.items.lock().unwrap().iter().find(|p| p.id == *id).cloned())
        }

        async fn list_all(&self) -> Result<Vec<Product>, DomainError> {
            let mut items = self.items.lock().unwrap().clone();
            items.sort_by(|a, b| b.created_at.cmp(&a.created_at));
            Ok(items)
        }

        async fn delete(&self, id: &ProductId) -> Result<(), DomainError> {
            let mut items = self.items.lock().unwrap();
            let before = items.len();
            items.retain(|p| p.id != *id);
            if items.len() == before {
                return Err(DomainError::new(ErrorCode::ProductNotFound, "Product not found"));
            }
            Ok(())
        }
    }

    fn sample_product() -> Product {
        Product::create(
            ProductId::new(),
            "Ceramic mug",
            Some("Hand-thrown stoneware".to_string()),
            1800,
            25,
            None,
        )
        .unwrap()
    }

    #[test]
    fn catalog_app_state_creates_handlers() {
        let state = CatalogAppState::new(Arc::new(InMemoryProducts::new()));
        let _ = state.list_products_handler();
        let _ = state.get_product_handler();
        let _ = state.create_product_handler();
        let _ = state.update_product_handler();
        let _ = state.delete_product_handler();
    }

    #[tokio::test]
    async fn list_products_returns_products() {
        let state = CatalogAppState::new(Arc::new(InMemoryProducts::with(vec![sample_product()])));
        let response = list_products(State(state)).await;
        assert!(response.is_ok());
    }

    #[tokio::test]
    async fn get_product_rejects_malformed_id() {
        let state = CatalogAppState::new(Arc::new(InMemoryProducts::new()));
        let result = get_product(State(state), Path("not-a-uuid".to_string())).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn delete_product_reports_missing_product() {
        let state = CatalogAppState::new(Arc::new(InMemoryProducts::new()));
        let result = delete_product(State(state), Path(ProductId::new().to_string())).await;
        assert!(result.is_err());
    }

    #[test]
    fn parse_product_id_accepts_uuid() {
        let id = ProductId::new();
        assert_eq!(parse_product_id(&id.to_string()).unwrap(), id);
    }
}
