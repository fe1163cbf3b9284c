//! HTTP DTOs (Data Transfer Objects) for catalog endpoints.
//!
//! These types define the JSON request/response structure for the catalog API.
//! They serve as the boundary between HTTP and the application layer.

use serde::{Deserialize, Serialize};

use crate::domain::catalog::{Product, ProductPatch};

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Request to create a new product.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProductRequest {
    /// Display title.
    pub title: String,
    /// Longer description.
    #[serde(default)]
    pub description: Option<String>,
    /// Unit price in cents.
    pub price_cents: i64,
    /// Units available.
    pub stock: i32,
    /// Image URL or storage key.
    #[serde(default)]
    pub image: Option<String>,
}

/// Request to update a product. All fields are optional; absent fields
/// leave the stored value untouched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateProductRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub price_cents: Option<i64>,
    #[serde(default)]
    pub stock: Option<i32>,
    #[serde(default)]
    pub image: Option<String>,
}

impl From<UpdateProductRequest> for ProductPatch {
    fn from(request: UpdateProductRequest) -> Self {
        ProductPatch {
            title: request.title,
            description: request.description,
            price_cents: request.price_cents,
            stock: request.stock,
            image: request.image,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// A single product as returned by the API.
#[derive(Debug, Clone, Serialize)]
pub struct ProductResponse {
    /// Product ID.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Longer description, if any.
    pub description: Option<String>,
    /// Unit price in cents.
    pub price_cents: i64,
    /// Units available.
    pub stock: i32,
    /// Image URL or storage key, if any.
    pub image: Option<String>,
    /// When the product was created (ISO 8601).
    pub created_at: String,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.to_string(),
            title: product.title,
            description: product.description,
            price_cents: product.price_cents,
            stock: product.stock,
            image: product.image,
            created_at: product.created_at.to_rfc3339(),
        }
    }
}

/// Response for a successful deletion.
#[derive(Debug, Clone, Serialize)]
pub struct DeleteProductResponse {
    /// Always true; errors use the standard error envelope instead.
    pub success: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{ProductId, Timestamp};

    // ════════════════════════════════════════════════════════════════════════════
    // Request DTO Tests
    // ════════════════════════════════════════════════════════════════════════════

    #[test]
    fn create_product_request_deserializes() {
        let json = r#"{
            "title": "Ceramic mug",
            "description": "Hand-thrown stoneware",
            "price_cents": 1800,
            "stock": 25
        }"#;
        let request: CreateProductRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.title, "Ceramic mug");
        assert_eq!(request.price_cents, 1800);
        assert_eq!(request.stock, 25);
        assert!(request.image.is_none());
    }

    #[test]
    fn update_product_request_accepts_partial_body() {
        let json = r#"{"price_cents": 2100}"#;
        let request: UpdateProductRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.price_cents, Some(2100));
        assert!(request.title.is_none());
        assert!(request.stock.is_none());
    }

    #[test]
    fn update_product_request_converts_to_patch() {
        let request = UpdateProductRequest {
            title: Some("Tea towel".to_string()),
            stock: Some(40),
            ..Default::default()
        };

        let patch = ProductPatch::from(request);
        assert_eq!(patch.title, Some("Tea towel".to_string()));
        assert_eq!(patch.stock, Some(40));
        assert!(patch.price_cents.is_none());
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Response DTO Tests
    // ════════════════════════════════════════════════════════════════════════════

    #[test]
    fn product_response_from_product() {
        let product = Product {
            id: ProductId::new(),
            title: "Ceramic mug".to_string(),
            description: None,
            price_cents: 1800,
            stock: 25,
            image: Some("mug.jpg".to_string()),
            created_at: Timestamp::now(),
        };

        let response = ProductResponse::from(product.clone());
        assert_eq!(response.id, product.id.to_string());
        assert_eq!(response.title, "Ceramic mug");
        assert_eq!(response.price_cents, 1800);
        assert!(response.created_at.contains('T'));
    }

    #[test]
    fn delete_product_response_serializes() {
        let response = DeleteProductResponse { success: true };
        let json = serde_json::to_string(&response).unwrap();
        assert_eq!(json, r#"{"success":true}"#);
    }
}
