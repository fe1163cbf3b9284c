//! PostgreSQL implementation of the ProductRepository port.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::catalog::Product;
use crate::domain::foundation::{DomainError, ErrorCode, ProductId, Timestamp};
use crate::ports::ProductRepository;

/// PostgreSQL-backed product repository.
pub struct PostgresProductRepository {
    pool: PgPool,
}

impl PostgresProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Database row for products table.
#[derive(Debug, sqlx::FromRow)]
struct ProductRow {
    id: Uuid,
    title: String,
    description: Option<String>,
    price_cents: i64,
    stock: i32,
    image: Option<String>,
    created_at: DateTime<Utc>,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Product {
            id: ProductId::from_uuid(row.id),
            title: row.title,
            description: row.description,
            price_cents: row.price_cents,
            stock: row.stock,
            image: row.image,
            created_at: Timestamp::from_datetime(row.created_at),
        }
    }
}

#[async_trait]
impl ProductRepository for PostgresProductRepository {
    async fn save(&self, product: &Product) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO products (id, title, description, price_cents, stock, image, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(product.id.as_uuid())
        .bind(&product.title)
        .bind(&product.description)
        .bind(product.price_cents)
        .bind(product.stock)
        .bind(&product.image)
        .bind(product.created_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to save product: {}", e),
            )
        })?;

        Ok(())
    }

    async fn update(&self, product: &Product) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE products
            SET title = $2, description = $3, price_cents = $4, stock = $5, image = $6
            WHERE id = $1
            "#,
        )
        .bind(product.id.as_uuid())
        .bind(&product.title)
        .bind(&product.description)
        .bind(product.price_cents)
        .bind(product.stock)
        .bind(&product.image)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to update product: {}", e),
            )
        })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::ProductNotFound,
                format!("Product not found: {}", product.id),
            ));
        }

        Ok(())
    }

    async fn find_by_id(&self, id: &ProductId) -> Result<Option<Product>, DomainError> {
        let row: Option<ProductRow> = sqlx::query_as(
            r#"
            SELECT id, title, description, price_cents, stock, image, created_at
            FROM products
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to find product: {}", e),
            )
        })?;

        Ok(row.map(Product::from))
    }

    async fn list_all(&self) -> Result<Vec<Product>, DomainError> {
        let rows: Vec<ProductRow> = sqlx::query_as(
            r#"
            SELECT id, title, description, price_cents, stock, image, created_at
            FROM products
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to list products: {}", e),
            )
        })?;

        Ok(rows.into_iter().map(Product::from).collect())
    }

    async fn delete(&self, id: &ProductId) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            DELETE FROM products
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to delete product: {}", e),
            )
        })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::ProductNotFound,
                format!("Product not found: {}", id),
            ));
        }

        Ok(())
    }
}
