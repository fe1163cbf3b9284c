//! PostgreSQL implementation of the OrderStore port.
//!
//! Line items are persisted as a JSONB snapshot so that later catalog
//! edits never rewrite what an existing order shows. Status settlement
//! goes through a conditional UPDATE, which is what makes webhook
//! redelivery safe.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::foundation::{DomainError, ErrorCode, OrderId, Timestamp};
use crate::domain::orders::{Order, OrderItem, OrderStatus};
use crate::ports::OrderStore;

/// PostgreSQL-backed order store.
pub struct PostgresOrderStore {
    pool: PgPool,
}

impl PostgresOrderStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Database row for orders table.
#[derive(Debug, sqlx::FromRow)]
struct OrderRow {
    id: Uuid,
    items: serde_json::Value,
    total_cents: i64,
    status: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<OrderRow> for Order {
    type Error = DomainError;

    fn try_from(row: OrderRow) -> Result<Self, Self::Error> {
        let items: Vec<OrderItem> = serde_json::from_value(row.items).map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Invalid order items payload: {}", e),
            )
        })?;
        let status = parse_status(&row.status)?;

        Ok(Order {
            id: OrderId::from_uuid(row.id),
            items,
            total_cents: row.total_cents,
            status,
            created_at: Timestamp::from_datetime(row.created_at),
        })
    }
}

fn parse_status(s: &str) -> Result<OrderStatus, DomainError> {
    match s.to_lowercase().as_str() {
        "pending" => Ok(OrderStatus::Pending),
        "paid" => Ok(OrderStatus::Paid),
        "failed" => Ok(OrderStatus::Failed),
        "canceled" => Ok(OrderStatus::Canceled),
        _ => Err(DomainError::new(
            ErrorCode::DatabaseError,
            format!("Invalid status value: {}", s),
        )),
    }
}

fn status_to_string(status: &OrderStatus) -> &'static str {
    match status {
        OrderStatus::Pending => "pending",
        OrderStatus::Paid => "paid",
        OrderStatus::Failed => "failed",
        OrderStatus::Canceled => "canceled",
    }
}

#[async_trait]
impl OrderStore for PostgresOrderStore {
    async fn save(&self, order: &Order) -> Result<(), DomainError> {
        let items = serde_json::to_value(&order.items).map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to serialize order items: {}", e),
            )
        })?;

        sqlx::query(
            r#"
            INSERT INTO orders (id, items, total_cents, status, created_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(order.id.as_uuid())
        .bind(items)
        .bind(order.total_cents)
        .bind(status_to_string(&order.status))
        .bind(order.created_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to save order: {}", e),
            )
        })?;

        Ok(())
    }

    async fn find_by_id(&self, id: &OrderId) -> Result<Option<Order>, DomainError> {
        let row: Option<OrderRow> = sqlx::query_as(
            r#"
            SELECT id, items, total_cents, status, created_at
            FROM orders
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to find order: {}", e),
            )
        })?;

        row.map(Order::try_from).transpose()
    }

    async fn transition_status(
        &self,
        id: &OrderId,
        from: OrderStatus,
        to: OrderStatus,
    ) -> Result<bool, DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE orders
            SET status = $3
            WHERE id = $1 AND status = $2
            "#,
        )
        .bind(id.as_uuid())
        .bind(status_to_string(&from))
        .bind(status_to_string(&to))
        .execute(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to transition order status: {}", e),
            )
        })?;

        Ok(result.rows_affected() > 0)
    }
}
