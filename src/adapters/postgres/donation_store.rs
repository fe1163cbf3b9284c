//! PostgreSQL implementation of the DonationStore port.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::donations::{Donation, DonationStatus};
use crate::domain::foundation::{DomainError, DonationId, ErrorCode, Timestamp};
use crate::ports::DonationStore;

/// PostgreSQL-backed donation store.
pub struct PostgresDonationStore {
    pool: PgPool,
}

impl PostgresDonationStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Database row for donations table.
#[derive(Debug, sqlx::FromRow)]
struct DonationRow {
    id: Uuid,
    donor_name: Option<String>,
    email: Option<String>,
    amount_cents: i64,
    message: Option<String>,
    status: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<DonationRow> for Donation {
    type Error = DomainError;

    fn try_from(row: DonationRow) -> Result<Self, Self::Error> {
        let status = parse_status(&row.status)?;

        Ok(Donation {
            id: DonationId::from_uuid(row.id),
            donor_name: row.donor_name,
            email: row.email,
            amount_cents: row.amount_cents,
            message: row.message,
            status,
            created_at: Timestamp::from_datetime(row.created_at),
        })
    }
}

fn parse_status(s: &str) -> Result<DonationStatus, DomainError> {
    match s.to_lowercase().as_str() {
        "pending" => Ok(DonationStatus::Pending),
        "received" => Ok(DonationStatus::Received),
        _ => Err(DomainError::new(
            ErrorCode::DatabaseError,
            format!("Invalid status value: {}", s),
        )),
    }
}

fn status_to_string(status: &DonationStatus) -> &'static str {
    match status {
        DonationStatus::Pending => "pending",
        DonationStatus::Received => "received",
    }
}

#[async_trait]
impl DonationStore for PostgresDonationStore {
    async fn save(&self, donation: &Donation) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO donations (id, donor_name, email, amount_cents, message, status, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(donation.id.as_uuid())
        .bind(&donation.donor_name)
        .bind(&donation.email)
        .bind(donation.amount_cents)
        .bind(&donation.message)
        .bind(status_to_string(&donation.status))
        .bind(donation.created_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to save donation: {}", e),
            )
        })?;

        Ok(())
    }

    async fn find_by_id(&self, id: &DonationId) -> Result<Option<Donation>, DomainError> {
        let row: Option<DonationRow> = sqlx::query_as(
            r#"
            SELECT id, donor_name, email, amount_cents, message, status, created_at
            FROM donations
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to find donation: {}", e),
            )
        })?;

        row.map(Donation::try_from).transpose()
    }

    async fn transition_status(
        &self,
        id: &DonationId,
        from: DonationStatus,
        to: DonationStatus,
    ) -> Result<bool, DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE donations
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
                format!("Failed to transition donation status: {}", e),
            )
        })?;

        Ok(result.rows_affected() > 0)
    }
}
