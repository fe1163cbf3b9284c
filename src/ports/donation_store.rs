//! Donation store port (checkout write side).
//!
//! Same shape as the order store: donations are saved as `pending` before
//! the checkout session exists, and settlement happens via a conditional
//! status transition driven by webhooks.

use async_trait::async_trait;

use crate::domain::donations::{Donation, DonationStatus};
use crate::domain::foundation::{DomainError, DonationId};

/// Repository port for Donation aggregate persistence.
#[async_trait]
pub trait DonationStore: Send + Sync {
    /// Save a new donation.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn save(&self, donation: &Donation) -> Result<(), DomainError>;

    /// Find a donation by its ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &DonationId) -> Result<Option<Donation>, DomainError>;

    /// Atomically transition a donation's status.
    ///
    /// The update only applies if the donation currently has status `from`.
    /// Returns `true` if a row was updated, `false` otherwise.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn transition_status(
        &self,
        id: &DonationId,
        from: DonationStatus,
        to: DonationStatus,
    ) -> Result<bool, DomainError>;
}
