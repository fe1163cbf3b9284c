//! Donation aggregate entity.

use crate::domain::foundation::{DomainError, DonationId, ErrorCode, Timestamp, ValidationError};
use serde::{Deserialize, Serialize};

use super::DonationStatus;

/// Donation aggregate - a voluntary payment awaiting or past confirmation.
///
/// # Invariants
///
/// - `amount_cents` is strictly positive
/// - Status transitions follow the `DonationStatus` state machine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Donation {
    /// Unique identifier for this donation.
    pub id: DonationId,

    /// Donor display name, if given.
    pub donor_name: Option<String>,

    /// Donor email, if given.
    pub email: Option<String>,

    /// Donated amount in cents, always positive.
    pub amount_cents: i64,

    /// Free-form message from the donor.
    pub message: Option<String>,

    /// Current status in the payment lifecycle.
    pub status: DonationStatus,

    /// When the donation was created.
    pub created_at: Timestamp,
}

impl Donation {
    /// Creates a new pending donation.
    ///
    /// # Errors
    ///
    /// Returns error if the amount is zero or negative. A zero-amount
    /// donation must never reach the store or the payment provider.
    pub fn create(
        id: DonationId,
        amount_cents: i64,
        donor_name: Option<String>,
        email: Option<String>,
        message: Option<String>,
    ) -> Result<Self, ValidationError> {
        if amount_cents <= 0 {
            return Err(ValidationError::invalid_format(
                "amount_cents",
                "must be positive",
            ));
        }
        Ok(Self {
            id,
            donor_name,
            email,
            amount_cents,
            message,
            status: DonationStatus::Pending,
            created_at: Timestamp::now(),
        })
    }

    /// Marks the donation received after confirmed payment.
    ///
    /// # Errors
    ///
    /// Returns error if the donation is not pending.
    pub fn mark_received(&mut self) -> Result<(), DomainError> {
        use crate::domain::foundation::StateMachine;

        self.status = self.status.transition_to(DonationStatus::Received).map_err(|_| {
            DomainError::new(
                ErrorCode::InvalidStateTransition,
                format!("Cannot transition donation from {:?} to Received", self.status),
            )
        })?;
        Ok(())
    }
}
