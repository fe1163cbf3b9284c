//! Donation status state machine.

use crate::domain::foundation::StateMachine;
use serde::{Deserialize, Serialize};

/// Donation payment status.
///
/// Deliberately minimal: a donation is either awaiting payment or the
/// money arrived. Failed and expired checkouts simply leave the donation
/// pending; there is nothing to recover or refund.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DonationStatus {
    /// Checkout session created, payment not yet confirmed.
    Pending,

    /// Payment confirmed by the provider.
    Received,
}

impl StateMachine for DonationStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        use DonationStatus::*;
        matches!((self, target), (Pending, Received))
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use DonationStatus::*;
        match self {
            Pending => vec![Received],
            Received => vec![],
        }
    }
}
