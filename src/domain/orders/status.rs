//! Order status state machine.
//!
//! Defines all possible order states and valid transitions according to
//! the payment lifecycle.

use crate::domain::foundation::StateMachine;
use serde::{Deserialize, Serialize};

/// Order payment status.
///
/// An order starts pending when a checkout session is created and moves
/// exactly once to a terminal state when payment resolves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// Checkout session created, payment not yet confirmed.
    Pending,

    /// Payment confirmed by the provider.
    Paid,

    /// Payment failed or the checkout session expired.
    Failed,

    /// Cancelled by an operator before payment resolved.
    Canceled,
}

impl OrderStatus {
    /// Returns true if payment has resolved and no further transition
    /// is possible.
    pub fn is_settled(&self) -> bool {
        !matches!(self, OrderStatus::Pending)
    }
}

impl StateMachine for OrderStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        use OrderStatus::*;
        matches!(
            (self, target),
            // From PENDING
            (Pending, Paid) | (Pending, Failed) | (Pending, Canceled)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use OrderStatus::*;
        match self {
            Pending => vec![Paid, Failed, Canceled],
            Paid => vec![],
            Failed => vec![],
            Canceled => vec![],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pending_can_transition_to_paid() {
        let status = OrderStatus::Pending;
        assert!(status.can_transition_to(&OrderStatus::Paid));

        let result = status.transition_to(OrderStatus::Paid);
        assert_eq!(result, Ok(OrderStatus::Paid));
    }

    #[test]
    fn pending_can_transition_to_failed() {
        let status = OrderStatus::Pending;
        assert!(status.can_transition_to(&OrderStatus::Failed));

        let result = status.transition_to(OrderStatus::Failed);
        assert_eq!(result, Ok(OrderStatus::Failed));
    }

    #[test]
    fn pending_can_transition_to_canceled() {
        let status = OrderStatus::Pending;
        assert!(status.can_transition_to(&OrderStatus::Canceled));
    }

    #[test]
    fn paid_cannot_transition_anywhere() {
        let status = OrderStatus::Paid;
        assert!(!status.can_transition_to(&OrderStatus::Pending));
        assert!(!status.can_transition_to(&OrderStatus::Failed));
        assert!(!status.can_transition_to(&OrderStatus::Canceled));

        let result = status.transition_to(OrderStatus::Failed);
        assert!(result.is_err());
    }

    #[test]
    fn failed_cannot_recover_to_paid() {
        let status = OrderStatus::Failed;
        assert!(!status.can_transition_to(&OrderStatus::Paid));
    }

    #[test]
    fn terminal_states_are_terminal() {
        assert!(OrderStatus::Paid.is_terminal());
        assert!(OrderStatus::Failed.is_terminal());
        assert!(OrderStatus::Canceled.is_terminal());
        assert!(!OrderStatus::Pending.is_terminal());
    }

    #[test]
    fn is_settled_matches_terminality() {
        assert!(!OrderStatus::Pending.is_settled());
        assert!(OrderStatus::Paid.is_settled());
        assert!(OrderStatus::Failed.is_settled());
        assert!(OrderStatus::Canceled.is_settled());
    }

    #[test]
    fn valid_transitions_are_consistent_with_can_transition_to() {
        for status in [
            OrderStatus::Pending,
            OrderStatus::Paid,
            OrderStatus::Failed,
            OrderStatus::Canceled,
        ] {
            for valid_target in status.valid_transitions() {
                assert!(
                    status.can_transition_to(&valid_target),
                    "can_transition_to should return true for {:?} -> {:?}",
                    status,
                    valid_target
                );
            }
        }
    }

    #[test]
    fn serializes_to_snake_case() {
        let json = serde_json::to_string(&OrderStatus::Pending).unwrap();
        assert_eq!(json, "\"pending\"");
        let json = serde_json::to_string(&OrderStatus::Paid).unwrap();
        assert_eq!(json, "\"paid\"");
    }
}
