//! Order store port (checkout write side).
//!
//! Defines the contract for persisting Order aggregates and for the
//! conditional status transition used by webhook reconciliation.
//!
//! # Design
//!
//! - **Pending-first**: Orders are saved as `pending` before the checkout
//!   session is created, so a webhook can never reference a missing row
//! - **Conditional settlement**: `transition_status` compares-and-swaps on
//!   the current status, making duplicate webhook deliveries harmless
//!
//! # Example
//!
//! ```ignore
//! async fn settle_order(store: &dyn OrderStore, id: &OrderId) -> Result<(), DomainError> {
//!     let updated = store
//!         .transition_status(id, OrderStatus::Pending, OrderStatus::Paid)
//!         .await?;
//!     if !updated {
//!         // Already settled by an earlier delivery. Not an error.
//!     }
//!     Ok(())
//! }
//! ```

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, OrderId};
use crate::domain::orders::{Order, OrderStatus};

/// Repository port for Order aggregate persistence.
#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Save a new order.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn save(&self, order: &Order) -> Result<(), DomainError>;

    /// Find an order by its ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &OrderId) -> Result<Option<Order>, DomainError>;

    /// Atomically transition an order's status.
    ///
    /// The update only applies if the order currently has status `from`.
    /// Returns `true` if a row was updated, `false` if the order was not in
    /// the expected status (typically because an earlier webhook delivery
    /// already settled it).
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn transition_status(
        &self,
        id: &OrderId,
        from: OrderStatus,
        to: OrderStatus,
    ) -> Result<bool, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Trait object safety test
    #[test]
    fn order_store_is_object_safe() {
        fn _accepts_dyn(_store: &dyn OrderStore) {}
    }
}
