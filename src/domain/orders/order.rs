//! Order aggregate entity.
//!
//! An Order captures what a customer agreed to buy at checkout time.
//! Line items are a snapshot of catalog data: later price or title edits
//! to a product never change what an existing order shows.
//!
//! # Design Decisions
//!
//! - **Money in cents**: All monetary values stored as i64 cents (not floats)
//! - **Prices from the catalog**: Totals are computed from stored unit prices,
//!   never from client input
//! - **Single transition**: Status moves from pending to exactly one terminal
//!   state via the conditional store update

use crate::domain::foundation::{
    DomainError, ErrorCode, OrderId, ProductId, Timestamp, ValidationError,
};
use serde::{Deserialize, Serialize};

use super::OrderStatus;

/// A single line of an order: one product at the unit price it had
/// when the checkout session was created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    /// Product this line refers to.
    pub product_id: ProductId,

    /// Product title at checkout time.
    pub title: String,

    /// Unit price in cents at checkout time.
    pub unit_price_cents: i64,

    /// Number of units, at least 1.
    pub quantity: u32,
}

impl OrderItem {
    /// Creates a validated order line.
    ///
    /// # Errors
    ///
    /// Returns error if the title is empty, the unit price is negative,
    /// or the quantity is zero.
    pub fn new(
        product_id: ProductId,
        title: impl Into<String>,
        unit_price_cents: i64,
        quantity: u32,
    ) -> Result<Self, ValidationError> {
        let title = title.into();
        if title.is_empty() {
            return Err(ValidationError::empty_field("title"));
        }
        if unit_price_cents < 0 {
            return Err(ValidationError::invalid_format(
                "unit_price_cents",
                "must not be negative",
            ));
        }
        if quantity == 0 {
            return Err(ValidationError::out_of_range(
                "quantity",
                1,
                i64::from(u32::MAX),
                0,
            ));
        }
        Ok(Self {
            product_id,
            title,
            unit_price_cents,
            quantity,
        })
    }

    /// Line total in cents.
    pub fn line_total_cents(&self) -> i64 {
        self.unit_price_cents * i64::from(self.quantity)
    }
}

/// Order aggregate - a customer purchase awaiting or past payment.
///
/// # Invariants
///
/// - `items` is non-empty and immutable after creation
/// - `total_cents` equals the sum of all line totals
/// - Status transitions follow the `OrderStatus` state machine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    /// Unique identifier for this order.
    pub id: OrderId,

    /// Snapshot of purchased lines.
    pub items: Vec<OrderItem>,

    /// Sum of line totals in cents.
    pub total_cents: i64,

    /// Current status in the payment lifecycle.
    pub status: OrderStatus,

    /// When the order was created.
    pub created_at: Timestamp,
}

impl Order {
    /// Creates a new pending order from resolved line items.
    ///
    /// The total is computed here from the snapshot, so a tampered or
    /// stale client total can never enter the system.
    ///
    /// # Errors
    ///
    /// Returns error if `items` is empty.
    pub fn create(id: OrderId, items: Vec<OrderItem>) -> Result<Self, ValidationError> {
        if items.is_empty() {
            return Err(ValidationError::empty_field("items"));
        }
        let total_cents = items.iter().map(OrderItem::line_total_cents).sum();
        Ok(Self {
            id,
            items,
            total_cents,
            status: OrderStatus::Pending,
            created_at: Timestamp::now(),
        })
    }

    /// Marks the order paid after confirmed payment.
    ///
    /// # Errors
    ///
    /// Returns error if the order is not pending.
    pub fn mark_paid(&mut self) -> Result<(), DomainError> {
        self.transition_to(OrderStatus::Paid)
    }

    /// Marks the order failed after a failed or expired checkout.
    ///
    /// # Errors
    ///
    /// Returns error if the order is not pending.
    pub fn mark_failed(&mut self) -> Result<(), DomainError> {
        self.transition_to(OrderStatus::Failed)
    }

    /// Cancels a pending order.
    ///
    /// # Errors
    ///
    /// Returns error if the order is not pending.
    pub fn cancel(&mut self) -> Result<(), DomainError> {
        self.transition_to(OrderStatus::Canceled)
    }

    /// Transition to a new status using the state machine.
    fn transition_to(&mut self, target: OrderStatus) -> Result<(), DomainError> {
        use crate::domain::foundation::StateMachine;

        self.status = self.status.transition_to(target).map_err(|_| {
            DomainError::new(
                ErrorCode::InvalidStateTransition,
                format!("Cannot transition order from {:?} to {:?}", self.status, target),
            )
        })?;
        Ok(())
    }
}
