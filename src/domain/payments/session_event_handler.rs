//! Checkout session event handler - Applies session outcomes to orders and donations.
//!
//! This is the business end of webhook processing: a verified
//! `checkout.session.*` event is resolved to the order or donation named
//! in its metadata and the matching status transition is applied.
//!
//! ## Resolution Rules
//!
//! - `metadata.orderId` wins over `metadata.donationId` when both exist
//! - Missing, malformed, or dangling references are ignored, never failed:
//!   the provider must still receive an acknowledgment or it will retry
//!   an event we can never act on
//!
//! ## Transition Rules
//!
//! - `checkout.session.completed` settles orders to `paid` and donations
//!   to `received`
//! - Expiration and async payment failure settle orders to `failed`;
//!   donations have no failure state and simply stay `pending`
//! - A conditional update that affects zero rows means an earlier
//!   delivery already settled the record. That is a success, not an error.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::donations::DonationStatus;
use crate::domain::foundation::{DonationId, OrderId};
use crate::domain::orders::OrderStatus;
use crate::domain::payments::webhook_processor::WebhookEventHandler;
use crate::domain::payments::{StripeEvent, StripeEventType, WebhookError};
use crate::ports::{DonationStore, OrderStore};

/// Handles `checkout.session.*` events for orders and donations.
pub struct CheckoutSessionEventHandler {
    orders: Arc<dyn OrderStore>,
    donations: Arc<dyn DonationStore>,
}

impl CheckoutSessionEventHandler {
    pub fn new(orders: Arc<dyn OrderStore>, donations: Arc<dyn DonationStore>) -> Self {
        Self { orders, donations }
    }

    async fn settle_order(&self, event: &StripeEvent, id: OrderId) -> Result<(), WebhookError> {
        let target = if event.parsed_type().is_checkout_failure() {
            OrderStatus::Failed
        } else {
            OrderStatus::Paid
        };

        if self.orders.find_by_id(&id).await?.is_none() {
            return Err(WebhookError::Ignored(format!(
                "No order found for orderId {}",
                id
            )));
        }

        let updated = self
            .orders
            .transition_status(&id, OrderStatus::Pending, target)
            .await?;

        if updated {
            tracing::info!(order_id = %id, status = ?target, "Order settled from checkout session event");
        } else {
            tracing::info!(order_id = %id, "Order no longer pending; event already handled");
        }
        Ok(())
    }

    async fn settle_donation(
        &self,
        event: &StripeEvent,
        id: DonationId,
    ) -> Result<(), WebhookError> {
        if event.parsed_type().is_checkout_failure() {
            // No failure state to transition to; the row stays pending
            // and never shows up as received.
            return Err(WebhookError::Ignored(format!(
                "Donation {} checkout did not complete; leaving pending",
                id
            )));
        }

        if self.donations.find_by_id(&id).await?.is_none() {
            return Err(WebhookError::Ignored(format!(
                "No donation found for donationId {}",
                id
            )));
        }

        let updated = self
            .donations
            .transition_status(&id, DonationStatus::Pending, DonationStatus::Received)
            .await?;

        if updated {
            tracing::info!(donation_id = %id, "Donation marked received");
        } else {
            tracing::info!(donation_id = %id, "Donation no longer pending; event already handled");
        }
        Ok(())
    }
}

#[async_trait]
impl WebhookEventHandler for CheckoutSessionEventHandler {
    fn handles(&self) -> Vec<StripeEventType> {
        vec![
            StripeEventType::CheckoutSessionCompleted,
            StripeEventType::CheckoutSessionExpired,
            StripeEventType::CheckoutSessionAsyncPaymentFailed,
        ]
    }

    async fn handle(&self, event: &StripeEvent) -> Result<(), WebhookError> {
        if let Some(raw) = event.metadata_str("orderId") {
            let id = raw.parse::<OrderId>().map_err(|_| {
                WebhookError::Ignored(format!("orderId metadata is not a valid UUID: {}", raw))
            })?;
            return self.settle_order(event, id).await;
        }

        if let Some(raw) = event.metadata_str("donationId") {
            let id = raw.parse::<DonationId>().map_err(|_| {
                WebhookError::Ignored(format!("donationId metadata is not a valid UUID: {}", raw))
            })?;
            return self.settle_donation(event, id).await;
        }

        Err(WebhookError::Ignored(
            "Session carries no orderId or donationId metadata".to_string(),
        ))
    }
}
