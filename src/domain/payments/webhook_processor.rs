//! Webhook processor - Orchestrates idempotent webhook event handling.
//!
//! This module provides the coordination layer between verified Stripe
//! events and domain event handlers, ensuring each event takes effect
//! at most once despite at-least-once delivery.
//!
//! ## Design
//!
//! The processor follows these steps:
//! 1. Check the ledger for the event ID (fast-path dedup)
//! 2. Dispatch to the handler registered for the event type
//! 3. Record the outcome (success, ignored, or failed)
//!
//! Retryable failures (store unavailable) are NOT recorded: the provider
//! redelivers the event and the next attempt starts from a clean slate.
//! The conditional status update in the stores keeps the domain effect
//! at-most-once even across such redeliveries.
//!
//! ## Race Condition Handling
//!
//! When multiple deliveries of the same event arrive simultaneously:
//! - First to save wins (database PRIMARY KEY constraint)
//! - Others get `AlreadyExists` and return `AlreadyProcessed`

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::payments::{StripeEvent, StripeEventType, WebhookError};
use crate::ports::{SaveResult, WebhookEventLog, WebhookEventRecord, WebhookResult};

/// Handler for a specific type of Stripe webhook event.
///
/// Implementations should be stateless and focus on a related group of
/// event types. The handler receives the parsed event and performs the
/// necessary domain operations.
#[async_trait]
pub trait WebhookEventHandler: Send + Sync {
    /// Returns the event type(s) this handler processes.
    fn handles(&self) -> Vec<StripeEventType>;

    /// Handles the webhook event.
    ///
    /// Returns `Ok(())` on success.
    /// Returns `Err(WebhookError::Ignored(_))` if the event should be
    /// acknowledged but not acted on.
    /// Returns other `Err` variants for actual failures.
    async fn handle(&self, event: &StripeEvent) -> Result<(), WebhookError>;
}

/// Dispatches webhook events to the appropriate handler.
#[async_trait]
pub trait WebhookDispatcher: Send + Sync {
    /// Find a handler for the given event type.
    ///
    /// Returns `None` if no handler is registered for this event type.
    fn get_handler(&self, event_type: &StripeEventType) -> Option<&dyn WebhookEventHandler>;

    /// Dispatch an event to its handler.
    ///
    /// Returns `Err(WebhookError::Ignored)` if no handler is registered.
    async fn dispatch(&self, event: &StripeEvent) -> Result<(), WebhookError> {
        let event_type = event.parsed_type();
        match self.get_handler(&event_type) {
            Some(handler) => handler.handle(event).await,
            None => Err(WebhookError::Ignored(format!(
                "No handler for event type: {}",
                event.event_type
            ))),
        }
    }
}

/// Dispatcher backed by a static list of handlers.
///
/// Handlers are matched by the event types they declare via `handles()`.
/// The first matching handler wins.
pub struct HandlerRegistry {
    handlers: Vec<Arc<dyn WebhookEventHandler>>,
}

impl HandlerRegistry {
    pub fn new(handlers: Vec<Arc<dyn WebhookEventHandler>>) -> Self {
        Self { handlers }
    }
}

#[async_trait]
impl WebhookDispatcher for HandlerRegistry {
    fn get_handler(&self, event_type: &StripeEventType) -> Option<&dyn WebhookEventHandler> {
        self.handlers
            .iter()
            .find(|h| h.handles().contains(event_type))
            .map(|h| h.as_ref())
    }
}

/// Processes webhook events with idempotency guarantees.
///
/// This is the main entry point for webhook processing, shared by the
/// HTTP webhook endpoint. It coordinates the dedup ledger and the event
/// handlers.
pub struct IdempotentWebhookProcessor {
    log: Arc<dyn WebhookEventLog>,
    dispatcher: Arc<dyn WebhookDispatcher>,
}

impl IdempotentWebhookProcessor {
    /// Creates a new processor with the given ledger and dispatcher.
    pub fn new(log: Arc<dyn WebhookEventLog>, dispatcher: Arc<dyn WebhookDispatcher>) -> Self {
        Self { log, dispatcher }
    }

    /// Process a webhook event at most once.
    ///
    /// # Returns
    ///
    /// - `Ok(WebhookResult::Processed)` - Event was handled (or deliberately ignored)
    /// - `Ok(WebhookResult::AlreadyProcessed)` - Event was seen before (idempotent skip)
    /// - `Err(_)` - Processing failed; retryable failures leave no ledger entry
    pub async fn process(&self, event: StripeEvent) -> Result<WebhookResult, WebhookError> {
        // 1. Check if already processed
        if self.log.find_by_event_id(&event.id).await?.is_some() {
            return Ok(WebhookResult::AlreadyProcessed);
        }

        // 2. Dispatch to the event's handler. Retryable failures return
        //    immediately without a ledger entry so redelivery reprocesses.
        let outcome = match self.dispatcher.dispatch(&event).await {
            Err(e) if e.is_retryable() => return Err(e),
            other => other,
        };

        // 3. Build the ledger record from the outcome
        let payload = serde_json::to_value(&event)
            .map_err(|e| WebhookError::ParseError(format!("Failed to serialize event: {}", e)))?;
        let record = match &outcome {
            Ok(()) => WebhookEventRecord::success(&event.id, &event.event_type, payload),
            Err(WebhookError::Ignored(reason)) => {
                WebhookEventRecord::ignored(&event.id, &event.event_type, reason, payload)
            }
            Err(e) => {
                WebhookEventRecord::failed(&event.id, &event.event_type, e.to_string(), payload)
            }
        };

        // 4. Save the record. The PRIMARY KEY constraint decides races.
        match self.log.save(record).await? {
            SaveResult::Inserted => match outcome {
                Ok(()) => Ok(WebhookResult::Processed),
                // Ignored events are still "processed" from the
                // idempotency perspective
                Err(WebhookError::Ignored(_)) => Ok(WebhookResult::Processed),
                Err(e) => Err(e),
            },
            SaveResult::AlreadyExists => {
                // Lost the race, another delivery already handled it
                Ok(WebhookResult::AlreadyProcessed)
            }
        }
    }
}
