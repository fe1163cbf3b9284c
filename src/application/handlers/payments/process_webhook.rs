//! ProcessWebhookHandler - Command handler for the Stripe webhook endpoint.
//!
//! Glue between the raw HTTP payload and the idempotent processing
//! pipeline: verify authenticity, then hand the parsed event to the
//! processor. All domain effects live in the session event handler.

use std::sync::Arc;

use crate::domain::payments::{
    CheckoutSessionEventHandler, HandlerRegistry, IdempotentWebhookProcessor, WebhookError,
    WebhookEventHandler,
};
use crate::ports::{DonationStore, OrderStore, PaymentProvider, WebhookEventLog, WebhookResult};

/// Command carrying the raw webhook delivery.
///
/// The payload must be the exact request bytes; the signature is
/// computed over them, so any re-serialization breaks verification.
#[derive(Debug, Clone)]
pub struct ProcessWebhookCommand {
    pub payload: Vec<u8>,
    pub signature: Option<String>,
}

/// Handler for processing payment provider webhooks.
pub struct ProcessWebhookHandler {
    payment_provider: Arc<dyn PaymentProvider>,
    processor: IdempotentWebhookProcessor,
}

impl ProcessWebhookHandler {
    pub fn new(
        payment_provider: Arc<dyn PaymentProvider>,
        event_log: Arc<dyn WebhookEventLog>,
        orders: Arc<dyn OrderStore>,
        donations: Arc<dyn DonationStore>,
    ) -> Self {
        let session_handler = Arc::new(CheckoutSessionEventHandler::new(orders, donations));
        let dispatcher = HandlerRegistry::new(vec![
            session_handler as Arc<dyn WebhookEventHandler>,
        ]);
        let processor = IdempotentWebhookProcessor::new(event_log, Arc::new(dispatcher));
        Self {
            payment_provider,
            processor,
        }
    }

    pub async fn handle(&self, cmd: ProcessWebhookCommand) -> Result<WebhookResult, WebhookError> {
        // 1. Verify signature and parse the event
        let event = self
            .payment_provider
            .verify_webhook(&cmd.payload, cmd.signature.as_deref())
            .await?;

        tracing::info!(
            event_id = %event.id,
            event_type = %event.event_type,
            livemode = event.livemode,
            "Processing webhook event"
        );

        // 2. Process with idempotency guarantees
        self.processor.process(event).await
    }
}
