//! HTTP handler for inbound payment provider webhooks.
//!
//! The body is consumed as raw bytes. Signature verification runs over
//! the exact bytes Stripe sent; extracting `Json<T>` here would
//! re-serialize and break it.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::adapters::http::error::ErrorResponse;
use crate::application::handlers::payments::{ProcessWebhookCommand, ProcessWebhookHandler};
use crate::domain::payments::WebhookError;
use crate::ports::{DonationStore, OrderStore, PaymentProvider, WebhookEventLog};

use super::dto::WebhookAck;

/// Shared state for the webhook handler.
#[derive(Clone)]
pub struct WebhookAppState {
    pub payment_provider: Arc<dyn PaymentProvider>,
    pub event_log: Arc<dyn WebhookEventLog>,
    pub orders: Arc<dyn OrderStore>,
    pub donations: Arc<dyn DonationStore>,
}

impl WebhookAppState {
    /// Creates a webhook processing handler.
    pub fn webhook_handler(&self) -> ProcessWebhookHandler {
        ProcessWebhookHandler::new(
            self.payment_provider.clone(),
            self.event_log.clone(),
            self.orders.clone(),
            self.donations.clone(),
        )
    }
}

/// POST /webhook
///
/// Verifies, parses, and reconciles a provider event. Replays and
/// unresolvable events are acknowledged with 200 so the provider stops
/// retrying; only transient store failures return 5xx.
pub async fn handle_webhook(
    State(state): State<WebhookAppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let signature = headers
        .get("Stripe-Signature")
        .and_then(|value| value.to_str().ok())
        .map(String::from);

    let handler = state.webhook_handler();
    let result = handler
        .handle(ProcessWebhookCommand {
            payload: body.to_vec(),
            signature,
        })
        .await;

    match result {
        Ok(_) => Json(WebhookAck::ok()).into_response(),
        Err(error) => webhook_error_response(error),
    }
}

fn webhook_error_response(error: WebhookError) -> Response {
    let status = error.status_code();

    // Ignored events get the same acknowledgment as processed ones.
    if status.is_success() {
        tracing::info!(reason = %error, "Webhook event acknowledged without processing");
        return Json(WebhookAck::ok()).into_response();
    }

    if status.is_server_error() {
        tracing::error!(error = %error, "Webhook processing failed; provider will retry");
    } else {
        tracing::warn!(error = %error, "Webhook delivery rejected");
    }

    let body = ErrorResponse::new(error.error_code(), error.to_string());
    (status, Json(body)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::donations::Donation;
    use crate::domain::foundation::{DomainError, DonationId, OrderId};
    use crate::domain::orders::Order;
    use crate::domain::payments::StripeEvent;
    use crate::ports::{
        CheckoutSession, CreateSessionRequest, PaymentError, SaveResult, WebhookEventRecord,
    };
    use async_trait::async_trait;
    use axum::http::StatusCode;
    use chrono::{DateTime, Utc};
    use std::sync::Mutex;

    struct RejectingProvider;

    #[async_trait]
    impl PaymentProvider for RejectingProvider {
        async fn create_checkout_session(
            &self,
            _request: CreateSessionRequest,
        ) -> Result<CheckoutSession, PaymentError> {
            Err(PaymentError::invalid_request("not used in this test"))
        }

        async fn verify_webhook(
            &self,
            _payload: &[u8],
            _signature: Option<&str>,
        ) -> Result<StripeEvent, WebhookError> {
            Err(WebhookError::InvalidSignature)
        }
    }

    struct EmptyEventLog;

    #[async_trait]
    impl WebhookEventLog for EmptyEventLog {
        async fn find_by_event_id(
            &self,
            _event_id: &str,
        ) -> Result<Option<WebhookEventRecord>, DomainError> {
            Ok(None)
        }

        async fn save(&self, _record: WebhookEventRecord) -> Result<SaveResult, DomainError> {
            Ok(SaveResult::Inserted)
        }

        async fn delete_before(&self, _cutoff: DateTime<Utc>) -> Result<u64, DomainError> {
            Ok(0)
        }
    }

    struct EmptyOrderStore;

    #[async_trait]
    impl OrderStore for EmptyOrderStore {
        async fn save(&self, _order: &Order) -> Result<(), DomainError> {
            Ok(())
        }

        async fn find_by_id(&self, _id: &OrderId) -> Result<Option<Order>, DomainError> {
            Ok(None)
        }

        async fn transition_status(
            &self,
            _id: &OrderId,
            _from: crate::domain::orders::OrderStatus,
            _to: crate::domain::orders::OrderStatus,
        ) -> Result<bool, DomainError> {
            Ok(false)
        }
    }

    struct EmptyDonationStore;

    #[async_trait]
    impl DonationStore for EmptyDonationStore {
        async fn save(&self, _donation: &Donation) -> Result<(), DomainError> {
            Ok(())
        }

        async fn find_by_id(&self, _id: &DonationId) -> Result<Option<Donation>, DomainError> {
            Ok(None)
        }

        async fn transition_status(
            &self,
            _id: &DonationId,
            _from: crate::domain::donations::DonationStatus,
            _to: crate::domain::donations::DonationStatus,
        ) -> Result<bool, DomainError> {
            Ok(false)
        }
    }

    fn test_state(provider: Arc<dyn PaymentProvider>) -> WebhookAppState {
        WebhookAppState {
            payment_provider: provider,
            event_log: Arc::new(EmptyEventLog),
            orders: Arc::new(EmptyOrderStore),
            donations: Arc::new(EmptyDonationStore),
        }
    }

    #[test]
    fn webhook_app_state_creates_handler() {
        let state = test_state(Arc::new(RejectingProvider));
        let _ = state.webhook_handler();
    }

    #[tokio::test]
    async fn handle_webhook_rejects_invalid_signature() {
        let state = test_state(Arc::new(RejectingProvider));
        let response = handle_webhook(
            State(state),
            HeaderMap::new(),
            Bytes::from_static(b"{}"),
        )
        .await;

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn ignored_error_is_acknowledged_as_success() {
        let response =
            webhook_error_response(WebhookError::Ignored("no order reference".to_string()));
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[test]
    fn database_error_returns_500() {
        let response =
            webhook_error_response(WebhookError::Database("connection refused".to_string()));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn parse_error_returns_400() {
        let response = webhook_error_response(WebhookError::ParseError("bad json".to_string()));
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
