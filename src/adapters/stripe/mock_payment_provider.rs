//! Mock payment provider for testing.
//!
//! Provides a configurable mock implementation of `PaymentProvider` for unit
//! and integration tests. Supports:
//! - Pre-configured checkout sessions
//! - Error injection
//! - Call tracking and request capture
//! - Webhook event simulation

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::domain::payments::{StripeEvent, WebhookError};
use crate::ports::{
    CheckoutSession, CreateSessionRequest, PaymentError, PaymentProvider,
};

/// Mock payment provider for testing.
///
/// # Example
///
/// ```ignore
/// let mock = MockPaymentProvider::new();
///
/// // Configure responses
/// mock.set_checkout_session(CheckoutSession { id: "cs_123".into(), ... });
///
/// // Inject errors
/// mock.set_error(PaymentError::network("Test outage"));
///
/// // Use in tests
/// let result = mock.create_checkout_session(request).await;
/// ```
#[derive(Default)]
pub struct MockPaymentProvider {
    /// Inner state (thread-safe for async tests).
    inner: Arc<Mutex<MockState>>,
}

/// Internal mutable state.
#[derive(Default)]
struct MockState {
    /// Next checkout session to return.
    next_session: Option<CheckoutSession>,

    /// Error to return on next `create_checkout_session` call.
    next_error: Option<PaymentError>,

    /// Event to return on webhook verification, bypassing payload parsing.
    next_event: Option<StripeEvent>,

    /// When set, all webhook verifications fail.
    reject_webhooks: bool,

    /// Captured checkout session requests for assertions.
    session_requests: Vec<CreateSessionRequest>,

    /// Track method calls for assertions.
    call_log: Vec<MethodCall>,
}

/// Recorded method call for assertions.
#[derive(Debug, Clone)]
pub struct MethodCall {
    pub method: String,
    pub args: Vec<String>,
}

impl MockPaymentProvider {
    /// Create a new mock provider with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock that fails all webhook verifications.
    pub fn rejecting_webhooks() -> Self {
        let mock = Self::new();
        mock.inner.lock().unwrap().reject_webhooks = true;
        mock
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Configuration Methods
    // ════════════════════════════════════════════════════════════════════════════

    /// Set the checkout session to return on the next create call.
    pub fn set_checkout_session(&self, session: CheckoutSession) {
        self.inner.lock().unwrap().next_session = Some(session);
    }

    /// Set an error to return on the next create call (consumed once).
    pub fn set_error(&self, error: PaymentError) {
        self.inner.lock().unwrap().next_error = Some(error);
    }

    /// Set the event to return on webhook verification.
    ///
    /// When unset, the mock parses the raw payload the way the trusting
    /// verifier would.
    pub fn set_webhook_event(&self, event: StripeEvent) {
        self.inner.lock().unwrap().next_event = Some(event);
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Call Tracking
    // ════════════════════════════════════════════════════════════════════════════

    /// Get all recorded method calls.
    pub fn calls(&self) -> Vec<MethodCall> {
        self.inner.lock().unwrap().call_log.clone()
    }

    /// Get count of calls to a method.
    pub fn call_count(&self, method: &str) -> usize {
        self.inner
            .lock()
            .unwrap()
            .call_log
            .iter()
            .filter(|c| c.method == method)
            .count()
    }

    /// Get the captured checkout session requests.
    pub fn session_requests(&self) -> Vec<CreateSessionRequest> {
        self.inner.lock().unwrap().session_requests.clone()
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Internal Helpers
    // ════════════════════════════════════════════════════════════════════════════

    fn record_call(&self, method: &str, args: Vec<String>) {
        self.inner.lock().unwrap().call_log.push(MethodCall {
            method: method.to_string(),
            args,
        });
    }

    fn default_session() -> CheckoutSession {
        CheckoutSession {
            id: "cs_test_mock".to_string(),
            url: "https://checkout.stripe.com/c/pay/cs_test_mock".to_string(),
            expires_at: None,
        }
    }
}

impl Clone for MockPaymentProvider {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

#[async_trait]
impl PaymentProvider for MockPaymentProvider {
    async fn create_checkout_session(
        &self,
        request: CreateSessionRequest,
    ) -> Result<CheckoutSession, PaymentError> {
        self.record_call(
            "create_checkout_session",
            vec![request.success_url.clone()],
        );

        let mut state = self.inner.lock().unwrap();
        state.session_requests.push(request);

        if let Some(error) = state.next_error.take() {
            return Err(error);
        }

        Ok(state
            .next_session
            .take()
            .unwrap_or_else(Self::default_session))
    }

    async fn verify_webhook(
        &self,
        payload: &[u8],
        signature: Option<&str>,
    ) -> Result<StripeEvent, WebhookError> {
        self.record_call(
            "verify_webhook",
            vec![signature.unwrap_or("<none>").to_string()],
        );

        let state = self.inner.lock().unwrap();

        if state.reject_webhooks {
            return Err(WebhookError::InvalidSignature);
        }

        if let Some(event) = &state.next_event {
            return Ok(event.clone());
        }

        serde_json::from_slice(payload).map_err(|e| WebhookError::ParseError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::CheckoutLineItem;

    fn sample_request() -> CreateSessionRequest {
        CreateSessionRequest {
            line_items: vec![CheckoutLineItem {
                name: "Ceramic mug".to_string(),
                unit_amount_cents: 1800,
                quantity: 1,
            }],
            metadata: vec![("orderId".to_string(), "abc".to_string())],
            success_url: "https://shop.example.com?checkout=success".to_string(),
            cancel_url: "https://shop.example.com?checkout=cancel".to_string(),
        }
    }

    #[tokio::test]
    async fn returns_default_session_when_unconfigured() {
        let mock = MockPaymentProvider::new();

        let session = mock.create_checkout_session(sample_request()).await.unwrap();

        assert_eq!(session.id, "cs_test_mock");
        assert!(session.url.contains("checkout.stripe.com"));
    }

    #[tokio::test]
    async fn returns_configured_session() {
        let mock = MockPaymentProvider::new();
        mock.set_checkout_session(CheckoutSession {
            id: "cs_custom".to_string(),
            url: "https://example.com/pay".to_string(),
            expires_at: None,
        });

        let session = mock.create_checkout_session(sample_request()).await.unwrap();

        assert_eq!(session.id, "cs_custom");
    }

    #[tokio::test]
    async fn injected_error_is_consumed_once() {
        let mock = MockPaymentProvider::new();
        mock.set_error(PaymentError::network("Test outage"));

        let first = mock.create_checkout_session(sample_request()).await;
        let second = mock.create_checkout_session(sample_request()).await;

        assert!(first.is_err());
        assert!(second.is_ok());
    }

    #[tokio::test]
    async fn captures_session_requests() {
        let mock = MockPaymentProvider::new();
        mock.create_checkout_session(sample_request()).await.unwrap();

        let requests = mock.session_requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].metadata[0].1, "abc");
        assert_eq!(mock.call_count("create_checkout_session"), 1);
    }

    #[tokio::test]
    async fn rejecting_mock_fails_verification() {
        let mock = MockPaymentProvider::rejecting_webhooks();

        let result = mock.verify_webhook(b"{}", Some("t=1,v1=abc")).await;

        assert!(matches!(result, Err(WebhookError::InvalidSignature)));
    }

    #[tokio::test]
    async fn verify_parses_raw_payload() {
        let mock = MockPaymentProvider::new();
        let payload = br#"{
            "id": "evt_mock_1",
            "type": "checkout.session.completed",
            "created": 1700000000,
            "livemode": false,
            "data": {"object": {"metadata": {"orderId": "xyz"}}}
        }"#;

        let event = mock.verify_webhook(payload, None).await.unwrap();

        assert_eq!(event.id, "evt_mock_1");
        assert_eq!(event.metadata_str("orderId"), Some("xyz"));
    }

    #[tokio::test]
    async fn verify_rejects_malformed_payload() {
        let mock = MockPaymentProvider::new();

        let result = mock.verify_webhook(b"not json", None).await;

        assert!(matches!(result, Err(WebhookError::ParseError(_))));
    }
}
