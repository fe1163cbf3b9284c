//! PaymentProvider port - Interface for payment processing operations.
//!
//! This port abstracts the payment provider (Stripe) so checkout handlers
//! depend on a trait rather than a concrete HTTP client. Handlers build a
//! session request, the adapter talks to the provider, and the returned
//! session URL is handed back to the storefront for redirect.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::payments::{StripeEvent, WebhookError};

/// A single line item on a checkout session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutLineItem {
    /// Display name shown on the provider's hosted page.
    pub name: String,

    /// Unit price in the smallest currency unit (cents).
    pub unit_amount_cents: i64,

    /// Number of units.
    pub quantity: u32,
}

/// Request to create a hosted checkout session.
#[derive(Debug, Clone)]
pub struct CreateSessionRequest {
    /// Line items to charge for.
    pub line_items: Vec<CheckoutLineItem>,

    /// Metadata attached to the session, echoed back in webhooks.
    /// Used to correlate sessions with orders/donations (e.g., "orderId").
    pub metadata: Vec<(String, String)>,

    /// Where the provider redirects after successful payment.
    pub success_url: String,

    /// Where the provider redirects if the customer cancels.
    pub cancel_url: String,
}

/// A hosted checkout session returned by the provider.
#[derive(Debug, Clone)]
pub struct CheckoutSession {
    /// Provider session ID (cs_xxx format for Stripe).
    pub id: String,

    /// URL to redirect the customer to for payment.
    pub url: String,

    /// When the session expires.
    pub expires_at: Option<DateTime<Utc>>,
}

/// Categorized payment provider errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaymentErrorCode {
    /// Network or connectivity issue. Retryable.
    NetworkError,
    /// Provider rejected our API credentials.
    AuthenticationError,
    /// The request was malformed or referenced missing data.
    InvalidRequest,
    /// The referenced provider resource does not exist.
    NotFound,
    /// Provider rate limit hit. Retryable after backoff.
    RateLimitExceeded,
    /// Provider-side failure (5xx). Retryable.
    ProviderError,
    /// Unrecognized error.
    Unknown,
}

impl PaymentErrorCode {
    /// Whether this error is worth retrying.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            PaymentErrorCode::NetworkError
                | PaymentErrorCode::RateLimitExceeded
                | PaymentErrorCode::ProviderError
        )
    }
}

impl std::fmt::Display for PaymentErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            PaymentErrorCode::NetworkError => "network_error",
            PaymentErrorCode::AuthenticationError => "authentication_error",
            PaymentErrorCode::InvalidRequest => "invalid_request",
            PaymentErrorCode::NotFound => "not_found",
            PaymentErrorCode::RateLimitExceeded => "rate_limit_exceeded",
            PaymentErrorCode::ProviderError => "provider_error",
            PaymentErrorCode::Unknown => "unknown",
        };
        write!(f, "{}", s)
    }
}

/// Error from a payment provider operation.
#[derive(Debug, Clone)]
pub struct PaymentError {
    /// Categorized error code.
    pub code: PaymentErrorCode,

    /// Human-readable error message.
    pub message: String,

    /// Raw error code from the provider, if available.
    pub provider_code: Option<String>,

    /// Whether the operation can be retried.
    pub retryable: bool,
}

impl PaymentError {
    /// Creates a new payment error.
    pub fn new(code: PaymentErrorCode, message: impl Into<String>) -> Self {
        let retryable = code.is_retryable();
        Self {
            code,
            message: message.into(),
            provider_code: None,
            retryable,
        }
    }

    /// Attaches the provider's raw error code.
    pub fn with_provider_code(mut self, provider_code: impl Into<String>) -> Self {
        self.provider_code = Some(provider_code.into());
        self
    }

    /// Creates a network error (retryable).
    pub fn network(message: impl Into<String>) -> Self {
        Self::new(PaymentErrorCode::NetworkError, message)
    }

    /// Creates an authentication error.
    pub fn authentication(message: impl Into<String>) -> Self {
        Self::new(PaymentErrorCode::AuthenticationError, message)
    }

    /// Creates an invalid request error.
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(PaymentErrorCode::InvalidRequest, message)
    }

    /// Creates a not found error.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(PaymentErrorCode::NotFound, message)
    }
}

impl std::fmt::Display for PaymentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if let Some(provider_code) = &self.provider_code {
            write!(f, " (provider: {})", provider_code)?;
        }
        Ok(())
    }
}

impl std::error::Error for PaymentError {}

impl From<PaymentError> for DomainError {
    fn from(err: PaymentError) -> Self {
        DomainError::new(
            ErrorCode::PaymentProviderError,
            format!("Payment provider error: {}", err),
        )
        .with_detail("provider_error_code", err.code.to_string())
        .with_detail("retryable", err.retryable.to_string())
    }
}

/// Port for payment provider operations.
#[async_trait]
pub trait PaymentProvider: Send + Sync {
    /// Create a hosted checkout session.
    ///
    /// The customer is redirected to the returned URL to complete payment.
    /// Fulfillment happens via webhook, never on redirect.
    async fn create_checkout_session(
        &self,
        request: CreateSessionRequest,
    ) -> Result<CheckoutSession, PaymentError>;

    /// Verify a webhook payload's signature and parse the event.
    ///
    /// `signature` is the raw `Stripe-Signature` header value, if present.
    /// Implementations without a configured signing secret parse the
    /// payload without verification (development mode only).
    async fn verify_webhook(
        &self,
        payload: &[u8],
        signature: Option<&str>,
    ) -> Result<StripeEvent, WebhookError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn network_error_is_retryable() {
        let err = PaymentError::network("Connection timeout");

        assert_eq!(err.code, PaymentErrorCode::NetworkError);
        assert!(err.retryable);
    }

    #[test]
    fn authentication_error_is_not_retryable() {
        let err = PaymentError::authentication("Invalid API key");

        assert_eq!(err.code, PaymentErrorCode::AuthenticationError);
        assert!(!err.retryable);
    }

    #[test]
    fn invalid_request_is_not_retryable() {
        let err = PaymentError::invalid_request("Missing line items");

        assert!(!err.retryable);
    }

    #[test]
    fn rate_limit_is_retryable() {
        let err = PaymentError::new(PaymentErrorCode::RateLimitExceeded, "Too many requests");

        assert!(err.retryable);
    }

    #[test]
    fn display_includes_provider_code_when_present() {
        let err = PaymentError::invalid_request("Bad amount").with_provider_code("amount_too_small");

        let display = err.to_string();

        assert!(display.contains("invalid_request"));
        assert!(display.contains("Bad amount"));
        assert!(display.contains("amount_too_small"));
    }

    #[test]
    fn converts_to_domain_error_with_details() {
        let err = PaymentError::network("Connection refused");

        let domain_err: DomainError = err.into();

        assert_eq!(domain_err.code, ErrorCode::PaymentProviderError);
        assert_eq!(
            domain_err.details.get("provider_error_code"),
            Some(&"network_error".to_string())
        );
        assert_eq!(
            domain_err.details.get("retryable"),
            Some(&"true".to_string())
        );
    }
}
