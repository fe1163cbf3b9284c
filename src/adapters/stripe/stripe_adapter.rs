//! Stripe payment provider adapter.
//!
//! Implements the `PaymentProvider` trait against the Stripe REST API.
//! Checkout sessions are created in one-off `payment` mode with inline
//! `price_data`, so no prices need to be pre-registered in the Stripe
//! dashboard.
//!
//! # Security
//!
//! - Webhook signatures are verified with HMAC-SHA256 and constant-time
//!   comparison (see `StripeWebhookVerifier`)
//! - Secrets handled via `secrecy::SecretString`
//!
//! # Configuration
//!
//! ```ignore
//! let config = StripeConfig::new(api_key)
//!     .with_webhook_secret(webhook_secret)
//!     .with_currency("usd");
//! let adapter = StripePaymentAdapter::new(config);
//! ```

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use crate::domain::payments::{StripeEvent, StripeWebhookVerifier, WebhookError};
use crate::ports::{
    CheckoutSession, CreateSessionRequest, PaymentError, PaymentErrorCode, PaymentProvider,
};

/// Stripe API configuration.
#[derive(Clone)]
pub struct StripeConfig {
    /// Stripe secret API key (sk_live_... or sk_test_...).
    api_key: SecretString,

    /// Webhook signing secret (whsec_...). When absent, webhook payloads
    /// are parsed without signature verification, which is only
    /// acceptable for local development.
    webhook_secret: Option<SecretString>,

    /// Base URL for Stripe API (default: https://api.stripe.com).
    api_base_url: String,

    /// ISO currency code for checkout line items.
    currency: String,
}

impl StripeConfig {
    /// Create a new Stripe configuration.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: SecretString::new(api_key.into()),
            webhook_secret: None,
            api_base_url: "https://api.stripe.com".to_string(),
            currency: "usd".to_string(),
        }
    }

    /// Set the webhook signing secret.
    pub fn with_webhook_secret(mut self, secret: impl Into<String>) -> Self {
        self.webhook_secret = Some(SecretString::new(secret.into()));
        self
    }

    /// Set a custom API base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    /// Set the currency for checkout line items.
    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }
}

/// Stripe payment provider adapter.
///
/// Implements `PaymentProvider` for the Stripe API.
pub struct StripePaymentAdapter {
    config: StripeConfig,
    http_client: reqwest::Client,
    verifier: StripeWebhookVerifier,
}

impl StripePaymentAdapter {
    /// Create a new Stripe adapter with the given configuration.
    pub fn new(config: StripeConfig) -> Self {
        let verifier = match &config.webhook_secret {
            Some(secret) => StripeWebhookVerifier::new(secret.expose_secret().clone()),
            None => StripeWebhookVerifier::trusting(),
        };

        Self {
            config,
            http_client: reqwest::Client::new(),
            verifier,
        }
    }

    /// Build the form parameters for a checkout session.
    ///
    /// Line items use inline `price_data` so prices come from the stored
    /// catalog snapshot, never from a dashboard-registered price object.
    fn session_params(&self, request: &CreateSessionRequest) -> Vec<(String, String)> {
        let mut params = vec![("mode".to_string(), "payment".to_string())];

        for (i, item) in request.line_items.iter().enumerate() {
            params.push((
                format!("line_items[{}][price_data][currency]", i),
                self.config.currency.clone(),
            ));
            params.push((
                format!("line_items[{}][price_data][product_data][name]", i),
                item.name.clone(),
            ));
            params.push((
                format!("line_items[{}][price_data][unit_amount]", i),
                item.unit_amount_cents.to_string(),
            ));
            params.push((
                format!("line_items[{}][quantity]", i),
                item.quantity.to_string(),
            ));
        }

        params.push(("success_url".to_string(), request.success_url.clone()));
        params.push(("cancel_url".to_string(), request.cancel_url.clone()));

        for (key, value) in &request.metadata {
            params.push((format!("metadata[{}]", key), value.clone()));
        }

        params
    }
}

/// Stripe error response envelope.
#[derive(Debug, Deserialize)]
struct StripeErrorBody {
    error: StripeErrorDetail,
}

#[derive(Debug, Deserialize)]
struct StripeErrorDetail {
    code: Option<String>,
    message: Option<String>,
}

/// Map a non-success Stripe response to a `PaymentError`.
fn error_from_response(status: reqwest::StatusCode, body: &str) -> PaymentError {
    let detail = serde_json::from_str::<StripeErrorBody>(body)
        .ok()
        .map(|b| b.error);

    let message = detail
        .as_ref()
        .and_then(|d| d.message.clone())
        .unwrap_or_else(|| format!("Stripe API error: {}", body));

    let err = match status.as_u16() {
        400 => PaymentError::invalid_request(message),
        401 | 403 => PaymentError::authentication(message),
        404 => PaymentError::not_found(message),
        429 => PaymentError::new(PaymentErrorCode::RateLimitExceeded, message),
        _ => PaymentError::new(PaymentErrorCode::ProviderError, message),
    };

    match detail.and_then(|d| d.code) {
        Some(code) => err.with_provider_code(code),
        None => err,
    }
}

/// Checkout session fields we read back from Stripe.
#[derive(Debug, Deserialize)]
struct CheckoutSessionResponse {
    id: String,
    url: Option<String>,
    expires_at: Option<i64>,
}

#[async_trait]
impl PaymentProvider for StripePaymentAdapter {
    async fn create_checkout_session(
        &self,
        request: CreateSessionRequest,
    ) -> Result<CheckoutSession, PaymentError> {
        let url = format!("{}/v1/checkout/sessions", self.config.api_base_url);
        let params = self.session_params(&request);

        let response = self
            .http_client
            .post(&url)
            .basic_auth(self.config.api_key.expose_secret(), Option::<&str>::None)
            .form(&params)
            .send()
            .await
            .map_err(|e| PaymentError::network(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!(
                status = status.as_u16(),
                error = %error_text,
                "Stripe create_checkout_session failed"
            );
            return Err(error_from_response(status, &error_text));
        }

        let session: CheckoutSessionResponse = response.json().await.map_err(|e| {
            PaymentError::new(
                PaymentErrorCode::ProviderError,
                format!("Failed to parse Stripe response: {}", e),
            )
        })?;

        // Hosted checkout URL; Stripe omits it only for embedded UI modes.
        let checkout_url = session
            .url
            .unwrap_or_else(|| format!("https://checkout.stripe.com/c/pay/{}", &session.id));

        let expires_at = session
            .expires_at
            .and_then(|secs| chrono::DateTime::from_timestamp(secs, 0));

        Ok(CheckoutSession {
            id: session.id,
            url: checkout_url,
            expires_at,
        })
    }

    async fn verify_webhook(
        &self,
        payload: &[u8],
        signature: Option<&str>,
    ) -> Result<StripeEvent, WebhookError> {
        self.verifier.verify_and_parse(payload, signature)
    }
}
