//! Payment configuration

use serde::Deserialize;

use super::error::ValidationError;
use super::server::Environment;

/// Payment configuration (Stripe)
#[derive(Debug, Clone, Deserialize)]
pub struct PaymentConfig {
    /// Stripe secret API key
    pub stripe_api_key: String,

    /// Stripe webhook signing secret. Empty means signature verification
    /// is disabled and webhook payloads are trusted as-is, which is only
    /// acceptable for local development against the Stripe CLI.
    #[serde(default)]
    pub stripe_webhook_secret: String,

    /// Base URL of the storefront, used to build checkout redirect URLs
    #[serde(default = "default_frontend_url")]
    pub frontend_url: String,

    /// ISO 4217 currency code for checkout sessions
    #[serde(default = "default_currency")]
    pub currency: String,
}

impl PaymentConfig {
    /// Check if using Stripe test mode
    pub fn is_test_mode(&self) -> bool {
        self.stripe_api_key.starts_with("sk_test_")
    }

    /// Check if using Stripe live mode
    pub fn is_live_mode(&self) -> bool {
        self.stripe_api_key.starts_with("sk_live_")
    }

    /// Webhook secret, or None when verification is disabled
    pub fn webhook_secret(&self) -> Option<&str> {
        if self.stripe_webhook_secret.is_empty() {
            None
        } else {
            Some(&self.stripe_webhook_secret)
        }
    }

    /// Validate payment configuration
    pub fn validate(&self, environment: &Environment) -> Result<(), ValidationError> {
        if self.stripe_api_key.is_empty() {
            return Err(ValidationError::MissingRequired("STRIPE_API_KEY"));
        }

        // Verify key prefixes for safety
        if !self.stripe_api_key.starts_with("sk_") {
            return Err(ValidationError::InvalidStripeKey);
        }
        if self.stripe_webhook_secret.is_empty() {
            if matches!(environment, Environment::Production) {
                return Err(ValidationError::WebhookSecretRequiredInProduction);
            }
        } else if !self.stripe_webhook_secret.starts_with("whsec_") {
            return Err(ValidationError::InvalidStripeWebhookSecret);
        }

        if !self.frontend_url.starts_with("http://") && !self.frontend_url.starts_with("https://") {
            return Err(ValidationError::InvalidFrontendUrl);
        }
        if self.currency.len() != 3 || !self.currency.chars().all(|c| c.is_ascii_lowercase()) {
            return Err(ValidationError::InvalidCurrency);
        }

        Ok(())
    }
}

impl Default for PaymentConfig {
    fn default() -> Self {
        Self {
            stripe_api_key: String::new(),
            stripe_webhook_secret: String::new(),
            frontend_url: default_frontend_url(),
            currency: default_currency(),
        }
    }
}

fn default_frontend_url() -> String {
    "http://localhost:3000".to_string()
}

fn default_currency() -> String {
    "usd".to_string()
}
