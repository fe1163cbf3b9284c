//! Axum router configuration for the webhook endpoint.

use axum::{routing::post, Router};

use super::handlers::{handle_webhook, WebhookAppState};

/// Create the webhook router.
///
/// Separate from the other modules because the endpoint has no user
/// authentication; trust comes from the signature over the raw body.
///
/// # Routes
///
/// - `POST /webhook` - Receive a payment provider event
pub fn webhook_router() -> Router<WebhookAppState> {
    Router::new().route("/webhook", post(handle_webhook))
}
