//! HTTP DTOs (Data Transfer Objects) for the webhook endpoint.

use serde::Serialize;

/// Acknowledgment body returned for accepted webhook deliveries.
///
/// Returned both for processed events and for events the reconciler
/// deliberately ignores; the provider only cares about the 2xx status.
#[derive(Debug, Clone, Serialize)]
pub struct WebhookAck {
    pub received: bool,
}

impl WebhookAck {
    pub fn ok() -> Self {
        Self { received: true }
    }
}
