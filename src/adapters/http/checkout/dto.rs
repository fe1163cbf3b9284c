//! HTTP DTOs (Data Transfer Objects) for checkout endpoints.
//!
//! Clients submit product references and quantities only; prices are
//! resolved server-side from the catalog.

use serde::{Deserialize, Serialize};

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// A single requested cart line.
#[derive(Debug, Clone, Deserialize)]
pub struct OrderItemDto {
    /// Product ID (UUID string).
    pub id: String,
    /// How many units.
    pub quantity: u32,
}

/// Request to start an order checkout.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateOrderRequest {
    pub items: Vec<OrderItemDto>,
}

/// Request to start a donation checkout.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateDonationRequest {
    /// Amount in cents; must be positive.
    pub amount_cents: i64,
    /// Donor display name.
    #[serde(default)]
    pub name: Option<String>,
    /// Contact email.
    #[serde(default)]
    pub email: Option<String>,
    /// Free-text message from the donor.
    #[serde(default)]
    pub message: Option<String>,
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Response carrying the hosted checkout redirect URL.
#[derive(Debug, Clone, Serialize)]
pub struct CheckoutResponse {
    /// Provider-hosted payment page; the client redirects here.
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_order_request_deserializes() {
        let json = r#"{
            "items": [
                {"id": "550e8400-e29b-41d4-a716-446655440000", "quantity": 2},
                {"id": "650e8400-e29b-41d4-a716-446655440001", "quantity": 1}
            ]
        }"#;
        let request: CreateOrderRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.items.len(), 2);
        assert_eq!(request.items[0].quantity, 2);
    }

    #[test]
    fn create_donation_request_deserializes_minimal_body() {
        let json = r#"{"amount_cents": 2500}"#;
        let request: CreateDonationRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.amount_cents, 2500);
        assert!(request.name.is_none());
        assert!(request.email.is_none());
        assert!(request.message.is_none());
    }

    #[test]
    fn create_donation_request_deserializes_full_body() {
        let json = r#"{
            "amount_cents": 5000,
            "name": "Ada",
            "email": "ada@example.com",
            "message": "Keep it up"
        }"#;
        let request: CreateDonationRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.name.as_deref(), Some("Ada"));
        assert_eq!(request.message.as_deref(), Some("Keep it up"));
    }

    #[test]
    fn checkout_response_serializes() {
        let response = CheckoutResponse {
            url: "https://checkout.stripe.com/c/pay/cs_test_123".to_string(),
        };
        let json = serde_json::to_string(&response).unwrap();
        assert_eq!(json, r#"{"url":"https://checkout.stripe.com/c/pay/cs_test_123"}"#);
    }
}
