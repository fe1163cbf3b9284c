//! Axum router configuration for checkout endpoints.

use axum::{routing::post, Router};

use super::handlers::{create_donation_checkout, create_order_checkout, CheckoutAppState};

/// Create the checkout module router.
///
/// Both endpoints are public; the hosted payment page does the actual
/// collection, so there is nothing to protect here.
///
/// # Routes
///
/// - `POST /order` - Start an order checkout, returns `{url}`
/// - `POST /donation` - Start a donation checkout, returns `{url}`
pub fn checkout_router() -> Router<CheckoutAppState> {
    Router::new()
        .route("/order", post(create_order_checkout))
        .route("/donation", post(create_donation_checkout))
}
