//! HTTP handlers for checkout endpoints.
//!
//! Both endpoints persist a pending record and return the provider's
//! hosted session URL. Settlement happens later, via the webhook.

use std::str::FromStr;
use std::sync::Arc;

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

use crate::adapters::http::error::ApiError;
use crate::application::handlers::checkout::{
    CreateDonationCheckoutCommand, CreateDonationCheckoutHandler, CreateOrderCheckoutCommand,
    CreateOrderCheckoutHandler, OrderItemRequest,
};
use crate::domain::foundation::{DomainError, ErrorCode, ProductId};
use crate::ports::{DonationStore, OrderStore, PaymentProvider, ProductRepository};

use super::dto::{CheckoutResponse, CreateDonationRequest, CreateOrderRequest};

/// Shared state for checkout handlers.
#[derive(Clone)]
pub struct CheckoutAppState {
    pub products: Arc<dyn ProductRepository>,
    pub orders: Arc<dyn OrderStore>,
    pub donations: Arc<dyn DonationStore>,
    pub payment_provider: Arc<dyn PaymentProvider>,
    pub frontend_url: String,
}

impl CheckoutAppState {
    /// Creates an order checkout handler.
    pub fn order_checkout_handler(&self) -> CreateOrderCheckoutHandler {
        CreateOrderCheckoutHandler::new(
            self.products.clone(),
            self.orders.clone(),
            self.payment_provider.clone(),
            self.frontend_url.clone(),
        )
    }

    /// Creates a donation checkout handler.
    pub fn donation_checkout_handler(&self) -> CreateDonationCheckoutHandler {
        CreateDonationCheckoutHandler::new(
            self.donations.clone(),
            self.payment_provider.clone(),
            self.frontend_url.clone(),
        )
    }
}

/// POST /checkout/order
///
/// Resolves prices from the catalog, creates a pending order, and
/// returns the hosted session URL.
pub async fn create_order_checkout(
    State(state): State<CheckoutAppState>,
    Json(request): Json<CreateOrderRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let mut items = Vec::with_capacity(request.items.len());
    for item in request.items {
        let product_id = ProductId::from_str(&item.id).map_err(|_| {
            DomainError::new(ErrorCode::InvalidFormat, "Invalid product ID")
                .with_detail("id", item.id.clone())
        })?;
        items.push(OrderItemRequest {
            product_id,
            quantity: item.quantity,
        });
    }

    let handler = state.order_checkout_handler();
    let result = handler.handle(CreateOrderCheckoutCommand { items }).await?;

    Ok(Json(CheckoutResponse {
        url: result.checkout_session.url,
    }))
}

/// POST /checkout/donation
///
/// Creates a pending donation and returns the hosted session URL.
pub async fn create_donation_checkout(
    State(state): State<CheckoutAppState>,
    Json(request): Json<CreateDonationRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let handler = state.donation_checkout_handler();
    let result = handler
        .handle(CreateDonationCheckoutCommand {
            amount_cents: request.amount_cents,
            donor_name: request.name,
            email: request.email,
            message: request.message,
        })
        .await?;

    Ok(Json(CheckoutResponse {
        url: result.checkout_session.url,
    }))
}
