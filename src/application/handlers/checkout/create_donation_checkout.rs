//! CreateDonationCheckoutHandler - Command handler for initiating a donation checkout.

use std::sync::Arc;

use crate::domain::donations::Donation;
use crate::domain::foundation::{DomainError, DonationId, ErrorCode};
use crate::ports::{
    CheckoutLineItem, CheckoutSession, CreateSessionRequest, DonationStore, PaymentProvider,
};

/// Command to start a donation checkout.
#[derive(Debug, Clone)]
pub struct CreateDonationCheckoutCommand {
    pub amount_cents: i64,
    pub donor_name: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
}

/// Result of successful checkout initiation.
#[derive(Debug, Clone)]
pub struct CreateDonationCheckoutResult {
    pub donation: Donation,
    pub checkout_session: CheckoutSession,
}

/// Handler for initiating donation checkout.
///
/// The donation is persisted as `pending` before the session is created
/// and marked `received` only by the completion webhook.
pub struct CreateDonationCheckoutHandler {
    donations: Arc<dyn DonationStore>,
    payment_provider: Arc<dyn PaymentProvider>,
    frontend_url: String,
}

impl CreateDonationCheckoutHandler {
    pub fn new(
        donations: Arc<dyn DonationStore>,
        payment_provider: Arc<dyn PaymentProvider>,
        frontend_url: String,
    ) -> Self {
        Self {
            donations,
            payment_provider,
            frontend_url,
        }
    }

    pub async fn handle(
        &self,
        cmd: CreateDonationCheckoutCommand,
    ) -> Result<CreateDonationCheckoutResult, DomainError> {
        // 1. Amount must be positive; the donor chooses it freely
        if cmd.amount_cents <= 0 {
            return Err(DomainError::new(
                ErrorCode::InvalidAmount,
                "Donation amount must be positive",
            ));
        }

        // 2. Create the pending donation
        let donation = Donation::create(
            DonationId::new(),
            cmd.amount_cents,
            cmd.donor_name,
            cmd.email,
            cmd.message,
        )?;

        // 3. Persist before talking to the provider
        self.donations.save(&donation).await?;

        // 4. Create the hosted checkout session with a single line item
        let checkout_session = self
            .payment_provider
            .create_checkout_session(CreateSessionRequest {
                line_items: vec![CheckoutLineItem {
                    name: "Donation".to_string(),
                    unit_amount_cents: donation.amount_cents,
                    quantity: 1,
                }],
                metadata: vec![("donationId".to_string(), donation.id.to_string())],
                success_url: format!("{}?donation=success", self.frontend_url),
                cancel_url: format!("{}?donation=cancel", self.frontend_url),
            })
            .await?;

        Ok(CreateDonationCheckoutResult {
            donation,
            checkout_session,
        })
    }
}
