//! Checkout handlers.
//!
//! Command handlers that initiate hosted checkout sessions:
//!
//! - Order checkout: catalog-priced line items, settled via webhook
//! - Donation checkout: donor-chosen amount, settled via webhook

mod create_donation_checkout;
mod create_order_checkout;

pub use create_donation_checkout::{
    CreateDonationCheckoutCommand, CreateDonationCheckoutHandler, CreateDonationCheckoutResult,
};
pub use create_order_checkout::{
    CreateOrderCheckoutCommand, CreateOrderCheckoutHandler, CreateOrderCheckoutResult,
    OrderItemRequest,
};
