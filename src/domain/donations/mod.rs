//! Donations module - voluntary payments and their lifecycle.

mod donation;
mod status;

pub use donation::Donation;
pub use status::DonationStatus;
