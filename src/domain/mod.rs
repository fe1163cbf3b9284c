//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors)
//! - `catalog` - Product aggregate and patch semantics
//! - `orders` - Order aggregate and settlement state machine
//! - `donations` - Donation aggregate and settlement state machine
//! - `payments` - Stripe events, webhook verification, and reconciliation

pub mod catalog;
pub mod donations;
pub mod foundation;
pub mod orders;
pub mod payments;
