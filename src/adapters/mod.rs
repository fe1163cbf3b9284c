//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `auth` - Admin credential check and token issue/verify
//! - `http` - Axum REST API
//! - `postgres` - SQLx-backed persistence
//! - `stripe` - Payment provider client and webhook verification

pub mod auth;
pub mod http;
pub mod postgres;
pub mod stripe;
