//! FlashSale - Small Shop and Donation Backend
//!
//! This crate implements a storefront backend: product catalog CRUD,
//! Stripe-hosted checkout for orders and donations, and an idempotent
//! webhook reconciler that settles payment outcomes against stored
//! records.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
