//! HTTP middleware for axum.
//!
//! This module contains middleware layers for cross-cutting concerns:
//!
//! - `admin` - Admin token middleware and extractor for catalog mutations

pub mod admin;

pub use admin::{admin_middleware, AdminRejection, AdminState, RequireAdmin};
