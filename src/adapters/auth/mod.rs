//! Authentication adapters.
//!
//! Admin authentication for the catalog management endpoints:
//!
//! - `admin_token` - Password check and HS256 token issue/verify

mod admin_token;

pub use admin_token::{AdminAuthConfig, AdminClaims, AdminTokenService};
