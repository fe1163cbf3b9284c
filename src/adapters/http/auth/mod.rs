//! HTTP adapter for admin authentication.
//!
//! Exposes the login endpoint:
//! - `POST /auth/login` - Exchange admin credentials for a bearer token
//!
//! Token verification for protected routes lives in the admin middleware.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::*;
pub use handlers::AuthAppState;
pub use routes::auth_router;
