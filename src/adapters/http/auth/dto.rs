//! HTTP DTOs (Data Transfer Objects) for admin authentication.

use serde::{Deserialize, Serialize};

/// Admin login request.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Successful login response carrying a bearer token.
#[derive(Debug, Clone, Serialize)]
pub struct LoginResponse {
    /// Signed admin token; send as `Authorization: Bearer <token>`.
    pub token: String,
}
