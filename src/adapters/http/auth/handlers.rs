//! HTTP handlers for admin authentication.

use std::sync::Arc;

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

use crate::adapters::auth::AdminTokenService;
use crate::adapters::http::error::ApiError;

use super::dto::{LoginRequest, LoginResponse};

/// Shared state for auth handlers.
#[derive(Clone)]
pub struct AuthAppState {
    pub tokens: Arc<AdminTokenService>,
}

impl AuthAppState {
    pub fn new(tokens: Arc<AdminTokenService>) -> Self {
        Self { tokens }
    }
}

/// POST /auth/login
///
/// Checks the configured admin credentials and returns a signed token.
/// Wrong email and wrong password produce the same error so the
/// response does not reveal which field was wrong.
pub async fn login(
    State(state): State<AuthAppState>,
    Json(request): Json<LoginRequest>,
) -> Result<impl IntoResponse, ApiError> {
    state
        .tokens
        .verify_credentials(&request.email, &request.password)?;
    let token = state.tokens.issue_token()?;

    Ok(Json(LoginResponse { token }))
}
