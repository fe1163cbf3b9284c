//! Admin authentication middleware and extractor for axum.
//!
//! This module provides:
//! - `admin_middleware` - Layer that validates Bearer tokens and injects claims into extensions
//! - `RequireAdmin` - Extractor that requires a verified admin token
//!
//! # Architecture
//!
//! The middleware verifies tokens with the `AdminTokenService`, which holds
//! the configured signing secret. Routes that mutate the catalog are wrapped
//! with this layer; read-only routes are not.
//!
//! ```text
//! Request → admin_middleware → injects AdminClaims into extensions
//!                                      ↓
//!                              Handler → RequireAdmin extractor reads from extensions
//! ```
//!
//! # Example
//!
//! ```ignore
//! use axum::{Router, routing::post, middleware};
//! use std::sync::Arc;
//!
//! let admin: AdminState = Arc::new(AdminTokenService::new(config));
//!
//! let app = Router::new()
//!     .route("/products", post(create_product))
//!     .layer(middleware::from_fn_with_state(admin.clone(), admin_middleware));
//! ```

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};

use super::super::error::ErrorResponse;
use crate::adapters::auth::{AdminClaims, AdminTokenService};
use crate::domain::foundation::ErrorCode;

/// Admin middleware state - wraps the token service.
pub type AdminState = Arc<AdminTokenService>;

/// Middleware that only lets verified admin tokens through.
///
/// This middleware:
/// 1. Extracts the Bearer token from the Authorization header
/// 2. Verifies the signature, expiry, and role using `AdminTokenService`
/// 3. On success, injects `AdminClaims` into request extensions
/// 4. On missing or invalid token, returns 401 Unauthorized
/// 5. On a valid token without the admin role, returns 403 Forbidden
///
/// Unlike optional-auth schemes, a request with no token never reaches
/// the wrapped handler.
///
/// # Token Extraction
///
/// Expects the token in the `Authorization` header with `Bearer` prefix:
/// ```text
/// Authorization: Bearer <token>
/// ```
pub async fn admin_middleware(
    State(tokens): State<AdminState>,
    mut request: Request,
    next: Next,
) -> Response {
    // Extract Bearer token from Authorization header
    let token = request
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "));

    let Some(token) = token else {
        let body = ErrorResponse::new("UNAUTHORIZED", "Missing Bearer token");
        return (StatusCode::UNAUTHORIZED, Json(body)).into_response();
    };

    match tokens.verify_token(token) {
        Ok(claims) => {
            request.extensions_mut().insert(claims);
            next.run(request).await
        }
        Err(e) => {
            let status = match e.code {
                ErrorCode::Forbidden => StatusCode::FORBIDDEN,
                _ => StatusCode::UNAUTHORIZED,
            };
            let body = ErrorResponse::new(e.code.to_string(), e.message);
            (status, Json(body)).into_response()
        }
    }
}

/// Extractor that requires verified admin claims.
///
/// Use this extractor in handlers wrapped by `admin_middleware`. If no
/// claims are in the request extensions, returns 401 Unauthorized.
#[derive(Debug, Clone)]
pub struct RequireAdmin(pub AdminClaims);

impl<S> axum::extract::FromRequestParts<S> for RequireAdmin
where
    S: Send + Sync,
{
    type Rejection = AdminRejection;

    fn from_request_parts<'life0, 'life1, 'async_trait>(
        parts: &'life0 mut axum::http::request::Parts,
        _state: &'life1 S,
    ) -> std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self, Self::Rejection>> + Send + 'async_trait>,
    >
    where
        'life0: 'async_trait,
        'life1: 'async_trait,
        Self: 'async_trait,
    {
        Box::pin(async move {
            parts
                .extensions
                .get::<AdminClaims>()
                .cloned()
                .map(RequireAdmin)
                .ok_or(AdminRejection::Unauthenticated)
        })
    }
}

/// Rejection type for admin authentication failures.
#[derive(Debug, Clone)]
pub enum AdminRejection {
    /// No verified admin token was provided.
    Unauthenticated,
}

impl IntoResponse for AdminRejection {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AdminRejection::Unauthenticated => {
                (StatusCode::UNAUTHORIZED, "Authentication required")
            }
        };

        let body = ErrorResponse::new("UNAUTHORIZED", message);
        (status, Json(body)).into_response()
    }
}
