//! Shared HTTP error types.
//!
//! Every endpoint serializes failures into the same JSON envelope so
//! storefront clients can branch on `error_code` without caring which
//! route produced the error.

use axum::extract::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

use crate::domain::foundation::{DomainError, ErrorCode};

/// Standard error response for API errors.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling.
    pub error_code: String,
    /// Human-readable error message.
    pub message: String,
    /// Additional details (optional).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    /// Create a new error response.
    pub fn new(error_code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error_code: error_code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Create an error response with details.
    pub fn with_details(
        error_code: impl Into<String>,
        message: impl Into<String>,
        details: serde_json::Value,
    ) -> Self {
        Self {
            error_code: error_code.into(),
            message: message.into(),
            details: Some(details),
        }
    }
}

/// API error type that converts domain errors to HTTP responses.
pub struct ApiError(DomainError);

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = match self.0.code {
            ErrorCode::ValidationFailed
            | ErrorCode::EmptyField
            | ErrorCode::OutOfRange
            | ErrorCode::InvalidFormat
            | ErrorCode::InvalidAmount => StatusCode::BAD_REQUEST,

            ErrorCode::ProductNotFound
            | ErrorCode::OrderNotFound
            | ErrorCode::DonationNotFound => StatusCode::NOT_FOUND,

            ErrorCode::InvalidStateTransition => StatusCode::CONFLICT,

            ErrorCode::Unauthorized
            | ErrorCode::InvalidCredentials
            | ErrorCode::InvalidSignature => StatusCode::UNAUTHORIZED,

            ErrorCode::Forbidden => StatusCode::FORBIDDEN,

            ErrorCode::PaymentProviderError => StatusCode::BAD_GATEWAY,

            ErrorCode::DatabaseError | ErrorCode::InternalError => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        if status.is_server_error() {
            tracing::error!(error_code = %self.0.code, message = %self.0.message, "Request failed");
        }

        let details = if self.0.details.is_empty() {
            None
        } else {
            serde_json::to_value(&self.0.details).ok()
        };

        let body = ErrorResponse {
            error_code: self.0.code.to_string(),
            message: self.0.message,
            details,
        };
        (status, Json(body)).into_response()
    }
}
