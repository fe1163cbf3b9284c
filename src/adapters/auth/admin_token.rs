//! Admin authentication with configured credentials and signed tokens.
//!
//! The catalog management endpoints are operated by a single admin, so
//! authentication is deliberately small: one configured email/password
//! pair, checked in constant time, exchanged for an HS256 token that the
//! admin middleware verifies on each request.
//!
//! # Security
//!
//! - Credential comparison uses `subtle::ConstantTimeEq` to avoid timing
//!   side channels
//! - Tokens carry `exp` and are rejected after expiry
//! - Secrets are handled via `secrecy::SecretString`
//!
//! # Example
//!
//! ```ignore
//! let config = AdminAuthConfig::new(email, password, jwt_secret);
//! let service = AdminTokenService::new(config);
//!
//! service.verify_credentials(&email, &password)?;
//! let token = service.issue_token()?;
//! ```

use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use subtle::ConstantTimeEq;

use crate::domain::foundation::{DomainError, ErrorCode};

/// Default token lifetime (7 days).
const DEFAULT_TOKEN_TTL_SECS: u64 = 7 * 24 * 60 * 60;

/// Configuration for admin authentication.
#[derive(Clone)]
pub struct AdminAuthConfig {
    /// The admin login email.
    admin_email: String,

    /// The admin password to compare submissions against.
    admin_password: SecretString,

    /// Secret used to sign and verify admin tokens.
    jwt_secret: SecretString,

    /// How long issued tokens stay valid.
    token_ttl_secs: u64,
}

impl AdminAuthConfig {
    /// Create a new configuration with required fields.
    pub fn new(
        admin_email: impl Into<String>,
        admin_password: impl Into<String>,
        jwt_secret: impl Into<String>,
    ) -> Self {
        Self {
            admin_email: admin_email.into(),
            admin_password: SecretString::new(admin_password.into()),
            jwt_secret: SecretString::new(jwt_secret.into()),
            token_ttl_secs: DEFAULT_TOKEN_TTL_SECS,
        }
    }

    /// Set a custom token lifetime in seconds.
    pub fn with_token_ttl_secs(mut self, secs: u64) -> Self {
        self.token_ttl_secs = secs;
        self
    }
}

/// Claims carried by an admin token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminClaims {
    /// Subject, the admin email.
    pub sub: String,

    /// Role claim checked by the admin middleware.
    pub role: String,

    /// Issued at timestamp (Unix epoch seconds).
    pub iat: i64,

    /// Expiry timestamp (Unix epoch seconds).
    pub exp: i64,
}

/// Issues and verifies admin tokens.
pub struct AdminTokenService {
    config: AdminAuthConfig,
}

impl AdminTokenService {
    /// Create a new token service with the given configuration.
    pub fn new(config: AdminAuthConfig) -> Self {
        Self { config }
    }

    /// Check a submitted email/password pair against the configured one.
    ///
    /// Both comparisons are constant time, and a single error covers
    /// every mismatch so responses do not reveal which field was wrong.
    ///
    /// # Errors
    ///
    /// Returns `InvalidCredentials` on mismatch.
    pub fn verify_credentials(&self, email: &str, password: &str) -> Result<(), DomainError> {
        let email_ok = self
            .config
            .admin_email
            .as_bytes()
            .ct_eq(email.as_bytes())
            .unwrap_u8();
        let password_ok = self
            .config
            .admin_password
            .expose_secret()
            .as_bytes()
            .ct_eq(password.as_bytes())
            .unwrap_u8();

        if (email_ok & password_ok) != 1 {
            tracing::warn!("Admin login attempt with wrong credentials");
            return Err(DomainError::new(
                ErrorCode::InvalidCredentials,
                "Invalid credentials",
            ));
        }

        Ok(())
    }

    /// Issue a signed admin token for the configured email.
    ///
    /// # Errors
    ///
    /// Returns `InternalError` if signing fails.
    pub fn issue_token(&self) -> Result<String, DomainError> {
        let now = chrono::Utc::now().timestamp();
        let claims = AdminClaims {
            sub: self.config.admin_email.clone(),
            role: "admin".to_string(),
            iat: now,
            exp: now + self.config.token_ttl_secs as i64,
        };

        encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(self.config.jwt_secret.expose_secret().as_bytes()),
        )
        .map_err(|e| {
            DomainError::new(
                ErrorCode::InternalError,
                format!("Failed to sign admin token: {}", e),
            )
        })
    }

    /// Verify an admin token and return its claims.
    ///
    /// # Errors
    ///
    /// - `Unauthorized` - Token is malformed, has a bad signature, or expired
    /// - `Forbidden` - Token is valid but does not carry the admin role
    pub fn verify_token(&self, token: &str) -> Result<AdminClaims, DomainError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_required_spec_claims(&["exp", "sub"]);

        let data = decode::<AdminClaims>(
            token,
            &DecodingKey::from_secret(self.config.jwt_secret.expose_secret().as_bytes()),
            &validation,
        )
        .map_err(|e| {
            use jsonwebtoken::errors::ErrorKind;
            match e.kind() {
                ErrorKind::ExpiredSignature => {
                    tracing::debug!("Admin token expired");
                    DomainError::new(ErrorCode::Unauthorized, "Token expired")
                }
                _ => {
                    tracing::warn!(error = %e, "Invalid admin token");
                    DomainError::new(ErrorCode::Unauthorized, "Invalid token")
                }
            }
        })?;

        if data.claims.role != "admin" {
            return Err(DomainError::new(
                ErrorCode::Forbidden,
                "Token does not carry the admin role",
            ));
        }

        Ok(data.claims)
    }
}
