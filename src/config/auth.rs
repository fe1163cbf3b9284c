//! Authentication configuration

use serde::Deserialize;

use super::error::ValidationError;
use super::server::Environment;

/// Authentication configuration for the single admin operator
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// Admin login email
    pub admin_email: String,

    /// Admin login password
    pub admin_password: String,

    /// Secret used to sign admin session tokens (HS256)
    pub jwt_secret: String,

    /// Token lifetime in hours
    #[serde(default = "default_token_ttl_hours")]
    pub token_ttl_hours: u64,
}

impl AuthConfig {
    /// Get token lifetime in seconds
    pub fn token_ttl_secs(&self) -> u64 {
        self.token_ttl_hours * 3600
    }

    /// Validate authentication configuration
    ///
    /// In production, requires a JWT secret of at least 32 bytes.
    pub fn validate(&self, environment: &Environment) -> Result<(), ValidationError> {
        if self.admin_email.is_empty() {
            return Err(ValidationError::MissingRequired("ADMIN_EMAIL"));
        }
        if self.admin_password.is_empty() {
            return Err(ValidationError::MissingRequired("ADMIN_PASSWORD"));
        }
        if self.jwt_secret.is_empty() {
            return Err(ValidationError::MissingRequired("JWT_SECRET"));
        }
        if self.token_ttl_hours == 0 {
            return Err(ValidationError::InvalidTokenTtl);
        }

        if *environment == Environment::Production && self.jwt_secret.len() < 32 {
            return Err(ValidationError::JwtSecretTooShort);
        }

        Ok(())
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            admin_email: String::new(),
            admin_password: String::new(),
            jwt_secret: String::new(),
            token_ttl_hours: default_token_ttl_hours(),
        }
    }
}

fn default_token_ttl_hours() -> u64 {
    168
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> AuthConfig {
        AuthConfig {
            admin_email: "admin@example.com".to_string(),
            admin_password: "hunter2hunter2".to_string(),
            jwt_secret: "0123456789abcdef0123456789abcdef".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_auth_config_defaults() {
        let config = AuthConfig::default();
        assert_eq!(config.token_ttl_hours, 168);
    }

    #[test]
    fn test_token_ttl_secs() {
        let config = AuthConfig {
            token_ttl_hours: 2,
            ..test_config()
        };
        assert_eq!(config.token_ttl_secs(), 7200);
    }

    #[test]
    fn test_validation_missing_email() {
        let config = AuthConfig::default();
        assert!(config.validate(&Environment::Development).is_err());
    }

    #[test]
    fn test_validation_missing_password() {
        let config = AuthConfig {
            admin_password: String::new(),
            ..test_config()
        };
        assert!(config.validate(&Environment::Development).is_err());
    }

    #[test]
    fn test_validation_missing_jwt_secret() {
        let config = AuthConfig {
            jwt_secret: String::new(),
            ..test_config()
        };
        assert!(config.validate(&Environment::Development).is_err());
    }

    #[test]
    fn test_validation_zero_ttl() {
        let config = AuthConfig {
            token_ttl_hours: 0,
            ..test_config()
        };
        assert!(matches!(
            config.validate(&Environment::Development),
            Err(ValidationError::InvalidTokenTtl)
        ));
    }

    #[test]
    fn test_validation_production_requires_long_secret() {
        let config = AuthConfig {
            jwt_secret: "short".to_string(),
            ..test_config()
        };
        // Allowed in development
        assert!(config.validate(&Environment::Development).is_ok());
        // Rejected in production
        assert!(matches!(
            config.validate(&Environment::Production),
            Err(ValidationError::JwtSecretTooShort)
        ));
    }

    #[test]
    fn test_validation_valid_config() {
        let config = test_config();
        assert!(config.validate(&Environment::Production).is_ok());
    }
}
