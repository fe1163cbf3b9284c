//! Server configuration
//!
//! Bind address, environment, log filter, and the HTTP edge settings
//! (request timeout, CORS allowlist for the storefront origin).

use serde::Deserialize;
use std::net::SocketAddr;

use super::error::ValidationError;

/// HTTP server settings
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Address to bind, an IP literal
    #[serde(default = "default_host")]
    pub host: String,

    /// TCP port to listen on
    #[serde(default = "default_port")]
    pub port: u16,

    /// Deployment environment; switches log format and tightens validation
    #[serde(default)]
    pub environment: Environment,

    /// Default `RUST_LOG`-style filter when the env var is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Seconds before an in-flight request is answered with 408
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,

    /// Comma-separated browser origins allowed by CORS.
    /// Unset means same-origin only.
    pub cors_origins: Option<String>,
}

/// Deployment environment
#[derive(Debug, Clone, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl ServerConfig {
    /// The socket address to bind
    pub fn socket_addr(&self) -> SocketAddr {
        format!("{}:{}", self.host, self.port)
            .parse()
            .expect("Invalid socket address")
    }

    /// Whether this deployment is production
    pub fn is_production(&self) -> bool {
        self.environment == Environment::Production
    }

    /// CORS origins split out of the comma-separated form.
    ///
    /// Blank segments (trailing commas, doubled commas) are dropped.
    pub fn cors_origins_list(&self) -> Vec<String> {
        let Some(raw) = &self.cors_origins else {
            return Vec::new();
        };
        raw.split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(String::from)
            .collect()
    }

    /// Validate server configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.port == 0 {
            return Err(ValidationError::InvalidPort);
        }
        if !(1..=300).contains(&self.request_timeout_secs) {
            return Err(ValidationError::InvalidTimeout);
        }
        Ok(())
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            environment: Environment::default(),
            log_level: default_log_level(),
            request_timeout_secs: default_request_timeout(),
            cors_origins: None,
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_log_level() -> String {
    "info,flashsale=debug,sqlx=warn".to_string()
}

fn default_request_timeout() -> u64 {
    30
}
