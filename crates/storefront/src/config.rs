//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `SOLARA_DATABASE_URL` - `PostgreSQL` connection string
//! - `SOLARA_BASE_URL` - Public URL for the storefront
//! - `SOLARA_SESSION_SECRET` - Session cookie signing secret (min 64 chars)
//! - `SOLARA_WHATSAPP_PHONE` - Destination phone for the contact handoff,
//!   digits only with country code (e.g., 5493512000000)
//!
//! ## Optional
//! - `SOLARA_HOST` - Bind address (default: 127.0.0.1)
//! - `SOLARA_PORT` - Listen port (default: 3000)
//! - `SOLARA_STATIC_DIR` - Static asset directory (default:
//!   crates/storefront/static, relative to the working directory)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

// Cookie signing keys require at least 64 bytes of material.
const MIN_SESSION_SECRET_LENGTH: usize = 64;

const DEFAULT_STATIC_DIR: &str = "crates/storefront/static";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
    #[error("Insecure secret in {0}: {1}")]
    InsecureSecret(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// `PostgreSQL` database connection URL (contains password)
    pub database_url: SecretString,
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Public base URL; also the base of the deterministic product links
    pub base_url: String,
    /// Session cookie signing secret
    pub session_secret: SecretString,
    /// WhatsApp destination phone number, digits only with country code
    pub whatsapp_phone: String,
    /// Directory served under `/static`
    pub static_dir: PathBuf,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment name
    pub sentry_environment: Option<String>,
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let database_url = get_database_url("SOLARA_DATABASE_URL")?;
        let host = get_env_or_default("SOLARA_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("SOLARA_HOST".to_string(), e.to_string()))?;
        let port = get_env_or_default("SOLARA_PORT", "3000")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("SOLARA_PORT".to_string(), e.to_string()))?;
        let base_url = get_required_env("SOLARA_BASE_URL")?;
        let session_secret = get_required_secret("SOLARA_SESSION_SECRET")?;
        validate_session_secret(&session_secret, "SOLARA_SESSION_SECRET")?;
        let whatsapp_phone = get_required_env("SOLARA_WHATSAPP_PHONE")?;
        validate_phone(&whatsapp_phone, "SOLARA_WHATSAPP_PHONE")?;
        let static_dir = PathBuf::from(get_env_or_default("SOLARA_STATIC_DIR", DEFAULT_STATIC_DIR));

        Ok(Self {
            database_url,
            host,
            port,
            base_url,
            session_secret,
            whatsapp_phone,
            static_dir,
            sentry_dsn: get_optional_env("SENTRY_DSN"),
            sentry_environment: get_optional_env("SENTRY_ENVIRONMENT"),
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

/// Get a required environment variable as a secret.
fn get_required_secret(key: &str) -> Result<SecretString, ConfigError> {
    let value = get_required_env(key)?;
    Ok(SecretString::from(value))
}

/// Get database URL with fallback to generic `DATABASE_URL`.
fn get_database_url(primary_key: &str) -> Result<SecretString, ConfigError> {
    if let Ok(value) = std::env::var(primary_key) {
        return Ok(SecretString::from(value));
    }
    if let Ok(value) = std::env::var("DATABASE_URL") {
        return Ok(SecretString::from(value));
    }
    Err(ConfigError::MissingEnvVar(primary_key.to_string()))
}

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Validate that a session secret has enough material for the signing key.
fn validate_session_secret(secret: &SecretString, var_name: &str) -> Result<(), ConfigError> {
    let value = secret.expose_secret();
    if value.len() < MIN_SESSION_SECRET_LENGTH {
        return Err(ConfigError::InsecureSecret(
            var_name.to_string(),
            format!(
                "must be at least {} characters (got {})",
                MIN_SESSION_SECRET_LENGTH,
                value.len()
            ),
        ));
    }
    Ok(())
}

/// Validate a WhatsApp phone number: digits only, with country code.
fn validate_phone(phone: &str, var_name: &str) -> Result<(), ConfigError> {
    if phone.is_empty() || !phone.chars().all(|c| c.is_ascii_digit()) {
        return Err(ConfigError::InvalidEnvVar(
            var_name.to_string(),
            "must contain digits only, including the country code".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_session_secret_too_short() {
        for secret in ["short", &"a".repeat(32), &"a".repeat(63)] {
            let secret = SecretString::from(secret);
            assert!(validate_session_secret(&secret, "TEST_SESSION").is_err());
        }
    }

    #[test]
    fn test_validate_session_secret_valid_length() {
        let secret = SecretString::from("a".repeat(64));
        assert!(validate_session_secret(&secret, "TEST_SESSION").is_ok());
    }

    #[test]
    fn test_static_dir_default() {
        // The env var is only consulted when set; unset falls back.
        assert_eq!(
            get_env_or_default("SOLARA_STATIC_DIR_UNSET_FOR_TEST", DEFAULT_STATIC_DIR),
            DEFAULT_STATIC_DIR
        );
    }

    #[test]
    fn test_validate_phone() {
        assert!(validate_phone("5493512000000", "TEST_PHONE").is_ok());
        assert!(validate_phone("+549351", "TEST_PHONE").is_err());
        assert!(validate_phone("", "TEST_PHONE").is_err());
        assert!(validate_phone("54 9351", "TEST_PHONE").is_err());
    }

    #[test]
    fn test_socket_addr() {
        let config = StorefrontConfig {
            database_url: SecretString::from("postgres://localhost/test"),
            host: "127.0.0.1".parse().unwrap(),
            port: 3000,
            base_url: "http://localhost:3000".to_string(),
            session_secret: SecretString::from("x".repeat(64)),
            whatsapp_phone: "5493512000000".to_string(),
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
            sentry_dsn: None,
            sentry_environment: None,
        };

        let addr = config.socket_addr();
        assert_eq!(addr.ip().to_string(), "127.0.0.1");
        assert_eq!(addr.port(), 3000);
    }
}
