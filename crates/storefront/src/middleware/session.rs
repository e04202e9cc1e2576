//! Session middleware configuration.
//!
//! Sets up `PostgreSQL`-backed sessions using tower-sessions. The session is
//! the storefront's durable per-browser storage; the cart snapshot lives in
//! one session key (see [`crate::services::cart`]).

use secrecy::ExposeSecret;
use sqlx::PgPool;
use tower_sessions::cookie::{Key, KeyError};
use tower_sessions::{Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::PostgresStore;

use crate::config::StorefrontConfig;

/// Session cookie name.
pub const SESSION_COOKIE_NAME: &str = "solara_session";

/// Session expiry time in seconds (7 days).
const SESSION_EXPIRY_SECONDS: i64 = 7 * 24 * 60 * 60;

/// Create the session store backed by `PostgreSQL`.
#[must_use]
pub fn create_session_store(pool: &PgPool) -> PostgresStore {
    PostgresStore::new(pool.clone())
}

/// Create the session layer.
///
/// Cookies are signed with the configured session secret, http-only, lax
/// same-site, and secure when the public base URL is https. Sessions expire
/// after 7 days of inactivity.
///
/// # Errors
///
/// Returns [`KeyError`] when the session secret is shorter than the 64 bytes
/// the signing key requires; configuration loading enforces this up front.
pub fn create_session_layer(
    store: PostgresStore,
    config: &StorefrontConfig,
) -> Result<SessionManagerLayer<PostgresStore, tower_sessions::service::SignedCookie>, KeyError> {
    let key = signing_key(config)?;
    let is_secure = config.base_url.starts_with("https://");

    Ok(SessionManagerLayer::new(store)
        .with_name(SESSION_COOKIE_NAME)
        .with_expiry(Expiry::OnInactivity(
            tower_sessions::cookie::time::Duration::seconds(SESSION_EXPIRY_SECONDS),
        ))
        .with_secure(is_secure)
        .with_same_site(tower_sessions::cookie::SameSite::Lax)
        .with_http_only(true)
        .with_path("/")
        .with_signed(key))
}

/// Derive the cookie signing key from the configured session secret.
fn signing_key(config: &StorefrontConfig) -> Result<Key, KeyError> {
    Key::try_from(config.session_secret.expose_secret().as_bytes())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::path::PathBuf;

    use secrecy::SecretString;

    use super::*;

    fn config(secret: &str) -> StorefrontConfig {
        StorefrontConfig {
            database_url: SecretString::from("postgres://localhost/test"),
            host: "127.0.0.1".parse().unwrap(),
            port: 3000,
            base_url: "http://localhost:3000".to_string(),
            session_secret: SecretString::from(secret),
            whatsapp_phone: "5493512000000".to_string(),
            static_dir: PathBuf::from("crates/storefront/static"),
            sentry_dsn: None,
            sentry_environment: None,
        }
    }

    #[test]
    fn test_signing_key_from_valid_secret() {
        assert!(signing_key(&config(&"a".repeat(64))).is_ok());
    }

    #[test]
    fn test_signing_key_rejects_short_secret() {
        assert!(signing_key(&config(&"a".repeat(32))).is_err());
    }
}
