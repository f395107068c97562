//! Session middleware configuration.
//!
//! Sessions live in memory next to the carts they point at; a restart drops
//! both. The cookie itself is signed with the configured session secret.

use secrecy::ExposeSecret;
use tower_sessions::cookie::{Key, SameSite};
use tower_sessions::{Expiry, MemoryStore, SessionManagerLayer};

use crate::config::StorefrontConfig;
use crate::error::AppError;

/// Session cookie name.
pub const SESSION_COOKIE_NAME: &str = "volt_session";

/// Create the session layer with an in-memory store and signed cookies.
///
/// # Errors
///
/// Returns `AppError::Internal` if the session secret cannot be used as a
/// signing key (shorter than 64 bytes).
pub fn create_session_layer(
    config: &StorefrontConfig,
) -> Result<SessionManagerLayer<MemoryStore, tower_sessions::service::SignedCookie>, AppError> {
    let key = Key::try_from(config.session_secret.expose_secret().as_bytes())
        .map_err(|e| AppError::Internal(format!("invalid session signing key: {e}")))?;

    let idle_seconds = i64::try_from(config.session_idle.as_secs()).unwrap_or(i64::MAX);

    Ok(SessionManagerLayer::new(MemoryStore::default())
        .with_name(SESSION_COOKIE_NAME)
        .with_expiry(Expiry::OnInactivity(
            tower_sessions::cookie::time::Duration::seconds(idle_seconds),
        ))
        .with_secure(config.is_secure())
        .with_same_site(SameSite::Lax)
        .with_http_only(true)
        .with_path("/")
        .with_signed(key))
}

#[cfg(test)]
mod tests {
    use secrecy::SecretString;

    use super::*;

    #[test]
    fn test_session_layer_accepts_configured_secret() {
        let secret = SecretString::from(
            "k7Qz2mV9xR4pL8nB3wT6yH1cJ5fD0sGaZ2qX7vN4bM9kP3rW8tY6uE1iO5lC0hFj",
        );
        let config = StorefrontConfig::local(secret);
        assert!(config.is_ok_and(|config| create_session_layer(&config).is_ok()));
    }
}
