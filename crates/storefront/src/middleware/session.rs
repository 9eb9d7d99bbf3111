//! Session middleware configuration.
//!
//! Sets up in-memory sessions using tower-sessions. Session contents (the
//! visitor's cart) are lost on restart, which is the intended behavior for
//! a storefront with no persistence.

use secrecy::ExposeSecret;
use tower_sessions::{
    Expiry, MemoryStore, SessionManagerLayer, cookie::Key, service::SignedCookie,
};

use crate::config::StorefrontConfig;

/// Session cookie name.
pub const SESSION_COOKIE_NAME: &str = "lv_session";

/// Session expiry time in seconds (7 days).
const SESSION_EXPIRY_SECONDS: i64 = 7 * 24 * 60 * 60;

/// Create the session layer with an in-memory store.
///
/// Cookies are signed with the configured secret; when no secret is set an
/// ephemeral key is generated, so cookies from a previous process are
/// rejected along with their (already gone) sessions.
#[must_use]
pub fn create_session_layer(
    config: &StorefrontConfig,
) -> SessionManagerLayer<MemoryStore, SignedCookie> {
    let store = MemoryStore::default();

    let key = config.session_secret.as_ref().map_or_else(Key::generate, |secret| {
        // Config validation guarantees at least 32 bytes
        Key::derive_from(secret.expose_secret().as_bytes())
    });

    SessionManagerLayer::new(store)
        .with_name(SESSION_COOKIE_NAME)
        .with_expiry(Expiry::OnInactivity(
            tower_sessions::cookie::time::Duration::seconds(SESSION_EXPIRY_SECONDS),
        ))
        .with_secure(config.is_secure())
        .with_same_site(tower_sessions::cookie::SameSite::Lax)
        .with_http_only(true)
        .with_path("/")
        .with_signed(key)
}
