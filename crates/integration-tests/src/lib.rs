//! Integration tests for LensVision.
//!
//! # Running Tests
//!
//! ```bash
//! # Start the storefront
//! cargo run -p lensvision-storefront
//!
//! # Run integration tests (ignored by default)
//! cargo test -p lensvision-integration-tests -- --ignored
//! ```
//!
//! Tests talk HTTP to a running storefront; the base URL is configurable
//! via `STOREFRONT_BASE_URL` and defaults to `http://localhost:3000`.

/// Base URL for the storefront (configurable via environment).
#[must_use]
pub fn storefront_base_url() -> String {
    std::env::var("STOREFRONT_BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string())
}

/// Create a client with a cookie store, so the session (and with it the
/// cart) persists across requests like a browser.
#[must_use]
pub fn session_client() -> reqwest::Client {
    reqwest::Client::builder()
        .cookie_store(true)
        .build()
        .expect("Failed to create HTTP client")
}
