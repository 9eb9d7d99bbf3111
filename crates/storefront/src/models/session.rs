//! Session-related types.
//!
//! The session only holds per-visitor cart state; there is no
//! authentication and nothing identifying is stored.

/// Session keys for visitor data.
pub mod keys {
    /// Key for storing the visitor's cart lines.
    pub const CART: &str = "cart";
}
