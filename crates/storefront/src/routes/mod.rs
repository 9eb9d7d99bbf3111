//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Home page
//! GET  /health                 - Health check
//!
//! # Products
//! GET  /products               - Product listing with search/filter/sort
//!
//! # Cart (form POSTs redirect back to /cart)
//! GET  /cart                   - Cart page
//! POST /cart/add               - Add one unit of a product
//! POST /cart/update            - Apply a quantity delta (removes at zero)
//! POST /cart/remove            - Remove a line
//!
//! # Dashboard
//! GET  /dashboard              - Account dashboard (?tab=overview|orders|wishlist|settings)
//!
//! # Try-on
//! GET  /try-on                 - Virtual try-on page (?glasses=<handle>)
//! POST /try-on/upload          - Photo upload, echoed back as a data URL
//! ```

pub mod cart;
pub mod dashboard;
pub mod home;
pub mod products;
pub mod tryon;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new().route("/", get(products::index))
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/add", post(cart::add))
        .route("/update", post(cart::update))
        .route("/remove", post(cart::remove))
}

/// Create the dashboard routes router.
pub fn dashboard_routes() -> Router<AppState> {
    Router::new().route("/", get(dashboard::index))
}

/// Create the try-on routes router.
///
/// The upload route accepts multipart bodies up to the photo size limit
/// (plus form overhead); everything else keeps the axum default.
pub fn tryon_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(tryon::show))
        .route(
            "/upload",
            post(tryon::upload).layer(DefaultBodyLimit::max(tryon::MAX_UPLOAD_BYTES + 64 * 1024)),
        )
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Home page
        .route("/", get(home::home))
        // Product routes
        .nest("/products", product_routes())
        // Cart routes
        .nest("/cart", cart_routes())
        // Dashboard routes
        .nest("/dashboard", dashboard_routes())
        // Try-on routes
        .nest("/try-on", tryon_routes())
}
