//! Dashboard route handlers.
//!
//! The dashboard renders the mock customer account: overview stats, order
//! history, wishlist, and settings. Tabs are plain links carrying a `tab`
//! query parameter; there is no authentication and the settings forms are
//! display-only.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Query, State},
    response::IntoResponse,
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use crate::catalog::{CustomerProfile, Order};
use crate::filters;
use crate::routes::cart::load_cart;
use crate::routes::products::ProductCardView;
use crate::state::AppState;

/// Dashboard tabs in sidebar order.
const TABS: [&str; 4] = ["overview", "orders", "wishlist", "settings"];

/// Order display data for templates.
#[derive(Clone)]
pub struct OrderView {
    pub number: String,
    pub date: String,
    pub status: String,
    /// Delivered orders expose the reorder affordance.
    pub delivered: bool,
    pub total: String,
    pub item_names: Vec<String>,
}

impl From<&Order> for OrderView {
    fn from(order: &Order) -> Self {
        Self {
            number: order.number.clone(),
            date: order.placed_on.format("%Y-%m-%d").to_string(),
            status: order.status.to_string(),
            delivered: order.status.is_delivered(),
            total: order.total.to_string(),
            item_names: order.item_names.clone(),
        }
    }
}

/// Dashboard query parameters.
#[derive(Debug, Deserialize)]
pub struct DashboardQuery {
    /// Active tab; unknown values fall back to the overview.
    #[serde(default)]
    pub tab: String,
}

/// Dashboard page template.
#[derive(Template, WebTemplate)]
#[template(path = "dashboard/index.html")]
pub struct DashboardTemplate {
    pub cart_count: u32,
    pub tab: String,
    pub profile: CustomerProfile,
    pub orders: Vec<OrderView>,
    pub wishlist: Vec<ProductCardView>,
}

/// Resolve the active tab, defaulting to the overview.
fn resolve_tab(requested: &str) -> String {
    if TABS.contains(&requested) {
        requested.to_string()
    } else {
        "overview".to_string()
    }
}

/// Display the dashboard.
#[instrument(skip(state, session))]
pub async fn index(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<DashboardQuery>,
) -> impl IntoResponse {
    let catalog = state.catalog();

    DashboardTemplate {
        cart_count: load_cart(&session).await.total_quantity(),
        tab: resolve_tab(&query.tab),
        profile: catalog.profile().clone(),
        orders: catalog.orders().iter().map(OrderView::from).collect(),
        wishlist: catalog
            .wishlist_products()
            .into_iter()
            .map(ProductCardView::from)
            .collect(),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn test_resolve_tab() {
        assert_eq!(resolve_tab("orders"), "orders");
        assert_eq!(resolve_tab("settings"), "settings");
        assert_eq!(resolve_tab(""), "overview");
        assert_eq!(resolve_tab("payments"), "overview");
    }

    #[test]
    fn test_order_view_formats_fields() {
        let catalog = Catalog::seed();
        let views: Vec<OrderView> = catalog.orders().iter().map(OrderView::from).collect();

        let delivered = views.first().unwrap();
        assert_eq!(delivered.number, "ORD-001");
        assert_eq!(delivered.date, "2024-01-15");
        assert_eq!(delivered.status, "Delivered");
        assert!(delivered.delivered);
        assert_eq!(delivered.total, "$329.98");

        let processing = views.get(1).unwrap();
        assert_eq!(processing.status, "Processing");
        assert!(!processing.delivered);
    }
}
