//! Cart route handlers.
//!
//! The cart lives in the visitor's session as a list of product-id/quantity
//! lines. A session that has never touched the cart starts from the seeded
//! demo cart; mutations persist the updated lines back into the session and
//! redirect to the cart page.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Redirect, Response},
};
use rust_decimal::Decimal;
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use lensvision_core::ProductId;

use crate::cart::{Cart, CartTotals};
use crate::catalog::Catalog;
use crate::filters;
use crate::models::session_keys;
use crate::state::AppState;

/// Cart item display data for templates.
#[derive(Clone)]
pub struct CartItemView {
    pub product_id: i32,
    pub handle: String,
    pub name: String,
    pub brand: String,
    pub frame_color: String,
    pub lens_type: String,
    pub quantity: u32,
    pub image_url: String,
    pub line_price: String,
    /// Pre-sale line price, shown struck through.
    pub line_original_price: Option<String>,
}

/// Order summary display data for templates.
#[derive(Clone)]
pub struct SummaryView {
    pub subtotal: String,
    /// "Free" once the subtotal qualifies.
    pub shipping: String,
    pub tax: String,
    pub total: String,
    /// Amount still needed for free shipping, preformatted.
    pub free_shipping_gap: Option<String>,
}

impl From<&CartTotals> for SummaryView {
    fn from(totals: &CartTotals) -> Self {
        Self {
            subtotal: format_money(totals.subtotal),
            shipping: if totals.shipping.is_zero() {
                "Free".to_string()
            } else {
                format_money(totals.shipping)
            },
            tax: format_money(totals.tax),
            total: format_money(totals.total),
            free_shipping_gap: totals.free_shipping_gap.map(format_money),
        }
    }
}

/// Format a decimal dollar amount as a price string.
fn format_money(amount: Decimal) -> String {
    format!("${:.2}", amount.round_dp(2))
}

/// Build the cart item views, skipping lines whose product is gone.
fn build_items(cart: &Cart, catalog: &Catalog) -> Vec<CartItemView> {
    cart.lines
        .iter()
        .filter_map(|line| {
            catalog.product(line.product_id).map(|product| CartItemView {
                product_id: product.id.as_i32(),
                handle: product.handle.clone(),
                name: product.name.clone(),
                brand: product.brand.clone(),
                frame_color: product.frame_color.clone(),
                lens_type: product.lens_type.clone(),
                quantity: line.quantity,
                image_url: product.image_url.clone(),
                line_price: format_money(product.price.amount * Decimal::from(line.quantity)),
                line_original_price: product.original_price.map(|original| {
                    format_money(original.amount * Decimal::from(line.quantity))
                }),
            })
        })
        .collect()
}

// =============================================================================
// Session Helpers
// =============================================================================

/// Load the cart from the session, falling back to the seeded demo cart.
pub(crate) async fn load_cart(session: &Session) -> Cart {
    session
        .get::<Cart>(session_keys::CART)
        .await
        .ok()
        .flatten()
        .unwrap_or_else(Cart::seeded)
}

/// Persist the cart into the session.
async fn save_cart(session: &Session, cart: &Cart) {
    if let Err(e) = session.insert(session_keys::CART, cart).await {
        tracing::error!("Failed to save cart to session: {e}");
    }
}

/// Add to cart form data.
#[derive(Debug, Deserialize)]
pub struct AddToCartForm {
    pub product_id: i32,
}

/// Update cart form data.
#[derive(Debug, Deserialize)]
pub struct UpdateCartForm {
    pub product_id: i32,
    /// Signed quantity change; the line is removed when it reaches zero.
    pub delta: i32,
}

/// Remove from cart form data.
#[derive(Debug, Deserialize)]
pub struct RemoveFromCartForm {
    pub product_id: i32,
}

/// Cart page template.
#[derive(Template, WebTemplate)]
#[template(path = "cart/show.html")]
pub struct CartShowTemplate {
    pub cart_count: u32,
    pub items: Vec<CartItemView>,
    pub line_count: usize,
    pub summary: SummaryView,
}

/// Display cart page.
#[instrument(skip(state, session))]
pub async fn show(State(state): State<AppState>, session: Session) -> impl IntoResponse {
    let cart = load_cart(&session).await;
    let totals = cart.totals(state.catalog());

    CartShowTemplate {
        cart_count: cart.total_quantity(),
        items: build_items(&cart, state.catalog()),
        line_count: cart.line_count(),
        summary: SummaryView::from(&totals),
    }
}

/// Add one unit of a product to the cart.
///
/// Unknown product IDs are ignored so a stale form cannot poison the
/// session; the redirect happens either way.
#[instrument(skip(state, session))]
pub async fn add(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<AddToCartForm>,
) -> Response {
    let product_id = ProductId::new(form.product_id);

    if state.catalog().product(product_id).is_some() {
        let mut cart = load_cart(&session).await;
        cart.add(product_id);
        save_cart(&session, &cart).await;
    } else {
        tracing::warn!("Attempted to add unknown product {product_id} to cart");
    }

    Redirect::to("/cart").into_response()
}

/// Apply a quantity delta to a cart line.
#[instrument(skip(_state, session))]
pub async fn update(
    State(_state): State<AppState>,
    session: Session,
    Form(form): Form<UpdateCartForm>,
) -> Response {
    let mut cart = load_cart(&session).await;
    cart.adjust(ProductId::new(form.product_id), form.delta);
    save_cart(&session, &cart).await;

    Redirect::to("/cart").into_response()
}

/// Remove a line from the cart.
#[instrument(skip(_state, session))]
pub async fn remove(
    State(_state): State<AppState>,
    session: Session,
    Form(form): Form<RemoveFromCartForm>,
) -> Response {
    let mut cart = load_cart(&session).await;
    cart.remove(ProductId::new(form.product_id));
    save_cart(&session, &cart).await;

    Redirect::to("/cart").into_response()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(Decimal::new(52997, 2)), "$529.97");
        assert_eq!(format_money(Decimal::ZERO), "$0.00");
        assert_eq!(format_money(Decimal::new(1999, 1)), "$199.90");
    }

    #[test]
    fn test_summary_view_free_shipping() {
        let totals = Cart::seeded().totals(&Catalog::seed());
        let view = SummaryView::from(&totals);
        assert_eq!(view.shipping, "Free");
        assert_eq!(view.subtotal, "$529.97");
        assert_eq!(view.tax, "$42.40");
        assert_eq!(view.total, "$572.37");
        assert!(view.free_shipping_gap.is_none());
    }

    #[test]
    fn test_summary_view_charged_shipping() {
        let cart = Cart {
            lines: vec![crate::cart::CartLine {
                product_id: ProductId::new(6),
                quantity: 1,
            }],
        };
        let view = SummaryView::from(&cart.totals(&Catalog::seed()));
        assert_eq!(view.shipping, "$9.99");
        assert_eq!(view.free_shipping_gap.as_deref(), Some("$10.01"));
    }

    #[test]
    fn test_build_items_includes_sale_prices() {
        let catalog = Catalog::seed();
        let items = build_items(&Cart::seeded(), &catalog);
        assert_eq!(items.len(), 2);

        let aviator = items.first().unwrap();
        assert_eq!(aviator.line_price, "$129.99");
        assert_eq!(aviator.line_original_price.as_deref(), Some("$159.99"));

        let square = items.get(1).unwrap();
        assert_eq!(square.quantity, 2);
        assert_eq!(square.line_price, "$399.98");
        assert!(square.line_original_price.is_none());
    }
}
