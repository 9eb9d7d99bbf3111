//! Product route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Query, State},
    response::IntoResponse,
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use crate::catalog::{Catalog, Category, Product, ProductSort};
use crate::filters;
use crate::routes::cart::load_cart;
use crate::state::AppState;

/// Product display data for templates.
#[derive(Clone)]
pub struct ProductCardView {
    pub product_id: i32,
    pub handle: String,
    pub name: String,
    pub brand: String,
    pub price: String,
    /// Pre-sale price, shown struck through next to a "Sale" badge.
    pub original_price: Option<String>,
    pub image_url: String,
    pub category: String,
    pub rating: String,
    pub reviews: u32,
    pub frame_color: String,
    pub lens_type: String,
}

impl From<&Product> for ProductCardView {
    fn from(product: &Product) -> Self {
        Self {
            product_id: product.id.as_i32(),
            handle: product.handle.clone(),
            name: product.name.clone(),
            brand: product.brand.clone(),
            price: product.price.to_string(),
            original_price: product.original_price.map(|p| p.to_string()),
            image_url: product.image_url.clone(),
            category: product.category.label().to_string(),
            rating: format!("{:.1}", product.rating),
            reviews: product.reviews,
            frame_color: product.frame_color.clone(),
            lens_type: product.lens_type.clone(),
        }
    }
}

/// A `<select>` option with its selected state.
#[derive(Clone)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

/// Product listing query parameters.
#[derive(Debug, Deserialize)]
pub struct ProductsQuery {
    /// Search term matched against product name and brand.
    #[serde(default)]
    pub q: String,
    /// Category filter value; "all" or empty disables it.
    #[serde(default)]
    pub category: String,
    /// Sort order; defaults to popularity.
    #[serde(default)]
    pub sort: String,
}

/// Product listing page template.
#[derive(Template, WebTemplate)]
#[template(path = "products/index.html")]
pub struct ProductsIndexTemplate {
    pub cart_count: u32,
    pub products: Vec<ProductCardView>,
    pub query: String,
    pub categories: Vec<SelectOption>,
    pub sorts: Vec<SelectOption>,
    pub total: usize,
}

/// Build the category dropdown options, marking the active one.
fn category_options(selected: Option<Category>) -> Vec<SelectOption> {
    let mut options = vec![SelectOption {
        value: "all".to_string(),
        label: "All Categories".to_string(),
        selected: selected.is_none(),
    }];
    options.extend(Category::ALL.iter().map(|category| SelectOption {
        value: category.as_str().to_string(),
        label: category.label().to_string(),
        selected: selected == Some(*category),
    }));
    options
}

/// Build the sort dropdown options, marking the active one.
fn sort_options(selected: ProductSort) -> Vec<SelectOption> {
    [
        (ProductSort::Popularity, "Popularity"),
        (ProductSort::PriceLowHigh, "Price: Low to High"),
        (ProductSort::PriceHighLow, "Price: High to Low"),
        (ProductSort::Rating, "Highest Rated"),
    ]
    .into_iter()
    .map(|(sort, label)| SelectOption {
        value: sort.as_str().to_string(),
        label: label.to_string(),
        selected: sort == selected,
    })
    .collect()
}

/// Display the product listing page.
#[instrument(skip(state, session))]
pub async fn index(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<ProductsQuery>,
) -> impl IntoResponse {
    let category = Category::parse(&query.category);
    let sort = ProductSort::parse(&query.sort);

    let mut results = state.catalog().filter_products(&query.q, category);
    Catalog::sort_products(&mut results, sort);

    let products: Vec<ProductCardView> = results.into_iter().map(ProductCardView::from).collect();
    let total = products.len();

    ProductsIndexTemplate {
        cart_count: load_cart(&session).await.total_quantity(),
        products,
        query: query.q,
        categories: category_options(category),
        sorts: sort_options(sort),
        total,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_category_options_mark_selection() {
        let options = category_options(Some(Category::Fashion));
        assert_eq!(options.len(), 5);
        let selected: Vec<_> = options.iter().filter(|o| o.selected).collect();
        assert_eq!(selected.len(), 1);
        assert_eq!(selected.first().unwrap().value, "fashion");
    }

    #[test]
    fn test_category_options_default_to_all() {
        let options = category_options(None);
        assert!(options.first().unwrap().selected);
    }

    #[test]
    fn test_sort_options_mark_selection() {
        let options = sort_options(ProductSort::PriceHighLow);
        let selected: Vec<_> = options.iter().filter(|o| o.selected).collect();
        assert_eq!(selected.len(), 1);
        assert_eq!(selected.first().unwrap().value, "price-high");
    }

    #[test]
    fn test_product_card_view_formats_fields() {
        let catalog = Catalog::seed();
        let product = catalog.product_by_handle("classic-aviator").unwrap();
        let view = ProductCardView::from(product);
        assert_eq!(view.price, "$129.99");
        assert_eq!(view.original_price.as_deref(), Some("$159.99"));
        assert_eq!(view.rating, "4.8");
        assert_eq!(view.category, "Sunglasses");
    }
}
