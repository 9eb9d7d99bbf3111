//! In-memory product catalog and account mock data.
//!
//! The storefront has no backend: products, orders, the wishlist, and the
//! customer profile are literal records seeded once at startup and shared
//! across handlers via [`crate::state::AppState`]. Everything resets when
//! the process restarts.

use std::sync::Arc;

use chrono::NaiveDate;

use lensvision_core::{Email, OrderStatus, Price, ProductId};

/// Product category shown as a badge and used for filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Sunglasses,
    Prescription,
    Fashion,
    Sports,
}

impl Category {
    /// All categories, in the order the filter dropdown lists them.
    pub const ALL: [Self; 4] = [
        Self::Sunglasses,
        Self::Prescription,
        Self::Fashion,
        Self::Sports,
    ];

    /// Display label (e.g., "Sunglasses").
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Sunglasses => "Sunglasses",
            Self::Prescription => "Prescription",
            Self::Fashion => "Fashion",
            Self::Sports => "Sports",
        }
    }

    /// URL parameter value (e.g., "sunglasses").
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sunglasses => "sunglasses",
            Self::Prescription => "prescription",
            Self::Fashion => "fashion",
            Self::Sports => "sports",
        }
    }

    /// Parse from a URL parameter value.
    ///
    /// Returns `None` for "all", empty, or unknown values, which disables
    /// category filtering.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "sunglasses" => Some(Self::Sunglasses),
            "prescription" => Some(Self::Prescription),
            "fashion" => Some(Self::Fashion),
            "sports" => Some(Self::Sports),
            _ => None,
        }
    }
}

/// Sort order for the product listing.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ProductSort {
    /// Most reviewed first.
    #[default]
    Popularity,
    PriceLowHigh,
    PriceHighLow,
    Rating,
}

impl ProductSort {
    /// Parse from URL parameter value.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s {
            "price-low" => Self::PriceLowHigh,
            "price-high" => Self::PriceHighLow,
            "rating" => Self::Rating,
            _ => Self::Popularity,
        }
    }

    /// Convert to URL parameter value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Popularity => "popularity",
            Self::PriceLowHigh => "price-low",
            Self::PriceHighLow => "price-high",
            Self::Rating => "rating",
        }
    }
}

/// A catalog product.
#[derive(Debug, Clone)]
pub struct Product {
    pub id: ProductId,
    /// URL slug, unique within the catalog.
    pub handle: String,
    pub name: String,
    pub brand: String,
    pub price: Price,
    /// Pre-sale price; when set, the product renders with a "Sale" badge.
    pub original_price: Option<Price>,
    pub rating: f32,
    pub reviews: u32,
    pub image_url: String,
    pub category: Category,
    pub frame_color: String,
    pub lens_type: String,
    /// Whether the product appears in the try-on frame picker.
    pub try_on_featured: bool,
}

impl Product {
    /// Whether the product is discounted.
    #[must_use]
    pub const fn on_sale(&self) -> bool {
        self.original_price.is_some()
    }
}

/// A past order shown on the dashboard.
#[derive(Debug, Clone)]
pub struct Order {
    /// Display number (e.g., "ORD-001").
    pub number: String,
    pub placed_on: NaiveDate,
    pub status: OrderStatus,
    pub total: Price,
    /// Names of the ordered products.
    pub item_names: Vec<String>,
}

/// Street address on file for the mock customer.
#[derive(Debug, Clone)]
pub struct Address {
    pub label: String,
    pub line1: String,
    pub city: String,
    pub region: String,
    pub postal_code: String,
}

/// Masked payment card on file for the mock customer.
#[derive(Debug, Clone)]
pub struct PaymentCard {
    pub masked_number: String,
    pub expires: String,
}

/// Notification preferences shown in dashboard settings.
#[derive(Debug, Clone, Copy)]
pub struct NotificationPrefs {
    pub order_updates: bool,
    pub promotions: bool,
}

/// Headline counters on the dashboard overview.
#[derive(Debug, Clone, Copy)]
pub struct AccountStats {
    pub total_orders: u32,
    pub wishlist_items: u32,
    pub loyalty_points: u32,
}

/// The mock signed-in customer.
#[derive(Debug, Clone)]
pub struct CustomerProfile {
    pub display_name: String,
    pub tier: String,
    pub first_name: String,
    pub last_name: String,
    pub email: Email,
    pub phone: String,
    pub avatar_url: String,
    pub address: Address,
    pub payment: PaymentCard,
    pub notifications: NotificationPrefs,
    pub stats: AccountStats,
}

/// Immutable catalog store seeded at startup.
///
/// Cheaply cloneable; the product list is shared behind an `Arc`.
#[derive(Debug, Clone)]
pub struct Catalog {
    inner: Arc<CatalogInner>,
}

#[derive(Debug)]
struct CatalogInner {
    products: Vec<Product>,
    orders: Vec<Order>,
    wishlist: Vec<ProductId>,
    profile: CustomerProfile,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::seed()
    }
}

impl Catalog {
    /// Build the catalog from the hard-coded mock data.
    #[must_use]
    pub fn seed() -> Self {
        Self {
            inner: Arc::new(CatalogInner {
                products: seed_products(),
                orders: seed_orders(),
                wishlist: vec![ProductId::new(5), ProductId::new(4)],
                profile: seed_profile(),
            }),
        }
    }

    /// All products in catalog order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.inner.products
    }

    /// Look up a product by ID.
    #[must_use]
    pub fn product(&self, id: ProductId) -> Option<&Product> {
        self.inner.products.iter().find(|p| p.id == id)
    }

    /// Look up a product by URL handle.
    #[must_use]
    pub fn product_by_handle(&self, handle: &str) -> Option<&Product> {
        self.inner.products.iter().find(|p| p.handle == handle)
    }

    /// Filter products by search term and category.
    ///
    /// The search term matches case-insensitively as a substring of the
    /// product name or brand. The category must match exactly; `None`
    /// disables the category filter. Both conditions AND together.
    #[must_use]
    pub fn filter_products(&self, query: &str, category: Option<Category>) -> Vec<&Product> {
        let needle = query.trim().to_lowercase();

        self.inner
            .products
            .iter()
            .filter(|product| {
                let matches_search = needle.is_empty()
                    || product.name.to_lowercase().contains(&needle)
                    || product.brand.to_lowercase().contains(&needle);
                let matches_category = category.is_none_or(|c| product.category == c);
                matches_search && matches_category
            })
            .collect()
    }

    /// Sort a filtered product list in place.
    pub fn sort_products(products: &mut [&Product], sort: ProductSort) {
        match sort {
            ProductSort::Popularity => products.sort_by(|a, b| b.reviews.cmp(&a.reviews)),
            ProductSort::PriceLowHigh => {
                products.sort_by(|a, b| a.price.amount.cmp(&b.price.amount));
            }
            ProductSort::PriceHighLow => {
                products.sort_by(|a, b| b.price.amount.cmp(&a.price.amount));
            }
            ProductSort::Rating => products.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
        }
    }

    /// Products featured in the try-on frame picker.
    #[must_use]
    pub fn try_on_glasses(&self) -> Vec<&Product> {
        self.inner
            .products
            .iter()
            .filter(|p| p.try_on_featured)
            .collect()
    }

    /// All past orders, newest first.
    #[must_use]
    pub fn orders(&self) -> &[Order] {
        &self.inner.orders
    }

    /// Wishlist entries resolved against the catalog.
    ///
    /// Dangling product IDs are skipped.
    #[must_use]
    pub fn wishlist_products(&self) -> Vec<&Product> {
        self.inner
            .wishlist
            .iter()
            .filter_map(|id| self.product(*id))
            .collect()
    }

    /// The mock customer profile.
    #[must_use]
    pub fn profile(&self) -> &CustomerProfile {
        &self.inner.profile
    }
}

fn unsplash(photo: &str, size: u32) -> String {
    format!("https://images.unsplash.com/{photo}?w={size}&h={size}&fit=crop")
}

#[allow(clippy::too_many_lines)]
fn seed_products() -> Vec<Product> {
    vec![
        Product {
            id: ProductId::new(1),
            handle: "classic-aviator".to_string(),
            name: "Classic Aviator".to_string(),
            brand: "LensVision".to_string(),
            price: Price::usd_cents(12999),
            original_price: Some(Price::usd_cents(15999)),
            rating: 4.8,
            reviews: 124,
            image_url: unsplash("photo-1511499767150-a48a237f0083", 400),
            category: Category::Sunglasses,
            frame_color: "Gold".to_string(),
            lens_type: "Polarized".to_string(),
            try_on_featured: true,
        },
        Product {
            id: ProductId::new(2),
            handle: "modern-square".to_string(),
            name: "Modern Square".to_string(),
            brand: "LensVision Pro".to_string(),
            price: Price::usd_cents(19999),
            original_price: None,
            rating: 4.9,
            reviews: 89,
            image_url: unsplash("photo-1574258495973-f010dfbb5371", 400),
            category: Category::Prescription,
            frame_color: "Black".to_string(),
            lens_type: "Blue Light".to_string(),
            try_on_featured: true,
        },
        Product {
            id: ProductId::new(3),
            handle: "vintage-round".to_string(),
            name: "Vintage Round".to_string(),
            brand: "Retro Vision".to_string(),
            price: Price::usd_cents(14999),
            original_price: None,
            rating: 4.7,
            reviews: 156,
            image_url: unsplash("photo-1577803645773-f96470509666", 400),
            category: Category::Fashion,
            frame_color: "Tortoiseshell".to_string(),
            lens_type: "Clear".to_string(),
            try_on_featured: true,
        },
        Product {
            id: ProductId::new(4),
            handle: "sport-performance".to_string(),
            name: "Sport Performance".to_string(),
            brand: "Active Vision".to_string(),
            price: Price::usd_cents(17999),
            original_price: None,
            rating: 4.6,
            reviews: 203,
            image_url: unsplash("photo-1508296695146-257a814070b4", 400),
            category: Category::Sports,
            frame_color: "Matte Black".to_string(),
            lens_type: "Anti-Glare".to_string(),
            try_on_featured: false,
        },
        Product {
            id: ProductId::new(5),
            handle: "cat-eye-glamour".to_string(),
            name: "Cat Eye Glamour".to_string(),
            brand: "Chic Vision".to_string(),
            price: Price::usd_cents(13999),
            original_price: None,
            rating: 4.8,
            reviews: 167,
            image_url: unsplash("photo-1556306535-38febf6782d7", 400),
            category: Category::Fashion,
            frame_color: "Rose Gold".to_string(),
            lens_type: "Gradient".to_string(),
            try_on_featured: false,
        },
        Product {
            id: ProductId::new(6),
            handle: "minimalist-wire".to_string(),
            name: "Minimalist Wire".to_string(),
            brand: "Clean Vision".to_string(),
            price: Price::usd_cents(8999),
            original_price: None,
            rating: 4.5,
            reviews: 98,
            image_url: unsplash("photo-1473496169904-658ba7c44d8a", 400),
            category: Category::Prescription,
            frame_color: "Silver".to_string(),
            lens_type: "Clear".to_string(),
            try_on_featured: false,
        },
    ]
}

fn seed_orders() -> Vec<Order> {
    vec![
        Order {
            number: "ORD-001".to_string(),
            placed_on: NaiveDate::from_ymd_opt(2024, 1, 15).expect("valid seed date"),
            status: OrderStatus::Delivered,
            total: Price::usd_cents(32998),
            item_names: vec!["Classic Aviator".to_string(), "Modern Square".to_string()],
        },
        Order {
            number: "ORD-002".to_string(),
            placed_on: NaiveDate::from_ymd_opt(2024, 1, 10).expect("valid seed date"),
            status: OrderStatus::Processing,
            total: Price::usd_cents(14999),
            item_names: vec!["Vintage Round".to_string()],
        },
    ]
}

fn seed_profile() -> CustomerProfile {
    CustomerProfile {
        display_name: "John Doe".to_string(),
        tier: "Premium Member".to_string(),
        first_name: "John".to_string(),
        last_name: "Doe".to_string(),
        email: Email::parse("john.doe@example.com").expect("valid seed email"),
        phone: "+1 (555) 123-4567".to_string(),
        avatar_url: unsplash("photo-1472099645785-5658abf4ff4e", 100),
        address: Address {
            label: "Home".to_string(),
            line1: "123 Main St".to_string(),
            city: "New York".to_string(),
            region: "NY".to_string(),
            postal_code: "10001".to_string(),
        },
        payment: PaymentCard {
            masked_number: "\u{2022}\u{2022}\u{2022}\u{2022} \u{2022}\u{2022}\u{2022}\u{2022} \u{2022}\u{2022}\u{2022}\u{2022} 1234".to_string(),
            expires: "12/25".to_string(),
        },
        notifications: NotificationPrefs {
            order_updates: true,
            promotions: true,
        },
        stats: AccountStats {
            total_orders: 12,
            wishlist_items: 8,
            loyalty_points: 2450,
        },
    }
}
