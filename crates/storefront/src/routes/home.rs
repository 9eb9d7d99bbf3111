//! Home page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};
use tower_sessions::Session;
use tracing::instrument;

use crate::filters;
use crate::routes::cart::load_cart;
use crate::routes::products::ProductCardView;
use crate::state::AppState;

// =============================================================================
// Hero Configuration (Static content)
// =============================================================================

/// Hero banner content.
#[derive(Clone)]
pub struct HeroContent {
    pub title: String,
    pub highlight: String,
    pub tagline: String,
    pub subtitle: String,
    pub primary_cta_text: String,
    pub primary_cta_url: String,
    pub secondary_cta_text: String,
    pub secondary_cta_url: String,
}

impl Default for HeroContent {
    fn default() -> Self {
        Self {
            title: "Try On".to_string(),
            highlight: "Perfect Glasses".to_string(),
            tagline: "Virtually".to_string(),
            subtitle: "Experience the future of eyewear shopping with our AI-powered \
                       virtual try-on technology. Find your perfect frames instantly."
                .to_string(),
            primary_cta_text: "Start Camera Try-On".to_string(),
            primary_cta_url: "/try-on?camera=on".to_string(),
            secondary_cta_text: "Upload Photo".to_string(),
            secondary_cta_url: "/try-on?mode=upload".to_string(),
        }
    }
}

// =============================================================================
// Feature Grid Data
// =============================================================================

/// A feature card on the home page.
#[derive(Clone)]
pub struct FeatureView {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

/// Static features for the "Why Choose LensVision?" grid.
fn get_features() -> Vec<FeatureView> {
    vec![
        FeatureView {
            icon: "\u{1f4f7}",
            title: "Real-Time AR Try-On",
            description: "Experience cutting-edge augmented reality technology for instant \
                          virtual glasses fitting.",
        },
        FeatureView {
            icon: "\u{1f4f1}",
            title: "Mobile Optimized",
            description: "Seamless experience across all devices with responsive design and \
                          touch-friendly controls.",
        },
        FeatureView {
            icon: "\u{1f3a8}",
            title: "Customize & Adjust",
            description: "Fine-tune frame position, size, and angle to get the perfect fit \
                          for your face.",
        },
        FeatureView {
            icon: "\u{1f512}",
            title: "Privacy Protected",
            description: "Your photos are processed locally in your browser - we never store \
                          your personal images.",
        },
        FeatureView {
            icon: "\u{23f1}",
            title: "Instant Results",
            description: "See how you look in different frames instantly without waiting or \
                          downloading apps.",
        },
        FeatureView {
            icon: "\u{1f465}",
            title: "Social Sharing",
            description: "Share your virtual try-on results with friends and family to get \
                          their opinions.",
        },
    ]
}

/// Static highlights for the "Try Before You Buy" promo section.
fn get_tryon_highlights() -> Vec<FeatureView> {
    vec![
        FeatureView {
            icon: "\u{1f4f7}",
            title: "Live Camera Try-On",
            description: "Use your device camera for real-time virtual fitting. See how \
                          frames look on your face instantly.",
        },
        FeatureView {
            icon: "\u{2b06}",
            title: "Photo Upload",
            description: "Upload your favorite photo and try on different frames. Perfect \
                          for getting opinions from friends.",
        },
        FeatureView {
            icon: "\u{1f4f1}",
            title: "Mobile Optimized",
            description: "Seamless experience across all devices. Try on glasses anywhere, \
                          anytime.",
        },
        FeatureView {
            icon: "\u{26a1}",
            title: "Instant Results",
            description: "No downloads, no waiting. Get immediate results with our advanced \
                          AR technology.",
        },
    ]
}

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub cart_count: u32,
    /// Hero banner content.
    pub hero: HeroContent,
    /// Feature cards for the "Why Choose LensVision?" grid.
    pub features: Vec<FeatureView>,
    /// Featured collection products.
    pub featured_products: Vec<ProductCardView>,
    /// Highlights for the try-on promo section.
    pub tryon_highlights: Vec<FeatureView>,
}

/// Display the home page.
#[instrument(skip(state, session))]
pub async fn home(State(state): State<AppState>, session: Session) -> impl IntoResponse {
    let featured_products = state
        .catalog()
        .products()
        .iter()
        .map(ProductCardView::from)
        .collect();

    HomeTemplate {
        cart_count: load_cart(&session).await.total_quantity(),
        hero: HeroContent::default(),
        features: get_features(),
        featured_products,
        tryon_highlights: get_tryon_highlights(),
    }
}
