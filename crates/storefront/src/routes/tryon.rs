//! Virtual try-on route handlers.
//!
//! The try-on page is a demonstration surface: the camera tab is a static
//! placeholder and the upload handler reads the photo and renders it back
//! as a `data:` URL without any processing. No image is ever stored.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Multipart, Query, State};
use axum::response::IntoResponse;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use crate::catalog::Product;
use crate::error::{AppError, Result};
use crate::filters;
use crate::routes::cart::load_cart;
use crate::state::AppState;

/// Maximum accepted photo size (10 MB).
pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Frame picker entry display data.
#[derive(Clone)]
pub struct GlassesOptionView {
    pub product_id: i32,
    pub handle: String,
    pub name: String,
    pub image_url: String,
    pub selected: bool,
}

/// Try-on page query parameters.
#[derive(Debug, Deserialize)]
pub struct TryOnQuery {
    /// Handle of the selected frames; defaults to the first featured pair.
    pub glasses: Option<String>,
    /// Active tab: "camera" (default) or "upload".
    #[serde(default)]
    pub mode: String,
    /// "on" switches the camera tab into its placeholder feed state.
    pub camera: Option<String>,
}

/// Try-on page template.
#[derive(Template, WebTemplate)]
#[template(path = "tryon/show.html")]
pub struct TryOnTemplate {
    pub cart_count: u32,
    pub glasses: Vec<GlassesOptionView>,
    pub selected_handle: String,
    pub selected_name: String,
    /// Active tab: "camera" or "upload".
    pub mode: String,
    pub camera_on: bool,
    /// Uploaded photo as a `data:` URL, displayed verbatim.
    pub uploaded_image: Option<String>,
}

/// Resolve the selected frames and build the picker entries.
fn build_picker(
    featured: &[&Product],
    requested: Option<&str>,
) -> (Vec<GlassesOptionView>, String, String) {
    let selected = requested
        .and_then(|handle| featured.iter().find(|p| p.handle == handle))
        .or_else(|| featured.first())
        .copied();

    let selected_handle = selected.map(|p| p.handle.clone()).unwrap_or_default();
    let selected_name = selected.map(|p| p.name.clone()).unwrap_or_default();

    let options = featured
        .iter()
        .map(|product| GlassesOptionView {
            product_id: product.id.as_i32(),
            handle: product.handle.clone(),
            name: product.name.clone(),
            image_url: product.image_url.clone(),
            selected: product.handle == selected_handle,
        })
        .collect();

    (options, selected_handle, selected_name)
}

/// Resolve the active tab, defaulting to the camera.
fn resolve_mode(requested: &str) -> String {
    if requested == "upload" {
        "upload".to_string()
    } else {
        "camera".to_string()
    }
}

/// Display the try-on page.
#[instrument(skip(state, session))]
pub async fn show(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<TryOnQuery>,
) -> impl IntoResponse {
    let featured = state.catalog().try_on_glasses();
    let (glasses, selected_handle, selected_name) =
        build_picker(&featured, query.glasses.as_deref());

    TryOnTemplate {
        cart_count: load_cart(&session).await.total_quantity(),
        glasses,
        selected_handle,
        selected_name,
        mode: resolve_mode(&query.mode),
        camera_on: query.camera.as_deref() == Some("on"),
        uploaded_image: None,
    }
}

/// Handle a try-on photo upload.
///
/// Accepts a multipart form with a `photo` file field and an optional
/// `glasses` field preserving the frame selection. The photo must be an
/// image and at most [`MAX_UPLOAD_BYTES`]; it is echoed back as a `data:`
/// URL with no processing applied.
#[instrument(skip(state, session, multipart))]
pub async fn upload(
    State(state): State<AppState>,
    session: Session,
    mut multipart: Multipart,
) -> Result<TryOnTemplate> {
    let mut requested_glasses: Option<String> = None;
    let mut uploaded_image: Option<String> = None;

    while let Some(field) = multipart.next_field().await? {
        match field.name() {
            Some("glasses") => {
                requested_glasses = Some(field.text().await?);
            }
            Some("photo") => {
                let content_type = field
                    .content_type()
                    .map(str::to_owned)
                    .ok_or_else(|| AppError::BadRequest("photo has no content type".to_string()))?;

                if !content_type.starts_with("image/") {
                    return Err(AppError::BadRequest(format!(
                        "unsupported file type: {content_type}"
                    )));
                }

                let data = field.bytes().await?;

                if data.is_empty() {
                    return Err(AppError::BadRequest("photo is empty".to_string()));
                }
                if data.len() > MAX_UPLOAD_BYTES {
                    return Err(AppError::PayloadTooLarge);
                }

                uploaded_image = Some(format!(
                    "data:{content_type};base64,{}",
                    BASE64.encode(&data)
                ));
            }
            _ => {}
        }
    }

    let uploaded_image =
        uploaded_image.ok_or_else(|| AppError::BadRequest("missing photo field".to_string()))?;

    let featured = state.catalog().try_on_glasses();
    let (glasses, selected_handle, selected_name) =
        build_picker(&featured, requested_glasses.as_deref());

    Ok(TryOnTemplate {
        cart_count: load_cart(&session).await.total_quantity(),
        glasses,
        selected_handle,
        selected_name,
        mode: "upload".to_string(),
        camera_on: false,
        uploaded_image: Some(uploaded_image),
    })
}
