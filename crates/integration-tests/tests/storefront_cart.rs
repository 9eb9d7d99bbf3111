//! Integration tests for cart flows and the try-on upload.
//!
//! These tests require a running storefront server:
//!
//! ```bash
//! cargo run -p lensvision-storefront
//! cargo test -p lensvision-integration-tests -- --ignored
//! ```
//!
//! Each test uses its own cookie-store client, so it gets a fresh session
//! seeded with the demo cart.

use reqwest::StatusCode;
use reqwest::multipart::{Form, Part};

use lensvision_integration_tests::{session_client, storefront_base_url};

/// A minimal valid PNG (1x1 transparent pixel).
const TINY_PNG: &[u8] = &[
    0x89, 0x50, 0x4e, 0x47, 0x0d, 0x0a, 0x1a, 0x0a, 0x00, 0x00, 0x00, 0x0d, 0x49, 0x48, 0x44,
    0x52, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x08, 0x06, 0x00, 0x00, 0x00, 0x1f,
    0x15, 0xc4, 0x89, 0x00, 0x00, 0x00, 0x0d, 0x49, 0x44, 0x41, 0x54, 0x78, 0x9c, 0x62, 0x00,
    0x01, 0x00, 0x00, 0x05, 0x00, 0x01, 0x0d, 0x0a, 0x2d, 0xb4, 0x00, 0x00, 0x00, 0x00, 0x49,
    0x45, 0x4e, 0x44, 0xae, 0x42, 0x60, 0x82,
];

#[tokio::test]
#[ignore = "Requires running storefront server"]
async fn test_fresh_session_shows_seeded_cart() {
    let client = session_client();
    let resp = client
        .get(format!("{}/cart", storefront_base_url()))
        .send()
        .await
        .expect("Failed to reach storefront");

    assert_eq!(resp.status(), StatusCode::OK);
    let body = resp.text().await.expect("Failed to read body");

    assert!(body.contains("2 items in your cart"));
    assert!(body.contains("Classic Aviator"));
    assert!(body.contains("Modern Square"));
    // 129.99 + 2 x 199.99, free shipping, 8% tax
    assert!(body.contains("$529.97"));
    assert!(body.contains("Free"));
    assert!(body.contains("$42.40"));
    assert!(body.contains("$572.37"));
}

#[tokio::test]
#[ignore = "Requires running storefront server"]
async fn test_cart_quantity_update_recomputes_totals() {
    let client = session_client();
    let base_url = storefront_base_url();

    // Drop the Modern Square line from 2 to 1
    let resp = client
        .post(format!("{base_url}/cart/update"))
        .form(&[("product_id", "2"), ("delta", "-1")])
        .send()
        .await
        .expect("Failed to post update");
    assert_eq!(resp.status(), StatusCode::OK); // after redirect

    let body = resp.text().await.expect("Failed to read body");
    // 129.99 + 199.99 = 329.98
    assert!(body.contains("$329.98"));
}

#[tokio::test]
#[ignore = "Requires running storefront server"]
async fn test_cart_decrement_to_zero_removes_line() {
    let client = session_client();
    let base_url = storefront_base_url();

    let resp = client
        .post(format!("{base_url}/cart/update"))
        .form(&[("product_id", "1"), ("delta", "-1")])
        .send()
        .await
        .expect("Failed to post update");

    let body = resp.text().await.expect("Failed to read body");
    assert!(body.contains("1 item in your cart"));
    assert!(!body.contains("Classic Aviator"));
}

#[tokio::test]
#[ignore = "Requires running storefront server"]
async fn test_emptying_cart_shows_empty_state() {
    let client = session_client();
    let base_url = storefront_base_url();

    for product_id in ["1", "2"] {
        client
            .post(format!("{base_url}/cart/remove"))
            .form(&[("product_id", product_id)])
            .send()
            .await
            .expect("Failed to post remove");
    }

    let body = client
        .get(format!("{base_url}/cart"))
        .send()
        .await
        .expect("Failed to reach storefront")
        .text()
        .await
        .expect("Failed to read body");

    assert!(body.contains("Your cart is empty"));
}

#[tokio::test]
#[ignore = "Requires running storefront server"]
async fn test_add_to_cart_increments_badge() {
    let client = session_client();
    let base_url = storefront_base_url();

    let resp = client
        .post(format!("{base_url}/cart/add"))
        .form(&[("product_id", "3")])
        .send()
        .await
        .expect("Failed to post add");

    let body = resp.text().await.expect("Failed to read body");
    assert!(body.contains("Vintage Round"));
    assert!(body.contains("3 items in your cart"));
}

#[tokio::test]
#[ignore = "Requires running storefront server"]
async fn test_add_unknown_product_is_ignored() {
    let client = session_client();
    let base_url = storefront_base_url();

    let resp = client
        .post(format!("{base_url}/cart/add"))
        .form(&[("product_id", "999")])
        .send()
        .await
        .expect("Failed to post add");

    // Redirects to the cart, which still holds only the seeded lines
    let body = resp.text().await.expect("Failed to read body");
    assert!(body.contains("2 items in your cart"));
}

#[tokio::test]
#[ignore = "Requires running storefront server"]
async fn test_tryon_upload_echoes_image() {
    let client = session_client();

    let photo = Part::bytes(TINY_PNG.to_vec())
        .file_name("face.png")
        .mime_str("image/png")
        .expect("valid mime");
    let form = Form::new()
        .text("glasses", "modern-square")
        .part("photo", photo);

    let resp = client
        .post(format!("{}/try-on/upload", storefront_base_url()))
        .multipart(form)
        .send()
        .await
        .expect("Failed to post upload");

    assert_eq!(resp.status(), StatusCode::OK);
    let body = resp.text().await.expect("Failed to read body");

    // The photo comes back verbatim as a data URL, frame selection intact
    assert!(body.contains("data:image/png;base64,"));
    assert!(body.contains("Try On Modern Square"));
}

#[tokio::test]
#[ignore = "Requires running storefront server"]
async fn test_tryon_upload_rejects_non_image() {
    let client = session_client();

    let photo = Part::bytes(b"not an image".to_vec())
        .file_name("notes.txt")
        .mime_str("text/plain")
        .expect("valid mime");
    let form = Form::new().part("photo", photo);

    let resp = client
        .post(format!("{}/try-on/upload", storefront_base_url()))
        .multipart(form)
        .send()
        .await
        .expect("Failed to post upload");

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
#[ignore = "Requires running storefront server"]
async fn test_tryon_upload_requires_photo_field() {
    let client = session_client();

    let form = Form::new().text("glasses", "classic-aviator");
    let resp = client
        .post(format!("{}/try-on/upload", storefront_base_url()))
        .multipart(form)
        .send()
        .await
        .expect("Failed to post upload");

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}
