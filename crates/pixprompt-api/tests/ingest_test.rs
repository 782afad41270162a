//! Ingestion endpoint integration tests.
//!
//! Run with: `cargo test -p pixprompt-api --test ingest_test`

mod helpers;

use axum_test::multipart::{MultipartForm, Part};
use helpers::fakes::{FakeBehavior, FakeGenerator};
use helpers::{api_path, setup_test_app, TestApp};

fn png_part(filename: &str) -> Part {
    Part::bytes(helpers::fixtures::create_minimal_png())
        .file_name(filename)
        .mime_type("image/png")
}

#[tokio::test]
async fn test_upload_images_returns_references_in_order() {
    let generator = FakeGenerator::new(FakeBehavior::NoImageData);
    let app = setup_test_app(generator).await;

    let multipart = MultipartForm::new()
        .add_part("image", png_part("first cat.png"))
        .add_part("image", png_part("second.png"));

    let response = app
        .client()
        .post(&api_path("/images"))
        .multipart(multipart)
        .await;

    assert_eq!(response.status_code(), 201);
    let body: serde_json::Value = response.json();
    let images = body["images"].as_array().expect("images array");
    assert_eq!(images.len(), 2);

    assert_eq!(images[0]["originalFilename"], "first cat.png");
    assert_eq!(images[1]["originalFilename"], "second.png");
    assert_eq!(images[0]["contentType"], "image/png");

    // Keys collapse whitespace and land under uploads/
    let first_key = images[0]["key"].as_str().unwrap();
    assert!(first_key.starts_with("uploads/"));
    assert!(first_key.ends_with("_first_cat.png"));

    // Each URL resolves back to the uploaded bytes
    let url = images[0]["url"].as_str().unwrap();
    let stored = app
        .storage
        .download(TestApp::key_from_url(url))
        .await
        .expect("stored object");
    assert_eq!(stored, helpers::fixtures::create_minimal_png());
}

#[tokio::test]
async fn test_upload_without_image_parts_returns_400() {
    let generator = FakeGenerator::new(FakeBehavior::NoImageData);
    let app = setup_test_app(generator).await;

    let multipart = MultipartForm::new().add_text("note", "no files here");

    let response = app
        .client()
        .post(&api_path("/images"))
        .multipart(multipart)
        .await;

    assert_eq!(response.status_code(), 400);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "missing image");
}

#[tokio::test]
async fn test_upload_non_image_returns_400() {
    let generator = FakeGenerator::new(FakeBehavior::NoImageData);
    let app = setup_test_app(generator).await;

    let part = Part::bytes(b"just some text".to_vec())
        .file_name("notes.txt")
        .mime_type("text/plain");
    let multipart = MultipartForm::new().add_part("image", part);

    let response = app
        .client()
        .post(&api_path("/images"))
        .multipart(multipart)
        .await;

    assert_eq!(response.status_code(), 400);
    let body: serde_json::Value = response.json();
    assert!(body["error"]
        .as_str()
        .unwrap()
        .contains("unsupported content type"));
}

#[tokio::test]
async fn test_uploaded_reference_feeds_generation() {
    let generator = FakeGenerator::new(FakeBehavior::Succeed(
        helpers::fixtures::create_minimal_png(),
    ));
    let app = setup_test_app(generator.clone()).await;

    let multipart = MultipartForm::new().add_part("image", png_part("cat.png"));
    let upload_response = app
        .client()
        .post(&api_path("/images"))
        .multipart(multipart)
        .await;
    assert_eq!(upload_response.status_code(), 201);

    let body: serde_json::Value = upload_response.json();
    let url = body["images"][0]["url"].as_str().unwrap().to_string();

    let response = app
        .client()
        .post(&api_path("/generations"))
        .json(&serde_json::json!({
            "prompt": "a cat wearing a hat",
            "imageUrls": [url]
        }))
        .await;

    assert_eq!(response.status_code(), 200);
    assert_eq!(generator.call_count(), 1);
}
