//! Generation endpoint integration tests.
//!
//! Run with: `cargo test -p pixprompt-api --test generations_test`

mod helpers;

use helpers::fakes::{FakeBehavior, FakeGenerator};
use helpers::{api_path, setup_test_app, TestApp};
use serde_json::json;

#[tokio::test]
async fn test_missing_prompt_returns_400_without_provider_call() {
    let generator = FakeGenerator::new(FakeBehavior::Succeed(
        helpers::fixtures::create_minimal_png(),
    ));
    let app = setup_test_app(generator.clone()).await;

    let response = app
        .client()
        .post(&api_path("/generations"))
        .json(&json!({
            "imageUrls": ["http://localhost/uploads/cat.png"]
        }))
        .await;

    assert_eq!(response.status_code(), 400);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "missing prompt");
    assert_eq!(generator.call_count(), 0);
}

#[tokio::test]
async fn test_blank_prompt_returns_400_without_provider_call() {
    let generator = FakeGenerator::new(FakeBehavior::Succeed(
        helpers::fixtures::create_minimal_png(),
    ));
    let app = setup_test_app(generator.clone()).await;

    let response = app
        .client()
        .post(&api_path("/generations"))
        .json(&json!({
            "prompt": "   ",
            "imageUrls": ["http://localhost/uploads/cat.png"]
        }))
        .await;

    assert_eq!(response.status_code(), 400);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "missing prompt");
    assert_eq!(generator.call_count(), 0);
}

#[tokio::test]
async fn test_missing_images_returns_400_without_provider_call() {
    let generator = FakeGenerator::new(FakeBehavior::Succeed(
        helpers::fixtures::create_minimal_png(),
    ));
    let app = setup_test_app(generator.clone()).await;

    let response = app
        .client()
        .post(&api_path("/generations"))
        .json(&json!({
            "prompt": "a cat wearing a hat",
            "imageUrls": []
        }))
        .await;

    assert_eq!(response.status_code(), 400);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "missing image");
    assert_eq!(generator.call_count(), 0);
}

#[tokio::test]
async fn test_successful_generation_stores_png_and_returns_url() {
    let png_data = helpers::fixtures::create_minimal_png();
    let generator = FakeGenerator::new(FakeBehavior::Succeed(png_data.clone()));
    let app = setup_test_app(generator.clone()).await;

    let response = app
        .client()
        .post(&api_path("/generations"))
        .json(&json!({
            "prompt": "a cat wearing a hat",
            "imageUrls": ["http://localhost/uploads/cat.png"]
        }))
        .await;

    assert_eq!(response.status_code(), 200);
    let body: serde_json::Value = response.json();
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Image processed and stored successfully");
    assert_eq!(generator.call_count(), 1);
    assert_eq!(generator.last_prompt().as_deref(), Some("a cat wearing a hat"));

    // The returned URL resolves to the exact bytes the provider produced
    let url = body["generatedImageUrl"].as_str().expect("URL in response");
    let key = TestApp::key_from_url(url);
    assert!(key.starts_with("generated-"));
    assert!(key.ends_with(".png"));

    let stored = app.storage.download(key).await.expect("stored object");
    assert_eq!(stored, png_data);
}

#[tokio::test]
async fn test_provider_rejection_mirrors_status_and_details() {
    let upstream_body = json!({
        "error": {
            "code": "rate_limit_exceeded",
            "message": "Rate limit reached for gpt-image-1"
        }
    });
    let generator = FakeGenerator::new(FakeBehavior::RejectUpstream {
        status: 429,
        body: upstream_body.clone(),
    });
    let app = setup_test_app(generator.clone()).await;

    let response = app
        .client()
        .post(&api_path("/generations"))
        .json(&json!({
            "prompt": "a cat wearing a hat",
            "imageUrls": ["http://localhost/uploads/cat.png"]
        }))
        .await;

    assert_eq!(response.status_code(), 429);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "Error from OpenAI API");
    assert_eq!(body["details"], upstream_body);
}

#[tokio::test]
async fn test_empty_provider_response_returns_500() {
    let generator = FakeGenerator::new(FakeBehavior::NoImageData);
    let app = setup_test_app(generator.clone()).await;

    let response = app
        .client()
        .post(&api_path("/generations"))
        .json(&json!({
            "prompt": "a cat wearing a hat",
            "imageUrls": ["http://localhost/uploads/cat.png"]
        }))
        .await;

    assert_eq!(response.status_code(), 500);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "No image data received from OpenAI API");
    assert!(body.get("details").is_none());
}

#[tokio::test]
async fn test_health_endpoint() {
    let generator = FakeGenerator::new(FakeBehavior::NoImageData);
    let app = setup_test_app(generator).await;

    let response = app.client().get("/health").await;
    assert_eq!(response.status_code(), 200);
    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["storage"], "healthy");
}
