//! Generation endpoint handler

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};

use crate::error::{HttpAppError, ValidatedJson};
use crate::services::{GenerationPipeline, ResultPublisher};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    /// Absent and blank prompts are rejected with the same message, so the
    /// field is optional at the wire level and validated in the pipeline.
    #[serde(default)]
    pub prompt: Option<String>,
    #[serde(default)]
    pub image_urls: Vec<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResponse {
    pub success: bool,
    pub generated_image_url: String,
    pub message: String,
}

/// Run one generation request
///
/// Validates the prompt and source references, calls the image-generation
/// provider, stores the result, and returns its public URL.
///
/// # Errors
/// - `AppError::Validation` - missing prompt or missing image (400)
/// - `AppError::Fetch` - a source reference could not be retrieved
/// - `AppError::Provider` - the provider rejected the request (status mirrored)
/// - `AppError::Storage` - the generated image could not be stored
#[tracing::instrument(
    skip(state, request),
    fields(
        image_count = request.image_urls.len(),
        operation = "generate_image"
    )
)]
pub async fn generate_image(
    State(state): State<Arc<AppState>>,
    ValidatedJson(request): ValidatedJson<GenerateRequest>,
) -> Result<impl IntoResponse, HttpAppError> {
    let pipeline = GenerationPipeline::new(
        state.generator.clone(),
        ResultPublisher::new(state.storage.clone()),
    );

    let prompt = request.prompt.as_deref().unwrap_or("");
    let published = pipeline.run(prompt, &request.image_urls).await?;

    Ok((
        StatusCode::OK,
        Json(GenerateResponse {
            success: true,
            generated_image_url: published.url,
            message: "Image processed and stored successfully".to_string(),
        }),
    ))
}
