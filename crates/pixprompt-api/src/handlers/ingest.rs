//! Source-image upload handler

use std::sync::Arc;

use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use pixprompt_core::AppError;
use serde::Serialize;

use crate::error::HttpAppError;
use crate::services::{IngestedImage, IngestionService, UploadedFile};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct IngestResponse {
    pub images: Vec<IngestedImage>,
}

/// Upload source images
///
/// Accepts multipart form data with one or more `image` parts, stores each
/// blob, and returns the stored references in the order the parts appeared.
///
/// # Errors
/// - `AppError::Validation` - no image parts, empty file, unsupported content type
/// - `AppError::Ingestion` - a storage write failed, named by file
#[tracing::instrument(skip(state, multipart), fields(operation = "ingest_images"))]
pub async fn ingest_images(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, HttpAppError> {
    let mut files = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart request: {}", e)))?
    {
        if field.name() != Some("image") {
            continue;
        }

        let filename = field
            .file_name()
            .map(String::from)
            .unwrap_or_else(|| "upload.png".to_string());
        let declared_content_type = field.content_type().map(String::from);

        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Failed to read file data: {}", e)))?;

        let content_type = declared_content_type
            .filter(|ct| !ct.is_empty() && ct != "application/octet-stream")
            .unwrap_or_else(|| content_type_from_filename(&filename));

        files.push(UploadedFile {
            filename,
            content_type,
            data,
        });
    }

    let service = IngestionService::new(
        state.storage.clone(),
        state.config.max_file_size_bytes(),
    );
    let images = service.ingest(files).await?;

    Ok((StatusCode::CREATED, Json(IngestResponse { images })))
}

/// Infer a content type from the file extension when the part does not carry
/// a usable one.
fn content_type_from_filename(filename: &str) -> String {
    let extension = filename
        .rsplit('.')
        .next()
        .map(|ext| ext.to_ascii_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "bmp" => "image/bmp",
        _ => "application/octet-stream",
    }
    .to_string()
}
