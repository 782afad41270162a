//! Source-image ingestion
//!
//! Accepts a batch of uploaded blobs, writes each one to object storage under
//! a timestamped key, and returns the resulting public references in input
//! order. One storage write per image, executed concurrently; the first
//! failure short-circuits the batch (already-written objects are not rolled
//! back, in-flight writes are neither awaited nor cancelled).

use std::sync::Arc;

use bytes::Bytes;
use futures::future;
use pixprompt_core::AppError;
use pixprompt_storage::{keys, Storage};
use serde::Serialize;

/// One blob pulled out of the multipart request.
pub struct UploadedFile {
    pub filename: String,
    pub content_type: String,
    pub data: Bytes,
}

/// Reference to a stored source image.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IngestedImage {
    pub key: String,
    pub url: String,
    pub original_filename: String,
    pub content_type: String,
    pub size_bytes: usize,
}

pub struct IngestionService {
    storage: Arc<dyn Storage>,
    max_file_size_bytes: usize,
}

impl IngestionService {
    pub fn new(storage: Arc<dyn Storage>, max_file_size_bytes: usize) -> Self {
        Self {
            storage,
            max_file_size_bytes,
        }
    }

    /// Store a non-empty batch of image blobs. Result order matches input order.
    pub async fn ingest(&self, files: Vec<UploadedFile>) -> Result<Vec<IngestedImage>, AppError> {
        if files.is_empty() {
            return Err(AppError::Validation("missing image".to_string()));
        }

        for file in &files {
            self.validate(file)?;
        }

        tracing::info!(count = files.len(), "Ingesting source images");

        let handles: Vec<_> = files
            .into_iter()
            .map(|file| {
                let storage = self.storage.clone();
                tokio::spawn(async move { store_file(storage, file).await })
            })
            .collect();

        future::try_join_all(handles.into_iter().map(|handle| async move {
            handle.await.map_err(|e| {
                AppError::Internal(format!("Ingestion task failed: {}", e))
            })?
        }))
        .await
    }

    fn validate(&self, file: &UploadedFile) -> Result<(), AppError> {
        if file.data.is_empty() {
            return Err(AppError::Validation(format!(
                "File '{}' is empty",
                file.filename
            )));
        }
        if file.data.len() > self.max_file_size_bytes {
            return Err(AppError::Validation(format!(
                "File '{}' exceeds maximum size of {} bytes",
                file.filename, self.max_file_size_bytes
            )));
        }
        if !file.content_type.starts_with("image/") {
            return Err(AppError::Validation(format!(
                "File '{}' has unsupported content type '{}'",
                file.filename, file.content_type
            )));
        }
        Ok(())
    }
}

async fn store_file(
    storage: Arc<dyn Storage>,
    file: UploadedFile,
) -> Result<IngestedImage, AppError> {
    let key = keys::source_image_key(&file.filename);
    let size_bytes = file.data.len();

    let url = storage
        .upload_with_key(&key, file.data.to_vec(), &file.content_type)
        .await
        .map_err(|e| AppError::Ingestion {
            filename: file.filename.clone(),
            message: e.to_string(),
        })?;

    Ok(IngestedImage {
        key,
        url,
        original_filename: file.filename,
        content_type: file.content_type,
        size_bytes,
    })
}
