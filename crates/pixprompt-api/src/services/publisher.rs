//! Generated-image publishing
//!
//! Writes provider output to object storage under a unique key and derives the
//! public URL. The storage diagnostic is logged but never exposed to clients.

use std::sync::Arc;
use std::time::Instant;

use bytes::Bytes;
use pixprompt_core::AppError;
use pixprompt_storage::{keys, Storage};

/// Stable reference to a published result.
#[derive(Debug, Clone)]
pub struct PublishedImage {
    pub key: String,
    pub url: String,
}

pub struct ResultPublisher {
    storage: Arc<dyn Storage>,
}

impl ResultPublisher {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    /// Persist a generated PNG and return its reference.
    pub async fn publish(&self, image_data: Bytes) -> Result<PublishedImage, AppError> {
        let key = keys::generated_image_key();
        let size_bytes = image_data.len();
        let start = Instant::now();

        let url = self
            .storage
            .upload_with_key(&key, image_data.to_vec(), "image/png")
            .await
            .map_err(|e| {
                tracing::error!(
                    error = %e,
                    key = %key,
                    size_bytes,
                    "Failed to upload generated image"
                );
                AppError::Storage(e.to_string())
            })?;

        tracing::info!(
            key = %key,
            size_bytes,
            duration_ms = start.elapsed().as_millis() as u64,
            "Published generated image"
        );

        Ok(PublishedImage { key, url })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pixprompt_storage::LocalStorage;

    #[tokio::test]
    async fn test_publish_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let storage = Arc::new(
            LocalStorage::new(
                dir.path().to_string_lossy().into_owned(),
                "http://localhost:8080/objects".to_string(),
            )
            .await
            .unwrap(),
        );
        let publisher = ResultPublisher::new(storage.clone());

        let data = Bytes::from_static(b"\x89PNG\r\n\x1a\npixels");
        let published = publisher.publish(data.clone()).await.unwrap();

        assert!(published.key.starts_with("generated-"));
        assert!(published.key.ends_with(".png"));
        assert_eq!(
            published.url,
            format!("http://localhost:8080/objects/{}", published.key)
        );

        let stored = storage.download(&published.key).await.unwrap();
        assert_eq!(stored, data.to_vec());
    }

    #[tokio::test]
    async fn test_publish_keys_are_unique() {
        let dir = tempfile::tempdir().unwrap();
        let storage = Arc::new(
            LocalStorage::new(
                dir.path().to_string_lossy().into_owned(),
                "http://localhost:8080/objects".to_string(),
            )
            .await
            .unwrap(),
        );
        let publisher = ResultPublisher::new(storage);

        let first = publisher
            .publish(Bytes::from_static(b"one"))
            .await
            .unwrap();
        let second = publisher
            .publish(Bytes::from_static(b"two"))
            .await
            .unwrap();
        assert_ne!(first.key, second.key);
    }
}
