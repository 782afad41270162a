//! Storage abstraction trait
//!
//! This module defines the Storage trait that all blob-store backends must
//! implement.

use crate::StorageBackend;
use async_trait::async_trait;
use thiserror::Error;

/// Storage operation errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Upload failed: {0}")]
    UploadFailed(String),

    #[error("Download failed: {0}")]
    DownloadFailed(String),

    #[error("Delete failed: {0}")]
    DeleteFailed(String),

    #[error("Object not found: {0}")]
    NotFound(String),

    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    #[error("Storage backend error: {0}")]
    BackendError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Storage abstraction trait
///
/// All blob-store backends (S3-compatible, local filesystem) must implement
/// this trait. The ingestion and publishing services work against it without
/// coupling to specific implementation details.
///
/// **Key format:** see the crate root documentation; key generation is
/// centralized in the `keys` module so all backends stay consistent.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Upload data to a specific storage key and return the public URL.
    ///
    /// Writes have upsert semantics (overwrite-if-exists). Keys are unique by
    /// construction, so an overwrite never actually happens.
    async fn upload_with_key(
        &self,
        storage_key: &str,
        data: Vec<u8>,
        content_type: &str,
    ) -> StorageResult<String>;

    /// Download an object by its storage key
    async fn download(&self, storage_key: &str) -> StorageResult<Vec<u8>>;

    /// Resolve the durable public URL for a storage key.
    ///
    /// Purely deterministic: derived from the backend's base location and the
    /// key, valid for the object's lifetime in the store.
    fn public_url(&self, storage_key: &str) -> String;

    /// Check if an object exists
    async fn exists(&self, storage_key: &str) -> StorageResult<bool>;

    /// Delete an object by its storage key
    async fn delete(&self, storage_key: &str) -> StorageResult<()>;

    /// Get the storage backend type
    fn backend_type(&self) -> StorageBackend;
}
