//! Pixprompt Storage Library
//!
//! This crate provides the blob-store abstraction and implementations for
//! pixprompt. It includes the Storage trait and implementations for
//! S3-compatible object stores and the local filesystem.
//!
//! # Storage key format
//!
//! Keys are generated centrally in the `keys` module so all backends stay
//! consistent:
//!
//! - **Source images**: `uploads/{unix_millis}_{sanitized_filename}`
//! - **Generated images**: `generated-{iso8601}-{uuid}.png`
//!
//! Keys must not contain `..` or a leading `/`. A key is never reused for
//! different content; writes use upsert semantics purely as a no-op safety
//! margin.

pub mod factory;
pub mod keys;
pub mod local;
pub mod s3;
pub mod traits;

// Re-export commonly used types
pub use factory::create_storage;
pub use keys::{generated_image_key, sanitize_filename, source_image_key};
pub use local::LocalStorage;
pub use pixprompt_core::StorageBackend;
pub use s3::S3Storage;
pub use traits::{Storage, StorageError, StorageResult};
