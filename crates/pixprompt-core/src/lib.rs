//! Pixprompt Core Library
//!
//! This crate provides the configuration and unified error taxonomy shared
//! across all pixprompt components.

pub mod config;
pub mod error;
pub mod storage_types;

// Re-export commonly used types
pub use config::{Config, PipelineConfig};
pub use error::{AppError, ErrorMetadata, LogLevel};
pub use storage_types::StorageBackend;
