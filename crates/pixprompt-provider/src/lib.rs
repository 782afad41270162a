//! Pixprompt Provider Library
//!
//! This crate provides the adapter for the external image-generation provider
//! (OpenAI's synchronous image-edit endpoint). The `ImageGenerator` trait is
//! the seam the pipeline orchestrator depends on, so tests can substitute a
//! fake provider.

pub mod error;
pub mod openai;

// Re-export commonly used types
pub use error::ProviderError;
pub use openai::{ImageGenerator, OpenAiImageEditor};
