//! Pipeline services
//!
//! Business logic for the generation pipeline, kept out of the HTTP handlers
//! so each stage can be tested on its own.

pub mod ingestion;
pub mod pipeline;
pub mod publisher;

pub use ingestion::{IngestedImage, IngestionService, UploadedFile};
pub use pipeline::GenerationPipeline;
pub use publisher::{PublishedImage, ResultPublisher};
