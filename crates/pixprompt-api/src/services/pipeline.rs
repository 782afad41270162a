//! Generation pipeline orchestrator
//!
//! Drives one generation request end to end: validate the inputs, call the
//! provider, publish the result. Single attempt, no retries; a retried request
//! reuses the already-stored source references, it never re-uploads them.

use std::sync::Arc;

use pixprompt_core::AppError;
use pixprompt_provider::ImageGenerator;

use crate::error::provider_error_to_app;
use crate::services::publisher::{PublishedImage, ResultPublisher};

pub struct GenerationPipeline {
    generator: Arc<dyn ImageGenerator>,
    publisher: ResultPublisher,
}

impl GenerationPipeline {
    pub fn new(generator: Arc<dyn ImageGenerator>, publisher: ResultPublisher) -> Self {
        Self {
            generator,
            publisher,
        }
    }

    /// Run the pipeline for one request. Validation failures return before any
    /// provider call is made.
    pub async fn run(
        &self,
        prompt: &str,
        image_urls: &[String],
    ) -> Result<PublishedImage, AppError> {
        if image_urls.is_empty() {
            return Err(AppError::Validation("missing image".to_string()));
        }
        if prompt.trim().is_empty() {
            return Err(AppError::Validation("missing prompt".to_string()));
        }

        let image_data = self
            .generator
            .generate(prompt, image_urls)
            .await
            .map_err(provider_error_to_app)?;

        self.publisher.publish(image_data).await
    }
}
