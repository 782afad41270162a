//! OpenAI image-edit adapter
//!
//! Fetches every source image, packages one multipart request against the
//! synchronous `images/edits` endpoint, and normalizes the response (inline
//! base64 or second-stage URL) into a single binary PNG payload.

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use base64::Engine as _;
use bytes::Bytes;
use futures::future;
use pixprompt_core::Config;
use serde::Deserialize;

use crate::error::ProviderError;

const EDIT_ENDPOINT: &str = "images/edits";

/// Seam between the pipeline orchestrator and the external provider.
#[async_trait]
pub trait ImageGenerator: Send + Sync {
    /// Generate a single image from a prompt and a set of resolvable
    /// source-image references. The returned bytes are PNG.
    async fn generate(&self, prompt: &str, image_urls: &[String])
        -> Result<Bytes, ProviderError>;
}

/// Adapter for OpenAI's synchronous image-edit endpoint
pub struct OpenAiImageEditor {
    http_client: reqwest::Client,
    api_base: String,
    api_key: String,
    model: String,
}

/// A fetched source image: raw bytes plus the content type the origin reported.
struct SourceImage {
    bytes: Bytes,
    content_type: String,
}

/// Response of the edit endpoint. The provider returns one of two shapes per
/// item; inline base64 data takes priority over a second-stage URL, which is
/// why `Inline` is listed first (untagged decoding tries variants in order).
#[derive(Debug, Deserialize)]
struct EditImageResponse {
    #[serde(default)]
    data: Vec<GeneratedImage>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum GeneratedImage {
    Inline { b64_json: String },
    Hosted { url: String },
}

impl OpenAiImageEditor {
    pub fn new(config: &Config) -> Result<Self> {
        Self::with_options(
            config.openai_api_base().to_string(),
            config.openai_api_key().to_string(),
            config.openai_image_model().to_string(),
            Duration::from_secs(config.provider_timeout_secs()),
        )
    }

    pub fn with_options(
        api_base: String,
        api_key: String,
        model: String,
        timeout: Duration,
    ) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to create HTTP client for OpenAI image editor")?;

        Ok(Self {
            http_client,
            api_base,
            api_key,
            model,
        })
    }

    /// Fetch all source images concurrently, preserving input order.
    ///
    /// Each fetch runs in its own spawned task; the join fails fast on the
    /// first error while sibling fetches run to completion unobserved (they
    /// are idempotent reads, so leaving them in flight is harmless).
    async fn fetch_source_images(
        &self,
        image_urls: &[String],
    ) -> Result<Vec<SourceImage>, ProviderError> {
        let handles: Vec<_> = image_urls
            .iter()
            .map(|url| {
                let client = self.http_client.clone();
                let url = url.clone();
                tokio::spawn(async move { fetch_source_image(&client, url).await })
            })
            .collect();

        future::try_join_all(handles.into_iter().zip(image_urls.iter()).map(
            |(handle, url)| async move {
                handle.await.map_err(|e| ProviderError::Fetch {
                    url: url.clone(),
                    reason: format!("fetch task failed: {}", e),
                })?
            },
        ))
        .await
    }

    /// One additional fetch for the URL-referenced response shape.
    async fn download_generated(&self, url: &str) -> Result<Bytes, ProviderError> {
        let response = self
            .http_client
            .get(url)
            .send()
            .await
            .map_err(|e| ProviderError::Fetch {
                url: url.to_string(),
                reason: e.to_string(),
            })?;

        if !response.status().is_success() {
            return Err(ProviderError::Fetch {
                url: url.to_string(),
                reason: format!("status code {}", response.status()),
            });
        }

        response.bytes().await.map_err(|e| ProviderError::Fetch {
            url: url.to_string(),
            reason: e.to_string(),
        })
    }
}

async fn fetch_source_image(
    client: &reqwest::Client,
    url: String,
) -> Result<SourceImage, ProviderError> {
    let response = client
        .get(&url)
        .send()
        .await
        .map_err(|e| ProviderError::Fetch {
            url: url.clone(),
            reason: e.to_string(),
        })?;

    if !response.status().is_success() {
        return Err(ProviderError::Fetch {
            url,
            reason: format!("status code {}", response.status()),
        });
    }

    let content_type = response
        .headers()
        .get("content-type")
        .and_then(|h| h.to_str().ok())
        .map(|ct| ct.split(';').next().unwrap_or("").trim().to_string())
        .filter(|ct| ct.starts_with("image/"))
        .unwrap_or_else(|| "image/png".to_string());

    let bytes = response.bytes().await.map_err(|e| ProviderError::Fetch {
        url,
        reason: e.to_string(),
    })?;

    Ok(SourceImage {
        bytes,
        content_type,
    })
}

/// Pick the image payload out of a 2xx edit response.
fn parse_edit_response(payload: serde_json::Value) -> Result<GeneratedImage, ProviderError> {
    let parsed: EditImageResponse =
        serde_json::from_value(payload).map_err(|_| ProviderError::NoImageData)?;
    parsed
        .data
        .into_iter()
        .next()
        .ok_or(ProviderError::NoImageData)
}

#[async_trait]
impl ImageGenerator for OpenAiImageEditor {
    async fn generate(
        &self,
        prompt: &str,
        image_urls: &[String],
    ) -> Result<Bytes, ProviderError> {
        let images = self.fetch_source_images(image_urls).await?;

        let mut form = reqwest::multipart::Form::new()
            .text("prompt", prompt.to_string())
            .text("model", self.model.clone());

        for (index, image) in images.into_iter().enumerate() {
            let part = reqwest::multipart::Part::bytes(image.bytes.to_vec())
                .file_name(format!("image_{}.png", index))
                .mime_str(&image.content_type)
                .map_err(|e| {
                    ProviderError::InvalidResponse(format!(
                        "invalid source content type '{}': {}",
                        image.content_type, e
                    ))
                })?;
            form = form.part(format!("image_{}", index), part);
        }

        let endpoint = format!("{}/{}", self.api_base.trim_end_matches('/'), EDIT_ENDPOINT);

        tracing::info!(
            model = %self.model,
            image_count = image_urls.len(),
            prompt_len = prompt.len(),
            "Calling OpenAI image edit endpoint"
        );

        let response = self
            .http_client
            .post(&endpoint)
            .bearer_auth(&self.api_key)
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            // Carry the upstream body verbatim; fall back to a raw string when
            // the provider answers with something that is not JSON.
            let body = serde_json::from_str(&text)
                .unwrap_or_else(|_| serde_json::Value::String(text));
            tracing::warn!(status = status.as_u16(), "OpenAI API rejected the request");
            return Err(ProviderError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        let payload: serde_json::Value = response
            .json()
            .await
            .map_err(|e| ProviderError::InvalidResponse(e.to_string()))?;

        match parse_edit_response(payload)? {
            GeneratedImage::Inline { b64_json } => {
                let bytes = base64::engine::general_purpose::STANDARD
                    .decode(b64_json)
                    .map_err(|e| {
                        ProviderError::InvalidResponse(format!("invalid base64 image data: {}", e))
                    })?;
                Ok(Bytes::from(bytes))
            }
            GeneratedImage::Hosted { url } => {
                tracing::debug!(url = %url, "Downloading generated image from provider URL");
                self.download_generated(&url).await
            }
        }
    }
}
