//! Provider operation errors

use thiserror::Error;

/// Errors from the image-generation provider adapter
#[derive(Debug, Error)]
pub enum ProviderError {
    /// A source-image reference could not be retrieved. Named so the caller
    /// can show which reference was unreachable.
    #[error("Failed to fetch image from {url}: {reason}")]
    Fetch { url: String, reason: String },

    /// The provider rejected the request. The upstream body is carried
    /// verbatim (not reinterpreted) so callers can surface an accurate
    /// diagnostic.
    #[error("OpenAI API request failed with status {status}")]
    Upstream {
        status: u16,
        body: serde_json::Value,
    },

    /// The provider answered 2xx but the response carried neither inline
    /// image data nor a result URL.
    #[error("No image data received from OpenAI API")]
    NoImageData,

    #[error("Invalid provider response: {0}")]
    InvalidResponse(String),

    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),
}
