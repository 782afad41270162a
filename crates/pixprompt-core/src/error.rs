//! Error types module
//!
//! This module provides the core error types used throughout the pixprompt
//! application. All pipeline failures are unified under the `AppError` enum:
//! validation, ingestion, source-image fetching, provider, and storage errors.

/// Log level for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Debug level - for expected errors like validation failures
    Debug,
    /// Warning level - for upstream rejections the caller can act on
    Warn,
    /// Error level - for unexpected failures
    Error,
}

/// Metadata for error responses - defines how an error should be presented
/// This trait allows errors to self-describe their HTTP response characteristics
pub trait ErrorMetadata {
    /// HTTP status code to return
    fn http_status_code(&self) -> u16;

    /// Machine-readable error category (e.g., "PROVIDER_ERROR")
    fn error_type(&self) -> &'static str;

    /// Client-facing message (may differ from internal error message)
    fn client_message(&self) -> String;

    /// Log level for this error
    fn log_level(&self) -> LogLevel;
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Failed to store uploaded image '{filename}': {message}")]
    Ingestion { filename: String, message: String },

    #[error("Failed to fetch image from {url}: {message}")]
    Fetch { url: String, message: String },

    #[error("Image generation provider returned status {status}")]
    Provider {
        status: u16,
        details: serde_json::Value,
    },

    #[error("No image data received from OpenAI API")]
    NoImageData,

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("Internal error with source")]
    InternalWithSource {
        message: String,
        #[source]
        source: anyhow::Error,
    },
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::InternalWithSource {
            message: err.to_string(),
            source: err,
        }
    }
}

/// Static metadata for each variant: (http_status, error_type, log_level).
/// The `Provider` variant mirrors the upstream status and is handled inline.
fn app_error_static_metadata(err: &AppError) -> (u16, &'static str, LogLevel) {
    match err {
        AppError::Validation(_) => (400, "VALIDATION_ERROR", LogLevel::Debug),
        AppError::Ingestion { .. } => (500, "INGESTION_ERROR", LogLevel::Error),
        AppError::Fetch { .. } => (500, "FETCH_ERROR", LogLevel::Error),
        AppError::Provider { status, .. } => (*status, "PROVIDER_ERROR", LogLevel::Warn),
        AppError::NoImageData => (500, "PROVIDER_ERROR", LogLevel::Error),
        AppError::Storage(_) => (500, "STORAGE_ERROR", LogLevel::Error),
        AppError::Internal(_) => (500, "INTERNAL_ERROR", LogLevel::Error),
        AppError::InternalWithSource { .. } => (500, "INTERNAL_ERROR", LogLevel::Error),
    }
}

impl ErrorMetadata for AppError {
    fn http_status_code(&self) -> u16 {
        app_error_static_metadata(self).0
    }

    fn error_type(&self) -> &'static str {
        app_error_static_metadata(self).1
    }

    fn client_message(&self) -> String {
        match self {
            AppError::Validation(msg) => msg.clone(),
            AppError::Ingestion { filename, .. } => {
                format!("Failed to store uploaded image '{}'", filename)
            }
            AppError::Fetch { url, .. } => format!("Failed to fetch image from {}", url),
            // Fixed message so clients can match on it; the upstream body rides
            // along verbatim in the `details` field of the response.
            AppError::Provider { .. } => "Error from OpenAI API".to_string(),
            AppError::NoImageData => "No image data received from OpenAI API".to_string(),
            AppError::Storage(_) => "Failed to upload generated image to storage".to_string(),
            AppError::Internal(msg) => msg.clone(),
            AppError::InternalWithSource { message, .. } => message.clone(),
        }
    }

    fn log_level(&self) -> LogLevel {
        app_error_static_metadata(self).2
    }
}

impl AppError {
    /// Upstream provider error body, if this error carries one.
    pub fn provider_details(&self) -> Option<&serde_json::Value> {
        match self {
            AppError::Provider { details, .. } => Some(details),
            _ => None,
        }
    }
}
