//! Shared key generation for storage backends.
//!
//! Key formats: source images use `uploads/{unix_millis}_{sanitized_filename}`,
//! generated images use `generated-{iso8601}-{uuid}.png`. All backends must use
//! these formats for consistency.

use chrono::{SecondsFormat, Utc};
use uuid::Uuid;

const SOURCE_PREFIX: &str = "uploads";

/// Collapse whitespace runs into single underscores to keep keys URL-safe.
pub fn sanitize_filename(filename: &str) -> String {
    filename.split_whitespace().collect::<Vec<_>>().join("_")
}

/// Generate a storage key for an uploaded source image.
///
/// Two distinct uploads landing in the same millisecond with the same filename
/// collide; this is accepted, matching the non-deduplicated upstream behavior.
pub fn source_image_key(filename: &str) -> String {
    format!(
        "{}/{}_{}",
        SOURCE_PREFIX,
        Utc::now().timestamp_millis(),
        sanitize_filename(filename)
    )
}

/// Generate a storage key for a published generation result.
///
/// The ISO-8601 timestamp plus a random UUID guarantees no collision with any
/// prior or concurrent publish.
pub fn generated_image_key() -> String {
    let timestamp = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
    format!("generated-{}-{}.png", timestamp, Uuid::new_v4())
}
