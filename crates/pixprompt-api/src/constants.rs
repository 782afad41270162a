//! Shared constants for the API crate

/// API version prefix for all routes
pub const API_PREFIX: &str = "/api/v0";
