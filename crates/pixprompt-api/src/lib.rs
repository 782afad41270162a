//! Pixprompt API Library
//!
//! This crate provides the HTTP API handlers, pipeline services, and
//! application setup.

// Module declarations
pub mod constants;
mod handlers;
pub mod logging;
pub mod services;
pub mod setup;

// Public modules
pub mod error;
pub mod state;

// Re-exports
pub use error::{ErrorResponse, HttpAppError};
