//! Application setup and initialization
//!
//! This module contains all application initialization logic extracted from main.rs
//! for better organization and testability.

pub mod routes;
pub mod server;
pub mod storage;

use std::sync::Arc;

use anyhow::Result;
use pixprompt_core::Config;
use pixprompt_provider::OpenAiImageEditor;

use crate::state::AppState;

/// Initialize the entire application
pub async fn initialize_app(config: Config) -> Result<(Arc<AppState>, axum::Router)> {
    crate::logging::init_logging();

    tracing::info!(
        environment = %config.environment(),
        model = %config.openai_image_model(),
        "Configuration loaded"
    );

    // Setup storage
    let storage = storage::setup_storage(&config).await?;

    // Setup the provider adapter
    let generator = Arc::new(OpenAiImageEditor::new(&config)?);

    let state = Arc::new(AppState::new(config.clone(), storage, generator));

    // Setup routes
    let router = routes::setup_routes(&config, state.clone())?;

    Ok((state, router))
}
