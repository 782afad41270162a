//! Application state shared across handlers

use std::sync::Arc;

use pixprompt_core::Config;
use pixprompt_provider::ImageGenerator;
use pixprompt_storage::Storage;

/// Shared application state.
///
/// Both the storage backend and the image generator sit behind trait objects
/// so integration tests can assemble a state with a temp-dir store and a fake
/// provider.
pub struct AppState {
    pub config: Config,
    pub storage: Arc<dyn Storage>,
    pub generator: Arc<dyn ImageGenerator>,
}

impl AppState {
    pub fn new(
        config: Config,
        storage: Arc<dyn Storage>,
        generator: Arc<dyn ImageGenerator>,
    ) -> Self {
        Self {
            config,
            storage,
            generator,
        }
    }
}
