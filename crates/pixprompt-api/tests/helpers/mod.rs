//! Test helpers: build AppState and router for integration tests.
//!
//! Run from workspace root: `cargo test -p pixprompt-api --test generations_test`
//! or `cargo test -p pixprompt-api`.

pub mod fakes;
pub mod fixtures;

use std::sync::Arc;

use axum_test::TestServer;
use pixprompt_api::constants;
use pixprompt_api::setup::routes;
use pixprompt_api::state::AppState;
use pixprompt_core::{Config, PipelineConfig};
use pixprompt_provider::ImageGenerator;
use pixprompt_storage::{LocalStorage, Storage};
use tempfile::TempDir;

pub const TEST_BASE_URL: &str = "http://localhost:8080/objects";

/// API path prefix for tests (e.g. `/api/v0`).
pub fn api_path(path: &str) -> String {
    format!("{}{}", constants::API_PREFIX, path)
}

/// Test application: server, storage handle, and owned resources.
pub struct TestApp {
    pub server: TestServer,
    pub storage: Arc<dyn Storage>,
    pub _temp_dir: TempDir,
}

impl TestApp {
    pub fn client(&self) -> &TestServer {
        &self.server
    }

    /// Resolve a public URL produced by the local backend back to its key.
    pub fn key_from_url(url: &str) -> &str {
        url.strip_prefix(TEST_BASE_URL)
            .and_then(|rest| rest.strip_prefix('/'))
            .expect("URL should point at the test storage base")
    }
}

/// Setup a test app with local storage in a temp dir and the given generator.
pub async fn setup_test_app(generator: Arc<dyn ImageGenerator>) -> TestApp {
    let temp_dir = tempfile::tempdir().expect("create temp dir");

    let config = Config(Box::new(PipelineConfig {
        local_storage_path: Some(temp_dir.path().to_string_lossy().into_owned()),
        local_storage_base_url: Some(TEST_BASE_URL.to_string()),
        ..PipelineConfig::default()
    }));

    let storage: Arc<dyn Storage> = Arc::new(
        LocalStorage::new(
            temp_dir.path().to_string_lossy().into_owned(),
            TEST_BASE_URL.to_string(),
        )
        .await
        .expect("create local storage"),
    );

    let state = Arc::new(AppState::new(config.clone(), storage.clone(), generator));
    let router = routes::setup_routes(&config, state).expect("setup routes");

    TestApp {
        server: TestServer::new(router).expect("start test server"),
        storage,
        _temp_dir: temp_dir,
    }
}
