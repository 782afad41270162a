//! Fake image generator for integration tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;
use pixprompt_provider::{ImageGenerator, ProviderError};

/// What the fake should do when invoked.
pub enum FakeBehavior {
    Succeed(Vec<u8>),
    RejectUpstream { status: u16, body: serde_json::Value },
    NoImageData,
}

/// Counting fake provider: records every invocation and replays a fixed
/// behavior.
pub struct FakeGenerator {
    behavior: FakeBehavior,
    calls: AtomicUsize,
    last_prompt: std::sync::Mutex<Option<String>>,
}

impl FakeGenerator {
    pub fn new(behavior: FakeBehavior) -> Arc<Self> {
        Arc::new(Self {
            behavior,
            calls: AtomicUsize::new(0),
            last_prompt: std::sync::Mutex::new(None),
        })
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_prompt(&self) -> Option<String> {
        self.last_prompt.lock().unwrap().clone()
    }
}

#[async_trait]
impl ImageGenerator for FakeGenerator {
    async fn generate(
        &self,
        prompt: &str,
        _image_urls: &[String],
    ) -> Result<Bytes, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_prompt.lock().unwrap() = Some(prompt.to_string());

        match &self.behavior {
            FakeBehavior::Succeed(data) => Ok(Bytes::from(data.clone())),
            FakeBehavior::RejectUpstream { status, body } => Err(ProviderError::Upstream {
                status: *status,
                body: body.clone(),
            }),
            FakeBehavior::NoImageData => Err(ProviderError::NoImageData),
        }
    }
}
