//! Mock generation backends.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use worldsmith_core::{GenerationRequest, GenerationResult};
use worldsmith_error::{GenerationError, GenerationErrorKind, WorldsmithResult};
use worldsmith_interface::{ImageSynthesizer, TextGenerator};

/// A single mock response (success or error).
#[derive(Debug, Clone)]
pub enum MockResponse {
    Success(String),
    Error(GenerationErrorKind),
}

/// Text generator that replays a script of responses.
///
/// The last response repeats once the script runs out.
pub struct MockTextGenerator {
    responses: Vec<MockResponse>,
    call_count: Arc<Mutex<usize>>,
    prompts: Arc<Mutex<Vec<String>>>,
}

impl MockTextGenerator {
    /// Always succeed with `text`.
    pub fn new_success(text: impl Into<String>) -> Self {
        Self::new_sequence(vec![MockResponse::Success(text.into())])
    }

    /// Always fail with `error`.
    pub fn new_error(error: GenerationErrorKind) -> Self {
        Self::new_sequence(vec![MockResponse::Error(error)])
    }

    /// Replay `responses` in order.
    pub fn new_sequence(responses: Vec<MockResponse>) -> Self {
        Self {
            responses,
            call_count: Arc::new(Mutex::new(0)),
            prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Number of times generate() was called.
    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }

    /// Prompts received, in order.
    #[allow(dead_code)]
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextGenerator for MockTextGenerator {
    async fn generate(&self, request: &GenerationRequest) -> WorldsmithResult<GenerationResult> {
        let index = {
            let mut count = self.call_count.lock().unwrap();
            let current = *count;
            *count += 1;
            current
        };
        self.prompts
            .lock()
            .unwrap()
            .push(request.prompt_text().clone());

        let response = self
            .responses
            .get(index)
            .or_else(|| self.responses.last())
            .cloned()
            .unwrap_or(MockResponse::Error(GenerationErrorKind::Transport(
                "empty mock script".to_string(),
            )));
        match response {
            MockResponse::Success(text) => Ok(GenerationResult::PlainText(text)),
            MockResponse::Error(kind) => Err(GenerationError::new(kind).into()),
        }
    }

    fn model_name(&self) -> &str {
        "mock-text"
    }
}

/// Image synthesizer with a fixed outcome.
pub struct MockSynthesizer {
    configured: bool,
    outcome: Result<String, GenerationErrorKind>,
    call_count: Arc<Mutex<usize>>,
}

impl MockSynthesizer {
    /// Configured, returns `bytes`.
    pub fn new_success(bytes: impl Into<String>) -> Self {
        Self {
            configured: true,
            outcome: Ok(bytes.into()),
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    /// Configured, always fails with `error`.
    pub fn new_error(error: GenerationErrorKind) -> Self {
        Self {
            configured: true,
            outcome: Err(error),
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    /// No credential.
    pub fn unconfigured() -> Self {
        Self {
            configured: false,
            outcome: Err(GenerationErrorKind::MissingApiKey),
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    /// Number of times synthesize() was called.
    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }
}

#[async_trait]
impl ImageSynthesizer for MockSynthesizer {
    fn is_configured(&self) -> bool {
        self.configured
    }

    async fn synthesize(&self, _prompt: &str) -> WorldsmithResult<String> {
        *self.call_count.lock().unwrap() += 1;
        self.outcome
            .clone()
            .map_err(|kind| GenerationError::new(kind).into())
    }

    fn model_name(&self) -> &str {
        "mock-imagen"
    }
}
