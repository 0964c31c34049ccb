//! Scripted generation backends.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use worldsmith_core::{GenerationRequest, GenerationResult};
use worldsmith_error::{GenerationError, GenerationErrorKind, WorldsmithResult};
use worldsmith_interface::{ImageSynthesizer, TextGenerator};

/// A single scripted response.
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// Raw response text. Structured requests decode it like the real client.
    Success(String),
    Error(GenerationErrorKind),
}

/// Text generator that replays responses in call order.
///
/// The last response repeats once the script runs out.
#[derive(Clone)]
pub struct ScriptedGenerator {
    script: Vec<MockResponse>,
    call_count: Arc<Mutex<usize>>,
}

impl ScriptedGenerator {
    pub fn new(script: Vec<MockResponse>) -> Self {
        Self {
            script,
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    /// Successful responses for each raw text.
    pub fn from_texts<I, T>(texts: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self::new(
            texts
                .into_iter()
                .map(|t| MockResponse::Success(t.into()))
                .collect(),
        )
    }

    /// Shared counter, readable after the generator moved into an orchestrator.
    pub fn counter(&self) -> Arc<Mutex<usize>> {
        Arc::clone(&self.call_count)
    }
}

#[async_trait]
impl TextGenerator for ScriptedGenerator {
    async fn generate(&self, request: &GenerationRequest) -> WorldsmithResult<GenerationResult> {
        let index = {
            let mut count = self.call_count.lock().unwrap();
            let current = *count;
            *count += 1;
            current
        };
        let response = self
            .script
            .get(index)
            .or_else(|| self.script.last())
            .cloned()
            .unwrap_or(MockResponse::Error(GenerationErrorKind::Transport(
                "empty script".to_string(),
            )));

        match response {
            MockResponse::Success(raw) if request.structured_schema().is_some() => {
                Ok(GenerationResult::decode_structured(&raw).0)
            }
            MockResponse::Success(raw) => Ok(GenerationResult::PlainText(raw)),
            MockResponse::Error(kind) => Err(GenerationError::new(kind).into()),
        }
    }

    fn model_name(&self) -> &str {
        "scripted"
    }
}

/// Image synthesizer with a fixed outcome and a shared call counter.
#[derive(Clone)]
pub struct MockSynthesizer {
    configured: bool,
    bytes: Option<String>,
    call_count: Arc<Mutex<usize>>,
}

impl MockSynthesizer {
    /// Configured; every call returns `bytes`.
    pub fn new_success(bytes: impl Into<String>) -> Self {
        Self {
            configured: true,
            bytes: Some(bytes.into()),
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    /// No credential configured.
    pub fn unconfigured() -> Self {
        Self {
            configured: false,
            bytes: None,
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    pub fn counter(&self) -> Arc<Mutex<usize>> {
        Arc::clone(&self.call_count)
    }
}

#[async_trait]
impl ImageSynthesizer for MockSynthesizer {
    fn is_configured(&self) -> bool {
        self.configured
    }

    async fn synthesize(&self, _prompt: &str) -> WorldsmithResult<String> {
        *self.call_count.lock().unwrap() += 1;
        self.bytes.clone().ok_or_else(|| {
            GenerationError::new(GenerationErrorKind::MissingApiKey).into()
        })
    }

    fn model_name(&self) -> &str {
        "mock-imagen"
    }
}
