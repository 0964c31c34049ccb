//! Trait definitions for generation backends.

use async_trait::async_trait;
use std::sync::Arc;
use worldsmith_core::{GenerationRequest, GenerationResult};
use worldsmith_error::WorldsmithResult;

/// A text-generation backend.
///
/// One call is one request/response round trip. Implementations do not retry.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate text, or schema-constrained records when the request carries
    /// a schema.
    ///
    /// A structured payload that fails to decode is not an error; it comes
    /// back as [`GenerationResult::PlainText`].
    async fn generate(&self, request: &GenerationRequest) -> WorldsmithResult<GenerationResult>;

    /// Model identifier, for logging.
    fn model_name(&self) -> &str;
}

/// An image-synthesis backend.
#[async_trait]
pub trait ImageSynthesizer: Send + Sync {
    /// Whether a credential is configured. When false, callers skip synthesis.
    fn is_configured(&self) -> bool;

    /// Synthesize one image, returning its base64-encoded bytes.
    async fn synthesize(&self, prompt: &str) -> WorldsmithResult<String>;

    /// Model identifier, for logging.
    fn model_name(&self) -> &str;
}

#[async_trait]
impl<T: TextGenerator + ?Sized> TextGenerator for Arc<T> {
    async fn generate(&self, request: &GenerationRequest) -> WorldsmithResult<GenerationResult> {
        (**self).generate(request).await
    }

    fn model_name(&self) -> &str {
        (**self).model_name()
    }
}

#[async_trait]
impl<T: ImageSynthesizer + ?Sized> ImageSynthesizer for Arc<T> {
    fn is_configured(&self) -> bool {
        (**self).is_configured()
    }

    async fn synthesize(&self, prompt: &str) -> WorldsmithResult<String> {
        (**self).synthesize(prompt).await
    }

    fn model_name(&self) -> &str {
        (**self).model_name()
    }
}
