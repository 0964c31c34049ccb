//! Imagen image synthesis client.

use super::client::post_json;
use super::wire::{PredictInstance, PredictParameters, PredictRequest, PredictResponse};
use super::GeminiConfig;
use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, instrument};
use worldsmith_error::{GenerationError, GenerationErrorKind, WorldsmithResult};
use worldsmith_interface::ImageSynthesizer;

/// Client for the Imagen `predict` endpoint.
///
/// Requests one sample per call and returns its base64 bytes untouched.
#[derive(Debug, Clone)]
pub struct ImagenClient {
    http: Client,
    config: GeminiConfig,
}

impl ImagenClient {
    /// Create a client for `config`.
    pub fn new(config: GeminiConfig) -> Self {
        Self::with_http(Client::new(), config)
    }

    pub(crate) fn with_http(http: Client, config: GeminiConfig) -> Self {
        Self { http, config }
    }
}

#[async_trait]
impl ImageSynthesizer for ImagenClient {
    fn is_configured(&self) -> bool {
        self.config.has_credential()
    }

    #[instrument(skip(self, prompt), fields(model = %self.config.image_model, prompt_len = prompt.len()))]
    async fn synthesize(&self, prompt: &str) -> WorldsmithResult<String> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or_else(|| GenerationError::new(GenerationErrorKind::MissingApiKey))?;

        let url = self.config.endpoint(&self.config.image_model, "predict");
        debug!(url = %url, "Sending Imagen request");

        let body = PredictRequest {
            instances: PredictInstance {
                prompt: prompt.to_string(),
            },
            parameters: PredictParameters { sample_count: 1 },
        };
        let response: PredictResponse = post_json(&self.http, &url, api_key, &body).await?;

        let bytes = response.first_image().ok_or_else(|| {
            GenerationError::new(GenerationErrorKind::MalformedResponse(
                "response has no predictions[0].bytesBase64Encoded".to_string(),
            ))
        })?;
        Ok(bytes)
    }

    fn model_name(&self) -> &str {
        &self.config.image_model
    }
}
