//! Gemini text generation client.

use super::wire::{Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig, Part};
use super::{GeminiConfig, GeminiResult, ImagenClient};
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument, warn};
use worldsmith_core::{GenerationRequest, GenerationResult};
use worldsmith_error::{GenerationError, GenerationErrorKind, WorldsmithResult};
use worldsmith_interface::TextGenerator;

/// Sampling temperature for every text call.
pub const TEMPERATURE: f32 = 0.8;

/// Top-k sampling cutoff.
pub const TOP_K: u32 = 40;

/// Nucleus sampling cutoff.
pub const TOP_P: f32 = 0.95;

/// Upper bound on response length.
pub const MAX_OUTPUT_TOKENS: u32 = 8192;

/// Client for the Gemini `generateContent` endpoint.
///
/// A single request/response per call; no retries, no streaming.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    http: Client,
    config: GeminiConfig,
}

impl GeminiClient {
    /// Create a client for `config`.
    pub fn new(config: GeminiConfig) -> Self {
        Self {
            http: Client::new(),
            config,
        }
    }

    /// Connection settings in use.
    pub fn config(&self) -> &GeminiConfig {
        &self.config
    }

    /// An image client sharing this client's connection pool and settings.
    pub fn imagen(&self) -> ImagenClient {
        ImagenClient::with_http(self.http.clone(), self.config.clone())
    }

    fn build_body(request: &GenerationRequest) -> GenerateContentRequest {
        let schema = request.structured_schema().as_ref();
        GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: Some(request.prompt_text().clone()),
                }],
            }],
            generation_config: GenerationConfig {
                temperature: TEMPERATURE,
                top_k: TOP_K,
                top_p: TOP_P,
                max_output_tokens: MAX_OUTPUT_TOKENS,
                response_mime_type: schema.map(|_| "application/json".to_string()),
                response_schema: schema.map(|s| s.to_json()),
            },
        }
    }

    async fn call_text(&self, request: &GenerationRequest) -> GeminiResult<String> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or_else(|| GenerationError::new(GenerationErrorKind::MissingApiKey))?;

        let url = self
            .config
            .endpoint(&self.config.text_model, "generateContent");
        debug!(url = %url, structured = request.structured_schema().is_some(), "Sending Gemini request");

        let response: GenerateContentResponse =
            post_json(&self.http, &url, api_key, &Self::build_body(request)).await?;

        response.first_text().ok_or_else(|| {
            GenerationError::new(GenerationErrorKind::MalformedResponse(
                "response has no candidates[0].content.parts[0].text".to_string(),
            ))
        })
    }
}

/// POST `body` to `url` and decode the JSON answer.
///
/// Maps send failures to `Transport`, non-2xx answers to `Upstream` and
/// undecodable bodies to `MalformedResponse`.
pub(crate) async fn post_json<B, R>(
    http: &Client,
    url: &str,
    api_key: &str,
    body: &B,
) -> GeminiResult<R>
where
    B: Serialize + ?Sized,
    R: DeserializeOwned,
{
    let response = http
        .post(url)
        .query(&[("key", api_key)])
        .json(body)
        .send()
        .await
        .map_err(|e| {
            GenerationError::new(GenerationErrorKind::Transport(format!(
                "Request failed: {}",
                e.without_url()
            )))
        })?;

    let status = response.status();
    if !status.is_success() {
        let message = response
            .text()
            .await
            .ok()
            .filter(|body| !body.trim().is_empty())
            .unwrap_or_else(|| status.canonical_reason().unwrap_or("unknown").to_string());
        return Err(GenerationError::new(GenerationErrorKind::Upstream {
            status_code: status.as_u16(),
            message,
        }));
    }

    response.json::<R>().await.map_err(|e| {
        GenerationError::new(GenerationErrorKind::MalformedResponse(format!(
            "Failed to parse response: {}",
            e.without_url()
        )))
    })
}

#[async_trait]
impl TextGenerator for GeminiClient {
    #[instrument(skip(self, request), fields(model = %self.config.text_model))]
    async fn generate(&self, request: &GenerationRequest) -> WorldsmithResult<GenerationResult> {
        let text = self.call_text(request).await?;

        if request.structured_schema().is_none() {
            return Ok(GenerationResult::PlainText(text));
        }

        let (result, decode_error) = GenerationResult::decode_structured(&text);
        if let Some(reason) = decode_error {
            warn!(
                error = %GenerationErrorKind::StructuredDecode(reason),
                "Structured response kept as plain text"
            );
        }
        Ok(result)
    }

    fn model_name(&self) -> &str {
        &self.config.text_model
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use worldsmith_core::Schema;

    #[test]
    fn plain_requests_carry_no_schema() {
        let body = GeminiClient::build_body(&GenerationRequest::text("hello"));
        let value = serde_json::to_value(&body).unwrap();
        assert!(value["generationConfig"].get("responseMimeType").is_none());
        assert!(value["generationConfig"].get("responseSchema").is_none());
        assert_eq!(value["generationConfig"]["temperature"].as_f64().map(|t| (t * 10.0).round()), Some(8.0));
    }

    #[test]
    fn structured_requests_ask_for_json() {
        let request = GenerationRequest::structured(
            "ideas",
            Schema::array_of(Schema::string_object(["title", "synopsis"])),
        );
        let value = serde_json::to_value(GeminiClient::build_body(&request)).unwrap();
        assert_eq!(
            value["generationConfig"]["responseMimeType"],
            "application/json"
        );
        assert_eq!(value["generationConfig"]["responseSchema"]["type"], "ARRAY");
    }

    #[tokio::test]
    async fn missing_key_fails_before_sending() {
        let client = GeminiClient::new(GeminiConfig::default().with_base_url("http://127.0.0.1:1"));
        let err = client
            .generate(&GenerationRequest::text("hello"))
            .await
            .unwrap_err();
        assert_eq!(
            err.generation_kind(),
            Some(&GenerationErrorKind::MissingApiKey)
        );
    }
}
