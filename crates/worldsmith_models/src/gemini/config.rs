//! Connection settings shared by the Gemini clients.

use std::env;

/// Public Gemini REST endpoint.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Text model used when none is configured.
pub const DEFAULT_TEXT_MODEL: &str = "gemini-2.0-flash";

/// Image model used when none is configured.
pub const DEFAULT_IMAGE_MODEL: &str = "imagen-3.0-generate-002";

/// Endpoint, models and credential for the Gemini clients.
///
/// # Examples
///
/// ```
/// use worldsmith_models::GeminiConfig;
///
/// let config = GeminiConfig::default()
///     .with_base_url("http://localhost:9000/")
///     .with_api_key(Some("test-key".to_string()));
///
/// assert!(config.has_credential());
/// assert_eq!(
///     config.endpoint("gemini-2.0-flash", "generateContent"),
///     "http://localhost:9000/v1beta/models/gemini-2.0-flash:generateContent"
/// );
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct GeminiConfig {
    /// Base URL without the `/v1beta` path
    pub base_url: String,
    /// Model for text generation
    pub text_model: String,
    /// Model for image synthesis
    pub image_model: String,
    /// API key; `None` disables image synthesis
    pub api_key: Option<String>,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            text_model: DEFAULT_TEXT_MODEL.to_string(),
            image_model: DEFAULT_IMAGE_MODEL.to_string(),
            api_key: None,
        }
    }
}

impl std::fmt::Debug for GeminiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiConfig")
            .field("base_url", &self.base_url)
            .field("text_model", &self.text_model)
            .field("image_model", &self.image_model)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl GeminiConfig {
    /// Defaults plus the `GEMINI_API_KEY` environment variable.
    ///
    /// An empty variable counts as unset.
    pub fn from_env() -> Self {
        Self::default().with_api_key(env::var("GEMINI_API_KEY").ok())
    }

    /// Replace the base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Replace the text model.
    pub fn with_text_model(mut self, model: impl Into<String>) -> Self {
        self.text_model = model.into();
        self
    }

    /// Replace the image model.
    pub fn with_image_model(mut self, model: impl Into<String>) -> Self {
        self.image_model = model.into();
        self
    }

    /// Replace the credential. Blank keys are treated as absent.
    pub fn with_api_key(mut self, api_key: Option<String>) -> Self {
        self.api_key = api_key.filter(|key| !key.trim().is_empty());
        self
    }

    /// Whether a credential is configured.
    pub fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }

    /// `{base_url}/v1beta/models/{model}:{method}`
    pub fn endpoint(&self, model: &str, method: &str) -> String {
        format!(
            "{}/v1beta/models/{}:{}",
            self.base_url.trim_end_matches('/'),
            model,
            method
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_keys_are_absent() {
        let config = GeminiConfig::default().with_api_key(Some("  ".to_string()));
        assert!(!config.has_credential());
    }

    #[test]
    fn debug_redacts_the_key() {
        let config = GeminiConfig::default().with_api_key(Some("sekrit".to_string()));
        let shown = format!("{config:?}");
        assert!(!shown.contains("sekrit"));
        assert!(shown.contains("<redacted>"));
    }
}
