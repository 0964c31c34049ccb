//! Configuration loading.
//!
//! Sources, lowest precedence first:
//!
//! 1. Bundled defaults (`worldsmith.toml` at the repository root)
//! 2. `~/.config/worldsmith/worldsmith.toml`
//! 3. `./worldsmith.toml`
//! 4. An explicit file, when one is given
//!
//! The API key never lives in these files; it comes from `GEMINI_API_KEY`.

use config::{Config, File, FileFormat};
use derive_getters::Getters;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;
use worldsmith_error::{ConfigError, WorldsmithResult};
use worldsmith_models::GeminiConfig;

const DEFAULT_CONFIG: &str = include_str!("../../../worldsmith.toml");

/// Endpoint and model selection.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Getters)]
pub struct GeminiSettings {
    /// Base URL of the Gemini REST API
    base_url: String,
    /// Text generation model
    text_model: String,
    /// Image synthesis model
    image_model: String,
}

/// Generation knobs.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Getters)]
pub struct GenerationSettings {
    /// Cap on ideas and customization options
    idea_count: usize,
    /// Pause between image calls, in milliseconds
    image_delay_ms: u64,
}

/// Export destination.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Getters)]
pub struct ExportSettings {
    /// Directory export files are written to
    output_dir: PathBuf,
}

/// Complete Worldsmith configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Getters)]
pub struct WorldsmithConfig {
    /// `[gemini]`
    gemini: GeminiSettings,
    /// `[generation]`
    generation: GenerationSettings,
    /// `[export]`
    export: ExportSettings,
}

impl WorldsmithConfig {
    /// Load from the standard locations.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a file is malformed or a value has the
    /// wrong type.
    pub fn load() -> WorldsmithResult<Self> {
        Self::load_with(None)
    }

    /// Load from the standard locations, then `explicit` on top.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `explicit` is missing, or any file is
    /// malformed.
    pub fn load_with(explicit: Option<&Path>) -> WorldsmithResult<Self> {
        debug!("Loading configuration with precedence: explicit > current dir > home dir > bundled defaults");

        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/worldsmith/worldsmith.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder.add_source(File::with_name("worldsmith").required(false));

        if let Some(path) = explicit {
            builder = builder.add_source(File::from(path).required(true));
        }

        Self::finish(builder)
    }

    /// Bundled defaults overlaid with a single file, ignoring the standard
    /// locations.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file is missing or malformed.
    pub fn from_file(path: impl AsRef<Path>) -> WorldsmithResult<Self> {
        let builder = Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .add_source(File::from(path.as_ref()).required(true));
        Self::finish(builder)
    }

    /// The bundled defaults alone.
    ///
    /// # Errors
    ///
    /// Only fails if the bundled file itself is broken.
    pub fn bundled() -> WorldsmithResult<Self> {
        Self::finish(Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml)))
    }

    fn finish(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> WorldsmithResult<Self> {
        let config: Self = builder
            .build()
            .map_err(|e| ConfigError::new(format!("Failed to build configuration: {}", e)))?
            .try_deserialize()
            .map_err(|e| ConfigError::new(format!("Failed to parse configuration: {}", e)))?;
        if config.generation.idea_count == 0 {
            return Err(ConfigError::new("generation.idea_count must be at least 1").into());
        }
        Ok(config)
    }

    /// Client settings for these endpoints and models, with `api_key`.
    pub fn gemini_config(&self, api_key: Option<String>) -> GeminiConfig {
        GeminiConfig::default()
            .with_base_url(self.gemini.base_url.clone())
            .with_text_model(self.gemini.text_model.clone())
            .with_image_model(self.gemini.image_model.clone())
            .with_api_key(api_key)
    }

    /// Pause between image calls.
    pub fn image_delay(&self) -> Duration {
        Duration::from_millis(self.generation.image_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_defaults_parse() {
        let config = WorldsmithConfig::bundled().unwrap();
        assert_eq!(config.gemini().text_model(), worldsmith_models::DEFAULT_TEXT_MODEL);
        assert_eq!(config.gemini().image_model(), worldsmith_models::DEFAULT_IMAGE_MODEL);
        assert_eq!(*config.generation().idea_count(), 5);
        assert_eq!(config.image_delay(), Duration::from_secs(1));
    }

    #[test]
    fn gemini_config_carries_the_key() {
        let config = WorldsmithConfig::bundled().unwrap();
        let gemini = config.gemini_config(Some("k".to_string()));
        assert!(gemini.has_credential());
        assert_eq!(gemini.base_url, worldsmith_models::DEFAULT_BASE_URL);
    }
}
