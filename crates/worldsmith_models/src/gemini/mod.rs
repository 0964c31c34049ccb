//! Google Gemini REST clients.
//!
//! Both clients authenticate with a `key` query parameter and share one
//! [`GeminiConfig`].

mod client;
mod config;
mod imagen;
mod wire;

pub use client::{GeminiClient, MAX_OUTPUT_TOKENS, TEMPERATURE, TOP_K, TOP_P};
pub use config::{DEFAULT_BASE_URL, DEFAULT_IMAGE_MODEL, DEFAULT_TEXT_MODEL, GeminiConfig};
pub use imagen::ImagenClient;

/// Result type for Gemini operations.
pub(crate) type GeminiResult<T> = Result<T, worldsmith_error::GenerationError>;
