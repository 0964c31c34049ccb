//! Generation backends for Worldsmith.
//!
//! - [`GeminiClient`] - text generation, optionally schema-constrained
//! - [`ImagenClient`] - image synthesis
//! - [`ImageClient`] - image synthesis with a description fallback chain that
//!   never fails
//!
//! # Example
//!
//! ```no_run
//! use worldsmith_core::GenerationRequest;
//! use worldsmith_interface::TextGenerator;
//! use worldsmith_models::{GeminiClient, GeminiConfig};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = GeminiClient::new(GeminiConfig::from_env());
//! let result = client
//!     .generate(&GenerationRequest::text("Describe a glass desert"))
//!     .await?;
//! println!("{:?}", result.text());
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod gemini;
mod image;

pub use gemini::{
    DEFAULT_BASE_URL, DEFAULT_IMAGE_MODEL, DEFAULT_TEXT_MODEL, GeminiClient, GeminiConfig,
    ImagenClient, MAX_OUTPUT_TOKENS, TEMPERATURE, TOP_K, TOP_P,
};
pub use image::ImageClient;
