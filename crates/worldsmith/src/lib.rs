//! Worldsmith - turn a one-line idea into an illustrated world document.
//!
//! A short idea and a category are expanded by Gemini into a narrative,
//! story hooks, customization options, characters and region maps, with
//! optional Imagen artwork, and exported as a paginated PDF.
//!
//! # Quick Start
//!
//! ```no_run
//! use worldsmith::{DocumentExporter, GeminiClient, GeminiConfig, WorldOrchestrator};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let text = GeminiClient::new(GeminiConfig::from_env());
//! let images = text.imagen();
//! let world = WorldOrchestrator::new(text, images)
//!     .build_world("floating cities above toxic clouds", "Post-Apocalyptic", true)
//!     .await?;
//!
//! let outcome = DocumentExporter::new(".").export(&world)?;
//! println!("wrote {}", outcome.path().display());
//! # Ok(())
//! # }
//! ```
//!
//! # Architecture
//!
//! - `worldsmith_error` - Error types
//! - `worldsmith_core` - Data model, sanitizer, progress model
//! - `worldsmith_interface` - `TextGenerator` and `ImageSynthesizer` traits
//! - `worldsmith_models` - Gemini and Imagen clients, image fallback chain
//! - `worldsmith_narrative` - Prompt templates and the orchestrator
//! - `worldsmith_export` - Layout, PDF and text export
//!
//! This crate re-exports everything and adds configuration, logging and the
//! `worldsmith` binary.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod pipeline;
mod telemetry;

pub use config::{ExportSettings, GeminiSettings, GenerationSettings, WorldsmithConfig};
pub use pipeline::{GeneratedWorld, generate_world};
pub use telemetry::init_logging;

pub use worldsmith_core::*;
pub use worldsmith_error::*;
pub use worldsmith_export::*;
pub use worldsmith_interface::*;
pub use worldsmith_models::*;
pub use worldsmith_narrative::*;
