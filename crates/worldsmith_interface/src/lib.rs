//! Trait definitions for the Worldsmith generation backends.
//!
//! The orchestrator only sees these traits, which keeps the Gemini clients
//! swappable for mocks in tests.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;

pub use traits::{ImageSynthesizer, TextGenerator};
