//! Test utilities for worldsmith_models tests.

pub mod mock_backends;

#[allow(unused_imports)]
pub use mock_backends::{MockResponse, MockSynthesizer, MockTextGenerator};
