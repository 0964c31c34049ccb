//! Error types for the Worldsmith workspace.
//!
//! Every error family follows the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines the specific condition
//! - `*Error` struct wraps the kind with source location tracking
//! - constructors use `#[track_caller]` to capture where the error was raised
//!
//! # Examples
//!
//! ```
//! use worldsmith_error::{GenerationError, GenerationErrorKind, WorldsmithResult};
//!
//! fn call_service() -> WorldsmithResult<String> {
//!     Err(GenerationError::new(GenerationErrorKind::Transport(
//!         "connection refused".to_string(),
//!     )))?
//! }
//!
//! assert!(call_service().is_err());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod builder;
mod config;
mod error;
mod export;
mod generation;
mod io;
mod json;
mod progress;
mod visual;

pub use builder::BuilderError;
pub use config::ConfigError;
pub use error::{WorldsmithError, WorldsmithErrorKind, WorldsmithResult};
pub use export::{ExportError, ExportErrorKind};
pub use generation::{GenerationError, GenerationErrorKind};
pub use io::IoError;
pub use json::JsonError;
pub use progress::ProgressError;
pub use visual::{VisualAssetError, VisualAssetErrorKind};
