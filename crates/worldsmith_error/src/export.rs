//! Document export error types.

/// Kinds of export failures.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ExportErrorKind {
    /// The layout engine or the document renderer failed.
    #[display("Layout failed: {}", _0)]
    Layout(String),
    /// An embedded image could not be decoded.
    #[display("Image decode failed: {}", _0)]
    ImageDecode(String),
    /// The output file could not be written.
    #[display("Failed to write {}: {}", path, message)]
    Write {
        /// Destination path
        path: String,
        /// Underlying error message
        message: String,
    },
}

/// Export error with location tracking.
///
/// # Examples
///
/// ```
/// use worldsmith_error::{ExportError, ExportErrorKind};
///
/// let err = ExportError::new(ExportErrorKind::Layout("font missing".to_string()));
/// assert!(format!("{}", err).contains("font missing"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Export Error: {} at line {} in {}", kind, line, file)]
pub struct ExportError {
    /// The kind of error that occurred
    pub kind: ExportErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl ExportError {
    /// Create a new export error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ExportErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
