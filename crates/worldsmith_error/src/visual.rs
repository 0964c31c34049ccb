//! Visual asset error types.
//!
//! These never leave the image client; they describe why one attempt in the
//! fallback chain was abandoned.

/// Why an image (or its description) could not be obtained.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum VisualAssetErrorKind {
    /// No credential configured, synthesis skipped.
    #[display("Image synthesis not configured")]
    NotConfigured,
    /// The synthesis endpoint failed or returned no image bytes.
    #[display("Image synthesis failed: {}", _0)]
    Synthesis(String),
    /// The art-direction fallback call failed.
    #[display("Art direction fallback failed: {}", _0)]
    Description(String),
}

/// Visual asset error with source location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Visual Asset Error: {} at line {} in {}", kind, line, file)]
pub struct VisualAssetError {
    /// The kind of error that occurred
    pub kind: VisualAssetErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl VisualAssetError {
    /// Create a new VisualAssetError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: VisualAssetErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
