//! Top-level error wrapper types.

use crate::{
    BuilderError, ConfigError, ExportError, GenerationError, IoError, JsonError, ProgressError,
    VisualAssetError,
};

/// Every error family in the workspace.
///
/// # Examples
///
/// ```
/// use worldsmith_error::{JsonError, WorldsmithError};
///
/// let err: WorldsmithError = JsonError::new("unexpected end of input").into();
/// assert!(format!("{}", err).contains("JSON Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum WorldsmithErrorKind {
    /// Text generation error
    #[from(GenerationError)]
    Generation(GenerationError),
    /// Visual asset error
    #[from(VisualAssetError)]
    VisualAsset(VisualAssetError),
    /// Document export error
    #[from(ExportError)]
    Export(ExportError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Progress publication error
    #[from(ProgressError)]
    Progress(ProgressError),
    /// JSON serialization/deserialization error
    #[from(JsonError)]
    Json(JsonError),
    /// Filesystem error
    #[from(IoError)]
    Io(IoError),
    /// Builder error
    #[from(BuilderError)]
    Builder(BuilderError),
}

/// Worldsmith error with kind discrimination.
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Worldsmith Error: {}", _0)]
pub struct WorldsmithError(Box<WorldsmithErrorKind>);

impl WorldsmithError {
    /// Create a new error from a kind.
    pub fn new(kind: WorldsmithErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &WorldsmithErrorKind {
        &self.0
    }

    /// The generation error kind, if this error came from the text service.
    pub fn generation_kind(&self) -> Option<&crate::GenerationErrorKind> {
        match self.kind() {
            WorldsmithErrorKind::Generation(e) => Some(&e.kind),
            _ => None,
        }
    }
}

// Generic From implementation for any type that converts to WorldsmithErrorKind
impl<T> From<T> for WorldsmithError
where
    T: Into<WorldsmithErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Worldsmith operations.
pub type WorldsmithResult<T> = std::result::Result<T, WorldsmithError>;
