//! Progress publication errors.

/// Raised when a progress update cannot be delivered to its subscriber.
///
/// # Examples
///
/// ```
/// use worldsmith_error::ProgressError;
///
/// let err = ProgressError::new("receiver dropped");
/// assert!(format!("{}", err).contains("receiver dropped"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Progress Error: {} at line {} in {}", message, line, file)]
pub struct ProgressError {
    /// Why the update could not be delivered
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl ProgressError {
    /// Create a new ProgressError at the current location.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}
