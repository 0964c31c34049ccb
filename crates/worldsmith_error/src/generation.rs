//! Text-generation error types.

/// Conditions raised by a single call to the text-generation service.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum GenerationErrorKind {
    /// The request never produced a response (connection refused, DNS, reset).
    #[display("Transport failure: {}", _0)]
    Transport(String),
    /// The service answered with a non-success status.
    #[display("HTTP {} error: {}", status_code, message)]
    Upstream {
        /// HTTP status code
        status_code: u16,
        /// Response body or reason phrase
        message: String,
    },
    /// The service answered but the payload lacked the expected shape.
    #[display("Malformed response: {}", _0)]
    MalformedResponse(String),
    /// No credential configured for the service.
    #[display("GEMINI_API_KEY environment variable not set")]
    MissingApiKey,
    /// A schema-constrained response did not decode as the requested JSON.
    #[display("Structured output did not decode: {}", _0)]
    StructuredDecode(String),
}

impl GenerationErrorKind {
    /// True for failures of the network call itself.
    pub fn is_transport(&self) -> bool {
        matches!(self, GenerationErrorKind::Transport(_))
    }

    /// True for failures reported by, or decoded from, the upstream service.
    pub fn is_upstream(&self) -> bool {
        matches!(
            self,
            GenerationErrorKind::Upstream { .. }
                | GenerationErrorKind::MalformedResponse(_)
                | GenerationErrorKind::MissingApiKey
        )
    }
}

/// Generation error with source location tracking.
///
/// # Examples
///
/// ```
/// use worldsmith_error::{GenerationError, GenerationErrorKind};
///
/// let err = GenerationError::new(GenerationErrorKind::Upstream {
///     status_code: 503,
///     message: "overloaded".to_string(),
/// });
/// assert!(err.kind.is_upstream());
/// assert!(format!("{}", err).contains("HTTP 503"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Generation Error: {} at line {} in {}", kind, line, file)]
pub struct GenerationError {
    /// The kind of error that occurred
    pub kind: GenerationErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl GenerationError {
    /// Create a new GenerationError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: GenerationErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
