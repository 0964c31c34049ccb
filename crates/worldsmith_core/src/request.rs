//! Generation request values.

use crate::Schema;

/// One call's worth of input to the text-generation service.
///
/// Built per call and never reused.
///
/// # Examples
///
/// ```
/// use worldsmith_core::{GenerationRequest, Schema};
///
/// let plain = GenerationRequest::text("Describe a harbor town");
/// assert!(plain.structured_schema().is_none());
///
/// let listed = GenerationRequest::structured(
///     "List three harbors",
///     Schema::array_of(Schema::string_object(["name"])),
/// );
/// assert!(listed.structured_schema().is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, derive_getters::Getters)]
pub struct GenerationRequest {
    /// Prompt sent as the single user turn
    prompt_text: String,
    /// When present, the response is constrained to this shape
    structured_schema: Option<Schema>,
}

impl GenerationRequest {
    /// A free-text request.
    pub fn text(prompt: impl Into<String>) -> Self {
        Self {
            prompt_text: prompt.into(),
            structured_schema: None,
        }
    }

    /// A schema-constrained request.
    pub fn structured(prompt: impl Into<String>, schema: Schema) -> Self {
        Self {
            prompt_text: prompt.into(),
            structured_schema: Some(schema),
        }
    }
}
