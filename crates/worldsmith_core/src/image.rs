//! Image results.

use serde::{Deserialize, Serialize};

/// Characters of the original prompt echoed alongside a fallback description.
pub const DESCRIPTION_ECHO_CHARS: usize = 200;

/// Characters of the original prompt used for the last-resort sentence.
pub const SYNTHESIZED_PROMPT_CHARS: usize = 300;

/// The outcome of one visual slot. Always present once the slot was attempted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ImageResult {
    /// Synthesized image.
    Image {
        /// Base64-encoded image bytes as returned by the service
        bytes: String,
    },
    /// Textual art direction substituted for an image.
    Description {
        /// The brief
        text: String,
        /// Leading part of the prompt the image was requested for
        truncated_prompt_echo: String,
    },
}

impl ImageResult {
    /// A description result echoing the first 200 characters of `prompt`.
    pub fn description(text: impl Into<String>, prompt: &str) -> Self {
        ImageResult::Description {
            text: text.into(),
            truncated_prompt_echo: truncate_chars(prompt, DESCRIPTION_ECHO_CHARS),
        }
    }

    /// The last-resort description built from the prompt alone.
    ///
    /// # Examples
    ///
    /// ```
    /// use worldsmith_core::ImageResult;
    ///
    /// let result = ImageResult::synthesized("A lighthouse on a basalt cliff");
    /// assert!(!result.is_image());
    /// ```
    pub fn synthesized(prompt: &str) -> Self {
        let excerpt = truncate_chars(prompt, SYNTHESIZED_PROMPT_CHARS);
        let text = format!(
            "Visual concept: {excerpt}. Picture this scene with a clear focal point, \
             a restrained palette and lighting that matches its mood."
        );
        ImageResult::description(text, prompt)
    }

    /// True when this slot holds real image bytes.
    pub fn is_image(&self) -> bool {
        matches!(self, ImageResult::Image { .. })
    }
}

fn truncate_chars(text: &str, limit: usize) -> String {
    text.chars().take(limit).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn echo_is_capped_by_characters_not_bytes() {
        let prompt = "é".repeat(250);
        match ImageResult::description("brief", &prompt) {
            ImageResult::Description {
                truncated_prompt_echo,
                ..
            } => assert_eq!(truncated_prompt_echo.chars().count(), 200),
            ImageResult::Image { .. } => panic!("expected description"),
        }
    }

    #[test]
    fn synthesized_uses_at_most_300_prompt_characters() {
        let prompt = "x".repeat(400);
        match ImageResult::synthesized(&prompt) {
            ImageResult::Description { text, .. } => {
                assert!(text.contains(&"x".repeat(300)));
                assert!(!text.contains(&"x".repeat(301)));
            }
            ImageResult::Image { .. } => panic!("expected description"),
        }
    }
}
