//! Image synthesis with a description fallback.
//!
//! [`ImageClient::try_generate_image`] walks an ordered list of attempts and
//! keeps the first that succeeds. When every attempt fails it falls back to a
//! sentence built from the prompt alone, so a visual slot is never left empty
//! once it was tried.

use tracing::{debug, instrument, warn};
use worldsmith_core::{GenerationRequest, ImageResult, SlotKind, clean};
use worldsmith_error::{VisualAssetError, VisualAssetErrorKind};
use worldsmith_interface::{ImageSynthesizer, TextGenerator};

/// One step of the fallback chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
enum Attempt {
    Synthesis,
    ArtDirection,
}

const ATTEMPTS: [Attempt; 2] = [Attempt::Synthesis, Attempt::ArtDirection];

/// Image synthesis backed by a text generator for art-direction fallbacks.
#[derive(Debug, Clone)]
pub struct ImageClient<G, S> {
    text: G,
    synthesizer: S,
}

impl<G, S> ImageClient<G, S>
where
    G: TextGenerator,
    S: ImageSynthesizer,
{
    /// Pair a synthesizer with the text generator used for briefs.
    pub fn new(text: G, synthesizer: S) -> Self {
        Self { text, synthesizer }
    }

    /// Whether real image synthesis will be tried.
    pub fn is_configured(&self) -> bool {
        self.synthesizer.is_configured()
    }

    /// Produce an image, or the best available description of one.
    ///
    /// Never fails. Synthesis is skipped when no credential is configured.
    #[instrument(skip(self, prompt), fields(kind = %kind))]
    pub async fn try_generate_image(&self, prompt: &str, kind: SlotKind) -> ImageResult {
        for attempt in ATTEMPTS {
            match self.run(attempt, prompt, kind).await {
                Ok(result) => {
                    debug!(%attempt, "Visual slot filled");
                    return result;
                }
                Err(e) => match e.kind {
                    VisualAssetErrorKind::NotConfigured => {
                        debug!(%attempt, "Image synthesis not configured, skipping")
                    }
                    _ => warn!(%attempt, error = %e.kind, "Visual attempt failed"),
                },
            }
        }
        warn!("All visual attempts failed, using synthesized description");
        ImageResult::synthesized(prompt)
    }

    async fn run(
        &self,
        attempt: Attempt,
        prompt: &str,
        kind: SlotKind,
    ) -> Result<ImageResult, VisualAssetError> {
        match attempt {
            Attempt::Synthesis => self.synthesize(prompt).await,
            Attempt::ArtDirection => self.art_direction(prompt, kind).await,
        }
    }

    async fn synthesize(&self, prompt: &str) -> Result<ImageResult, VisualAssetError> {
        if !self.synthesizer.is_configured() {
            return Err(VisualAssetError::new(VisualAssetErrorKind::NotConfigured));
        }
        let bytes = self.synthesizer.synthesize(prompt).await.map_err(|e| {
            VisualAssetError::new(VisualAssetErrorKind::Synthesis(e.to_string()))
        })?;
        if bytes.is_empty() {
            return Err(VisualAssetError::new(VisualAssetErrorKind::Synthesis(
                "empty image payload".to_string(),
            )));
        }
        Ok(ImageResult::Image { bytes })
    }

    async fn art_direction(
        &self,
        prompt: &str,
        kind: SlotKind,
    ) -> Result<ImageResult, VisualAssetError> {
        let request = GenerationRequest::text(art_direction_prompt(prompt, kind));
        let result = self.text.generate(&request).await.map_err(|e| {
            VisualAssetError::new(VisualAssetErrorKind::Description(e.to_string()))
        })?;
        let brief = clean(&result.into_text());
        if brief.is_empty() {
            return Err(VisualAssetError::new(VisualAssetErrorKind::Description(
                "empty brief".to_string(),
            )));
        }
        Ok(ImageResult::description(brief, prompt))
    }
}

fn art_direction_prompt(prompt: &str, kind: SlotKind) -> String {
    let subject = match kind {
        SlotKind::Concept => "a piece of concept art establishing a whole setting",
        SlotKind::Character => "a character portrait",
        SlotKind::Scenario => "an illustration of a pivotal story moment",
    };
    format!(
        "You are an art director briefing an illustrator on {subject}. \
         The image was meant to show:\n\n{prompt}\n\n\
         Write a concise visual brief in plain prose covering composition, \
         color palette, lighting, mood and style notes. \
         Do not use markdown, headings or bullet points."
    )
}
