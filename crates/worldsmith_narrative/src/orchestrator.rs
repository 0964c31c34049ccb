//! World orchestration.

use crate::prompts::{CONTINENTAL_OVERVIEW, SETTLEMENT_DISTRICTS};
use crate::{ProgressTracker, PromptBuilder};
use std::sync::Arc;
use std::time::Duration;
use worldsmith_core::{
    CHARACTER_SLOTS, CharacterRecord, CustomizationRecord, DEFAULT_IDEA_COUNT, GenerationRequest,
    IdeaRecord, ImageResult, RegionBlock, SCENARIO_ARCHETYPES, SCENARIO_SLOTS, SlotKind,
    SlotStatus, VisualSlot, WorldAggregate, WorldAggregateBuilder, clean,
};
use worldsmith_error::{BuilderError, ProgressError, WorldsmithResult};
use worldsmith_interface::{ImageSynthesizer, TextGenerator};
use worldsmith_models::ImageClient;

/// Pause between consecutive image calls.
pub const DEFAULT_IMAGE_DELAY: Duration = Duration::from_secs(1);

/// Image slots filled so far. Kept outside the aggregate so a failed visual
/// phase can still hand back what it produced.
#[derive(Debug)]
struct Visuals {
    concept: Option<ImageResult>,
    characters: Vec<Option<ImageResult>>,
    scenarios: Vec<Option<ImageResult>>,
}

impl Default for Visuals {
    fn default() -> Self {
        Self {
            concept: None,
            characters: vec![None; CHARACTER_SLOTS],
            scenarios: vec![None; SCENARIO_SLOTS],
        }
    }
}

impl Visuals {
    fn store(&mut self, slot: VisualSlot, result: ImageResult) {
        let target = match slot.kind {
            SlotKind::Concept => Some(&mut self.concept),
            SlotKind::Character => self.characters.get_mut(slot.index),
            SlotKind::Scenario => self.scenarios.get_mut(slot.index),
        };
        if let Some(target) = target {
            *target = Some(result);
        }
    }
}

/// Textual content gathered before the visual phase.
#[derive(Debug)]
struct Text {
    narrative: String,
    ideas: Vec<IdeaRecord>,
    customizations: Vec<CustomizationRecord>,
    characters: Vec<CharacterRecord>,
    regions: Vec<RegionBlock>,
}

/// Sequences prompt rendering, generation calls and image attempts into a
/// [`WorldAggregate`].
///
/// Calls run strictly one after another. Textual failures abort the run;
/// visual failures are absorbed by the [`ImageClient`] fallback chain.
///
/// # Example
///
/// ```no_run
/// use worldsmith_models::{GeminiClient, GeminiConfig};
/// use worldsmith_narrative::WorldOrchestrator;
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let text = GeminiClient::new(GeminiConfig::from_env());
/// let images = text.imagen();
/// let orchestrator = WorldOrchestrator::new(text, images);
///
/// let world = orchestrator
///     .build_world("floating cities above toxic clouds", "Post-Apocalyptic", true)
///     .await?;
/// println!("{}", world.narrative());
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct WorldOrchestrator<G, S> {
    text: Arc<G>,
    images: ImageClient<Arc<G>, S>,
    image_delay: Duration,
    idea_limit: usize,
}

impl<G, S> WorldOrchestrator<G, S>
where
    G: TextGenerator,
    S: ImageSynthesizer,
{
    /// Orchestrate with `text` for all text calls and `synthesizer` for images.
    pub fn new(text: G, synthesizer: S) -> Self {
        let text = Arc::new(text);
        Self {
            images: ImageClient::new(Arc::clone(&text), synthesizer),
            text,
            image_delay: DEFAULT_IMAGE_DELAY,
            idea_limit: DEFAULT_IDEA_COUNT,
        }
    }

    /// Pause between consecutive image calls.
    pub fn with_image_delay(mut self, delay: Duration) -> Self {
        self.image_delay = delay;
        self
    }

    /// Cap on idea and customization records.
    pub fn with_idea_limit(mut self, limit: usize) -> Self {
        self.idea_limit = limit;
        self
    }

    /// Build a world without observing progress.
    ///
    /// # Errors
    ///
    /// Fails when any textual generation call fails.
    pub async fn build_world(
        &self,
        idea: &str,
        category: &str,
        include_visuals: bool,
    ) -> WorldsmithResult<WorldAggregate> {
        let mut tracker = ProgressTracker::new();
        self.build_world_with_progress(idea, category, include_visuals, &mut tracker)
            .await
    }

    /// Build a world, reporting visual slot progress through `tracker`.
    ///
    /// The tracker is reset first. Every slot is attempted whether or not
    /// anyone is still listening to the tracker.
    ///
    /// # Errors
    ///
    /// Fails when any textual generation call fails. The tracker is then left
    /// at its reset state.
    #[tracing::instrument(skip(self, tracker), fields(text_model = self.text.model_name()))]
    pub async fn build_world_with_progress(
        &self,
        idea: &str,
        category: &str,
        include_visuals: bool,
        tracker: &mut ProgressTracker,
    ) -> WorldsmithResult<WorldAggregate> {
        tracker.reset();
        let prompts = PromptBuilder::new(idea, category);

        let text = self.generate_text(&prompts).await?;

        let mut visuals = Visuals::default();
        if include_visuals {
            if let Err(e) = self
                .generate_visuals(&prompts, &text.characters, tracker, &mut visuals)
                .await
            {
                tracing::error!(error = %e, "Visual phase aborted, keeping partial results");
            }
        } else {
            tracing::debug!("Visuals disabled, skipping image phase");
        }

        let world = WorldAggregateBuilder::default()
            .idea(idea)
            .category(category)
            .narrative(text.narrative)
            .ideas(text.ideas)
            .customizations(text.customizations)
            .characters(text.characters)
            .regions(text.regions)
            .concept_image(visuals.concept)
            .character_images(visuals.characters)
            .scenario_images(visuals.scenarios)
            .build()
            .map_err(|e| BuilderError::new(e.to_string()))?;

        tracing::info!(
            ideas = world.ideas().len(),
            characters = world.characters().len(),
            visuals = world.has_visuals(),
            "World built"
        );
        Ok(world)
    }

    async fn generate_text(&self, prompts: &PromptBuilder<'_>) -> WorldsmithResult<Text> {
        tracing::info!("Generating narrative");
        let narrative = self.plain(prompts.narrative()).await?;

        tracing::info!("Generating ideas");
        let mut ideas: Vec<IdeaRecord> = self.list(prompts.ideas(self.idea_limit)).await?;
        ideas.truncate(self.idea_limit);
        for idea in &mut ideas {
            idea.title = clean(&idea.title);
            idea.synopsis = clean(&idea.synopsis);
        }

        tracing::info!("Generating customization options");
        let mut customizations: Vec<CustomizationRecord> =
            self.list(prompts.customizations(self.idea_limit)).await?;
        customizations.truncate(self.idea_limit);
        for entry in &mut customizations {
            entry.feature = clean(&entry.feature);
            entry.description = clean(&entry.description);
        }

        tracing::info!("Generating characters");
        let mut characters: Vec<CharacterRecord> =
            self.list(prompts.characters(CHARACTER_SLOTS)).await?;
        characters.truncate(CHARACTER_SLOTS);
        for character in &mut characters {
            character.name = clean(&character.name);
            character.role = clean(&character.role);
            character.description = clean(&character.description);
        }

        tracing::info!("Generating region maps");
        let overview = self.plain(prompts.continental_overview()).await?;
        let districts = self.plain(prompts.settlement_districts()).await?;
        let regions = vec![
            RegionBlock::parse(CONTINENTAL_OVERVIEW, &overview),
            RegionBlock::parse(SETTLEMENT_DISTRICTS, &districts),
        ];

        Ok(Text {
            narrative,
            ideas,
            customizations,
            characters,
            regions,
        })
    }

    async fn plain(&self, request: GenerationRequest) -> WorldsmithResult<String> {
        let result = self.text.generate(&request).await?;
        Ok(clean(&result.into_text()))
    }

    async fn list<T>(&self, request: GenerationRequest) -> WorldsmithResult<Vec<T>>
    where
        T: serde::de::DeserializeOwned,
    {
        let result = self.text.generate(&request).await?;
        if result.records().is_none() {
            tracing::warn!("Expected a structured list, got plain text; using an empty list");
        }
        Ok(result.into_list())
    }

    async fn generate_visuals(
        &self,
        prompts: &PromptBuilder<'_>,
        characters: &[CharacterRecord],
        tracker: &mut ProgressTracker,
        visuals: &mut Visuals,
    ) -> Result<(), ProgressError> {
        let mut jobs = vec![(
            VisualSlot {
                kind: SlotKind::Concept,
                index: 0,
            },
            prompts.concept_image(),
        )];
        jobs.extend(characters.iter().enumerate().map(|(index, character)| {
            (
                VisualSlot {
                    kind: SlotKind::Character,
                    index,
                },
                prompts.character_image(character),
            )
        }));
        jobs.extend(SCENARIO_ARCHETYPES.iter().enumerate().map(|(index, scenario)| {
            (
                VisualSlot {
                    kind: SlotKind::Scenario,
                    index,
                },
                prompts.scenario_image(scenario),
            )
        }));

        tracing::info!(
            slots = jobs.len(),
            synthesis = self.images.is_configured(),
            "Generating visuals"
        );
        for (position, (slot, prompt)) in jobs.into_iter().enumerate() {
            if position > 0 && !self.image_delay.is_zero() {
                tokio::time::sleep(self.image_delay).await;
            }
            tracker.update(slot, SlotStatus::loading())?;
            let result = self.images.try_generate_image(&prompt, slot.kind).await;
            let failed = !result.is_image();
            visuals.store(slot, result);
            tracker.update(slot, SlotStatus::finished(failed))?;
            tracing::debug!(%slot, failed, "Visual slot finished");
        }
        Ok(())
    }
}
