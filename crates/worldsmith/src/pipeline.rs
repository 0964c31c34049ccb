//! Generate-then-export pipeline.

use derive_getters::Getters;
use tracing::info;
use worldsmith_core::WorldAggregate;
use worldsmith_error::WorldsmithResult;
use worldsmith_export::{DocumentExporter, DocumentRenderer, ExportOutcome};
use worldsmith_interface::{ImageSynthesizer, TextGenerator};
use worldsmith_narrative::{ProgressTracker, WorldOrchestrator};

/// A built world and where it was exported.
#[derive(Debug, Clone, Getters)]
pub struct GeneratedWorld {
    /// The aggregate
    world: WorldAggregate,
    /// The written file
    outcome: ExportOutcome,
}

impl GeneratedWorld {
    /// Split into the aggregate and the export outcome.
    pub fn into_parts(self) -> (WorldAggregate, ExportOutcome) {
        (self.world, self.outcome)
    }
}

/// Build a world and export it.
///
/// # Errors
///
/// Fails when a textual generation call fails, or when even the text export
/// cannot be written.
pub async fn generate_world<G, S, R>(
    orchestrator: &WorldOrchestrator<G, S>,
    exporter: &DocumentExporter<R>,
    idea: &str,
    category: &str,
    include_visuals: bool,
    tracker: &mut ProgressTracker,
) -> WorldsmithResult<GeneratedWorld>
where
    G: TextGenerator,
    S: ImageSynthesizer,
    R: DocumentRenderer,
{
    let world = orchestrator
        .build_world_with_progress(idea, category, include_visuals, tracker)
        .await?;
    let outcome = exporter.export(&world)?;
    info!(
        path = %outcome.path().display(),
        format = %outcome.format(),
        degraded = *outcome.degraded(),
        "World exported"
    );
    Ok(GeneratedWorld { world, outcome })
}
