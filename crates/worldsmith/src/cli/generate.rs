//! World generation command handler.

use std::path::PathBuf;
use tracing::{info, warn};
use worldsmith::{
    DocumentExporter, ExportOutcome, GeminiClient, IoError, JsonError, ProgressTracker,
    WorldOrchestrator, WorldsmithConfig, WorldsmithResult, generate_world,
};

/// Inputs for one `generate` run.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// The idea
    pub idea: String,
    /// The category label
    pub category: String,
    /// Whether to attempt images
    pub include_visuals: bool,
    /// Export directory
    pub output_dir: PathBuf,
    /// Where to save the aggregate as JSON, if anywhere
    pub save_json: Option<PathBuf>,
}

/// Build a world with the Gemini backends and export it.
pub async fn run_generate(
    config: &WorldsmithConfig,
    api_key: Option<String>,
    options: GenerateOptions,
) -> WorldsmithResult<()> {
    let gemini = config.gemini_config(api_key);
    if !gemini.has_credential() {
        warn!("GEMINI_API_KEY is not set; generation requests will be rejected");
    }

    let text = GeminiClient::new(gemini);
    let images = text.imagen();
    let orchestrator = WorldOrchestrator::new(text, images)
        .with_image_delay(config.image_delay())
        .with_idea_limit(*config.generation().idea_count());
    let exporter = DocumentExporter::new(&options.output_dir);

    let mut tracker = ProgressTracker::new();
    let mut updates = tracker.subscribe();
    let reporter = tokio::spawn(async move {
        while let Some(update) = updates.recv().await {
            let status = update.status;
            if status.loading {
                info!(slot = %update.slot, "Generating visual");
            } else if status.failed {
                info!(slot = %update.slot, "Visual replaced by art direction");
            } else {
                info!(slot = %update.slot, "Visual ready");
            }
        }
    });

    println!(
        "Building a {} world from \"{}\"...",
        options.category, options.idea
    );
    let result = generate_world(
        &orchestrator,
        &exporter,
        &options.idea,
        &options.category,
        options.include_visuals,
        &mut tracker,
    )
    .await;

    drop(tracker);
    if let Err(e) = reporter.await {
        warn!(error = %e, "Progress reporter stopped unexpectedly");
    }

    let (world, outcome) = result?.into_parts();

    if let Some(path) = &options.save_json {
        let json = serde_json::to_string_pretty(&world)
            .map_err(|e| JsonError::new(format!("Failed to serialize world: {}", e)))?;
        std::fs::write(path, json)
            .map_err(|e| IoError::new(format!("Failed to write {}: {}", path.display(), e)))?;
        println!("Saved world data to {}", path.display());
    }

    report(&outcome);
    Ok(())
}

/// Tell the user where the export went.
pub(super) fn report(outcome: &ExportOutcome) {
    if *outcome.degraded() {
        println!(
            "PDF export failed; exported as text to {}",
            outcome.path().display()
        );
    } else {
        println!("Exported {} to {}", outcome.format(), outcome.path().display());
    }
}
