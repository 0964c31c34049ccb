//! Re-export of a saved world.

use std::path::Path;
use worldsmith::{DocumentExporter, IoError, JsonError, WorldAggregate, WorldsmithResult};

/// Load a world saved with `--save-json` and export it into `output_dir`.
pub fn export_saved_world(aggregate: &Path, output_dir: &Path) -> WorldsmithResult<()> {
    let raw = std::fs::read_to_string(aggregate)
        .map_err(|e| IoError::new(format!("Failed to read {}: {}", aggregate.display(), e)))?;
    let world: WorldAggregate = serde_json::from_str(&raw)
        .map_err(|e| JsonError::new(format!("Failed to parse {}: {}", aggregate.display(), e)))?;

    let outcome = DocumentExporter::new(output_dir).export(&world)?;
    super::generate::report(&outcome);
    Ok(())
}
