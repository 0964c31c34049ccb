//! Writing export files.

use crate::{DocumentPlan, DocumentRenderer, PdfRenderer, file_stem, render_text};
use chrono::{Local, NaiveDate};
use derive_getters::Getters;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, instrument, warn};
use worldsmith_core::WorldAggregate;
use worldsmith_error::{ExportError, ExportErrorKind};

/// Format of a written export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum ExportFormat {
    /// Paginated document from the renderer
    Pdf,
    /// Flat text fallback
    Text,
}

/// What an export produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
pub struct ExportOutcome {
    /// Written file
    path: PathBuf,
    /// Its format
    format: ExportFormat,
    /// True when the text fallback was used
    degraded: bool,
}

/// Writes a world to disk, preferring the rendered document and falling back
/// to plain text.
///
/// # Examples
///
/// ```no_run
/// use worldsmith_export::DocumentExporter;
/// # fn demo(world: &worldsmith_core::WorldAggregate) -> Result<(), worldsmith_error::ExportError> {
/// let outcome = DocumentExporter::new("exports").export(world)?;
/// println!("wrote {}", outcome.path().display());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct DocumentExporter<R = PdfRenderer> {
    renderer: R,
    output_dir: PathBuf,
    date: Option<NaiveDate>,
}

impl DocumentExporter<PdfRenderer> {
    /// PDF exporter writing into `output_dir`.
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self::with_renderer(PdfRenderer, output_dir)
    }
}

impl<R: DocumentRenderer> DocumentExporter<R> {
    /// Exporter with a custom renderer.
    pub fn with_renderer(renderer: R, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            renderer,
            output_dir: output_dir.into(),
            date: None,
        }
    }

    /// Use `date` in file names instead of today's local date.
    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    /// Directory files are written to.
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Export `world`.
    ///
    /// A layout or render failure, or a failure writing the rendered file,
    /// falls back to `{stem}.txt` and is reported through
    /// [`ExportOutcome::degraded`].
    ///
    /// # Errors
    ///
    /// Fails only when the output directory or the text fallback cannot be
    /// written.
    #[instrument(skip(self, world), fields(category = %world.category(), dir = %self.output_dir.display()))]
    pub fn export(&self, world: &WorldAggregate) -> Result<ExportOutcome, ExportError> {
        fs::create_dir_all(&self.output_dir).map_err(|e| write_error(&self.output_dir, e))?;

        let date = self.date.unwrap_or_else(|| Local::now().date_naive());
        let stem = file_stem(world.category(), date);

        let plan = DocumentPlan::layout(world);
        let rendered = self.renderer.render(&plan).and_then(|bytes| {
            let path = self
                .output_dir
                .join(format!("{stem}.{}", self.renderer.extension()));
            write(&path, &bytes)?;
            Ok(path)
        });

        match rendered {
            Ok(path) => {
                info!(path = %path.display(), pages = plan.pages().len(), "Document exported");
                Ok(ExportOutcome {
                    path,
                    format: ExportFormat::Pdf,
                    degraded: false,
                })
            }
            Err(e) => {
                warn!(error = %e, "Document export failed, exporting as text");
                let path = self.output_dir.join(format!("{stem}.txt"));
                write(&path, render_text(world).as_bytes())?;
                info!(path = %path.display(), "Text export written");
                Ok(ExportOutcome {
                    path,
                    format: ExportFormat::Text,
                    degraded: true,
                })
            }
        }
    }
}

fn write(path: &Path, bytes: &[u8]) -> Result<(), ExportError> {
    fs::write(path, bytes).map_err(|e| write_error(path, e))
}

fn write_error(path: &Path, e: std::io::Error) -> ExportError {
    ExportError::new(ExportErrorKind::Write {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}
