//! Document export for Worldsmith.
//!
//! A [`WorldAggregate`] is first laid out into a [`DocumentPlan`], a pure
//! description of pages and positioned elements, which a
//! [`DocumentRenderer`] then turns into bytes. [`DocumentExporter`] writes
//! the result and falls back to [`render_text`] when rendering fails.
//!
//! [`WorldAggregate`]: worldsmith_core::WorldAggregate

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod exporter;
mod filename;
mod layout;
mod pdf;
mod text;
mod wrap;

pub use exporter::{DocumentExporter, ExportFormat, ExportOutcome};
pub use filename::file_stem;
pub use layout::{
    ATTRIBUTION, CHARACTER_DESCRIPTION_LINES, CardKind, DocumentPlan, Element, FOOTER_HEIGHT_MM,
    HEADER_BAND_MM, MARGIN_MM, PAGE_HEIGHT_MM, PAGE_WIDTH_MM, Page, PlacedCard, Shade, Weight,
};
pub use pdf::{DocumentRenderer, PdfRenderer};
pub use text::render_text;
pub use wrap::{chars_per_line, line_height, wrap, wrap_capped};
