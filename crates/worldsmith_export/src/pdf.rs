//! PDF rendering with `printpdf`.

use crate::layout::{DocumentPlan, Element, PAGE_HEIGHT_MM, PAGE_WIDTH_MM, Shade, Weight};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use printpdf::image_crate::{self, DynamicImage, GenericImageView};
use printpdf::{
    BuiltinFont, Color, Image, ImageTransform, IndirectFontRef, Mm, PdfDocument,
    PdfLayerReference, Rect, Rgb,
};
use tracing::{debug, instrument, warn};
use worldsmith_error::{ExportError, ExportErrorKind};

/// Resolution images are placed at before scaling.
const IMAGE_DPI: f32 = 300.0;
const MM_PER_INCH: f32 = 25.4;

/// Turns a [`DocumentPlan`] into file bytes.
pub trait DocumentRenderer {
    /// File extension of the produced document, without the dot.
    fn extension(&self) -> &'static str;

    /// Render every page of `plan`.
    ///
    /// # Errors
    ///
    /// Returns an [`ExportError`] when the document cannot be produced.
    fn render(&self, plan: &DocumentPlan) -> Result<Vec<u8>, ExportError>;
}

/// Renders plans to A4 PDF with the built-in Helvetica faces.
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfRenderer;

struct Fonts {
    regular: IndirectFontRef,
    bold: IndirectFontRef,
}

impl DocumentRenderer for PdfRenderer {
    fn extension(&self) -> &'static str {
        "pdf"
    }

    #[instrument(skip_all, fields(pages = plan.pages().len()))]
    fn render(&self, plan: &DocumentPlan) -> Result<Vec<u8>, ExportError> {
        if plan.pages().is_empty() {
            return Err(ExportError::new(ExportErrorKind::Layout(
                "document has no pages".to_string(),
            )));
        }
        check_encodable(plan)?;

        let (doc, first_page, first_layer) = PdfDocument::new(
            plan.title().as_str(),
            Mm(PAGE_WIDTH_MM),
            Mm(PAGE_HEIGHT_MM),
            "Page 1",
        );
        let fonts = Fonts {
            regular: doc
                .add_builtin_font(BuiltinFont::Helvetica)
                .map_err(layout_error)?,
            bold: doc
                .add_builtin_font(BuiltinFont::HelveticaBold)
                .map_err(layout_error)?,
        };

        for (index, page) in plan.pages().iter().enumerate() {
            let layer = if index == 0 {
                doc.get_page(first_page).get_layer(first_layer)
            } else {
                let label = format!("Page {}", index + 1);
                let (page_ref, layer_ref) =
                    doc.add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), label.as_str());
                doc.get_page(page_ref).get_layer(layer_ref)
            };
            for element in page.elements() {
                paint(&layer, &fonts, element);
            }
        }

        let bytes = doc.save_to_bytes().map_err(layout_error)?;
        debug!(bytes = bytes.len(), "PDF rendered");
        Ok(bytes)
    }
}

/// Characters the built-in fonts can show, beyond printable Latin-1.
const WIN_ANSI_EXTRAS: &str = "€‚ƒ„…†‡ˆ‰Š‹ŒŽ‘’“”•–—˜™š›œžŸ";

/// Whether `c` has a WinAnsi code point.
fn win_ansi_encodable(c: char) -> bool {
    matches!(c, ' '..='~' | '\u{a0}'..='\u{ff}') || WIN_ANSI_EXTRAS.contains(c)
}

/// Built-in fonts silently drop characters outside WinAnsi, so refuse the
/// plan instead.
fn check_encodable(plan: &DocumentPlan) -> Result<(), ExportError> {
    let unmappable = plan
        .texts()
        .find_map(|text| text.chars().find(|c| !win_ansi_encodable(*c)));
    match unmappable {
        Some(c) => Err(ExportError::new(ExportErrorKind::Layout(format!(
            "character {c:?} (U+{:04X}) has no glyph in the built-in fonts",
            u32::from(c)
        )))),
        None => Ok(()),
    }
}

fn layout_error(e: printpdf::Error) -> ExportError {
    ExportError::new(ExportErrorKind::Layout(e.to_string()))
}

fn color(shade: Shade) -> Color {
    let (r, g, b) = match shade {
        Shade::Ink => (0.13, 0.13, 0.16),
        Shade::Muted => (0.45, 0.45, 0.5),
        Shade::Brand => (0.16, 0.24, 0.42),
        Shade::Panel => (0.94, 0.94, 0.96),
        Shade::Inverse => (1.0, 1.0, 1.0),
    };
    Color::Rgb(Rgb::new(r, g, b, None))
}

/// Page-space y for a top-left y.
fn flip(y: f32) -> Mm {
    Mm(PAGE_HEIGHT_MM - y)
}

fn paint(layer: &PdfLayerReference, fonts: &Fonts, element: &Element) {
    match element {
        Element::Text {
            x,
            y,
            size_pt,
            weight,
            shade,
            text,
        } => {
            let font = match weight {
                Weight::Regular => &fonts.regular,
                Weight::Bold => &fonts.bold,
            };
            layer.set_fill_color(color(*shade));
            layer.use_text(text.as_str(), *size_pt, Mm(*x), flip(*y), font);
        }
        Element::Rect {
            x,
            y,
            width,
            height,
            shade,
        } => {
            layer.set_fill_color(color(*shade));
            layer.add_rect(Rect::new(Mm(*x), flip(y + height), Mm(x + width), flip(*y)));
        }
        Element::Image {
            x,
            y,
            width,
            height,
            bytes,
        } => match decode_image(bytes) {
            Ok(image) => place_image(layer, image, *x, *y, *width, *height),
            Err(e) => {
                warn!(error = %e.kind, "Skipping image that failed to decode");
                layer.set_fill_color(color(Shade::Muted));
                layer.add_rect(Rect::new(Mm(*x), flip(y + height), Mm(x + width), flip(*y)));
            }
        },
    }
}

/// Decode base64 image bytes into an RGB image.
pub(crate) fn decode_image(encoded: &str) -> Result<DynamicImage, ExportError> {
    let raw = STANDARD
        .decode(encoded.trim())
        .map_err(|e| ExportError::new(ExportErrorKind::ImageDecode(e.to_string())))?;
    let image = image_crate::load_from_memory(&raw)
        .map_err(|e| ExportError::new(ExportErrorKind::ImageDecode(e.to_string())))?;
    Ok(DynamicImage::ImageRgb8(image.to_rgb8()))
}

/// Scale `image` to fit the box at (`x`, `y`), centred, aspect preserved.
fn place_image(layer: &PdfLayerReference, image: DynamicImage, x: f32, y: f32, width: f32, height: f32) {
    let (px_w, px_h) = image.dimensions();
    let natural_w = px_w.max(1) as f32 / IMAGE_DPI * MM_PER_INCH;
    let natural_h = px_h.max(1) as f32 / IMAGE_DPI * MM_PER_INCH;
    let scale = (width / natural_w).min(height / natural_h);
    let drawn_w = natural_w * scale;
    let drawn_h = natural_h * scale;
    let left = x + (width - drawn_w) / 2.0;
    let bottom = y + (height + drawn_h) / 2.0;

    Image::from_dynamic_image(&image).add_to_layer(
        layer.clone(),
        ImageTransform {
            translate_x: Some(Mm(left)),
            translate_y: Some(flip(bottom)),
            scale_x: Some(scale),
            scale_y: Some(scale),
            dpi: Some(IMAGE_DPI),
            ..Default::default()
        },
    );
}
