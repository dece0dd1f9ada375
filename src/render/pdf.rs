//! HTML → PDF: lay the styled document out as a single binary artifact.
//!
//! printpdf's HTML engine does the page layout with default A4 geometry. The
//! conversion is a pure function of the markdown text — no clock, no
//! filesystem, no external state — so the same input always yields the same
//! document. Engine warnings are logged and otherwise ignored; only hard
//! failures surface as [`RenderError`].

use crate::error::RenderError;
use printpdf::{GeneratePdfOptions, PdfDocument};
use std::collections::BTreeMap;
use tracing::{debug, warn};

use super::html;

/// Render markdown to PDF bytes.
///
/// Internally converts via [`html::to_html`] first, so the PDF typography
/// matches the HTML preview. Never writes to disk; the caller decides what
/// to do with the bytes.
pub fn to_pdf(markdown: &str) -> Result<Vec<u8>, RenderError> {
    let document = html::to_html(markdown);
    let mut warnings = Vec::new();

    // No embedded images or custom fonts: the template sticks to the
    // built-in font families so the engine needs nothing from outside.
    let doc = PdfDocument::from_html(
        &document,
        &BTreeMap::new(),
        &BTreeMap::new(),
        &GeneratePdfOptions::default(),
        &mut warnings,
    )
    .map_err(|e| RenderError::Unavailable {
        detail: e.to_string(),
    })?;

    for w in &warnings {
        warn!("PDF engine warning: {w:?}");
    }

    let mut save_warnings = Vec::new();
    let bytes = doc.save(&Default::default(), &mut save_warnings);
    for w in &save_warnings {
        warn!("PDF engine warning: {w:?}");
    }

    debug!("Rendered PDF: {} bytes", bytes.len());
    Ok(bytes)
}
