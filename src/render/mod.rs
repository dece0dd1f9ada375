//! Document rendering: markdown → styled HTML → PDF.
//!
//! Each submodule is one transformation step, each a pure function of its
//! input, so the stages are independently testable and freely repeatable.
//!
//! ```text
//! markdown ──▶ sanitise ──▶ html ──▶ pdf
//! (service)    (cleanup)   (template)  (printpdf)
//! ```
//!
//! 1. [`sanitise`] — deterministic cleanup of model quirks (outer fences,
//!    CRLF, invisible Unicode)
//! 2. [`html`] — pulldown-cmark conversion wrapped in the fixed
//!    presentational template
//! 3. [`pdf`] — page layout into a single binary artifact
//!
//! Nothing here is cached: documents are cheap to regenerate and a stale
//! cache is worse than the recompute.

pub mod html;
pub mod pdf;
pub mod sanitise;

pub use html::to_html;
pub use pdf::to_pdf;
