//! Error types for the promptdoc library.
//!
//! Two distinct error types reflect the two places things can go wrong:
//!
//! * [`GenerationError`] — the round-trip to the remote generation service
//!   failed. Returned by [`crate::client::GenerationClient::generate`] and
//!   surfaced through [`crate::session::SubmitOutcome::Failed`]. A failed
//!   generation never disturbs a previously stored result.
//!
//! * [`RenderError`] — the PDF export failed. Returned by
//!   [`crate::render::to_pdf`]. An export failure leaves every displayed
//!   panel exactly as it was.
//!
//! Both are recoverable: callers convert them into a user-facing message and
//! keep running. Nothing in this crate panics on a service or render failure.

use thiserror::Error;

/// Errors from the generation round-trip, one variant per failure stage.
///
/// The variants are ordered by how far the request got: [`Transport`] means
/// no response at all, [`HttpStatus`] means a response with a non-success
/// code, [`MalformedResponse`] means a 2xx response whose body did not carry
/// the expected payload.
///
/// [`Transport`]: GenerationError::Transport
/// [`HttpStatus`]: GenerationError::HttpStatus
/// [`MalformedResponse`]: GenerationError::MalformedResponse
#[derive(Debug, Error)]
pub enum GenerationError {
    /// Connection failure, DNS failure, or timeout before any response.
    #[error("could not reach the generation service: {source}\nCheck BACKEND_URL and your network connection.")]
    Transport {
        #[source]
        source: reqwest::Error,
    },

    /// The service answered with a non-success status code.
    ///
    /// The raw body is kept for diagnostics; generation backends often put
    /// the real reason (quota, bad token) in the body rather than the status
    /// line.
    #[error("generation service returned HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    /// The response parsed as JSON but did not contain a `"response"` key
    /// holding exactly the analysis/architecture/documentation triple.
    #[error("generation service returned an unexpected payload: {detail}")]
    MalformedResponse { detail: String },
}

/// Errors from the markdown → HTML → PDF export path.
///
/// HTML conversion itself is infallible (empty markdown produces an empty
/// but valid document), so only the PDF step carries a `Result`.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The PDF engine could not be initialised for this call.
    ///
    /// Recoverable: the analysis/architecture/documentation panels are
    /// unaffected and the export can simply be retried.
    #[error("PDF engine unavailable: {detail}\nThe markdown export is still available.")]
    Unavailable { detail: String },

    /// The engine started but failed to produce a document.
    #[error("PDF rendering failed: {detail}")]
    Failed { detail: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_status_display_keeps_body() {
        let e = GenerationError::HttpStatus {
            status: 503,
            body: "backend warming up".into(),
        };
        let msg = e.to_string();
        assert!(msg.contains("503"), "got: {msg}");
        assert!(msg.contains("backend warming up"));
    }

    #[test]
    fn malformed_display() {
        let e = GenerationError::MalformedResponse {
            detail: "expected 3 elements, got 2".into(),
        };
        assert!(e.to_string().contains("expected 3 elements, got 2"));
    }

    #[test]
    fn render_unavailable_mentions_markdown_fallback() {
        let e = RenderError::Unavailable {
            detail: "font setup failed".into(),
        };
        assert!(e.to_string().contains("markdown export"));
    }
}
