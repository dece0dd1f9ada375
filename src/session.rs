//! The interactive session: submission state machine and panel access.
//!
//! A [`Session`] owns the result store and drives the whole flow: it takes
//! the user's prompt, calls the client, writes the store on success, and
//! answers every render pass from the store's current contents.
//!
//! ## State machine
//!
//! ```text
//! Idle ──submit──▶ Generating ──ok──▶ Ready ⇄ Generating (re-submission)
//!   ▲                  │
//!   └──────error───────┘   (back to wherever it came from)
//! ```
//!
//! There is no error-terminal state: a failure restores the pre-submission
//! state and surfaces the error transiently via [`SubmitOutcome::Failed`].
//! The store is written only on success, so a failed re-submission still
//! shows the last good result.
//!
//! At most one request is in flight: `submit` takes `&mut self`, and a
//! re-entrant driver that checks state mid-flight gets
//! [`SubmitOutcome::Ignored`] rather than a queued second request. Once
//! dispatched, a request runs to completion under the transport timeout;
//! there is no cancellation.

use crate::client::GenerationClient;
use crate::error::{GenerationError, RenderError};
use crate::model::GenerationResult;
use crate::panels::PanelSet;
use crate::render;
use crate::store::ResultStore;
use tracing::{info, warn};

/// Where the session currently is in its submission cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No result yet, nothing in flight.
    Idle,
    /// A generation request is in flight.
    Generating,
    /// A result is stored and no request is in flight.
    Ready,
}

/// Why a submission was ignored without dispatching anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// The prompt was empty or whitespace-only.
    EmptyPrompt,
    /// A request is already in flight; submissions are debounced, not queued.
    InFlight,
}

/// What happened to a call to [`Session::submit`].
#[derive(Debug)]
pub enum SubmitOutcome {
    /// The result was stored; panels now reflect it.
    Completed,
    /// Nothing was dispatched and no state changed.
    Ignored(RejectReason),
    /// The request failed; the store and panels are untouched.
    Failed(GenerationError),
}

/// One user's session: client + store + state.
#[derive(Debug)]
pub struct Session {
    client: GenerationClient,
    store: ResultStore,
    state: SessionState,
}

impl Session {
    /// Start an empty session.
    pub fn new(client: GenerationClient) -> Self {
        Self::with_store(client, ResultStore::new())
    }

    /// Start from an injected store, e.g. a pre-populated one in tests.
    pub fn with_store(client: GenerationClient, store: ResultStore) -> Self {
        let state = if store.is_populated() {
            SessionState::Ready
        } else {
            SessionState::Idle
        };
        Self {
            client,
            store,
            state,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// The stored result, if any.
    pub fn result(&self) -> Option<&GenerationResult> {
        self.store.get()
    }

    /// Submit a prompt to the generation service.
    ///
    /// Requires both a non-empty prompt and an idle machine; otherwise the
    /// call is a no-op reported through [`SubmitOutcome::Ignored`]. The
    /// `await` on the client is the session's single suspension point — the
    /// state machine only transitions again once the call has resolved.
    pub async fn submit(&mut self, prompt: &str) -> SubmitOutcome {
        if prompt.trim().is_empty() {
            return SubmitOutcome::Ignored(RejectReason::EmptyPrompt);
        }
        if self.state == SessionState::Generating {
            return SubmitOutcome::Ignored(RejectReason::InFlight);
        }

        let resume = self.state;
        self.state = SessionState::Generating;
        info!("Generation started");

        match self.client.generate(prompt).await {
            Ok(result) => {
                self.store.set(result);
                self.state = SessionState::Ready;
                info!("Generation complete, result stored");
                SubmitOutcome::Completed
            }
            Err(e) => {
                // Prior result (if any) stays visible; only the state rolls back.
                self.state = resume;
                warn!("Generation failed: {e}");
                SubmitOutcome::Failed(e)
            }
        }
    }

    /// The three presentation panels — `Some` iff the store holds a result.
    ///
    /// Driven by store state, not by the most recent request's outcome, so a
    /// render pass after a failed re-submission still shows the last good
    /// result.
    pub fn panels(&self) -> Option<PanelSet> {
        self.store.get().map(PanelSet::from_result)
    }

    /// The current result's raw markdown, verbatim.
    pub fn markdown(&self) -> Option<&str> {
        self.store.get().map(|r| r.documentation.markdown.as_str())
    }

    /// Render the current result's documentation as a styled HTML document.
    pub fn export_html(&self) -> Option<String> {
        self.markdown().map(render::to_html)
    }

    /// Render the current result's documentation as PDF bytes.
    ///
    /// `None` when there is nothing to export; `Some(Err(_))` when the
    /// engine failed — in either case the panels are unaffected.
    pub fn export_pdf(&self) -> Option<Result<Vec<u8>, RenderError>> {
        self.markdown().map(|md| render::to_pdf(md))
    }

    /// Filename to offer for the PDF download.
    pub fn pdf_filename(&self) -> &str {
        &self.client.config().pdf_filename
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ServiceConfig;
    use crate::model::{Analysis, GenerationResult};

    /// Client pointed at a port nothing listens on: any dispatched request
    /// fails fast with a transport error.
    fn unreachable_client() -> GenerationClient {
        let config = ServiceConfig::builder()
            .endpoint("http://127.0.0.1:1/generate")
            .token("test-token")
            .request_timeout_secs(2)
            .build();
        GenerationClient::new(config).unwrap()
    }

    fn stored_result() -> GenerationResult {
        GenerationResult {
            analysis: Analysis {
                purpose: "kept".into(),
                ..Analysis::default()
            },
            ..GenerationResult::default()
        }
    }

    #[tokio::test]
    async fn empty_prompt_is_a_no_op() {
        let mut session = Session::new(unreachable_client());
        let outcome = session.submit("   ").await;
        assert!(matches!(
            outcome,
            SubmitOutcome::Ignored(RejectReason::EmptyPrompt)
        ));
        assert_eq!(session.state(), SessionState::Idle);
        assert!(session.panels().is_none());
    }

    #[tokio::test]
    async fn failure_from_idle_returns_to_idle() {
        let mut session = Session::new(unreachable_client());
        let outcome = session.submit("def f(): pass").await;
        assert!(matches!(
            outcome,
            SubmitOutcome::Failed(GenerationError::Transport { .. })
        ));
        assert_eq!(session.state(), SessionState::Idle);
        assert!(session.result().is_none());
    }

    #[tokio::test]
    async fn failure_from_ready_keeps_result_and_state() {
        let store = ResultStore::with_result(stored_result());
        let mut session = Session::with_store(unreachable_client(), store);
        assert_eq!(session.state(), SessionState::Ready);

        let outcome = session.submit("try again").await;
        assert!(matches!(outcome, SubmitOutcome::Failed(_)));

        assert_eq!(session.state(), SessionState::Ready);
        assert_eq!(session.result().unwrap().analysis.purpose, "kept");
        assert!(session.panels().is_some());
    }

    #[tokio::test]
    async fn exports_absent_without_result() {
        let session = Session::new(unreachable_client());
        assert!(session.markdown().is_none());
        assert!(session.export_html().is_none());
        assert!(session.export_pdf().is_none());
    }

    #[test]
    fn prepopulated_store_starts_ready() {
        let store = ResultStore::with_result(stored_result());
        let session = Session::with_store(unreachable_client(), store);
        assert_eq!(session.state(), SessionState::Ready);
        assert_eq!(
            session.panels().unwrap().analysis.sections[0].body,
            "kept"
        );
    }
}
