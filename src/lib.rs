//! # promptdoc
//!
//! Generate code analysis, architecture overviews, and Markdown
//! documentation — with PDF export — from a prompt or source snippet, via a
//! remote generation service.
//!
//! ## Pipeline Overview
//!
//! ```text
//! prompt
//!  │
//!  ├─ 1. Submit   session state machine (Idle → Generating → Ready)
//!  ├─ 2. Generate one authenticated POST to the generation service
//!  ├─ 3. Store    whole-value replacement of the session result
//!  ├─ 4. Panels   analysis / architecture / documentation projections
//!  └─ 5. Export   markdown → styled HTML → PDF bytes
//! ```
//!
//! The session is the only stateful piece. The client and the renderer are
//! pure over their inputs; panels are recomputed from the store on every
//! render pass, so a failed re-submission never blanks a good result.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use promptdoc::{GenerationClient, ServiceConfig, Session, SubmitOutcome};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ServiceConfig::builder()
//!         .endpoint(std::env::var("BACKEND_URL")?)
//!         .token(std::env::var("API_KEY")?)
//!         .build();
//!
//!     let mut session = Session::new(GenerationClient::new(config)?);
//!     match session.submit("def f(): pass").await {
//!         SubmitOutcome::Completed => {
//!             let panels = session.panels().expect("result just stored");
//!             println!("{}", panels.analysis.sections[0].body);
//!             let pdf = session.export_pdf().expect("documentation present")?;
//!             std::fs::write("documentation.pdf", pdf)?;
//!         }
//!         SubmitOutcome::Failed(e) => eprintln!("{e}"),
//!         SubmitOutcome::Ignored(reason) => eprintln!("ignored: {reason:?}"),
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli`   | on      | Enables the `promptdoc` binary (clap + anyhow + tracing-subscriber + indicatif + dotenvy) |
//!
//! Disable `cli` when using only the library:
//! ```toml
//! promptdoc = { version = "0.1", default-features = false }
//! ```

// ── Modules ──────────────────────────────────────────────────────────────

pub mod client;
pub mod config;
pub mod error;
pub mod model;
pub mod panels;
pub mod render;
pub mod session;
pub mod store;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use client::GenerationClient;
pub use config::{ServiceConfig, ServiceConfigBuilder, DEFAULT_PDF_FILENAME};
pub use error::{GenerationError, RenderError};
pub use model::{Analysis, Architecture, Documentation, GenerationRequest, GenerationResult};
pub use panels::{DocumentationPanel, Panel, PanelSet, Section};
pub use render::{to_html, to_pdf};
pub use session::{RejectReason, Session, SessionState, SubmitOutcome};
pub use store::ResultStore;
