//! CLI binary for promptdoc.
//!
//! A thin shim over the library crate: maps flags and environment to a
//! `ServiceConfig`, drives a `Session`, and prints the three panels. Errors
//! from the service or the PDF engine become messages; the process only
//! exits non-zero, it never panics on them.

use anyhow::{Context, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use promptdoc::{
    GenerationClient, Panel, PanelSet, RejectReason, ServiceConfig, Session, SubmitOutcome,
    DEFAULT_PDF_FILENAME,
};
use std::io::{self, BufRead, Read, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

// ── ANSI colour helpers (no extra deps) ──────────────────────────────────────

fn green(s: &str) -> String {
    format!("\x1b[32m{s}\x1b[0m")
}
fn red(s: &str) -> String {
    format!("\x1b[31m{s}\x1b[0m")
}
fn dim(s: &str) -> String {
    format!("\x1b[2m{s}\x1b[0m")
}
fn bold(s: &str) -> String {
    format!("\x1b[1m{s}\x1b[0m")
}
fn cyan(s: &str) -> String {
    format!("\x1b[36m{s}\x1b[0m")
}

const AFTER_HELP: &str = r#"EXAMPLES:
  # Generate documentation for an inline prompt
  promptdoc "def f(): pass"

  # Generate from a source file and export the PDF
  promptdoc --file src/main.py --pdf documentation.pdf

  # Save the raw markdown alongside the PDF
  promptdoc --file lib.rs --pdf out.pdf --markdown out.md

  # Structured JSON output (for scripting)
  promptdoc --json "explain this module" < /dev/null

  # Interactive session: re-submit, inspect panels, export on demand
  promptdoc --interactive

  # Pipe a snippet on stdin
  cat src/parser.rs | promptdoc

INTERACTIVE COMMANDS:
  <any text>      submit it as a prompt
  :panels         re-print the panels for the current result
  :md [PATH]      print the raw markdown, or write it to PATH
  :pdf [PATH]     export the PDF (default: documentation.pdf)
  :json           print the current result as JSON
  :help           show this list
  :quit           leave

ENVIRONMENT VARIABLES:
  BACKEND_URL     Generation service endpoint (required)
  API_KEY         Bearer token for the service (required)
  RUST_LOG        Tracing filter override (e.g. promptdoc=debug)

A .env file in the working directory is loaded automatically.
"#;

/// Generate code analysis, architecture overviews, and markdown
/// documentation from a prompt or source snippet.
#[derive(Parser, Debug)]
#[command(
    name = "promptdoc",
    version,
    about = "Generate code analysis, architecture overview, and documentation from a prompt",
    long_about = "Send a prompt or source-code snippet to a generation service and render the \
result as three panels: code analysis, architecture overview, and markdown documentation \
with PDF export.",
    color = clap::ColorChoice::Auto,
    after_long_help = AFTER_HELP
)]
struct Cli {
    /// Prompt or code snippet. Reads stdin when omitted (unless --file or
    /// --interactive is given).
    prompt: Option<String>,

    /// Read the prompt from a file instead.
    #[arg(short, long, conflicts_with = "prompt")]
    file: Option<PathBuf>,

    /// Generation service endpoint.
    #[arg(long, env = "BACKEND_URL", hide_env_values = true)]
    backend_url: String,

    /// Bearer token for the generation service.
    #[arg(long, env = "API_KEY", hide_env_values = true)]
    api_key: String,

    /// Write the documentation PDF to this path after a successful generation.
    #[arg(long, value_name = "PATH")]
    pdf: Option<PathBuf>,

    /// Write the raw markdown to this path after a successful generation.
    #[arg(long, value_name = "PATH")]
    markdown: Option<PathBuf>,

    /// Print the parsed result as pretty JSON instead of panels.
    #[arg(long)]
    json: bool,

    /// Start an interactive read-submit-render loop.
    #[arg(short, long)]
    interactive: bool,

    /// Whole-request timeout in seconds.
    #[arg(long, default_value_t = 120)]
    timeout: u64,

    /// Disable the progress spinner.
    #[arg(long)]
    no_spinner: bool,

    /// Enable DEBUG-level tracing logs.
    #[arg(short, long)]
    verbose: bool,

    /// Suppress all output except results and errors.
    #[arg(short, long)]
    quiet: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env before clap resolves env-backed arguments.
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    // ── Logging setup ────────────────────────────────────────────────────
    let filter = if cli.verbose {
        "promptdoc=debug"
    } else if cli.quiet {
        "error"
    } else {
        "warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .with_writer(io::stderr)
        .init();

    let config = ServiceConfig::builder()
        .endpoint(&cli.backend_url)
        .token(&cli.api_key)
        .request_timeout_secs(cli.timeout)
        .build();
    let client = GenerationClient::new(config).context("Failed to build the service client")?;
    let mut session = Session::new(client);

    if cli.interactive {
        return interactive_loop(&mut session, &cli).await;
    }

    // ── One-shot mode ────────────────────────────────────────────────────
    let prompt = resolve_prompt(&cli)?;
    submit_and_report(&mut session, &prompt, &cli).await?;

    if cli.json {
        let result = session.result().expect("submission just completed");
        println!("{}", serde_json::to_string_pretty(result)?);
    } else if let Some(panels) = session.panels() {
        print_panels(&panels);
    }

    if let Some(ref path) = cli.markdown {
        write_markdown(&session, path).await?;
        if !cli.quiet {
            eprintln!("{} markdown → {}", green("✔"), bold(&path.display().to_string()));
        }
    }
    if let Some(ref path) = cli.pdf {
        write_pdf(&session, path).await?;
        if !cli.quiet {
            eprintln!("{} PDF → {}", green("✔"), bold(&path.display().to_string()));
        }
    }

    Ok(())
}

/// Resolve the one-shot prompt: argument, file, or stdin.
fn resolve_prompt(cli: &Cli) -> Result<String> {
    if let Some(ref p) = cli.prompt {
        return Ok(p.clone());
    }
    if let Some(ref path) = cli.file {
        return std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read prompt from {}", path.display()));
    }
    let mut buf = String::new();
    io::stdin()
        .read_to_string(&mut buf)
        .context("Failed to read prompt from stdin")?;
    Ok(buf)
}

/// Submit one prompt, with a spinner while the request is in flight.
///
/// Returns Err only in one-shot mode semantics: an ignored or failed
/// submission is an error for the process, while in interactive mode the
/// caller just prints and continues.
async fn submit_and_report(session: &mut Session, prompt: &str, cli: &Cli) -> Result<()> {
    let spinner = if cli.no_spinner || cli.quiet {
        None
    } else {
        let s = ProgressBar::new_spinner();
        s.set_style(
            ProgressStyle::with_template("{spinner:.cyan} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner())
                .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏", "⠿"]),
        );
        s.set_message("Generating…");
        s.enable_steady_tick(Duration::from_millis(80));
        Some(s)
    };

    let outcome = session.submit(prompt).await;
    if let Some(s) = spinner {
        s.finish_and_clear();
    }

    match outcome {
        SubmitOutcome::Completed => Ok(()),
        SubmitOutcome::Ignored(RejectReason::EmptyPrompt) => {
            anyhow::bail!("Nothing to submit: the prompt is empty")
        }
        SubmitOutcome::Ignored(RejectReason::InFlight) => {
            anyhow::bail!("A generation is already in flight")
        }
        SubmitOutcome::Failed(e) => Err(e).context("Generation failed"),
    }
}

// ── Panel printing ───────────────────────────────────────────────────────────

fn print_panels(panels: &PanelSet) {
    print_panel(&panels.analysis);
    print_panel(&panels.architecture);

    let doc = &panels.documentation;
    println!("\n{} {}", cyan("◆"), bold(doc.title));
    println!("  {}", dim(doc.blurb));
    if doc.markdown.trim().is_empty() {
        println!("  {}", dim("—"));
    } else {
        for line in doc.markdown.lines() {
            println!("    {line}");
        }
    }
}

fn print_panel(panel: &Panel) {
    println!("\n{} {}", cyan("◆"), bold(panel.title));
    println!("  {}", dim(panel.blurb));
    for section in &panel.sections {
        println!("  {}", bold(section.label));
        if section.is_empty() {
            println!("    {}", dim("—"));
        } else {
            for line in section.body.lines() {
                println!("    {line}");
            }
        }
    }
}

// ── Exports ──────────────────────────────────────────────────────────────────

/// Atomic write: temp file in the target directory, then rename.
async fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent)
                .await
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
    }
    let tmp = path.with_extension("tmp");
    tokio::fs::write(&tmp, bytes)
        .await
        .with_context(|| format!("Failed to write {}", tmp.display()))?;
    tokio::fs::rename(&tmp, path)
        .await
        .with_context(|| format!("Failed to move into place: {}", path.display()))?;
    Ok(())
}

async fn write_markdown(session: &Session, path: &Path) -> Result<()> {
    let md = session
        .markdown()
        .context("No result to export markdown from")?;
    write_atomic(path, md.as_bytes()).await
}

async fn write_pdf(session: &Session, path: &Path) -> Result<()> {
    let rendered = session.export_pdf().context("No result to export a PDF from")?;
    let bytes = rendered.context("PDF rendering failed")?;
    write_atomic(path, &bytes).await
}

// ── Interactive mode ─────────────────────────────────────────────────────────

async fn interactive_loop(session: &mut Session, cli: &Cli) -> Result<()> {
    if !cli.quiet {
        eprintln!(
            "{}",
            bold("promptdoc — type a prompt, or :help for commands")
        );
    }

    let stdin = io::stdin();
    loop {
        eprint!("{} ", cyan("promptdoc>"));
        io::stderr().flush().ok();

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }
        let line = line.trim();

        if line.is_empty() {
            continue;
        }

        if let Some(command) = line.strip_prefix(':') {
            if handle_command(session, command).await? {
                break;
            }
            continue;
        }

        // Anything else is a prompt. Failures are printed and the loop goes
        // on; the previous result (if any) is still there.
        match submit_and_report(session, line, cli).await {
            Ok(()) => {
                if let Some(panels) = session.panels() {
                    print_panels(&panels);
                }
            }
            Err(e) => eprintln!("{} {e:#}", red("✗")),
        }
    }

    Ok(())
}

/// Execute one `:command`. Returns true when the loop should end.
async fn handle_command(session: &Session, command: &str) -> Result<bool> {
    let (name, arg) = match command.split_once(char::is_whitespace) {
        Some((n, a)) => (n, Some(a.trim())),
        None => (command, None),
    };

    match name {
        "quit" | "q" | "exit" => return Ok(true),
        "help" | "h" => {
            eprintln!(
                "  :panels         re-print the current panels\n  \
                 :md [PATH]      print or save the raw markdown\n  \
                 :pdf [PATH]     export the PDF (default: {DEFAULT_PDF_FILENAME})\n  \
                 :json           print the current result as JSON\n  \
                 :quit           leave"
            );
        }
        "panels" => match session.panels() {
            Some(panels) => print_panels(&panels),
            None => eprintln!("{}", dim("No result yet — submit a prompt first.")),
        },
        "md" => match session.markdown() {
            Some(md) => {
                if let Some(path) = arg.filter(|a| !a.is_empty()) {
                    let path = PathBuf::from(path);
                    write_atomic(&path, md.as_bytes()).await?;
                    eprintln!("{} markdown → {}", green("✔"), bold(&path.display().to_string()));
                } else {
                    println!("{md}");
                }
            }
            None => eprintln!("{}", dim("No result yet — submit a prompt first.")),
        },
        "pdf" => match session.export_pdf() {
            Some(Ok(bytes)) => {
                let path = arg
                    .filter(|a| !a.is_empty())
                    .map(PathBuf::from)
                    .unwrap_or_else(|| PathBuf::from(session.pdf_filename()));
                write_atomic(&path, &bytes).await?;
                eprintln!(
                    "{} PDF ({} bytes) → {}",
                    green("✔"),
                    bytes.len(),
                    bold(&path.display().to_string())
                );
            }
            // A render failure costs the export, nothing else.
            Some(Err(e)) => eprintln!("{} {e}", red("✗")),
            None => eprintln!("{}", dim("No result yet — submit a prompt first.")),
        },
        "json" => match session.result() {
            Some(result) => println!("{}", serde_json::to_string_pretty(result)?),
            None => eprintln!("{}", dim("No result yet — submit a prompt first.")),
        },
        other => eprintln!("{} unknown command :{other} — try :help", red("✗")),
    }

    Ok(false)
}
