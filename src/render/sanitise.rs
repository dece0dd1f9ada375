//! Deterministic cleanup of service-produced markdown before rendering.
//!
//! The documentation field comes out of a language model, and models have
//! recurring quirks that are harmless in a text box but ugly in a rendered
//! document: wrapping the whole answer in a ` ```markdown ` fence, Windows
//! line endings, invisible Unicode that survives copy-paste. These rules fix
//! exactly those quirks without touching content.
//!
//! The raw markdown export is never sanitised — what the service returned is
//! what the user can copy. Only the HTML/PDF path runs through here, and
//! every rule is a pure `&str → String` function, so rendering stays a pure
//! function of its input.

use once_cell::sync::Lazy;
use regex::Regex;

/// Apply all cleanup rules in order.
///
/// 1. Normalise line endings (CRLF/CR → LF)
/// 2. Strip a single outer markdown fence wrapping the whole text
/// 3. Remove invisible Unicode (ZWSP, BOM, soft hyphen, joiners)
/// 4. Ensure the text ends with exactly one newline
///
/// Line endings come first: the fence pattern matches `\n` only, so it must
/// see already-normalised text or a CRLF document would need two passes.
pub fn clean_markdown(input: &str) -> String {
    let s = normalise_line_endings(input);
    let s = strip_outer_fence(&s);
    let s = remove_invisible_chars(&s);
    ensure_final_newline(&s)
}

// ── Rule 2: strip a whole-document fence ─────────────────────────────────

static RE_OUTER_FENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)^```(?:markdown|md)?\n(.*)\n```\s*$").unwrap());

fn strip_outer_fence(input: &str) -> String {
    match RE_OUTER_FENCE.captures(input.trim()) {
        Some(caps) => caps[1].to_string(),
        None => input.to_string(),
    }
}

// ── Rule 1: normalise line endings ───────────────────────────────────────

fn normalise_line_endings(input: &str) -> String {
    input.replace("\r\n", "\n").replace('\r', "\n")
}

// ── Rule 3: remove invisible Unicode ─────────────────────────────────────

fn remove_invisible_chars(input: &str) -> String {
    input.replace(
        [
            '\u{200B}', '\u{FEFF}', '\u{00AD}', '\u{200C}', '\u{200D}', '\u{2060}',
        ],
        "",
    )
}

// ── Rule 4: single trailing newline ──────────────────────────────────────

fn ensure_final_newline(input: &str) -> String {
    let trimmed = input.trim_end();
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("{trimmed}\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_markdown_fence() {
        assert_eq!(
            strip_outer_fence("```markdown\n# Hi\nBody\n```"),
            "# Hi\nBody"
        );
    }

    #[test]
    fn strips_bare_fence() {
        assert_eq!(strip_outer_fence("```\n# Hi\n```"), "# Hi");
    }

    #[test]
    fn inner_fences_survive() {
        let input = "# Doc\n\n```rust\nfn main() {}\n```\n";
        assert_eq!(strip_outer_fence(input), input);
    }

    #[test]
    fn normalises_crlf() {
        assert_eq!(normalise_line_endings("a\r\nb\rc"), "a\nb\nc");
    }

    #[test]
    fn removes_invisible() {
        assert_eq!(
            remove_invisible_chars("a\u{200B}b\u{FEFF}c\u{00AD}d"),
            "abcd"
        );
    }

    #[test]
    fn final_newline_added_once() {
        assert_eq!(ensure_final_newline("x"), "x\n");
        assert_eq!(ensure_final_newline("x\n\n\n"), "x\n");
    }

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(clean_markdown(""), "");
        assert_eq!(clean_markdown("   \n\n"), "");
    }

    #[test]
    fn clean_is_stable_under_repetition() {
        let input = "```markdown\r\n# T\r\n\r\nBody\u{200B}\r\n```";
        let once = clean_markdown(input);
        let twice = clean_markdown(&once);
        assert_eq!(once, twice);
    }
}
