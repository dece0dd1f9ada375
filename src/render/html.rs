//! Markdown → styled HTML document.
//!
//! Conversion is pulldown-cmark with GFM tables and strikethrough enabled;
//! the resulting fragment is wrapped in a fixed presentational template so
//! every exported document shares the same typography no matter what the
//! prompt was. The template is self-contained (inline CSS, no external
//! resources) and contains no scripts; nothing in it is ever executed.
//!
//! Empty markdown produces a syntactically valid document with an empty
//! container — rendering an empty documentation field is not an error.

use pulldown_cmark::{html, Options, Parser};

use super::sanitise;

/// Inline stylesheet applied to every exported document.
///
/// Dark slate headings with underline rules, light-grey code backgrounds,
/// italic block quotes, collapsed table borders, and a centred 800px column.
const DOCUMENT_CSS: &str = r#"
body {
    font-family: 'Arial', 'Helvetica', sans-serif;
    line-height: 1.6;
    margin: 40px;
    color: #333;
}
h1 {
    color: #2c3e50;
    border-bottom: 2px solid #2c3e50;
    padding-bottom: 10px;
}
h2 {
    color: #34495e;
    border-bottom: 1px solid #bdc3c7;
    padding-bottom: 5px;
}
h3 {
    color: #46627f;
}
code {
    background-color: #f8f9fa;
    padding: 2px 6px;
    border-radius: 3px;
    border: 1px solid #e9ecef;
    font-family: 'Courier New', monospace;
    color: #e83e8c;
}
pre {
    background-color: #f8f9fa;
    padding: 15px;
    border-radius: 5px;
    border: 1px solid #e9ecef;
    overflow-x: auto;
    font-family: 'Courier New', monospace;
    line-height: 1.4;
}
blockquote {
    border-left: 4px solid #2c3e50;
    padding-left: 15px;
    margin-left: 0;
    color: #7f8c8d;
    font-style: italic;
}
table {
    border-collapse: collapse;
    width: 100%;
    margin: 20px 0;
}
th, td {
    border: 1px solid #ddd;
    padding: 8px 12px;
    text-align: left;
}
th {
    background-color: #f2f2f2;
}
.container {
    max-width: 800px;
    margin: 0 auto;
}
"#;

/// Convert markdown to an HTML fragment (no template wrapper).
///
/// Used for the documentation panel preview and as the body of
/// [`to_html`]. Deterministic: identical input yields identical output.
pub fn body_html(markdown: &str) -> String {
    let cleaned = sanitise::clean_markdown(markdown);

    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let parser = Parser::new_ext(&cleaned, options);
    let mut out = String::with_capacity(cleaned.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}

/// Convert markdown to a complete styled HTML document.
pub fn to_html(markdown: &str) -> String {
    let body = body_html(markdown);
    format!(
        "<html>\n<head>\n<meta charset=\"utf-8\">\n<style>{DOCUMENT_CSS}</style>\n</head>\n\
         <body>\n<div class=\"container\">\n{body}</div>\n</body>\n</html>\n"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heading_and_paragraph() {
        let html = body_html("# Title\n\nBody");
        assert!(html.contains("<h1>Title</h1>"));
        assert!(html.contains("<p>Body</p>"));
    }

    #[test]
    fn tables_are_enabled() {
        let html = body_html("| A | B |\n| --- | --- |\n| 1 | 2 |");
        assert!(html.contains("<table>"));
        assert!(html.contains("<th>A</th>"));
    }

    #[test]
    fn code_blocks_and_spans() {
        let html = body_html("Use `f()`:\n\n```\nlet x = 1;\n```");
        assert!(html.contains("<code>f()</code>"));
        assert!(html.contains("<pre><code>"));
    }

    #[test]
    fn block_quotes() {
        let html = body_html("> quoted");
        assert!(html.contains("<blockquote>"));
    }

    #[test]
    fn empty_markdown_yields_valid_empty_document() {
        let doc = to_html("");
        assert!(!doc.is_empty());
        assert!(doc.contains("<div class=\"container\">"));
        assert!(doc.ends_with("</html>\n"));
        // Content region is empty.
        assert!(doc.contains("<div class=\"container\">\n</div>"));
    }

    #[test]
    fn document_is_byte_stable() {
        let m = "# T\n\n- a\n- b\n";
        assert_eq!(to_html(m), to_html(m));
    }

    #[test]
    fn template_styles_are_embedded() {
        let doc = to_html("# T");
        assert!(doc.contains("#2c3e50"));
        assert!(doc.contains("border-collapse: collapse"));
        assert!(doc.contains("max-width: 800px"));
    }

    #[test]
    fn outer_fence_is_cleaned_before_rendering() {
        let html = body_html("```markdown\n# Inside\n```");
        assert!(html.contains("<h1>Inside</h1>"));
        assert!(!html.contains("<pre>"));
    }
}
