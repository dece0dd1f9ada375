//! Display view-model: the three presentation panels derived from a result.
//!
//! A [`PanelSet`] is computed from the current [`GenerationResult`] on every
//! render pass — it is a projection, not a second store. Sections whose
//! source field was absent carry an empty body and display as nothing;
//! missing data degrades to "nothing shown", never to an error.

use crate::model::GenerationResult;
use crate::render;
use serde::Serialize;

/// One labelled block of text inside a panel.
#[derive(Debug, Clone, Serialize)]
pub struct Section {
    pub label: &'static str,
    pub body: String,
}

impl Section {
    /// Whether there is anything to show.
    pub fn is_empty(&self) -> bool {
        self.body.trim().is_empty()
    }
}

/// A titled panel of labelled sections.
#[derive(Debug, Clone, Serialize)]
pub struct Panel {
    pub title: &'static str,
    pub blurb: &'static str,
    pub sections: Vec<Section>,
}

/// The documentation panel: raw markdown plus its rendered preview.
///
/// `markdown` is byte-verbatim what the service returned, for copy/export;
/// `preview_html` is the sanitised, rendered fragment.
#[derive(Debug, Clone, Serialize)]
pub struct DocumentationPanel {
    pub title: &'static str,
    pub blurb: &'static str,
    pub markdown: String,
    pub preview_html: String,
}

/// All three panels, derived from one result.
#[derive(Debug, Clone, Serialize)]
pub struct PanelSet {
    pub analysis: Panel,
    pub architecture: Panel,
    pub documentation: DocumentationPanel,
}

impl PanelSet {
    /// Project a result into its display panels.
    pub fn from_result(result: &GenerationResult) -> Self {
        let a = &result.analysis;
        let analysis = Panel {
            title: "Analysis",
            blurb: "Overview of code purpose and key details.",
            sections: vec![
                Section { label: "Purpose", body: a.purpose.clone() },
                Section { label: "Key Components", body: a.key_components.clone() },
                Section { label: "Dependencies", body: a.dependencies.clone() },
                Section { label: "Configuration", body: a.config.clone() },
            ],
        };

        let arch = &result.architecture;
        let architecture = Panel {
            title: "Architecture",
            blurb: "Design patterns, components, and data flow.",
            sections: vec![
                Section { label: "Pattern", body: arch.pattern.clone() },
                Section { label: "Components", body: arch.components.clone() },
                Section { label: "Data Flow", body: arch.data_flow.clone() },
                Section { label: "Design", body: arch.design.clone() },
            ],
        };

        let documentation = DocumentationPanel {
            title: "Documentation",
            blurb: "Generated markdown documentation.",
            markdown: result.documentation.markdown.clone(),
            preview_html: render::html::body_html(&result.documentation.markdown),
        };

        Self {
            analysis,
            architecture,
            documentation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Analysis, Architecture, Documentation};

    fn sample() -> GenerationResult {
        GenerationResult {
            analysis: Analysis {
                purpose: "A function stub".into(),
                ..Analysis::default()
            },
            architecture: Architecture {
                pattern: "Procedural".into(),
                ..Architecture::default()
            },
            documentation: Documentation {
                markdown: "# Title\n\nBody".into(),
            },
        }
    }

    #[test]
    fn panels_show_only_corresponding_fields() {
        let set = PanelSet::from_result(&sample());

        assert_eq!(set.analysis.sections[0].body, "A function stub");
        assert!(set.analysis.sections[1].is_empty());
        assert!(set.analysis.sections[2].is_empty());
        assert!(set.analysis.sections[3].is_empty());

        assert_eq!(set.architecture.sections[0].body, "Procedural");
        assert!(set.architecture.sections[1].is_empty());
    }

    #[test]
    fn preview_renders_heading_and_paragraph() {
        let set = PanelSet::from_result(&sample());
        assert!(set.documentation.preview_html.contains("<h1>Title</h1>"));
        assert!(set.documentation.preview_html.contains("<p>Body</p>"));
    }

    #[test]
    fn raw_markdown_is_verbatim() {
        let mut result = sample();
        result.documentation.markdown = "```markdown\n# Fenced\n```".into();
        let set = PanelSet::from_result(&result);
        // The copyable markdown keeps the fence; only the preview strips it.
        assert_eq!(set.documentation.markdown, "```markdown\n# Fenced\n```");
        assert!(set.documentation.preview_html.contains("<h1>Fenced</h1>"));
    }

    #[test]
    fn empty_result_gives_empty_sections() {
        let set = PanelSet::from_result(&GenerationResult::default());
        assert!(set.analysis.sections.iter().all(Section::is_empty));
        assert!(set.architecture.sections.iter().all(Section::is_empty));
        assert!(set.documentation.markdown.is_empty());
    }
}
