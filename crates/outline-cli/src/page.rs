//! Page layout for the `overview` command.
//!
//! The overview page is driven by a [`PageSpec`]: an ordered list of section
//! labels, the extraction kind for each, and the placeholder to show when a
//! section comes back empty. Fallback content is deliberately a presentation
//! concern - the extraction core never invents content for missing sections.
//!
//! A layout can be loaded from a TOML file:
//!
//! ```toml
//! default_title = "My Project"
//! max_items = 5
//!
//! [[sections]]
//! label = "Vision"
//! kind = "section"
//! fallback = "No vision statement yet."
//!
//! [[sections]]
//! label = "MVP Scope"
//! kind = "numbered"
//! ```
//!
//! Without `--page`, a built-in layout matching the standard project plan
//! shape (Vision, Key Features, Architecture, MVP Scope) is used.

use anyhow::{Context, Result};
use outline_core::ExtractKind;
use serde::Deserialize;
use std::path::Path;

/// Layout of the overview page: which sections to render, how, and what to
/// fall back to when the document does not provide them.
#[derive(Debug, Clone, Deserialize)]
pub struct PageSpec {
    /// Title shown when the document has no level-1 heading.
    #[serde(default = "default_title")]
    pub default_title: String,

    /// Maximum number of bullets or numbered items rendered per section in
    /// text output. JSON output always carries the full extraction.
    #[serde(default = "default_max_items")]
    pub max_items: usize,

    /// Sections to render, in order.
    #[serde(default)]
    pub sections: Vec<SectionSpec>,
}

/// One section of the overview page.
#[derive(Debug, Clone, Deserialize)]
pub struct SectionSpec {
    /// Exact heading label to extract.
    pub label: String,

    /// How to extract the section body.
    #[serde(default = "default_kind")]
    pub kind: ExtractKind,

    /// Placeholder shown when the section is empty or missing. Empty means
    /// render nothing.
    #[serde(default)]
    pub fallback: String,
}

fn default_title() -> String {
    "Education Platform".to_string()
}

const fn default_max_items() -> usize {
    8
}

const fn default_kind() -> ExtractKind {
    ExtractKind::Section
}

impl Default for PageSpec {
    fn default() -> Self {
        Self {
            default_title: default_title(),
            max_items: default_max_items(),
            sections: vec![
                SectionSpec {
                    label: "Vision".to_string(),
                    kind: ExtractKind::Section,
                    fallback:
                        "Adaptive learning with Canvas, YouTube, Gemini 3, and an AI coding coach."
                            .to_string(),
                },
                SectionSpec {
                    label: "Key Features".to_string(),
                    kind: ExtractKind::Section,
                    fallback: String::new(),
                },
                SectionSpec {
                    label: "Architecture".to_string(),
                    kind: ExtractKind::Section,
                    fallback: String::new(),
                },
                SectionSpec {
                    label: "MVP Scope".to_string(),
                    kind: ExtractKind::Numbered,
                    fallback: String::new(),
                },
            ],
        }
    }
}

impl PageSpec {
    /// Load a page layout from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read page layout '{}'", path.display()))?;
        toml::from_str(&raw)
            .with_context(|| format!("invalid page layout '{}'", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn built_in_layout_matches_plan_shape() {
        let page = PageSpec::default();
        assert_eq!(page.max_items, 8);
        let labels: Vec<&str> = page.sections.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(
            labels,
            vec!["Vision", "Key Features", "Architecture", "MVP Scope"]
        );
        assert!(matches!(page.sections[3].kind, ExtractKind::Numbered));
        assert!(!page.sections[0].fallback.is_empty());
    }

    #[test]
    fn layout_parses_from_toml() {
        let page: PageSpec = toml::from_str(
            r#"
            max_items = 3

            [[sections]]
            label = "Goals"

            [[sections]]
            label = "Steps"
            kind = "numbered"
            fallback = "No steps yet."
            "#,
        )
        .unwrap();

        assert_eq!(page.max_items, 3);
        assert_eq!(page.default_title, "Education Platform");
        assert_eq!(page.sections.len(), 2);
        assert!(matches!(page.sections[0].kind, ExtractKind::Section));
        assert!(matches!(page.sections[1].kind, ExtractKind::Numbered));
        assert_eq!(page.sections[1].fallback, "No steps yet.");
    }
}
