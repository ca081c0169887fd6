//! Typed extraction requests and results.

use serde::{Deserialize, Serialize};

/// A section extracted as prose plus an ordered bullet list.
///
/// Both fields default to empty when the section is absent or has no
/// matching lines; consumers decide what to render in that case.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionContent {
    /// Non-bullet lines joined with single spaces, in document order.
    pub prose: String,
    /// Bullet lines with their markers stripped, in document order.
    pub bullets: Vec<String>,
}

impl SectionContent {
    /// Whether the section produced neither prose nor bullets.
    pub fn is_empty(&self) -> bool {
        self.prose.is_empty() && self.bullets.is_empty()
    }
}

/// The kind of result an extraction request asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtractKind {
    /// The document title string.
    Title,
    /// Prose plus an ordered bullet list.
    Section,
    /// A strictly ordered numbered list.
    Numbered,
}

/// One extraction request against a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ExtractRequest {
    /// Extract the document title, with an optional fallback.
    Title {
        /// Returned unchanged when the document has no level-1 heading;
        /// [`crate::DEFAULT_TITLE`] applies when omitted.
        default: Option<String>,
    },
    /// Extract the named section as prose plus bullets.
    Section {
        /// Exact heading label of the section.
        label: String,
    },
    /// Extract the named section as a numbered list.
    Numbered {
        /// Exact heading label of the section.
        label: String,
    },
}

/// The result of one extraction request, tagged by kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Extraction {
    /// Result of a title request.
    Title(String),
    /// Result of a prose-and-bullets request.
    Section(SectionContent),
    /// Result of a numbered-list request.
    Numbered(Vec<String>),
}

/// Run one extraction request against a document.
///
/// Dispatches to [`crate::title`], [`crate::section`], or [`crate::numbered`]
/// and never fails: absent structure yields the empty form of the requested
/// kind.
pub fn extract(doc: &str, request: &ExtractRequest) -> Extraction {
    match request {
        ExtractRequest::Title { default } => Extraction::Title(crate::extract::title(
            doc,
            default.as_deref().unwrap_or(crate::extract::DEFAULT_TITLE),
        )),
        ExtractRequest::Section { label } => {
            Extraction::Section(crate::extract::section(doc, label))
        }
        ExtractRequest::Numbered { label } => {
            Extraction::Numbered(crate::extract::numbered(doc, label))
        }
    }
}

/// Run a batch of extraction requests against one document.
///
/// Results come back in request order. Because extraction is pure, running
/// requests individually or as a batch is equivalent.
pub fn extract_all(doc: &str, requests: &[ExtractRequest]) -> Vec<Extraction> {
    requests.iter().map(|request| extract(doc, request)).collect()
}
