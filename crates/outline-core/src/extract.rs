//! Title, section, and list extraction passes.
//!
//! All functions here are pure and total: they take the raw document text,
//! re-derive everything on every call, and represent missing structure as an
//! empty result. Classification is strictly line-local; multi-line items and
//! nested headings are out of scope.

use crate::matcher::{HeadingMatcher, NEXT_SECTION, TITLE_LINE};
use crate::types::SectionContent;

/// Fallback title for callers that have no better default of their own.
pub const DEFAULT_TITLE: &str = "Untitled Document";

/// Extract the document title: the label of the first level-1 heading line.
///
/// Returns `default` unchanged when the document has no level-1 heading.
///
/// ```rust
/// use outline_core::title;
///
/// assert_eq!(title("# Roadmap\n## A\n", "fallback"), "Roadmap");
/// assert_eq!(title("no headings here", "fallback"), "fallback");
/// ```
pub fn title(doc: &str, default: &str) -> String {
    TITLE_LINE
        .captures(doc)
        .map_or_else(|| default.to_string(), |c| c[1].trim().to_string())
}

/// Locate the raw body of the first section with the given label.
///
/// The body spans from the end of the matching `## <label>` heading line to
/// the start of the next level-2 heading line (any label), or to the end of
/// the document. Returns an empty slice when the label is absent. The slice
/// borrows from `doc`; nothing is copied.
pub fn section_body<'a>(doc: &'a str, label: &str) -> &'a str {
    let Some(start) = HeadingMatcher::section(label).find_end(doc) else {
        tracing::debug!(label, "section heading not found");
        return "";
    };
    let rest = &doc[start..];
    NEXT_SECTION
        .find(rest)
        .map_or(rest, |next| &rest[..next.start()])
}

/// Extract a section as prose plus an ordered bullet list.
///
/// Every non-blank line in the body is either a bullet (leading `- ` or
/// `* `, marker stripped) or prose. Prose lines are joined with single
/// spaces, in order. An absent or empty section yields the empty value.
/// Numbered lines receive no special treatment on this path.
pub fn section(doc: &str, label: &str) -> SectionContent {
    let mut content = SectionContent::default();
    for line in body_lines(section_body(doc, label)) {
        if let Some(text) = bullet_text(line) {
            content.bullets.push(text.to_string());
        } else {
            if !content.prose.is_empty() {
                content.prose.push(' ');
            }
            content.prose.push_str(line);
        }
    }
    content
}

/// Extract a section as a strictly ordered numbered list.
///
/// Only lines of the form `<digits>. <text>` are kept, in order, with the
/// numeric prefix stripped. Non-numbered lines in the same body are dropped
/// entirely; they do not become prose. An absent section, or one with no
/// numbered lines, yields an empty list.
pub fn numbered(doc: &str, label: &str) -> Vec<String> {
    body_lines(section_body(doc, label))
        .filter_map(numbered_text)
        .map(str::to_string)
        .collect()
}

/// Trimmed, non-blank lines of a section body, in document order.
fn body_lines(body: &str) -> impl Iterator<Item = &str> {
    body.lines().map(str::trim).filter(|line| !line.is_empty())
}

/// Bullet text when the line starts with a single `-` or `*` marker followed
/// by at least one space.
fn bullet_text(line: &str) -> Option<&str> {
    line.strip_prefix("- ")
        .or_else(|| line.strip_prefix("* "))
        .map(str::trim_start)
}

/// Item text when the line starts with one or more ASCII digits, a literal
/// dot, and at least one space.
fn numbered_text(line: &str) -> Option<&str> {
    let digits = line.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    line[digits..]
        .strip_prefix('.')
        .and_then(|rest| rest.strip_prefix(' '))
        .map(str::trim_start)
}
