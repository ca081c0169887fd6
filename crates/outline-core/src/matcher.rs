//! Literal heading matchers.
//!
//! Heading labels come from callers and may contain characters that are
//! meaningful to the regex engine (`C++ (v2)`, `Q&A [draft]`, ...). Every
//! label is passed through [`regex::escape`] before a pattern is built, so a
//! label is only ever matched as literal text on a full line. Building a
//! matcher always succeeds; a label with zero matches is a normal outcome.

use once_cell::sync::Lazy;
use regex::Regex;

/// Matches the start of any level-2 heading line, regardless of label.
/// Used to find where a section body ends.
pub(crate) static NEXT_SECTION: Lazy<Regex> = Lazy::new(|| {
    #[allow(clippy::expect_used)]
    let pattern = Regex::new(r"(?m)^## ").expect("literal pattern compiles");
    pattern
});

/// Matches the first level-1 heading line and captures its label.
pub(crate) static TITLE_LINE: Lazy<Regex> = Lazy::new(|| {
    #[allow(clippy::expect_used)]
    let pattern = Regex::new(r"(?m)^# (.*)$").expect("literal pattern compiles");
    pattern
});

/// A full-line matcher for one specific heading.
///
/// Recognizes a line consisting of the level marker, one space, the label,
/// and only trailing whitespace. The match is case-sensitive and anchored to
/// both ends of the line, so a label that is a strict prefix of another
/// heading's label never matches it.
#[derive(Debug, Clone)]
pub struct HeadingMatcher {
    pattern: Regex,
}

impl HeadingMatcher {
    /// Build a matcher for a level-2 section heading with the given label.
    pub fn section(label: &str) -> Self {
        Self::with_marker("##", label)
    }

    /// Build a matcher for the level-1 title heading with the given label.
    pub fn title(label: &str) -> Self {
        Self::with_marker("#", label)
    }

    fn with_marker(marker: &str, label: &str) -> Self {
        // regex::escape guarantees a valid literal, so compilation cannot
        // fail for any label.
        let source = format!(r"(?m)^{marker} {}[ \t\r]*$", regex::escape(label));
        #[allow(clippy::expect_used)]
        let pattern = Regex::new(&source).expect("escaped label compiles");
        Self { pattern }
    }

    /// Byte offset one past the end of the first matching heading line,
    /// or `None` if the heading does not occur. When labels repeat, the
    /// earliest occurrence in document order wins.
    pub fn find_end(&self, doc: &str) -> Option<usize> {
        self.pattern.find(doc).map(|m| m.end())
    }

    /// Whether the document contains this heading at all.
    pub fn is_match(&self, doc: &str) -> bool {
        self.pattern.is_match(doc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_exact_line_only() {
        let m = HeadingMatcher::section("Key Features");
        assert!(m.is_match("## Key Features\nbody\n"));
        assert!(m.is_match("intro\n## Key Features\n"));
        assert!(!m.is_match("## Key Features Extended\n"));
        assert!(!m.is_match("### Key Features\n"));
        assert!(!m.is_match("text mentioning ## Key Features inline\n"));
    }

    #[test]
    fn tolerates_trailing_whitespace() {
        let m = HeadingMatcher::section("Vision");
        assert!(m.is_match("## Vision   \nbody\n"));
        assert!(m.is_match("## Vision\t\r\nbody\n"));
        assert!(!m.is_match("##  Vision\n"));
    }

    #[test]
    fn label_is_literal_not_a_pattern() {
        let m = HeadingMatcher::section("C++ (v2) [draft].*");
        assert!(m.is_match("## C++ (v2) [draft].*\n"));
        assert!(!m.is_match("## C++ (v2) draft-anything\n"));
        assert!(!m.is_match("## C++ (v2) [draft]xx\n"));
    }

    #[test]
    fn title_matcher_requires_level_one_marker() {
        let m = HeadingMatcher::title("My Plan");
        assert!(m.is_match("# My Plan\n"));
        assert!(!m.is_match("## My Plan\n"));
    }

    #[test]
    fn case_sensitive() {
        let m = HeadingMatcher::section("Vision");
        assert!(!m.is_match("## vision\n"));
        assert!(!m.is_match("## VISION\n"));
    }

    #[test]
    fn first_occurrence_wins() {
        let doc = "## Dup\nfirst\n## Dup\nsecond\n";
        let end = HeadingMatcher::section("Dup").find_end(doc).unwrap();
        assert_eq!(&doc[end..end + 6], "\nfirst");
    }

    #[test]
    fn construction_never_fails_for_hostile_labels() {
        for label in ["(", ")", "[", "^$", "a{2,", r"\", "(?P<x>)", ""] {
            let m = HeadingMatcher::section(label);
            let line = format!("## {label}\n");
            assert!(m.is_match(&line), "label {label:?} should match itself");
        }
    }
}
