//! # outline-core
//!
//! Core functionality for outline - a best-effort extractor for plan documents
//! organized as markdown-style headings.
//!
//! This crate recovers a document title and named section contents (prose plus
//! bullet lists, or strictly ordered numbered lists) from a plain-text document
//! with one level-1 heading and flat level-2 sections. It is deliberately not a
//! markdown parser: headings are matched as literal full lines, classification
//! is line-local, and nothing deeper than level 2 is modeled.
//!
//! ## Architecture
//!
//! The crate is organized around a few small components:
//!
//! - **Matching**: literal heading matchers that treat labels as plain text,
//!   never as patterns
//! - **Extraction**: title, section body, prose+bullets, and numbered-list
//!   passes over the raw document text
//! - **Types**: typed extraction requests and results with serde support
//! - **Loading**: reading the plan document from disk, the only fallible step
//!
//! ## Quick Start
//!
//! ```rust
//! use outline_core::{section, title, DEFAULT_TITLE};
//!
//! let doc = "# My Plan\n\n## Vision\nShip it.\n- fast\n- small\n";
//!
//! assert_eq!(title(doc, DEFAULT_TITLE), "My Plan");
//!
//! let vision = section(doc, "Vision");
//! assert_eq!(vision.prose, "Ship it.");
//! assert_eq!(vision.bullets, vec!["fast", "small"]);
//! ```
//!
//! ## Error Handling
//!
//! Extraction never fails: a missing heading, an empty section, or malformed
//! numbering yields the empty form of the requested result (`""` / `[]`).
//! The only fallible operation is [`load_document`], which returns
//! [`Result<String, Error>`](Result) when the plan file cannot be read.
//!
//! ## Concurrency
//!
//! Every extraction function is a pure, synchronous function of its text
//! input. Calls share no state and never mutate the document, so concurrent
//! use from any number of callers requires no synchronization.

/// Error types and result alias for document loading
pub mod error;
/// Title, section, and list extraction passes
pub mod extract;
/// Reading plan documents from disk
pub mod loader;
/// Literal heading matchers
pub mod matcher;
/// Typed extraction requests and results
pub mod types;

pub use error::{Error, Result};
pub use extract::{numbered, section, section_body, title, DEFAULT_TITLE};
pub use loader::load_document;
pub use matcher::HeadingMatcher;
pub use types::{extract, extract_all, ExtractKind, ExtractRequest, Extraction, SectionContent};
