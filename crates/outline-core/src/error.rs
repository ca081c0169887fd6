//! Error types for outline-core operations.
//!
//! Extraction itself is infallible by design: absence of structure is an
//! empty result, not an error. The variants here cover the single external
//! failure mode - being unable to obtain the document text at all - which is
//! surfaced by [`crate::load_document`] before any extraction runs.

use thiserror::Error;

/// The error type for outline-core operations.
///
/// Only document loading produces these; every extraction function returns
/// its result directly.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation failed while reading the plan document.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The plan document does not exist at the given path.
    ///
    /// Split out from [`Error::Io`] so callers can offer a useful hint
    /// (wrong working directory, missing `--plan` flag) instead of a bare
    /// OS error string.
    #[error("plan document not found: {0}")]
    NotFound(String),
}

/// Result alias for fallible outline-core operations.
pub type Result<T> = std::result::Result<T, Error>;
