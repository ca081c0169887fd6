//! Reading plan documents from disk.
//!
//! The loader is the boundary between the filesystem and the pure extraction
//! functions: it produces the document text, surfacing any read failure
//! before an extraction request is ever made. Encoding is fixed at UTF-8.

use std::path::Path;

use crate::error::{Error, Result};

/// Read the plan document at `path` into a string.
///
/// A missing file maps to [`Error::NotFound`]; any other read failure is
/// returned as [`Error::Io`].
pub fn load_document(path: &Path) -> Result<String> {
    match std::fs::read_to_string(path) {
        Ok(text) => {
            tracing::debug!(path = %path.display(), bytes = text.len(), "loaded plan document");
            Ok(text)
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            Err(Error::NotFound(path.display().to_string()))
        },
        Err(err) => Err(Error::Io(err)),
    }
}
