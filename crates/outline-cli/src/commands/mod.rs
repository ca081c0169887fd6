//! Command implementations for the outline CLI.

pub mod list;
pub mod overview;
pub mod section;
pub mod title;

use anyhow::{Context, Result};
use std::path::Path;

/// Load the plan document named by `--plan`, attaching the path to any
/// loader error so the user sees what was looked for.
fn load_plan(path: &Path) -> Result<String> {
    outline_core::load_document(path)
        .with_context(|| format!("failed to load plan document '{}'", path.display()))
}
