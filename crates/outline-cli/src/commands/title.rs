//! Title command implementation.

use anyhow::Result;
use colored::Colorize;

use crate::cli::Cli;
use crate::output::OutputFormat;

/// Execute the title command: print the document title, or the fallback when
/// the document has no level-1 heading.
pub fn execute(cli: &Cli, default: Option<&str>) -> Result<()> {
    let doc = super::load_plan(&cli.plan)?;
    let title = outline_core::title(&doc, default.unwrap_or(outline_core::DEFAULT_TITLE));

    match cli.output {
        OutputFormat::Text => println!("{}", title.bold()),
        OutputFormat::Json => println!("{}", serde_json::json!({ "title": title })),
    }

    Ok(())
}
