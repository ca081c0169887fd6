//! List command implementation: the numbered items of one section.

use anyhow::Result;
use colored::Colorize;

use crate::cli::Cli;
use crate::output::OutputFormat;

/// Execute the list command for the given heading label.
///
/// Items are renumbered from 1 for display; the source document's numbering
/// only selects lines, it is not preserved.
pub fn execute(cli: &Cli, label: &str) -> Result<()> {
    let doc = super::load_plan(&cli.plan)?;
    let items = outline_core::numbered(&doc, label);

    match cli.output {
        OutputFormat::Text => display_items(&items),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&items)?),
    }

    Ok(())
}

fn display_items(items: &[String]) {
    if items.is_empty() {
        println!("{}", "(no numbered items)".bright_black());
        return;
    }

    for (index, item) in items.iter().enumerate() {
        let marker = format!("{}.", index + 1);
        println!("  {} {item}", marker.cyan());
    }
}
