//! Section command implementation: prose plus bullets for one section.

use anyhow::Result;
use colored::Colorize;
use outline_core::SectionContent;

use crate::cli::Cli;
use crate::output::OutputFormat;

/// Execute the section command for the given heading label.
pub fn execute(cli: &Cli, label: &str) -> Result<()> {
    let doc = super::load_plan(&cli.plan)?;
    let content = outline_core::section(&doc, label);

    match cli.output {
        OutputFormat::Text => display_section(&content),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&content)?),
    }

    Ok(())
}

fn display_section(content: &SectionContent) {
    if content.is_empty() {
        println!("{}", "(empty section)".bright_black());
        return;
    }

    if !content.prose.is_empty() {
        println!("{}", content.prose);
    }
    if !content.prose.is_empty() && !content.bullets.is_empty() {
        println!();
    }
    for bullet in &content.bullets {
        println!("  {} {bullet}", "-".cyan());
    }
}
