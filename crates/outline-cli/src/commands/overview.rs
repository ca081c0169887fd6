//! Overview command implementation: render the whole configured page.
//!
//! Mirrors what a landing page built on the extractor would show: the
//! document title, then every configured section with its extraction kind,
//! applying per-section fallback placeholders when the document comes up
//! empty and capping displayed items in text output.

use anyhow::Result;
use colored::Colorize;
use outline_core::{extract, ExtractKind, ExtractRequest, Extraction};
use std::path::Path;

use crate::cli::Cli;
use crate::output::OutputFormat;
use crate::page::{PageSpec, SectionSpec};

/// Execute the overview command with the built-in page layout, or the one
/// loaded from `--page`.
pub fn execute(cli: &Cli, page_path: Option<&Path>) -> Result<()> {
    let page = match page_path {
        Some(path) => PageSpec::load(path)?,
        None => PageSpec::default(),
    };

    let doc = super::load_plan(&cli.plan)?;
    let title = outline_core::title(&doc, &page.default_title);
    let results = run_requests(&doc, &page);

    match cli.output {
        OutputFormat::Text => display_page(&title, &page, &results),
        OutputFormat::Json => print_json(&title, &page, &results)?,
    }

    Ok(())
}

/// Run one extraction request per configured section, in page order.
fn run_requests<'a>(doc: &str, page: &'a PageSpec) -> Vec<(&'a SectionSpec, Extraction)> {
    page.sections
        .iter()
        .map(|spec| {
            let request = match spec.kind {
                ExtractKind::Title => ExtractRequest::Title {
                    default: Some(spec.fallback.clone()),
                },
                ExtractKind::Section => ExtractRequest::Section {
                    label: spec.label.clone(),
                },
                ExtractKind::Numbered => ExtractRequest::Numbered {
                    label: spec.label.clone(),
                },
            };
            (spec, extract(doc, &request))
        })
        .collect()
}

fn display_page(title: &str, page: &PageSpec, results: &[(&SectionSpec, Extraction)]) {
    println!("{}", title.bold().underline());

    for (spec, extraction) in results {
        println!();
        println!("{}", spec.label.bold());

        match extraction {
            Extraction::Title(text) => println!("  {text}"),
            Extraction::Section(content) => {
                if content.is_empty() {
                    display_fallback(spec);
                    continue;
                }
                if !content.prose.is_empty() {
                    println!("  {}", content.prose);
                }
                for bullet in content.bullets.iter().take(page.max_items) {
                    println!("  {} {bullet}", "-".cyan());
                }
            },
            Extraction::Numbered(items) => {
                if items.is_empty() {
                    display_fallback(spec);
                    continue;
                }
                for (index, item) in items.iter().take(page.max_items).enumerate() {
                    let marker = format!("{}.", index + 1);
                    println!("  {} {item}", marker.cyan());
                }
            },
        }
    }
}

fn display_fallback(spec: &SectionSpec) {
    if !spec.fallback.is_empty() {
        println!("  {}", spec.fallback.bright_black());
    }
}

/// JSON output carries the raw extraction per section; fallbacks and item
/// caps are text-rendering concerns and are not applied here.
fn print_json(title: &str, page: &PageSpec, results: &[(&SectionSpec, Extraction)]) -> Result<()> {
    let sections: Vec<serde_json::Value> = results
        .iter()
        .map(|(spec, extraction)| {
            serde_json::json!({
                "label": spec.label,
                "kind": spec.kind,
                "content": extraction,
            })
        })
        .collect();

    let value = serde_json::json!({
        "title": title,
        "max_items": page.max_items,
        "sections": sections,
    });
    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}
