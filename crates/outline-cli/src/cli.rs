//! # CLI Structure and Argument Parsing
//!
//! This module defines the command-line interface for `outline`, a small tool
//! that extracts and renders the title, sections, and lists of a plan
//! document. The CLI is built using `clap` with derive macros for automatic
//! help generation and argument validation.
//!
//! ## Usage Patterns
//!
//! ```bash
//! # Document title
//! outline title
//! outline title --default "My Project"
//!
//! # Section content
//! outline section Vision
//! outline list "MVP Scope"
//!
//! # Full overview page
//! outline overview
//! outline overview --page page.toml
//!
//! # Against a specific document, as JSON
//! outline --plan docs/PLAN.md section Vision --output json
//! ```

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::output::OutputFormat;

/// Main CLI structure for the `outline` command.
///
/// Global options apply to every subcommand: the plan document path, the
/// output format, verbosity flags, and color control.
#[derive(Parser, Clone, Debug)]
#[command(name = "outline")]
#[command(version)]
#[command(about = "outline - extract titles, sections, and lists from plan documents", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to the plan document
    #[arg(
        long,
        global = true,
        value_name = "PATH",
        env = "OUTLINE_PLAN",
        default_value = "PROJECT_PLAN.md"
    )]
    pub plan: PathBuf,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "text")]
    pub output: OutputFormat,

    /// Enable verbose logging output
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// Suppress informational messages (only show errors)
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,

    /// Disable all ANSI colors in output (also respects `NO_COLOR` env)
    #[arg(long = "no-color", global = true)]
    pub no_color: bool,
}

/// Available subcommands, one per extraction kind plus the overview page.
#[derive(Subcommand, Clone, Debug)]
pub enum Commands {
    /// Print the document title
    Title {
        /// Fallback title when the document has no level-1 heading
        #[arg(long, value_name = "TITLE")]
        default: Option<String>,
    },

    /// Print a section's prose and bullet list
    Section {
        /// Exact heading label of the section
        label: String,
    },

    /// Print a section's numbered items
    List {
        /// Exact heading label of the section
        label: String,
    },

    /// Render the configured overview page
    Overview {
        /// Page layout TOML file (defaults to the built-in layout)
        #[arg(long, value_name = "PATH")]
        page: Option<PathBuf>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::parse_from(["outline", "section", "Vision", "--output", "json"]);
        assert!(matches!(cli.output, OutputFormat::Json));
        assert!(matches!(cli.command, Commands::Section { ref label } if label == "Vision"));
    }

    #[test]
    fn plan_path_defaults() {
        let cli = Cli::parse_from(["outline", "title"]);
        assert_eq!(cli.plan, PathBuf::from("PROJECT_PLAN.md"));
    }
}
