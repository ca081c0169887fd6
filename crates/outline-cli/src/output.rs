//! Output format selection.
//!
//! Every subcommand supports human-readable text (default) and JSON for
//! programmatic consumption. Format selection happens at the CLI parsing
//! level via clap's `ValueEnum`, so format handling stays type-safe
//! throughout the command implementations.

/// Output format options supported by the CLI.
#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// Pretty text output (default)
    Text,
    /// Pretty-printed JSON
    Json,
}
