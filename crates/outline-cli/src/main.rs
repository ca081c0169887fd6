//! outline CLI - render project plan documents in the terminal
//!
//! This is the main entry point for the outline command-line interface.
//! Command implementations are organized in separate modules for better
//! maintainability and single responsibility.

use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;
mod logging;
mod output;
mod page;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::initialize(&cli)?;

    execute_command(&cli)
}

fn execute_command(cli: &Cli) -> Result<()> {
    match &cli.command {
        Commands::Title { default } => commands::title::execute(cli, default.as_deref()),

        Commands::Section { label } => commands::section::execute(cli, label),

        Commands::List { label } => commands::list::execute(cli, label),

        Commands::Overview { page } => commands::overview::execute(cli, page.as_deref()),
    }
}
