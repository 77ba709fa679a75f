//! docsite - resolve and check documentation site configs.

mod cli;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use docsite::logger;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    match &cli.command {
        Commands::Resolve { args } => cli::resolve::run_resolve(&cli, args),
        Commands::Routes => cli::routes::run_routes(&cli),
        Commands::Check { args } => cli::check::run_check(&cli, args),
    }
}
