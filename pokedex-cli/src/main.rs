//! pokedex CLI
//!
//! Fetches the first page of the PokeAPI catalog, renders it as cards, and
//! filters the cards by name or number.

mod cli_types;
mod commands;
mod error;
mod logging;
mod spinner;

use std::process::ExitCode;

use clap::Parser;

use cli_types::{Cli, Commands, ConfigAction};
use error::CliError;

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.quiet, cli.verbose, cli.logfile.as_deref()) {
        eprintln!("Failed to open log file: {}", e);
        return ExitCode::FAILURE;
    }

    match run(cli.command, cli.quiet) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(command: Commands, quiet: bool) -> Result<(), CliError> {
    match command {
        Commands::Render {
            fetch,
            output,
            search,
        } => {
            let options = commands::resolve_options(fetch)?;
            commands::render::run_render(&options, &output, search.as_deref(), quiet)
        }
        Commands::Search { fetch, term } => {
            let options = commands::resolve_options(fetch)?;
            commands::search::run_search(&options, &term, quiet)
        }
        Commands::Browse { fetch } => {
            let options = commands::resolve_options(fetch)?;
            commands::browse::run_browse(&options, quiet)
        }
        Commands::Dump { fetch } => {
            let options = commands::resolve_options(fetch)?;
            commands::dump::run_dump(&options, quiet)
        }
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::run_config_show(),
            ConfigAction::Path => commands::config::run_config_path(),
        },
    }
}
