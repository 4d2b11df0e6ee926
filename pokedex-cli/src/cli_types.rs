//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "pokedex")]
#[command(about = "Fetch, render, and search the first-generation Pokédex", long_about = None)]
pub(crate) struct Cli {
    /// Only show warnings and errors (suppress normal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Write log output to a file as well (ANSI codes stripped)
    #[arg(long, global = true)]
    pub logfile: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Arguments that shape a catalog load.
#[derive(Args, Clone, Debug, Default)]
pub(crate) struct FetchArgs {
    /// Language code for localized names (e.g., fr, de, ja)
    #[arg(long)]
    pub language: Option<String>,

    /// Number of catalog entries to fetch
    #[arg(short, long)]
    pub limit: Option<usize>,

    /// Maximum number of concurrent item fetches
    #[arg(short = 'j', long)]
    pub concurrency: Option<usize>,

    /// Use the canonical name when no localized name exists
    #[arg(long)]
    pub name_fallback: bool,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Fetch the catalog and write it as an HTML page of cards
    Render {
        #[command(flatten)]
        fetch: FetchArgs,

        /// Output file
        #[arg(short, long, default_value = "pokedex.html")]
        output: PathBuf,

        /// Apply a search before writing (hidden cards stay in the page)
        #[arg(long)]
        search: Option<String>,
    },

    /// Fetch the catalog and list the cards matching a name or number
    Search {
        #[command(flatten)]
        fetch: FetchArgs,

        /// Name fragment or exact number
        term: String,
    },

    /// Fetch the catalog, then filter it interactively (one search per line)
    Browse {
        #[command(flatten)]
        fetch: FetchArgs,
    },

    /// Fetch the catalog and print the normalized records as JSON
    Dump {
        #[command(flatten)]
        fetch: FetchArgs,
    },

    /// Show settings and where they come from
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Show effective settings and their sources
    Show,

    /// Print the settings file path
    Path,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_search_with_fetch_flags() {
        let cli = Cli::try_parse_from([
            "pokedex",
            "search",
            "--language",
            "de",
            "-j",
            "4",
            "--name-fallback",
            "pika",
        ])
        .unwrap();
        match cli.command {
            Commands::Search { fetch, term } => {
                assert_eq!(term, "pika");
                assert_eq!(fetch.language.as_deref(), Some("de"));
                assert_eq!(fetch.concurrency, Some(4));
                assert!(fetch.name_fallback);
                assert_eq!(fetch.limit, None);
            }
            _ => panic!("expected search command"),
        }
    }

    #[test]
    fn test_render_defaults_output() {
        let cli = Cli::try_parse_from(["pokedex", "-q", "render"]).unwrap();
        assert!(cli.quiet);
        match cli.command {
            Commands::Render { output, search, .. } => {
                assert_eq!(output, PathBuf::from("pokedex.html"));
                assert!(search.is_none());
            }
            _ => panic!("expected render command"),
        }
    }
}
