pub(crate) mod browse;
pub(crate) mod config;
pub(crate) mod dump;
pub(crate) mod render;
pub(crate) mod search;

use owo_colors::OwoColorize;
use owo_colors::Stream::{Stderr, Stdout};

use pokedex_core::NormalizedRecord;
use pokedex_fetch::{FetchEvent, FetchOptions, PokeApiClient};
use pokedex_view::CardView;

use crate::cli_types::FetchArgs;
use crate::error::CliError;
use crate::spinner::SpinnerPool;

/// Resolve fetch options from settings, environment, and CLI flags.
pub(crate) fn resolve_options(args: FetchArgs) -> Result<FetchOptions, CliError> {
    let options = FetchOptions::load()?.with_overrides(
        args.language,
        args.limit,
        args.concurrency,
        args.name_fallback,
    )?;
    Ok(options)
}

/// Load the whole catalog, showing one spinner per in-flight fetch.
pub(crate) fn load_catalog(
    options: &FetchOptions,
    quiet: bool,
) -> Result<Vec<NormalizedRecord>, CliError> {
    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::runtime(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(fetch_with_progress(options, quiet))
}

async fn fetch_with_progress(
    options: &FetchOptions,
    quiet: bool,
) -> Result<Vec<NormalizedRecord>, CliError> {
    let client = PokeApiClient::new(options)?;
    let mut pool = SpinnerPool::new(options.concurrency, quiet);
    let mut total = 0usize;
    let mut done = 0usize;

    let (event_tx, event_rx) = tokio::sync::mpsc::unbounded_channel::<FetchEvent>();
    let fetch = pokedex_fetch::fetch_catalog(&client, options, event_tx);

    let result = pokedex_fetch::async_util::run_with_events(fetch, event_rx, |e| match e {
        FetchEvent::FetchingIndex => {
            pool.claim(usize::MAX, "Fetching catalog index...".into());
        }
        FetchEvent::IndexFetched { total: t } => {
            total = t;
            pool.release(usize::MAX);
        }
        FetchEvent::ItemStarted { index, name } => {
            pool.claim(index, format!("[{}/{}] {}", index + 1, total, name));
        }
        FetchEvent::ItemCompleted { index, .. } => {
            done += 1;
            pool.release(index);
        }
        FetchEvent::ItemFailed { index, .. } => {
            pool.release(index);
        }
        FetchEvent::Done => {}
    })
    .await;

    pool.clear_all();

    match result {
        Ok(records) => {
            log::info!(
                "{} Loaded {}/{} entries",
                "\u{2714}".if_supports_color(Stderr, |t| t.green()),
                done,
                total,
            );
            Ok(records)
        }
        Err(e) => {
            let what = if e.is_retrieval() {
                "Could not reach the catalog service"
            } else {
                "The catalog service sent unexpected data"
            };
            log::error!(
                "{} {}; nothing was rendered",
                "\u{2718}".if_supports_color(Stderr, |t| t.red()),
                what,
            );
            Err(e.into())
        }
    }
}

/// Print one line per card to stdout.
pub(crate) fn print_cards<'a>(cards: impl IntoIterator<Item = &'a CardView>) {
    for card in cards {
        println!(
            "{}  {}",
            format!("#{:>3}", card.id_text()).if_supports_color(Stdout, |t| t.dimmed()),
            card.name_text(),
        );
    }
}
