use owo_colors::OwoColorize;
use owo_colors::Stream::Stderr;

use pokedex_fetch::FetchOptions;
use pokedex_view::{CatalogView, MemorySurface};

use crate::commands::{load_catalog, print_cards};
use crate::error::CliError;

/// Run the search command.
pub(crate) fn run_search(options: &FetchOptions, term: &str, quiet: bool) -> Result<(), CliError> {
    let records = load_catalog(options, quiet)?;

    let mut view = CatalogView::new(MemorySurface::new());
    view.render(&records);
    let visible = view.commit_search(term);

    if visible == 0 {
        log::info!(
            "{}",
            format!("No entry matches \"{}\"", term.trim()).if_supports_color(Stderr, |t| t.dimmed()),
        );
        return Ok(());
    }

    print_cards(view.visible_cards());
    Ok(())
}
