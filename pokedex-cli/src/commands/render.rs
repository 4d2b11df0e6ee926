use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stderr;

use pokedex_fetch::FetchOptions;
use pokedex_view::{CatalogView, HtmlDocument};

use crate::commands::load_catalog;
use crate::error::CliError;

const PAGE_TITLE: &str = "Pokédex";

/// Run the render command.
pub(crate) fn run_render(
    options: &FetchOptions,
    output: &Path,
    search: Option<&str>,
    quiet: bool,
) -> Result<(), CliError> {
    let records = load_catalog(options, quiet)?;

    let mut view = CatalogView::new(HtmlDocument::new(PAGE_TITLE));
    view.render(&records);
    if let Some(term) = search {
        let visible = view.commit_search(term);
        log::info!("Search \"{}\": {} of {} cards visible", term, visible, records.len());
    }

    view.surface().write_to(output)?;
    log::info!(
        "{} Wrote {} cards to {}",
        "\u{2714}".if_supports_color(Stderr, |t| t.green()),
        view.cards().len(),
        output.display().if_supports_color(Stderr, |t| t.cyan()),
    );
    Ok(())
}
