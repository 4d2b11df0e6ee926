use std::io::{self, BufRead, Write};

use owo_colors::OwoColorize;
use owo_colors::Stream::{Stderr, Stdout};

use pokedex_fetch::FetchOptions;
use pokedex_view::{CatalogView, MemorySurface, Surface};

use crate::commands::{load_catalog, print_cards};
use crate::error::CliError;

/// Run the browse command: each stdin line is one committed search.
pub(crate) fn run_browse(options: &FetchOptions, quiet: bool) -> Result<(), CliError> {
    let records = load_catalog(options, quiet)?;

    let mut view = CatalogView::new(MemorySurface::new());
    view.render(&records);
    print_cards(view.cards());

    log::info!(
        "{}",
        "Type a name or number and press Enter (empty line shows all, Ctrl-D quits)"
            .if_supports_color(Stderr, |t| t.dimmed()),
    );

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        prompt()?;
        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        browse_commit(&mut view, &line);
    }

    Ok(())
}

fn browse_commit<S: Surface>(view: &mut CatalogView<S>, line: &str) {
    let visible = view.commit_search(line);
    if visible == 0 {
        println!("{}", "(no match)".if_supports_color(Stdout, |t| t.dimmed()));
    } else {
        print_cards(view.visible_cards());
    }
}

fn prompt() -> io::Result<()> {
    let mut stdout = io::stdout();
    write!(stdout, "{} ", ">".if_supports_color(Stdout, |t| t.cyan()))?;
    stdout.flush()
}
