use std::io::{self, Write};

use pokedex_fetch::FetchOptions;

use crate::commands::load_catalog;
use crate::error::CliError;

/// Run the dump command: print normalized records as pretty JSON.
pub(crate) fn run_dump(options: &FetchOptions, quiet: bool) -> Result<(), CliError> {
    let records = load_catalog(options, quiet)?;

    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, &records)?;
    writeln!(stdout)?;
    Ok(())
}
