use owo_colors::OwoColorize;
use owo_colors::Stream::Stderr;

use pokedex_fetch::{FetchOptions, setting_sources, settings_path};

use crate::error::CliError;

/// Show effective settings and their sources.
pub(crate) fn run_config_show() -> Result<(), CliError> {
    let options = FetchOptions::load()?;

    log::info!("{}", "pokedex settings".if_supports_color(Stderr, |t| t.bold()));
    log::info!("");

    match settings_path() {
        Some(p) if p.exists() => log::info!(
            "  Settings file: {} {}",
            p.display().if_supports_color(Stderr, |t| t.cyan()),
            "(exists)".if_supports_color(Stderr, |t| t.green()),
        ),
        Some(p) => log::info!(
            "  Settings file: {} {}",
            p.display().if_supports_color(Stderr, |t| t.cyan()),
            "(not found)".if_supports_color(Stderr, |t| t.dimmed()),
        ),
        None => log::info!(
            "  Settings file: {}",
            "could not determine path".if_supports_color(Stderr, |t| t.red()),
        ),
    }
    log::info!("");

    for (name, source) in setting_sources() {
        let value = match name {
            "endpoint" => options.endpoint.clone(),
            "limit" => options.limit.to_string(),
            "language" => options.language.clone(),
            "name_policy" => options.name_policy.to_string(),
            "concurrency" => options.concurrency.to_string(),
            "timeout_secs" => options.timeout_secs.to_string(),
            _ => continue,
        };
        log::info!(
            "  {:<14} {} {}",
            name,
            value,
            format!("({})", source).if_supports_color(Stderr, |t| t.dimmed()),
        );
    }

    Ok(())
}

/// Print the settings file path.
pub(crate) fn run_config_path() -> Result<(), CliError> {
    match settings_path() {
        Some(p) => println!("{}", p.display()),
        None => log::error!("Could not determine config directory"),
    }
    Ok(())
}
