//! Fetch settings: endpoint, page size, language, and concurrency.
//!
//! Values resolve through a priority chain:
//!
//! 1. Explicit overrides (CLI flags)
//! 2. Environment variables (`POKEDEX_*`)
//! 3. `[fetch]` table in `~/.config/pokedex-cards/settings.toml`
//! 4. Compiled defaults

use std::path::PathBuf;

use pokedex_core::NamePolicy;
use serde::Deserialize;

use crate::error::FetchError;

pub const DEFAULT_ENDPOINT: &str = "https://pokeapi.co/api/v2/pokemon";
pub const DEFAULT_LIMIT: usize = 151;
pub const DEFAULT_LANGUAGE: &str = "fr";
pub const DEFAULT_CONCURRENCY: usize = 16;
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

const ENV_ENDPOINT: &str = "POKEDEX_ENDPOINT";
const ENV_LANGUAGE: &str = "POKEDEX_LANGUAGE";
const ENV_CONCURRENCY: &str = "POKEDEX_CONCURRENCY";

/// Resolved options for one catalog load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchOptions {
    /// Index endpoint, without query string
    pub endpoint: String,
    /// Number of index entries requested (`?limit=`)
    pub limit: usize,
    /// Language code used for the localized name
    pub language: String,
    /// Behaviour when the language has no name entry
    pub name_policy: NamePolicy,
    /// Maximum number of item fetches in flight
    pub concurrency: usize,
    /// Per-request timeout
    pub timeout_secs: u64,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            limit: DEFAULT_LIMIT,
            language: DEFAULT_LANGUAGE.to_string(),
            name_policy: NamePolicy::Strict,
            concurrency: DEFAULT_CONCURRENCY,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// Where a setting's effective value came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingSource {
    EnvVar(&'static str),
    ConfigFile,
    Default,
}

impl std::fmt::Display for SettingSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EnvVar(var) => write!(f, "env ${}", var),
            Self::ConfigFile => write!(f, "config file"),
            Self::Default => write!(f, "default"),
        }
    }
}

/// TOML settings file format.
#[derive(Debug, Default, Deserialize)]
struct SettingsFile {
    fetch: Option<FetchTable>,
}

#[derive(Debug, Default, Deserialize)]
struct FetchTable {
    endpoint: Option<String>,
    limit: Option<usize>,
    language: Option<String>,
    name_policy: Option<NamePolicy>,
    concurrency: Option<usize>,
    timeout_secs: Option<u64>,
}

/// Canonical path to the settings file: `~/.config/pokedex-cards/settings.toml`.
pub fn settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("pokedex-cards").join("settings.toml"))
}

impl FetchOptions {
    /// Load options from the environment, the settings file, and defaults.
    ///
    /// A missing settings file is not an error; an unreadable or invalid one is.
    pub fn load() -> Result<Self, FetchError> {
        let file = match settings_path() {
            Some(path) if path.exists() => std::fs::read_to_string(&path)?,
            _ => String::new(),
        };
        Self::resolve(&file, |var| std::env::var(var).ok())
    }

    /// Resolve options from settings-file contents and an env lookup.
    pub fn resolve(
        settings_toml: &str,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, FetchError> {
        let file: SettingsFile = toml::from_str(settings_toml)
            .map_err(|e| FetchError::Config(format!("Invalid settings file: {}", e)))?;
        let table = file.fetch.unwrap_or_default();
        let defaults = Self::default();

        let concurrency = match env(ENV_CONCURRENCY) {
            Some(v) => v.trim().parse().map_err(|_| {
                FetchError::Config(format!(
                    "{} must be a positive integer, got '{}'",
                    ENV_CONCURRENCY, v
                ))
            })?,
            None => table.concurrency.unwrap_or(defaults.concurrency),
        };

        let options = Self {
            endpoint: env(ENV_ENDPOINT)
                .or(table.endpoint)
                .unwrap_or(defaults.endpoint),
            limit: table.limit.unwrap_or(defaults.limit),
            language: env(ENV_LANGUAGE)
                .or(table.language)
                .unwrap_or(defaults.language),
            name_policy: table.name_policy.unwrap_or(defaults.name_policy),
            concurrency,
            timeout_secs: table.timeout_secs.unwrap_or(defaults.timeout_secs),
        };
        options.validate()?;
        Ok(options)
    }

    /// Apply explicit overrides (e.g., from CLI args).
    pub fn with_overrides(
        mut self,
        language: Option<String>,
        limit: Option<usize>,
        concurrency: Option<usize>,
        name_fallback: bool,
    ) -> Result<Self, FetchError> {
        if let Some(lang) = language {
            self.language = lang;
        }
        if let Some(n) = limit {
            self.limit = n;
        }
        if let Some(n) = concurrency {
            self.concurrency = n;
        }
        if name_fallback {
            self.name_policy = NamePolicy::Canonical;
        }
        self.validate()?;
        Ok(self)
    }

    /// Full index URL including the page-size query.
    pub fn index_url(&self) -> String {
        format!("{}?limit={}", self.endpoint, self.limit)
    }

    fn validate(&self) -> Result<(), FetchError> {
        if self.limit == 0 {
            return Err(FetchError::Config("limit must be at least 1".to_string()));
        }
        if self.concurrency == 0 {
            return Err(FetchError::Config("concurrency must be at least 1".to_string()));
        }
        if self.language.is_empty() {
            return Err(FetchError::Config("language must not be empty".to_string()));
        }
        Ok(())
    }
}

/// Determine where each overridable setting comes from.
pub fn setting_sources() -> Vec<(&'static str, SettingSource)> {
    let table = settings_path()
        .and_then(|p| std::fs::read_to_string(p).ok())
        .and_then(|s| toml::from_str::<SettingsFile>(&s).ok())
        .and_then(|f| f.fetch)
        .unwrap_or_default();

    vec![
        ("endpoint", source(Some(ENV_ENDPOINT), table.endpoint.is_some())),
        ("limit", source(None, table.limit.is_some())),
        ("language", source(Some(ENV_LANGUAGE), table.language.is_some())),
        ("name_policy", source(None, table.name_policy.is_some())),
        ("concurrency", source(Some(ENV_CONCURRENCY), table.concurrency.is_some())),
        ("timeout_secs", source(None, table.timeout_secs.is_some())),
    ]
}

fn source(env_var: Option<&'static str>, in_file: bool) -> SettingSource {
    match env_var {
        Some(var) if std::env::var(var).is_ok() => SettingSource::EnvVar(var),
        _ if in_file => SettingSource::ConfigFile,
        _ => SettingSource::Default,
    }
}

#[cfg(test)]
#[path = "tests/settings_tests.rs"]
mod tests;
