use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::format::{capitalize, find_localized_name, format_height, format_weight, join_types};
use crate::{RawDetails, RawSpecies};

/// What to do when a species has no name in the requested language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NamePolicy {
    /// Fail the whole item with [`CoreError::NotFound`].
    #[default]
    Strict,
    /// Use the canonical name in place of the localized one.
    Canonical,
}

impl std::fmt::Display for NamePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NamePolicy::Strict => write!(f, "strict"),
            NamePolicy::Canonical => write!(f, "canonical"),
        }
    }
}

/// A display-ready creature record. Built once per item and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedRecord {
    pub id: u32,
    /// Capitalized name in the configured language
    pub localized_name: String,
    /// Capitalized canonical (English slug) name
    pub canonical_name: String,
    /// e.g. "1.7m"
    pub height_display: String,
    /// e.g. "69.0kg"
    pub weight_display: String,
    /// e.g. "Fire, Flying"
    pub types_display: String,
    /// First base stat (HP), if the service listed any
    pub primary_stat: Option<u32>,
}

impl NormalizedRecord {
    /// Combine raw details and species data into a display record.
    ///
    /// The name lookup honours `policy`; every other field is infallible.
    pub fn from_raw(
        details: &RawDetails,
        species: &RawSpecies,
        language: &str,
        policy: NamePolicy,
    ) -> Result<Self, CoreError> {
        let canonical_name = capitalize(&details.name);
        let localized_name = match find_localized_name(&species.names, language) {
            Ok(name) => capitalize(name),
            Err(e) => match policy {
                NamePolicy::Strict => return Err(e),
                NamePolicy::Canonical => canonical_name.clone(),
            },
        };

        Ok(Self {
            id: details.id,
            localized_name,
            canonical_name,
            height_display: format_height(details.height),
            weight_display: format_weight(details.weight),
            types_display: join_types(&details.types),
            primary_stat: details.stats.first().copied(),
        })
    }

    /// Card title text: `"{localized} ({canonical})"`.
    pub fn title(&self) -> String {
        format!("{} ({})", self.localized_name, self.canonical_name)
    }
}

#[cfg(test)]
#[path = "tests/record_tests.rs"]
mod tests;
