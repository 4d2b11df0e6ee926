use serde::{Deserialize, Serialize};

pub mod colors;
pub mod error;
pub mod format;
pub mod record;

pub use colors::{DEFAULT_TYPE_COLOR, color_for};
pub use error::CoreError;
pub use format::{
    capitalize, find_localized_name, format_height, format_weight, join_types, split_types,
};
pub use record::{NamePolicy, NormalizedRecord};

/// Raw details for one creature, as supplied by the remote service.
///
/// Height is in decimeters and weight in hectograms. Type names are kept in
/// the order the service lists them (primary type first).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RawDetails {
    pub id: u32,
    pub name: String,
    pub height: u32,
    pub weight: u32,
    pub types: Vec<String>,
    /// Locator for the species resource holding localized names
    pub species_url: String,
    /// Base stat values in service order (HP first)
    pub stats: Vec<u32>,
}

/// Supplementary species data used for localized names.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RawSpecies {
    pub names: Vec<SpeciesName>,
}

/// One localized name entry of a species.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeciesName {
    pub name: String,
    /// Language code, e.g. "fr", "en", "ja-Hrkt"
    pub language: String,
}

impl SpeciesName {
    pub fn new(name: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            language: language.into(),
        }
    }
}
