use pokedex_core::{RawDetails, RawSpecies, SpeciesName};
use serde::Deserialize;

/// Paginated index response from `GET /pokemon?limit=N`.
#[derive(Debug, Deserialize)]
pub struct IndexResponse {
    pub results: Vec<IndexEntry>,
}

/// One catalog item: a name and the locator of its details.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct IndexEntry {
    pub name: String,
    pub url: String,
}

/// Details response from `GET /pokemon/{id}/`. Unlisted fields are ignored.
#[derive(Debug, Deserialize)]
pub struct PokemonResponse {
    pub id: u32,
    pub name: String,
    pub height: u32,
    pub weight: u32,
    pub types: Vec<TypeSlot>,
    pub species: NamedResource,
    #[serde(default)]
    pub stats: Vec<StatSlot>,
}

#[derive(Debug, Deserialize)]
pub struct TypeSlot {
    #[serde(rename = "type")]
    pub type_: NamedResource,
}

#[derive(Debug, Deserialize)]
pub struct StatSlot {
    pub base_stat: u32,
}

/// A `{name, url}` reference; the service omits `name` on some links.
#[derive(Debug, Deserialize)]
pub struct NamedResource {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub url: String,
}

/// Species response from `GET /pokemon-species/{id}/`.
#[derive(Debug, Deserialize)]
pub struct SpeciesResponse {
    pub names: Vec<SpeciesNameEntry>,
}

#[derive(Debug, Deserialize)]
pub struct SpeciesNameEntry {
    pub name: String,
    pub language: NamedResource,
}

impl From<PokemonResponse> for RawDetails {
    fn from(resp: PokemonResponse) -> Self {
        Self {
            id: resp.id,
            name: resp.name,
            height: resp.height,
            weight: resp.weight,
            types: resp.types.into_iter().map(|t| t.type_.name).collect(),
            species_url: resp.species.url,
            stats: resp.stats.into_iter().map(|s| s.base_stat).collect(),
        }
    }
}

impl From<SpeciesResponse> for RawSpecies {
    fn from(resp: SpeciesResponse) -> Self {
        Self {
            names: resp
                .names
                .into_iter()
                .map(|n| SpeciesName::new(n.name, n.language.name))
                .collect(),
        }
    }
}

#[cfg(test)]
#[path = "tests/types_tests.rs"]
mod tests;
