use pokedex_core::{NamePolicy, NormalizedRecord, RawDetails, RawSpecies, find_localized_name};

use crate::error::FetchError;
use crate::transport::{Transport, get_json};
use crate::types::{PokemonResponse, SpeciesResponse};

/// Fetch one item's details and species data and normalize them.
///
/// Both retrievals must succeed; any failure yields no record.
pub async fn fetch_details<T: Transport>(
    transport: &T,
    url: &str,
    language: &str,
    policy: NamePolicy,
) -> Result<NormalizedRecord, FetchError> {
    let details: RawDetails = get_json::<PokemonResponse, _>(transport, url).await?.into();
    if details.species_url.is_empty() {
        return Err(FetchError::malformed(url, "missing species.url"));
    }

    let species: RawSpecies = get_json::<SpeciesResponse, _>(transport, &details.species_url)
        .await?
        .into();

    if policy == NamePolicy::Canonical && find_localized_name(&species.names, language).is_err() {
        log::warn!(
            "#{} {} has no '{}' name, using canonical name",
            details.id,
            details.name,
            language
        );
    }

    let record = NormalizedRecord::from_raw(&details, &species, language, policy)?;
    Ok(record)
}
