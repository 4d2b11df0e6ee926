use super::*;

#[test]
fn test_pokemon_response_to_raw_details() {
    let body = r#"{
        "id": 6,
        "name": "charizard",
        "base_experience": 267,
        "height": 17,
        "weight": 905,
        "order": 7,
        "species": {"name": "charizard", "url": "https://pokeapi.co/api/v2/pokemon-species/6/"},
        "stats": [
            {"base_stat": 78, "effort": 0, "stat": {"name": "hp", "url": ""}},
            {"base_stat": 84, "effort": 0, "stat": {"name": "attack", "url": ""}}
        ],
        "types": [
            {"slot": 1, "type": {"name": "fire", "url": "https://pokeapi.co/api/v2/type/10/"}},
            {"slot": 2, "type": {"name": "flying", "url": "https://pokeapi.co/api/v2/type/3/"}}
        ]
    }"#;
    let resp: PokemonResponse = serde_json::from_str(body).unwrap();
    let details: RawDetails = resp.into();
    assert_eq!(details.id, 6);
    assert_eq!(details.types, vec!["fire", "flying"]);
    assert_eq!(details.stats, vec![78, 84]);
    assert_eq!(
        details.species_url,
        "https://pokeapi.co/api/v2/pokemon-species/6/"
    );
}

#[test]
fn test_species_response_to_raw_species() {
    let body = r#"{
        "id": 6,
        "names": [
            {"language": {"name": "ja-Hrkt", "url": ""}, "name": "リザードン"},
            {"language": {"name": "fr", "url": ""}, "name": "Dracaufeu"}
        ]
    }"#;
    let resp: SpeciesResponse = serde_json::from_str(body).unwrap();
    let species: RawSpecies = resp.into();
    assert_eq!(species.names.len(), 2);
    assert_eq!(species.names[1], SpeciesName::new("Dracaufeu", "fr"));
}

#[test]
fn test_index_response() {
    let body = r#"{"count": 1302, "next": null, "previous": null,
        "results": [{"name": "bulbasaur", "url": "https://pokeapi.co/api/v2/pokemon/1/"}]}"#;
    let resp: IndexResponse = serde_json::from_str(body).unwrap();
    assert_eq!(
        resp.results,
        vec![IndexEntry {
            name: "bulbasaur".to_string(),
            url: "https://pokeapi.co/api/v2/pokemon/1/".to_string(),
        }]
    );
}
