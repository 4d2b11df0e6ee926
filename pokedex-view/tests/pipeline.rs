use std::collections::HashMap;

use pokedex_core::NormalizedRecord;
use pokedex_fetch::{FetchError, FetchOptions, Transport, fetch_catalog};
use pokedex_view::{CatalogView, MemorySurface};
use serde_json::json;
use tokio::sync::mpsc;

const ENDPOINT: &str = "https://pokeapi.test/api/v2/pokemon";

struct FixtureTransport {
    bodies: HashMap<String, String>,
}

impl Transport for FixtureTransport {
    async fn get_text(&self, url: &str) -> Result<String, FetchError> {
        self.bodies.get(url).cloned().ok_or_else(|| FetchError::Status {
            status: 500,
            url: url.to_string(),
        })
    }
}

fn fixture() -> FixtureTransport {
    let items = [
        (1, "bulbasaur", "Bulbizarre", "grass"),
        (4, "charmander", "Salamèche", "fire"),
        (7, "squirtle", "Carapuce", "water"),
    ];
    let mut bodies = HashMap::new();
    let results: Vec<_> = items
        .iter()
        .map(|(id, name, _, _)| json!({ "name": name, "url": format!("{ENDPOINT}/{id}/") }))
        .collect();
    bodies.insert(
        format!("{ENDPOINT}?limit=3"),
        json!({ "results": results }).to_string(),
    );
    for (id, name, fr, ty) in items {
        let species = format!("https://pokeapi.test/api/v2/pokemon-species/{id}/");
        bodies.insert(
            format!("{ENDPOINT}/{id}/"),
            json!({
                "id": id, "name": name, "height": 10, "weight": 100,
                "types": [{ "type": { "name": ty } }],
                "species": { "url": species.clone() },
                "stats": [{ "base_stat": 40 }],
            })
            .to_string(),
        );
        bodies.insert(
            species,
            json!({ "names": [
                { "name": name, "language": { "name": "en" } },
                { "name": fr, "language": { "name": "fr" } },
            ]})
            .to_string(),
        );
    }
    FixtureTransport { bodies }
}

fn options() -> FetchOptions {
    FetchOptions {
        endpoint: ENDPOINT.to_string(),
        limit: 3,
        ..FetchOptions::default()
    }
}

async fn load(transport: &FixtureTransport) -> Result<Vec<NormalizedRecord>, FetchError> {
    let (tx, _rx) = mpsc::unbounded_channel();
    fetch_catalog(transport, &options(), tx).await
}

#[tokio::test]
async fn cards_follow_catalog_order() {
    let records = load(&fixture()).await.unwrap();
    let mut view = CatalogView::new(MemorySurface::new());
    view.render(&records);

    let ids: Vec<u32> = view.surface().cards().iter().map(|c| c.id()).collect();
    assert_eq!(ids, vec![1, 4, 7]);
    assert_eq!(view.cards()[2].name_text(), "Carapuce (Squirtle)");

    view.commit_search("7");
    assert_eq!(view.visible_ids(), vec![7]);
    view.commit_search("sala");
    assert_eq!(view.visible_ids(), vec![4]);
    view.commit_search("");
    assert_eq!(view.visible_ids(), vec![1, 4, 7]);
}

#[tokio::test]
async fn failed_item_renders_nothing() {
    let mut transport = fixture();
    transport
        .bodies
        .remove("https://pokeapi.test/api/v2/pokemon-species/4/");

    let mut view = CatalogView::new(MemorySurface::new());
    match load(&transport).await {
        Ok(records) => view.render(&records),
        Err(e) => assert!(e.is_retrieval()),
    }
    assert!(view.cards().is_empty());
    assert!(view.surface().cards().is_empty());
}

#[tokio::test]
async fn pipeline_is_repeatable() {
    let transport = fixture();
    let first = load(&transport).await.unwrap();
    let second = load(&transport).await.unwrap();
    assert_eq!(first, second);

    let mut a = CatalogView::new(MemorySurface::new());
    let mut b = CatalogView::new(MemorySurface::new());
    a.render(&first);
    b.render(&second);
    assert_eq!(a.cards(), b.cards());
}
