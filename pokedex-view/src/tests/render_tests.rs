use super::*;
use crate::surface::MemorySurface;

fn record(id: u32, localized: &str, canonical: &str, types: &str, stat: Option<u32>) -> NormalizedRecord {
    NormalizedRecord {
        id,
        localized_name: localized.to_string(),
        canonical_name: canonical.to_string(),
        height_display: "0.7m".to_string(),
        weight_display: "6.9kg".to_string(),
        types_display: types.to_string(),
        primary_stat: stat,
    }
}

#[test]
fn test_sprite_url() {
    assert_eq!(
        sprite_url(25),
        "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/25.png"
    );
}

#[test]
fn test_card_markup_contents() {
    let html = card_markup(&record(6, "Dracaufeu", "Charizard", "Fire, Flying", Some(78)));
    assert!(html.contains("<p class=\"card-id\">6</p>"));
    assert!(html.contains("<p class=\"card-pv\">PV: 78</p>"));
    assert!(html.contains("<h3 class=\"card-title\">Dracaufeu (Charizard)</h3>"));
    assert!(html.contains("src=\"https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/6.png\""));
    assert!(html.contains("alt=\"Charizard\""));
    assert!(html.contains("<strong>Taille :</strong> 0.7m"));
    assert!(html.contains("<strong>Poids :</strong> 6.9kg"));
    assert!(html.contains(
        "<span class=\"type-box\" style=\"background-color: #F08030;\">Fire</span>\
         <span class=\"type-box\" style=\"background-color: #A890F0;\">Flying</span>"
    ));
}

#[test]
fn test_card_markup_without_stat() {
    let html = card_markup(&record(1, "Bulbizarre", "Bulbasaur", "Grass", None));
    assert!(html.contains("<p class=\"card-pv\"></p>"));
}

#[test]
fn test_zero_stat_leaves_pv_empty() {
    let html = card_markup(&record(132, "Métamorph", "Ditto", "Normal", Some(0)));
    assert!(html.contains("<p class=\"card-pv\"></p>"));
    assert!(!html.contains("PV: 0"));
}

#[test]
fn test_card_markup_escapes_text() {
    let html = card_markup(&record(32, "Nidoran<m>", "Nidoran-m", "Poison", None));
    assert!(html.contains("Nidoran&lt;m&gt; (Nidoran-m)"));
}

#[test]
fn test_render_replaces_surface_in_order() {
    let mut surface = MemorySurface::new();
    render(&mut surface, &[record(150, "Mewtwo", "Mewtwo", "Psychic", None)]);

    let records = vec![
        record(1, "Bulbizarre", "Bulbasaur", "Grass, Poison", Some(45)),
        record(4, "Salamèche", "Charmander", "Fire", Some(39)),
        record(7, "Carapuce", "Squirtle", "Water", Some(44)),
    ];
    let cards = render(&mut surface, &records);

    let ids: Vec<u32> = surface.cards().iter().map(|c| c.id()).collect();
    assert_eq!(ids, vec![1, 4, 7]);
    assert_eq!(cards, surface.cards());
    assert_eq!(cards[1].name_text(), "Salamèche (Charmander)");
    assert_eq!(cards[1].id_text(), "4");
    assert!(cards.iter().all(|c| c.is_visible()));
}

#[test]
fn test_render_empty_clears_surface() {
    let mut surface = MemorySurface::new();
    render(&mut surface, &[record(1, "Bulbizarre", "Bulbasaur", "Grass", None)]);
    let cards = render(&mut surface, &[]);
    assert!(cards.is_empty());
    assert!(surface.cards().is_empty());
}
