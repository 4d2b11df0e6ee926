//! Card markup generation.

use pokedex_core::{NormalizedRecord, color_for, split_types};

use crate::CardView;
use crate::surface::Surface;

/// Base URL of the sprite repository; sprites are `{base}/{id}.png`.
pub const SPRITE_URL_BASE: &str =
    "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon";

/// Sprite image reference for a creature id. Never fetched here.
pub fn sprite_url(id: u32) -> String {
    format!("{}/{}.png", SPRITE_URL_BASE, id)
}

/// Replace the surface's contents with one card per record, in order.
///
/// Returns the rendered cards so the caller can filter them later.
pub fn render<S: Surface + ?Sized>(surface: &mut S, records: &[NormalizedRecord]) -> Vec<CardView> {
    surface.clear();

    let cards: Vec<CardView> = records.iter().map(render_card).collect();
    for card in &cards {
        surface.append_card(card);
    }

    log::debug!("Rendered {} cards", cards.len());
    cards
}

/// Build the card for a single record.
pub fn render_card(record: &NormalizedRecord) -> CardView {
    CardView::new(record.id, record.title(), card_markup(record))
}

/// Inner markup of a card.
pub fn card_markup(record: &NormalizedRecord) -> String {
    let mut html = String::new();

    html.push_str("<div class=\"id-pv-container\">\n");
    write_p(&mut html, "card-id", &record.id.to_string());
    let pv = record
        .primary_stat
        .filter(|pv| *pv != 0)
        .map(|pv| format!("PV: {}", pv))
        .unwrap_or_default();
    write_p(&mut html, "card-pv", &pv);
    html.push_str("</div>\n");

    html.push_str("<h3 class=\"card-title\">");
    html.push_str(&escape_html(&record.title()));
    html.push_str("</h3>\n");

    html.push_str(&format!(
        "<img class=\"pokemon-img\" src=\"{}\" alt=\"{}\" />\n",
        sprite_url(record.id),
        escape_html(&record.canonical_name),
    ));

    write_stat_line(&mut html, "Taille :", &record.height_display);
    write_stat_line(&mut html, "Poids :", &record.weight_display);

    html.push_str("<p class=\"type\">");
    for label in split_types(&record.types_display) {
        html.push_str(&format!(
            "<span class=\"type-box\" style=\"background-color: {};\">{}</span>",
            color_for(label),
            escape_html(label),
        ));
    }
    html.push_str("</p>\n");

    html
}

fn write_p(html: &mut String, class: &str, text: &str) {
    html.push_str("<p class=\"");
    html.push_str(class);
    html.push_str("\">");
    html.push_str(&escape_html(text));
    html.push_str("</p>\n");
}

fn write_stat_line(html: &mut String, label: &str, value: &str) {
    html.push_str("<p class=\"card-text\"><strong>");
    html.push_str(label);
    html.push_str("</strong> ");
    html.push_str(&escape_html(value));
    html.push_str("</p>\n");
}

pub(crate) fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
#[path = "tests/render_tests.rs"]
mod tests;
