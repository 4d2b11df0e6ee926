use crate::CardView;
use crate::surface::Surface;

/// Normalize a committed search-field value: trim, then lowercase.
pub fn normalize_term(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Whether `card` stays visible for an already-normalized `term`.
///
/// The lowercased title must contain `term`, or the id label must equal it
/// as text. An empty term matches every card.
pub fn matches(card: &CardView, term: &str) -> bool {
    card.name_text().to_lowercase().contains(term) || card.id_text() == term
}

/// Show matching cards and hide the rest. Returns the number left visible.
///
/// Cards are never removed or reordered.
pub fn apply_filter<S: Surface + ?Sized>(
    surface: &mut S,
    cards: &mut [CardView],
    term: &str,
) -> usize {
    let mut visible = 0;
    for card in cards.iter_mut() {
        let show = matches(card, term);
        card.set_visible(show);
        surface.set_card_visibility(card.id(), show);
        if show {
            visible += 1;
        }
    }
    log::debug!("Filter '{}' left {} of {} cards", term, visible, cards.len());
    visible
}

#[cfg(test)]
#[path = "tests/filter_tests.rs"]
mod tests;
