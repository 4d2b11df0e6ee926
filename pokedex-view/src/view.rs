use pokedex_core::NormalizedRecord;

use crate::CardView;
use crate::filter::{apply_filter, normalize_term};
use crate::render::render;
use crate::surface::Surface;

/// Owns a presentation surface and the cards currently rendered on it.
pub struct CatalogView<S: Surface> {
    surface: S,
    cards: Vec<CardView>,
}

impl<S: Surface> CatalogView<S> {
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            cards: Vec::new(),
        }
    }

    /// Replace everything on the surface with cards for `records`.
    pub fn render(&mut self, records: &[NormalizedRecord]) {
        self.cards = render(&mut self.surface, records);
    }

    /// Handle one commit of the search field.
    ///
    /// The raw value is trimmed and lowercased before filtering. Returns the
    /// number of cards left visible.
    pub fn commit_search(&mut self, raw: &str) -> usize {
        let term = normalize_term(raw);
        apply_filter(&mut self.surface, &mut self.cards, &term)
    }

    pub fn cards(&self) -> &[CardView] {
        &self.cards
    }

    pub fn visible_cards(&self) -> impl Iterator<Item = &CardView> {
        self.cards.iter().filter(|c| c.is_visible())
    }

    pub fn visible_ids(&self) -> Vec<u32> {
        self.visible_cards().map(|c| c.id()).collect()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }
}

#[cfg(test)]
#[path = "tests/view_tests.rs"]
mod tests;
