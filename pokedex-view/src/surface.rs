use crate::CardView;

/// A presentation surface that receives rendered cards.
pub trait Surface {
    /// Remove every card.
    fn clear(&mut self);

    /// Append a card after the existing ones.
    fn append_card(&mut self, card: &CardView);

    /// Show or hide the card tagged with `id`. Unknown ids are ignored.
    fn set_card_visibility(&mut self, id: u32, visible: bool);
}

/// In-memory surface. Keeps cards in order with their visibility.
#[derive(Debug, Default)]
pub struct MemorySurface {
    cards: Vec<CardView>,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cards(&self) -> &[CardView] {
        &self.cards
    }

    pub fn visible_cards(&self) -> impl Iterator<Item = &CardView> {
        self.cards.iter().filter(|c| c.is_visible())
    }
}

impl Surface for MemorySurface {
    fn clear(&mut self) {
        self.cards.clear();
    }

    fn append_card(&mut self, card: &CardView) {
        self.cards.push(card.clone());
    }

    fn set_card_visibility(&mut self, id: u32, visible: bool) {
        for card in self.cards.iter_mut().filter(|c| c.id() == id) {
            card.set_visible(visible);
        }
    }
}
