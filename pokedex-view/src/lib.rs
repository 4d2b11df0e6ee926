pub mod error;
pub mod filter;
pub mod html;
pub mod render;
pub mod surface;
pub mod view;

pub use error::ViewError;
pub use filter::{apply_filter, matches, normalize_term};
pub use html::HtmlDocument;
pub use render::{card_markup, render, render_card, sprite_url};
pub use surface::{MemorySurface, Surface};
pub use view::CatalogView;

/// A rendered card, keyed by its record's id.
///
/// Content is fixed at render time; only visibility changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    id: u32,
    id_text: String,
    name_text: String,
    markup: String,
    visible: bool,
}

impl CardView {
    pub(crate) fn new(id: u32, name_text: String, markup: String) -> Self {
        Self {
            id,
            id_text: id.to_string(),
            name_text,
            markup,
            visible: true,
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    /// Text of the id label, as shown on the card.
    pub fn id_text(&self) -> &str {
        &self.id_text
    }

    /// Text of the card title, e.g. "Dracaufeu (Charizard)".
    pub fn name_text(&self) -> &str {
        &self.name_text
    }

    /// Inner markup of the card element.
    pub fn markup(&self) -> &str {
        &self.markup
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub(crate) fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }
}
