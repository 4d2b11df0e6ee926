use std::fs;
use std::io::Write;
use std::path::Path;

use crate::CardView;
use crate::error::ViewError;
use crate::render::escape_html;
use crate::surface::Surface;

/// The page carries no script; filtering happens when the page is generated.
const SEARCH_NOTE: &str =
    "<p class=\"search-note\">Filtre appliqué à la génération : <code>pokedex render --search TERME</code></p>\n";

/// A standalone HTML page whose `#pokemonList` container holds the cards.
///
/// Hidden cards stay in the document with `display: none`, so a saved page
/// reflects the last applied filter.
#[derive(Debug)]
pub struct HtmlDocument {
    title: String,
    cards: Vec<CardView>,
}

impl HtmlDocument {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            cards: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Serialize the whole page.
    pub fn to_html(&self) -> String {
        let title = escape_html(&self.title);

        let mut html = String::new();
        html.push_str("<!DOCTYPE html>\n");
        html.push_str("<html>\n<head>\n<meta charset=\"utf-8\" />\n");
        html.push_str(&format!("<title>{}</title>\n", title));
        html.push_str("</head>\n<body>\n");
        html.push_str(&format!("<h1>{}</h1>\n", title));
        html.push_str("<input type=\"text\" id=\"pokemon-input\" placeholder=\"Nom ou numéro\" />\n");
        html.push_str(SEARCH_NOTE);
        html.push_str("<div id=\"pokemonList\">\n");

        for card in &self.cards {
            html.push_str(&format!(
                "<div class=\"pokemon-card\" data-pokemon-id=\"{}\"",
                card.id()
            ));
            if !card.is_visible() {
                html.push_str(" style=\"display: none;\"");
            }
            html.push_str(">\n");
            html.push_str(card.markup());
            html.push_str("</div>\n");
        }

        html.push_str("</div>\n</body>\n</html>\n");
        html
    }

    /// Write the page to `path`, creating parent directories as needed.
    pub fn write_to(&self, path: &Path) -> Result<(), ViewError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let mut file = fs::File::create(path)?;
        file.write_all(self.to_html().as_bytes())?;
        Ok(())
    }
}

impl Surface for HtmlDocument {
    fn clear(&mut self) {
        self.cards.clear();
    }

    fn append_card(&mut self, card: &CardView) {
        self.cards.push(card.clone());
    }

    fn set_card_visibility(&mut self, id: u32, visible: bool) {
        if let Some(card) = self.cards.iter_mut().find(|c| c.id() == id) {
            card.set_visible(visible);
        }
    }
}

#[cfg(test)]
#[path = "tests/html_tests.rs"]
mod tests;
