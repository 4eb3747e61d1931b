//! Display slot for a card's illustration.
//!
//! A card may ship an external image. When that image fails to load, the
//! display swaps in the generated scene for the same title and category.
//! The swap happens at most once per slot; a second failure leaves the
//! slot alone.

use crate::card::Card;
use crate::scene::generate;

/// What a slot currently shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Artwork<'a> {
    /// External image URI.
    External(&'a str),
    /// Generated inline SVG markup.
    Generated(&'a str),
}

/// Illustration state for one display instance of a card.
#[derive(Debug, Clone)]
pub struct ArtworkSlot {
    title: String,
    category: String,
    external: Option<String>,
    generated: Option<String>,
    fell_back: bool,
}

impl ArtworkSlot {
    /// Create a slot for a card.
    #[must_use]
    pub fn for_card(card: &Card) -> Self {
        Self {
            title: card.title.clone(),
            category: card.category_key().to_string(),
            external: card.image.clone().filter(|src| !src.trim().is_empty()),
            generated: None,
            fell_back: false,
        }
    }

    /// Current artwork, generating the scene on first use when there is no
    /// usable external image.
    pub fn current(&mut self) -> Artwork<'_> {
        let Self {
            title,
            category,
            external,
            generated,
            fell_back,
        } = self;
        match external {
            Some(src) if !*fell_back => Artwork::External(src),
            _ => Artwork::Generated(
                generated.get_or_insert_with(|| generate(title, category).to_svg()),
            ),
        }
    }

    /// Handle a load failure of the external image.
    ///
    /// Returns the fallback markup the first time; `None` on any later call
    /// or when the slot never showed an external image.
    pub fn on_image_error(&mut self) -> Option<&str> {
        if self.fell_back || self.external.is_none() {
            tracing::debug!(title = %self.title, "ignoring repeated image failure");
            return None;
        }
        self.fell_back = true;
        tracing::debug!(title = %self.title, "external image failed, using generated art");
        Some(self.generated_svg())
    }

    /// Whether the slot has switched to generated art.
    #[must_use]
    pub fn has_fallen_back(&self) -> bool {
        self.fell_back
    }

    fn generated_svg(&mut self) -> &str {
        let (title, category) = (&self.title, &self.category);
        self.generated
            .get_or_insert_with(|| generate(title, category).to_svg())
    }
}
