//! Render configuration for story-format card images.

use crate::measure::{FontSpec, FontWeight};

/// Font and line advance for one text role.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    /// Font.
    pub font: FontSpec,
    /// Vertical advance per line.
    pub line_height: f32,
}

impl TextStyle {
    /// Create a text style.
    #[must_use]
    pub const fn new(size: f32, weight: FontWeight, line_height: f32) -> Self {
        Self {
            font: FontSpec::new(size, weight),
            line_height,
        }
    }
}

/// Generic CSS families understood by the font database.
pub const GENERIC_FAMILIES: [&str; 5] = ["serif", "sans-serif", "monospace", "cursive", "fantasy"];

/// Configuration for [`crate::CardImageRenderer`].
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Canvas width in pixels (default: 1080).
    pub width: u32,
    /// Canvas height in pixels (default: 1920).
    pub height: u32,
    /// Horizontal gap between canvas edge and card.
    pub card_margin: f32,
    /// Horizontal padding inside the card.
    pub card_padding_x: f32,
    /// Padding above the first laid-out row.
    pub padding_top: f32,
    /// Padding below the last laid-out row.
    pub padding_bottom: f32,
    /// The card never starts above this y, even when it is very tall.
    pub min_card_top: f32,
    /// Card corner radius.
    pub corner_radius: f32,
    /// Height of the accent bar along the card's top edge.
    pub accent_bar_height: f32,

    /// Brand header row.
    pub brand: TextStyle,
    /// Gap after the brand row.
    pub brand_gap: f32,
    /// Tag pill text; the pill is one line tall.
    pub tag: TextStyle,
    /// Horizontal padding inside the tag pill.
    pub tag_padding_x: f32,
    /// Gap after the tag pill.
    pub tag_gap: f32,
    /// Title.
    pub title: TextStyle,
    /// Maximum title lines; the last kept line ends in an ellipsis
    /// (default: 5).
    pub max_title_lines: usize,
    /// Gap after the title.
    pub title_gap: f32,
    /// Body.
    pub body: TextStyle,
    /// Maximum visible body lines, paragraph gaps included (default: 14).
    pub max_body_lines: usize,
    /// Gap before the source line.
    pub source_gap: f32,
    /// Source attribution.
    pub source: TextStyle,
    /// Footer brand line.
    pub footer: TextStyle,
    /// Distance from the canvas bottom to the footer baseline.
    pub footer_offset: f32,

    /// Brand name used in the header and export filenames.
    pub brand_name: String,
    /// Footer text.
    pub footer_text: String,
    /// Font family for all text.
    pub font_family: String,
    /// Load system fonts for rasterization. Without fonts, text is laid out
    /// and sized but not painted.
    pub load_system_fonts: bool,
    /// JPEG quality 1-100 (default: 90).
    pub jpeg_quality: u8,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 1080,
            height: 1920,
            card_margin: 72.0,
            card_padding_x: 64.0,
            padding_top: 64.0,
            padding_bottom: 64.0,
            min_card_top: 160.0,
            corner_radius: 40.0,
            accent_bar_height: 8.0,

            brand: TextStyle::new(28.0, FontWeight::Bold, 40.0),
            brand_gap: 32.0,
            tag: TextStyle::new(30.0, FontWeight::SemiBold, 60.0),
            tag_padding_x: 28.0,
            tag_gap: 40.0,
            title: TextStyle::new(64.0, FontWeight::Bold, 78.0),
            max_title_lines: 5,
            title_gap: 36.0,
            body: TextStyle::new(38.0, FontWeight::Regular, 56.0),
            max_body_lines: 14,
            source_gap: 32.0,
            source: TextStyle::new(28.0, FontWeight::Regular, 40.0),
            footer: TextStyle::new(30.0, FontWeight::SemiBold, 40.0),
            footer_offset: 96.0,

            brand_name: "deckart".to_string(),
            footer_text: "Your daily deck \u{2022} deckart".to_string(),
            font_family: "Inter, Helvetica, Arial, sans-serif".to_string(),
            load_system_fonts: true,
            jpeg_quality: 90,
        }
    }
}

impl RenderConfig {
    /// Card width.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn card_width(&self) -> f32 {
        self.width as f32 - 2.0 * self.card_margin
    }

    /// Width available to wrapped text inside the card.
    #[must_use]
    pub fn content_width(&self) -> f32 {
        self.card_width() - 2.0 * self.card_padding_x
    }

    /// Font families in [`Self::font_family`], unquoted, ending in a
    /// generic family (`sans-serif` is appended when none is listed).
    #[must_use]
    pub fn font_stack(&self) -> Vec<String> {
        let mut families: Vec<String> = self
            .font_family
            .split(',')
            .map(|s| s.trim().trim_matches(|c: char| c == '"' || c == '\'').trim())
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();
        let has_generic = families.iter().any(|f| {
            GENERIC_FAMILIES
                .iter()
                .any(|generic| f.eq_ignore_ascii_case(generic))
        });
        if !has_generic {
            families.push("sans-serif".to_string());
        }
        families
    }

    /// [`Self::font_stack`] as an SVG `font-family` value.
    #[must_use]
    pub fn font_family_attr(&self) -> String {
        self.font_stack()
            .iter()
            .map(|f| {
                if GENERIC_FAMILIES.iter().any(|g| f.eq_ignore_ascii_case(g)) {
                    f.clone()
                } else {
                    format!("'{f}'")
                }
            })
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_story_canvas() {
        let config = RenderConfig::default();
        assert_eq!((config.width, config.height), (1080, 1920));
        assert!((config.card_width() - 936.0).abs() < f32::EPSILON);
        assert!((config.content_width() - 808.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_font_stack_unquotes() {
        let config = RenderConfig {
            font_family: "\"Noto Sans\", sans-serif".to_string(),
            ..Default::default()
        };
        assert_eq!(config.font_stack(), ["Noto Sans", "sans-serif"]);
        assert_eq!(config.font_family_attr(), "'Noto Sans', sans-serif");
    }

    #[test]
    fn test_font_stack_ends_generic() {
        let config = RenderConfig {
            font_family: "Inter".to_string(),
            ..Default::default()
        };
        assert_eq!(config.font_stack(), ["Inter", "sans-serif"]);
    }
}
