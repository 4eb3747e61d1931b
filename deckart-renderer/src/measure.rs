//! Text measurement capability.
//!
//! Layout only ever asks "how wide is this string in this font"; everything
//! font-specific lives behind [`TextMeasurer`] so layout stays portable and
//! tests can use a fixed-advance stub.

/// Font weight used by the card's text roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontWeight {
    /// Normal weight (400).
    Regular,
    /// Semi-bold (600).
    SemiBold,
    /// Bold (800).
    Bold,
}

impl FontWeight {
    /// CSS/SVG numeric weight.
    #[must_use]
    pub const fn css(self) -> u16 {
        match self {
            Self::Regular => 400,
            Self::SemiBold => 600,
            Self::Bold => 800,
        }
    }
}

/// Font size and weight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontSpec {
    /// Size in pixels.
    pub size: f32,
    /// Weight.
    pub weight: FontWeight,
}

impl FontSpec {
    /// Create a font spec.
    #[must_use]
    pub const fn new(size: f32, weight: FontWeight) -> Self {
        Self { size, weight }
    }
}

/// Measures rendered text width.
pub trait TextMeasurer {
    /// Width of `text` set in `font`, in pixels.
    fn measure(&self, text: &str, font: &FontSpec) -> f32;
}

impl<T: TextMeasurer + ?Sized> TextMeasurer for &T {
    fn measure(&self, text: &str, font: &FontSpec) -> f32 {
        (**self).measure(text, font)
    }
}

/// Every character advances by `advance × font size`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedAdvanceMeasurer {
    /// Advance as a fraction of the font size.
    pub advance: f32,
}

impl Default for FixedAdvanceMeasurer {
    fn default() -> Self {
        Self { advance: 0.5 }
    }
}

impl TextMeasurer for FixedAdvanceMeasurer {
    #[allow(clippy::cast_precision_loss)]
    fn measure(&self, text: &str, font: &FontSpec) -> f32 {
        text.chars().count() as f32 * self.advance * font.size
    }
}

/// Approximate sans-serif metrics from per-character width classes.
///
/// Deterministic and font-free, so layouts match on every host. Bolder
/// weights widen each glyph slightly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SansMetrics;

impl SansMetrics {
    fn advance(c: char) -> f32 {
        match c {
            'i' | 'j' | 'l' | '.' | ',' | ':' | ';' | '\'' | '|' | '!' | '`' => 0.26,
            ' ' | 'f' | 't' | 'r' | 'I' | '(' | ')' | '[' | ']' | '-' | '"' => 0.34,
            'm' | 'w' | 'M' | 'W' | '@' | '%' => 0.84,
            'A'..='Z' | '&' | '#' => 0.66,
            '0'..='9' | '$' | '?' | '+' | '=' | '<' | '>' | '_' | '~' | '*' | '/' | '\\' => 0.56,
            'a'..='z' => 0.53,
            // Emoji, CJK and other wide glyphs.
            c if u32::from(c) >= 0x2E80 => 1.0,
            _ => 0.6,
        }
    }
}

impl TextMeasurer for SansMetrics {
    fn measure(&self, text: &str, font: &FontSpec) -> f32 {
        let scale = match font.weight {
            FontWeight::Regular => 1.0,
            FontWeight::SemiBold => 1.03,
            FontWeight::Bold => 1.07,
        };
        text.chars().map(Self::advance).sum::<f32>() * font.size * scale
    }
}
