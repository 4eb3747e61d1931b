//! Category color profiles for exported card images.
//!
//! A fixed table keyed by category; unrelated to the seed palettes.

use deckart_core::Category;

/// Colors used to paint one category's card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorProfile {
    /// Top of the background gradient.
    pub background: &'static str,
    /// Accent bar, glow and source line.
    pub accent: &'static str,
    /// Tag pill fill.
    pub tag_background: &'static str,
    /// Tag pill text.
    pub tag_text: &'static str,
}

/// Profile for unrecognized or missing categories.
pub const BASELINE_PROFILE: ColorProfile = ColorProfile {
    background: "#1e3a5f",
    accent: "#4f9cf9",
    tag_background: "#17325a",
    tag_text: "#9cc8ff",
};

const BREAKING: ColorProfile = ColorProfile {
    background: "#5c1a1a",
    accent: "#ff4d4d",
    tag_background: "#4a1414",
    tag_text: "#ffb3b3",
};

const TOOL: ColorProfile = ColorProfile {
    background: "#1f4a3a",
    accent: "#34d399",
    tag_background: "#123528",
    tag_text: "#a7f3d0",
};

const TIP: ColorProfile = ColorProfile {
    background: "#5a4414",
    accent: "#fbbf24",
    tag_background: "#45330c",
    tag_text: "#fde68a",
};

const MYTH_BUST: ColorProfile = ColorProfile {
    background: "#3b1f5c",
    accent: "#a78bfa",
    tag_background: "#2c1547",
    tag_text: "#ddd6fe",
};

const CLOSING: ColorProfile = ColorProfile {
    background: "#2a2a3a",
    accent: "#f472b6",
    tag_background: "#231f30",
    tag_text: "#fbcfe8",
};

/// Neutral dark stop in the middle of the background gradient.
pub const NEUTRAL_DARK: &str = "#111118";

impl ColorProfile {
    /// Profile for a category.
    #[must_use]
    pub fn for_category(category: Category) -> &'static Self {
        match category {
            Category::Breaking => &BREAKING,
            Category::Brief => &BASELINE_PROFILE,
            Category::Tool => &TOOL,
            Category::Tip => &TIP,
            Category::MythBust => &MYTH_BUST,
            Category::Closing => &CLOSING,
        }
    }

    /// Profile for a raw category key; unknown or missing keys get the
    /// baseline profile.
    #[must_use]
    pub fn resolve(raw: Option<&str>) -> &'static Self {
        Self::for_category(Category::resolve(raw))
    }
}
