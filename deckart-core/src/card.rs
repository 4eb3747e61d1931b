//! Card records and content categories.

use serde::{Deserialize, Serialize};

use crate::error::{CardError, CardResult};

/// Category key used when a card has none.
pub const DEFAULT_CATEGORY: &str = "brief";

/// Kinds of card content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    /// Breaking news.
    Breaking,
    /// Short news brief.
    #[default]
    Brief,
    /// Tool spotlight.
    Tool,
    /// Practical tip.
    Tip,
    /// Myth debunked.
    MythBust,
    /// End-of-deck wrap-up.
    Closing,
}

impl Category {
    /// All categories.
    pub const ALL: [Self; 6] = [
        Self::Breaking,
        Self::Brief,
        Self::Tool,
        Self::Tip,
        Self::MythBust,
        Self::Closing,
    ];

    /// Parse a category key, case-insensitively.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        let key = key.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.key().eq_ignore_ascii_case(key))
    }

    /// Resolve an optional raw key, falling back to the default category.
    #[must_use]
    pub fn resolve(raw: Option<&str>) -> Self {
        match raw {
            None => Self::default(),
            Some(key) => Self::from_key(key).unwrap_or_else(|| {
                tracing::warn!(category = key, "unrecognized category, using default");
                Self::default()
            }),
        }
    }

    /// Kebab-case key.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Breaking => "breaking",
            Self::Brief => "brief",
            Self::Tool => "tool",
            Self::Tip => "tip",
            Self::MythBust => "myth-bust",
            Self::Closing => "closing",
        }
    }

    /// Emoji shown when the card supplies none.
    #[must_use]
    pub const fn default_emoji(self) -> &'static str {
        match self {
            Self::Breaking => "\u{26A1}",
            Self::Brief => "\u{1F4F0}",
            Self::Tool => "\u{1F6E0}",
            Self::Tip => "\u{1F4A1}",
            Self::MythBust => "\u{1F50D}",
            Self::Closing => "\u{1F44B}",
        }
    }

    /// Label shown when the card supplies none.
    #[must_use]
    pub const fn default_label(self) -> &'static str {
        match self {
            Self::Breaking => "Breaking",
            Self::Brief => "Brief",
            Self::Tool => "Tool",
            Self::Tip => "Tip",
            Self::MythBust => "Myth Bust",
            Self::Closing => "That's a wrap",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// One card of the daily deck.
///
/// `category` stays as raw text: the seed hashes exactly what the feed
/// sent, while display code resolves it through [`Category::resolve`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    /// Headline; empty is allowed.
    #[serde(default)]
    pub title: String,
    /// Body text, paragraphs separated by a blank line.
    #[serde(default)]
    pub body: String,
    /// Raw category key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Tag emoji.
    #[serde(default)]
    pub emoji: String,
    /// Tag label.
    #[serde(default)]
    pub label: String,
    /// Attribution.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_name: Option<String>,
    /// Externally supplied illustration URI.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Card {
    /// Create a card with a title, body and category key.
    #[must_use]
    pub fn new(title: impl Into<String>, body: impl Into<String>, category: &str) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            category: Some(category.to_string()),
            ..Self::default()
        }
    }

    /// Set the source attribution.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source_name = Some(source.into());
        self
    }

    /// Set the tag emoji and label.
    #[must_use]
    pub fn with_tag(mut self, emoji: impl Into<String>, label: impl Into<String>) -> Self {
        self.emoji = emoji.into();
        self.label = label.into();
        self
    }

    /// Set the external illustration.
    #[must_use]
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// Raw category key used for seeding, or [`DEFAULT_CATEGORY`].
    #[must_use]
    pub fn category_key(&self) -> &str {
        self.category.as_deref().unwrap_or(DEFAULT_CATEGORY)
    }

    /// Resolved display category.
    #[must_use]
    pub fn category(&self) -> Category {
        Category::resolve(self.category.as_deref())
    }

    /// Tag text: emoji and label, each defaulted from the category.
    #[must_use]
    pub fn tag_text(&self) -> String {
        let category = self.category();
        let emoji = match self.emoji.trim() {
            "" => category.default_emoji(),
            e => e,
        };
        let label = match self.label.trim() {
            "" => category.default_label(),
            l => l,
        };
        format!("{emoji} {label}")
    }

    /// Non-empty, trimmed source attribution.
    #[must_use]
    pub fn source(&self) -> Option<&str> {
        self.source_name
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    /// Parse a card from JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if deserialization fails.
    pub fn from_json(json: &str) -> CardResult<Self> {
        serde_json::from_str(json).map_err(CardError::Serialization)
    }

    /// Serialize the card to JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> CardResult<String> {
        serde_json::to_string(self).map_err(CardError::Serialization)
    }
}
