//! Card text layout.
//!
//! Rows are stacked top to bottom with a running cursor measured from the
//! card's top edge. The card's height is whatever the cursor reaches plus
//! bottom padding, and only then is the card placed on the canvas.

use deckart_core::Card;

use crate::config::{RenderConfig, TextStyle};
use crate::measure::TextMeasurer;
use crate::wrap::{ellipsize, flow_body, wrap_words, BodyLine};

/// Cap height as a fraction of font size, for vertical centering.
const CAP_HEIGHT: f32 = 0.72;

/// A single painted line. `baseline` is relative to the card top.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedLine {
    /// Text.
    pub text: String,
    /// Baseline offset from the card top.
    pub baseline: f32,
}

/// A body line with its baseline.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedBodyLine {
    /// Text or paragraph gap.
    pub line: BodyLine,
    /// Baseline offset from the card top.
    pub baseline: f32,
}

/// The tag pill, sized to its own text.
#[derive(Debug, Clone, PartialEq)]
pub struct TagPill {
    /// Emoji and label.
    pub text: String,
    /// Top offset from the card top.
    pub top: f32,
    /// Measured text width plus horizontal padding.
    pub width: f32,
    /// Pill height (one tag line).
    pub height: f32,
    /// Text baseline offset from the card top.
    pub baseline: f32,
}

/// Computed layout of one card.
#[derive(Debug, Clone, PartialEq)]
pub struct CardLayout {
    /// Brand header row.
    pub brand: PlacedLine,
    /// Tag pill.
    pub tag: TagPill,
    /// Wrapped title lines.
    pub title: Vec<PlacedLine>,
    /// Flowed body lines, truncated to the visible cap.
    pub body: Vec<PlacedBodyLine>,
    /// Source attribution.
    pub source: Option<PlacedLine>,
    /// Card height: content extent plus top and bottom padding.
    pub height: f32,
    /// Card top edge on the canvas.
    pub top: f32,
}

impl CardLayout {
    /// Painted body text, skipping paragraph gaps.
    pub fn body_text(&self) -> impl Iterator<Item = &str> {
        self.body.iter().filter_map(|l| l.line.text())
    }
}

fn baseline(row_top: f32, style: &TextStyle) -> f32 {
    row_top + (style.line_height + CAP_HEIGHT * style.font.size) / 2.0
}

/// Lay out a card without painting it.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn layout_card<M: TextMeasurer + ?Sized>(
    card: &Card,
    config: &RenderConfig,
    measurer: &M,
) -> CardLayout {
    let content_width = config.content_width();
    let mut cursor = config.padding_top;

    let brand = PlacedLine {
        text: config.brand_name.to_uppercase(),
        baseline: baseline(cursor, &config.brand),
    };
    cursor += config.brand.line_height + config.brand_gap;

    let tag_text = card.tag_text();
    let tag = TagPill {
        width: measurer.measure(&tag_text, &config.tag.font) + 2.0 * config.tag_padding_x,
        text: tag_text,
        top: cursor,
        height: config.tag.line_height,
        baseline: baseline(cursor, &config.tag),
    };
    cursor += config.tag.line_height + config.tag_gap;

    let mut title_lines = wrap_words(&card.title, content_width, &config.title.font, measurer);
    if title_lines.len() > config.max_title_lines {
        title_lines.truncate(config.max_title_lines);
        if let Some(last) = title_lines.last_mut() {
            *last = ellipsize(last, content_width, &config.title.font, measurer);
        }
    }

    let mut title = Vec::new();
    for text in title_lines {
        title.push(PlacedLine {
            text,
            baseline: baseline(cursor, &config.title),
        });
        cursor += config.title.line_height;
    }
    cursor += config.title_gap;

    let mut body = Vec::new();
    for line in flow_body(
        &card.body,
        content_width,
        &config.body.font,
        measurer,
        config.max_body_lines,
    ) {
        body.push(PlacedBodyLine {
            line,
            baseline: baseline(cursor, &config.body),
        });
        cursor += config.body.line_height;
    }

    let source = card.source().map(|name| {
        cursor += config.source_gap;
        let line = PlacedLine {
            text: name.to_string(),
            baseline: baseline(cursor, &config.source),
        };
        cursor += config.source.line_height;
        line
    });

    let height = cursor + config.padding_bottom;
    let top = ((config.height as f32 - height) / 2.0).max(config.min_card_top);

    tracing::debug!(
        title_lines = title.len(),
        body_lines = body.len(),
        height,
        top,
        "laid out card"
    );

    CardLayout {
        brand,
        tag,
        title,
        body,
        source,
        height,
        top,
    }
}
