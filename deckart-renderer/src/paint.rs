//! Paint a laid-out card as SVG.
//!
//! The SVG is an intermediate for the rasterizer; it carries no external
//! references.

use std::fmt::Write;

use crate::config::{RenderConfig, TextStyle};
use crate::layout::CardLayout;
use crate::profile::{ColorProfile, NEUTRAL_DARK};

const TITLE_COLOR: &str = "#ffffff";
const BODY_COLOR: &str = "#e5e7eb";
const CARD_FILL: &str = "#ffffff";

/// Paint a card layout into an SVG document sized to the canvas.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn paint_card_svg(layout: &CardLayout, profile: &ColorProfile, config: &RenderConfig) -> String {
    let (w, h) = (config.width as f32, config.height as f32);
    let family = escape_xml(&config.font_family_attr());

    let card_x = config.card_margin;
    let card_y = layout.top;
    let card_w = config.card_width();
    let text_x = card_x + config.card_padding_x;
    let radius = config.corner_radius;

    let mut svg = String::with_capacity(8192);
    let _ = write!(
        svg,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{}\" height=\"{}\" viewBox=\"0 0 {w} {h}\">",
        config.width, config.height,
    );

    // Background: vertical gradient plus a radial accent glow near the top.
    let _ = write!(
        svg,
        "<defs><linearGradient id=\"bg\" x1=\"0\" y1=\"0\" x2=\"0\" y2=\"1\"><stop offset=\"0\" stop-color=\"{}\"/><stop offset=\"0.55\" stop-color=\"{NEUTRAL_DARK}\"/><stop offset=\"1\" stop-color=\"#000000\"/></linearGradient>",
        profile.background,
    );
    let (glow_x, glow_y, glow_r) = (w / 2.0, h * 0.14, w * 0.7);
    let _ = write!(
        svg,
        "<radialGradient id=\"glow\" cx=\"{glow_x}\" cy=\"{glow_y}\" r=\"{glow_r}\" gradientUnits=\"userSpaceOnUse\"><stop offset=\"0\" stop-color=\"{0}\" stop-opacity=\"0.35\"/><stop offset=\"1\" stop-color=\"{0}\" stop-opacity=\"0\"/></radialGradient></defs>",
        profile.accent,
    );
    let _ = write!(svg, "<rect width=\"{w}\" height=\"{h}\" fill=\"url(#bg)\"/>");
    let _ = write!(svg, "<rect width=\"{w}\" height=\"{h}\" fill=\"url(#glow)\"/>");

    // Card body, now that its height is known.
    let _ = write!(
        svg,
        "<rect x=\"{card_x}\" y=\"{card_y}\" width=\"{card_w}\" height=\"{}\" rx=\"{radius}\" fill=\"{CARD_FILL}\" fill-opacity=\"0.06\" stroke=\"{CARD_FILL}\" stroke-opacity=\"0.12\" stroke-width=\"2\"/>",
        layout.height,
    );

    // Accent bar inset by the corner radius so it sits on the flat edge.
    let bar_h = config.accent_bar_height;
    let _ = write!(
        svg,
        "<rect x=\"{}\" y=\"{card_y}\" width=\"{}\" height=\"{bar_h}\" rx=\"{}\" fill=\"{}\"/>",
        card_x + radius,
        (card_w - 2.0 * radius).max(0.0),
        bar_h / 2.0,
        profile.accent,
    );

    push_text(
        &mut svg,
        text_x,
        card_y + layout.brand.baseline,
        &config.brand,
        &family,
        profile.accent,
        &layout.brand.text,
        " letter-spacing=\"4\"",
    );

    let tag = &layout.tag;
    let _ = write!(
        svg,
        "<rect x=\"{text_x}\" y=\"{}\" width=\"{}\" height=\"{}\" rx=\"{}\" fill=\"{}\"/>",
        card_y + tag.top,
        tag.width,
        tag.height,
        tag.height / 2.0,
        profile.tag_background,
    );
    push_text(
        &mut svg,
        text_x + config.tag_padding_x,
        card_y + tag.baseline,
        &config.tag,
        &family,
        profile.tag_text,
        &tag.text,
        "",
    );

    for line in &layout.title {
        push_text(
            &mut svg,
            text_x,
            card_y + line.baseline,
            &config.title,
            &family,
            TITLE_COLOR,
            &line.text,
            "",
        );
    }

    for placed in &layout.body {
        if let Some(text) = placed.line.text() {
            push_text(
                &mut svg,
                text_x,
                card_y + placed.baseline,
                &config.body,
                &family,
                BODY_COLOR,
                text,
                "",
            );
        }
    }

    if let Some(source) = &layout.source {
        push_text(
            &mut svg,
            text_x,
            card_y + source.baseline,
            &config.source,
            &family,
            profile.accent,
            &source.text,
            "",
        );
    }

    push_text(
        &mut svg,
        w / 2.0,
        h - config.footer_offset,
        &config.footer,
        &family,
        TITLE_COLOR,
        &config.footer_text,
        " text-anchor=\"middle\" fill-opacity=\"0.55\"",
    );

    svg.push_str("</svg>");
    svg
}

#[allow(clippy::too_many_arguments)]
fn push_text(
    svg: &mut String,
    x: f32,
    y: f32,
    style: &TextStyle,
    family: &str,
    fill: &str,
    text: &str,
    extra: &str,
) {
    let _ = write!(
        svg,
        "<text x=\"{x}\" y=\"{y}\" font-family=\"{family}\" font-size=\"{}\" font-weight=\"{}\" fill=\"{fill}\"{extra}>{}</text>",
        style.font.size,
        style.font.weight.css(),
        escape_xml(text),
    );
}

/// Escape special XML characters.
fn escape_xml(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
