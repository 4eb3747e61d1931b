//! Integration tests for card image rendering (deckart-renderer).
//!
//! Tests layout sizing, paragraph flow, truncation, category fallback,
//! raster output, and the export-or-share hand-off.

use deckart_core::Card;
use deckart_renderer::{
    BodyLine, CardImageRenderer, ColorProfile, DirectoryDownloadSink, ExportOutcome,
    FixedAdvanceMeasurer, NoShareTarget, RasterFormat, Rasterizer, RenderConfig,
    BASELINE_PROFILE, ELLIPSIS,
};

/// Renderer with a fixed-advance measurer and no system fonts, so runs are
/// identical on every host.
fn renderer() -> CardImageRenderer<FixedAdvanceMeasurer> {
    let config = RenderConfig {
        load_system_fonts: false,
        ..Default::default()
    };
    CardImageRenderer::with_measurer(config, FixedAdvanceMeasurer::default())
}

fn long_body(paragraphs: usize) -> String {
    (0..paragraphs)
        .map(|i| format!("Paragraph {i} talks about something worth knowing today."))
        .collect::<Vec<_>>()
        .join("\n\n")
}

// ==========================================================================
// Paragraph flow
// ==========================================================================

#[test]
fn test_two_paragraphs_separated_by_one_blank() {
    let card = Card::new("Title", "Para one.\n\nPara two.", "brief");
    let layout = renderer().layout(&card);

    let lines: Vec<_> = layout.body.iter().map(|l| l.line.clone()).collect();
    assert_eq!(
        lines,
        vec![
            BodyLine::Text("Para one.".to_string()),
            BodyLine::Blank,
            BodyLine::Text("Para two.".to_string()),
        ]
    );
    assert_eq!(layout.body_text().collect::<Vec<_>>(), ["Para one.", "Para two."]);
}

#[test]
fn test_body_truncated_to_cap() {
    let r = renderer();
    let card = Card::new("Title", long_body(40), "tip");
    let layout = r.layout(&card);
    assert_eq!(layout.body.len(), r.config().max_body_lines);

    let svg = r.render_svg(&card);
    assert!(svg.contains("Paragraph 0 "));
    assert!(!svg.contains("Paragraph 39 "));
}

#[test]
fn test_custom_cap() {
    let config = RenderConfig {
        load_system_fonts: false,
        max_body_lines: 4,
        ..Default::default()
    };
    let r = CardImageRenderer::with_measurer(config, FixedAdvanceMeasurer::default());
    let layout = r.layout(&Card::new("T", long_body(10), "tip"));
    assert_eq!(layout.body.len(), 4);
}

#[test]
fn test_cap_landing_on_gap_ends_with_text() {
    let config = RenderConfig {
        load_system_fonts: false,
        max_body_lines: 3,
        ..Default::default()
    };
    let r = CardImageRenderer::with_measurer(config, FixedAdvanceMeasurer::default());
    let layout = r.layout(&Card::new("T", long_body(10), "tip"));
    assert_eq!(layout.body.len(), 2);
    assert!(matches!(
        layout.body.last().map(|l| &l.line),
        Some(BodyLine::Text(_))
    ));
}

// ==========================================================================
// Card sizing
// ==========================================================================

#[test]
#[allow(clippy::cast_precision_loss)]
fn test_card_height_tracks_body_length() {
    let r = renderer();
    let config = r.config();
    let short = r.layout(&Card::new("Title", "Short.", "tip"));
    let longer = r.layout(&Card::new("Title", long_body(3), "tip"));

    let delta_lines = longer.body.len() as f32 - short.body.len() as f32;
    assert!(delta_lines > 0.0);
    assert!((longer.height - short.height - delta_lines * config.body.line_height).abs() < 1e-3);

    // Same input, same height.
    let again = r.layout(&Card::new("Title", long_body(3), "tip"));
    assert!((again.height - longer.height).abs() < f32::EPSILON);
}

#[test]
fn test_title_wraps_within_content_width() {
    let r = renderer();
    let title = "A considerably longer headline that cannot possibly fit on one line of the card";
    let layout = r.layout(&Card::new(title, "", "breaking"));
    assert!(layout.title.len() > 1);
    let rejoined: Vec<_> = layout.title.iter().map(|l| l.text.as_str()).collect();
    assert_eq!(rejoined.join(" "), title);
}

// ==========================================================================
// Category fallback and raster output
// ==========================================================================

#[test]
fn test_unknown_category_uses_baseline_and_renders() {
    let card = Card::new("Mystery", "Body.", "not-a-real-category");
    assert_eq!(
        ColorProfile::resolve(card.category.as_deref()),
        &BASELINE_PROFILE
    );

    let r = renderer();
    let svg = r.render_svg(&card);
    assert!(svg.contains(BASELINE_PROFILE.background));

    let image = r.render(&card).expect("render with unknown category");
    assert_eq!(&image.bytes[0..4], &[137, 80, 78, 71]);
    assert_eq!((image.width, image.height), (1080, 1920));
}

#[test]
fn test_data_uri_output() {
    let image = renderer()
        .render(&Card::new("Uri", "Body.", "tip"))
        .expect("render");
    assert!(image.to_data_uri().starts_with("data:image/png;base64,iVBORw0KGgo"));
}

#[cfg(feature = "jpeg")]
#[test]
fn test_jpeg_render() {
    let image = renderer()
        .render_as(&Card::new("Jpeg", "Body.", "closing"), RasterFormat::Jpeg)
        .expect("jpeg");
    assert_eq!(&image.bytes[0..2], &[0xFF, 0xD8]);
}

#[test]
fn test_filename_pattern() {
    let r = renderer();
    assert_eq!(
        r.filename_for(&Card::new("T", "B", "myth-bust"), RasterFormat::Png),
        "deckart-myth-bust.png"
    );
    assert_eq!(
        r.filename_for(&Card::new("T", "B", "unknown"), RasterFormat::Png),
        "deckart-brief.png"
    );
}

// ==========================================================================
// Painted text with system fonts
// ==========================================================================

/// Default renderer, or `None` on hosts without any installed fonts.
fn system_renderer() -> Option<CardImageRenderer> {
    let r = CardImageRenderer::new(RenderConfig::default());
    (r.rasterizer().face_count() > 0).then_some(r)
}

/// Text content and absolute bounds of every text node in the tree.
fn painted_text(group: &usvg::Group, out: &mut Vec<(String, usvg::Rect)>) {
    for node in group.children() {
        match node {
            usvg::Node::Group(g) => painted_text(g, out),
            usvg::Node::Text(t) => {
                let text = t.chunks().iter().map(|c| c.text()).collect::<String>();
                out.push((text, t.abs_bounding_box()));
            }
            _ => {}
        }
    }
}

#[test]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn test_system_fonts_paint_title_pixels() {
    let Some(r) = system_renderer() else {
        return;
    };
    let card = Card::new("Painted headline", "Body text that should be visible.", "tip");
    let svg = r.render_svg(&card);

    let tree = r.rasterizer().tree(&svg).expect("parse card svg");
    let mut texts = Vec::new();
    painted_text(tree.root(), &mut texts);
    // Brand, tag, title, body, and footer all resolved to a face.
    assert!(texts.len() >= 5, "only {} text nodes resolved", texts.len());

    let (_, bounds) = texts
        .iter()
        .find(|(text, _)| text == "Painted headline")
        .expect("title text node");

    let with_fonts = r.rasterizer().rasterize(&svg).expect("rasterize");
    let without_fonts = Rasterizer::new(r.rasterizer().families().to_vec(), false)
        .rasterize(&svg)
        .expect("rasterize without fonts");

    let mut changed = 0;
    for y in bounds.top().max(0.0) as u32..bounds.bottom() as u32 {
        for x in bounds.left().max(0.0) as u32..bounds.right() as u32 {
            if with_fonts.pixel(x, y) != without_fonts.pixel(x, y) {
                changed += 1;
            }
        }
    }
    assert!(changed > 100, "title painted only {changed} pixels");
}

#[test]
fn test_painted_lines_stay_within_content_width() {
    let Some(r) = system_renderer() else {
        return;
    };
    let config = r.config();
    let text_x = config.card_margin + config.card_padding_x;
    let right_edge = text_x + config.content_width();

    let title = "Wide glyphs like MMMM WWWW and mmmm wwww keep the measured width honest";
    let body = "Mostly wide words: maximum momentum, wonderful window, mammoth memory. "
        .repeat(8);
    let card = Card::new(title, body, "breaking").with_source("Wire service");
    let svg = r.render_svg(&card);

    let tree = r.rasterizer().tree(&svg).expect("parse card svg");
    let mut texts = Vec::new();
    painted_text(tree.root(), &mut texts);
    assert!(!texts.is_empty());

    for (text, bounds) in texts.iter().filter(|(t, _)| *t != config.footer_text) {
        assert!(
            bounds.right() <= right_edge + 8.0,
            "{text:?} ends at {} past {right_edge}",
            bounds.right()
        );
    }
}

#[test]
fn test_overlong_title_is_ellipsized() {
    let r = renderer();
    let title = "Headline ".repeat(60);
    let layout = r.layout(&Card::new(title.trim(), "", "brief"));
    assert_eq!(layout.title.len(), r.config().max_title_lines);
    assert!(layout
        .title
        .last()
        .is_some_and(|l| l.text.ends_with(ELLIPSIS)));
}

// ==========================================================================
// Export or share
// ==========================================================================

#[tokio::test]
async fn test_missing_share_capability_downloads() {
    let dir = tempfile::tempdir().expect("tempdir");
    let sink = DirectoryDownloadSink::new(dir.path());
    let card = Card::new("Share me", "Body.", "tool");

    let outcome = renderer()
        .export_or_share(&card, &NoShareTarget, &sink)
        .await
        .expect("download fallback is not an error");

    let expected = dir.path().join("deckart-tool.png");
    assert_eq!(
        outcome,
        ExportOutcome::Downloaded {
            location: expected.clone()
        }
    );
    let bytes = std::fs::read(expected).expect("downloaded file");
    assert_eq!(&bytes[0..4], &[137, 80, 78, 71]);
}
