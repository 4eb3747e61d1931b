//! # Deckart Renderer
//!
//! Renders a card as a branded 1080×1920 story image and hands it to a
//! share target or download sink.
//!
//! ## Pipeline
//!
//! ```text
//! ┌──────────┐   ┌───────────────┐   ┌────────────┐   ┌──────────────┐
//! │ Card     │──▶│ Layout        │──▶│ Paint SVG  │──▶│ usvg/resvg → │
//! │ + profile│   │ wrap, flow,   │   │ bg, card,  │   │ tiny-skia →  │
//! │          │   │ size the card │   │ text       │   │ PNG / JPEG   │
//! └──────────┘   └───────────────┘   └────────────┘   └──────────────┘
//! ```
//!
//! Text measurement sits behind [`TextMeasurer`]. The default
//! [`FontMetrics`] reads glyph advances from the same font database resvg
//! paints with; [`SansMetrics`] is the font-free fallback.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;
pub mod fonts;
pub mod layout;
pub mod measure;
pub mod paint;
pub mod profile;
pub mod raster;
pub mod share;
pub mod wrap;

pub use config::{RenderConfig, TextStyle};
pub use error::{RenderError, RenderResult};
pub use fonts::{resolve_stack, FontMetrics};
pub use layout::{layout_card, CardLayout, PlacedBodyLine, PlacedLine, TagPill};
pub use measure::{FixedAdvanceMeasurer, FontSpec, FontWeight, SansMetrics, TextMeasurer};
pub use profile::{ColorProfile, BASELINE_PROFILE};
pub use raster::{suggested_filename, RasterFormat, RasterImage, Rasterizer};
pub use share::{
    share_or_download, DirectoryDownloadSink, DownloadSink, ExportOutcome, NoShareTarget,
    ShareFile, ShareOutcome, ShareTarget,
};
pub use wrap::{ellipsize, flow_body, wrap_words, BodyLine, ELLIPSIS};

use std::sync::Arc;

use deckart_core::Card;

/// Renders cards to raster story images.
pub struct CardImageRenderer<M = FontMetrics> {
    config: RenderConfig,
    measurer: M,
    rasterizer: Rasterizer,
}

impl CardImageRenderer {
    /// Create a renderer that measures text with the faces it paints.
    ///
    /// Without loaded fonts every measurement falls back to [`SansMetrics`].
    #[must_use]
    pub fn new(config: RenderConfig) -> Self {
        let rasterizer = Rasterizer::new(config.font_stack(), config.load_system_fonts);
        let measurer = FontMetrics::new(Arc::clone(rasterizer.fontdb()), rasterizer.families());
        tracing::debug!(glyph_metrics = measurer.has_faces(), "text measurer ready");
        Self {
            config,
            measurer,
            rasterizer,
        }
    }

    /// Create a renderer with default configuration.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(RenderConfig::default())
    }
}

impl<M: TextMeasurer> CardImageRenderer<M> {
    /// Create a renderer with a custom text measurer.
    #[must_use]
    pub fn with_measurer(config: RenderConfig, measurer: M) -> Self {
        let rasterizer = Rasterizer::new(config.font_stack(), config.load_system_fonts);
        Self {
            config,
            measurer,
            rasterizer,
        }
    }

    /// Get the renderer configuration.
    #[must_use]
    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Get the rasterizer and its font database.
    #[must_use]
    pub fn rasterizer(&self) -> &Rasterizer {
        &self.rasterizer
    }

    /// Lay out a card without painting it.
    #[must_use]
    pub fn layout(&self, card: &Card) -> CardLayout {
        layout_card(card, &self.config, &self.measurer)
    }

    /// Lay out and paint a card as SVG.
    #[must_use]
    pub fn render_svg(&self, card: &Card) -> String {
        let profile = ColorProfile::resolve(card.category.as_deref());
        let layout = self.layout(card);
        paint::paint_card_svg(&layout, profile, &self.config)
    }

    /// Render a card to PNG.
    ///
    /// # Errors
    ///
    /// Returns an error if rasterization or encoding fails.
    pub fn render(&self, card: &Card) -> RenderResult<RasterImage> {
        self.render_as(card, RasterFormat::Png)
    }

    /// Render a card in the given format.
    ///
    /// # Errors
    ///
    /// Returns an error if rasterization or encoding fails.
    pub fn render_as(&self, card: &Card, format: RasterFormat) -> RenderResult<RasterImage> {
        let svg = self.render_svg(card);
        let image = self
            .rasterizer
            .encode(&svg, format, self.config.jpeg_quality)?;
        tracing::debug!(
            category = card.category_key(),
            bytes = image.bytes.len(),
            ?format,
            "rendered card image"
        );
        Ok(image)
    }

    /// Suggested filename for a card's export.
    #[must_use]
    pub fn filename_for(&self, card: &Card, format: RasterFormat) -> String {
        suggested_filename(&self.config.brand_name, card.category().key(), format)
    }

    /// Render a card and share it, or download it when the target cannot
    /// take files.
    ///
    /// # Errors
    ///
    /// Returns rendering errors, share errors other than cancellation, and
    /// download errors.
    pub async fn export_or_share(
        &self,
        card: &Card,
        target: &dyn ShareTarget,
        sink: &dyn DownloadSink,
    ) -> RenderResult<ExportOutcome> {
        let format = RasterFormat::Png;
        let image = self.render_as(card, format)?;
        let file = ShareFile::from_image(image, self.filename_for(card, format), card.title.clone());
        share_or_download(&file, target, sink).await
    }
}

impl Default for CardImageRenderer {
    fn default() -> Self {
        Self::with_defaults()
    }
}
