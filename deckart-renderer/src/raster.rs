//! Rasterization and encoding.
//!
//! Painted SVG goes through usvg → resvg → tiny-skia and is encoded as PNG
//! (or JPEG with alpha flattened onto black).

use std::sync::Arc;

use base64::Engine;

use crate::error::{RenderError, RenderResult};
use crate::fonts;

/// Encoded output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RasterFormat {
    /// PNG image.
    #[default]
    Png,
    /// JPEG image.
    #[cfg(feature = "jpeg")]
    Jpeg,
}

impl RasterFormat {
    /// File extension without the dot.
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Png => "png",
            #[cfg(feature = "jpeg")]
            Self::Jpeg => "jpg",
        }
    }

    /// MIME type.
    #[must_use]
    pub const fn mime_type(self) -> &'static str {
        match self {
            Self::Png => "image/png",
            #[cfg(feature = "jpeg")]
            Self::Jpeg => "image/jpeg",
        }
    }
}

/// An encoded card image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterImage {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Encoding.
    pub format: RasterFormat,
    /// Encoded bytes.
    pub bytes: Vec<u8>,
}

impl RasterImage {
    /// Encode as a `data:` URI.
    #[must_use]
    pub fn to_data_uri(&self) -> String {
        let encoded = base64::engine::general_purpose::STANDARD.encode(&self.bytes);
        format!("data:{};base64,{encoded}", self.format.mime_type())
    }
}

/// Suggested export filename: `<brand>-<category>.<ext>`.
#[must_use]
pub fn suggested_filename(brand: &str, category: &str, format: RasterFormat) -> String {
    let slug = |s: &str| -> String {
        s.chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() {
                    c.to_ascii_lowercase()
                } else {
                    '-'
                }
            })
            .collect::<String>()
            .trim_matches('-')
            .to_string()
    };
    format!("{}-{}.{}", slug(brand), slug(category), format.extension())
}

/// Rasterizes SVG documents against a shared font database.
#[derive(Debug, Clone)]
pub struct Rasterizer {
    fontdb: Arc<usvg::fontdb::Database>,
    families: Vec<String>,
    font_family: String,
}

impl Rasterizer {
    /// Create a rasterizer for a font family stack, optionally loading
    /// system fonts.
    ///
    /// With system fonts loaded, the stack is resolved against them so text
    /// always has an installed face to paint with.
    #[must_use]
    pub fn new(families: Vec<String>, load_system_fonts: bool) -> Self {
        let mut db = usvg::fontdb::Database::new();
        let resolved = if load_system_fonts {
            db.load_system_fonts();
            fonts::resolve_stack(&mut db, &families)
        } else {
            None
        };
        let font_family = resolved
            .or_else(|| families.first().cloned())
            .unwrap_or_else(|| "sans-serif".to_string());
        tracing::debug!(faces = db.len(), family = %font_family, "font database ready");
        Self {
            fontdb: Arc::new(db),
            families,
            font_family,
        }
    }

    /// The shared font database.
    #[must_use]
    pub fn fontdb(&self) -> &Arc<usvg::fontdb::Database> {
        &self.fontdb
    }

    /// The font family stack text is painted with.
    #[must_use]
    pub fn families(&self) -> &[String] {
        &self.families
    }

    /// Number of loaded font faces.
    #[must_use]
    pub fn face_count(&self) -> usize {
        self.fontdb.len()
    }

    /// Parse an SVG string into a usvg tree, with text resolved against the
    /// font database.
    ///
    /// # Errors
    ///
    /// Returns an error if the SVG cannot be parsed.
    pub fn tree(&self, svg: &str) -> RenderResult<usvg::Tree> {
        let mut opt = usvg::Options::default();
        opt.font_family.clone_from(&self.font_family);
        opt.fontdb = Arc::clone(&self.fontdb);
        usvg::Tree::from_str(svg, &opt).map_err(|e| RenderError::Svg(e.to_string()))
    }

    /// Rasterize an SVG string to a tiny-skia pixmap.
    ///
    /// # Errors
    ///
    /// Returns an error if the SVG cannot be parsed or the pixmap cannot be
    /// allocated.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn rasterize(&self, svg: &str) -> RenderResult<tiny_skia::Pixmap> {
        let tree = self.tree(svg)?;

        let px_w = tree.size().width().ceil() as u32;
        let px_h = tree.size().height().ceil() as u32;

        let mut pixmap = tiny_skia::Pixmap::new(px_w.max(1), px_h.max(1))
            .ok_or_else(|| RenderError::Pixmap(format!("{px_w}x{px_h}")))?;

        resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());
        Ok(pixmap)
    }

    /// Rasterize and encode an SVG string.
    ///
    /// # Errors
    ///
    /// Returns an error if rasterization or encoding fails.
    pub fn encode(&self, svg: &str, format: RasterFormat, jpeg_quality: u8) -> RenderResult<RasterImage> {
        let pixmap = self.rasterize(svg)?;
        let (width, height) = (pixmap.width(), pixmap.height());
        let bytes = match format {
            RasterFormat::Png => pixmap
                .encode_png()
                .map_err(|e| RenderError::Encode(format!("PNG encoding failed: {e}")))?,
            #[cfg(feature = "jpeg")]
            RasterFormat::Jpeg => encode_jpeg(&pixmap, jpeg_quality)?,
        };
        #[cfg(not(feature = "jpeg"))]
        let _ = jpeg_quality;

        Ok(RasterImage {
            width,
            height,
            format,
            bytes,
        })
    }
}

/// Encode a pixmap as JPEG, flattening alpha onto black.
#[cfg(feature = "jpeg")]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn encode_jpeg(pixmap: &tiny_skia::Pixmap, quality: u8) -> RenderResult<Vec<u8>> {
    use image::ImageEncoder;

    let (width, height) = (pixmap.width(), pixmap.height());
    let mut rgb = Vec::with_capacity((width * height * 3) as usize);
    for pixel in pixmap.pixels() {
        // Premultiplied, so flattening onto black is just dropping alpha.
        rgb.extend_from_slice(&[pixel.red(), pixel.green(), pixel.blue()]);
    }

    let mut buf = std::io::Cursor::new(Vec::new());
    let encoder = image::codecs::jpeg::JpegEncoder::new_with_quality(&mut buf, quality);
    encoder
        .write_image(&rgb, width, height, image::ExtendedColorType::Rgb8)
        .map_err(|e| RenderError::Encode(format!("JPEG encoding failed: {e}")))?;
    Ok(buf.into_inner())
}
