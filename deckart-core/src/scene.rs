//! Seeded scenes and their inline SVG markup.

use std::fmt::Write;

use serde::{Deserialize, Serialize};

use crate::card::{Card, DEFAULT_CATEGORY};
use crate::error::{CardError, CardResult};
use crate::palette::{palette_for_seed, Palette, PALETTES};
use crate::pattern::{Paint, PatternKind, Primitive, Shape};
use crate::seed::{seed_from, SeedStream};

/// Art viewport width.
pub const ART_WIDTH: f64 = 400.0;

/// Art viewport height.
pub const ART_HEIGHT: f64 = 240.0;

/// A second pattern is layered when the layering draw exceeds this.
const LAYER_THRESHOLD: f64 = 0.4;

/// Offset between the primary and secondary pattern indices.
const SECONDARY_OFFSET: usize = 3;

/// Background gradient.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Gradient {
    /// Palette index of the start color.
    pub from: usize,
    /// Palette index of the end color.
    pub to: usize,
    /// Rotation in degrees.
    pub angle: f64,
}

/// One pattern's output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layer {
    /// Which pattern produced the layer.
    pub kind: PatternKind,
    /// Primitives, in paint order.
    pub primitives: Vec<Primitive>,
}

/// A complete card illustration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    /// Seed the scene was built from.
    pub seed: u32,
    /// Viewport width.
    pub width: f64,
    /// Viewport height.
    pub height: f64,
    /// Index into [`PALETTES`].
    pub palette_index: usize,
    /// Background gradient.
    pub gradient: Gradient,
    /// One or two pattern layers, bottom first.
    pub layers: Vec<Layer>,
}

/// Build the scene for a title and category.
///
/// Total over all inputs: an empty title or category still yields a scene.
#[must_use]
pub fn generate(title: &str, category: &str) -> Scene {
    let seed = seed_from(title, category);
    let mut stream = SeedStream::new(seed);
    let (palette_index, palette) = palette_for_seed(seed);

    let pattern_count = PatternKind::ALL.len();
    let primary = PatternKind::from_index(seed as usize % pattern_count);
    let secondary = PatternKind::from_index((seed as usize + SECONDARY_OFFSET) % pattern_count);
    let layered = stream.next_f64() > LAYER_THRESHOLD;

    let mut layers = vec![Layer {
        kind: primary,
        primitives: primary.generate(&mut stream, palette, ART_WIDTH, ART_HEIGHT),
    }];
    if layered {
        layers.push(Layer {
            kind: secondary,
            primitives: secondary.generate(&mut stream, palette, ART_WIDTH, ART_HEIGHT),
        });
    }

    let angle = stream.next_f64() * 360.0;

    for layer in &layers {
        tracing::trace!(kind = %layer.kind, primitives = layer.primitives.len(), "pattern layer");
    }
    tracing::debug!(
        seed,
        palette = palette.name,
        %primary,
        layered,
        "generated scene"
    );

    Scene {
        seed,
        width: ART_WIDTH,
        height: ART_HEIGHT,
        palette_index,
        gradient: Gradient {
            from: 0,
            to: 1,
            angle,
        },
        layers,
    }
}

/// Build the scene for a card, using the default category key when the
/// card has none.
#[must_use]
pub fn generate_for_card(card: &Card) -> Scene {
    generate(&card.title, card.category_key())
}

/// Build and serialize the scene for a title and category in one step.
///
/// `category` falls back to the default key when `None`.
#[must_use]
pub fn generate_svg(title: &str, category: Option<&str>) -> String {
    generate(title, category.unwrap_or(DEFAULT_CATEGORY)).to_svg()
}

impl Scene {
    /// The palette this scene paints with.
    #[must_use]
    pub fn palette(&self) -> &'static Palette {
        &PALETTES[self.palette_index % PALETTES.len()]
    }

    /// Total primitives across all layers.
    #[must_use]
    pub fn primitive_count(&self) -> usize {
        self.layers.iter().map(|l| l.primitives.len()).sum()
    }

    /// Serialize to self-contained inline SVG.
    ///
    /// The gradient id embeds the seed so several scenes can share one
    /// document.
    #[must_use]
    pub fn to_svg(&self) -> String {
        let palette = self.palette();
        let (w, h) = (self.width, self.height);
        let id = format!("deckart-bg-{}", self.seed);

        let mut svg = String::with_capacity(4096);
        let _ = write!(
            svg,
            "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 {w} {h}\" preserveAspectRatio=\"xMidYMid slice\" width=\"100%\" height=\"100%\">",
        );
        let _ = write!(
            svg,
            "<defs><linearGradient id=\"{id}\" gradientTransform=\"rotate({:.2} 0.5 0.5)\"><stop offset=\"0%\" stop-color=\"{}\"/><stop offset=\"100%\" stop-color=\"{}\"/></linearGradient></defs>",
            self.gradient.angle,
            palette.color(self.gradient.from),
            palette.color(self.gradient.to),
        );
        let _ = write!(
            svg,
            "<rect width=\"{w}\" height=\"{h}\" fill=\"url(#{id})\"/>",
        );

        for layer in &self.layers {
            svg.push_str("<g>");
            for primitive in &layer.primitives {
                render_primitive_svg(&mut svg, primitive, palette);
            }
            svg.push_str("</g>");
        }

        svg.push_str("</svg>");
        svg
    }

    /// Serialize the scene description to JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> CardResult<String> {
        serde_json::to_string(self).map_err(CardError::Serialization)
    }

    /// Deserialize a scene description from JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if deserialization fails.
    pub fn from_json(json: &str) -> CardResult<Self> {
        serde_json::from_str(json).map_err(CardError::Serialization)
    }
}

/// Render a single primitive to SVG.
fn render_primitive_svg(svg: &mut String, primitive: &Primitive, palette: &Palette) {
    let paint = match primitive.paint {
        Paint::Fill { color } => format!("fill=\"{}\"", palette.color(color)),
        Paint::Stroke { color, width } => format!(
            "fill=\"none\" stroke=\"{}\" stroke-width=\"{width:.2}\" stroke-linecap=\"round\"",
            palette.color(color),
        ),
    };
    let opacity = primitive.opacity;
    let transform = primitive
        .rotation
        .map(|deg| {
            let (cx, cy) = primitive.shape.center();
            format!(" transform=\"rotate({deg:.2} {cx:.2} {cy:.2})\"")
        })
        .unwrap_or_default();

    match &primitive.shape {
        Shape::Circle { cx, cy, r } => {
            let _ = write!(
                svg,
                "<circle cx=\"{cx:.2}\" cy=\"{cy:.2}\" r=\"{r:.2}\" {paint} opacity=\"{opacity:.2}\"{transform}/>",
            );
        }
        Shape::Rect {
            x,
            y,
            width,
            height,
        } => {
            let _ = write!(
                svg,
                "<rect x=\"{x:.2}\" y=\"{y:.2}\" width=\"{width:.2}\" height=\"{height:.2}\" {paint} opacity=\"{opacity:.2}\"{transform}/>",
            );
        }
        Shape::Triangle { points } => {
            let pts = points
                .iter()
                .map(|(x, y)| format!("{x:.2},{y:.2}"))
                .collect::<Vec<_>>()
                .join(" ");
            let _ = write!(
                svg,
                "<polygon points=\"{pts}\" {paint} opacity=\"{opacity:.2}\"{transform}/>",
            );
        }
        Shape::Path { d } => {
            let _ = write!(
                svg,
                "<path d=\"{}\" {paint} opacity=\"{opacity:.2}\"{transform}/>",
                escape_xml(d),
            );
        }
        Shape::Line { x1, y1, x2, y2 } => {
            let _ = write!(
                svg,
                "<line x1=\"{x1:.2}\" y1=\"{y1:.2}\" x2=\"{x2:.2}\" y2=\"{y2:.2}\" {paint} opacity=\"{opacity:.2}\"{transform}/>",
            );
        }
    }
}

/// Escape text for use in an attribute value.
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
