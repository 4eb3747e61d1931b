//! The closed library of composition patterns.
//!
//! Every pattern is a pure function of the shared stream, the palette and
//! the viewport. Draw order inside each pattern is fixed: moving a single
//! draw shifts every value that follows it, including the next layer's.
//! Trigonometry goes through `libm` so coordinates match on every platform.

use std::f64::consts::{PI, TAU};
use std::fmt::Write;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::palette::Palette;
use crate::seed::SeedStream;

/// Geometry of one primitive, in viewport units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Shape {
    /// A circle.
    Circle {
        /// Center X.
        cx: f64,
        /// Center Y.
        cy: f64,
        /// Radius.
        r: f64,
    },
    /// An axis-aligned rectangle (rotation is carried on the primitive).
    Rect {
        /// Left edge.
        x: f64,
        /// Top edge.
        y: f64,
        /// Width.
        width: f64,
        /// Height.
        height: f64,
    },
    /// A triangle.
    Triangle {
        /// Vertices.
        points: [(f64, f64); 3],
    },
    /// An SVG path (`d` attribute).
    Path {
        /// Path data.
        d: String,
    },
    /// A straight line segment.
    Line {
        /// Start X.
        x1: f64,
        /// Start Y.
        y1: f64,
        /// End X.
        x2: f64,
        /// End Y.
        y2: f64,
    },
}

impl Shape {
    /// Center point used as the rotation origin.
    #[must_use]
    pub fn center(&self) -> (f64, f64) {
        match self {
            Self::Circle { cx, cy, .. } => (*cx, *cy),
            Self::Rect {
                x,
                y,
                width,
                height,
            } => (x + width / 2.0, y + height / 2.0),
            Self::Triangle { points } => (
                (points[0].0 + points[1].0 + points[2].0) / 3.0,
                (points[0].1 + points[1].1 + points[2].1) / 3.0,
            ),
            Self::Line { x1, y1, x2, y2 } => ((x1 + x2) / 2.0, (y1 + y2) / 2.0),
            Self::Path { .. } => (0.0, 0.0),
        }
    }
}

/// How a primitive is painted. Colors are palette indices.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum Paint {
    /// Solid fill.
    Fill {
        /// Palette index.
        color: usize,
    },
    /// Unfilled stroke.
    Stroke {
        /// Palette index.
        color: usize,
        /// Stroke width.
        width: f64,
    },
}

/// One vector primitive in a pattern layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Primitive {
    /// Geometry.
    pub shape: Shape,
    /// Fill or stroke.
    pub paint: Paint,
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
    /// Rotation in degrees about the shape's center.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotation: Option<f64>,
}

/// The six composition patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PatternKind {
    /// Large soft circles.
    Blobs,
    /// Rotated squares and triangles.
    Geometric,
    /// Sine-wave strokes over a horizon line.
    Waves,
    /// A jittered dot grid.
    DotGrid,
    /// Open arc strokes.
    Arcs,
    /// Clusters of concentric, slightly offset rings.
    Rings,
}

impl PatternKind {
    /// All patterns in selection order. Reordering changes existing art.
    pub const ALL: [Self; 6] = [
        Self::Blobs,
        Self::Geometric,
        Self::Waves,
        Self::DotGrid,
        Self::Arcs,
        Self::Rings,
    ];

    /// Pattern at `index % ALL.len()`.
    #[must_use]
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % Self::ALL.len()]
    }

    /// Inclusive bounds on the number of primitives this pattern emits
    /// in the standard 400×240 viewport.
    #[must_use]
    pub fn primitive_range(self) -> RangeInclusive<usize> {
        match self {
            Self::Blobs => 3..=5,
            Self::Geometric => 4..=7,
            Self::Waves => 4..=6,
            Self::DotGrid => 66..=180,
            Self::Arcs => 3..=6,
            Self::Rings => 6..=15,
        }
    }

    /// Generate this pattern's primitives from the shared stream.
    pub fn generate(
        self,
        stream: &mut SeedStream,
        palette: &Palette,
        width: f64,
        height: f64,
    ) -> Vec<Primitive> {
        let colors = palette.colors.len();
        match self {
            Self::Blobs => blobs(stream, colors, width, height),
            Self::Geometric => geometric(stream, colors, width, height),
            Self::Waves => waves(stream, colors, width, height),
            Self::DotGrid => dot_grid(stream, colors, width, height),
            Self::Arcs => arcs(stream, colors, width, height),
            Self::Rings => rings(stream, colors, width, height),
        }
    }
}

impl std::fmt::Display for PatternKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Blobs => "blobs",
            Self::Geometric => "geometric",
            Self::Waves => "waves",
            Self::DotGrid => "dot-grid",
            Self::Arcs => "arcs",
            Self::Rings => "rings",
        };
        f.write_str(name)
    }
}

fn blobs(stream: &mut SeedStream, colors: usize, width: f64, height: f64) -> Vec<Primitive> {
    let count = stream.int_inclusive(3, 5);
    (0..count)
        .map(|_| {
            let cx = stream.range(0.0, width);
            let cy = stream.range(0.0, height);
            let r = stream.range(height * 0.2, height * 0.5);
            let color = stream.index(colors);
            let opacity = stream.range(0.25, 0.6);
            Primitive {
                shape: Shape::Circle { cx, cy, r },
                paint: Paint::Fill { color },
                opacity,
                rotation: None,
            }
        })
        .collect()
}

fn geometric(stream: &mut SeedStream, colors: usize, width: f64, height: f64) -> Vec<Primitive> {
    let count = stream.int_inclusive(4, 7);
    (0..count)
        .map(|_| {
            let square = stream.next_f64() < 0.5;
            let x = stream.range(0.0, width);
            let y = stream.range(0.0, height);
            let size = stream.range(20.0, 80.0);
            let color = stream.index(colors);
            let opacity = stream.range(0.3, 0.7);
            let rotation = stream.range(0.0, 360.0);
            let shape = if square {
                Shape::Rect {
                    x: x - size / 2.0,
                    y: y - size / 2.0,
                    width: size,
                    height: size,
                }
            } else {
                let r = size / 2.0;
                Shape::Triangle {
                    points: [
                        (x, y - r),
                        (x + r * libm::cos(PI / 6.0), y + r * libm::sin(PI / 6.0)),
                        (x - r * libm::cos(PI / 6.0), y + r * libm::sin(PI / 6.0)),
                    ],
                }
            };
            Primitive {
                shape,
                paint: Paint::Fill { color },
                opacity,
                rotation: Some(rotation),
            }
        })
        .collect()
}

/// Horizontal sampling step for wave paths.
const WAVE_STEP: f64 = 10.0;

#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
fn waves(stream: &mut SeedStream, colors: usize, width: f64, height: f64) -> Vec<Primitive> {
    let count = stream.int_inclusive(3, 5);
    let mut primitives: Vec<Primitive> = (0..count)
        .map(|_| {
            let baseline = stream.range(height * 0.2, height * 0.8);
            let amplitude = stream.range(10.0, 40.0);
            let frequency = stream.range(1.0, 3.0);
            let phase = stream.range(0.0, TAU);
            let color = stream.index(colors);
            let opacity = stream.range(0.4, 0.8);
            let stroke = stream.range(2.0, 6.0);

            let steps = (width / WAVE_STEP).ceil() as usize;
            let mut d = String::with_capacity(steps * 16);
            for i in 0..=steps {
                let x = (i as f64 * WAVE_STEP).min(width);
                let y = baseline + amplitude * libm::sin(frequency * TAU * x / width + phase);
                let cmd = if i == 0 { 'M' } else { 'L' };
                let _ = write!(d, "{cmd}{x:.2},{y:.2} ");
            }
            d.truncate(d.trim_end().len());

            Primitive {
                shape: Shape::Path { d },
                paint: Paint::Stroke {
                    color,
                    width: stroke,
                },
                opacity,
                rotation: None,
            }
        })
        .collect();

    let horizon = stream.range(height * 0.55, height * 0.9);
    let color = stream.index(colors);
    primitives.push(Primitive {
        shape: Shape::Line {
            x1: 0.0,
            y1: horizon,
            x2: width,
            y2: horizon,
        },
        paint: Paint::Stroke { color, width: 1.5 },
        opacity: 0.5,
        rotation: None,
    });
    primitives
}

#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
fn dot_grid(stream: &mut SeedStream, colors: usize, width: f64, height: f64) -> Vec<Primitive> {
    let spacing = stream.range(22.0, 36.0);
    let cols = (width / spacing).floor() as usize;
    let rows = (height / spacing).floor() as usize;
    let jitter = spacing * 0.3;

    let mut primitives = Vec::with_capacity(cols * rows);
    for row in 0..rows {
        for col in 0..cols {
            let dx = stream.range(-jitter, jitter);
            let dy = stream.range(-jitter, jitter);
            let r = stream.range(2.0, 6.0);
            let color = stream.index(colors);
            let opacity = stream.range(0.3, 0.8);
            primitives.push(Primitive {
                shape: Shape::Circle {
                    cx: (col as f64 + 0.5) * spacing + dx,
                    cy: (row as f64 + 0.5) * spacing + dy,
                    r,
                },
                paint: Paint::Fill { color },
                opacity,
                rotation: None,
            });
        }
    }
    primitives
}

fn arcs(stream: &mut SeedStream, colors: usize, width: f64, height: f64) -> Vec<Primitive> {
    let count = stream.int_inclusive(3, 6);
    (0..count)
        .map(|_| {
            let cx = stream.range(0.0, width);
            let cy = stream.range(0.0, height);
            let r = stream.range(30.0, 120.0);
            let start = stream.range(0.0, TAU);
            let sweep = stream.range(PI / 3.0, PI * 1.5);
            let color = stream.index(colors);
            let stroke = stream.range(2.0, 8.0);
            let opacity = stream.range(0.4, 0.8);

            let end = start + sweep;
            let (x1, y1) = (cx + r * libm::cos(start), cy + r * libm::sin(start));
            let (x2, y2) = (cx + r * libm::cos(end), cy + r * libm::sin(end));
            let large_arc = u8::from(sweep > PI);
            let d = format!("M{x1:.2},{y1:.2} A{r:.2},{r:.2} 0 {large_arc},1 {x2:.2},{y2:.2}");

            Primitive {
                shape: Shape::Path { d },
                paint: Paint::Stroke {
                    color,
                    width: stroke,
                },
                opacity,
                rotation: None,
            }
        })
        .collect()
}

#[allow(clippy::cast_precision_loss)]
fn rings(stream: &mut SeedStream, colors: usize, width: f64, height: f64) -> Vec<Primitive> {
    let clusters = stream.int_inclusive(2, 3);
    let mut primitives = Vec::new();
    for _ in 0..clusters {
        let cx = stream.range(width * 0.1, width * 0.9);
        let cy = stream.range(height * 0.1, height * 0.9);
        let count = stream.int_inclusive(3, 5);
        let base = stream.range(10.0, 25.0);
        let step = stream.range(8.0, 18.0);
        let color = stream.index(colors);
        let stroke = stream.range(1.5, 4.0);
        for ring in 0..count {
            let dx = stream.range(-6.0, 6.0);
            let dy = stream.range(-6.0, 6.0);
            let opacity = stream.range(0.3, 0.7);
            primitives.push(Primitive {
                shape: Shape::Circle {
                    cx: cx + dx,
                    cy: cy + dy,
                    r: base + step * ring as f64,
                },
                paint: Paint::Stroke {
                    color,
                    width: stroke,
                },
                opacity,
                rotation: None,
            });
        }
    }
    primitives
}
