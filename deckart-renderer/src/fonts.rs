//! Font resolution and glyph-accurate text measurement.
//!
//! The rasterizer and [`FontMetrics`] share one font database and resolve
//! faces with the same query, so wrapped lines are measured with the face
//! resvg paints them in.

use std::sync::Arc;

use usvg::fontdb::{Database, Family, Query, Stretch, Style, Weight, ID};

use crate::measure::{FontSpec, FontWeight, SansMetrics, TextMeasurer};

/// Map a family name to a fontdb family, recognizing generic names.
fn family(name: &str) -> Family<'_> {
    match name.to_ascii_lowercase().as_str() {
        "serif" => Family::Serif,
        "sans-serif" => Family::SansSerif,
        "monospace" => Family::Monospace,
        "cursive" => Family::Cursive,
        "fantasy" => Family::Fantasy,
        _ => Family::Name(name),
    }
}

fn query_face(db: &Database, families: &[String], weight: FontWeight) -> Option<ID> {
    let families: Vec<Family<'_>> = families.iter().map(|f| family(f)).collect();
    db.query(&Query {
        families: &families,
        weight: Weight(weight.css()),
        stretch: Stretch::Normal,
        style: Style::Normal,
    })
}

/// Make sure the family stack resolves to an installed face.
///
/// fontdb maps generic families to fixed names ("Arial" for sans-serif).
/// When none of `families` resolves, the generic families in the stack are
/// pointed at an installed face, preferring a proportional sans. The stack
/// should end in a generic family, as [`crate::RenderConfig::font_stack`]
/// does. Returns the family name text will be set in, or `None` for an
/// empty database.
pub fn resolve_stack(db: &mut Database, families: &[String]) -> Option<String> {
    if db.is_empty() {
        tracing::warn!("font database is empty, text will not be painted");
        return None;
    }

    if let Some(id) = query_face(db, families, FontWeight::Regular) {
        return db.face(id).and_then(|f| f.families.first()).map(|(name, _)| name.clone());
    }

    let is_sans = |name: &str| {
        let lower = name.to_ascii_lowercase();
        lower.contains("sans") && !lower.contains("mono")
    };
    let installed = db
        .faces()
        .filter(|f| !f.monospaced)
        .filter_map(|f| f.families.first())
        .find(|(name, _)| is_sans(name))
        .or_else(|| db.faces().filter_map(|f| f.families.first()).next())
        .map(|(name, _)| name.clone())?;

    tracing::info!(
        requested = %families.join(", "),
        installed = %installed,
        "no requested font installed, using fallback"
    );
    for name in families {
        match name.to_ascii_lowercase().as_str() {
            "serif" => db.set_serif_family(installed.clone()),
            "sans-serif" => db.set_sans_serif_family(installed.clone()),
            "monospace" => db.set_monospace_family(installed.clone()),
            "cursive" => db.set_cursive_family(installed.clone()),
            "fantasy" => db.set_fantasy_family(installed.clone()),
            _ => {}
        }
    }
    Some(installed)
}

/// Measures text with real glyph advances from the font database.
///
/// Weights with no resolvable face, and characters missing from the face,
/// fall back to [`SansMetrics`].
#[derive(Debug, Clone)]
pub struct FontMetrics {
    fontdb: Arc<Database>,
    regular: Option<ID>,
    semi_bold: Option<ID>,
    bold: Option<ID>,
}

impl FontMetrics {
    /// Resolve one face per weight for `families` in `fontdb`.
    #[must_use]
    pub fn new(fontdb: Arc<Database>, families: &[String]) -> Self {
        let regular = query_face(&fontdb, families, FontWeight::Regular);
        let semi_bold = query_face(&fontdb, families, FontWeight::SemiBold);
        let bold = query_face(&fontdb, families, FontWeight::Bold);
        Self {
            fontdb,
            regular,
            semi_bold,
            bold,
        }
    }

    /// Whether any weight resolved to a real face.
    #[must_use]
    pub fn has_faces(&self) -> bool {
        self.regular.is_some() || self.semi_bold.is_some() || self.bold.is_some()
    }

    fn face_for(&self, weight: FontWeight) -> Option<ID> {
        match weight {
            FontWeight::Regular => self.regular,
            FontWeight::SemiBold => self.semi_bold,
            FontWeight::Bold => self.bold,
        }
    }
}

impl TextMeasurer for FontMetrics {
    fn measure(&self, text: &str, font: &FontSpec) -> f32 {
        let Some(id) = self.face_for(font.weight) else {
            return SansMetrics.measure(text, font);
        };

        self.fontdb
            .with_face_data(id, |data, index| {
                let face = ttf_parser::Face::parse(data, index).ok()?;
                let scale = font.size / f32::from(face.units_per_em());
                let mut buf = [0_u8; 4];
                let width = text
                    .chars()
                    .map(|c| {
                        face.glyph_index(c)
                            .and_then(|glyph| face.glyph_hor_advance(glyph))
                            .map_or_else(
                                || SansMetrics.measure(c.encode_utf8(&mut buf), font),
                                |advance| f32::from(advance) * scale,
                            )
                    })
                    .sum();
                Some(width)
            })
            .flatten()
            .unwrap_or_else(|| SansMetrics.measure(text, font))
    }
}
