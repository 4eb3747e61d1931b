//! Fixed palette library.

use serde::Serialize;

/// Number of colors in every palette.
pub const PALETTE_SIZE: usize = 5;

/// A named, ordered set of five colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Palette {
    /// Palette name.
    pub name: &'static str,
    /// Colors as `#rrggbb`.
    pub colors: [&'static str; PALETTE_SIZE],
}

impl Palette {
    /// Resolve a palette-indexed color, wrapping out-of-range indices.
    #[must_use]
    pub fn color(&self, index: usize) -> &'static str {
        self.colors[index % PALETTE_SIZE]
    }
}

/// All palettes, in selection order. Reordering changes existing art.
pub const PALETTES: [Palette; 8] = [
    Palette {
        name: "ember",
        colors: ["#ff6b35", "#f7c59f", "#efefd0", "#004e89", "#1a659e"],
    },
    Palette {
        name: "lagoon",
        colors: ["#0b3954", "#087e8b", "#bfd7ea", "#ff5a5f", "#c81d25"],
    },
    Palette {
        name: "orchard",
        colors: ["#2d6a4f", "#40916c", "#95d5b2", "#d8f3dc", "#f4a261"],
    },
    Palette {
        name: "dusk",
        colors: ["#22223b", "#4a4e69", "#9a8c98", "#c9ada7", "#f2e9e4"],
    },
    Palette {
        name: "neon",
        colors: ["#7400b8", "#5390d9", "#48bfe3", "#72efdd", "#f72585"],
    },
    Palette {
        name: "sandstone",
        colors: ["#6f1d1b", "#bb9457", "#432818", "#99582a", "#ffe6a7"],
    },
    Palette {
        name: "glacier",
        colors: ["#03045e", "#0077b6", "#00b4d8", "#90e0ef", "#caf0f8"],
    },
    Palette {
        name: "citrus",
        colors: ["#ffbe0b", "#fb5607", "#ff006e", "#8338ec", "#3a86ff"],
    },
];

/// Select the palette for a seed: `PALETTES[seed % PALETTES.len()]`.
#[must_use]
pub fn palette_for_seed(seed: u32) -> (usize, &'static Palette) {
    let index = seed as usize % PALETTES.len();
    (index, &PALETTES[index])
}
