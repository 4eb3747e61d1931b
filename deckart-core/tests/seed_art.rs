//! Integration tests for the seed art engine.
//!
//! Covers determinism across calls, category sensitivity, the fallback
//! slot, and pattern bounds over a sweep of titles.

use deckart_core::{
    generate, generate_for_card, generate_svg, palette_for_seed, seed_from, Artwork,
    ArtworkSlot, Card, PatternKind, PALETTES,
};

// ==========================================================================
// Determinism
// ==========================================================================

#[test]
fn test_generate_twice_is_byte_identical() {
    let first = generate("Test Title", "brief").to_svg();
    let second = generate("Test Title", "brief").to_svg();
    assert_eq!(first.as_bytes(), second.as_bytes());
}

#[test]
fn test_other_category_is_different_but_stable() {
    let brief = generate("Test Title", "brief").to_svg();
    let tool_a = generate("Test Title", "tool").to_svg();
    let tool_b = generate("Test Title", "tool").to_svg();
    assert_ne!(brief, tool_a);
    assert_eq!(tool_a, tool_b);
}

#[test]
fn test_card_and_pair_agree() {
    let card = Card::new("Quantum chips ship", "Body.", "breaking");
    assert_eq!(
        generate_for_card(&card).to_svg(),
        generate("Quantum chips ship", "breaking").to_svg()
    );
}

#[test]
fn test_unknown_category_still_generates() {
    let svg = generate_svg("Weird", Some("not-a-category"));
    assert!(svg.starts_with("<svg"));
    assert_eq!(svg, generate_svg("Weird", Some("not-a-category")));
}

// ==========================================================================
// Selection rules
// ==========================================================================

#[test]
fn test_palette_follows_seed() {
    for i in 0..200 {
        let title = format!("Card number {i}");
        let scene = generate(&title, "tip");
        let seed = seed_from(&title, "tip");
        assert_eq!(scene.seed, seed);
        let (index, palette) = palette_for_seed(seed);
        assert_eq!(scene.palette_index, index);
        assert_eq!(scene.palette(), palette);
        assert_eq!(index, seed as usize % PALETTES.len());
    }
}

#[test]
fn test_layers_follow_seed() {
    for i in 0..200 {
        let scene = generate(&format!("Layered {i}"), "closing");
        let seed = scene.seed as usize;
        assert_eq!(scene.layers[0].kind, PatternKind::from_index(seed % 6));
        if let Some(second) = scene.layers.get(1) {
            assert_eq!(second.kind, PatternKind::from_index((seed + 3) % 6));
        }
    }
}

#[test]
fn test_pattern_bounds_over_sweep() {
    for i in 0..500 {
        let scene = generate(&format!("Sweep {i}"), "brief");
        for layer in &scene.layers {
            assert!(
                layer.kind.primitive_range().contains(&layer.primitives.len()),
                "{} emitted {} primitives",
                layer.kind,
                layer.primitives.len()
            );
        }
    }
}

// ==========================================================================
// Known answers
// ==========================================================================

/// 64-bit FNV-1a, enough to pin markup without embedding it.
fn fnv1a(bytes: &[u8]) -> u64 {
    bytes.iter().fold(0xcbf2_9ce4_8422_2325, |hash, &b| {
        (hash ^ u64::from(b)).wrapping_mul(0x0100_0000_01b3)
    })
}

struct KnownScene {
    title: &'static str,
    category: &'static str,
    seed: u32,
    palette: usize,
    layers: &'static [(PatternKind, usize)],
    angle: f64,
    svg_len: usize,
    svg_hash: u64,
}

const KNOWN_SCENES: [KnownScene; 8] = [
    KnownScene {
        title: "Test Title",
        category: "brief",
        seed: 474_450_576,
        palette: 0,
        layers: &[(PatternKind::Blobs, 4)],
        angle: 163.428_798_209_343_85,
        svg_len: 690,
        svg_hash: 0x4018_a56e_55f8_960a,
    },
    KnownScene {
        title: "Test Title",
        category: "tool",
        seed: 1_538_791_966,
        palette: 6,
        layers: &[(PatternKind::Arcs, 5)],
        angle: 309.522_728_146_540_66,
        svg_len: 1124,
        svg_hash: 0xee00_2555_408a_b79e,
    },
    KnownScene {
        title: "",
        category: "",
        seed: 0,
        palette: 0,
        layers: &[(PatternKind::Blobs, 5), (PatternKind::DotGrid, 112)],
        angle: 298.384_116_085_603_9,
        svg_len: 8728,
        svg_hash: 0xccfa_66a4_7695_ece8,
    },
    KnownScene {
        title: "Morning brief",
        category: "brief",
        seed: 1_232_513_476,
        palette: 4,
        layers: &[(PatternKind::Arcs, 4)],
        angle: 68.735_425_703_912_44,
        svg_len: 980,
        svg_hash: 0x1ba0_18f9_70c7_342f,
    },
    KnownScene {
        title: "Myth: goldfish memory",
        category: "myth-bust",
        seed: 677_373_854,
        palette: 6,
        layers: &[(PatternKind::Waves, 5)],
        angle: 292.369_145_017_461_05,
        svg_len: 3249,
        svg_hash: 0xf841_2bb8_37d5_401d,
    },
    KnownScene {
        title: "Closing bell",
        category: "closing",
        seed: 661_481_657,
        palette: 1,
        layers: &[(PatternKind::Rings, 8), (PatternKind::Waves, 5)],
        angle: 214.890_014_803_865_94,
        svg_len: 4378,
        svg_hash: 0xed98_2a83_a694_9456,
    },
    KnownScene {
        title: "Hello",
        category: "tip",
        seed: 728_005_975,
        palette: 7,
        layers: &[(PatternKind::Geometric, 6), (PatternKind::Arcs, 3)],
        angle: 145.926_323_389_565_88,
        svg_len: 1607,
        svg_hash: 0xef67_6e9a_a549_2be8,
    },
    KnownScene {
        title: "Daily ",
        category: "brief",
        seed: 55_882_861,
        palette: 5,
        layers: &[(PatternKind::Geometric, 7)],
        angle: 294.854_857_246_256_3,
        svg_len: 1286,
        svg_hash: 0x5fbf_b17a_edc7_62e8,
    },
];

#[test]
fn test_known_scenes() {
    for known in &KNOWN_SCENES {
        let scene = generate(known.title, known.category);
        let label = format!("{:?}/{}", known.title, known.category);

        assert_eq!(scene.seed, known.seed, "{label}");
        assert_eq!(scene.palette_index, known.palette, "{label}");
        let layers: Vec<_> = scene
            .layers
            .iter()
            .map(|l| (l.kind, l.primitives.len()))
            .collect();
        assert_eq!(layers, known.layers, "{label}");
        assert!((scene.gradient.angle - known.angle).abs() < 1e-9, "{label}");

        let svg = scene.to_svg();
        assert_eq!(svg.len(), known.svg_len, "{label}");
        assert_eq!(fnv1a(svg.as_bytes()), known.svg_hash, "{label}");
    }
}

#[test]
fn test_known_markup_for_test_title() {
    let expected = concat!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 400 240\" preserveAspectRatio=\"xMidYMid slice\" width=\"100%\" height=\"100%\">",
        "<defs><linearGradient id=\"deckart-bg-474450576\" gradientTransform=\"rotate(163.43 0.5 0.5)\">",
        "<stop offset=\"0%\" stop-color=\"#ff6b35\"/><stop offset=\"100%\" stop-color=\"#f7c59f\"/></linearGradient></defs>",
        "<rect width=\"400\" height=\"240\" fill=\"url(#deckart-bg-474450576)\"/>",
        "<g>",
        "<circle cx=\"137.64\" cy=\"65.65\" r=\"95.82\" fill=\"#ff6b35\" opacity=\"0.34\"/>",
        "<circle cx=\"377.70\" cy=\"5.74\" r=\"110.08\" fill=\"#efefd0\" opacity=\"0.57\"/>",
        "<circle cx=\"39.62\" cy=\"180.79\" r=\"86.94\" fill=\"#1a659e\" opacity=\"0.55\"/>",
        "<circle cx=\"352.81\" cy=\"83.54\" r=\"54.61\" fill=\"#ff6b35\" opacity=\"0.59\"/>",
        "</g></svg>",
    );
    assert_eq!(generate_svg("Test Title", Some("brief")), expected);
}

// ==========================================================================
// Display fallback
// ==========================================================================

#[test]
fn test_fallback_matches_generated_art() {
    let card = Card::new("Broken image", "", "tool").with_image("https://cdn.invalid/x.png");
    let mut slot = ArtworkSlot::for_card(&card);
    assert!(matches!(slot.current(), Artwork::External(_)));

    let fallback = slot.on_image_error().map(str::to_owned);
    assert_eq!(fallback, Some(generate("Broken image", "tool").to_svg()));
    assert!(slot.on_image_error().is_none());
}
