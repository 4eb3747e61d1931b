//! # Deckart Core
//!
//! Card model and the deterministic seed art engine.
//!
//! ## Pipeline
//!
//! ```text
//! ┌──────────────┐   ┌────────────┐   ┌───────────────┐   ┌─────────────┐
//! │ title + cat  │──▶│ seed hash  │──▶│ Park–Miller   │──▶│ palette +   │
//! │ (any text)   │   │ (h*31 + c) │   │ stream [0, 1) │   │ 1–2 patterns│
//! └──────────────┘   └────────────┘   └───────────────┘   └──────┬──────┘
//!                                                                 ▼
//!                                                  Scene ──▶ inline SVG markup
//! ```
//!
//! Generation is total: any title (including the empty string) and any
//! category text produce a valid scene, and the same pair always produces
//! byte-identical markup.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod card;
pub mod error;
pub mod palette;
pub mod pattern;
pub mod scene;
pub mod seed;
pub mod slot;

pub use card::{Card, Category, DEFAULT_CATEGORY};
pub use error::{CardError, CardResult};
pub use palette::{palette_for_seed, Palette, PALETTES};
pub use pattern::{Paint, PatternKind, Primitive, Shape};
pub use scene::{generate, generate_for_card, generate_svg, Gradient, Layer, Scene};
pub use seed::{seed_from, SeedStream};
pub use slot::{Artwork, ArtworkSlot};

/// Deckart core version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
