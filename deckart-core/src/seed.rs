//! Seed hashing and the seeded pseudo-random stream.
//!
//! Both recurrences are fixed: cards seeded by earlier releases must keep
//! their art, so neither may be swapped for a different generator.

/// Park–Miller modulus (2^31 - 1).
const MODULUS: u64 = 2_147_483_647;

/// Park–Miller multiplier.
const MULTIPLIER: u64 = 16_807;

/// Hash a card's text identity into its seed.
///
/// Runs `h = h * 31 + unit` over the UTF-16 code units of
/// `title + category`, wrapping in signed 32-bit space, and returns the
/// absolute value. `i32::MIN` maps to `2^31`, hence the `u32` result.
#[must_use]
pub fn seed_from(title: &str, category: &str) -> u32 {
    let hash = title
        .encode_utf16()
        .chain(category.encode_utf16())
        .fold(0_i32, |h, unit| h.wrapping_mul(31).wrapping_add(i32::from(unit)));
    hash.unsigned_abs()
}

/// Minimal-standard linear congruential stream seeded from a card seed.
///
/// Each `generate` call owns its own stream; streams are never shared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedStream {
    state: u64,
}

impl SeedStream {
    /// Create a stream from a seed.
    ///
    /// A state of zero would stick at zero forever, so it is moved to
    /// `MODULUS - 1` the same way seeds at or below zero always have been.
    #[must_use]
    pub fn new(seed: u32) -> Self {
        let mut state = u64::from(seed) % MODULUS;
        if state == 0 {
            state = MODULUS - 1;
        }
        Self { state }
    }

    /// Advance the stream and return a value in `[0, 1)`.
    #[allow(clippy::cast_precision_loss)]
    pub fn next_f64(&mut self) -> f64 {
        self.state = self.state * MULTIPLIER % MODULUS;
        (self.state - 1) as f64 / (MODULUS - 1) as f64
    }

    /// Draw a value in `[min, max)`.
    pub fn range(&mut self, min: f64, max: f64) -> f64 {
        min + self.next_f64() * (max - min)
    }

    /// Draw an integer in `min..=max`.
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    pub fn int_inclusive(&mut self, min: usize, max: usize) -> usize {
        let span = (max - min + 1) as f64;
        min + ((self.next_f64() * span) as usize).min(max - min)
    }

    /// Draw an index in `0..len`. `len` must be non-zero.
    pub fn index(&mut self, len: usize) -> usize {
        self.int_inclusive(0, len.saturating_sub(1))
    }
}
