//! Deterministic random number generation.
//!
//! The whole match draws from a single linear congruential stream whose
//! cursor is stored in [`GameState`](crate::state::GameState). Board
//! generation consumes the first values and item drops continue from where it
//! stopped, so a match is fully reproducible from its initial seed plus the
//! command history.
//!
//! # Determinism
//!
//! The stream is never forked or reseeded. Every draw advances the one cursor.

/// 32-bit linear congruential generator (Numerical Recipes constants).
///
/// `seed' = (seed * 1664525 + 1013904223) mod 2^32`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LcgRng {
    seed: u32,
}

impl LcgRng {
    const MULTIPLIER: u32 = 1_664_525;
    const INCREMENT: u32 = 1_013_904_223;
    const MODULUS: f64 = 4_294_967_296.0;

    pub const fn new(seed: u32) -> Self {
        Self { seed }
    }

    /// Current cursor. Feeding it back into [`LcgRng::new`] resumes the stream.
    pub const fn seed(&self) -> u32 {
        self.seed
    }

    /// Advances a raw seed by one step.
    #[inline]
    pub const fn next_seed(seed: u32) -> u32 {
        seed.wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    /// Pure form of [`LcgRng::next_value`]: returns the value in `[0, 1)` and
    /// the advanced seed.
    #[inline]
    pub fn value_from(seed: u32) -> (f64, u32) {
        let next = Self::next_seed(seed);
        (f64::from(next) / Self::MODULUS, next)
    }

    /// Draws the next value in `[0, 1)` and advances the cursor.
    pub fn next_value(&mut self) -> f64 {
        let (value, next) = Self::value_from(self.seed);
        self.seed = next;
        value
    }
}
