//! RNG module - deterministic randomness for scene setup
//!
//! A small LCG is enough here: the only consumer is [`crate::scene`], which
//! needs reproducible artifact glyphs, positions and colors for a given seed.

use crate::types::{Point, Rgb, ARTIFACT_GLYPH_MAX, ARTIFACT_GLYPH_MIN};

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// Maps through the high bits; the low bits of an LCG cycle with a short period.
    /// Returns 0 when `max` is 0.
    pub fn next_range(&mut self, max: u32) -> u32 {
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }

    /// Generate random value in range [lo, hi)
    pub fn next_between(&mut self, lo: i32, hi: i32) -> i32 {
        if hi <= lo {
            return lo;
        }
        let span = (hi as i64 - lo as i64) as u32;
        (lo as i64 + self.next_range(span) as i64) as i32
    }

    /// A printable ASCII glyph (`!` through `~`) as a one-char string.
    pub fn next_glyph(&mut self) -> String {
        let span = (ARTIFACT_GLYPH_MAX - ARTIFACT_GLYPH_MIN) as u32 + 1;
        let code = ARTIFACT_GLYPH_MIN + self.next_range(span) as u8;
        char::from(code).to_string()
    }

    /// A point in `[min_x, max_x) x [min_y, max_y)`.
    pub fn next_point(&mut self, min_x: i32, max_x: i32, min_y: i32, max_y: i32) -> Point {
        let x = self.next_between(min_x, max_x);
        let y = self.next_between(min_y, max_y);
        Point::new(x, y)
    }

    /// A color that stays readable on a black background.
    pub fn next_color(&mut self) -> Rgb {
        let mut channel = || 64 + self.next_range(192) as u8;
        Rgb::new(channel(), channel(), channel())
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        // Same seed should produce same sequence
        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_rng_different_seeds() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(54321);

        assert_ne!(rng1.next_u32(), rng2.next_u32());
    }

    #[test]
    fn test_zero_seed_is_not_degenerate() {
        let mut rng = SimpleRng::new(0);
        let a = rng.next_u32();
        let b = rng.next_u32();
        assert_ne!(a, b);
    }

    #[test]
    fn test_between_stays_in_range() {
        let mut rng = SimpleRng::new(7);
        for _ in 0..1000 {
            let v = rng.next_between(1, 60);
            assert!((1..60).contains(&v), "out of range: {}", v);
        }
        assert_eq!(rng.next_between(5, 5), 5);
        assert_eq!(rng.next_range(0), 0);
    }

    #[test]
    fn test_glyphs_are_printable_ascii() {
        let mut rng = SimpleRng::new(99);
        for _ in 0..500 {
            let glyph = rng.next_glyph();
            let ch = glyph.chars().next().unwrap();
            assert_eq!(glyph.chars().count(), 1);
            assert!(ch.is_ascii_graphic(), "not printable: {:?}", ch);
        }
    }

    #[test]
    fn test_colors_are_not_too_dark() {
        let mut rng = SimpleRng::new(3);
        for _ in 0..200 {
            let c = rng.next_color();
            assert!(c.r >= 64 && c.g >= 64 && c.b >= 64);
        }
    }
}
