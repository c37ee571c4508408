//! Deterministic color palette generation.
//!
//! Produces visually separated colors by stepping the hue circle in
//! increments of 1/φ (the reciprocal golden ratio). Because 1/φ is
//! irrational, consecutive hues never cluster, and the angular spread
//! stays near-maximal as the palette grows.
//!
//! The palette is a pure function of the index: the first N colors of
//! any larger palette are identical to the N-sized palette.
//!
//! # Reference
//! Knuth (1998), "The Art of Computer Programming", Vol. 3, §6.4
//! (Fibonacci hashing — the same equidistribution property)

use crate::models::Color;

/// Reciprocal golden ratio, 2 / (1 + √5).
const INV_PHI: f64 = 0.618_033_988_749_895;

/// Hue fraction of the i-th palette entry.
#[inline]
fn hue_at(i: usize) -> f64 {
    (i as f64 * INV_PHI).fract()
}

/// Color of the i-th palette entry.
///
/// Saturation is fixed at 0.5; value is `sqrt(1 − (i/φ mod 0.5))`,
/// which keeps brightness inside a bounded sub-range (no near-black
/// entries, no uniform brightness either).
pub fn color_at(i: usize) -> Color {
    let x = i as f64 * INV_PHI;
    let value = (1.0 - x % 0.5).sqrt();
    Color::from_hsv(hue_at(i), 0.5, value)
}

/// Generates a palette of `n` visually separated colors.
///
/// Deterministic: the same `n` always yields the same sequence, and
/// smaller palettes are prefixes of larger ones.
pub fn golden_ratio_palette(n: usize) -> Vec<Color> {
    (0..n).map(color_at).collect()
}
