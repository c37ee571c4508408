//! RGB color model and HSV conversion.
//!
//! Colors are plain RGB triples with channels in [0, 1]. They serialize
//! as bare 3-element numeric arrays so schedule documents round-trip the
//! color dictionary bit-exactly.
//!
//! # Reference
//! Smith (1978), "Color Gamut Transform Pairs", SIGGRAPH '78

use serde::{Deserialize, Serialize};

/// An RGB color, each channel in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(pub [f64; 3]);

impl Color {
    /// Creates a color from RGB channels.
    pub fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self([r, g, b])
    }

    /// Converts an HSV triple to RGB using the standard sextant transform.
    ///
    /// `hue` is a fraction of the color circle (wrapped into [0, 1));
    /// `saturation` and `value` are expected in [0, 1].
    pub fn from_hsv(hue: f64, saturation: f64, value: f64) -> Self {
        let h = hue.rem_euclid(1.0) * 6.0;
        let sector = h.floor() as u8 % 6;
        let f = h - h.floor();

        let p = value * (1.0 - saturation);
        let q = value * (1.0 - saturation * f);
        let t = value * (1.0 - saturation * (1.0 - f));

        let (r, g, b) = match sector {
            0 => (value, t, p),
            1 => (q, value, p),
            2 => (p, value, t),
            3 => (p, q, value),
            4 => (t, p, value),
            _ => (value, p, q),
        };
        Self([r, g, b])
    }

    /// Red channel.
    #[inline]
    pub fn r(&self) -> f64 {
        self.0[0]
    }

    /// Green channel.
    #[inline]
    pub fn g(&self) -> f64 {
        self.0[1]
    }

    /// Blue channel.
    #[inline]
    pub fn b(&self) -> f64 {
        self.0[2]
    }
}
