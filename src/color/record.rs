//! The enriched color record flowing through every analysis.

use super::contrast::relative_luminance;
use super::convert::{Hsl, Lab, Rgb, hex_to_rgb, rgb_to_hex, rgb_to_hsl, rgb_to_lab};

/// A color with all of its derived representations attached.
///
/// The four fields are always consistent derivations of the same
/// underlying color: `hex` is the canonical lowercase form and `rgb`,
/// `hsl`, `lab` are computed from it in one shot by [`ColorRecord::from_hex`].
/// Records carry no identity and are recomputed, never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorRecord {
    /// Canonical lowercase `#rrggbb`.
    pub hex: String,
    /// 8-bit sRGB channels.
    pub rgb: Rgb,
    /// Cylindrical HSL form.
    pub hsl: Hsl,
    /// CIELAB (D65) coordinates.
    pub lab: Lab,
}

impl ColorRecord {
    /// What: Build a record from a raw hex string.
    ///
    /// Inputs:
    /// - `hex`: Any shape [`hex_to_rgb`] accepts (case-insensitive,
    ///   optional `#`, optional alpha pair).
    ///
    /// Output:
    /// - `Some(ColorRecord)` with every representation populated, or
    ///   `None` for unparsable input.
    ///
    /// Details:
    /// - The stored hex is re-rendered from RGB, so mixed case and alpha
    ///   suffixes normalize away and records compare by value.
    #[must_use]
    pub fn from_hex(hex: &str) -> Option<Self> {
        let rgb = hex_to_rgb(hex)?;
        Some(Self {
            hex: rgb_to_hex(rgb),
            rgb,
            hsl: rgb_to_hsl(rgb),
            lab: rgb_to_lab(rgb),
        })
    }

    /// WCAG relative luminance of this color.
    #[must_use]
    pub fn luminance(&self) -> f64 {
        relative_luminance(self.rgb)
    }
}
