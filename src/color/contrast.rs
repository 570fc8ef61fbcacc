//! WCAG relative luminance, contrast ratio, and compliance categories.

use super::convert::{Rgb, hex_to_rgb, srgb_to_linear};

/// WCAG 2.x luminance weights for linearized R, G, B.
const LUM_R: f64 = 0.2126;
const LUM_G: f64 = 0.7152;
const LUM_B: f64 = 0.0722;

/// WCAG compliance category for a contrast ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContrastCategory {
    /// Ratio >= 7.0.
    Aaa,
    /// Ratio >= 4.5.
    Aa,
    /// Ratio >= 3.0, acceptable for large text only.
    AaLarge,
    /// Below every threshold.
    Fail,
}

impl ContrastCategory {
    /// Categorize a contrast ratio with inclusive lower bounds.
    #[must_use]
    pub fn from_ratio(ratio: f64) -> Self {
        if ratio >= 7.0 {
            Self::Aaa
        } else if ratio >= 4.5 {
            Self::Aa
        } else if ratio >= 3.0 {
            Self::AaLarge
        } else {
            Self::Fail
        }
    }

    /// Whether this category meets at least the named threshold.
    #[must_use]
    pub const fn passes(self) -> bool {
        !matches!(self, Self::Fail)
    }
}

impl std::fmt::Display for ContrastCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Aaa => "AAA",
            Self::Aa => "AA",
            Self::AaLarge => "AA Large",
            Self::Fail => "Fail",
        };
        f.write_str(s)
    }
}

/// What: Compute WCAG 2.x relative luminance.
///
/// Inputs:
/// - `rgb`: 8-bit sRGB channels.
///
/// Output:
/// - Luminance in `[0.0, 1.0]`; 0 is black, 1 is white.
///
/// Details:
/// - Channels pass through the piecewise sRGB linearization before the
///   0.2126/0.7152/0.0722 weighted sum. This is the compliance-grade
///   luminance; [`swatch_text_color`] deliberately is not.
#[must_use]
pub fn relative_luminance(rgb: Rgb) -> f64 {
    LUM_R * srgb_to_linear(rgb.r) + LUM_G * srgb_to_linear(rgb.g) + LUM_B * srgb_to_linear(rgb.b)
}

/// What: WCAG contrast ratio between two colors.
///
/// Inputs:
/// - `a`, `b`: Colors in either order.
///
/// Output:
/// - Ratio in `[1.0, 21.0]`; symmetric by construction.
#[must_use]
pub fn contrast_ratio(a: Rgb, b: Rgb) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

/// Whether a hex color is dark (true WCAG luminance below 0.5).
///
/// Unparsable input is treated as not dark, mirroring the lenient
/// boundary behavior of the loaders.
#[must_use]
pub fn is_dark(hex: &str) -> bool {
    hex_to_rgb(hex).is_some_and(|rgb| relative_luminance(rgb) < 0.5)
}

/// Pick black or white text for a background, using true WCAG luminance.
#[must_use]
pub fn text_color_for(bg_hex: &str) -> &'static str {
    if is_dark(bg_hex) { "#ffffff" } else { "#000000" }
}

/// What: Pick black or white overlay text for a swatch preview.
///
/// Inputs:
/// - `hex`: Swatch background color.
///
/// Output:
/// - `"#000000"` on bright swatches, `"#ffffff"` otherwise.
///
/// Details:
/// - Weighs the raw 0-255 channels without linearization. This is a cheap
///   approximation kept separate from [`text_color_for`] on purpose: it is
///   only ever used to label color swatches, never for compliance checks,
///   and the two disagree near mid-gray.
#[must_use]
pub fn swatch_text_color(hex: &str) -> &'static str {
    let Some(rgb) = hex_to_rgb(hex) else {
        return "#ffffff";
    };
    let approx =
        (LUM_R * f64::from(rgb.r) + LUM_G * f64::from(rgb.g) + LUM_B * f64::from(rgb.b)) / 255.0;
    if approx > 0.5 { "#000000" } else { "#ffffff" }
}
