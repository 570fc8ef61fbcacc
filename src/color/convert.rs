//! Conversions between hex, RGB, HSL, and CIELAB.
//!
//! Constants follow the published sRGB/D65 standards; CIELAB uses the D65
//! reference white so CIE76/CIEDE2000 distances computed downstream line up
//! with the usual tables.

/// An sRGB color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    /// Red channel, 0-255.
    pub r: u8,
    /// Green channel, 0-255.
    pub g: u8,
    /// Blue channel, 0-255.
    pub b: u8,
}

/// A color in cylindrical HSL form.
///
/// Hue is degrees in `[0, 360)`; saturation and lightness are percentages
/// in `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    /// Hue angle in degrees.
    pub h: f64,
    /// Saturation percentage.
    pub s: f64,
    /// Lightness percentage.
    pub l: f64,
}

/// A color in CIE L\*a\*b\* (D65).
///
/// L is `[0, 100]`; a and b are unbounded but typically within
/// `[-128, 127]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lab {
    /// Lightness.
    pub l: f64,
    /// Green-red axis.
    pub a: f64,
    /// Blue-yellow axis.
    pub b: f64,
}

/// D65 standard illuminant reference white point.
const D65_X: f64 = 0.95047;
const D65_Y: f64 = 1.0;
const D65_Z: f64 = 1.08883;

/// sRGB to XYZ matrix (D65), row-major.
const SRGB_TO_XYZ: [[f64; 3]; 3] = [
    [0.4124564, 0.3575761, 0.1804375],
    [0.2126729, 0.7151522, 0.0721750],
    [0.0193339, 0.1191920, 0.9503041],
];

/// What: Parse a hex color string into an [`Rgb`].
///
/// Inputs:
/// - `hex`: String such as `#4d9375`, `4D9375`, or `#4d9375ff`.
///
/// Output:
/// - `Some(Rgb)` for a valid 6-digit (or alpha-carrying 8-digit) code;
///   `None` for any other length or non-hex character.
///
/// Details:
/// - A leading `#` is optional and case is ignored.
/// - An 8-digit code has its trailing alpha pair stripped; alpha is not
///   represented anywhere in the analysis pipeline.
pub fn hex_to_rgb(hex: &str) -> Option<Rgb> {
    let mut h = hex.strip_prefix('#').unwrap_or(hex);
    if !h.is_ascii() {
        return None;
    }
    if h.len() == 8 {
        h = &h[..6];
    }
    if h.len() != 6 || !h.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let r = u8::from_str_radix(&h[0..2], 16).ok()?;
    let g = u8::from_str_radix(&h[2..4], 16).ok()?;
    let b = u8::from_str_radix(&h[4..6], 16).ok()?;
    Some(Rgb { r, g, b })
}

/// Format an [`Rgb`] as a lowercase `#rrggbb` string.
#[must_use]
pub fn rgb_to_hex(rgb: Rgb) -> String {
    format!("#{:02x}{:02x}{:02x}", rgb.r, rgb.g, rgb.b)
}

/// What: Convert RGB to HSL.
///
/// Inputs:
/// - `rgb`: 8-bit channels.
///
/// Output:
/// - [`Hsl`] with hue in degrees `[0, 360)` and S/L as percentages.
///
/// Details:
/// - Achromatic inputs (r == g == b) report hue 0 and saturation 0.
#[must_use]
pub fn rgb_to_hsl(rgb: Rgb) -> Hsl {
    let r = f64::from(rgb.r) / 255.0;
    let g = f64::from(rgb.g) / 255.0;
    let b = f64::from(rgb.b) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if max == min {
        return Hsl { h: 0.0, s: 0.0, l: l * 100.0 };
    }

    let d = max - min;
    let s = if l > 0.5 { d / (2.0 - max - min) } else { d / (max + min) };

    let mut h = if max == r {
        (g - b) / d
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    } * 60.0;
    if h < 0.0 {
        h += 360.0;
    }

    Hsl { h, s: s * 100.0, l: l * 100.0 }
}

/// Piecewise helper for the HSL to RGB transform.
fn hue_to_channel(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

/// What: Convert HSL back to RGB.
///
/// Inputs:
/// - `hsl`: Hue in degrees, S/L as percentages.
///
/// Output:
/// - [`Rgb`] with each channel rounded to the nearest integer, ties away
///   from zero (`f64::round`).
///
/// Details:
/// - Round-trips with [`rgb_to_hsl`] within 1 per channel and 1 degree of
///   hue; the rounding choice is pinned by tests.
#[must_use]
pub fn hsl_to_rgb(hsl: Hsl) -> Rgb {
    let h = (hsl.h.rem_euclid(360.0)) / 360.0;
    let s = (hsl.s / 100.0).clamp(0.0, 1.0);
    let l = (hsl.l / 100.0).clamp(0.0, 1.0);

    if s == 0.0 {
        let v = to_channel(l);
        return Rgb { r: v, g: v, b: v };
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;

    Rgb {
        r: to_channel(hue_to_channel(p, q, h + 1.0 / 3.0)),
        g: to_channel(hue_to_channel(p, q, h)),
        b: to_channel(hue_to_channel(p, q, h - 1.0 / 3.0)),
    }
}

/// Scale a unit channel to 0-255 and round (ties away from zero).
fn to_channel(v: f64) -> u8 {
    let scaled = (v * 255.0).round();
    if scaled <= 0.0 {
        0
    } else if scaled >= 255.0 {
        255
    } else {
        scaled as u8
    }
}

/// Piecewise sRGB electro-optical transfer function.
pub(crate) fn srgb_to_linear(channel: u8) -> f64 {
    let c = f64::from(channel) / 255.0;
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// CIELAB f(t): cube root above the 0.008856 threshold, linear below.
fn lab_f(t: f64) -> f64 {
    if t > 0.008856 {
        t.cbrt()
    } else {
        7.787 * t + 16.0 / 116.0
    }
}

/// What: Convert RGB to CIELAB via linear sRGB and XYZ (D65).
///
/// Inputs:
/// - `rgb`: 8-bit channels.
///
/// Output:
/// - [`Lab`] suitable for the ΔE metrics in [`crate::color::distance`].
///
/// Details:
/// - Linearization, matrix, reference white, and f(t) constants follow the
///   sRGB/D65 standard values; changing any of them silently shifts every
///   ΔE in the reports.
#[must_use]
pub fn rgb_to_lab(rgb: Rgb) -> Lab {
    let rl = srgb_to_linear(rgb.r);
    let gl = srgb_to_linear(rgb.g);
    let bl = srgb_to_linear(rgb.b);

    let m = &SRGB_TO_XYZ;
    let x = m[0][0] * rl + m[0][1] * gl + m[0][2] * bl;
    let y = m[1][0] * rl + m[1][1] * gl + m[1][2] * bl;
    let z = m[2][0] * rl + m[2][1] * gl + m[2][2] * bl;

    let fx = lab_f(x / D65_X);
    let fy = lab_f(y / D65_Y);
    let fz = lab_f(z / D65_Z);

    Lab {
        l: 116.0 * fy - 16.0,
        a: 500.0 * (fx - fy),
        b: 200.0 * (fy - fz),
    }
}

/// Rotate a hue by `degrees`, wrapping into `[0, 360)`.
#[must_use]
pub fn rotate_hue(h: f64, degrees: f64) -> f64 {
    (h + degrees).rem_euclid(360.0)
}
