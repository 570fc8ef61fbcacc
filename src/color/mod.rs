//! Pure color math for theme analysis.
//!
//! Split into focused submodules: conversions between spaces, perceptual
//! distance metrics, WCAG contrast, harmony detection, and psychology band
//! lookups. Nothing in here performs I/O or logging; every function is a
//! deterministic mapping from inputs to outputs so the report layer can be
//! tested against plain data.

/// WCAG relative luminance and contrast ratio.
mod contrast;
/// Color space conversions (hex, RGB, HSL, CIELAB).
mod convert;
/// Perceptual distance metrics (CIE76, CIEDE2000).
mod distance;
/// Hue relationship detection and harmony generation.
mod harmony;
/// Hue/lightness/saturation band classification.
mod psychology;
/// The enriched per-color record used throughout analysis.
mod record;

pub use contrast::{
    ContrastCategory, contrast_ratio, is_dark, relative_luminance, swatch_text_color,
    text_color_for,
};
pub use convert::{Hsl, Lab, Rgb, hex_to_rgb, hsl_to_rgb, rgb_to_hex, rgb_to_hsl, rgb_to_lab, rotate_hue};
pub use distance::{delta_e_76, delta_e_2000};
pub use harmony::{
    HarmonyAnalysis, HarmonyKind, HueRelation, RelationKind, analyze_harmony,
    generate_harmony_colors,
};
pub use psychology::{EmotionProfile, Temperature, classify_emotion, color_temperature};
pub use record::ColorRecord;
