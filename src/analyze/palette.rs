//! Unique palette summary per theme.

use std::collections::BTreeMap;

use crate::color::{ColorRecord, Temperature, color_temperature, contrast_ratio, hex_to_rgb};
use crate::theme::{DEFAULT_BACKGROUND, ThemeDoc, extract_colors, extract_syntax_colors};

/// One unique color in a palette with its usage and derived metrics.
#[derive(Debug, Clone)]
pub struct PaletteEntry {
    /// The enriched color.
    pub record: ColorRecord,
    /// Keys or scopes using this exact color, in extraction order.
    pub used_by: Vec<String>,
    /// Temperature classification.
    pub temperature: Temperature,
    /// Contrast ratio against the theme background; 0 when the
    /// background itself failed to parse.
    pub contrast_ratio: f64,
}

/// Palette statistics for one theme.
#[derive(Debug, Clone)]
pub struct PaletteSummary {
    /// Unique UI colors, keyed by canonical hex.
    pub unique_ui: Vec<PaletteEntry>,
    /// Unique syntax colors, keyed by canonical hex.
    pub unique_syntax: Vec<PaletteEntry>,
    /// Background hex used for contrast (raw, may be the default).
    pub bg_hex: String,
    /// The document's legacy base marker, when present.
    pub base: Option<String>,
}

/// Group records by canonical hex, keeping first-seen record and all keys.
fn dedupe(colors: &BTreeMap<String, ColorRecord>, bg_hex: &str) -> Vec<PaletteEntry> {
    let bg_rgb = hex_to_rgb(bg_hex);
    let mut order: Vec<String> = Vec::new();
    let mut groups: BTreeMap<String, PaletteEntry> = BTreeMap::new();

    for (key, record) in colors {
        let entry = groups.entry(record.hex.clone()).or_insert_with(|| {
            order.push(record.hex.clone());
            PaletteEntry {
                record: record.clone(),
                used_by: Vec::new(),
                temperature: color_temperature(record.hsl.h, record.hsl.s),
                contrast_ratio: bg_rgb.map_or(0.0, |bg| contrast_ratio(record.rgb, bg)),
            }
        });
        entry.used_by.push(key.clone());
    }

    order
        .into_iter()
        .filter_map(|hex| groups.remove(&hex))
        .collect()
}

/// What: Compute the unique palette of a theme.
///
/// Inputs:
/// - `theme`: Parsed document.
///
/// Output:
/// - [`PaletteSummary`] with UI and syntax colors deduplicated by
///   canonical hex, each carrying usage, temperature, and contrast
///   against the background.
///
/// Details:
/// - The background defaults to [`DEFAULT_BACKGROUND`] when the theme
///   omits `editor.background`.
#[must_use]
pub fn analyze_palette(theme: &ThemeDoc) -> PaletteSummary {
    let bg_hex = theme
        .background_hex()
        .unwrap_or(DEFAULT_BACKGROUND)
        .to_string();

    PaletteSummary {
        unique_ui: dedupe(&extract_colors(theme), &bg_hex),
        unique_syntax: dedupe(&extract_syntax_colors(theme), &bg_hex),
        bg_hex,
        base: theme.base.clone(),
    }
}
