//! Consistency checks across a family of themes.

use std::collections::{BTreeMap, BTreeSet};

use crate::color::{contrast_ratio, hex_to_rgb};
use crate::theme::{DEFAULT_BACKGROUND, DEFAULT_FOREGROUND, ThemeDoc, extract_syntax_colors};

/// A syntax scope whose hue drifts between themes.
#[derive(Debug, Clone)]
pub struct ScopeSpread {
    /// The scope name.
    pub scope: String,
    /// Per-theme hue, in theme name order.
    pub hues: Vec<(String, f64)>,
    /// Circular hue spread in degrees.
    pub spread: f64,
}

/// Cross-theme consistency report.
#[derive(Debug, Clone)]
pub struct CrossThemeReport {
    /// Number of chromatic scopes present in every theme.
    pub common_scopes: usize,
    /// Common scopes whose hue spread exceeds 15 degrees.
    pub inconsistent: Vec<ScopeSpread>,
    /// Main text contrast ratio per theme.
    pub contrasts: BTreeMap<String, f64>,
}

/// What: Compare syntax hues and main contrast across themes.
///
/// Inputs:
/// - `themes`: All loaded documents, keyed by name.
///
/// Output:
/// - [`CrossThemeReport`] listing shared scopes that drift in hue and
///   the text contrast of each theme.
///
/// Details:
/// - Only chromatic scopes (saturation above 10) participate; grays
///   carry no meaningful hue.
/// - Spread is circular: a span above 180 degrees wraps to its
///   complement, so a red near 5 and one near 355 read as close.
#[must_use]
pub fn analyze_cross_theme(themes: &BTreeMap<String, ThemeDoc>) -> CrossThemeReport {
    let mut theme_hues: BTreeMap<&str, BTreeMap<String, f64>> = BTreeMap::new();
    for (name, theme) in themes {
        let mut scope_hues = BTreeMap::new();
        for (scope, record) in extract_syntax_colors(theme) {
            if record.hsl.s > 10.0 {
                scope_hues.insert(scope, record.hsl.h);
            }
        }
        theme_hues.insert(name, scope_hues);
    }

    let mut common: Option<BTreeSet<&str>> = None;
    for scope_hues in theme_hues.values() {
        let scopes: BTreeSet<&str> = scope_hues.keys().map(String::as_str).collect();
        common = Some(match common {
            Some(acc) => acc.intersection(&scopes).copied().collect(),
            None => scopes,
        });
    }
    let common = common.unwrap_or_default();

    let mut inconsistent = Vec::new();
    for scope in &common {
        let hues: Vec<(String, f64)> = theme_hues
            .iter()
            .filter_map(|(name, sh)| sh.get(*scope).map(|h| ((*name).to_string(), *h)))
            .collect();
        if hues.len() < 2 {
            continue;
        }
        let min = hues.iter().map(|(_, h)| *h).fold(f64::INFINITY, f64::min);
        let max = hues.iter().map(|(_, h)| *h).fold(f64::NEG_INFINITY, f64::max);
        let mut spread = max - min;
        if spread > 180.0 {
            spread = 360.0 - spread;
        }
        if spread > 15.0 {
            inconsistent.push(ScopeSpread { scope: (*scope).to_string(), hues, spread });
        }
    }

    let mut contrasts = BTreeMap::new();
    for (name, theme) in themes {
        let bg = hex_to_rgb(theme.background_hex().unwrap_or(DEFAULT_BACKGROUND));
        let fg = hex_to_rgb(theme.foreground_hex().unwrap_or(DEFAULT_FOREGROUND));
        if let (Some(bg), Some(fg)) = (bg, fg) {
            contrasts.insert(name.clone(), contrast_ratio(fg, bg));
        }
    }

    CrossThemeReport { common_scopes: common.len(), inconsistent, contrasts }
}
