//! Per-theme WCAG contrast audit.

use std::collections::BTreeSet;

use crate::color::{contrast_ratio, delta_e_76, hex_to_rgb, rgb_to_lab};
use crate::theme::{
    DEFAULT_BACKGROUND, DEFAULT_FOREGROUND, ThemeDoc, extract_colors, extract_syntax_colors,
};

/// How badly a syntax color misses the contrast minimum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueSeverity {
    /// Below the minimum but at least 3.0, so legible for large text.
    Warn,
    /// Below 3.0.
    Fail,
}

/// A syntax color falling short of the requested minimum.
#[derive(Debug, Clone)]
pub struct ContrastIssue {
    /// Canonical hex of the failing color.
    pub hex: String,
    /// Its contrast ratio against the background.
    pub ratio: f64,
    /// Warn or fail.
    pub severity: IssueSeverity,
    /// A scope using this color (the first in scope order).
    pub scope: String,
}

/// Visibility of a border color against the background.
#[derive(Debug, Clone)]
pub struct BorderVisibility {
    /// UI key of the border color.
    pub key: String,
    /// Raw hex as written in the theme.
    pub hex: String,
    /// Contrast ratio against the background.
    pub ratio: f64,
    /// ΔE76 against the background; borders live below contrast
    /// thresholds, so perceptual distance is the better signal.
    pub delta_e: f64,
}

/// Contrast audit results for one theme.
#[derive(Debug, Clone)]
pub struct ContrastAudit {
    /// Background hex used throughout (raw, may be the default).
    pub bg_hex: String,
    /// Foreground hex (raw, may be the default).
    pub fg_hex: String,
    /// Main text contrast ratio; `None` when either color is unparsable.
    pub main_ratio: Option<f64>,
    /// Unique syntax colors below the minimum, ascending by ratio.
    pub issues: Vec<ContrastIssue>,
    /// Count of unique syntax colors at or above the minimum.
    pub passing: usize,
    /// Up to five border keys with their visibility metrics.
    pub borders: Vec<BorderVisibility>,
}

/// What: Audit a theme's contrast against WCAG thresholds.
///
/// Inputs:
/// - `theme`: Parsed document.
/// - `min_contrast`: Minimum acceptable ratio (4.5 for WCAG AA).
///
/// Output:
/// - [`ContrastAudit`] with the main pair, per-color issues, and border
///   visibility.
///
/// Details:
/// - Syntax colors are deduplicated by canonical hex and evaluated in
///   ascending ratio order, so the worst offenders list first.
/// - Border keys are UI keys containing "border" but not "bracket"
///   (bracket-pair guides are intentionally faint), first five in key
///   order.
#[must_use]
pub fn analyze_contrast(theme: &ThemeDoc, min_contrast: f64) -> ContrastAudit {
    let bg_hex = theme
        .background_hex()
        .unwrap_or(DEFAULT_BACKGROUND)
        .to_string();
    let fg_hex = theme
        .foreground_hex()
        .unwrap_or(DEFAULT_FOREGROUND)
        .to_string();

    let bg_rgb = hex_to_rgb(&bg_hex);
    let fg_rgb = hex_to_rgb(&fg_hex);

    let main_ratio = match (bg_rgb, fg_rgb) {
        (Some(bg), Some(fg)) => Some(contrast_ratio(fg, bg)),
        _ => None,
    };

    let mut issues = Vec::new();
    let mut passing = 0usize;

    if let Some(bg) = bg_rgb {
        let syntax = extract_syntax_colors(theme);
        let mut scored: Vec<(f64, String, String)> = Vec::new();
        let mut seen: BTreeSet<String> = BTreeSet::new();
        for (scope, record) in &syntax {
            if !seen.insert(record.hex.clone()) {
                continue;
            }
            scored.push((contrast_ratio(record.rgb, bg), record.hex.clone(), scope.clone()));
        }
        scored.sort_by(|a, b| a.0.total_cmp(&b.0));

        for (ratio, hex, scope) in scored {
            if ratio >= min_contrast {
                passing += 1;
            } else {
                let severity = if ratio >= 3.0 { IssueSeverity::Warn } else { IssueSeverity::Fail };
                issues.push(ContrastIssue { hex, ratio, severity, scope });
            }
        }
    }

    let mut borders = Vec::new();
    if let Some(bg) = bg_rgb {
        let bg_lab = rgb_to_lab(bg);
        let ui = extract_colors(theme);
        let border_keys: Vec<&String> = ui
            .keys()
            .filter(|k| {
                let lower = k.to_lowercase();
                lower.contains("border") && !lower.contains("bracket")
            })
            .take(5)
            .collect();
        for key in border_keys {
            let record = &ui[key];
            borders.push(BorderVisibility {
                key: key.clone(),
                hex: record.hex.clone(),
                ratio: contrast_ratio(record.rgb, bg),
                delta_e: delta_e_76(record.lab, bg_lab),
            });
        }
    }

    ContrastAudit { bg_hex, fg_hex, main_ratio, issues, passing, borders }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> ThemeDoc {
        serde_json::from_str(
            r##"{
                "name": "Fixture",
                "type": "dark",
                "colors": {
                    "editor.background": "#121212",
                    "editor.foreground": "#d4d4d4",
                    "panel.border": "#2a2a2a",
                    "editorBracketMatch.border": "#444444"
                },
                "tokenColors": [
                    {"scope": "keyword", "settings": {"foreground": "#4d9375"}},
                    {"scope": "comment", "settings": {"foreground": "#2f2f2f"}},
                    {"scope": "punctuation", "settings": {"foreground": "#6a6a6a"}}
                ]
            }"##,
        )
        .expect("fixture parses")
    }

    /// What: the main pair ratio and issue split match the thresholds.
    ///
    /// - Input: The fixture at the default 4.5 minimum.
    /// - Output: Main ratio present; the dark comment fails, the mid
    ///   gray warns, the keyword passes; issues sorted ascending.
    #[test]
    fn audit_splits_issues() {
        let audit = analyze_contrast(&fixture(), 4.5);
        assert!(audit.main_ratio.expect("main ratio") > 10.0);
        assert_eq!(audit.passing, 1);
        assert_eq!(audit.issues.len(), 2);
        assert_eq!(audit.issues[0].severity, IssueSeverity::Fail);
        assert_eq!(audit.issues[0].hex, "#2f2f2f");
        assert_eq!(audit.issues[1].severity, IssueSeverity::Warn);
        assert!(audit.issues[0].ratio <= audit.issues[1].ratio);
    }

    /// What: border keys exclude bracket guides.
    ///
    /// - Input: The fixture with one border and one bracket border key.
    /// - Output: Only `panel.border`, with finite ΔE.
    #[test]
    fn borders_exclude_brackets() {
        let audit = analyze_contrast(&fixture(), 4.5);
        assert_eq!(audit.borders.len(), 1);
        assert_eq!(audit.borders[0].key, "panel.border");
        assert!(audit.borders[0].delta_e > 0.0);
    }

    /// What: defaults substitute for missing editor colors.
    ///
    /// - Input: An empty document.
    /// - Output: Default white-on-black pair at ~21:1.
    #[test]
    fn missing_colors_use_defaults() {
        let audit = analyze_contrast(&ThemeDoc::default(), 4.5);
        assert_eq!(audit.bg_hex, DEFAULT_BACKGROUND);
        assert_eq!(audit.fg_hex, DEFAULT_FOREGROUND);
        assert!((audit.main_ratio.expect("ratio") - 21.0).abs() < 0.1);
    }

    /// What: an unparsable background produces no ratios, not a panic.
    ///
    /// - Input: A theme whose background is junk.
    /// - Output: `main_ratio` is `None`, no issues, no borders.
    #[test]
    fn bad_background_yields_none() {
        let theme: ThemeDoc = serde_json::from_str(
            r##"{"colors": {"editor.background": "oops", "editor.foreground": "#ffffff"}}"##,
        )
        .expect("parses");
        let audit = analyze_contrast(&theme, 4.5);
        assert!(audit.main_ratio.is_none());
        assert!(audit.issues.is_empty());
        assert!(audit.borders.is_empty());
    }
}
