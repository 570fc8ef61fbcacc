//! Per-theme harmony analysis over the syntax palette.

use std::collections::BTreeSet;

use crate::color::{HarmonyAnalysis, Temperature, analyze_harmony, color_temperature};
use crate::theme::{ThemeDoc, extract_syntax_colors};

/// Counts of syntax colors per temperature class.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TemperatureTally {
    /// Saturation below the chromatic floor.
    pub neutral: usize,
    /// Warm-band hues.
    pub warm: usize,
    /// Cool-band hues.
    pub cool: usize,
    /// Everything between.
    pub transitional: usize,
}

impl TemperatureTally {
    /// Record one color's temperature.
    pub const fn add(&mut self, temperature: Temperature) {
        match temperature {
            Temperature::Neutral => self.neutral += 1,
            Temperature::Warm => self.warm += 1,
            Temperature::Cool => self.cool += 1,
            Temperature::Transitional => self.transitional += 1,
        }
    }

    /// Total number of recorded colors.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.neutral + self.warm + self.cool + self.transitional
    }
}

/// Harmony findings for one theme.
#[derive(Debug, Clone)]
pub struct ThemeHarmony {
    /// Relationship analysis over the chromatic hues.
    pub harmony: HarmonyAnalysis,
    /// Temperature distribution over every syntax entry, duplicates
    /// included.
    pub temperatures: TemperatureTally,
}

/// What: Analyze hue relationships in a theme's syntax palette.
///
/// Inputs:
/// - `theme`: Parsed document.
///
/// Output:
/// - [`ThemeHarmony`] pairing the harmony analysis with a temperature
///   tally.
///
/// Details:
/// - Only clearly chromatic colors feed the harmony detector: saturation
///   above 15 and lightness strictly between 10 and 90, deduplicated by
///   canonical hex. Near-black and near-white tokens would otherwise
///   report junk hues.
/// - The temperature tally covers every syntax entry, so scopes that
///   share one color each contribute a count. Dedupe applies only to
///   the hue feed.
#[must_use]
pub fn analyze_theme_harmony(theme: &ThemeDoc) -> ThemeHarmony {
    let syntax = extract_syntax_colors(theme);

    let mut seen: BTreeSet<String> = BTreeSet::new();
    let mut hues = Vec::new();
    let mut temperatures = TemperatureTally::default();

    for record in syntax.values() {
        temperatures.add(color_temperature(record.hsl.h, record.hsl.s));
        if seen.insert(record.hex.clone())
            && record.hsl.s > 15.0
            && record.hsl.l > 10.0
            && record.hsl.l < 90.0
        {
            hues.push(record.hsl.h);
        }
    }

    ThemeHarmony {
        harmony: analyze_harmony(&hues),
        temperatures,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::RelationKind;

    fn theme_with_tokens(tokens: &[(&str, &str)]) -> ThemeDoc {
        let token_colors: Vec<String> = tokens
            .iter()
            .map(|(scope, hex)| {
                format!(r##"{{"scope": "{scope}", "settings": {{"foreground": "{hex}"}}}}"##)
            })
            .collect();
        let json = format!(r#"{{"name": "T", "tokenColors": [{}]}}"#, token_colors.join(","));
        serde_json::from_str(&json).expect("fixture parses")
    }

    /// What: complementary token hues are detected through the full
    /// extraction pipeline.
    ///
    /// - Input: Saturated red (#e05050, hue 0) and cyan (#50e0e0, hue 180).
    /// - Output: A complementary relationship.
    #[test]
    fn detects_complementary_tokens() {
        let theme = theme_with_tokens(&[("keyword", "#e05050"), ("string", "#50e0e0")]);
        let result = analyze_theme_harmony(&theme);
        match result.harmony {
            HarmonyAnalysis::Chromatic { ref relationships, .. } => {
                assert!(relationships.iter().any(|r| r.kind == RelationKind::Complementary));
            }
            HarmonyAnalysis::Monochromatic => panic!("expected chromatic"),
        }
        assert_eq!(result.temperatures.warm, 1);
        assert_eq!(result.temperatures.cool, 1);
    }

    /// What: near-black, near-white, and gray tokens stay out of the
    /// harmony detection but count in the tally.
    ///
    /// - Input: One chromatic token plus gray, near-black, near-white.
    /// - Output: Monochromatic (only one usable hue), tally of 4.
    #[test]
    fn filters_non_chromatic_tokens() {
        let theme = theme_with_tokens(&[
            ("keyword", "#4d9375"),
            ("comment", "#808080"),
            ("punctuation", "#0a0a0a"),
            ("background", "#f8f8f8"),
        ]);
        let result = analyze_theme_harmony(&theme);
        assert_eq!(result.harmony, HarmonyAnalysis::Monochromatic);
        assert_eq!(result.temperatures.total(), 4);
        assert!(result.temperatures.neutral >= 3);
    }

    /// What: scopes sharing a hex dedupe for harmony but each count in
    /// the temperature tally.
    ///
    /// - Input: Two scopes sharing one cool green (#4d9375).
    /// - Output: Monochromatic (one distinct hue), tally total of 2.
    #[test]
    fn shared_hex_counts_per_scope() {
        let theme = theme_with_tokens(&[("keyword", "#4d9375"), ("storage", "#4d9375")]);
        let result = analyze_theme_harmony(&theme);
        assert_eq!(result.harmony, HarmonyAnalysis::Monochromatic);
        assert_eq!(result.temperatures.total(), 2);
        assert_eq!(result.temperatures.cool, 2);
    }
}
