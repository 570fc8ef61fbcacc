//! Psychology profile of a theme's palette.

use std::collections::{BTreeMap, BTreeSet};

use crate::color::{EmotionProfile, classify_emotion, hex_to_rgb, rgb_to_hsl};
use crate::theme::{DEFAULT_BACKGROUND, ThemeDoc, extract_syntax_colors};

use super::TemperatureTally;

/// Psychology report for one theme.
#[derive(Debug, Clone)]
pub struct PsychologyProfile {
    /// Background hex as written (or the default).
    pub bg_hex: String,
    /// Emotional reading of the background; `None` when unparsable.
    pub background_emotion: Option<EmotionProfile>,
    /// Mean saturation of the chromatic syntax colors; 0 when none.
    pub avg_saturation: f64,
    /// Counts per dominant hue emotion among chromatic syntax colors.
    pub emotions: BTreeMap<&'static str, usize>,
    /// Temperature counts for the same set.
    pub temperatures: TemperatureTally,
    /// Whether the theme declares itself dark.
    pub is_dark: bool,
}

/// What: Build the psychology profile for a theme.
///
/// Inputs:
/// - `theme`: Parsed document.
///
/// Output:
/// - [`PsychologyProfile`] covering the background and the chromatic
///   syntax palette.
///
/// Details:
/// - Syntax colors are deduplicated by hex; only colors with
///   saturation above 10 contribute to the averages and counts, so
///   grays do not flatten the emotional signal.
#[must_use]
pub fn analyze_psychology(theme: &ThemeDoc) -> PsychologyProfile {
    let bg_hex = theme
        .background_hex()
        .unwrap_or(DEFAULT_BACKGROUND)
        .to_string();
    let background_emotion = hex_to_rgb(&bg_hex).map(|rgb| {
        let hsl = rgb_to_hsl(rgb);
        classify_emotion(hsl.h, hsl.s, hsl.l)
    });

    let mut seen: BTreeSet<String> = BTreeSet::new();
    let mut saturations: Vec<f64> = Vec::new();
    let mut emotions: BTreeMap<&'static str, usize> = BTreeMap::new();
    let mut temperatures = TemperatureTally::default();

    for record in extract_syntax_colors(theme).values() {
        if !seen.insert(record.hex.clone()) {
            continue;
        }
        if record.hsl.s > 10.0 {
            saturations.push(record.hsl.s);
            let profile = classify_emotion(record.hsl.h, record.hsl.s, record.hsl.l);
            if let Some(emotion) = profile.hue_emotion {
                *emotions.entry(emotion).or_default() += 1;
            }
            temperatures.add(profile.temperature);
        }
    }

    let avg_saturation = if saturations.is_empty() {
        0.0
    } else {
        saturations.iter().sum::<f64>() / saturations.len() as f64
    };

    PsychologyProfile {
        bg_hex,
        background_emotion,
        avg_saturation,
        emotions,
        temperatures,
        is_dark: theme.is_dark(),
    }
}
