//! Color psychology: temperature and emotional band classification.
//!
//! The band tables are fixed, ordered, and evaluated first-match-wins.
//! They are const data rather than runtime maps so they stay immutable
//! and individually testable.

/// Perceived temperature of a color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Temperature {
    /// Saturation below 5, effectively gray.
    Neutral,
    /// Hue in [0, 60) or [300, 360].
    Warm,
    /// Hue in [150, 270).
    Cool,
    /// Between warm and cool bands.
    Transitional,
}

impl std::fmt::Display for Temperature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Neutral => "neutral",
            Self::Warm => "warm",
            Self::Cool => "cool",
            Self::Transitional => "transitional",
        };
        f.write_str(s)
    }
}

/// What: Classify color temperature from hue and saturation.
///
/// Inputs:
/// - `h`: Hue in degrees.
/// - `s`: Saturation percentage.
///
/// Output:
/// - A [`Temperature`]; desaturated colors are always `Neutral`.
///
/// Details:
/// - The warm band wraps: both [0, 60) and [300, 360] qualify, so 350
///   reads warm.
#[must_use]
pub fn color_temperature(h: f64, s: f64) -> Temperature {
    if s < 5.0 {
        Temperature::Neutral
    } else if (0.0..60.0).contains(&h) || (300.0..=360.0).contains(&h) {
        Temperature::Warm
    } else if (150.0..270.0).contains(&h) {
        Temperature::Cool
    } else {
        Temperature::Transitional
    }
}

/// One half-open hue band with its emotional associations.
struct HueBand {
    lo: f64,
    hi: f64,
    emotion: &'static str,
    arousal: &'static str,
    valence: &'static str,
}

/// Hue bands covering [0, 360); the endpoints mirror the classic color
/// wheel segments (red, orange, yellow, green, cyan, blue, purple, red).
const EMOTION_BANDS: [HueBand; 8] = [
    HueBand { lo: 0.0, hi: 30.0, emotion: "energy, urgency, passion", arousal: "high", valence: "mixed" },
    HueBand { lo: 30.0, hi: 60.0, emotion: "warmth, comfort, optimism", arousal: "medium", valence: "positive" },
    HueBand { lo: 60.0, hi: 90.0, emotion: "clarity, attention, caution", arousal: "medium-high", valence: "mixed" },
    HueBand { lo: 90.0, hi: 150.0, emotion: "growth, balance, freshness", arousal: "low-medium", valence: "positive" },
    HueBand { lo: 150.0, hi: 210.0, emotion: "calm, trust, stability", arousal: "low", valence: "positive" },
    HueBand { lo: 210.0, hi: 270.0, emotion: "depth, introspection, focus", arousal: "low-medium", valence: "neutral" },
    HueBand { lo: 270.0, hi: 330.0, emotion: "creativity, luxury, mystery", arousal: "medium", valence: "mixed" },
    HueBand { lo: 330.0, hi: 360.0, emotion: "energy, urgency, passion", arousal: "high", valence: "mixed" },
];

/// Lightness bands over [0, 100): (lo, hi, class, response).
const LIGHTNESS_BANDS: [(f64, f64, &str, &str); 7] = [
    (0.0, 15.0, "very_dark", "immersion, focus, reduced eye strain in dim environments"),
    (15.0, 30.0, "dark", "concentration, professionalism, modern aesthetic"),
    (30.0, 45.0, "medium_dark", "balance, readability, moderate contrast"),
    (45.0, 60.0, "medium", "neutrality, versatility, comfortable extended use"),
    (60.0, 75.0, "medium_light", "openness, approachability, paper-like comfort"),
    (75.0, 90.0, "light", "clarity, spaciousness, traditional document feel"),
    (90.0, 100.0, "very_light", "airiness, minimalism, clean aesthetic"),
];

/// Saturation bands over [0, 100): (lo, hi, class, response).
const SATURATION_BANDS: [(f64, f64, &str, &str); 5] = [
    (0.0, 15.0, "desaturated", "calm, professional, reduces visual fatigue over time"),
    (15.0, 35.0, "muted", "sophisticated, natural, non-distracting - ideal for long coding sessions"),
    (35.0, 55.0, "moderate", "balanced, engaging without overwhelming"),
    (55.0, 75.0, "saturated", "vibrant, attention-grabbing - best reserved for accents"),
    (75.0, 100.0, "vivid", "intense, energetic - may cause fatigue if overused"),
];

/// Look up a value in half-open `[lo, hi)` bands, first match wins.
fn band_lookup<'a, T>(value: f64, bands: &'a [(f64, f64, T, T)]) -> Option<(&'a T, &'a T)> {
    bands
        .iter()
        .find(|(lo, hi, _, _)| *lo <= value && value < *hi)
        .map(|(_, _, class, response)| (class, response))
}

/// Emotional/psychological associations for an HSL color.
///
/// Sparse on purpose: hue-derived fields are only present for colors with
/// enough saturation to register as chromatic, and exact 100 falls outside
/// the half-open lightness/saturation bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmotionProfile {
    /// Always present.
    pub temperature: Temperature,
    /// Dominant emotional reading of the hue; `None` when s < 5.
    pub hue_emotion: Option<&'static str>,
    /// Arousal level for the hue band; `None` when s < 5.
    pub arousal: Option<&'static str>,
    /// Valence for the hue band; `None` when s < 5.
    pub valence: Option<&'static str>,
    /// Lightness band name.
    pub lightness_class: Option<&'static str>,
    /// Expected response to the lightness band.
    pub lightness_response: Option<&'static str>,
    /// Saturation band name.
    pub saturation_class: Option<&'static str>,
    /// Expected response to the saturation band.
    pub saturation_response: Option<&'static str>,
}

/// What: Classify the emotional associations of an HSL color.
///
/// Inputs:
/// - `h`, `s`, `l`: Hue in degrees, saturation/lightness percentages.
///
/// Output:
/// - An [`EmotionProfile`]; temperature is always populated, the rest
///   depends on where the color falls.
#[must_use]
pub fn classify_emotion(h: f64, s: f64, l: f64) -> EmotionProfile {
    let mut profile = EmotionProfile {
        temperature: color_temperature(h, s),
        hue_emotion: None,
        arousal: None,
        valence: None,
        lightness_class: None,
        lightness_response: None,
        saturation_class: None,
        saturation_response: None,
    };

    if s >= 5.0
        && let Some(band) = EMOTION_BANDS.iter().find(|b| b.lo <= h && h < b.hi)
    {
        profile.hue_emotion = Some(band.emotion);
        profile.arousal = Some(band.arousal);
        profile.valence = Some(band.valence);
    }

    if let Some((class, response)) = band_lookup(l, &LIGHTNESS_BANDS) {
        profile.lightness_class = Some(class);
        profile.lightness_response = Some(response);
    }

    if let Some((class, response)) = band_lookup(s, &SATURATION_BANDS) {
        profile.saturation_class = Some(class);
        profile.saturation_response = Some(response);
    }

    profile
}

#[cfg(test)]
mod tests {
    use super::*;

    /// What: temperature bands including the wraparound warm segment.
    ///
    /// - Input: Boundary and interior hues at varying saturation.
    /// - Output: Warm/cool/neutral/transitional per the band edges.
    #[test]
    fn temperature_bands() {
        assert_eq!(color_temperature(0.0, 50.0), Temperature::Warm);
        assert_eq!(color_temperature(10.0, 80.0), Temperature::Warm);
        assert_eq!(color_temperature(350.0, 70.0), Temperature::Warm);
        assert_eq!(color_temperature(300.0, 50.0), Temperature::Warm);
        assert_eq!(color_temperature(180.0, 50.0), Temperature::Cool);
        assert_eq!(color_temperature(150.0, 50.0), Temperature::Cool);
        // 270 is the exclusive upper edge of cool
        assert_eq!(color_temperature(270.0, 50.0), Temperature::Transitional);
        assert_eq!(color_temperature(80.0, 50.0), Temperature::Transitional);
        // 60 is the exclusive upper edge of warm
        assert_eq!(color_temperature(60.0, 50.0), Temperature::Transitional);
        assert_eq!(color_temperature(0.0, 0.0), Temperature::Neutral);
        assert_eq!(color_temperature(200.0, 2.0), Temperature::Neutral);
    }

    /// What: hue-derived fields appear only above the saturation floor.
    ///
    /// - Input: The same hue at s=50 and s=3.
    /// - Output: Emotion/arousal/valence present, then absent.
    #[test]
    fn hue_fields_gated_on_saturation() {
        let saturated = classify_emotion(30.0, 50.0, 50.0);
        assert!(saturated.hue_emotion.is_some());
        assert!(saturated.arousal.is_some());
        assert!(saturated.valence.is_some());

        let gray = classify_emotion(30.0, 3.0, 50.0);
        assert!(gray.hue_emotion.is_none());
        assert!(gray.arousal.is_none());
        assert!(gray.valence.is_none());
        assert_eq!(gray.temperature, Temperature::Neutral);
    }

    /// What: lightness and saturation band lookups at known points.
    ///
    /// - Input: Representative values in several bands.
    /// - Output: Expected class names.
    #[test]
    fn band_classes() {
        assert_eq!(classify_emotion(155.0, 30.0, 5.0).lightness_class, Some("very_dark"));
        assert_eq!(classify_emotion(155.0, 30.0, 80.0).lightness_class, Some("light"));
        assert_eq!(classify_emotion(155.0, 25.0, 45.0).saturation_class, Some("muted"));
        assert_eq!(classify_emotion(155.0, 5.0, 45.0).saturation_class, Some("desaturated"));
        assert_eq!(classify_emotion(155.0, 60.0, 45.0).saturation_class, Some("saturated"));
    }

    /// What: exact 100 falls outside the half-open bands.
    ///
    /// - Input: Lightness 100 (white) and saturation 100.
    /// - Output: No lightness class; vivid band excludes its upper bound
    ///   too, matching the [0, 100) table domain.
    #[test]
    fn upper_bound_excluded() {
        let white = classify_emotion(0.0, 0.0, 100.0);
        assert!(white.lightness_class.is_none());
        assert!(white.lightness_response.is_none());

        let vivid = classify_emotion(0.0, 100.0, 50.0);
        assert!(vivid.saturation_class.is_none());
    }

    /// What: the representative theme green classifies as expected.
    ///
    /// - Input: HSL (155, 31, 44), roughly #4d9375.
    /// - Output: Cool, medium_dark, muted.
    #[test]
    fn theme_green_profile() {
        let profile = classify_emotion(155.0, 31.0, 44.0);
        assert_eq!(profile.temperature, Temperature::Cool);
        assert_eq!(profile.lightness_class, Some("medium_dark"));
        assert_eq!(profile.saturation_class, Some("muted"));
        assert_eq!(profile.hue_emotion, Some("calm, trust, stability"));
    }
}
