//! Replacement impact, harmony suggestions, and nearest-color search.

use std::fmt;

use crate::color::{
    ColorRecord, HarmonyKind, Hsl, contrast_ratio, delta_e_76, generate_harmony_colors,
    hex_to_rgb, hsl_to_rgb, rgb_to_hex, rgb_to_hsl, rgb_to_lab,
};
use crate::theme::{DEFAULT_BACKGROUND, ThemeDoc, extract_colors, extract_syntax_colors};

/// Contrast before and after a replacement, against one context color.
#[derive(Debug, Clone)]
pub struct ContrastChange {
    /// The color compared against, by UI key.
    pub context: String,
    /// Ratio before the replacement.
    pub old_contrast: f64,
    /// Ratio after.
    pub new_contrast: f64,
    /// Signed difference, new minus old.
    pub change: f64,
}

/// Advice derived from a proposed replacement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Recommendation {
    /// ΔE below 2.3.
    ImperceptibleChange,
    /// ΔE in [2.3, 10).
    ModerateChange,
    /// ΔE of 10 or more.
    SignificantChange,
    /// The new color crosses 4.5 upward against the background.
    GainsWcagAa,
    /// The new color drops below 4.5.
    LosesWcagAa,
    /// The new color sits below 3.0 against the background.
    VisibilityRisk,
    /// The replacement crosses the warm/cool divide.
    TemperatureShift {
        /// Whether the old color is warm.
        old_warm: bool,
    },
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImperceptibleChange => {
                write!(f, "change is barely perceptible; safe replacement")
            }
            Self::ModerateChange => write!(f, "moderate change; review affected elements"),
            Self::SignificantChange => {
                write!(f, "significant change; thorough review recommended")
            }
            Self::GainsWcagAa => write!(f, "improves WCAG AA compliance for text"),
            Self::LosesWcagAa => write!(f, "reduces contrast below WCAG AA"),
            Self::VisibilityRisk => write!(f, "new color may have visibility issues"),
            Self::TemperatureShift { old_warm } => {
                let (from, to) = if *old_warm { ("warm", "cool") } else { ("cool", "warm") };
                write!(f, "temperature shift: {from} to {to}")
            }
        }
    }
}

/// Everything a replacement touches and how much it moves.
#[derive(Debug, Clone)]
pub struct ReplacementImpact {
    /// UI keys currently using the old color.
    pub affected_ui: Vec<String>,
    /// Syntax scopes currently using the old color.
    pub affected_syntax: Vec<String>,
    /// Contrast deltas against the background.
    pub contrast_changes: Vec<ContrastChange>,
    /// Ordered advice, most general first.
    pub recommendations: Vec<Recommendation>,
    /// ΔE76 between the old and new color.
    pub delta_e: f64,
}

/// What: Measure the impact of swapping one theme color for another.
///
/// Inputs:
/// - `theme`: Parsed document to search for usages.
/// - `old_color`, `new_color`: Hex strings.
///
/// Output:
/// - `Ok(ReplacementImpact)`; `Err` when either hex fails to parse.
///
/// Details:
/// - Usage matching compares the first seven characters of the lowered
///   hex, so alpha suffixes still match their base color.
/// - Temperature here is the coarse warm/cool split used for
///   replacement advice (warm below 60 or above 300 degrees), not the
///   four-way scale from the psychology tables.
pub fn compute_replacement_impact(
    theme: &ThemeDoc,
    old_color: &str,
    new_color: &str,
) -> Result<ReplacementImpact, String> {
    let old_rgb = hex_to_rgb(old_color).ok_or_else(|| format!("invalid color: {old_color}"))?;
    let new_rgb = hex_to_rgb(new_color).ok_or_else(|| format!("invalid color: {new_color}"))?;

    let old_hsl = rgb_to_hsl(old_rgb);
    let new_hsl = rgb_to_hsl(new_rgb);
    let delta_e = delta_e_76(rgb_to_lab(old_rgb), rgb_to_lab(new_rgb));

    let needle = canonical_stem(old_color);
    let affected_ui: Vec<String> = extract_colors(theme)
        .iter()
        .filter(|(_, record)| canonical_stem(&record.hex) == needle)
        .map(|(key, _)| key.clone())
        .collect();
    let affected_syntax: Vec<String> = extract_syntax_colors(theme)
        .iter()
        .filter(|(_, record)| canonical_stem(&record.hex) == needle)
        .map(|(key, _)| key.clone())
        .collect();

    let bg_rgb = hex_to_rgb(theme.background_hex().unwrap_or(DEFAULT_BACKGROUND));

    let mut contrast_changes = Vec::new();
    let mut recommendations = Vec::new();

    recommendations.push(if delta_e < 2.3 {
        Recommendation::ImperceptibleChange
    } else if delta_e < 10.0 {
        Recommendation::ModerateChange
    } else {
        Recommendation::SignificantChange
    });

    if let Some(bg) = bg_rgb {
        let old_cr = contrast_ratio(old_rgb, bg);
        let new_cr = contrast_ratio(new_rgb, bg);
        contrast_changes.push(ContrastChange {
            context: "editor.background".to_string(),
            old_contrast: old_cr,
            new_contrast: new_cr,
            change: new_cr - old_cr,
        });

        if old_cr < 4.5 && new_cr >= 4.5 {
            recommendations.push(Recommendation::GainsWcagAa);
        } else if old_cr >= 4.5 && new_cr < 4.5 {
            recommendations.push(Recommendation::LosesWcagAa);
        }
        if new_cr < 3.0 {
            recommendations.push(Recommendation::VisibilityRisk);
        }
    }

    let old_warm = is_warm(old_hsl.h);
    if old_warm != is_warm(new_hsl.h) {
        recommendations.push(Recommendation::TemperatureShift { old_warm });
    }

    Ok(ReplacementImpact {
        affected_ui,
        affected_syntax,
        contrast_changes,
        recommendations,
        delta_e,
    })
}

/// Coarse warm/cool split used only for replacement advice.
fn is_warm(h: f64) -> bool {
    h < 60.0 || h > 300.0
}

/// Lowered hex without any alpha suffix.
fn canonical_stem(hex: &str) -> String {
    let lower = hex.to_lowercase();
    lower.chars().take(7).collect()
}

/// One harmony-derived candidate color.
#[derive(Debug, Clone)]
pub struct HarmonySuggestion {
    /// Candidate hex.
    pub hex: String,
    /// Candidate HSL.
    pub hsl: Hsl,
    /// ΔE76 from the base color.
    pub delta_e: f64,
    /// Hue rotation from the base, normalized to (-180, 180].
    pub rotation: f64,
}

/// A lightness step of the base color.
#[derive(Debug, Clone)]
pub struct LightnessVariation {
    /// Label in the form `L<lightness>`.
    pub name: String,
    /// Variation hex.
    pub hex: String,
}

/// Harmony suggestions and lightness steps for one base color.
#[derive(Debug, Clone)]
pub struct HarmonySuggestions {
    /// The base hex as given.
    pub base_hex: String,
    /// The base in HSL.
    pub base_hsl: Hsl,
    /// Candidates in scheme order.
    pub suggestions: Vec<HarmonySuggestion>,
    /// Five steps at -20, -10, 0, +10, +20 lightness, clamped.
    pub variations: Vec<LightnessVariation>,
}

/// What: Generate harmony-based replacement candidates for a color.
///
/// Inputs:
/// - `base_color`: Hex string.
/// - `kind`: Which harmony scheme (or all of them).
///
/// Output:
/// - `Ok(HarmonySuggestions)`; `Err` when the hex fails to parse.
pub fn compute_harmony_suggestions(
    base_color: &str,
    kind: HarmonyKind,
) -> Result<HarmonySuggestions, String> {
    let base_rgb =
        hex_to_rgb(base_color).ok_or_else(|| format!("invalid base color: {base_color}"))?;
    let base_hsl = rgb_to_hsl(base_rgb);
    let base_lab = rgb_to_lab(base_rgb);

    let suggestions = generate_harmony_colors(base_hsl.h, base_hsl.s, base_hsl.l, kind)
        .into_iter()
        .map(|hsl| {
            let rgb = hsl_to_rgb(hsl);
            let mut rotation = hsl.h - base_hsl.h;
            if rotation > 180.0 {
                rotation -= 360.0;
            } else if rotation < -180.0 {
                rotation += 360.0;
            }
            HarmonySuggestion {
                hex: rgb_to_hex(rgb),
                hsl,
                delta_e: delta_e_76(base_lab, rgb_to_lab(rgb)),
                rotation,
            }
        })
        .collect();

    let variations = [-20.0, -10.0, 0.0, 10.0, 20.0]
        .iter()
        .map(|step| {
            let l = (base_hsl.l + step).clamp(0.0, 100.0);
            let rgb = hsl_to_rgb(Hsl { h: base_hsl.h, s: base_hsl.s, l });
            LightnessVariation { name: format!("L{}", l as i64), hex: rgb_to_hex(rgb) }
        })
        .collect();

    Ok(HarmonySuggestions {
        base_hex: base_color.to_string(),
        base_hsl,
        suggestions,
        variations,
    })
}

/// Where a similar color lives in the theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorLocation {
    /// A `colors` entry.
    Ui,
    /// A token or semantic token scope.
    Syntax,
}

impl fmt::Display for ColorLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ui => write!(f, "UI"),
            Self::Syntax => write!(f, "Syntax"),
        }
    }
}

/// A theme color within the requested ΔE of the target.
#[derive(Debug, Clone)]
pub struct SimilarColor {
    /// UI or syntax.
    pub location: ColorLocation,
    /// Key or scope name.
    pub key: String,
    /// Canonical hex.
    pub hex: String,
    /// ΔE76 from the target.
    pub delta_e: f64,
}

/// What: Find theme colors perceptually close to a target.
///
/// Inputs:
/// - `theme`: Parsed document.
/// - `target_color`: Hex string.
/// - `max_delta_e`: Inclusion threshold (15.0 by default elsewhere).
///
/// Output:
/// - Matches across UI and syntax colors, ascending by ΔE. Empty when
///   the target fails to parse.
#[must_use]
pub fn compute_similar_colors(
    theme: &ThemeDoc,
    target_color: &str,
    max_delta_e: f64,
) -> Vec<SimilarColor> {
    let Some(target_rgb) = hex_to_rgb(target_color) else {
        return Vec::new();
    };
    let target_lab = rgb_to_lab(target_rgb);

    let mut similar = Vec::new();
    let mut push = |location: ColorLocation, key: &str, record: &ColorRecord| {
        let delta_e = delta_e_76(target_lab, record.lab);
        if delta_e <= max_delta_e {
            similar.push(SimilarColor {
                location,
                key: key.to_string(),
                hex: record.hex.clone(),
                delta_e,
            });
        }
    };

    for (key, record) in &extract_colors(theme) {
        push(ColorLocation::Ui, key, record);
    }
    for (key, record) in &extract_syntax_colors(theme) {
        push(ColorLocation::Syntax, key, record);
    }

    similar.sort_by(|a, b| a.delta_e.total_cmp(&b.delta_e));
    similar
}
