//! Hue relationship detection and harmony color generation.

use clap::ValueEnum;

use super::convert::{Hsl, rotate_hue};

/// A named angular relationship between two hues on the color wheel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelationKind {
    /// Minimal circular difference in 165-195 degrees.
    Complementary,
    /// 25-45 degrees.
    Analogous,
    /// 115-135 degrees.
    TriadicIsh,
    /// 55-75 degrees, one leg of a split-complementary scheme.
    SplitComplementaryElement,
    /// 85-95 degrees, one leg of a square/tetradic scheme.
    SquareTetradicElement,
}

impl std::fmt::Display for RelationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Complementary => "complementary",
            Self::Analogous => "analogous",
            Self::TriadicIsh => "triadic-ish",
            Self::SplitComplementaryElement => "split-complementary element",
            Self::SquareTetradicElement => "square/tetradic element",
        };
        f.write_str(s)
    }
}

/// A detected relationship between two rounded hues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HueRelation {
    /// Which band the pair fell into.
    pub kind: RelationKind,
    /// The lower hue of the pair, rounded to whole degrees.
    pub hue_a: i32,
    /// The higher hue of the pair.
    pub hue_b: i32,
    /// Minimal circular difference between the two (<= 180).
    pub diff: i32,
}

/// Outcome of [`analyze_harmony`] over a set of hues.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HarmonyAnalysis {
    /// Fewer than two distinct hues after rounding.
    Monochromatic,
    /// Two or more distinct hues with pairwise relationships.
    Chromatic {
        /// Number of distinct rounded hues.
        distinct_hues: usize,
        /// Sorted unique hues in whole degrees.
        hue_values: Vec<i32>,
        /// Max minus min of `hue_values` (linear, not circular).
        hue_range: i32,
        /// Every pair that landed inside a named band; pairs outside all
        /// bands are omitted rather than reported as "none".
        relationships: Vec<HueRelation>,
    },
}

/// Classify a minimal circular difference into the first matching band.
///
/// The bands are disjoint by construction, so first-match is the only
/// match.
fn classify_diff(diff: i32) -> Option<RelationKind> {
    match diff {
        165..=195 => Some(RelationKind::Complementary),
        25..=45 => Some(RelationKind::Analogous),
        115..=135 => Some(RelationKind::TriadicIsh),
        55..=75 => Some(RelationKind::SplitComplementaryElement),
        85..=95 => Some(RelationKind::SquareTetradicElement),
        _ => None,
    }
}

/// What: Detect color harmony relationships among a set of hues.
///
/// Inputs:
/// - `hues`: Hue angles in degrees; duplicates and fractional values
///   allowed.
///
/// Output:
/// - [`HarmonyAnalysis::Monochromatic`] for fewer than two distinct
///   rounded hues, otherwise the full pairwise breakdown.
///
/// Details:
/// - Hues are deduplicated by rounding to the nearest whole degree
///   (ties away from zero) before pairing.
/// - Differences are minimal circular distances, so every recorded diff
///   is at most 180.
#[must_use]
pub fn analyze_harmony(hues: &[f64]) -> HarmonyAnalysis {
    let mut rounded: Vec<i32> = hues.iter().map(|h| h.round() as i32).collect();
    rounded.sort_unstable();
    rounded.dedup();

    if rounded.len() < 2 {
        return HarmonyAnalysis::Monochromatic;
    }

    let mut relationships = Vec::new();
    for (i, &h1) in rounded.iter().enumerate() {
        for &h2 in &rounded[i + 1..] {
            let mut diff = (h1 - h2).abs();
            if diff > 180 {
                diff = 360 - diff;
            }
            if let Some(kind) = classify_diff(diff) {
                relationships.push(HueRelation { kind, hue_a: h1, hue_b: h2, diff });
            }
        }
    }

    let hue_range = rounded[rounded.len() - 1] - rounded[0];
    HarmonyAnalysis::Chromatic {
        distinct_hues: rounded.len(),
        hue_values: rounded,
        hue_range,
        relationships,
    }
}

/// Which harmony scheme to generate rotations for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum HarmonyKind {
    /// +180.
    Complementary,
    /// -30 and +30.
    Analogous,
    /// +120 and +240.
    Triadic,
    /// +150 and +210.
    Split,
    /// +90, +180, and +270.
    Tetradic,
    /// Every scheme above, in the listed order.
    All,
}

/// What: Generate harmony companions for a base HSL color.
///
/// Inputs:
/// - `h`, `s`, `l`: Base color in HSL.
/// - `kind`: Which scheme's rotations to apply.
///
/// Output:
/// - One [`Hsl`] per rotation, saturation and lightness unchanged.
///
/// Details:
/// - `All` concatenates every scheme in declaration order and keeps
///   duplicate rotations (+180 appears for both complementary and
///   tetradic). Callers see the full union on purpose; deduplication
///   would hide which schemes share an angle.
#[must_use]
pub fn generate_harmony_colors(h: f64, s: f64, l: f64, kind: HarmonyKind) -> Vec<Hsl> {
    let mut out = Vec::new();
    let mut push = |deg: f64| out.push(Hsl { h: rotate_hue(h, deg), s, l });

    if matches!(kind, HarmonyKind::Complementary | HarmonyKind::All) {
        push(180.0);
    }
    if matches!(kind, HarmonyKind::Analogous | HarmonyKind::All) {
        push(-30.0);
        push(30.0);
    }
    if matches!(kind, HarmonyKind::Triadic | HarmonyKind::All) {
        push(120.0);
        push(240.0);
    }
    if matches!(kind, HarmonyKind::Split | HarmonyKind::All) {
        push(150.0);
        push(210.0);
    }
    if matches!(kind, HarmonyKind::Tetradic | HarmonyKind::All) {
        push(90.0);
        push(180.0);
        push(270.0);
    }

    out
}
