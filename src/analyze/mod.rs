//! Pure report computations over loaded themes.
//!
//! Every function here maps a [`crate::theme::ThemeDoc`] (or a set of
//! them) to plain result structs. Nothing prints, logs, or touches the
//! filesystem; the `ui` module renders these results and the integration
//! tests assert on them directly.

/// Per-theme contrast and accessibility audit.
mod contrast;
/// Cross-theme hue consistency comparison.
mod cross_theme;
/// Per-theme harmony detection over the syntax palette.
mod harmony;
/// Unique palette summary with usage and contrast.
mod palette;
/// Psychological profile of a theme.
mod psychology;
/// Replacement impact, harmony suggestions, and similarity search.
mod replace;

pub use contrast::{BorderVisibility, ContrastAudit, ContrastIssue, IssueSeverity, analyze_contrast};
pub use cross_theme::{CrossThemeReport, ScopeSpread, analyze_cross_theme};
pub use harmony::{TemperatureTally, ThemeHarmony, analyze_theme_harmony};
pub use palette::{PaletteEntry, PaletteSummary, analyze_palette};
pub use psychology::{PsychologyProfile, analyze_psychology};
pub use replace::{
    ColorLocation, ContrastChange, HarmonySuggestion, HarmonySuggestions, LightnessVariation,
    Recommendation, ReplacementImpact, SimilarColor, compute_harmony_suggestions,
    compute_replacement_impact, compute_similar_colors,
};

/// Maximum ΔE76 for the similarity search's default cutoff.
pub const DEFAULT_MAX_DELTA_E: f64 = 15.0;

/// Default minimum contrast ratio for the accessibility audit.
pub const DEFAULT_MIN_CONTRAST: f64 = 4.5;
