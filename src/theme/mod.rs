//! Theme document loading and color extraction.
//!
//! This is the I/O boundary: JSON theme files come in here and leave as
//! maps of [`crate::color::ColorRecord`]. Everything downstream of this
//! module is pure computation.

/// Enriched color extraction from parsed documents.
mod extract;
/// Directory scanning and JSON parsing.
mod loader;
/// Serde document model for theme JSON.
mod types;

pub use extract::{extract_colors, extract_syntax_colors};
pub use loader::{load_themes, themes_dir};
pub use types::{ScopeSpec, ThemeDoc, TokenColor, TokenSettings};

/// Background substituted when a theme omits `editor.background`.
pub const DEFAULT_BACKGROUND: &str = "#000000";

/// Foreground substituted when a theme omits `editor.foreground`.
pub const DEFAULT_FOREGROUND: &str = "#ffffff";
