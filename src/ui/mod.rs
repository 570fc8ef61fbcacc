//! Plain-text rendering of analysis results.
//!
//! Thin by design: everything printable arrives as a struct from
//! `analyze`, and all this module adds is alignment and optional ANSI
//! color.

/// Report printers, one per analysis.
mod report;
/// Truecolor preview cells.
mod swatch;
/// Column-aligned table rendering.
mod table;

pub use report::{
    banner, print_contrast, print_cross_theme, print_harmony, print_palette, print_psychology,
    print_replacement, print_similar, print_suggestions,
};
pub use swatch::swatch;
pub use table::{Cell, Table};
