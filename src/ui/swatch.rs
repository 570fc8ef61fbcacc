//! Truecolor swatch cells for table previews.

use crossterm::style::{Color, Stylize};

use crate::color::{Rgb, hex_to_rgb, swatch_text_color};
use crate::ui::Cell;

/// What: Build a preview cell for a hex color.
///
/// Inputs:
/// - `hex`: Color to preview; need not be valid.
/// - `color`: Whether ANSI output is enabled.
///
/// Output:
/// - A [`Cell`] showing ` hex ` on the color itself when styling is on
///   and the hex parses; the bare hex otherwise.
///
/// Details:
/// - Overlay text uses the cheap luminance split, which is fine for a
///   preview and keeps compliance math out of the display layer.
#[must_use]
pub fn swatch(hex: &str, color: bool) -> Cell {
    let text = format!(" {hex} ");
    if !color {
        return Cell::plain(text);
    }
    let Some(bg) = hex_to_rgb(hex) else {
        return Cell::plain(text);
    };
    // swatch_text_color only returns the two extremes, both parseable.
    let fg = hex_to_rgb(swatch_text_color(hex)).unwrap_or(Rgb { r: 255, g: 255, b: 255 });
    let styled = text
        .clone()
        .with(Color::Rgb { r: fg.r, g: fg.g, b: fg.b })
        .on(Color::Rgb { r: bg.r, g: bg.g, b: bg.b });
    Cell::styled(text, styled.to_string())
}
