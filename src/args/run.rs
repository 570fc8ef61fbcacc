//! Subcommand handlers.

use std::collections::BTreeMap;

use crate::analyze;
use crate::args::{Args, Command};
use crate::color::{
    ContrastCategory, color_temperature, contrast_ratio, delta_e_76, delta_e_2000, hex_to_rgb,
    rgb_to_hsl, rgb_to_lab,
};
use crate::theme::{ThemeDoc, load_themes, themes_dir};
use crate::ui;

/// What: Execute the parsed command line.
///
/// Inputs:
/// - `args`: Parsed arguments.
///
/// Output:
/// - `Ok(())` on success; `Err` with a user-facing message otherwise.
pub fn run(args: &Args) -> Result<(), String> {
    ui::banner();
    let color = !args.no_color;

    match &args.command {
        Command::Palette => {
            for (name, theme) in &selected_themes(args)? {
                ui::print_palette(name, &analyze::analyze_palette(theme), color);
            }
        }
        Command::Harmony => {
            for (name, theme) in &selected_themes(args)? {
                ui::print_harmony(name, &analyze::analyze_theme_harmony(theme), color);
            }
        }
        Command::Contrast { min } => {
            for (name, theme) in &selected_themes(args)? {
                ui::print_contrast(name, &analyze::analyze_contrast(theme, *min), color, *min);
            }
        }
        Command::Psychology => {
            for (name, theme) in &selected_themes(args)? {
                ui::print_psychology(name, &analyze::analyze_psychology(theme), color);
            }
        }
        Command::CrossTheme => {
            let themes = selected_themes(args)?;
            ui::print_cross_theme(&analyze::analyze_cross_theme(&themes), color);
        }
        Command::All => {
            let themes = selected_themes(args)?;
            for (name, theme) in &themes {
                ui::print_palette(name, &analyze::analyze_palette(theme), color);
                ui::print_harmony(name, &analyze::analyze_theme_harmony(theme), color);
                ui::print_contrast(
                    name,
                    &analyze::analyze_contrast(theme, analyze::DEFAULT_MIN_CONTRAST),
                    color,
                    analyze::DEFAULT_MIN_CONTRAST,
                );
                ui::print_psychology(name, &analyze::analyze_psychology(theme), color);
            }
            ui::print_cross_theme(&analyze::analyze_cross_theme(&themes), color);
        }
        Command::Replace { old, new } => {
            for (name, theme) in &selected_themes(args)? {
                tracing::info!(theme = %name, "replacement analysis");
                let impact = analyze::compute_replacement_impact(theme, old, new)?;
                ui::print_replacement(old, new, &impact, color);
            }
        }
        Command::Suggest { color: base, harmony } => {
            let suggestions = analyze::compute_harmony_suggestions(base, *harmony)?;
            ui::print_suggestions(&suggestions, color);
        }
        Command::Similar { color: target, max_delta_e } => {
            hex_to_rgb(target).ok_or_else(|| format!("invalid color: {target}"))?;
            for (name, theme) in &selected_themes(args)? {
                tracing::info!(theme = %name, "similarity search");
                let similar = analyze::compute_similar_colors(theme, target, *max_delta_e);
                ui::print_similar(target, &similar, *max_delta_e, color);
            }
        }
        Command::Compare { color_a, color_b } => {
            print_comparison(color_a, color_b, color)?;
        }
    }
    Ok(())
}

/// Load every theme and apply the `--theme` filter.
///
/// Errors when the directory holds no parsable theme or the named
/// theme does not exist.
fn selected_themes(args: &Args) -> Result<BTreeMap<String, ThemeDoc>, String> {
    let dir = themes_dir(args.themes_dir.as_deref());
    let mut themes = load_themes(&dir);
    if themes.is_empty() {
        return Err(format!(
            "no themes found in {}; set HUESCOPE_THEMES_DIR or pass --themes-dir",
            dir.display()
        ));
    }
    tracing::debug!(count = themes.len(), dir = %dir.display(), "themes loaded");

    if let Some(name) = &args.theme {
        let Some(theme) = themes.remove(name) else {
            return Err(format!("theme '{name}' not found in {}", dir.display()));
        };
        themes = BTreeMap::from([(name.clone(), theme)]);
    }
    Ok(themes)
}

/// Side-by-side metrics for two colors.
fn print_comparison(color_a: &str, color_b: &str, color: bool) -> Result<(), String> {
    let rgb_a = hex_to_rgb(color_a).ok_or_else(|| format!("invalid color: {color_a}"))?;
    let rgb_b = hex_to_rgb(color_b).ok_or_else(|| format!("invalid color: {color_b}"))?;

    let mut table = ui::Table::new(["", color_a, color_b]);
    for (label, rgb, hex) in [("a", rgb_a, color_a), ("b", rgb_b, color_b)] {
        let hsl = rgb_to_hsl(rgb);
        let lab = rgb_to_lab(rgb);
        table.add_row(vec![
            ui::Cell::plain(label),
            ui::Cell::plain(format!(
                "H:{:.0} S:{:.0}% L:{:.0}% / L*:{:.1} a*:{:.1} b*:{:.1} / {}",
                hsl.h,
                hsl.s,
                hsl.l,
                lab.l,
                lab.a,
                lab.b,
                color_temperature(hsl.h, hsl.s)
            )),
            ui::swatch(hex, color),
        ]);
    }
    print!("{}", table.render());

    let lab_a = rgb_to_lab(rgb_a);
    let lab_b = rgb_to_lab(rgb_b);
    let ratio = contrast_ratio(rgb_a, rgb_b);
    println!("dE76:   {:.2}", delta_e_76(lab_a, lab_b));
    println!("dE2000: {:.2}", delta_e_2000(lab_a, lab_b));
    println!("contrast: {ratio:.2}:1 ({})", ContrastCategory::from_ratio(ratio));
    Ok(())
}
