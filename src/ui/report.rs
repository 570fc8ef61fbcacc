//! Printers for the analysis reports.
//!
//! Everything here formats structs from `analyze`; no metric is
//! computed in this module.

use crate::analyze::{
    ContrastAudit, CrossThemeReport, HarmonySuggestions, PaletteEntry, PaletteSummary,
    PsychologyProfile, ReplacementImpact, SimilarColor, TemperatureTally, ThemeHarmony,
};
use crate::color::{ContrastCategory, HarmonyAnalysis};
use crate::ui::{Cell, Table, swatch};

/// Startup banner with the crate name and version.
pub fn banner() {
    println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
}

/// Section heading for one theme.
fn heading(title: &str) {
    println!("\n== {title} ==");
}

fn temperature_line(tally: &TemperatureTally) {
    println!(
        "  temperatures: {} warm, {} cool, {} neutral, {} transitional",
        tally.warm, tally.cool, tally.neutral, tally.transitional
    );
}

fn palette_table(entries: &[PaletteEntry], color: bool) -> Table {
    let mut table = Table::new(["Hex", "HSL", "Temp", "CR", "Uses", "Preview"]);
    for entry in entries {
        let hsl = entry.record.hsl;
        table.add_row(vec![
            Cell::plain(&entry.record.hex),
            Cell::plain(format!("H:{:.0} S:{:.0}% L:{:.0}%", hsl.h, hsl.s, hsl.l)),
            Cell::plain(entry.temperature.to_string()),
            Cell::plain(format!("{:.2}", entry.contrast_ratio)),
            Cell::plain(entry.used_by.len().to_string()),
            swatch(&entry.record.hex, color),
        ]);
    }
    table
}

/// Print the unique palette of one theme.
pub fn print_palette(name: &str, summary: &PaletteSummary, color: bool) {
    heading(&format!("Palette: {name}"));
    if let Some(base) = &summary.base {
        println!("  base: {base}");
    }
    println!("  background: {}", summary.bg_hex);

    println!("\n  UI colors ({} unique):", summary.unique_ui.len());
    print!("{}", indent(&palette_table(&summary.unique_ui, color).render()));

    println!("\n  Syntax colors ({} unique):", summary.unique_syntax.len());
    print!("{}", indent(&palette_table(&summary.unique_syntax, color).render()));
}

/// Print harmony analysis for one theme.
pub fn print_harmony(name: &str, harmony: &ThemeHarmony, _color: bool) {
    heading(&format!("Harmony: {name}"));
    match &harmony.harmony {
        HarmonyAnalysis::Monochromatic => {
            println!("  monochromatic: fewer than two distinct chromatic hues");
        }
        HarmonyAnalysis::Chromatic { distinct_hues, hue_values, hue_range, relationships } => {
            println!("  distinct hues: {distinct_hues} (range {hue_range})");
            println!(
                "  hues: {}",
                hue_values.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ")
            );
            if relationships.is_empty() {
                println!("  no named hue relationships");
            } else {
                for rel in relationships {
                    println!("  {} <-> {}: {} ({} apart)", rel.hue_a, rel.hue_b, rel.kind, rel.diff);
                }
            }
        }
    }
    temperature_line(&harmony.temperatures);
}

/// Print the contrast audit for one theme.
pub fn print_contrast(name: &str, audit: &ContrastAudit, color: bool, min_contrast: f64) {
    heading(&format!("Contrast: {name}"));
    match audit.main_ratio {
        Some(ratio) => println!(
            "  main text: {} on {} = {ratio:.2}:1 ({})",
            audit.fg_hex,
            audit.bg_hex,
            ContrastCategory::from_ratio(ratio)
        ),
        None => println!("  main text: unparsable colors"),
    }
    println!("  syntax colors passing {min_contrast:.1}:1: {}", audit.passing);

    if !audit.issues.is_empty() {
        let mut table = Table::new(["Hex", "CR", "Severity", "Scope", "Preview"]);
        for issue in &audit.issues {
            let severity = match issue.severity {
                crate::analyze::IssueSeverity::Warn => "warn",
                crate::analyze::IssueSeverity::Fail => "fail",
            };
            table.add_row(vec![
                Cell::plain(&issue.hex),
                Cell::plain(format!("{:.2}", issue.ratio)),
                Cell::plain(severity),
                Cell::plain(&issue.scope),
                swatch(&issue.hex, color),
            ]);
        }
        println!("\n  below the minimum:");
        print!("{}", indent(&table.render()));
    }

    if !audit.borders.is_empty() {
        let mut table = Table::new(["Key", "Hex", "CR", "dE", "Preview"]);
        for border in &audit.borders {
            table.add_row(vec![
                Cell::plain(&border.key),
                Cell::plain(&border.hex),
                Cell::plain(format!("{:.2}", border.ratio)),
                Cell::plain(format!("{:.1}", border.delta_e)),
                swatch(&border.hex, color),
            ]);
        }
        println!("\n  borders:");
        print!("{}", indent(&table.render()));
    }
}

/// Print the psychology profile for one theme.
pub fn print_psychology(name: &str, profile: &PsychologyProfile, _color: bool) {
    heading(&format!("Psychology: {name}"));
    println!("  background: {} ({})", profile.bg_hex, if profile.is_dark { "dark" } else { "light" });
    if let Some(emotion) = &profile.background_emotion {
        println!("  background temperature: {}", emotion.temperature);
        if let Some(hue_emotion) = emotion.hue_emotion {
            println!("  background reads as: {hue_emotion}");
        }
    }
    println!("  average syntax saturation: {:.1}%", profile.avg_saturation);
    temperature_line(&profile.temperatures);
    for (emotion, count) in &profile.emotions {
        println!("  {count} x {emotion}");
    }
}

/// Print the cross-theme consistency report.
pub fn print_cross_theme(report: &CrossThemeReport, _color: bool) {
    heading("Cross-theme consistency");
    println!("  scopes common to all themes: {}", report.common_scopes);

    if report.inconsistent.is_empty() {
        println!("  no scope drifts more than 15 degrees");
    } else {
        for spread in &report.inconsistent {
            println!("  {} drifts {:.1} degrees:", spread.scope, spread.spread);
            for (theme, hue) in &spread.hues {
                println!("    {theme}: H:{hue:.0}");
            }
        }
    }

    if !report.contrasts.is_empty() {
        println!("\n  main contrast per theme:");
        for (theme, ratio) in &report.contrasts {
            println!("    {theme}: {ratio:.2}:1 ({})", ContrastCategory::from_ratio(*ratio));
        }
    }
}

/// Print the impact of a proposed replacement.
pub fn print_replacement(old: &str, new: &str, impact: &ReplacementImpact, color: bool) {
    heading(&format!("Replace {old} with {new}"));
    let mut table = Table::new(["", "Preview"]);
    table.add_row(vec![Cell::plain("old"), swatch(old, color)]);
    table.add_row(vec![Cell::plain("new"), swatch(new, color)]);
    print!("{}", indent(&table.render()));

    println!("  perceptual difference (dE76): {:.2}", impact.delta_e);
    println!("  affected UI keys: {}", impact.affected_ui.len());
    for key in &impact.affected_ui {
        println!("    {key}");
    }
    println!("  affected syntax scopes: {}", impact.affected_syntax.len());
    for key in &impact.affected_syntax {
        println!("    {key}");
    }

    for change in &impact.contrast_changes {
        println!(
            "  vs {}: {:.2} -> {:.2} ({:+.2})",
            change.context, change.old_contrast, change.new_contrast, change.change
        );
    }

    println!("\n  recommendations:");
    for rec in &impact.recommendations {
        println!("    - {rec}");
    }
}

/// Human label for a suggestion's hue rotation.
fn rotation_label(rotation: f64) -> String {
    let named = [
        (180.0, "complementary"),
        (30.0, "analogous (+30)"),
        (-30.0, "analogous (-30)"),
        (120.0, "triadic (+120)"),
        (-120.0, "triadic (+240)"),
        (150.0, "split (+150)"),
        (-150.0, "split (+210)"),
        (90.0, "tetradic (+90)"),
        (-90.0, "tetradic (+270)"),
    ];
    for (angle, label) in named {
        if (rotation - angle).abs() < 5.0 {
            return label.to_string();
        }
    }
    format!("harmony ({rotation:+.0})")
}

/// Print harmony suggestions and lightness variations for a base color.
pub fn print_suggestions(out: &HarmonySuggestions, color: bool) {
    heading(&format!("Suggestions for {}", out.base_hex));
    println!(
        "  base HSL: H:{:.1} S:{:.1}% L:{:.1}%",
        out.base_hsl.h, out.base_hsl.s, out.base_hsl.l
    );

    let mut table = Table::new(["Scheme", "Hex", "HSL", "dE", "Preview"]);
    for suggestion in &out.suggestions {
        table.add_row(vec![
            Cell::plain(rotation_label(suggestion.rotation)),
            Cell::plain(&suggestion.hex),
            Cell::plain(format!(
                "H:{:.0} S:{:.0}% L:{:.0}%",
                suggestion.hsl.h, suggestion.hsl.s, suggestion.hsl.l
            )),
            Cell::plain(format!("{:.1}", suggestion.delta_e)),
            swatch(&suggestion.hex, color),
        ]);
    }
    print!("{}", indent(&table.render()));

    println!("\n  lightness variations:");
    let mut table = Table::new(["Name", "Hex", "Preview"]);
    for variation in &out.variations {
        table.add_row(vec![
            Cell::plain(&variation.name),
            Cell::plain(&variation.hex),
            swatch(&variation.hex, color),
        ]);
    }
    print!("{}", indent(&table.render()));
}

/// Print colors similar to a target, capped at twenty rows.
pub fn print_similar(target: &str, similar: &[SimilarColor], max_delta_e: f64, color: bool) {
    heading(&format!("Colors within dE {max_delta_e:.1} of {target}"));
    if similar.is_empty() {
        println!("  none found");
        return;
    }

    let mut table = Table::new(["Location", "Key", "Hex", "dE", "Preview"]);
    for item in similar.iter().take(20) {
        table.add_row(vec![
            Cell::plain(item.location.to_string()),
            Cell::plain(truncate(&item.key, 40)),
            Cell::plain(&item.hex),
            Cell::plain(format!("{:.1}", item.delta_e)),
            swatch(&item.hex, color),
        ]);
    }
    print!("{}", indent(&table.render()));
    if similar.len() > 20 {
        println!("  ... and {} more", similar.len() - 20);
    }
}

/// Indent every line of a rendered table by two spaces.
fn indent(rendered: &str) -> String {
    rendered.lines().map(|line| format!("  {line}\n")).collect()
}

/// Cut a key to `max` characters with an ellipsis marker.
fn truncate(key: &str, max: usize) -> String {
    if key.chars().count() <= max {
        key.to_string()
    } else {
        let cut: String = key.chars().take(max).collect();
        format!("{cut}...")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// What: rotation labels name the canonical angles and fall back
    /// to the raw rotation elsewhere.
    #[test]
    fn rotation_labels() {
        assert_eq!(rotation_label(180.0), "complementary");
        assert_eq!(rotation_label(-120.0), "triadic (+240)");
        assert_eq!(rotation_label(-29.6), "analogous (-30)");
        assert_eq!(rotation_label(47.0), "harmony (+47)");
    }

    /// What: truncation is character-based and marks the cut.
    #[test]
    fn truncate_marks_cut() {
        assert_eq!(truncate("short", 40), "short");
        let long = "x".repeat(45);
        let cut = truncate(&long, 40);
        assert_eq!(cut.chars().count(), 43);
        assert!(cut.ends_with("..."));
    }
}
