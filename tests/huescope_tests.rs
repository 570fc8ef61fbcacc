use huescope::analyze;
use huescope::color::{
    ContrastCategory, HarmonyKind, Lab, Rgb, contrast_ratio, delta_e_2000, hex_to_rgb,
    rgb_to_hex, rgb_to_hsl, rgb_to_lab,
};
use huescope::theme::{ThemeDoc, extract_syntax_colors, load_themes};

use std::fs;
use std::path::Path;

const DUSK: &str = r##"{
    "name": "Dusk",
    "type": "dark",
    "colors": {
        "editor.background": "#121212",
        "editor.foreground": "#dbd7ca",
        "panel.border": "#2a2a2a"
    },
    "tokenColors": [
        {"scope": "keyword", "settings": {"foreground": "#4d9375"}},
        {"scope": ["string", "string.quoted"], "settings": {"foreground": "#c98a7d"}},
        {"scope": "comment", "settings": {"foreground": "#5c6773", "fontStyle": "italic"}}
    ],
    "semanticTokenColors": {
        "namespace": "#b8a965"
    }
}"##;

const NOON: &str = r##"{
    "name": "Noon",
    "type": "light",
    "colors": {
        "editor.background": "#fafafa",
        "editor.foreground": "#393a34"
    },
    "tokenColors": [
        {"scope": "keyword", "settings": {"foreground": "#1e754f"}},
        {"scope": "string", "settings": {"foreground": "#a65e2b"}}
    ]
}"##;

fn write_themes(dir: &Path) {
    fs::write(dir.join("dusk.json"), DUSK).expect("write dusk");
    fs::write(dir.join("noon.json"), NOON).expect("write noon");
    fs::write(dir.join("notes.txt"), "not a theme").expect("write noise");
    fs::write(dir.join("broken.json"), "{ nope").expect("write broken");
}

fn dusk() -> ThemeDoc {
    serde_json::from_str(DUSK).expect("dusk parses")
}

/// What: loading a directory picks up JSON themes and skips noise
///
/// - Input: Two valid themes, a text file, and broken JSON
/// - Output: Exactly the two themes, keyed by their declared names
#[test]
fn loader_end_to_end() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_themes(dir.path());

    let themes = load_themes(dir.path());
    assert_eq!(themes.len(), 2);
    assert!(themes.contains_key("Dusk"));
    assert!(themes.contains_key("Noon"));

    let syntax = extract_syntax_colors(&themes["Dusk"]);
    assert!(syntax.contains_key("string.quoted"));
    assert_eq!(syntax["semantic:namespace"].hex, "#b8a965");
}

/// What: the dark fixture's keyword color meets WCAG AA
///
/// - Input: `#4d9375` on `#121212`
/// - Output: Ratio at least 4.5, categorized AA or better
#[test]
fn keyword_meets_aa() {
    let fg = hex_to_rgb("#4d9375").expect("valid");
    let bg = hex_to_rgb("#121212").expect("valid");
    let ratio = contrast_ratio(fg, bg);
    assert!(ratio >= 4.5, "got {ratio}");
    assert!(ContrastCategory::from_ratio(ratio).passes());
}

/// What: CIEDE2000 matches the Sharma, Wu, and Dalal reference data
///
/// - Input: Published Lab pairs covering the hue-rotation and
///   achromatic branches
/// - Output: Distances within 1e-4 of the published values
#[test]
fn ciede2000_reference_pairs() {
    let cases: [(Lab, Lab, f64); 8] = [
        (
            Lab { l: 50.0, a: 2.6772, b: -79.7751 },
            Lab { l: 50.0, a: 0.0, b: -82.7485 },
            2.0425,
        ),
        (
            Lab { l: 50.0, a: 3.1571, b: -77.2803 },
            Lab { l: 50.0, a: 0.0, b: -82.7485 },
            2.8615,
        ),
        (
            Lab { l: 50.0, a: 2.8361, b: -74.0200 },
            Lab { l: 50.0, a: 0.0, b: -82.7485 },
            3.4412,
        ),
        (Lab { l: 50.0, a: 0.0, b: 0.0 }, Lab { l: 50.0, a: -1.0, b: 2.0 }, 2.3669),
        (
            Lab { l: 50.0, a: 2.4900, b: -0.0010 },
            Lab { l: 50.0, a: -2.4900, b: 0.0009 },
            7.1792,
        ),
        (Lab { l: 50.0, a: 2.5, b: 0.0 }, Lab { l: 73.0, a: 25.0, b: -18.0 }, 27.1492),
        (
            Lab { l: 6.7747, a: -0.2908, b: -2.4247 },
            Lab { l: 5.8714, a: -0.0985, b: -2.2286 },
            0.6377,
        ),
        (
            Lab { l: 2.0776, a: 0.0795, b: -1.1350 },
            Lab { l: 0.9033, a: -0.0636, b: -0.5514 },
            0.9082,
        ),
    ];

    for (a, b, expected) in cases {
        let got = delta_e_2000(a, b);
        assert!((got - expected).abs() < 1e-4, "expected {expected}, got {got}");
        let sym = delta_e_2000(b, a);
        assert!((got - sym).abs() < 1e-9);
    }
}

/// What: the palette report deduplicates and scores the fixture
///
/// - Input: The dark fixture theme
/// - Output: Four unique syntax colors, keyword entry passing AA
#[test]
fn palette_report() {
    let summary = analyze::analyze_palette(&dusk());
    assert_eq!(summary.bg_hex, "#121212");
    assert_eq!(summary.unique_syntax.len(), 4);
    let keyword = summary
        .unique_syntax
        .iter()
        .find(|e| e.record.hex == "#4d9375")
        .expect("keyword entry");
    assert!(keyword.contrast_ratio >= 4.5);
    assert!(keyword.used_by.contains(&"keyword".to_string()));
}

/// What: the contrast audit flags the faint comment color
///
/// - Input: The dark fixture at the 4.5 minimum
/// - Output: Main pair passes; `#5c6773` shows up below the minimum
#[test]
fn contrast_audit_report() {
    let audit = analyze::analyze_contrast(&dusk(), 4.5);
    assert!(audit.main_ratio.expect("main ratio") >= 4.5);
    assert!(audit.issues.iter().any(|i| i.hex == "#5c6773"));
    assert!(audit.borders.iter().any(|b| b.key == "panel.border"));
}

/// What: cross-theme comparison keeps shared chromatic scopes
///
/// - Input: Both fixture themes via the loader
/// - Output: `keyword` and `string` are common; per-theme contrast
///   present for both
#[test]
fn cross_theme_report() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_themes(dir.path());
    let themes = load_themes(dir.path());

    let report = analyze::analyze_cross_theme(&themes);
    assert_eq!(report.common_scopes, 2);
    assert_eq!(report.contrasts.len(), 2);
    assert!(report.contrasts["Dusk"] > 4.5);
}

/// What: replacing the keyword green is tracked through the theme
///
/// - Input: Replace `#4d9375` with a darker variant in the fixture
/// - Output: The keyword scope is affected and a contrast change
///   against the background is reported
#[test]
fn replacement_impact_end_to_end() {
    let impact = analyze::compute_replacement_impact(&dusk(), "#4d9375", "#2b5441")
        .expect("valid colors");
    assert_eq!(impact.affected_syntax, vec!["keyword".to_string()]);
    assert_eq!(impact.contrast_changes.len(), 1);
    assert!(impact.contrast_changes[0].change < 0.0);
    assert!(!impact.recommendations.is_empty());
}

/// What: the full suggestion set has ten candidates and five steps
///
/// - Input: `#4d9375` with every harmony scheme
/// - Output: 10 suggestions, 5 variations, all hexes round-trip
#[test]
fn suggestions_full_set() {
    let out = analyze::compute_harmony_suggestions("#4d9375", HarmonyKind::All)
        .expect("valid base");
    assert_eq!(out.suggestions.len(), 10);
    assert_eq!(out.variations.len(), 5);
    for suggestion in &out.suggestions {
        let rgb = hex_to_rgb(&suggestion.hex).expect("suggested hex parses");
        assert_eq!(rgb_to_hex(rgb), suggestion.hex);
    }
}

/// What: similarity search finds the keyword green from a neighbor
///
/// - Input: `#4f9577` against the dark fixture, default cutoff
/// - Output: The keyword scope listed first with a small distance
#[test]
fn similar_colors_end_to_end() {
    let similar =
        analyze::compute_similar_colors(&dusk(), "#4f9577", analyze::DEFAULT_MAX_DELTA_E);
    assert!(!similar.is_empty());
    assert_eq!(similar[0].hex, "#4d9375");
    assert!(similar[0].delta_e < 5.0);
}

/// What: conversion helpers agree on a round trip through HSL
///
/// - Input: The fixture palette hexes
/// - Output: RGB -> HSL -> RGB stays within one step per channel
#[test]
fn fixture_palette_round_trips() {
    for hex in ["#4d9375", "#c98a7d", "#5c6773", "#b8a965", "#dbd7ca"] {
        let rgb = hex_to_rgb(hex).expect("valid");
        let back = huescope::color::hsl_to_rgb(rgb_to_hsl(rgb));
        assert!(i32::from(rgb.r).abs_diff(i32::from(back.r)) <= 1);
        assert!(i32::from(rgb.g).abs_diff(i32::from(back.g)) <= 1);
        assert!(i32::from(rgb.b).abs_diff(i32::from(back.b)) <= 1);
    }
}

/// What: Lab conversion hits the reference white and black points
///
/// - Input: Pure white and pure black
/// - Output: L* of 100 and 0 with near-zero chroma
#[test]
fn lab_endpoints() {
    let white = rgb_to_lab(Rgb { r: 255, g: 255, b: 255 });
    assert!((white.l - 100.0).abs() < 0.01);
    assert!(white.a.abs() < 0.01 && white.b.abs() < 0.01);

    let black = rgb_to_lab(Rgb { r: 0, g: 0, b: 0 });
    assert!(black.l.abs() < 0.01);
}
