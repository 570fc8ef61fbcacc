//! Command-line argument definition.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::color::HarmonyKind;

/// Huescope - color metrics and accessibility analysis for editor theme files
#[derive(Parser, Debug)]
#[command(name = "huescope")]
#[command(version)]
#[command(about = "Color metrics and accessibility analysis for editor theme files", long_about = None)]
pub struct Args {
    /// Directory containing theme JSON files (default: ./themes, or HUESCOPE_THEMES_DIR)
    #[arg(short = 'd', long, global = true)]
    pub themes_dir: Option<PathBuf>,

    /// Analyze only the named theme
    #[arg(short = 't', long, global = true)]
    pub theme: Option<String>,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "info")]
    pub log_level: String,

    /// Enable verbose output (equivalent to --log-level debug)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// What to analyze
    #[command(subcommand)]
    pub command: Command,
}

/// Analysis subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show the unique color palette of each theme
    Palette,
    /// Detect hue harmony relationships in each theme
    Harmony,
    /// Audit contrast ratios against WCAG thresholds
    Contrast {
        /// Minimum acceptable contrast ratio
        #[arg(long, default_value_t = crate::analyze::DEFAULT_MIN_CONTRAST)]
        min: f64,
    },
    /// Profile the color psychology of each theme
    Psychology,
    /// Compare scope hues and contrast across all themes
    CrossTheme,
    /// Run every per-theme report plus the cross-theme comparison
    All,
    /// Measure the impact of replacing one color with another
    Replace {
        /// Current hex color
        old: String,
        /// Replacement hex color
        new: String,
    },
    /// Suggest harmony-based alternatives for a color
    Suggest {
        /// Base hex color
        color: String,
        /// Restrict suggestions to one harmony scheme
        #[arg(long, value_enum, default_value = "all")]
        harmony: HarmonyKind,
    },
    /// List theme colors perceptually close to a target
    Similar {
        /// Target hex color
        color: String,
        /// Maximum dE76 distance to include
        #[arg(long, default_value_t = crate::analyze::DEFAULT_MAX_DELTA_E)]
        max_delta_e: f64,
    },
    /// Compare two colors directly
    Compare {
        /// First hex color
        color_a: String,
        /// Second hex color
        color_b: String,
    },
}
