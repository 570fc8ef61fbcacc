//! Theme directory scanning and JSON parsing.

use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use super::types::ThemeDoc;

/// Environment variable overriding the default themes directory.
const THEMES_DIR_ENV: &str = "HUESCOPE_THEMES_DIR";

/// What: Resolve the themes directory.
///
/// Inputs:
/// - `flag`: Optional `--themes-dir` value from the CLI.
///
/// Output:
/// - The first of: the flag, `$HUESCOPE_THEMES_DIR`, `./themes`.
#[must_use]
pub fn themes_dir(flag: Option<&Path>) -> PathBuf {
    if let Some(dir) = flag {
        return dir.to_path_buf();
    }
    if let Some(dir) = env::var_os(THEMES_DIR_ENV) {
        return PathBuf::from(dir);
    }
    PathBuf::from("themes")
}

/// What: Load every theme JSON file from a directory.
///
/// Inputs:
/// - `dir`: Directory to scan for `*.json` files.
///
/// Output:
/// - Map from theme name (the document's `name`, else the file stem) to
///   parsed [`ThemeDoc`], in filename order. Empty when the directory is
///   missing or holds nothing parsable.
///
/// Details:
/// - Unreadable or malformed files are logged at warn level and skipped;
///   a single bad file never aborts the load.
pub fn load_themes(dir: &Path) -> BTreeMap<String, ThemeDoc> {
    let mut themes = BTreeMap::new();

    let entries = match fs::read_dir(dir) {
        Ok(e) => e,
        Err(err) => {
            tracing::warn!(dir = %dir.display(), error = %err, "cannot read themes directory");
            return themes;
        }
    };

    let mut paths: Vec<PathBuf> = entries
        .filter_map(Result::ok)
        .map(|e| e.path())
        .filter(|p| p.extension().and_then(|e| e.to_str()) == Some("json"))
        .collect();
    paths.sort();

    for path in paths {
        match load_theme_file(&path) {
            Ok((name, doc)) => {
                tracing::debug!(path = %path.display(), name = %name, "loaded theme");
                themes.insert(name, doc);
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "skipping theme file");
            }
        }
    }

    themes
}

/// Parse one theme file, deriving the map key from `name` or the stem.
fn load_theme_file(path: &Path) -> Result<(String, ThemeDoc), String> {
    let raw = fs::read_to_string(path).map_err(|e| e.to_string())?;
    let doc: ThemeDoc = serde_json::from_str(&raw).map_err(|e| e.to_string())?;
    let name = doc
        .name
        .clone()
        .or_else(|| path.file_stem().map(|s| s.to_string_lossy().into_owned()))
        .ok_or_else(|| "theme has no name".to_string())?;
    Ok((name, doc))
}
