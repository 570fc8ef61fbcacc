//! Enriched color extraction from parsed theme documents.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::color::ColorRecord;

use super::types::ThemeDoc;

/// What: Extract all UI colors as enriched records.
///
/// Inputs:
/// - `theme`: Parsed document.
///
/// Output:
/// - Map from semantic key (`editor.background`, ...) to
///   [`ColorRecord`].
///
/// Details:
/// - Non-string values and unparsable hex are silently skipped; the
///   loader already warned about structurally broken files.
#[must_use]
pub fn extract_colors(theme: &ThemeDoc) -> BTreeMap<String, ColorRecord> {
    let mut out = BTreeMap::new();
    for (key, value) in &theme.colors {
        if let Some(hex) = value.as_str()
            && let Some(record) = ColorRecord::from_hex(hex)
        {
            out.insert(key.clone(), record);
        }
    }
    out
}

/// What: Extract syntax and semantic token colors.
///
/// Inputs:
/// - `theme`: Parsed document.
///
/// Output:
/// - Map from scope name to [`ColorRecord`]; semantic-token entries are
///   keyed with a `semantic:` prefix.
///
/// Details:
/// - Token rules without a foreground contribute nothing.
/// - A rule with several scopes produces one entry per scope, all
///   sharing the same record.
/// - Later rules overwrite earlier ones for the same scope, matching
///   how editors apply token rules in order.
#[must_use]
pub fn extract_syntax_colors(theme: &ThemeDoc) -> BTreeMap<String, ColorRecord> {
    let mut out = BTreeMap::new();

    for token in &theme.token_colors {
        let Some(fg) = token.settings.foreground.as_deref() else {
            continue;
        };
        let Some(record) = ColorRecord::from_hex(fg) else {
            continue;
        };
        if let Some(scope) = &token.scope {
            for name in scope.names() {
                out.insert(name.to_string(), record.clone());
            }
        }
    }

    for (key, value) in &theme.semantic_token_colors {
        if let Value::String(hex) = value
            && let Some(record) = ColorRecord::from_hex(hex)
        {
            out.insert(format!("semantic:{key}"), record);
        }
    }

    out
}
