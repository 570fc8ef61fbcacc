//! Serde model for VS Code-style theme documents.
//!
//! Only the fields the analysis needs are modeled; everything else in a
//! theme file is ignored during deserialization. Values that can be
//! free-form JSON (color maps, semantic tokens) deserialize as
//! [`serde_json::Value`] and are filtered to strings at extraction time
//! so one odd entry never sinks a whole document.

use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::Value;

/// A parsed theme document.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ThemeDoc {
    /// Display name; falls back to the file stem when absent.
    #[serde(default)]
    pub name: Option<String>,
    /// `"dark"` or `"light"` in modern themes.
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    /// Legacy base theme marker, e.g. `"vs-dark"`.
    #[serde(default)]
    pub base: Option<String>,
    /// UI colors keyed by semantic name (`editor.background`, ...).
    #[serde(default)]
    pub colors: BTreeMap<String, Value>,
    /// Ordered syntax token rules.
    #[serde(rename = "tokenColors", default)]
    pub token_colors: Vec<TokenColor>,
    /// Semantic token colors; values may be strings or style objects.
    #[serde(rename = "semanticTokenColors", default)]
    pub semantic_token_colors: BTreeMap<String, Value>,
}

impl ThemeDoc {
    /// Whether this is a dark theme, from either the legacy `base`
    /// marker or the modern `type` field.
    #[must_use]
    pub fn is_dark(&self) -> bool {
        self.base.as_deref() == Some("vs-dark") || self.kind.as_deref() == Some("dark")
    }

    /// The raw `editor.background` hex if present and a string.
    #[must_use]
    pub fn background_hex(&self) -> Option<&str> {
        self.colors.get("editor.background").and_then(Value::as_str)
    }

    /// The raw `editor.foreground` hex if present and a string.
    #[must_use]
    pub fn foreground_hex(&self) -> Option<&str> {
        self.colors.get("editor.foreground").and_then(Value::as_str)
    }
}

/// One entry of `tokenColors`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TokenColor {
    /// Scope selector: a single string or a list of them.
    #[serde(default)]
    pub scope: Option<ScopeSpec>,
    /// Style settings; only `foreground` matters here.
    #[serde(default)]
    pub settings: TokenSettings,
}

/// A scope selector that themes write as either a string or an array.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ScopeSpec {
    /// `"scope": "keyword"`.
    One(String),
    /// `"scope": ["keyword", "storage.type"]`.
    Many(Vec<String>),
}

impl ScopeSpec {
    /// Iterate the selector as a flat list of scope names.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        match self {
            Self::One(s) => std::slice::from_ref(s).iter(),
            Self::Many(v) => v.iter(),
        }
        .map(String::as_str)
    }
}

/// Style settings attached to a token rule.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TokenSettings {
    /// Foreground hex, when the rule sets one.
    #[serde(default)]
    pub foreground: Option<String>,
    /// Font style string (`"italic"`, `"bold"` ...); parsed but unused
    /// by the color analysis.
    #[serde(rename = "fontStyle", default)]
    pub font_style: Option<String>,
}
