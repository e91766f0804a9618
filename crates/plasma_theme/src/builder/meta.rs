//! Theme builder inputs: token declarations and raw platform values

use crate::tokens::{TokenKind, TokenValue};
use crate::Platform;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Declaration of one token in a theme
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenMeta {
    #[serde(rename = "type")]
    pub kind: TokenKind,
    pub name: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_true")]
    pub enabled: bool,
}

fn default_true() -> bool {
    true
}

impl TokenMeta {
    pub fn new(kind: TokenKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            tags: Vec::new(),
            display_name: String::new(),
            description: String::new(),
            enabled: true,
        }
    }

    /// Declared tags, or the dotted name split when none were given
    pub fn resolved_tags(&self) -> Vec<String> {
        if self.tags.is_empty() {
            self.name.split('.').map(str::to_string).collect()
        } else {
            self.tags.clone()
        }
    }

    /// Declared display name, or the last tag
    pub fn resolved_display_name(&self) -> String {
        if self.display_name.is_empty() {
            self.resolved_tags().last().cloned().unwrap_or_default()
        } else {
            self.display_name.clone()
        }
    }
}

/// All declarations of a theme
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeMeta {
    pub name: String,
    #[serde(default = "default_version")]
    pub version: String,
    #[serde(default)]
    pub tokens: Vec<TokenMeta>,
}

fn default_version() -> String {
    "0.1.0".to_string()
}

impl ThemeMeta {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            tokens: Vec::new(),
        }
    }

    pub fn with_token(mut self, token: TokenMeta) -> Self {
        self.tokens.push(token);
        self
    }
}

/// Values of one platform, grouped by kind and keyed by full token name
pub type KindValues = BTreeMap<TokenKind, IndexMap<String, TokenValue>>;

/// Raw per-platform values, e.g.
/// `{ "web": { "color": { "dark.text.default.primary": "#FFFFFF" } } }`
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PlatformsVariations {
    #[serde(default)]
    pub web: KindValues,
    #[serde(default)]
    pub ios: KindValues,
    #[serde(default)]
    pub android: KindValues,
}

impl PlatformsVariations {
    pub fn platform(&self, platform: Platform) -> &KindValues {
        match platform {
            Platform::Web => &self.web,
            Platform::Ios => &self.ios,
            Platform::Android => &self.android,
        }
    }

    pub fn platform_mut(&mut self, platform: Platform) -> &mut KindValues {
        match platform {
            Platform::Web => &mut self.web,
            Platform::Ios => &mut self.ios,
            Platform::Android => &mut self.android,
        }
    }

    pub fn get(&self, platform: Platform, kind: TokenKind, name: &str) -> Option<&TokenValue> {
        self.platform(platform).get(&kind)?.get(name)
    }

    pub fn insert(&mut self, platform: Platform, kind: TokenKind, name: impl Into<String>, value: TokenValue) {
        self.platform_mut(platform)
            .entry(kind)
            .or_default()
            .insert(name.into(), value);
    }

    /// Builder-style [`PlatformsVariations::insert`]
    pub fn with(mut self, platform: Platform, kind: TokenKind, name: &str, value: TokenValue) -> Self {
        self.insert(platform, kind, name, value);
        self
    }

    /// Values of `name` on every platform that has one
    pub fn values_of(&self, kind: TokenKind, name: &str) -> BTreeMap<Platform, TokenValue> {
        Platform::ALL
            .into_iter()
            .filter_map(|p| self.get(p, kind, name).map(|v| (p, v.clone())))
            .collect()
    }
}
