//! A single named, multi-platform design token

use super::{TokenKind, TokenValue};
use crate::{Platform, ThemeError};
use plasma_color::ThemeMode;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A named, taggable design value with one value per target platform.
///
/// `default_values` is captured at construction and never changes; it is
/// what [`Token::reset`] restores. Disabled tokens still resolve, `enabled`
/// only controls visibility in editors.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Token {
    #[serde(rename = "type")]
    kind: TokenKind,
    tags: Vec<String>,
    name: String,
    display_name: String,
    #[serde(default)]
    description: String,
    #[serde(default = "default_enabled")]
    enabled: bool,
    values: BTreeMap<Platform, TokenValue>,
    default_values: BTreeMap<Platform, TokenValue>,
}

fn default_enabled() -> bool {
    true
}

impl Token {
    /// Create a token, checking every platform value against `kind`
    pub fn new(
        kind: TokenKind,
        tags: Vec<String>,
        display_name: impl Into<String>,
        values: BTreeMap<Platform, TokenValue>,
    ) -> Result<Self, ThemeError> {
        let token = Self {
            kind,
            name: tags.join("."),
            tags,
            display_name: display_name.into(),
            description: String::new(),
            enabled: true,
            default_values: values.clone(),
            values,
        };
        token.validate()?;
        Ok(token)
    }

    /// Convenience constructor from a dotted name, e.g. `dark.text.default.primary`
    pub fn from_name(
        kind: TokenKind,
        name: &str,
        values: BTreeMap<Platform, TokenValue>,
    ) -> Result<Self, ThemeError> {
        let tags: Vec<String> = name.split('.').map(str::to_string).collect();
        let display_name = tags.last().cloned().unwrap_or_default();
        Self::new(kind, tags, display_name, values)
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Check name, tags and value shapes. Deserialized tokens are checked
    /// when they are added to a theme.
    pub fn validate(&self) -> Result<(), ThemeError> {
        if self.tags.is_empty() || self.tags.iter().any(|t| t.is_empty()) {
            return Err(ThemeError::InvalidName(self.name.clone()));
        }
        if self.name != self.tags.join(".") {
            return Err(ThemeError::InvalidName(self.name.clone()));
        }
        for (platform, value) in self.values.iter().chain(self.default_values.iter()) {
            self.check_shape(*platform, value)?;
        }
        Ok(())
    }

    fn check_shape(&self, platform: Platform, value: &TokenValue) -> Result<(), ThemeError> {
        if value.matches_kind(self.kind) {
            Ok(())
        } else {
            Err(ThemeError::ValueShape {
                name: self.name.clone(),
                kind: self.kind,
                platform,
            })
        }
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Theme mode for mode-partitioned kinds, `None` otherwise
    pub fn mode(&self) -> Option<ThemeMode> {
        if !self.kind.is_mode_partitioned() {
            return None;
        }
        self.tags.first().and_then(|tag| ThemeMode::from_tag(tag))
    }

    pub fn values(&self) -> &BTreeMap<Platform, TokenValue> {
        &self.values
    }

    pub fn value(&self, platform: Platform) -> Option<&TokenValue> {
        self.values.get(&platform)
    }

    pub fn default_value(&self, platform: Platform) -> Option<&TokenValue> {
        self.default_values.get(&platform)
    }

    pub fn set_value(&mut self, platform: Platform, value: TokenValue) -> Result<(), ThemeError> {
        self.check_shape(platform, &value)?;
        self.values.insert(platform, value);
        Ok(())
    }

    /// Restore the construction-time value for one platform
    pub fn reset(&mut self, platform: Platform) {
        match self.default_values.get(&platform) {
            Some(value) => {
                self.values.insert(platform, value.clone());
            }
            None => {
                self.values.remove(&platform);
            }
        }
    }

    pub fn reset_all(&mut self) {
        self.values = self.default_values.clone();
    }

    /// Whether any platform differs from its construction-time value
    pub fn is_modified(&self) -> bool {
        self.values != self.default_values
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    pub fn set_display_name(&mut self, display_name: impl Into<String>) {
        self.display_name = display_name.into();
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn web(value: TokenValue) -> BTreeMap<Platform, TokenValue> {
        BTreeMap::from([(Platform::Web, value)])
    }

    #[test]
    fn name_is_dot_joined_tags() {
        let token = Token::new(
            TokenKind::Color,
            vec!["dark".into(), "surface".into(), "default".into(), "accent".into()],
            "accent",
            web(TokenValue::text("#112233")),
        )
        .unwrap();
        assert_eq!(token.name(), "dark.surface.default.accent");
        assert_eq!(token.mode(), Some(ThemeMode::Dark));
    }

    #[test]
    fn shape_independent_kinds_have_no_mode() {
        let token = Token::from_name(TokenKind::Shape, "round.m", web(TokenValue::text("0.75rem"))).unwrap();
        assert_eq!(token.mode(), None);
    }

    #[test]
    fn rejects_mismatched_value_shape() {
        let err = Token::from_name(
            TokenKind::Shadow,
            "down.soft.s",
            web(TokenValue::text("0 1px 2px black")),
        )
        .unwrap_err();
        assert!(matches!(err, ThemeError::ValueShape { kind: TokenKind::Shadow, .. }));

        let mut color = Token::from_name(TokenKind::Color, "dark.text.default.primary", web(TokenValue::text("#FFF"))).unwrap();
        assert!(color
            .set_value(Platform::Web, TokenValue::list(["a", "b"]))
            .is_err());
        assert_eq!(color.value(Platform::Web), Some(&TokenValue::text("#FFF")));
    }

    #[test]
    fn reset_twice_is_the_same_as_reset_once() {
        let mut token = Token::from_name(TokenKind::Spacing, "spacing.4x", web(TokenValue::text("1rem"))).unwrap();
        token.set_value(Platform::Web, TokenValue::text("2rem")).unwrap();
        assert!(token.is_modified());

        let default = token.default_value(Platform::Web).cloned().unwrap();
        token.set_value(Platform::Web, default.clone()).unwrap();
        let once = token.clone();
        token.set_value(Platform::Web, default).unwrap();
        assert_eq!(token, once);
        assert!(!token.is_modified());
    }

    #[test]
    fn reset_removes_values_added_after_construction() {
        let mut token = Token::from_name(TokenKind::Spacing, "spacing.2x", web(TokenValue::text("0.5rem"))).unwrap();
        token.set_value(Platform::Ios, TokenValue::text("8")).unwrap();
        token.reset(Platform::Ios);
        assert_eq!(token.value(Platform::Ios), None);
    }

    #[test]
    fn disabled_tokens_keep_their_values() {
        let token = Token::from_name(TokenKind::Color, "light.text.default.accent", web(TokenValue::text("#1A6CE5")))
            .unwrap()
            .with_enabled(false);
        assert!(!token.enabled());
        assert!(token.value(Platform::Web).is_some());
    }
}
