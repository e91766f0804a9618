//! Palette-relative color references
//!
//! Authored theme values point into a shared palette instead of carrying
//! raw hex codes: `[general.blue.500]`, optionally followed by an opacity
//! in `0..=1` such as `[general.blue.500][0.56]`.

use crate::{Color, ColorError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};

/// A parsed `[palette.hue.saturation][opacity]` reference
#[derive(Clone, Debug, PartialEq)]
pub struct ColorRef {
    pub palette: String,
    pub hue: String,
    pub saturation: String,
    pub opacity: Option<f32>,
}

impl ColorRef {
    pub fn new(hue: impl Into<String>, saturation: impl Into<String>) -> Self {
        Self {
            palette: "general".to_string(),
            hue: hue.into(),
            saturation: saturation.into(),
            opacity: None,
        }
    }

    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = Some(opacity);
        self
    }

    /// Whether `src` is written in reference syntax (no validation)
    pub fn is_reference(src: &str) -> bool {
        src.trim_start().starts_with('[')
    }

    pub fn parse(src: &str) -> Result<Self, ColorError> {
        let invalid = || ColorError::InvalidReference(src.to_string());
        let rest = src.trim().strip_prefix('[').ok_or_else(invalid)?;
        let (path, rest) = rest.split_once(']').ok_or_else(invalid)?;

        let mut parts = path.split('.');
        let (Some(palette), Some(hue), Some(saturation), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(invalid());
        };
        if palette.is_empty() || hue.is_empty() || saturation.is_empty() {
            return Err(invalid());
        }

        let opacity = if rest.is_empty() {
            None
        } else {
            let raw = rest
                .strip_prefix('[')
                .and_then(|r| r.strip_suffix(']'))
                .ok_or_else(invalid)?;
            let value: f32 = raw
                .trim()
                .parse()
                .map_err(|_| ColorError::InvalidOpacity(raw.to_string()))?;
            if !(0.0..=1.0).contains(&value) {
                return Err(ColorError::InvalidOpacity(raw.to_string()));
            }
            Some(value)
        };

        Ok(Self {
            palette: palette.to_string(),
            hue: hue.to_string(),
            saturation: saturation.to_string(),
            opacity,
        })
    }
}

impl Display for ColorRef {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}.{}.{}]", self.palette, self.hue, self.saturation)?;
        if let Some(opacity) = self.opacity {
            write!(f, "[{opacity:.2}]")?;
        }
        Ok(())
    }
}

/// Hue → saturation → hex lookup table for the `general` palette.
///
/// JSON shape: `{ "blue": { "500": "#1A6CE5" } }`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Palette {
    hues: BTreeMap<String, BTreeMap<String, String>>,
}

impl Palette {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, hue: impl Into<String>, saturation: impl Into<String>, hex: impl Into<String>) {
        self.hues
            .entry(hue.into())
            .or_default()
            .insert(saturation.into(), hex.into());
    }

    /// Builder-style [`Palette::insert`]
    pub fn with(mut self, hue: &str, saturation: &str, hex: &str) -> Self {
        self.insert(hue, saturation, hex);
        self
    }

    pub fn get(&self, hue: &str, saturation: &str) -> Option<Color> {
        let hex = self.hues.get(hue)?.get(saturation)?;
        Color::from_hex_str(hex).ok()
    }

    pub fn is_empty(&self) -> bool {
        self.hues.is_empty()
    }

    /// Resolve a parsed reference, applying its opacity
    pub fn resolve(&self, reference: &ColorRef) -> Option<Color> {
        let color = self.get(&reference.hue, &reference.saturation)?;
        Some(match reference.opacity {
            Some(opacity) => color.with_alpha(opacity),
            None => color,
        })
    }

    /// Resolve an authored value: a palette reference or a literal hex color.
    ///
    /// Returns `None` for anything that cannot be resolved.
    pub fn resolve_str(&self, value: &str) -> Option<Color> {
        if ColorRef::is_reference(value) {
            let reference = ColorRef::parse(value).ok()?;
            let resolved = self.resolve(&reference);
            if resolved.is_none() {
                tracing::debug!("palette has no entry for {}", reference);
            }
            resolved
        } else {
            Color::from_hex_str(value).ok()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_reference_with_opacity() {
        let r = ColorRef::parse("[general.blue.500][0.56]").unwrap();
        assert_eq!(r.hue, "blue");
        assert_eq!(r.saturation, "500");
        assert_eq!(r.opacity, Some(0.56));
        assert_eq!(r.to_string(), "[general.blue.500][0.56]");
    }

    #[test]
    fn prints_opacity_with_two_decimals() {
        let r = ColorRef::new("red", "300").with_opacity(0.5);
        assert_eq!(r.to_string(), "[general.red.300][0.50]");
        assert_eq!(ColorRef::new("red", "300").to_string(), "[general.red.300]");
    }

    #[test]
    fn rejects_malformed_references() {
        assert!(ColorRef::parse("general.blue.500").is_err());
        assert!(ColorRef::parse("[general.blue]").is_err());
        assert!(ColorRef::parse("[general.blue.500][1.5]").is_err());
        assert!(ColorRef::parse("[general.blue.500](0.5)").is_err());
    }

    #[test]
    fn palette_resolves_references_and_literals() {
        let palette = Palette::new().with("blue", "500", "#1A6CE5");

        let c = palette.resolve_str("[general.blue.500][0.5]").unwrap();
        assert_eq!(c.to_hex8(), "#1A6CE580");
        assert_eq!(palette.resolve_str("#FFFFFF"), Some(Color::WHITE));
        assert_eq!(palette.resolve_str("[general.green.500]"), None);
        assert_eq!(palette.resolve_str("not a color"), None);
    }

    #[test]
    fn palette_deserializes_from_nested_map() {
        let palette: Palette =
            serde_json::from_str(r##"{ "gray": { "100": "#F0F0F0" } }"##).unwrap();
        assert!(palette.get("gray", "100").is_some());
    }
}
