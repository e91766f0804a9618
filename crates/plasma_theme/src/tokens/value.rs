//! Per-platform token values

use super::TokenKind;
use serde::{Deserialize, Serialize};

/// Resolved text style for one platform
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypographyValue {
    /// Name of the `fontFamily` token this style uses
    pub font_family_ref: String,
    pub font_size: String,
    pub font_weight: String,
    pub font_style: String,
    pub line_height: String,
    pub letter_spacing: String,
}

/// Typography fields in CSS output order
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TypographyField {
    FontFamily,
    FontSize,
    FontStyle,
    FontWeight,
    LetterSpacing,
    LineHeight,
}

impl TypographyField {
    pub const ALL: [TypographyField; 6] = [
        TypographyField::FontFamily,
        TypographyField::FontSize,
        TypographyField::FontStyle,
        TypographyField::FontWeight,
        TypographyField::LetterSpacing,
        TypographyField::LineHeight,
    ];

    /// camelCase name, as used in component web token names
    pub fn camel_name(self) -> &'static str {
        match self {
            Self::FontFamily => "fontFamily",
            Self::FontSize => "fontSize",
            Self::FontStyle => "fontStyle",
            Self::FontWeight => "fontWeight",
            Self::LetterSpacing => "letterSpacing",
            Self::LineHeight => "lineHeight",
        }
    }

    /// kebab-case name, as used in CSS variable names
    pub fn css_name(self) -> &'static str {
        match self {
            Self::FontFamily => "font-family",
            Self::FontSize => "font-size",
            Self::FontStyle => "font-style",
            Self::FontWeight => "font-weight",
            Self::LetterSpacing => "letter-spacing",
            Self::LineHeight => "line-height",
        }
    }

    /// Field whose camelCase name ends `name`, case-insensitively
    /// (`buttonFontSize` → `FontSize`)
    pub fn from_suffix(name: &str) -> Option<Self> {
        let lower = name.to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|field| lower.ends_with(&field.camel_name().to_ascii_lowercase()))
    }
}

impl TypographyValue {
    pub fn field(&self, field: TypographyField) -> &str {
        match field {
            TypographyField::FontFamily => &self.font_family_ref,
            TypographyField::FontSize => &self.font_size,
            TypographyField::FontStyle => &self.font_style,
            TypographyField::FontWeight => &self.font_weight,
            TypographyField::LetterSpacing => &self.letter_spacing,
            TypographyField::LineHeight => &self.line_height,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FontFace {
    pub src: Vec<String>,
    pub font_weight: String,
    pub font_style: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FontFamilyValue {
    /// CSS `font-family` name
    pub name: String,
    #[serde(default)]
    pub fonts: Vec<FontFace>,
}

/// A token value on one platform. The accepted shape depends on the
/// token kind, see [`TokenValue::matches_kind`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TokenValue {
    Text(String),
    List(Vec<String>),
    Typography(TypographyValue),
    FontFamily(FontFamilyValue),
}

impl TokenValue {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::List(values.into_iter().map(Into::into).collect())
    }

    pub fn matches_kind(&self, kind: TokenKind) -> bool {
        match self {
            Self::Text(_) => matches!(kind, TokenKind::Color | TokenKind::Shape | TokenKind::Spacing),
            Self::List(_) => matches!(kind, TokenKind::Gradient | TokenKind::Shadow),
            Self::Typography(_) => kind == TokenKind::Typography,
            Self::FontFamily(_) => kind == TokenKind::FontFamily,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_typography(&self) -> Option<&TypographyValue> {
        match self {
            Self::Typography(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_font_family(&self) -> Option<&FontFamilyValue> {
        match self {
            Self::FontFamily(f) => Some(f),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn untagged_shapes_deserialize_to_the_right_variant() {
        let text: TokenValue = serde_json::from_value(json!("#FFFFFF")).unwrap();
        assert!(text.matches_kind(TokenKind::Color));

        let list: TokenValue = serde_json::from_value(json!(["0 1px 2px #0000001A"])).unwrap();
        assert!(list.matches_kind(TokenKind::Shadow));
        assert!(!list.matches_kind(TokenKind::Color));

        let typo: TokenValue = serde_json::from_value(json!({
            "fontFamilyRef": "fontFamily.body",
            "fontSize": "1rem",
            "fontWeight": "400",
            "fontStyle": "normal",
            "lineHeight": "1.25rem",
            "letterSpacing": "normal"
        }))
        .unwrap();
        assert!(typo.matches_kind(TokenKind::Typography));

        let family: TokenValue = serde_json::from_value(json!({
            "name": "SB Sans Text",
            "fonts": [{ "src": ["a.woff2"], "fontWeight": "400", "fontStyle": "normal" }]
        }))
        .unwrap();
        assert!(family.matches_kind(TokenKind::FontFamily));
    }

    #[test]
    fn typography_field_from_suffix() {
        assert_eq!(
            TypographyField::from_suffix("buttonFontSize"),
            Some(TypographyField::FontSize)
        );
        assert_eq!(
            TypographyField::from_suffix("lineHeight"),
            Some(TypographyField::LineHeight)
        );
        assert_eq!(TypographyField::from_suffix("buttonHeight"), None);
    }
}
