//! Token kinds

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Token type bucket. Token names are unique within one bucket.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TokenKind {
    Color,
    Gradient,
    Shadow,
    Shape,
    Spacing,
    Typography,
    FontFamily,
}

impl TokenKind {
    pub const ALL: [TokenKind; 7] = [
        TokenKind::Color,
        TokenKind::Gradient,
        TokenKind::Shadow,
        TokenKind::Shape,
        TokenKind::Spacing,
        TokenKind::Typography,
        TokenKind::FontFamily,
    ];

    /// Kinds whose first tag is the theme mode (`dark`/`light`)
    pub fn is_mode_partitioned(self) -> bool {
        matches!(self, Self::Color | Self::Gradient | Self::Typography)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Color => "color",
            Self::Gradient => "gradient",
            Self::Shadow => "shadow",
            Self::Shape => "shape",
            Self::Spacing => "spacing",
            Self::Typography => "typography",
            Self::FontFamily => "fontFamily",
        }
    }

    /// Human readable value shape, used in error messages
    pub fn expected_shape(self) -> &'static str {
        match self {
            Self::Color | Self::Shape | Self::Spacing => "a string",
            Self::Gradient | Self::Shadow => "a list of strings",
            Self::Typography => "a typography record",
            Self::FontFamily => "a font family record",
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
