use thiserror::Error;

use crate::{Platform, TokenKind};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ThemeError {
    #[error("invalid token name `{0}`: tags must be non-empty and joined by `.`")]
    InvalidName(String),

    #[error("token `{name}` ({kind}) expects {} on {platform}", .kind.expected_shape())]
    ValueShape {
        name: String,
        kind: TokenKind,
        platform: Platform,
    },

    #[error("duplicate {kind} token `{name}`")]
    DuplicateToken { kind: TokenKind, name: String },

    #[error("unknown {kind} token `{name}`")]
    UnknownToken { kind: TokenKind, name: String },
}
