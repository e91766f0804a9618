use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ColorError {
    #[error("invalid hex color `{0}`")]
    InvalidHex(String),

    #[error("invalid color reference `{0}` (expected `[general.<hue>.<saturation>]`)")]
    InvalidReference(String),

    #[error("invalid opacity `{0}` (expected a number in 0..=1)")]
    InvalidOpacity(String),
}
