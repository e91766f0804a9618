use thiserror::Error;

use crate::PropType;

#[derive(Debug, Error)]
pub enum ComponentError {
    #[error("prop `{id}` ({kind}) cannot take `{value}`: expected {}", .kind.expected_value())]
    InvalidValue {
        id: String,
        kind: PropType,
        value: String,
    },

    #[error("unknown prop type `{0}`")]
    UnknownPropType(String),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
