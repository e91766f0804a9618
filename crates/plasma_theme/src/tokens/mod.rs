//! Design tokens
//!
//! A token is a named value with one entry per target platform. Its kind
//! decides which value shape is accepted:
//! - `color`, `shape`, `spacing`: a string
//! - `gradient`, `shadow`: a list of strings
//! - `typography`: a [`TypographyValue`] record
//! - `fontFamily`: a [`FontFamilyValue`] record

mod kind;
mod token;
mod value;

pub use kind::*;
pub use token::*;
pub use value::*;
