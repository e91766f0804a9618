//! Plasma color primitives
//!
//! Leaf crate shared by the theme and component layers:
//! - [`Color`]: RGBA color with hex and HSL conversion
//! - [`ColorRef`] / [`Palette`]: `[general.<hue>.<saturation>][opacity]` references
//! - [`get_state_color`]: hover/active/brightness derivation driven by
//!   per-category, per-mode rule tables
//!
//! # Example
//!
//! ```rust
//! use plasma_color::{get_state_color, ColorState, FormulaCategory, ThemeMode};
//!
//! let states = get_state_color("#112233", FormulaCategory::Surface, ThemeMode::Dark);
//! assert_ne!(states.get(ColorState::Hover), "#112233FF");
//! ```

mod color;
mod error;
pub mod formula;
mod mode;
mod reference;
mod state;

pub use color::{Color, Hsla};
pub use error::ColorError;
pub use formula::{section_to_formula, ColorState, FormulaCategory, Range};
pub use mode::ThemeMode;
pub use reference::{ColorRef, Palette};
pub use state::{get_state_color, get_state_color_for, StateColors, FALLBACK_COLOR};
