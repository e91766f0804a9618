//! Plasma Theme
//!
//! Multi-platform design tokens and the themes built from them.
//!
//! # Overview
//!
//! - **Tokens**: named values with one entry per platform (web, iOS,
//!   Android). Colors, gradients and typography are partitioned by
//!   dark/light mode, the remaining kinds are mode-independent.
//! - **Themes**: a token arena addressed by `(kind, name)` plus the palette
//!   that color references resolve against.
//! - **Builders**: [`ThemeBuilder`] turns token declarations and raw
//!   platform values into a theme, fanning colors out to `on-dark`,
//!   `on-light` and `inverse` subcategories and deriving interaction
//!   states from the color formula tables.
//! - **Web output**: [`create_theme_vars`] renders a theme mode as CSS
//!   custom properties.
//!
//! # Quick Start
//!
//! ```rust
//! use plasma_theme::{create_theme_vars, Platform, PlatformsVariations, ThemeBuilder, ThemeMeta, ThemeMode, TokenKind, TokenMeta, TokenValue};
//!
//! let meta = ThemeMeta::new("plasma", "1.0.0")
//!     .with_token(TokenMeta::new(TokenKind::Color, "dark.surface.default.accent"))
//!     .with_token(TokenMeta::new(TokenKind::Shape, "round.m"));
//! let variations = PlatformsVariations::default()
//!     .with(Platform::Web, TokenKind::Color, "dark.surface.default.accent", TokenValue::text("#112233"))
//!     .with(Platform::Web, TokenKind::Shape, "round.m", TokenValue::text("0.75rem"));
//!
//! let theme = ThemeBuilder::new(&meta, &variations).build().unwrap();
//! let vars = create_theme_vars(&theme, ThemeMode::Dark);
//! assert_eq!(vars["--surface-accent"], "#112233");
//! assert_eq!(vars["--round-m"], "0.75rem");
//! ```

pub mod builder;
mod error;
mod platform;
mod theme;
pub mod tokens;
pub mod vars;

pub use builder::{build_theme, KindValues, PlatformsVariations, ThemeBuilder, ThemeMeta, TokenMeta};
pub use error::ThemeError;
pub use platform::Platform;
pub use theme::{Theme, ThemeData, TokenEdit, TokenId};
pub use tokens::*;
pub use vars::{create_theme_vars, token_var_name, TYPOGRAPHY_PREFIX};

pub use plasma_color::{Palette, ThemeMode};
