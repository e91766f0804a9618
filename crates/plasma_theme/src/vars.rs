//! CSS custom properties for the web platform

use crate::tokens::{Token, TokenKind, TokenValue, TypographyField, TypographyValue};
use crate::{Platform, Theme};
use indexmap::IndexMap;
use plasma_color::ThemeMode;

/// Prefix shared by every typography variable
pub const TYPOGRAPHY_PREFIX: &str = "--plasma-typo-";

/// `camelCase`/`dotted.names` → `kebab-case`
pub fn kebab_case(src: &str) -> String {
    let mut out = String::with_capacity(src.len() + 4);
    for c in src.chars() {
        match c {
            '.' | '_' | ' ' => {
                if !out.ends_with('-') && !out.is_empty() {
                    out.push('-');
                }
            }
            c if c.is_ascii_uppercase() => {
                if !out.is_empty() && !out.ends_with('-') {
                    out.push('-');
                }
                out.push(c.to_ascii_lowercase());
            }
            c => out.push(c),
        }
    }
    out
}

/// The tags that make up a variable name: the mode of mode-partitioned
/// kinds is dropped, and for colors/gradients the subcategory moves in
/// front of the category, `default` disappearing entirely.
fn var_tags<'a>(kind: TokenKind, tags: &'a [String]) -> Vec<&'a str> {
    let mut rest: Vec<&str> = tags.iter().map(String::as_str).collect();
    if kind.is_mode_partitioned() && rest.first().is_some_and(|t| ThemeMode::from_tag(t).is_some()) {
        rest.remove(0);
    }

    if matches!(kind, TokenKind::Color | TokenKind::Gradient) && rest.len() >= 3 {
        let subcategory = rest.remove(1);
        if subcategory != "default" {
            rest.insert(0, subcategory);
        }
    }
    rest
}

/// CSS variable name of a token path.
///
/// `dark.surface.default.accent` → `--surface-accent`,
/// `dark.text.on-dark.primary` → `--on-dark-text-primary`,
/// `round.m` → `--round-m`. Typography names carry
/// [`TYPOGRAPHY_PREFIX`] and are completed with a field by
/// [`typography_var_name`].
pub fn token_var_name(kind: TokenKind, tags: &[String]) -> String {
    let body = var_tags(kind, tags)
        .into_iter()
        .map(kebab_case)
        .collect::<Vec<_>>()
        .join("-");
    match kind {
        TokenKind::Typography => format!("{TYPOGRAPHY_PREFIX}{body}"),
        _ => format!("--{body}"),
    }
}

/// [`token_var_name`] for a dotted name
pub fn token_var_name_of(kind: TokenKind, name: &str) -> String {
    let tags: Vec<String> = name.split('.').map(str::to_string).collect();
    token_var_name(kind, &tags)
}

pub fn typography_var_name(tags: &[String], field: TypographyField) -> String {
    format!("{}-{}", token_var_name(TokenKind::Typography, tags), field.css_name())
}

impl Theme {
    /// Web value of one typography field; `fontFamily` is dereferenced to
    /// the family name when the referenced token exists.
    pub fn typography_field(&self, value: &TypographyValue, field: TypographyField) -> String {
        let raw = value.field(field);
        if field != TypographyField::FontFamily {
            return raw.to_string();
        }
        self.get_token(raw, TokenKind::FontFamily)
            .and_then(|t| t.value(Platform::Web))
            .and_then(TokenValue::as_font_family)
            .map(|family| family.name.clone())
            .unwrap_or_else(|| raw.to_string())
    }

    /// Find a token by name, trying the bare name first and then the name
    /// prefixed with `mode` for mode-partitioned kinds.
    pub fn lookup(&self, name: &str, kind: TokenKind, mode: ThemeMode) -> Option<&Token> {
        self.get_token(name, kind).or_else(|| {
            if kind.is_mode_partitioned() {
                self.get_token(&format!("{mode}.{name}"), kind)
            } else {
                None
            }
        })
    }

    /// Web CSS value of a non-typography token
    pub fn web_value(&self, token: &Token) -> Option<String> {
        let value = token.value(Platform::Web)?;
        match value {
            TokenValue::Text(raw) if token.kind() == TokenKind::Color => Some(
                self.resolve_color(raw)
                    .map(|c| c.to_css())
                    .unwrap_or_else(|| raw.clone()),
            ),
            TokenValue::Text(raw) => Some(raw.clone()),
            TokenValue::List(items) => Some(items.join(", ")),
            TokenValue::FontFamily(family) => Some(family.name.clone()),
            TokenValue::Typography(_) => None,
        }
    }
}

/// Every web variable of a theme for one mode: tokens of that mode plus
/// mode-independent tokens. Disabled tokens are included.
pub fn create_theme_vars(theme: &Theme, mode: ThemeMode) -> IndexMap<String, String> {
    let mut vars = IndexMap::new();

    for token in theme.iter() {
        if token.mode().is_some_and(|m| m != mode) {
            continue;
        }
        if token.kind().is_mode_partitioned() && token.mode().is_none() {
            tracing::debug!(token = token.name(), "mode-partitioned token without a mode tag");
        }

        match token.value(Platform::Web) {
            Some(TokenValue::Typography(typo)) => {
                for field in TypographyField::ALL {
                    vars.insert(
                        typography_var_name(token.tags(), field),
                        theme.typography_field(typo, field),
                    );
                }
            }
            Some(_) => {
                if let Some(value) = theme.web_value(token) {
                    vars.insert(token_var_name(token.kind(), token.tags()), value);
                }
            }
            None => {}
        }
    }

    vars
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(name: &str) -> Vec<String> {
        name.split('.').map(str::to_string).collect()
    }

    #[test]
    fn kebab_case_handles_camel_and_dots() {
        assert_eq!(kebab_case("onDark"), "on-dark");
        assert_eq!(kebab_case("on-dark"), "on-dark");
        assert_eq!(kebab_case("fontFamily.body"), "font-family-body");
        assert_eq!(kebab_case("plasmaButtonHeight"), "plasma-button-height");
    }

    #[test]
    fn color_var_names() {
        assert_eq!(
            token_var_name(TokenKind::Color, &tags("dark.surface.default.accent")),
            "--surface-accent"
        );
        assert_eq!(
            token_var_name(TokenKind::Color, &tags("dark.text.on-dark.primary-hover")),
            "--on-dark-text-primary-hover"
        );
        assert_eq!(
            token_var_name_of(TokenKind::Color, "text.default.primary"),
            "--text-primary"
        );
    }

    #[test]
    fn structural_var_names() {
        assert_eq!(token_var_name(TokenKind::Shape, &tags("round.m")), "--round-m");
        assert_eq!(token_var_name(TokenKind::Spacing, &tags("spacing.4x")), "--spacing-4x");
        assert_eq!(
            typography_var_name(&tags("dark.body.m.normal"), TypographyField::LineHeight),
            "--plasma-typo-body-m-normal-line-height"
        );
    }
}
