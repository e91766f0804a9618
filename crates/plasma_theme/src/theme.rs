//! Theme: a token arena indexed by kind and name

use crate::tokens::{Token, TokenKind, TokenValue};
use crate::{Platform, ThemeError};
use indexmap::IndexMap;
use plasma_color::{Color, Palette};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use slotmap::{new_key_type, SlotMap};

new_key_type! {
    /// Stable handle to a token inside one [`Theme`]
    pub struct TokenId;
}

/// One edit in a [`Theme::set_token_values`] batch
#[derive(Clone, Debug, PartialEq)]
pub struct TokenEdit {
    pub kind: TokenKind,
    pub name: String,
    pub platform: Platform,
    pub value: TokenValue,
}

impl TokenEdit {
    pub fn new(kind: TokenKind, name: impl Into<String>, platform: Platform, value: TokenValue) -> Self {
        Self {
            kind,
            name: name.into(),
            platform,
            value,
        }
    }
}

/// A named, versioned set of tokens plus the palette their color
/// references resolve against.
///
/// Tokens live in a flat arena and are addressed by [`TokenId`] or by
/// `(kind, name)`. Per-kind iteration follows insertion order. Cloning a
/// theme is a full snapshot.
///
/// Mutation is not synchronised: hosts that share a theme between editors
/// must serialise writes. Individual `set_value` calls are last-write-wins;
/// use [`Theme::set_token_values`] to apply related edits together.
#[derive(Clone, Debug)]
pub struct Theme {
    name: String,
    version: String,
    palette: Palette,
    tokens: SlotMap<TokenId, Token>,
    index: FxHashMap<TokenKind, IndexMap<String, TokenId>>,
}

/// Serialized form of a [`Theme`]
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeData {
    pub name: String,
    pub version: String,
    #[serde(default)]
    pub palette: Palette,
    pub tokens: Vec<Token>,
}

impl Theme {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            palette: Palette::default(),
            tokens: SlotMap::with_key(),
            index: FxHashMap::default(),
        }
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn set_palette(&mut self, palette: Palette) {
        self.palette = palette;
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Add a token. Names must be unique within a kind.
    pub fn add_token(&mut self, token: Token) -> Result<TokenId, ThemeError> {
        token.validate()?;
        let bucket = self.index.entry(token.kind()).or_default();
        if bucket.contains_key(token.name()) {
            return Err(ThemeError::DuplicateToken {
                kind: token.kind(),
                name: token.name().to_string(),
            });
        }
        let name = token.name().to_string();
        let id = self.tokens.insert(token);
        bucket.insert(name, id);
        Ok(id)
    }

    pub fn token_id(&self, name: &str, kind: TokenKind) -> Option<TokenId> {
        self.index.get(&kind)?.get(name).copied()
    }

    pub fn get_token(&self, name: &str, kind: TokenKind) -> Option<&Token> {
        self.token_id(name, kind).and_then(|id| self.tokens.get(id))
    }

    pub fn get_token_mut(&mut self, name: &str, kind: TokenKind) -> Option<&mut Token> {
        let id = self.token_id(name, kind)?;
        self.tokens.get_mut(id)
    }

    pub fn get_token_by_id(&self, id: TokenId) -> Option<&Token> {
        self.tokens.get(id)
    }

    pub fn get_token_by_id_mut(&mut self, id: TokenId) -> Option<&mut Token> {
        self.tokens.get_mut(id)
    }

    /// All tokens of one kind, in insertion order
    pub fn get_tokens(&self, kind: TokenKind) -> impl Iterator<Item = &Token> + '_ {
        self.index
            .get(&kind)
            .into_iter()
            .flat_map(|bucket| bucket.values())
            .filter_map(|id| self.tokens.get(*id))
    }

    /// Every token, kinds in [`TokenKind::ALL`] order
    pub fn iter(&self) -> impl Iterator<Item = &Token> + '_ {
        TokenKind::ALL.into_iter().flat_map(move |kind| self.get_tokens(kind))
    }

    /// Apply several value edits as one unit: every edit is checked first
    /// and nothing changes if any of them fails.
    pub fn set_token_values(&mut self, edits: &[TokenEdit]) -> Result<(), ThemeError> {
        let mut targets = Vec::with_capacity(edits.len());
        for edit in edits {
            let id = self
                .token_id(&edit.name, edit.kind)
                .ok_or_else(|| ThemeError::UnknownToken {
                    kind: edit.kind,
                    name: edit.name.clone(),
                })?;
            if !edit.value.matches_kind(edit.kind) {
                return Err(ThemeError::ValueShape {
                    name: edit.name.clone(),
                    kind: edit.kind,
                    platform: edit.platform,
                });
            }
            targets.push(id);
        }

        for (id, edit) in targets.into_iter().zip(edits) {
            if let Some(token) = self.tokens.get_mut(id) {
                token.set_value(edit.platform, edit.value.clone())?;
            }
        }
        Ok(())
    }

    /// Resolve an authored color value (palette reference or literal hex)
    pub fn resolve_color(&self, value: &str) -> Option<Color> {
        self.palette.resolve_str(value)
    }

    /// Web CSS value of a color token: references are resolved through the
    /// palette, anything unresolvable is passed through verbatim.
    pub fn web_color(&self, name: &str) -> Option<String> {
        let raw = self
            .get_token(name, TokenKind::Color)?
            .value(Platform::Web)?
            .as_text()?;
        Some(
            self.resolve_color(raw)
                .map(|c| c.to_css())
                .unwrap_or_else(|| raw.to_string()),
        )
    }

    pub fn to_data(&self) -> ThemeData {
        ThemeData {
            name: self.name.clone(),
            version: self.version.clone(),
            palette: self.palette.clone(),
            tokens: self.iter().cloned().collect(),
        }
    }

    pub fn from_data(data: ThemeData) -> Result<Self, ThemeError> {
        let mut theme = Theme::new(data.name, data.version).with_palette(data.palette);
        for token in data.tokens {
            theme.add_token(token)?;
        }
        Ok(theme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn color(name: &str, hex: &str) -> Token {
        Token::from_name(
            TokenKind::Color,
            name,
            BTreeMap::from([(Platform::Web, TokenValue::text(hex))]),
        )
        .unwrap()
    }

    #[test]
    fn lookup_by_name_and_kind() {
        let mut theme = Theme::new("plasma", "1.0.0");
        theme.add_token(color("dark.text.default.primary", "#FFFFFF")).unwrap();

        assert!(theme.get_token("dark.text.default.primary", TokenKind::Color).is_some());
        assert!(theme.get_token("dark.text.default.primary", TokenKind::Shape).is_none());
        assert!(theme.get_token("dark.text.default.missing", TokenKind::Color).is_none());
    }

    #[test]
    fn duplicate_names_are_rejected_per_kind() {
        let mut theme = Theme::new("plasma", "1.0.0");
        theme.add_token(color("dark.text.default.primary", "#FFFFFF")).unwrap();
        let err = theme
            .add_token(color("dark.text.default.primary", "#000000"))
            .unwrap_err();
        assert!(matches!(err, ThemeError::DuplicateToken { .. }));
        assert_eq!(theme.len(), 1);
    }

    #[test]
    fn tokens_iterate_in_insertion_order() {
        let mut theme = Theme::new("plasma", "1.0.0");
        for name in ["light.a.default.z", "light.a.default.b", "light.a.default.m"] {
            theme.add_token(color(name, "#000")).unwrap();
        }
        let names: Vec<&str> = theme.get_tokens(TokenKind::Color).map(|t| t.name()).collect();
        assert_eq!(names, vec!["light.a.default.z", "light.a.default.b", "light.a.default.m"]);
    }

    #[test]
    fn batched_edits_apply_all_or_nothing() {
        let mut theme = Theme::new("plasma", "1.0.0");
        theme.add_token(color("dark.surface.default.accent", "#112233")).unwrap();
        theme.add_token(color("dark.surface.default.accent-hover", "#223344")).unwrap();

        let bad = [
            TokenEdit::new(TokenKind::Color, "dark.surface.default.accent", Platform::Web, TokenValue::text("#000000")),
            TokenEdit::new(TokenKind::Color, "dark.surface.default.nope", Platform::Web, TokenValue::text("#000000")),
        ];
        assert!(theme.set_token_values(&bad).is_err());
        assert_eq!(theme.web_color("dark.surface.default.accent").as_deref(), Some("#112233"));

        let good = [
            TokenEdit::new(TokenKind::Color, "dark.surface.default.accent", Platform::Web, TokenValue::text("#000000")),
            TokenEdit::new(TokenKind::Color, "dark.surface.default.accent-hover", Platform::Web, TokenValue::text("#111111")),
        ];
        theme.set_token_values(&good).unwrap();
        assert_eq!(theme.web_color("dark.surface.default.accent").as_deref(), Some("#000000"));
        assert_eq!(theme.web_color("dark.surface.default.accent-hover").as_deref(), Some("#111111"));
    }

    #[test]
    fn web_color_resolves_palette_references() {
        let palette = Palette::new().with("blue", "500", "#1A6CE5");
        let mut theme = Theme::new("plasma", "1.0.0").with_palette(palette);
        theme.add_token(color("light.text.default.accent", "[general.blue.500][0.5]")).unwrap();
        theme.add_token(color("light.text.default.odd", "[general.pink.500]")).unwrap();

        assert_eq!(theme.web_color("light.text.default.accent").as_deref(), Some("#1A6CE580"));
        assert_eq!(theme.web_color("light.text.default.odd").as_deref(), Some("[general.pink.500]"));
    }

    #[test]
    fn data_round_trip_preserves_tokens() {
        let mut theme = Theme::new("plasma", "2.1.0");
        theme.add_token(color("dark.text.default.primary", "#FFFFFF")).unwrap();
        let json = serde_json::to_string(&theme.to_data()).unwrap();
        let back = Theme::from_data(serde_json::from_str(&json).unwrap()).unwrap();
        assert_eq!(back.version(), "2.1.0");
        assert_eq!(
            back.get_token("dark.text.default.primary", TokenKind::Color),
            theme.get_token("dark.text.default.primary", TokenKind::Color)
        );
    }
}
