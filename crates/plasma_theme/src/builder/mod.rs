//! Theme construction from declarations and raw platform values
//!
//! The build runs as a sequence of passes over the declarations, each one
//! preserving declaration order:
//!
//! 1. collect every declaration with its per-platform values
//! 2. group `default` colors into dark/light pairs
//! 3. expand colors into fan-out entries (see [`fan_out`])
//! 4. add each color entry followed by its derived `-hover`, `-active` and
//!    `-brightness` tokens, then every other kind verbatim

pub mod fan_out;
mod meta;

pub use meta::{KindValues, PlatformsVariations, ThemeMeta, TokenMeta};

use crate::tokens::{Token, TokenKind, TokenValue};
use crate::{Platform, Theme, ThemeError};
use fan_out::{
    destination_tags, is_state_tag, source_mode, state_tags, StateCache, DEFAULT_SUBCATEGORY, FAN_OUT,
};
use indexmap::IndexMap;
use plasma_color::{ColorState, Palette, ThemeMode};
use rustc_hash::FxHashSet;
use std::collections::BTreeMap;

/// A declaration joined with its raw values
#[derive(Clone, Debug)]
struct Declared<'a> {
    meta: &'a TokenMeta,
    tags: Vec<String>,
    values: BTreeMap<Platform, TokenValue>,
}

impl Declared<'_> {
    fn name(&self) -> String {
        self.tags.join(".")
    }

    /// Whether this declares a state variant by hand (`accent-hover`)
    fn is_state_variant(&self) -> bool {
        self.tags.last().is_some_and(|tag| is_state_tag(tag))
    }

    /// Mode of a `[mode, category, default, name..]` color
    fn default_color_mode(&self) -> Option<ThemeMode> {
        if self.meta.kind != TokenKind::Color
            || self.tags.len() < 4
            || self.tags[2] != DEFAULT_SUBCATEGORY
            || self.is_state_variant()
        {
            return None;
        }
        ThemeMode::from_tag(&self.tags[0])
    }

    /// Pair key: the tags after the mode, without the subcategory
    fn pair_key(&self) -> String {
        let mut key = vec![self.tags[1].as_str()];
        key.extend(self.tags[3..].iter().map(String::as_str));
        key.join(".")
    }
}

/// Dark/light declarations sharing one color role
#[derive(Default)]
struct ColorPair {
    dark: Option<usize>,
    light: Option<usize>,
}

impl ColorPair {
    fn get(&self, mode: ThemeMode) -> Option<usize> {
        match mode {
            ThemeMode::Dark => self.dark,
            ThemeMode::Light => self.light,
        }
    }
}

/// A color token about to be added, with the declaration it takes its
/// values from
struct ColorEntry {
    tags: Vec<String>,
    source: usize,
    formula_mode: Option<ThemeMode>,
}

/// Builds a [`Theme`] from a [`ThemeMeta`] and [`PlatformsVariations`].
///
/// ```rust
/// use plasma_theme::{Platform, PlatformsVariations, ThemeBuilder, ThemeMeta, TokenKind, TokenMeta, TokenValue};
///
/// let meta = ThemeMeta::new("plasma", "1.0.0")
///     .with_token(TokenMeta::new(TokenKind::Color, "dark.text.default.primary"));
/// let variations = PlatformsVariations::default().with(
///     Platform::Web,
///     TokenKind::Color,
///     "dark.text.default.primary",
///     TokenValue::text("#FFFFFF"),
/// );
/// let theme = ThemeBuilder::new(&meta, &variations).build().unwrap();
/// assert!(theme.get_token("dark.text.on-dark.primary", TokenKind::Color).is_some());
/// ```
pub struct ThemeBuilder<'a> {
    meta: &'a ThemeMeta,
    variations: &'a PlatformsVariations,
    palette: Palette,
}

impl<'a> ThemeBuilder<'a> {
    pub fn new(meta: &'a ThemeMeta, variations: &'a PlatformsVariations) -> Self {
        Self {
            meta,
            variations,
            palette: Palette::default(),
        }
    }

    /// Palette used to resolve color references before deriving states
    pub fn palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    pub fn build(self) -> Result<Theme, ThemeError> {
        let declared = self.collect();
        let pairs = pair_colors(&declared)?;
        let explicit: FxHashSet<String> = declared
            .iter()
            .filter(|d| d.meta.kind == TokenKind::Color)
            .map(Declared::name)
            .collect();
        let entries = color_entries(&declared, &pairs, &explicit);

        let mut theme = Theme::new(&self.meta.name, &self.meta.version).with_palette(self.palette.clone());
        let mut cache = StateCache::default();

        for entry in &entries {
            let source = &declared[entry.source];
            let token = Token::new(
                TokenKind::Color,
                entry.tags.clone(),
                source.meta.resolved_display_name(),
                source.values.clone(),
            )?
            .with_description(&source.meta.description)
            .with_enabled(source.meta.enabled);
            theme.add_token(token)?;

            let Some(mode) = entry.formula_mode else {
                continue;
            };
            let Some(category) = entry.tags.get(1) else {
                tracing::debug!(token = %source.name(), "color without a category, no derived states");
                continue;
            };
            let Some(states) = cache.states_for(&source.name(), category, mode, &source.values, &self.palette)
            else {
                continue;
            };

            for state in ColorState::ALL {
                let tags = state_tags(&entry.tags, state);
                if explicit.contains(&tags.join(".")) {
                    continue;
                }
                let values: BTreeMap<Platform, TokenValue> = states
                    .iter()
                    .map(|(platform, set)| (*platform, TokenValue::text(set.get(state))))
                    .collect();
                let token = Token::new(
                    TokenKind::Color,
                    tags,
                    format!("{} {}", source.meta.resolved_display_name(), state),
                    values,
                )?
                .with_description(&source.meta.description)
                .with_enabled(source.meta.enabled);
                theme.add_token(token)?;
            }
        }

        for item in declared.iter().filter(|d| d.meta.kind != TokenKind::Color) {
            let token = Token::new(
                item.meta.kind,
                item.tags.clone(),
                item.meta.resolved_display_name(),
                item.values.clone(),
            )?
            .with_description(&item.meta.description)
            .with_enabled(item.meta.enabled);
            theme.add_token(token)?;
        }

        tracing::debug!(
            theme = %self.meta.name,
            declared = declared.len(),
            tokens = theme.len(),
            derived_sets = cache.len(),
            "theme built"
        );
        Ok(theme)
    }

    /// Pass 1: join declarations with their platform values
    fn collect(&self) -> Vec<Declared<'a>> {
        self.meta
            .tokens
            .iter()
            .map(|meta| {
                let tags = meta.resolved_tags();
                let name = tags.join(".");
                let values = self.variations.values_of(meta.kind, &name);
                if values.is_empty() {
                    tracing::warn!(token = %name, kind = %meta.kind, "declared token has no values");
                } else {
                    for platform in Platform::ALL.into_iter().filter(|p| !values.contains_key(p)) {
                        tracing::debug!(token = %name, %platform, "no value for platform");
                    }
                }
                Declared { meta, tags, values }
            })
            .collect()
    }
}

/// Convenience wrapper around [`ThemeBuilder`]
pub fn build_theme(
    meta: &ThemeMeta,
    variations: &PlatformsVariations,
    palette: Palette,
) -> Result<Theme, ThemeError> {
    ThemeBuilder::new(meta, variations).palette(palette).build()
}

/// Pass 2: group `default` colors by role. A role declared twice for the
/// same mode is a duplicate token.
fn pair_colors(declared: &[Declared<'_>]) -> Result<IndexMap<String, ColorPair>, ThemeError> {
    declared
        .iter()
        .enumerate()
        .try_fold(IndexMap::new(), |mut pairs, (idx, item)| {
            if let Some(mode) = item.default_color_mode() {
                let pair: &mut ColorPair = pairs.entry(item.pair_key()).or_default();
                let slot = match mode {
                    ThemeMode::Dark => &mut pair.dark,
                    ThemeMode::Light => &mut pair.light,
                };
                if slot.is_some() {
                    return Err(ThemeError::DuplicateToken {
                        kind: TokenKind::Color,
                        name: item.name(),
                    });
                }
                *slot = Some(idx);
            }
            Ok(pairs)
        })
}

/// Pass 3: color entries in declaration order. A pair expands where its
/// first member is declared; explicitly declared fan-out names are kept as
/// their own entries instead of being generated.
fn color_entries(
    declared: &[Declared<'_>],
    pairs: &IndexMap<String, ColorPair>,
    explicit: &FxHashSet<String>,
) -> Vec<ColorEntry> {
    let mut expanded: FxHashSet<&str> = FxHashSet::default();
    let mut entries = Vec::new();

    for (idx, item) in declared.iter().enumerate() {
        if item.meta.kind != TokenKind::Color {
            continue;
        }

        if item.default_color_mode().is_some() {
            let key = item.pair_key();
            let Some((key, pair)) = pairs.get_key_value(&key) else {
                continue;
            };
            if !expanded.insert(key.as_str()) {
                continue;
            }
            for (theme_mode, subcategory, from) in FAN_OUT {
                let Some(source) = pair.get(from) else {
                    continue;
                };
                let tags = destination_tags(theme_mode, subcategory, &declared[source].tags);
                let is_own_declaration = subcategory == DEFAULT_SUBCATEGORY;
                if !is_own_declaration && explicit.contains(&tags.join(".")) {
                    continue;
                }
                entries.push(ColorEntry {
                    tags,
                    source,
                    formula_mode: Some(from),
                });
            }
            continue;
        }

        let formula_mode = match (item.tags.first(), item.tags.get(2)) {
            _ if item.is_state_variant() => None,
            (Some(mode), Some(sub)) => ThemeMode::from_tag(mode).map(|m| source_mode(m, sub)),
            (Some(mode), None) if item.tags.len() > 1 => ThemeMode::from_tag(mode),
            _ => None,
        };
        entries.push(ColorEntry {
            tags: item.tags.clone(),
            source: idx,
            formula_mode,
        });
    }

    entries
}
