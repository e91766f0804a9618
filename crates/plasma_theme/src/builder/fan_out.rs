//! Color fan-out and derived state tokens
//!
//! Authors declare one `default` color per mode. Every theme mode also needs
//! the same role for content placed on dark or light backgrounds and for
//! inverted surfaces, so each dark/light pair fans out into four names per
//! mode. `on-dark` always shows the dark value and `on-light` the light
//! value, `inverse` shows the opposite mode's value.

use crate::tokens::TokenValue;
use crate::Platform;
use plasma_color::{get_state_color_for, section_to_formula, ColorState, Palette, StateColors, ThemeMode};
use rustc_hash::FxHashMap;
use std::collections::BTreeMap;

pub const DEFAULT_SUBCATEGORY: &str = "default";

/// `(theme mode, subcategory, mode the value comes from)`
pub const FAN_OUT: [(ThemeMode, &str, ThemeMode); 8] = [
    (ThemeMode::Dark, DEFAULT_SUBCATEGORY, ThemeMode::Dark),
    (ThemeMode::Dark, "on-dark", ThemeMode::Dark),
    (ThemeMode::Dark, "on-light", ThemeMode::Light),
    (ThemeMode::Dark, "inverse", ThemeMode::Light),
    (ThemeMode::Light, DEFAULT_SUBCATEGORY, ThemeMode::Light),
    (ThemeMode::Light, "on-dark", ThemeMode::Dark),
    (ThemeMode::Light, "on-light", ThemeMode::Light),
    (ThemeMode::Light, "inverse", ThemeMode::Dark),
];

/// Mode whose value (and formula) a `(theme mode, subcategory)` slot uses.
/// Subcategories outside the fan-out table use the theme mode itself.
pub fn source_mode(theme_mode: ThemeMode, subcategory: &str) -> ThemeMode {
    FAN_OUT
        .iter()
        .find(|(mode, sub, _)| *mode == theme_mode && *sub == subcategory)
        .map(|(_, _, source)| *source)
        .unwrap_or(theme_mode)
}

/// Tags of a fanned-out destination: `[mode, category, subcategory, rest..]`
pub fn destination_tags(theme_mode: ThemeMode, subcategory: &str, source_tags: &[String]) -> Vec<String> {
    let mut tags = Vec::with_capacity(source_tags.len());
    tags.push(theme_mode.as_str().to_string());
    tags.push(source_tags[1].clone());
    tags.push(subcategory.to_string());
    tags.extend(source_tags[3..].iter().cloned());
    tags
}

/// Tags of a derived state token: the last tag gets the state suffix
pub fn state_tags(tags: &[String], state: ColorState) -> Vec<String> {
    let mut out = tags.to_vec();
    if let Some(last) = out.last_mut() {
        last.push_str(state.suffix());
    }
    out
}

/// Whether a tag already carries a state suffix (`accent-hover`)
pub fn is_state_tag(tag: &str) -> bool {
    ColorState::ALL.iter().any(|state| tag.ends_with(state.suffix()))
}

/// Memoised state colors keyed by `(source token name, platform)`, so that
/// every fan-out destination of one source reuses the same computed set.
#[derive(Default)]
pub struct StateCache {
    computed: FxHashMap<(String, Platform), StateColors>,
}

impl StateCache {
    /// State colors for every platform value of a source color.
    ///
    /// Returns `None` when the category has no formula. Values that cannot
    /// be resolved through the palette derive the fallback set.
    pub fn states_for(
        &mut self,
        source_name: &str,
        category: &str,
        mode: ThemeMode,
        values: &BTreeMap<Platform, TokenValue>,
        palette: &Palette,
    ) -> Option<BTreeMap<Platform, StateColors>> {
        let formula = section_to_formula(category)?;

        let mut out = BTreeMap::new();
        for (platform, value) in values {
            let Some(raw) = value.as_text() else {
                continue;
            };
            let states = self
                .computed
                .entry((source_name.to_string(), *platform))
                .or_insert_with(|| match palette.resolve_str(raw) {
                    Some(color) => get_state_color_for(color, formula, mode),
                    None => {
                        tracing::warn!(
                            token = source_name,
                            %platform,
                            value = raw,
                            "cannot resolve color, derived states use the fallback"
                        );
                        StateColors::fallback()
                    }
                });
            out.insert(*platform, states.clone());
        }
        Some(out)
    }

    pub fn len(&self) -> usize {
        self.computed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.computed.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(name: &str) -> Vec<String> {
        name.split('.').map(str::to_string).collect()
    }

    #[test]
    fn fan_out_sources() {
        assert_eq!(source_mode(ThemeMode::Dark, "on-light"), ThemeMode::Light);
        assert_eq!(source_mode(ThemeMode::Dark, "inverse"), ThemeMode::Light);
        assert_eq!(source_mode(ThemeMode::Light, "inverse"), ThemeMode::Dark);
        assert_eq!(source_mode(ThemeMode::Light, "on-light"), ThemeMode::Light);
        assert_eq!(source_mode(ThemeMode::Light, "custom"), ThemeMode::Light);
    }

    #[test]
    fn destination_and_state_names() {
        let source = tags("dark.surface.default.accent");
        let dest = destination_tags(ThemeMode::Light, "inverse", &source);
        assert_eq!(dest.join("."), "light.surface.inverse.accent");
        assert_eq!(
            state_tags(&dest, ColorState::Hover).join("."),
            "light.surface.inverse.accent-hover"
        );
    }

    #[test]
    fn cache_reuses_computed_states() {
        let mut cache = StateCache::default();
        let values = BTreeMap::from([(Platform::Web, TokenValue::text("#112233"))]);
        let palette = Palette::new();

        let first = cache
            .states_for("dark.surface.default.accent", "surface", ThemeMode::Dark, &values, &palette)
            .unwrap();
        let second = cache
            .states_for("dark.surface.default.accent", "surface", ThemeMode::Dark, &values, &palette)
            .unwrap();
        assert_eq!(first, second);
        assert_eq!(cache.len(), 1);

        assert!(cache
            .states_for("dark.overlay.default.soft", "overlay", ThemeMode::Dark, &values, &palette)
            .is_none());
    }
}
