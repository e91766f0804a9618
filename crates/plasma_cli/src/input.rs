//! Loading JSON inputs from disk

use anyhow::{bail, Context, Result};
use plasma_component::{ComponentMeta, Config, ConfigData};
use plasma_theme::{Palette, PlatformsVariations, Theme, ThemeBuilder, ThemeMeta};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("Failed to parse {}", path.display()))
}

/// Build a theme from declaration, value and palette files
pub fn load_theme(meta: &Path, variations: &Path, palette: Option<&Path>) -> Result<Theme> {
    let meta: ThemeMeta = read_json(meta)?;
    let variations: PlatformsVariations = read_json(variations)?;
    let palette: Palette = match palette {
        Some(path) => read_json(path)?,
        None => Palette::default(),
    };

    let theme = ThemeBuilder::new(&meta, &variations)
        .palette(palette)
        .build()
        .with_context(|| format!("Failed to build theme `{}`", meta.name))?;
    tracing::info!(theme = theme.name(), version = theme.version(), tokens = theme.len(), "theme loaded");
    Ok(theme)
}

pub fn load_component(meta: &Path, config: &Path) -> Result<(ComponentMeta, Config)> {
    let meta: ComponentMeta = read_json(meta)?;
    let data: ConfigData = read_json(config)?;
    let config = Config::from_data(data, &meta.api);
    Ok((meta, config))
}

/// `variation=style`, each side an id or a display name
pub fn parse_selection(src: &str) -> Result<(String, String), String> {
    match src.split_once('=') {
        Some((variation, style)) if !variation.is_empty() && !style.is_empty() => {
            Ok((variation.trim().to_string(), style.trim().to_string()))
        }
        _ => Err(format!("expected `variation=style`, got `{src}`")),
    }
}

/// Map a selection written with names or ids onto `(variation id, style id)`
pub fn resolve_selection(meta: &ComponentMeta, config: &Config, variation: &str, style: &str) -> Result<(String, String)> {
    let variation_id = meta
        .variations
        .iter()
        .find(|v| v.name == variation)
        .map_or(variation, |v| v.id.as_str());

    let Some(found) = config.variation(variation_id) else {
        bail!("component `{}` has no variation `{variation}`", meta.name);
    };
    let Some(style) = found.styles.iter().find(|s| s.id == style || s.name == style) else {
        bail!("variation `{variation}` has no style `{style}`");
    };
    Ok((found.id.clone(), style.id.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use plasma_component::ComponentApi;

    #[test]
    fn selections_need_both_sides() {
        assert_eq!(parse_selection("size=m").unwrap(), ("size".to_string(), "m".to_string()));
        assert!(parse_selection("size").is_err());
        assert!(parse_selection("=m").is_err());
        assert!(parse_selection("size=").is_err());
    }

    #[test]
    fn selections_resolve_names_to_ids() {
        let meta = ComponentMeta::new("Button", ComponentApi::default()).with_variation("v-size", "size");
        let mut config = Config::new();
        let m = config.add_variation_style("v-size", "m");

        assert_eq!(
            resolve_selection(&meta, &config, "size", "m").unwrap(),
            ("v-size".to_string(), m.clone())
        );
        assert_eq!(
            resolve_selection(&meta, &config, "v-size", &m).unwrap(),
            ("v-size".to_string(), m.clone())
        );
        assert!(resolve_selection(&meta, &config, "size", "xl").is_err());
        assert!(resolve_selection(&meta, &config, "view", "m").is_err());
    }
}
