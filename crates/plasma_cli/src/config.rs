//! Plasma configuration file handling

use anyhow::{Context, Result};
use plasma_theme::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "plasma.toml";

/// Top-level configuration (plasma.toml)
#[derive(Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct PlasmaConfig {
    #[serde(default)]
    pub theme: ThemeConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Theme inputs
#[derive(Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct ThemeConfig {
    #[serde(default)]
    pub mode: ThemeMode,
    /// Token declarations (ThemeMeta JSON)
    #[serde(default)]
    pub meta: Option<PathBuf>,
    /// Raw platform values (PlatformsVariations JSON)
    #[serde(default)]
    pub variations: Option<PathBuf>,
    /// Palette color references resolve against
    #[serde(default)]
    pub palette: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Css,
    Json,
}

#[derive(Debug, PartialEq, Deserialize, Serialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
    /// Selector wrapping CSS output
    #[serde(default = "default_selector")]
    pub selector: String,
}

fn default_selector() -> String {
    ":root".to_string()
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            selector: default_selector(),
        }
    }
}

impl PlasmaConfig {
    /// Load configuration from a file or a directory containing
    /// plasma.toml. A missing file gives the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let config_path = if path.is_dir() {
            path.join(CONFIG_FILE)
        } else {
            path.to_path_buf()
        };

        if !config_path.exists() {
            tracing::debug!(path = %config_path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read {}", config_path.display()))?;
        let mut config = Self::from_toml(&content)
            .with_context(|| format!("Failed to parse {}", config_path.display()))?;

        if let Some(base) = config_path.parent() {
            config.theme.rebase(base);
        }
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }
}

impl ThemeConfig {
    /// Resolve relative input paths against the config file's directory
    fn rebase(&mut self, base: &Path) {
        for path in [&mut self.meta, &mut self.variations, &mut self.palette].into_iter().flatten() {
            if path.is_relative() {
                *path = base.join(&*path);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_file_gives_defaults() {
        let config = PlasmaConfig::from_toml("").unwrap();
        assert_eq!(config, PlasmaConfig::default());
        assert_eq!(config.theme.mode, ThemeMode::Dark);
        assert_eq!(config.output.selector, ":root");
    }

    #[test]
    fn sections_are_read() {
        let config = PlasmaConfig::from_toml(
            r#"
            [theme]
            mode = "light"
            meta = "theme/meta.json"
            variations = "theme/variations.json"

            [output]
            format = "json"
            "#,
        )
        .unwrap();

        assert_eq!(config.theme.mode, ThemeMode::Light);
        assert_eq!(config.theme.meta, Some(PathBuf::from("theme/meta.json")));
        assert_eq!(config.theme.palette, None);
        assert_eq!(config.output.format, OutputFormat::Json);
        assert_eq!(config.output.selector, ":root");
    }

    #[test]
    fn unknown_mode_is_an_error() {
        assert!(PlasmaConfig::from_toml("[theme]\nmode = \"dim\"").is_err());
    }

    #[test]
    fn relative_paths_follow_the_config_file() {
        let mut theme = ThemeConfig {
            meta: Some(PathBuf::from("meta.json")),
            palette: Some(PathBuf::from("/abs/palette.json")),
            ..ThemeConfig::default()
        };
        theme.rebase(Path::new("/project"));
        assert_eq!(theme.meta, Some(PathBuf::from("/project/meta.json")));
        assert_eq!(theme.palette, Some(PathBuf::from("/abs/palette.json")));
    }

    #[test]
    fn round_trips_through_toml() {
        let config = PlasmaConfig::default();
        let text = config.to_toml().unwrap();
        assert_eq!(PlasmaConfig::from_toml(&text).unwrap(), config);
    }
}
