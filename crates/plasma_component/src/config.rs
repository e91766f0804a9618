//! Component configuration: invariant props, variations and their styles
//!
//! A [`Config`] is rebuilt from [`ConfigData`] against the component api
//! on load and written back whole with [`Config::to_data`].

use crate::api::ComponentApi;
use crate::prop::{Prop, PropConfig, PropValue};
use crate::props::Props;
use crate::ComponentError;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Default style binding of one variation
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefaultVariation {
    #[serde(rename = "variationID")]
    pub variation_id: String,
    #[serde(rename = "styleID")]
    pub style_id: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct StyleConfig {
    pub name: String,
    pub id: String,
    /// Cross-variation conditions, kept as authored
    pub intersections: BTreeMap<String, Vec<String>>,
    pub props: Props,
}

#[derive(Clone, Debug, PartialEq)]
pub struct VariationConfig {
    pub id: String,
    pub styles: Vec<StyleConfig>,
}

impl VariationConfig {
    pub fn style(&self, style_id: &str) -> Option<&StyleConfig> {
        self.styles.iter().find(|s| s.id == style_id)
    }

    pub fn style_mut(&mut self, style_id: &str) -> Option<&mut StyleConfig> {
        self.styles.iter_mut().find(|s| s.id == style_id)
    }
}

/// One value edit in a [`Config::update_tokens`] batch
#[derive(Clone, Debug, PartialEq)]
pub struct PropEdit {
    pub prop_id: String,
    pub value: PropValue,
    pub variation_id: Option<String>,
    pub style_id: Option<String>,
}

impl PropEdit {
    /// Edit of an invariant prop
    pub fn invariant(prop_id: impl Into<String>, value: impl Into<PropValue>) -> Self {
        Self {
            prop_id: prop_id.into(),
            value: value.into(),
            variation_id: None,
            style_id: None,
        }
    }

    /// Edit of a prop inside one style
    pub fn in_style(
        prop_id: impl Into<String>,
        value: impl Into<PropValue>,
        variation_id: impl Into<String>,
        style_id: impl Into<String>,
    ) -> Self {
        Self {
            prop_id: prop_id.into(),
            value: value.into(),
            variation_id: Some(variation_id.into()),
            style_id: Some(style_id.into()),
        }
    }
}

/// Component configuration.
///
/// Scopes are addressed by `(variation, style)`: both `None` is the
/// invariant scope, both `Some` a style. Anything else addresses nothing.
/// Lookups that miss return `None` and mutations on missing scopes are
/// no-ops.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Config {
    default_variations: Vec<DefaultVariation>,
    invariant_props: Props,
    variations: Vec<VariationConfig>,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn invariant_props(&self) -> &Props {
        &self.invariant_props
    }

    pub fn variations(&self) -> &[VariationConfig] {
        &self.variations
    }

    pub fn variation(&self, variation_id: &str) -> Option<&VariationConfig> {
        self.variations.iter().find(|v| v.id == variation_id)
    }

    pub fn default_variations(&self) -> &[DefaultVariation] {
        &self.default_variations
    }

    /// Props of a scope
    pub fn props(&self, variation_id: Option<&str>, style_id: Option<&str>) -> Option<&Props> {
        match (variation_id, style_id) {
            (None, None) => Some(&self.invariant_props),
            (Some(variation_id), Some(style_id)) => self
                .variation(variation_id)?
                .style(style_id)
                .map(|style| &style.props),
            _ => None,
        }
    }

    pub fn props_mut(&mut self, variation_id: Option<&str>, style_id: Option<&str>) -> Option<&mut Props> {
        match (variation_id, style_id) {
            (None, None) => Some(&mut self.invariant_props),
            (Some(variation_id), Some(style_id)) => self
                .variations
                .iter_mut()
                .find(|v| v.id == variation_id)?
                .style_mut(style_id)
                .map(|style| &mut style.props),
            _ => None,
        }
    }

    /// Add a prop to a scope. Returns whether it was added.
    pub fn add_token(
        &mut self,
        prop_id: &str,
        value: PropValue,
        api: &ComponentApi,
        variation_id: Option<&str>,
        style_id: Option<&str>,
    ) -> bool {
        match self.props_mut(variation_id, style_id) {
            Some(props) => props.add_prop(prop_id, value, api),
            None => {
                tracing::debug!(prop = prop_id, ?variation_id, ?style_id, "no such scope");
                false
            }
        }
    }

    /// Set the value of a prop in a scope. Returns `Ok(false)` when the
    /// prop is not there.
    pub fn update_token(
        &mut self,
        prop_id: &str,
        value: PropValue,
        variation_id: Option<&str>,
        style_id: Option<&str>,
    ) -> Result<bool, ComponentError> {
        match self.props_mut(variation_id, style_id).and_then(|props| props.get_mut(prop_id)) {
            Some(prop) => prop.set_value(value).map(|()| true),
            None => Ok(false),
        }
    }

    /// Apply several value edits as one unit: every edit is checked first
    /// and nothing changes if any of them fails. Edits addressing missing
    /// props are skipped. Returns the number of props updated.
    pub fn update_tokens(&mut self, edits: &[PropEdit]) -> Result<usize, ComponentError> {
        for edit in edits {
            if let Some(prop) = self.find_prop(edit) {
                prop.check(&edit.value)?;
            }
        }

        let mut applied = 0;
        for edit in edits {
            let updated = self.update_token(
                &edit.prop_id,
                edit.value.clone(),
                edit.variation_id.as_deref(),
                edit.style_id.as_deref(),
            )?;
            applied += usize::from(updated);
        }
        Ok(applied)
    }

    fn find_prop(&self, edit: &PropEdit) -> Option<&Prop> {
        self.props(edit.variation_id.as_deref(), edit.style_id.as_deref())?
            .get(&edit.prop_id)
    }

    pub fn remove_token(&mut self, prop_id: &str, variation_id: Option<&str>, style_id: Option<&str>) -> Option<Prop> {
        self.props_mut(variation_id, style_id)?.remove_prop(prop_id)
    }

    /// Add an empty style to a variation, creating the variation when it
    /// does not exist yet. Returns the new style id.
    pub fn add_variation_style(&mut self, variation_id: &str, name: impl Into<String>) -> String {
        let id = uuid::Uuid::new_v4().to_string();
        let style = StyleConfig {
            name: name.into(),
            id: id.clone(),
            intersections: BTreeMap::new(),
            props: Props::default(),
        };

        match self.variations.iter_mut().find(|v| v.id == variation_id) {
            Some(variation) => variation.styles.push(style),
            None => {
                tracing::debug!(variation = variation_id, "creating variation");
                self.variations.push(VariationConfig {
                    id: variation_id.to_string(),
                    styles: vec![style],
                });
            }
        }
        id
    }

    /// Delete a style. Default bindings pointing at it are left in place.
    pub fn remove_variation_style(&mut self, variation_id: &str, style_id: &str) -> Option<StyleConfig> {
        let variation = self.variations.iter_mut().find(|v| v.id == variation_id)?;
        let idx = variation.styles.iter().position(|s| s.id == style_id)?;
        if self.default_variations.iter().any(|d| d.variation_id == variation_id && d.style_id == style_id) {
            tracing::debug!(variation = variation_id, style = style_id, "removed style is still bound as default");
        }
        Some(variation.styles.remove(idx))
    }

    /// Bind the default style of a variation, replacing any previous binding
    pub fn update_defaults(&mut self, variation_id: &str, style_id: &str) {
        match self.default_variations.iter_mut().find(|d| d.variation_id == variation_id) {
            Some(binding) => binding.style_id = style_id.to_string(),
            None => self.default_variations.push(DefaultVariation {
                variation_id: variation_id.to_string(),
                style_id: style_id.to_string(),
            }),
        }
    }

    pub fn default_style(&self, variation_id: &str) -> Option<&str> {
        self.default_variations
            .iter()
            .find(|d| d.variation_id == variation_id)
            .map(|d| d.style_id.as_str())
    }

    /// `(variation, style)` pairs of every default binding that still
    /// points at an existing style, in variation order
    pub fn default_selections(&self) -> Vec<(String, String)> {
        let bound: FxHashMap<&str, &str> = self
            .default_variations
            .iter()
            .map(|d| (d.variation_id.as_str(), d.style_id.as_str()))
            .collect();
        self.variations
            .iter()
            .filter_map(|variation| {
                let style_id = bound.get(variation.id.as_str())?;
                variation.style(style_id)?;
                Some((variation.id.clone(), style_id.to_string()))
            })
            .collect()
    }

    pub fn from_data(data: ConfigData, api: &ComponentApi) -> Self {
        Self {
            default_variations: data.default_variations,
            invariant_props: Props::new(api, data.invariant_props),
            variations: data
                .variations
                .into_iter()
                .map(|variation| VariationConfig {
                    id: variation.id,
                    styles: variation
                        .styles
                        .into_iter()
                        .map(|style| StyleConfig {
                            name: style.name,
                            id: style.id,
                            intersections: style.intersections,
                            props: Props::new(api, style.props),
                        })
                        .collect(),
                })
                .collect(),
        }
    }

    pub fn to_data(&self) -> ConfigData {
        ConfigData {
            default_variations: self.default_variations.clone(),
            invariant_props: self.invariant_props.to_configs(),
            variations: self
                .variations
                .iter()
                .map(|variation| VariationData {
                    id: variation.id.clone(),
                    styles: variation
                        .styles
                        .iter()
                        .map(|style| StyleData {
                            name: style.name.clone(),
                            id: style.id.clone(),
                            intersections: style.intersections.clone(),
                            props: style.props.to_configs(),
                        })
                        .collect(),
                })
                .collect(),
        }
    }
}

/// Serialized form of a [`Config`]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigData {
    #[serde(default)]
    pub default_variations: Vec<DefaultVariation>,
    #[serde(default)]
    pub invariant_props: Vec<PropConfig>,
    #[serde(default)]
    pub variations: Vec<VariationData>,
}

impl ConfigData {
    pub fn from_json(src: &str) -> Result<Self, ComponentError> {
        Ok(serde_json::from_str(src)?)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct VariationData {
    pub id: String,
    #[serde(default)]
    pub styles: Vec<StyleData>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StyleData {
    pub name: String,
    pub id: String,
    #[serde(default)]
    pub intersections: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    pub props: Vec<PropConfig>,
}
