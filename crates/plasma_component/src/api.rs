//! Component API catalog
//!
//! The catalog lists every property a component exposes, its value type,
//! the variation axes it takes part in and the platform token names it
//! renders to. Catalog entries are immutable; configs reference them by id.

use crate::ComponentError;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Value type of a component property
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropType {
    Color,
    Dimension,
    Float,
    Shape,
    Typography,
}

impl PropType {
    pub const ALL: [PropType; 5] = [
        PropType::Color,
        PropType::Dimension,
        PropType::Float,
        PropType::Shape,
        PropType::Typography,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Color => "color",
            Self::Dimension => "dimension",
            Self::Float => "float",
            Self::Shape => "shape",
            Self::Typography => "typography",
        }
    }

    pub(crate) fn expected_value(self) -> &'static str {
        match self {
            Self::Float => "a number",
            Self::Dimension => "a number or a string",
            Self::Color | Self::Shape | Self::Typography => "a string",
        }
    }
}

impl Display for PropType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PropType {
    type Err = ComponentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| ComponentError::UnknownPropType(s.to_string()))
    }
}

/// One output token of a property on one platform
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenMapping {
    pub name: String,
    /// Template with `$1`, `$2`, ... placeholders for the value
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub adjustment: Option<String>,
}

impl TokenMapping {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            adjustment: None,
        }
    }

    pub fn with_adjustment(mut self, adjustment: impl Into<String>) -> Self {
        self.adjustment = Some(adjustment.into());
        self
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformMappings {
    #[serde(default)]
    pub web: Vec<TokenMapping>,
    #[serde(default)]
    pub ios: Vec<TokenMapping>,
    #[serde(default)]
    pub android: Vec<TokenMapping>,
}

/// Catalog record of one component property
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentApiEntry {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: PropType,
    #[serde(default)]
    pub description: String,
    /// Variation axes this property takes part in; none means invariant
    #[serde(default)]
    pub variations: Option<Vec<String>>,
    #[serde(default)]
    pub platform_mappings: PlatformMappings,
}

impl ComponentApiEntry {
    pub fn new(id: impl Into<String>, name: impl Into<String>, kind: PropType) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
            description: String::new(),
            variations: None,
            platform_mappings: PlatformMappings::default(),
        }
    }

    pub fn with_web_token(mut self, mapping: TokenMapping) -> Self {
        self.platform_mappings.web.push(mapping);
        self
    }

    pub fn with_variations<I, S>(mut self, variations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.variations = Some(variations.into_iter().map(Into::into).collect());
        self
    }

    pub fn is_invariant(&self) -> bool {
        self.variations.as_ref().map_or(true, Vec::is_empty)
    }

    pub fn in_variation(&self, variation_id: &str) -> bool {
        self.variations
            .as_ref()
            .is_some_and(|ids| ids.iter().any(|id| id == variation_id))
    }
}

/// Catalog of a component's properties, keyed by id in declaration order
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<ComponentApiEntry>", into = "Vec<ComponentApiEntry>")]
pub struct ComponentApi {
    entries: IndexMap<String, ComponentApiEntry>,
}

impl ComponentApi {
    pub fn new(entries: impl IntoIterator<Item = ComponentApiEntry>) -> Self {
        let mut api = Self::default();
        for entry in entries {
            if api.entries.contains_key(&entry.id) {
                tracing::warn!(id = %entry.id, name = %entry.name, "duplicate api entry ignored");
                continue;
            }
            api.entries.insert(entry.id.clone(), entry);
        }
        api
    }

    pub fn get(&self, id: &str) -> Option<&ComponentApiEntry> {
        self.entries.get(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ComponentApiEntry> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn invariants(&self) -> impl Iterator<Item = &ComponentApiEntry> {
        self.iter().filter(|entry| entry.is_invariant())
    }

    pub fn for_variation<'a>(&'a self, variation_id: &'a str) -> impl Iterator<Item = &'a ComponentApiEntry> + 'a {
        self.iter().filter(move |entry| entry.in_variation(variation_id))
    }
}

impl From<Vec<ComponentApiEntry>> for ComponentApi {
    fn from(entries: Vec<ComponentApiEntry>) -> Self {
        Self::new(entries)
    }
}

impl From<ComponentApi> for Vec<ComponentApiEntry> {
    fn from(api: ComponentApi) -> Self {
        api.entries.into_values().collect()
    }
}

/// A variation axis as shown to users
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariationMeta {
    pub id: String,
    pub name: String,
}

/// Static description of a component
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentMeta {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub api: ComponentApi,
    #[serde(default)]
    pub variations: Vec<VariationMeta>,
}

impl ComponentMeta {
    pub fn new(name: impl Into<String>, api: ComponentApi) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            api,
            variations: Vec::new(),
        }
    }

    pub fn with_variation(mut self, id: impl Into<String>, name: impl Into<String>) -> Self {
        self.variations.push(VariationMeta {
            id: id.into(),
            name: name.into(),
        });
        self
    }

    pub fn from_json(src: &str) -> Result<Self, ComponentError> {
        Ok(serde_json::from_str(src)?)
    }

    /// Display name of a variation axis, or the id when it is not listed
    pub fn variation_name<'a>(&'a self, id: &'a str) -> &'a str {
        self.variations
            .iter()
            .find(|v| v.id == id)
            .map_or(id, |v| v.name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn unknown_prop_types_are_rejected() {
        assert_eq!("dimension".parse::<PropType>().unwrap(), PropType::Dimension);
        assert!(matches!(
            "gradient".parse::<PropType>(),
            Err(ComponentError::UnknownPropType(_))
        ));

        let entry = json!({ "id": "1", "name": "buttonGradient", "type": "gradient" });
        assert!(serde_json::from_value::<ComponentApiEntry>(entry).is_err());
    }

    #[test]
    fn null_or_empty_variations_mean_invariant() {
        let entries = json!([
            { "id": "a", "name": "buttonColor", "type": "color", "variations": null },
            { "id": "b", "name": "buttonRadius", "type": "shape", "variations": [] },
            { "id": "c", "name": "buttonHeight", "type": "dimension", "variations": ["size"],
              "platformMappings": { "web": [{ "name": "buttonHeight" }] } }
        ]);
        let api: ComponentApi = serde_json::from_value(entries).unwrap();

        assert_eq!(api.len(), 3);
        assert_eq!(api.invariants().count(), 2);
        let sized: Vec<&str> = api.for_variation("size").map(|e| e.name.as_str()).collect();
        assert_eq!(sized, vec!["buttonHeight"]);
        assert_eq!(api.get("c").unwrap().platform_mappings.web[0].name, "buttonHeight");
    }

    #[test]
    fn variation_names_fall_back_to_ids() {
        let meta = ComponentMeta::new("Button", ComponentApi::default()).with_variation("v1", "size");
        assert_eq!(meta.variation_name("v1"), "size");
        assert_eq!(meta.variation_name("v2"), "v2");
    }
}
