//! Ordered, id-unique prop collections

use crate::api::ComponentApi;
use crate::prop::{Prop, PropConfig, PropValue};
use indexmap::IndexMap;

/// Props of one scope (invariants or one style), keyed by catalog id.
///
/// Ids are unique: building from configs keeps the first occurrence, and
/// adding an id that is already present is ignored.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Props {
    props: IndexMap<String, Prop>,
}

impl Props {
    /// Join authored configs with the catalog. Orphaned ids, duplicates
    /// and values of the wrong type are dropped.
    pub fn new(api: &ComponentApi, configs: impl IntoIterator<Item = PropConfig>) -> Self {
        let mut props = Self::default();
        for config in configs {
            props.insert_config(config, api);
        }
        props
    }

    /// Add a prop from the catalog. Returns whether it was added.
    pub fn add_prop(&mut self, id: &str, value: PropValue, api: &ComponentApi) -> bool {
        self.insert_config(PropConfig::new(id, value), api)
    }

    /// Add a prop from a full authored config. Returns whether it was added.
    pub fn insert_config(&mut self, config: PropConfig, api: &ComponentApi) -> bool {
        let Some(entry) = api.get(&config.id) else {
            tracing::debug!(id = %config.id, "prop is not in the component api, skipped");
            return false;
        };
        if self.props.contains_key(&config.id) {
            tracing::warn!(id = %config.id, name = %entry.name, "prop already present, ignored");
            return false;
        }
        match Prop::new(entry, config) {
            Ok(prop) => {
                self.props.insert(prop.id().to_string(), prop);
                true
            }
            Err(err) => {
                tracing::warn!(error = %err, "invalid prop value, skipped");
                false
            }
        }
    }

    /// Remove a prop by id. Removing an absent id changes nothing.
    pub fn remove_prop(&mut self, id: &str) -> Option<Prop> {
        self.props.shift_remove(id)
    }

    pub fn get(&self, id: &str) -> Option<&Prop> {
        self.props.get(id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Prop> {
        self.props.get_mut(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.props.contains_key(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Prop> {
        self.props.values()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.props.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.props.len()
    }

    pub fn is_empty(&self) -> bool {
        self.props.is_empty()
    }

    pub fn to_configs(&self) -> Vec<PropConfig> {
        self.iter().map(Prop::to_config).collect()
    }
}

impl<'a> IntoIterator for &'a Props {
    type Item = &'a Prop;
    type IntoIter = indexmap::map::Values<'a, String, Prop>;

    fn into_iter(self) -> Self::IntoIter {
        self.props.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{ComponentApiEntry, PropType};

    fn api() -> ComponentApi {
        ComponentApi::new([
            ComponentApiEntry::new("h", "buttonHeight", PropType::Dimension),
            ComponentApiEntry::new("o", "buttonOpacity", PropType::Float),
        ])
    }

    #[test]
    fn first_occurrence_wins() {
        let props = Props::new(
            &api(),
            [
                PropConfig::new("h", 40.0),
                PropConfig::new("missing", 1.0),
                PropConfig::new("h", 48.0),
                PropConfig::new("o", "nope"),
            ],
        );
        assert_eq!(props.len(), 1);
        assert_eq!(props.get("h").unwrap().value(), &PropValue::Number(40.0));
    }

    #[test]
    fn add_remove_and_re_add() {
        let api = api();
        let mut props = Props::default();

        assert!(props.add_prop("o", PropValue::Number(0.4), &api));
        assert!(!props.add_prop("o", PropValue::Number(0.9), &api));
        assert_eq!(props.get("o").unwrap().value(), &PropValue::Number(0.4));

        assert!(props.remove_prop("o").is_some());
        assert!(props.remove_prop("o").is_none());
        assert!(props.add_prop("o", PropValue::Number(0.9), &api));
        assert_eq!(props.ids().collect::<Vec<_>>(), vec!["o"]);
    }
}
