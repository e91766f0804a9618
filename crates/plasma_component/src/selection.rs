//! Editor selection state
//!
//! Which part of a [`Config`] an editor is looking at:
//!
//! ```text
//!   Invariants ──select_variation──▶ Style{variation, style}
//!       ▲                                  │   ▲
//!       └───────select_invariants──────────┘   └─select_style
//!   Defaults (lists default bindings, has no props)
//! ```

use crate::api::ComponentMeta;
use crate::config::Config;
use crate::props::Props;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    Invariants,
    Defaults,
    Style {
        variation_id: String,
        /// `None` when the variation has no styles
        style_id: Option<String>,
    },
}

/// Called with `(variation name, style id)` whenever the selected style
/// changes
pub type ChangeCallback = Box<dyn FnMut(&str, &str) + Send>;

/// Selection state machine of one component being edited
#[derive(Default)]
pub struct ConfigEditor {
    selection: Selection,
    on_change: Vec<ChangeCallback>,
}

impl ConfigEditor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a style change callback
    pub fn on_change<F: FnMut(&str, &str) + Send + 'static>(mut self, callback: F) -> Self {
        self.on_change.push(Box::new(callback));
        self
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn select_invariants(&mut self) {
        self.selection = Selection::Invariants;
    }

    pub fn select_defaults(&mut self) {
        self.selection = Selection::Defaults;
    }

    /// Select a variation, along with its bound default style when it
    /// still exists, else its first style
    pub fn select_variation(&mut self, config: &Config, meta: &ComponentMeta, variation_id: &str) {
        let style_id = config.variation(variation_id).and_then(|variation| {
            config
                .default_style(variation_id)
                .and_then(|id| variation.style(id))
                .or_else(|| variation.styles.first())
                .map(|style| style.id.clone())
        });
        self.selection = Selection::Style {
            variation_id: variation_id.to_string(),
            style_id,
        };
        self.notify(meta);
    }

    /// Select a style of the current variation. Ignored outside a
    /// variation.
    pub fn select_style(&mut self, meta: &ComponentMeta, style_id: &str) {
        match &mut self.selection {
            Selection::Style { style_id: current, .. } => *current = Some(style_id.to_string()),
            other => {
                tracing::debug!(selection = ?other, style = style_id, "no variation selected");
                return;
            }
        }
        self.notify(meta);
    }

    /// Props shown for the current selection
    pub fn active_props<'c>(&self, config: &'c Config) -> Option<&'c Props> {
        match &self.selection {
            Selection::Invariants => config.props(None, None),
            Selection::Defaults => None,
            Selection::Style { variation_id, style_id } => {
                config.props(Some(variation_id.as_str()), Some(style_id.as_deref()?))
            }
        }
    }

    fn notify(&mut self, meta: &ComponentMeta) {
        let Selection::Style {
            variation_id,
            style_id: Some(style_id),
        } = &self.selection
        else {
            return;
        };
        let name = meta.variation_name(variation_id);
        for callback in &mut self.on_change {
            callback(name, style_id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ComponentApi;
    use std::sync::{Arc, Mutex};

    #[test]
    fn variation_selects_default_then_first_style() {
        let meta = ComponentMeta::new("Button", ComponentApi::default()).with_variation("v-size", "size");
        let mut config = Config::new();
        let s = config.add_variation_style("v-size", "s");
        let m = config.add_variation_style("v-size", "m");

        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let mut editor = ConfigEditor::new().on_change(move |variation, style| {
            sink.lock().unwrap().push((variation.to_string(), style.to_string()));
        });

        editor.select_variation(&config, &meta, "v-size");
        assert_eq!(
            editor.selection(),
            &Selection::Style {
                variation_id: "v-size".into(),
                style_id: Some(s.clone())
            }
        );

        config.update_defaults("v-size", &m);
        editor.select_variation(&config, &meta, "v-size");
        editor.select_style(&meta, &s);

        assert_eq!(
            *seen.lock().unwrap(),
            vec![
                ("size".to_string(), s.clone()),
                ("size".to_string(), m.clone()),
                ("size".to_string(), s.clone()),
            ]
        );
    }

    #[test]
    fn active_props_per_view() {
        let meta = ComponentMeta::default();
        let mut config = Config::new();
        let mut editor = ConfigEditor::new();

        assert!(editor.active_props(&config).is_some());
        editor.select_defaults();
        assert!(editor.active_props(&config).is_none());

        editor.select_variation(&config, &meta, "size");
        assert!(editor.active_props(&config).is_none());

        config.add_variation_style("size", "m");
        editor.select_variation(&config, &meta, "size");
        assert!(editor.active_props(&config).is_some());

        editor.select_style(&meta, "gone");
        assert!(editor.active_props(&config).is_none());

        editor.select_invariants();
        editor.select_style(&meta, "ignored");
        assert_eq!(editor.selection(), &Selection::Invariants);
    }
}
