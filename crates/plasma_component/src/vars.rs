//! Component CSS variables

use crate::api::ComponentMeta;
use crate::config::Config;
use crate::prop::Prop;
use crate::props::Props;
use indexmap::IndexMap;
use plasma_color::ThemeMode;
use plasma_theme::Theme;

/// What props resolve against while rendering: the live theme, when there
/// is one, and the mode its color tokens are read from.
#[derive(Clone, Copy, Debug)]
pub struct RenderContext<'a> {
    pub theme: Option<&'a Theme>,
    pub mode: ThemeMode,
}

impl<'a> RenderContext<'a> {
    /// Context without a theme: theme names render as `var(--…)`
    pub fn new(mode: ThemeMode) -> Self {
        Self { theme: None, mode }
    }

    pub fn with_theme(mut self, theme: &'a Theme) -> Self {
        self.theme = Some(theme);
        self
    }
}

/// Value and state tokens of one prop
pub fn prop_vars(prop: &Prop, component: &str, ctx: &RenderContext<'_>) -> IndexMap<String, String> {
    let mut vars = prop.create_web_token(component, ctx).unwrap_or_default();
    vars.extend(prop.get_additional_tokens(component, ctx));
    vars
}

/// Tokens of every prop in a collection, later props overriding earlier
pub fn props_vars(props: &Props, component: &str, ctx: &RenderContext<'_>) -> IndexMap<String, String> {
    props
        .iter()
        .fold(IndexMap::new(), |mut vars, prop| {
            vars.extend(prop_vars(prop, component, ctx));
            vars
        })
}

/// CSS variables of a component instance.
///
/// Selected styles are merged in selection order, then the invariant props
/// on top, so invariants win when both emit the same variable. Selections
/// that do not resolve to a style contribute nothing.
pub fn create_component_vars(
    meta: &ComponentMeta,
    config: &Config,
    selections: &[(String, String)],
    ctx: &RenderContext<'_>,
) -> IndexMap<String, String> {
    let mut vars = IndexMap::new();

    for (variation_id, style_id) in selections {
        match config.props(Some(variation_id.as_str()), Some(style_id.as_str())) {
            Some(props) => vars.extend(props_vars(props, &meta.name, ctx)),
            None => tracing::debug!(
                component = %meta.name,
                variation = %meta.variation_name(variation_id),
                style = %style_id,
                "selected style not found"
            ),
        }
    }

    vars.extend(props_vars(config.invariant_props(), &meta.name, ctx));
    vars
}
