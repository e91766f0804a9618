//! Plasma Component
//!
//! Component configuration on top of `plasma_theme`.
//!
//! - [`ComponentApi`]: catalog of the properties a component exposes
//! - [`Prop`] / [`Props`]: catalog entries joined with authored values
//! - [`Config`]: invariant props plus variations (`size`, `view`, ...) whose
//!   styles (`s`, `m`, `l`, ...) each carry their own props
//! - [`ConfigEditor`]: which part of a config an editor is looking at
//! - [`create_component_vars`]: the `--plasma-*` CSS variables of a
//!   component instance
//!
//! # Example
//!
//! ```rust
//! use plasma_component::{
//!     create_component_vars, ComponentApi, ComponentApiEntry, ComponentMeta, Config, PropType,
//!     PropValue, RenderContext, TokenMapping,
//! };
//! use plasma_theme::ThemeMode;
//!
//! let api = ComponentApi::new([ComponentApiEntry::new("h", "buttonHeight", PropType::Dimension)
//!     .with_web_token(TokenMapping::new("buttonHeight"))]);
//! let meta = ComponentMeta::new("Button", api);
//!
//! let mut config = Config::new();
//! config.add_token("h", PropValue::text("3rem"), &meta.api, None, None);
//!
//! let vars = create_component_vars(&meta, &config, &[], &RenderContext::new(ThemeMode::Dark));
//! assert_eq!(vars["--plasma-button-height"], "3rem");
//! ```

mod api;
mod config;
mod error;
mod prop;
mod props;
mod selection;
mod vars;

pub use api::{ComponentApi, ComponentApiEntry, ComponentMeta, PlatformMappings, PropType, TokenMapping, VariationMeta};
pub use config::{Config, ConfigData, DefaultVariation, PropEdit, StyleConfig, StyleData, VariationConfig, VariationData};
pub use error::ComponentError;
pub use prop::{
    apply_adjustment, css_var_name, Prop, PropConfig, PropState, PropValue, STATES_PER_ENTRY, STATE_SUFFIXES,
};
pub use props::Props;
pub use selection::{ChangeCallback, ConfigEditor, Selection};
pub use vars::{create_component_vars, prop_vars, props_vars, RenderContext};
