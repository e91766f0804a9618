//! Runtime component properties and their web tokens

use crate::api::{ComponentApiEntry, PropType, TokenMapping};
use crate::vars::RenderContext;
use crate::ComponentError;
use indexmap::IndexMap;
use plasma_color::{Color, ColorRef};
use plasma_theme::vars::{kebab_case, token_var_name_of, typography_var_name};
use plasma_theme::{TokenKind, TypographyField};
use regex::{NoExpand, Regex};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt::{Display, Formatter};
use std::sync::OnceLock;

/// Number of state names honoured per state entry. Entries may list more,
/// only the first is rendered.
pub const STATES_PER_ENTRY: usize = 1;

/// Interaction state names and the suffix their tokens get
pub const STATE_SUFFIXES: [(&str, &str); 2] = [("hovered", "Hover"), ("pressed", "Active")];

fn state_suffix(state: &str) -> Option<&'static str> {
    STATE_SUFFIXES
        .iter()
        .find(|(name, _)| *name == state)
        .map(|(_, suffix)| *suffix)
}

/// Authored property value
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropValue {
    Number(f64),
    Text(String),
}

impl PropValue {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// Falsy values render nothing: an empty string or zero
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Text(text) => text.is_empty(),
            Self::Number(n) => *n == 0.0,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Number(_) => None,
        }
    }

    fn fits(&self, kind: PropType) -> bool {
        match (kind, self) {
            (PropType::Float, Self::Number(n)) => n.is_finite(),
            (PropType::Float, Self::Text(_)) => false,
            (PropType::Dimension, Self::Number(n)) => n.is_finite(),
            (_, Self::Text(_)) => true,
            (_, Self::Number(_)) => false,
        }
    }
}

impl Display for PropValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(text) => f.write_str(text),
        }
    }
}

impl From<f64> for PropValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for PropValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// Value override for an interaction state
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PropState {
    pub state: SmallVec<[String; 1]>,
    pub value: PropValue,
}

impl PropState {
    pub fn new(state: &str, value: impl Into<PropValue>) -> Self {
        Self {
            state: SmallVec::from_elem(state.to_string(), 1),
            value: value.into(),
        }
    }
}

/// Authored override of one catalog property
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PropConfig {
    pub id: String,
    pub value: PropValue,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub states: Vec<PropState>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub adjustment: Option<String>,
}

impl PropConfig {
    pub fn new(id: impl Into<String>, value: impl Into<PropValue>) -> Self {
        Self {
            id: id.into(),
            value: value.into(),
            states: Vec::new(),
            adjustment: None,
        }
    }

    pub fn with_state(mut self, state: PropState) -> Self {
        self.states.push(state);
        self
    }

    pub fn with_adjustment(mut self, adjustment: impl Into<String>) -> Self {
        self.adjustment = Some(adjustment.into());
        self
    }
}

/// A catalog property joined with its authored value
#[derive(Clone, Debug, PartialEq)]
pub struct Prop {
    id: String,
    name: String,
    kind: PropType,
    value: PropValue,
    default: PropValue,
    states: Vec<PropState>,
    adjustment: Option<String>,
    web_tokens: Vec<TokenMapping>,
}

impl Prop {
    pub fn new(entry: &ComponentApiEntry, config: PropConfig) -> Result<Self, ComponentError> {
        check_value(&entry.id, entry.kind, &config.value)?;
        for state in &config.states {
            check_value(&entry.id, entry.kind, &state.value)?;
        }
        Ok(Self {
            id: entry.id.clone(),
            name: entry.name.clone(),
            kind: entry.kind,
            default: config.value.clone(),
            value: config.value,
            states: config.states,
            adjustment: config.adjustment,
            web_tokens: entry.platform_mappings.web.clone(),
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> PropType {
        self.kind
    }

    pub fn value(&self) -> &PropValue {
        &self.value
    }

    pub fn default_value(&self) -> &PropValue {
        &self.default
    }

    pub fn states(&self) -> &[PropState] {
        &self.states
    }

    pub fn adjustment(&self) -> Option<&str> {
        self.adjustment.as_deref()
    }

    pub fn web_tokens(&self) -> &[TokenMapping] {
        &self.web_tokens
    }

    /// Check a value against this prop's type without applying it
    pub fn check(&self, value: &PropValue) -> Result<(), ComponentError> {
        check_value(&self.id, self.kind, value)
    }

    pub fn set_value(&mut self, value: PropValue) -> Result<(), ComponentError> {
        self.check(&value)?;
        self.value = value;
        Ok(())
    }

    pub fn reset(&mut self) {
        self.value = self.default.clone();
    }

    pub fn is_modified(&self) -> bool {
        self.value != self.default
    }

    pub fn set_states(&mut self, states: Vec<PropState>) -> Result<(), ComponentError> {
        for state in &states {
            self.check(&state.value)?;
        }
        self.states = states;
        Ok(())
    }

    pub fn set_adjustment(&mut self, adjustment: Option<String>) {
        self.adjustment = adjustment;
    }

    pub fn to_config(&self) -> PropConfig {
        PropConfig {
            id: self.id.clone(),
            value: self.value.clone(),
            states: self.states.clone(),
            adjustment: self.adjustment.clone(),
        }
    }

    /// Web CSS variables for the current value, one per mapped token name.
    ///
    /// Returns `None` when the prop has no web mapping or an empty value.
    pub fn create_web_token(&self, component: &str, ctx: &RenderContext<'_>) -> Option<IndexMap<String, String>> {
        if self.web_tokens.is_empty() || self.value.is_empty() {
            return None;
        }
        Some(
            self.web_tokens
                .iter()
                .map(|mapping| {
                    (
                        css_var_name(component, &mapping.name, None),
                        self.render(&self.value, mapping, ctx),
                    )
                })
                .collect(),
        )
    }

    /// Web CSS variables for interaction states: `--plasma-button-color-hover`
    pub fn get_additional_tokens(&self, component: &str, ctx: &RenderContext<'_>) -> IndexMap<String, String> {
        let mut tokens = IndexMap::new();
        for entry in &self.states {
            if entry.state.len() > STATES_PER_ENTRY {
                tracing::debug!(
                    prop = %self.name,
                    states = ?entry.state,
                    "only the first state of an entry is rendered"
                );
            }
            let Some(state) = entry.state.first() else {
                continue;
            };
            let Some(suffix) = state_suffix(state) else {
                tracing::debug!(prop = %self.name, state = %state, "unknown interaction state");
                continue;
            };
            if entry.value.is_empty() {
                continue;
            }
            for mapping in &self.web_tokens {
                let name = css_var_name(component, &mapping.name, Some(suffix));
                if tokens.contains_key(&name) {
                    tracing::debug!(prop = %self.name, state = %state, "state declared twice, first wins");
                    continue;
                }
                let value = self.render(&entry.value, mapping, ctx);
                tokens.insert(name, value);
            }
        }
        tokens
    }

    fn render(&self, value: &PropValue, mapping: &TokenMapping, ctx: &RenderContext<'_>) -> String {
        let resolved = self.resolve(value, &mapping.name, ctx);
        let template = self.adjustment.as_deref().or(mapping.adjustment.as_deref());
        match template {
            Some(template) => apply_adjustment(template, &resolved),
            None => resolved,
        }
    }

    fn resolve(&self, value: &PropValue, mapping_name: &str, ctx: &RenderContext<'_>) -> String {
        let PropValue::Text(text) = value else {
            return value.to_string();
        };
        match self.kind {
            PropType::Color => resolve_color(text, ctx),
            PropType::Shape => resolve_shape(text, ctx),
            PropType::Typography => resolve_typography(text, mapping_name, ctx),
            PropType::Dimension | PropType::Float => text.clone(),
        }
    }
}

fn check_value(id: &str, kind: PropType, value: &PropValue) -> Result<(), ComponentError> {
    if value.fits(kind) {
        Ok(())
    } else {
        Err(ComponentError::InvalidValue {
            id: id.to_string(),
            kind,
            value: value.to_string(),
        })
    }
}

fn resolve_color(value: &str, ctx: &RenderContext<'_>) -> String {
    if value.starts_with('#') && Color::from_hex_str(value).is_ok() {
        return value.to_string();
    }
    if ColorRef::is_reference(value) {
        return ctx
            .theme
            .and_then(|theme| theme.resolve_color(value))
            .map_or_else(|| value.to_string(), |c| c.to_css());
    }
    match ctx.theme {
        Some(theme) => theme
            .get_token(&format!("{}.{value}", ctx.mode), TokenKind::Color)
            .and_then(|token| theme.web_value(token))
            .unwrap_or_else(|| value.to_string()),
        None => format!("var({})", token_var_name_of(TokenKind::Color, value)),
    }
}

fn resolve_shape(value: &str, ctx: &RenderContext<'_>) -> String {
    match ctx.theme {
        Some(theme) => theme
            .get_token(value, TokenKind::Shape)
            .and_then(|token| theme.web_value(token))
            .unwrap_or_else(|| value.to_string()),
        None => format!("var({})", token_var_name_of(TokenKind::Shape, value)),
    }
}

fn resolve_typography(value: &str, mapping_name: &str, ctx: &RenderContext<'_>) -> String {
    let Some(field) = TypographyField::from_suffix(mapping_name) else {
        tracing::debug!(token = mapping_name, "typography token without a field suffix");
        return value.to_string();
    };
    match ctx.theme {
        Some(theme) => theme
            .lookup(value, TokenKind::Typography, ctx.mode)
            .and_then(|token| token.value(plasma_theme::Platform::Web))
            .and_then(|v| v.as_typography())
            .map(|typo| theme.typography_field(typo, field))
            .unwrap_or_else(|| value.to_string()),
        None => {
            let tags: Vec<String> = value.split('.').map(str::to_string).collect();
            format!("var({})", typography_var_name(&tags, field))
        }
    }
}

/// `buttonHeight` → `ButtonHeight`, `icon-button` → `IconButton`
fn upper_camel(src: &str) -> String {
    src.split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect()
}

/// CSS variable name of a component token.
///
/// The component name is left out when the token name already starts with
/// it, so `Button` + `buttonHeight` gives `--plasma-button-height`.
pub fn css_var_name(component: &str, name: &str, suffix: Option<&str>) -> String {
    let component = upper_camel(component);
    let mut raw = String::from("plasma");
    if !name.to_ascii_lowercase().starts_with(&component.to_ascii_lowercase()) {
        raw.push_str(&component);
    }
    raw.push_str(&upper_camel(name));
    if let Some(suffix) = suffix {
        raw.push_str(suffix);
    }
    format!("--{}", kebab_case(&raw))
}

fn placeholder() -> &'static Regex {
    static PLACEHOLDER: OnceLock<Regex> = OnceLock::new();
    PLACEHOLDER.get_or_init(|| Regex::new(r"\$\d+").expect("Invalid placeholder pattern"))
}

/// Substitute every `$N` placeholder of `template` with `value`
pub fn apply_adjustment(template: &str, value: &str) -> String {
    placeholder().replace_all(template, NoExpand(value)).into_owned()
}
