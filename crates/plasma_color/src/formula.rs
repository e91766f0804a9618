//! State-color formula tables
//!
//! Each `(category, mode)` pair owns an ordered list of rules. Solid colors
//! are matched on lightness, hue and saturation; translucent colors on alpha.
//! Rules are checked in declaration order and the first match wins, so more
//! specific rules (narrow hue bands) come before the general ones covering
//! the same lightness.
//!
//! Tables are built once per process and never mutated.

use crate::ThemeMode;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::sync::OnceLock;

/// Inclusive numeric interval
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Range {
    pub min: f32,
    pub max: f32,
}

impl Range {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: f32) -> bool {
        value >= self.min && value <= self.max
    }

    /// Middle of the interval, handy for picking a representative sample
    pub fn midpoint(&self) -> f32 {
        (self.min + self.max) / 2.0
    }
}

const ANY_HUE: Range = Range::new(0.0, 360.0);
const ANY_SATURATION: Range = Range::new(0.0, 100.0);

/// Semantic color role that selects a rule table
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormulaCategory {
    Text,
    Surface,
    Outline,
}

impl FormulaCategory {
    pub const ALL: [FormulaCategory; 3] = [
        FormulaCategory::Text,
        FormulaCategory::Surface,
        FormulaCategory::Outline,
    ];
}

/// Map a token category tag onto its formula, if it has one
pub fn section_to_formula(section: &str) -> Option<FormulaCategory> {
    match section {
        "text" => Some(FormulaCategory::Text),
        "surface" => Some(FormulaCategory::Surface),
        "outline" => Some(FormulaCategory::Outline),
        _ => None,
    }
}

/// Interaction state a derived color is computed for
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorState {
    Hover,
    Active,
    Brightness,
}

impl ColorState {
    pub const ALL: [ColorState; 3] = [ColorState::Hover, ColorState::Active, ColorState::Brightness];

    /// Suffix appended to the last tag of a derived token
    pub fn suffix(self) -> &'static str {
        match self {
            Self::Hover => "-hover",
            Self::Active => "-active",
            Self::Brightness => "-brightness",
        }
    }
}

impl Display for ColorState {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Hover => "hover",
            Self::Active => "active",
            Self::Brightness => "brightness",
        })
    }
}

/// Transform applied to lightness (solid) or alpha (transparent)
pub type Transform = fn(f32) -> f32;

/// Per-state transforms; `None` marks a state the rule does not handle
#[derive(Clone, Copy, Debug, Default)]
pub struct StateTransforms {
    pub hover: Option<Transform>,
    pub active: Option<Transform>,
    pub brightness: Option<Transform>,
}

impl StateTransforms {
    pub fn get(&self, state: ColorState) -> Option<Transform> {
        match state {
            ColorState::Hover => self.hover,
            ColorState::Active => self.active,
            ColorState::Brightness => self.brightness,
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct SolidRule {
    pub lightness: Range,
    pub hue: Range,
    pub saturation: Range,
    pub states: StateTransforms,
}

impl SolidRule {
    pub fn matches(&self, l: f32, h: f32, s: f32) -> bool {
        self.lightness.contains(l) && self.hue.contains(h) && self.saturation.contains(s)
    }
}

#[derive(Clone, Copy, Debug)]
pub struct TransparentRule {
    pub alpha: Range,
    pub states: StateTransforms,
}

#[derive(Clone, Debug, Default)]
pub struct FormulaTable {
    pub solid: Vec<SolidRule>,
    pub transparent: Vec<TransparentRule>,
}

impl FormulaTable {
    /// First solid rule containing `(l, h, s)`
    pub fn find_solid(&self, l: f32, h: f32, s: f32) -> Option<&SolidRule> {
        self.solid.iter().find(|rule| rule.matches(l, h, s))
    }

    /// First transparent rule containing `a`
    pub fn find_transparent(&self, a: f32) -> Option<&TransparentRule> {
        self.transparent.iter().find(|rule| rule.alpha.contains(a))
    }
}

fn solid(lightness: Range, hover: Transform, active: Transform, brightness: Option<Transform>) -> SolidRule {
    SolidRule {
        lightness,
        hue: ANY_HUE,
        saturation: ANY_SATURATION,
        states: StateTransforms {
            hover: Some(hover),
            active: Some(active),
            brightness,
        },
    }
}

fn banded(
    lightness: Range,
    hue: Range,
    saturation: Range,
    hover: Transform,
    active: Transform,
    brightness: Option<Transform>,
) -> SolidRule {
    SolidRule {
        hue,
        saturation,
        ..solid(lightness, hover, active, brightness)
    }
}

fn transparent(alpha: Range, hover: Transform, active: Transform, brightness: Option<Transform>) -> TransparentRule {
    TransparentRule {
        alpha,
        states: StateTransforms {
            hover: Some(hover),
            active: Some(active),
            brightness,
        },
    }
}

/// Saturated yellows/oranges shift less before they turn muddy
const WARM_HUES: Range = Range::new(40.0, 70.0);
const VIVID: Range = Range::new(60.0, 100.0);

fn build_tables() -> FxHashMap<(FormulaCategory, ThemeMode), FormulaTable> {
    let mut tables = FxHashMap::default();

    // Near-white surfaces on dark and near-black surfaces on light have no
    // derivation; they fall through to the fallback color.
    tables.insert(
        (FormulaCategory::Surface, ThemeMode::Dark),
        FormulaTable {
            solid: vec![
                solid(Range::new(0.0, 16.0), |l| l + 4.0, |l| l + 2.0, Some(|l| l + 8.0)),
                solid(Range::new(16.0, 50.0), |l| l + 6.0, |l| l - 4.0, Some(|l| l + 12.0)),
                banded(
                    Range::new(50.0, 95.0),
                    WARM_HUES,
                    VIVID,
                    |l| l - 4.0,
                    |l| l - 8.0,
                    Some(|l| l + 4.0),
                ),
                solid(Range::new(50.0, 95.0), |l| l - 6.0, |l| l - 10.0, Some(|l| l + 6.0)),
            ],
            transparent: vec![
                transparent(Range::new(0.0, 0.24), |a| a + 0.04, |a| a + 0.02, Some(|a| a + 0.08)),
                transparent(Range::new(0.24, 0.96), |a| a - 0.08, |a| a - 0.12, Some(|a| a + 0.04)),
            ],
        },
    );

    tables.insert(
        (FormulaCategory::Surface, ThemeMode::Light),
        FormulaTable {
            solid: vec![
                solid(Range::new(5.0, 40.0), |l| l + 8.0, |l| l - 6.0, Some(|l| l + 16.0)),
                banded(
                    Range::new(40.0, 90.0),
                    WARM_HUES,
                    VIVID,
                    |l| l - 4.0,
                    |l| l - 8.0,
                    Some(|l| l + 4.0),
                ),
                solid(Range::new(40.0, 90.0), |l| l - 6.0, |l| l - 10.0, Some(|l| l + 8.0)),
                solid(Range::new(90.0, 100.0), |l| l - 3.0, |l| l - 6.0, Some(|l| l - 1.0)),
            ],
            transparent: vec![
                transparent(Range::new(0.0, 0.28), |a| a + 0.06, |a| a + 0.1, Some(|a| a + 0.02)),
                transparent(Range::new(0.28, 0.96), |a| a - 0.06, |a| a - 0.1, Some(|a| a + 0.06)),
            ],
        },
    );

    // Text has no brightness variant.
    tables.insert(
        (FormulaCategory::Text, ThemeMode::Dark),
        FormulaTable {
            solid: vec![
                solid(Range::new(0.0, 50.0), |l| l + 12.0, |l| l + 6.0, None),
                solid(Range::new(50.0, 95.0), |l| l - 10.0, |l| l - 20.0, None),
            ],
            transparent: vec![transparent(Range::new(0.0, 0.96), |a| a + 0.12, |a| a - 0.08, None)],
        },
    );

    tables.insert(
        (FormulaCategory::Text, ThemeMode::Light),
        FormulaTable {
            solid: vec![
                solid(Range::new(5.0, 50.0), |l| l + 15.0, |l| l + 25.0, None),
                solid(Range::new(50.0, 100.0), |l| l - 8.0, |l| l - 16.0, None),
            ],
            transparent: vec![transparent(Range::new(0.0, 0.96), |a| a + 0.16, |a| a - 0.1, None)],
        },
    );

    tables.insert(
        (FormulaCategory::Outline, ThemeMode::Dark),
        FormulaTable {
            solid: vec![
                solid(Range::new(0.0, 40.0), |l| l + 10.0, |l| l + 5.0, None),
                solid(Range::new(40.0, 95.0), |l| l - 8.0, |l| l - 14.0, None),
            ],
            transparent: vec![transparent(Range::new(0.0, 0.96), |a| a + 0.1, |a| a + 0.05, None)],
        },
    );

    tables.insert(
        (FormulaCategory::Outline, ThemeMode::Light),
        FormulaTable {
            solid: vec![
                solid(Range::new(5.0, 60.0), |l| l + 8.0, |l| l + 14.0, None),
                solid(Range::new(60.0, 100.0), |l| l - 6.0, |l| l - 12.0, None),
            ],
            transparent: vec![transparent(Range::new(0.0, 0.96), |a| a + 0.1, |a| a + 0.05, None)],
        },
    );

    tables
}

static TABLES: OnceLock<FxHashMap<(FormulaCategory, ThemeMode), FormulaTable>> = OnceLock::new();

/// Rule table for a `(category, mode)` pair
pub fn formula_table(category: FormulaCategory, mode: ThemeMode) -> Option<&'static FormulaTable> {
    TABLES.get_or_init(build_tables).get(&(category, mode))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_category_has_both_modes() {
        for category in FormulaCategory::ALL {
            for mode in ThemeMode::ALL {
                let table = formula_table(category, mode).expect("table");
                assert!(!table.solid.is_empty(), "{category:?}/{mode:?}");
                assert!(!table.transparent.is_empty(), "{category:?}/{mode:?}");
            }
        }
    }

    #[test]
    fn first_matching_rule_wins() {
        let table = formula_table(FormulaCategory::Surface, ThemeMode::Dark).unwrap();
        // Boundary value 16 sits in both the first and second rule.
        let rule = table.find_solid(16.0, 10.0, 10.0).unwrap();
        assert_eq!((rule.states.hover.unwrap())(16.0), 20.0);

        // Warm vivid band is declared before the general rule for the same lightness.
        let warm = table.find_solid(70.0, 50.0, 80.0).unwrap();
        assert_eq!((warm.states.hover.unwrap())(70.0), 66.0);
        let cool = table.find_solid(70.0, 200.0, 80.0).unwrap();
        assert_eq!((cool.states.hover.unwrap())(70.0), 64.0);
    }

    #[test]
    fn section_mapping() {
        assert_eq!(section_to_formula("surface"), Some(FormulaCategory::Surface));
        assert_eq!(section_to_formula("overlay"), None);
    }
}
