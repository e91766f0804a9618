//! Derivation of interaction-state colors from a base color

use crate::formula::{formula_table, ColorState, FormulaCategory, StateTransforms, Transform};
use crate::{Color, Hsla, ThemeMode};

/// Returned for every state when no rule applies.
///
/// This is a deliberately coarse fallback: unparseable colors, colors outside
/// every rule range and states a rule leaves unhandled all resolve to opaque
/// white instead of an error.
pub const FALLBACK_COLOR: &str = "#FFFFFFFF";

/// Hover/active/brightness variants of one base color
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StateColors {
    pub hover: String,
    pub active: String,
    pub brightness: String,
}

impl StateColors {
    pub fn fallback() -> Self {
        Self {
            hover: FALLBACK_COLOR.to_string(),
            active: FALLBACK_COLOR.to_string(),
            brightness: FALLBACK_COLOR.to_string(),
        }
    }

    pub fn get(&self, state: ColorState) -> &str {
        match state {
            ColorState::Hover => &self.hover,
            ColorState::Active => &self.active,
            ColorState::Brightness => &self.brightness,
        }
    }

    pub fn is_fallback(&self) -> bool {
        ColorState::ALL.iter().all(|&s| self.get(s) == FALLBACK_COLOR)
    }
}

enum Channel {
    Lightness,
    Alpha,
}

/// Apply one transform; a missing transform or a zero/non-finite result
/// yields the fallback.
fn apply(base: Hsla, transform: Option<Transform>, channel: &Channel) -> String {
    let Some(transform) = transform else {
        return FALLBACK_COLOR.to_string();
    };

    let input = match channel {
        Channel::Lightness => base.l,
        Channel::Alpha => base.a,
    };
    let output = transform(input);
    if !output.is_finite() || output == 0.0 {
        return FALLBACK_COLOR.to_string();
    }

    let hsla = match channel {
        Channel::Lightness => Hsla { l: output, ..base },
        Channel::Alpha => Hsla { a: output, ..base },
    };
    Color::from_hsla(hsla).to_hex8()
}

fn derive(base: Hsla, states: &StateTransforms, channel: Channel) -> StateColors {
    StateColors {
        hover: apply(base, states.get(ColorState::Hover), &channel),
        active: apply(base, states.get(ColorState::Active), &channel),
        brightness: apply(base, states.get(ColorState::Brightness), &channel),
    }
}

/// Compute the state variants of `color` for a formula category and mode.
///
/// Opaque colors are matched on lightness/hue/saturation and transformed on
/// lightness; translucent colors are matched and transformed on alpha. The
/// first rule in declaration order wins.
pub fn get_state_color(color: &str, category: FormulaCategory, mode: ThemeMode) -> StateColors {
    let Ok(parsed) = Color::from_hex_str(color) else {
        tracing::debug!("cannot derive states from unparseable color `{}`", color);
        return StateColors::fallback();
    };
    get_state_color_for(parsed, category, mode)
}

/// [`get_state_color`] for an already parsed color
pub fn get_state_color_for(color: Color, category: FormulaCategory, mode: ThemeMode) -> StateColors {
    let Some(table) = formula_table(category, mode) else {
        return StateColors::fallback();
    };

    let hsla = color.to_hsla();
    if hsla.a < 1.0 {
        match table.find_transparent(hsla.a) {
            Some(rule) => derive(hsla, &rule.states, Channel::Alpha),
            None => {
                tracing::debug!(alpha = hsla.a, ?category, %mode, "no transparent formula matched");
                StateColors::fallback()
            }
        }
    } else {
        match table.find_solid(hsla.l, hsla.h, hsla.s) {
            Some(rule) => derive(hsla, &rule.states, Channel::Lightness),
            None => {
                tracing::debug!(
                    l = hsla.l,
                    h = hsla.h,
                    s = hsla.s,
                    ?category,
                    %mode,
                    "no solid formula matched"
                );
                StateColors::fallback()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lightness(hex: &str) -> f32 {
        Color::from_hex_str(hex).unwrap().to_hsla().l
    }

    #[test]
    fn dark_surface_hover_lightens() {
        // #112233 has lightness ~13.3, inside the first dark surface rule.
        let states = get_state_color("#112233", FormulaCategory::Surface, ThemeMode::Dark);
        assert!(!states.is_fallback());
        let base = lightness("#112233");
        assert!((lightness(&states.hover) - (base + 4.0)).abs() < 0.5);
        assert!((lightness(&states.active) - (base + 2.0)).abs() < 0.5);
        assert!((lightness(&states.brightness) - (base + 8.0)).abs() < 0.5);
    }

    #[test]
    fn unhandled_state_falls_back() {
        let states = get_state_color("#333333", FormulaCategory::Text, ThemeMode::Dark);
        assert_ne!(states.hover, FALLBACK_COLOR);
        assert_eq!(states.brightness, FALLBACK_COLOR);
    }

    #[test]
    fn unparseable_color_falls_back() {
        let states = get_state_color("[general.blue.500]", FormulaCategory::Text, ThemeMode::Dark);
        assert!(states.is_fallback());
    }

    #[test]
    fn near_white_on_dark_surface_falls_back() {
        let states = get_state_color("#FFFFFF", FormulaCategory::Surface, ThemeMode::Dark);
        assert!(states.is_fallback());
    }

    #[test]
    fn transparent_colors_shift_alpha() {
        // alpha 0x33 = 0.2 → first dark surface transparent rule, hover +0.04
        let states = get_state_color("#00000033", FormulaCategory::Surface, ThemeMode::Dark);
        let hover = Color::from_hex_str(&states.hover).unwrap();
        assert!((hover.a - 0.24).abs() < 0.01);
        assert_eq!(&states.hover[..7], "#000000");
    }

    #[test]
    fn zero_result_is_treated_as_unhandled() {
        let base = Hsla {
            h: 120.0,
            s: 40.0,
            l: 8.0,
            a: 1.0,
        };
        assert_eq!(apply(base, Some(|l| l - 8.0), &Channel::Lightness), FALLBACK_COLOR);
        assert_ne!(apply(base, Some(|l| l - 4.0), &Channel::Lightness), FALLBACK_COLOR);
        assert_eq!(apply(base, None, &Channel::Alpha), FALLBACK_COLOR);
    }
}
