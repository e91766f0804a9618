use plasma_color::formula::formula_table;
use plasma_color::{
    get_state_color, get_state_color_for, Color, ColorState, FormulaCategory, Hsla, ThemeMode,
    FALLBACK_COLOR,
};

#[test]
fn every_solid_rule_produces_a_real_hover_color() {
    for category in FormulaCategory::ALL {
        for mode in ThemeMode::ALL {
            let table = formula_table(category, mode).unwrap();
            for (idx, rule) in table.solid.iter().enumerate() {
                let sample = Color::from_hsla(Hsla {
                    h: rule.hue.midpoint(),
                    s: rule.saturation.midpoint(),
                    l: rule.lightness.midpoint(),
                    a: 1.0,
                });
                let states = get_state_color_for(sample, category, mode);
                assert_ne!(
                    states.get(ColorState::Hover),
                    FALLBACK_COLOR,
                    "category={category:?} mode={mode:?} rule={idx}"
                );
            }
        }
    }
}

#[test]
fn every_transparent_rule_produces_a_real_hover_color() {
    for category in FormulaCategory::ALL {
        for mode in ThemeMode::ALL {
            let table = formula_table(category, mode).unwrap();
            for (idx, rule) in table.transparent.iter().enumerate() {
                let sample = Color::new(0.2, 0.4, 0.6, rule.alpha.midpoint());
                let states = get_state_color_for(sample, category, mode);
                assert_ne!(
                    states.hover, FALLBACK_COLOR,
                    "category={category:?} mode={mode:?} rule={idx}"
                );
            }
        }
    }
}

#[test]
fn colors_outside_every_range_fall_back() {
    for category in FormulaCategory::ALL {
        let on_dark = get_state_color("#FFFFFF", category, ThemeMode::Dark);
        assert!(on_dark.is_fallback(), "{category:?}/dark");

        let on_light = get_state_color("#000000", category, ThemeMode::Light);
        assert!(on_light.is_fallback(), "{category:?}/light");

        let nearly_opaque = get_state_color_for(Color::new(0.2, 0.4, 0.6, 0.98), category, ThemeMode::Dark);
        assert!(nearly_opaque.is_fallback(), "{category:?}/alpha");
    }
}

#[test]
fn light_mode_surface_hover_darkens_mid_tones() {
    let states = get_state_color("#AABBCC", FormulaCategory::Surface, ThemeMode::Light);
    let base = Color::from_hex_str("#AABBCC").unwrap().to_hsla().l;
    let hover = Color::from_hex_str(&states.hover).unwrap().to_hsla().l;
    assert!((hover - (base - 6.0)).abs() < 0.5, "base={base} hover={hover}");
}
