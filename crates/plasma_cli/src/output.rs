//! Rendering resolved variables

use crate::config::OutputFormat;
use anyhow::{Context, Result};
use indexmap::IndexMap;
use std::fmt::Write;

pub fn render(vars: &IndexMap<String, String>, format: OutputFormat, selector: &str) -> Result<String> {
    match format {
        OutputFormat::Css => Ok(css_block(vars, selector)),
        OutputFormat::Json => serde_json::to_string_pretty(vars).context("Failed to serialize variables"),
    }
}

/// `selector { --name: value; ... }`
fn css_block(vars: &IndexMap<String, String>, selector: &str) -> String {
    let mut out = format!("{selector} {{\n");
    for (name, value) in vars {
        let _ = writeln!(out, "  {name}: {value};");
    }
    out.push_str("}\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn vars() -> IndexMap<String, String> {
        IndexMap::from([
            ("--plasma-button-height".to_string(), "3rem".to_string()),
            ("--plasma-button-color".to_string(), "#FFFFFF".to_string()),
        ])
    }

    #[test]
    fn css_keeps_insertion_order() {
        assert_eq!(
            render(&vars(), OutputFormat::Css, ":root").unwrap(),
            ":root {\n  --plasma-button-height: 3rem;\n  --plasma-button-color: #FFFFFF;\n}\n"
        );
    }

    #[test]
    fn json_is_an_object() {
        let json = render(&vars(), OutputFormat::Json, ":root").unwrap();
        let back: IndexMap<String, String> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, vars());
    }
}
