use indexmap::IndexMap;
use std::path::PathBuf;
use std::process::Command;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures").join(name)
}

fn plasma(args: &[&str]) -> String {
    let output = Command::new(env!("CARGO_BIN_EXE_plasma"))
        .current_dir(env!("CARGO_MANIFEST_DIR"))
        .args(args)
        .output()
        .expect("failed to run plasma");
    assert!(
        output.status.success(),
        "plasma {args:?} failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).expect("stdout is utf-8")
}

fn plasma_json(args: &[&str]) -> IndexMap<String, String> {
    let mut args = args.to_vec();
    args.extend(["--format", "json"]);
    serde_json::from_str(&plasma(&args)).expect("valid json output")
}

#[test]
fn theme_vars_as_css() {
    let meta = fixture("theme_meta.json");
    let variations = fixture("theme_variations.json");
    let palette = fixture("palette.json");

    let css = plasma(&[
        "theme-vars",
        "--meta",
        meta.to_str().unwrap(),
        "--variations",
        variations.to_str().unwrap(),
        "--palette",
        palette.to_str().unwrap(),
    ]);

    assert!(css.starts_with(":root {\n"));
    assert!(css.contains("  --surface-accent: #3F81FD;\n"));
    assert!(css.contains("  --text-primary: #FFFFFFF5;\n"));
    assert!(css.contains("  --plasma-typo-body-m-bold-font-family: SB Sans Text;\n"));
    assert!(css.ends_with("}\n"));
}

#[test]
fn theme_vars_for_light_mode() {
    let meta = fixture("theme_meta.json");
    let variations = fixture("theme_variations.json");
    let palette = fixture("palette.json");

    let vars = plasma_json(&[
        "theme-vars",
        "--meta",
        meta.to_str().unwrap(),
        "--variations",
        variations.to_str().unwrap(),
        "--palette",
        palette.to_str().unwrap(),
        "--mode",
        "light",
    ]);

    assert_eq!(vars["--surface-accent"], "#1A6CE5");
    assert_eq!(vars["--inverse-surface-accent"], "#3F81FD");
    assert_eq!(vars["--round-m"], "0.75rem");
    assert!(!vars.contains_key("--plasma-typo-body-m-bold-font-size"));
}

#[test]
fn component_vars_with_default_styles() {
    let component = fixture("button_meta.json");
    let config = fixture("button_config.json");
    let meta = fixture("theme_meta.json");
    let variations = fixture("theme_variations.json");
    let palette = fixture("palette.json");

    let vars = plasma_json(&[
        "component-vars",
        "--component",
        component.to_str().unwrap(),
        "--config",
        config.to_str().unwrap(),
        "--meta",
        meta.to_str().unwrap(),
        "--variations",
        variations.to_str().unwrap(),
        "--palette",
        palette.to_str().unwrap(),
    ]);

    assert_eq!(vars["--plasma-button-height"], "3rem");
    assert_eq!(vars["--plasma-button-radius"], "0.75rem");
    assert_eq!(vars["--plasma-button-font-family"], "SB Sans Text");
    assert_eq!(vars["--plasma-button-font-size"], "1rem");
    assert_eq!(vars["--plasma-button-background-color"], "#3F81FD");
    assert!(vars["--plasma-button-background-color-hover"].starts_with('#'));
    assert_eq!(vars["--plasma-button-color"], "#FFFFFFF5");
}

#[test]
fn component_vars_with_selected_styles_and_no_theme() {
    let component = fixture("button_meta.json");
    let config = fixture("button_config.json");

    let vars = plasma_json(&[
        "component-vars",
        "--component",
        component.to_str().unwrap(),
        "--config",
        config.to_str().unwrap(),
        "--select",
        "size=s",
    ]);

    assert_eq!(vars["--plasma-button-height"], "2.5rem");
    assert_eq!(vars["--plasma-button-color"], "var(--text-primary)");
    assert!(!vars.contains_key("--plasma-button-background-color"));
}

#[test]
fn config_file_supplies_inputs_and_format() {
    let dir = fixture("");
    let output = plasma(&["--config-file", dir.to_str().unwrap(), "theme-vars"]);

    let vars: IndexMap<String, String> = serde_json::from_str(&output).unwrap();
    assert_eq!(vars["--surface-accent"], "#1A6CE5");
    assert_eq!(vars["--text-primary"], "#080808");
}

#[test]
fn unknown_style_fails() {
    let component = fixture("button_meta.json");
    let config = fixture("button_config.json");

    let status = Command::new(env!("CARGO_BIN_EXE_plasma"))
        .current_dir(env!("CARGO_MANIFEST_DIR"))
        .args([
            "component-vars",
            "--component",
            component.to_str().unwrap(),
            "--config",
            config.to_str().unwrap(),
            "--select",
            "size=xxl",
        ])
        .status()
        .expect("failed to run plasma");
    assert!(!status.success());
}
