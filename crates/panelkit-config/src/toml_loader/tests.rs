//! Tests for TOML config loading, creation, and path resolution.

use super::*;
use panelkit_common::ConfigError;
use std::path::Path;

#[test]
fn load_from_nonexistent_returns_file_not_found() {
    let err = load_from_path(Path::new("/tmp/nonexistent_panelkit_config.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::FileNotFound(_)));
}

#[test]
fn load_valid_partial_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[docking]
detach_threshold = 12.0
floating_width = "25vw"

[layout]
tab_width = 96.0
"#,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.docking.detach_threshold, 12.0);
    assert_eq!(config.docking.floating_width, "25vw");
    assert_eq!(config.layout.tab_width, 96.0);
    // Defaults preserved
    assert_eq!(config.docking.tab_strip_margin, 10.0);
    assert_eq!(config.nodes.node_width, 160.0);
}

#[test]
fn load_invalid_toml_returns_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "this is not valid toml {{{").unwrap();

    let err = load_from_path(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError(_)));
}

#[test]
fn out_of_range_values_are_returned_as_parsed() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[docking]
drag_opacity = 3.0
"#,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.docking.drag_opacity, 3.0);
}

#[test]
fn create_and_load_default_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("panelkit").join("config.toml");

    create_default_config(&path).unwrap();
    assert!(path.exists());

    let config = load_from_path(&path).unwrap();
    assert_eq!(config, crate::PanelKitConfig::default());
}

#[test]
fn default_config_toml_parses_to_defaults() {
    use super::template::default_config_toml;

    let config: crate::PanelKitConfig = toml::from_str(default_config_toml()).unwrap();
    assert_eq!(config, crate::PanelKitConfig::default());
}

#[test]
fn default_config_path_is_reasonable() {
    // No config dir in some sandboxes.
    if let Ok(path) = default_config_path() {
        let path_str = path.to_string_lossy();
        assert!(path_str.contains("panelkit"));
        assert!(path_str.ends_with("config.toml"));
    }
}
