//! Integration tests for Settings loading: compiled defaults, TOML
//! overrides, and rejection of tables that cannot validate anything.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use bugz::config::{Settings, SettingsError};

fn write_config(dir: &TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("bugz.toml");
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn given_defaults_when_loaded_then_stock_vocabularies_present() {
    let settings = Settings::load_from(None).unwrap();
    assert!(settings.choices.severity.contains(&"normal".to_string()));
    assert!(settings.choices.priority.contains(&"Normal".to_string()));
    assert!(settings.choices.resolution.contains(&"FIXED".to_string()));
    assert!(settings.choices.status.contains(&"RESOLVED".to_string()));
    assert!(settings.choices.order.contains_key("number"));
}

#[test]
fn given_config_file_when_loaded_then_vocabulary_replaced() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"
[choices]
severity = ["low", "high"]
"#,
    );

    let settings = Settings::load_from(Some(&path)).unwrap();
    assert_eq!(settings.choices.severity, vec!["low", "high"]);
    // untouched vocabularies keep their compiled defaults
    assert!(settings.choices.status.contains(&"NEW".to_string()));
}

#[test]
fn given_emptied_vocabulary_when_loaded_then_configuration_error() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"
[choices]
status = []
"#,
    );

    let err = Settings::load_from(Some(&path)).unwrap_err();
    assert!(matches!(err, SettingsError::Choices(_)));
    assert!(err.to_string().contains("status"));
}

#[test]
fn given_malformed_toml_when_loaded_then_load_error() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "choices = not-a-table");

    let err = Settings::load_from(Some(&path)).unwrap_err();
    assert!(matches!(err, SettingsError::Load(_)));
}

#[test]
fn given_configured_vocabulary_when_validating_then_new_values_accepted() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"
[choices]
severity = ["s1", "s2"]
"#,
    );

    let settings = Settings::load_from(Some(&path)).unwrap();
    settings.choices.ensure_severity("s2").unwrap();
    assert!(settings.choices.ensure_severity("normal").is_err());
}
