//! Configuration loading tests

use std::fs;

use ruletap_domain::Error;
use ruletap_infrastructure::config::{AppConfig, ConfigLoader, SinkKind};
use ruletap_infrastructure::constants::DEFAULT_LOG_LEVEL;
use tempfile::TempDir;

#[test]
fn test_defaults() {
    let config = AppConfig::default();
    assert!(config.telemetry.enabled);
    assert_eq!(config.telemetry.buffer_capacity, 200);
    assert_eq!(config.telemetry.sink, SinkKind::None);
    assert!(config.audit.registry_path.is_none());
    assert!(!config.ui.audit_panel);
    assert_eq!(config.logging.level, DEFAULT_LOG_LEVEL);
}

#[test]
fn test_toml_file_overrides_defaults() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("ruletap.toml");
    fs::write(
        &path,
        r#"
[telemetry]
enabled = false
buffer_capacity = 50
sink = "tracing"

[ui]
audit_panel = true
"#,
    )
    .unwrap();

    let config = ConfigLoader::new().with_config_path(&path).load().unwrap();
    assert!(!config.telemetry.enabled);
    assert_eq!(config.telemetry.buffer_capacity, 50);
    assert_eq!(config.telemetry.sink, SinkKind::Tracing);
    assert!(config.ui.audit_panel);
    // untouched sections keep their defaults
    assert_eq!(config.logging.level, DEFAULT_LOG_LEVEL);
}

#[test]
fn test_missing_explicit_file_falls_back_to_defaults() {
    let temp = TempDir::new().unwrap();
    let loader = ConfigLoader::new().with_config_path(temp.path().join("absent.toml"));
    let config = loader.load().unwrap();
    assert_eq!(config.telemetry.buffer_capacity, 200);
}

#[test]
fn test_zero_capacity_rejected() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("ruletap.toml");
    fs::write(&path, "[telemetry]\nbuffer_capacity = 0\n").unwrap();

    let result = ConfigLoader::new().with_config_path(&path).load();
    assert!(matches!(result, Err(Error::Configuration { .. })));
}

#[test]
fn test_invalid_log_level_rejected() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("ruletap.toml");
    fs::write(&path, "[logging]\nlevel = \"loud\"\n").unwrap();

    assert!(ConfigLoader::new().with_config_path(&path).load().is_err());
}

#[test]
fn test_missing_registry_file_rejected() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("ruletap.toml");
    fs::write(&path, "[audit]\nregistry_path = \"/nonexistent/rules.yaml\"\n").unwrap();

    let result = ConfigLoader::new().with_config_path(&path).load();
    assert!(matches!(result, Err(Error::Configuration { message, .. }) if message.contains("rules.yaml")));
}

#[test]
fn test_unknown_sink_is_configuration_error() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("ruletap.toml");
    fs::write(&path, "[telemetry]\nsink = \"kafka\"\n").unwrap();

    let result = ConfigLoader::new().with_config_path(&path).load();
    assert!(matches!(result, Err(Error::Configuration { .. })));
}

#[test]
fn test_save_and_reload() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("saved.toml");
    let mut config = AppConfig::default();
    config.telemetry.buffer_capacity = 10;
    config.ui.audit_panel = true;

    let loader = ConfigLoader::new().with_config_path(&path);
    loader.save_to_file(&config, &path).unwrap();
    assert_eq!(loader.load().unwrap(), config);
    assert_eq!(loader.config_path(), Some(path.as_path()));
}
