//! Environment variable configuration tests
//!
//! These tests modify environment variables and must run sequentially:
//!
//! ```bash
//! cargo test -p ruletap-infrastructure --test unit config_env -- --test-threads=1 --ignored
//! ```
//!
//! # Safety
//!
//! Tests use `unsafe` blocks for `env::set_var`/`env::remove_var` because
//! Rust 2024 edition requires this for environment variable mutations.

use std::env;

use ruletap_infrastructure::config::{ConfigLoader, SinkKind};
use tempfile::TempDir;

fn set_env(key: &str, value: &str) {
    // SAFETY: Tests must run with --test-threads=1
    unsafe {
        env::set_var(key, value);
    }
}

fn remove_env(key: &str) {
    // SAFETY: Tests must run with --test-threads=1
    unsafe {
        env::remove_var(key);
    }
}

/// Loader pointed at a file that does not exist, so only defaults and env apply
fn isolated_loader(temp: &TempDir) -> ConfigLoader {
    ConfigLoader::new().with_config_path(temp.path().join("none.toml"))
}

#[test]
#[ignore = "requires --test-threads=1 due to env var mutations"]
fn test_nested_env_vars_loaded() {
    let temp = TempDir::new().unwrap();
    set_env("RULETAP__TELEMETRY__ENABLED", "false");
    set_env("RULETAP__TELEMETRY__SINK", "tracing");
    set_env("RULETAP__UI__AUDIT_PANEL", "true");

    let config = isolated_loader(&temp).load().expect("Should load config");
    assert!(!config.telemetry.enabled);
    assert_eq!(config.telemetry.sink, SinkKind::Tracing);
    assert!(config.ui.audit_panel);

    remove_env("RULETAP__TELEMETRY__ENABLED");
    remove_env("RULETAP__TELEMETRY__SINK");
    remove_env("RULETAP__UI__AUDIT_PANEL");
}

#[test]
#[ignore = "requires --test-threads=1 due to env var mutations"]
fn test_single_underscore_prefix_ignored() {
    let temp = TempDir::new().unwrap();
    set_env("RULETAP_TELEMETRY_BUFFER_CAPACITY", "3");

    let config = isolated_loader(&temp).load().expect("Should load config");
    assert_eq!(config.telemetry.buffer_capacity, 200);

    remove_env("RULETAP_TELEMETRY_BUFFER_CAPACITY");
}

#[test]
#[ignore = "requires --test-threads=1 due to env var mutations"]
fn test_env_overrides_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("ruletap.toml");
    std::fs::write(&path, "[telemetry]\nbuffer_capacity = 50\n").unwrap();
    set_env("RULETAP__TELEMETRY__BUFFER_CAPACITY", "7");

    let config = ConfigLoader::new().with_config_path(&path).load().unwrap();
    assert_eq!(config.telemetry.buffer_capacity, 7);

    remove_env("RULETAP__TELEMETRY__BUFFER_CAPACITY");
}
