//! Top-level application configuration

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::logging::LoggingConfig;
use super::telemetry::TelemetryConfig;

/// Main application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Telemetry capture
    pub telemetry: TelemetryConfig,
    /// Rule registry source
    pub audit: AuditConfig,
    /// UI feature flags
    pub ui: UiConfig,
    /// Logging
    pub logging: LoggingConfig,
}

/// Where the rule registry comes from
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuditConfig {
    /// YAML rule dataset; the built-in catalogue is used when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registry_path: Option<PathBuf>,
}

/// UI feature flags
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Show the rules audit panel
    pub audit_panel: bool,
}
