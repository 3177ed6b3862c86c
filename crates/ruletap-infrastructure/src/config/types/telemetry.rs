//! Telemetry configuration types

use serde::{Deserialize, Serialize};

use ruletap_domain::constants::TELEMETRY_BUFFER_CAPACITY;

/// Telemetry store and sink configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TelemetryConfig {
    /// Capture enabled at startup
    pub enabled: bool,
    /// Maximum number of retained events
    pub buffer_capacity: usize,
    /// External sink events are forwarded to
    pub sink: SinkKind,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            buffer_capacity: TELEMETRY_BUFFER_CAPACITY,
            sink: SinkKind::default(),
        }
    }
}

/// Available telemetry sinks
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SinkKind {
    /// Discard events
    #[default]
    None,
    /// Emit events as structured tracing records
    Tracing,
}
