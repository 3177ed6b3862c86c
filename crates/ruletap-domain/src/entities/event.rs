//! Telemetry entities: fired rule events and auto-discovered rules

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::value_objects::Severity;

/// A single fired error/warning, as recorded by the telemetry store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleEvent {
    /// Unique per emission
    pub event_id: Uuid,
    /// Registry id when known, otherwise a generated `auto.*` id
    pub rule_id: String,
    pub severity: Severity,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_key: Option<String>,
    pub timestamp: DateTime<Utc>,
    /// Field names available when validation ran
    #[serde(default)]
    pub inputs_present: Vec<String>,
    /// Validation function / module that produced the message
    pub source_ref: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl RuleEvent {
    /// Create an event stamped now, with a fresh id
    pub fn new(
        rule_id: impl Into<String>,
        severity: Severity,
        message: impl Into<String>,
        source_ref: impl Into<String>,
    ) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            rule_id: rule_id.into(),
            severity,
            message: message.into(),
            product_key: None,
            timestamp: Utc::now(),
            inputs_present: Vec::new(),
            source_ref: source_ref.into(),
            field: None,
        }
    }

    pub fn with_field(mut self, field: Option<String>) -> Self {
        self.field = field;
        self
    }

    pub fn with_product_key(mut self, product_key: Option<String>) -> Self {
        self.product_key = product_key;
        self
    }

    pub fn with_inputs_present(mut self, inputs_present: Vec<String>) -> Self {
        self.inputs_present = inputs_present;
        self
    }
}

/// Bookkeeping entry for a rule seen in telemetry but absent from the registry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscoveredRule {
    pub rule_id: String,
    pub source_ref: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    pub severity: Severity,
    /// First message text that produced this id
    pub sample_message: String,
    pub first_seen: DateTime<Utc>,
}
