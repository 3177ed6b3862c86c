//! Telemetry Sink Adapters
//!
//! Implementations of the [`TelemetrySink`] port, selected by
//! `telemetry.sink` in configuration.

use std::sync::Arc;

use ruletap_domain::error::Result;
use ruletap_domain::{RuleEvent, SharedTelemetrySink, TelemetrySink};

use crate::config::SinkKind;
use crate::constants::TELEMETRY_TRACING_TARGET;

// ============================================================================
// Null Sink
// ============================================================================

/// Sink that discards every event
#[derive(Debug, Clone, Copy, Default)]
pub struct NullTelemetrySink;

impl NullTelemetrySink {
    pub fn new() -> Self {
        Self
    }
}

impl TelemetrySink for NullTelemetrySink {
    fn name(&self) -> &str {
        "none"
    }

    fn forward(&self, _event: &RuleEvent) -> Result<()> {
        Ok(())
    }
}

// ============================================================================
// Tracing Sink
// ============================================================================

/// Sink that emits each event as a structured `tracing` record
///
/// Records go to target `ruletap::telemetry` at INFO, so they can be routed
/// or filtered independently (`RULETAP_LOG=ruletap::telemetry=info`).
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingTelemetrySink;

impl TracingTelemetrySink {
    pub fn new() -> Self {
        Self
    }
}

impl TelemetrySink for TracingTelemetrySink {
    fn name(&self) -> &str {
        "tracing"
    }

    fn forward(&self, event: &RuleEvent) -> Result<()> {
        tracing::info!(
            target: TELEMETRY_TRACING_TARGET,
            event_id = %event.event_id,
            rule_id = %event.rule_id,
            severity = event.severity.as_str(),
            field = event.field.as_deref().unwrap_or(""),
            product_key = event.product_key.as_deref().unwrap_or(""),
            source_ref = %event.source_ref,
            inputs_present = event.inputs_present.len(),
            timestamp = %event.timestamp.to_rfc3339(),
            "{}",
            event.message
        );
        Ok(())
    }
}

/// Build the sink named by configuration
pub fn create_sink(kind: SinkKind) -> SharedTelemetrySink {
    match kind {
        SinkKind::None => Arc::new(NullTelemetrySink::new()),
        SinkKind::Tracing => Arc::new(TracingTelemetrySink::new()),
    }
}
