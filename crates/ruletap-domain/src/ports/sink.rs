//! Telemetry Sink Domain Port
//!
//! Optional external analytics destination the emit layer forwards events
//! to. Failures are reported through `Result` and swallowed by the caller;
//! a sink can never influence the validation result being observed.

use std::sync::Arc;

use crate::entities::RuleEvent;
use crate::error::Result;

/// Destination for fired rule events beyond the in-memory store
pub trait TelemetrySink: Send + Sync {
    /// Short name used in logs
    fn name(&self) -> &str;

    /// Forward one event
    fn forward(&self, event: &RuleEvent) -> Result<()>;
}

/// Shared telemetry sink for wiring
pub type SharedTelemetrySink = Arc<dyn TelemetrySink>;
