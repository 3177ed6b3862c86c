//! # ruletap
//!
//! Rule telemetry and audit reconciliation for a validation engine.
//!
//! A transparent tap records every error and warning a validation run
//! produces, keeps a bounded event log, and reconciles the latest run
//! against a registry of known rules so every rule reads as fired, passed
//! or not evaluated.
//!
//! ## Example
//!
//! ```ignore
//! use ruletap::infrastructure::{AppConfig, AuditRuntime};
//! use ruletap::{CapturedMessage, EmitContext, ValidationResult};
//!
//! let runtime = AuditRuntime::from_config(AppConfig::default())?;
//! let result = ValidationResult::new(
//!     vec![CapturedMessage::error("conveyor_length_cc_in", "Conveyor Length (C-C) must be greater than 0")],
//!     vec![],
//! );
//! let report = runtime.record_run(&result, &EmitContext::new("validate_inputs"));
//! assert_eq!(report.summary.fired, 1);
//! ```
//!
//! ## Architecture
//!
//! - `domain` - rule definitions, captured messages, events, errors and ports
//! - `audit` - registry, telemetry store, snapshot store, emit layer, engine
//! - `infrastructure` - configuration, logging, sinks and runtime wiring
//! - `commands` - what the `ruletap` binary does, as plain functions

pub mod commands;

/// Domain layer - core types
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use ruletap_domain::*;
}

/// Audit core - registry, stores, engine and emit layer
///
/// Re-exports from the audit crate for convenience
pub mod audit {
    pub use ruletap_audit::*;
}

/// Infrastructure layer - config, logging, sinks and runtime
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use ruletap_infrastructure::*;
}

// Re-export commonly used domain types at the crate root
pub use domain::*;

// Re-export the main entry points at the crate root
pub use audit::{AuditReport, EmitLayer, Reporter};
pub use infrastructure::AuditRuntime;
