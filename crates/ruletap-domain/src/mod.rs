//! # ruletap domain
//!
//! Core types shared by the audit engine and its infrastructure:
//!
//! - `entities` - rule definitions, fired rule events, discovered rules
//! - `value_objects` - severity, category, captured messages, run context
//! - `ports` - the telemetry sink contract
//! - `error` - the crate-wide error type
//!
//! Nothing here performs I/O.

pub mod constants;
pub mod entities;
pub mod error;
pub mod ports;
pub mod value_objects;

pub use entities::{DiscoveredRule, RuleDefinition, RuleEvent};
pub use error::{Error, Result};
pub use ports::{SharedTelemetrySink, TelemetrySink};
pub use value_objects::{CapturedMessage, EmitContext, RuleCategory, Severity, ValidationResult};
