//! Rules Audit / Telemetry for ruletap
//!
//! Read-only observability over a validation engine:
//! - a canonical registry of every rule the engine can fire
//! - a bounded telemetry buffer of fired rule events
//! - an emit layer that taps validation results without touching them
//! - a reconciliation engine that marks each rule fired, passed or not evaluated
//! - observer adapters for UI consumers
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use ruletap_audit::{AuditEngine, EmitLayer, RuleRegistry, SnapshotStore, TelemetryStore};
//! use ruletap_audit::rules::DiscoveredRuleRegistry;
//! use ruletap_domain::{CapturedMessage, EmitContext, ValidationResult};
//!
//! let registry = Arc::new(RuleRegistry::standard());
//! let telemetry = Arc::new(TelemetryStore::new());
//! let snapshots = Arc::new(SnapshotStore::new());
//! let emit = EmitLayer::new(
//!     Arc::clone(&telemetry),
//!     Arc::clone(&snapshots),
//!     Arc::clone(&registry),
//!     Arc::new(DiscoveredRuleRegistry::new()),
//! );
//! let engine = AuditEngine::new(registry, snapshots);
//!
//! let result = ValidationResult::new(
//!     vec![CapturedMessage::error("belt_speed_fpm", "Belt speed must be greater than 0")],
//!     vec![],
//! );
//! let same = emit.wrap_validation_result(&result, &EmitContext::new("validate_inputs"));
//! assert!(std::ptr::eq(same, &result));
//! assert_eq!(engine.report().summary.fired, 1);
//! ```

pub mod emit;
pub mod engine;
pub mod listeners;
pub mod matching;
pub mod observers;
pub mod report;
pub mod reporter;
pub mod rules;
pub mod snapshot;
pub mod telemetry;

pub use emit::{EmitLayer, generate_rule_id, sanitize};
pub use engine::{AuditEngine, reconcile};
pub use listeners::{ListenerSet, Subscription};
pub use matching::{keyword_overlap, match_score};
pub use observers::{AuditObserver, AuditState, AuditView, TelemetryObserver, TelemetryView};
pub use report::{AuditEntry, AuditReport, AuditStatus, AuditSummary, CategoryGroup};
pub use reporter::Reporter;
pub use rules::{DiscoveredRuleRegistry, RuleRegistry, YamlRuleLoader};
pub use snapshot::{AuditSnapshot, SnapshotChange, SnapshotState, SnapshotStore};
pub use telemetry::{TelemetryChange, TelemetryStore};
