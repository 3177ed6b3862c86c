//! Audit Runtime - composition root
//!
//! Builds one instance of every audit component from [`AppConfig`] and
//! shares it through `Arc`s. Nothing in the audit core is global; callers
//! that need the telemetry store, the engine or the emit layer get them
//! from here.
//!
//! ```text
//! AppConfig → RuleRegistry (built-in | YAML)
//!           → TelemetryStore (capacity, enabled) ─┐
//!           → SnapshotStore ──────────────────────┼→ EmitLayer (+ sink)
//!           → DiscoveredRuleRegistry ─────────────┘
//!             RuleRegistry + SnapshotStore → AuditEngine
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! let runtime = AuditRuntime::from_config(ConfigLoader::new().load()?)?;
//! let result = runtime.emit().wrap_validation_result(&result, &context);
//! let report = runtime.engine().report();
//! ```

use std::sync::Arc;

use ruletap_audit::{
    AuditEngine, AuditObserver, AuditReport, DiscoveredRuleRegistry, EmitLayer, RuleRegistry,
    SnapshotStore, TelemetryObserver, TelemetryStore,
};
use ruletap_domain::error::Result;
use ruletap_domain::{EmitContext, ValidationResult};
use tracing::info;

use crate::config::AppConfig;
use crate::config::loader::validate_app_config;
use crate::sinks::create_sink;

/// Wired audit components for one process
pub struct AuditRuntime {
    config: Arc<AppConfig>,
    registry: Arc<RuleRegistry>,
    telemetry: Arc<TelemetryStore>,
    snapshots: Arc<SnapshotStore>,
    discovered: Arc<DiscoveredRuleRegistry>,
    engine: Arc<AuditEngine>,
    emit: EmitLayer,
}

impl AuditRuntime {
    /// Build every component from `config`
    pub fn from_config(config: AppConfig) -> Result<Self> {
        validate_app_config(&config)?;

        let registry = Arc::new(match &config.audit.registry_path {
            Some(path) => RuleRegistry::from_yaml_file(path)?,
            None => RuleRegistry::standard(),
        });
        Ok(Self::with_registry(config, registry))
    }

    /// Build around an already loaded registry
    pub fn with_registry(config: AppConfig, registry: Arc<RuleRegistry>) -> Self {
        let telemetry = Arc::new(TelemetryStore::with_capacity(
            config.telemetry.buffer_capacity,
            config.telemetry.enabled,
        ));
        let snapshots = Arc::new(SnapshotStore::new());
        let discovered = Arc::new(DiscoveredRuleRegistry::new());
        let engine = Arc::new(AuditEngine::new(
            Arc::clone(&registry),
            Arc::clone(&snapshots),
        ));
        let sink = create_sink(config.telemetry.sink);
        let emit = EmitLayer::new(
            Arc::clone(&telemetry),
            Arc::clone(&snapshots),
            Arc::clone(&registry),
            Arc::clone(&discovered),
        )
        .with_sink(sink);

        info!(
            rules = registry.count(),
            telemetry_enabled = telemetry.is_enabled(),
            buffer_capacity = telemetry.capacity(),
            sink = ?config.telemetry.sink,
            "Audit runtime initialized"
        );

        Self {
            config: Arc::new(config),
            registry,
            telemetry,
            snapshots,
            discovered,
            engine,
            emit,
        }
    }

    /// Push one validation run through the emit layer and return the resulting report
    ///
    /// When telemetry is disabled the run is not captured and the report
    /// reflects whatever snapshot was there before.
    pub fn record_run(
        &self,
        result: &ValidationResult,
        context: &EmitContext,
    ) -> Arc<AuditReport> {
        self.emit.wrap_validation_result(result, context);
        self.engine.report()
    }

    /// Whether the audit panel should be shown at all
    pub fn audit_ui_visible(&self) -> bool {
        self.config.ui.audit_panel
    }

    pub fn telemetry_observer(&self) -> TelemetryObserver {
        TelemetryObserver::new(Arc::clone(&self.telemetry))
    }

    pub fn audit_observer(&self) -> AuditObserver {
        AuditObserver::new(Arc::clone(&self.engine), Arc::clone(&self.telemetry))
    }

    pub fn config(&self) -> &Arc<AppConfig> {
        &self.config
    }

    pub fn registry(&self) -> &Arc<RuleRegistry> {
        &self.registry
    }

    pub fn telemetry(&self) -> &Arc<TelemetryStore> {
        &self.telemetry
    }

    pub fn snapshots(&self) -> &Arc<SnapshotStore> {
        &self.snapshots
    }

    pub fn discovered(&self) -> &Arc<DiscoveredRuleRegistry> {
        &self.discovered
    }

    pub fn engine(&self) -> &Arc<AuditEngine> {
        &self.engine
    }

    pub fn emit(&self) -> &EmitLayer {
        &self.emit
    }
}

impl std::fmt::Debug for AuditRuntime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuditRuntime")
            .field("rules", &self.registry.count())
            .field("emit", &self.emit)
            .field("audit_ui_visible", &self.audit_ui_visible())
            .finish_non_exhaustive()
    }
}
