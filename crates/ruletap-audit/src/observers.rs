//! Observer adapters
//!
//! Bridges for UI consumers. Each observer subscribes to the stores it
//! reads, bumps a version counter on every change and serves a read-only
//! view. Consumers compare `version()` (or the `Arc` identity of the view)
//! to decide whether to re-render.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

use serde::Serialize;
use uuid::Uuid;

use ruletap_domain::RuleEvent;

use crate::engine::AuditEngine;
use crate::listeners::Subscription;
use crate::report::AuditReport;
use crate::snapshot::AuditSnapshot;
use crate::telemetry::TelemetryStore;

/// Read of the telemetry store at one point in time
#[derive(Debug, Clone, Serialize)]
pub struct TelemetryView {
    /// Newest first
    pub events: Vec<RuleEvent>,
    pub enabled: bool,
    pub session_id: Uuid,
    pub event_count: usize,
}

impl TelemetryView {
    fn read(store: &TelemetryStore) -> Self {
        let (events, enabled, session_id) = store.view_parts();
        Self {
            event_count: events.len(),
            events,
            enabled,
            session_id,
        }
    }
}

/// Keeps a [`TelemetryView`] current while alive
pub struct TelemetryObserver {
    store: Arc<TelemetryStore>,
    view: Arc<RwLock<Arc<TelemetryView>>>,
    version: Arc<AtomicU64>,
    _subscription: Subscription,
}

impl TelemetryObserver {
    pub fn new(store: Arc<TelemetryStore>) -> Self {
        let view = Arc::new(RwLock::new(Arc::new(TelemetryView::read(&store))));
        let version = Arc::new(AtomicU64::new(0));

        let weak_store = Arc::downgrade(&store);
        let listener_view = Arc::clone(&view);
        let listener_version = Arc::clone(&version);
        let subscription = store.subscribe(move |_| {
            let Some(store) = weak_store.upgrade() else {
                return;
            };
            let fresh = Arc::new(TelemetryView::read(&store));
            *listener_view.write().unwrap_or_else(PoisonError::into_inner) = fresh;
            listener_version.fetch_add(1, Ordering::SeqCst);
        });

        Self {
            store,
            view,
            version,
            _subscription: subscription,
        }
    }

    /// Latest view; the same `Arc` until the store changes
    pub fn view(&self) -> Arc<TelemetryView> {
        let view = self.view.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&*view)
    }

    /// Number of changes observed so far
    pub fn version(&self) -> u64 {
        self.version.load(Ordering::SeqCst)
    }

    pub fn clear(&self) {
        self.store.clear_events();
    }

    pub fn set_enabled(&self, enabled: bool) {
        self.store.set_enabled(enabled);
    }
}

impl std::fmt::Debug for TelemetryObserver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TelemetryObserver")
            .field("version", &self.version())
            .finish_non_exhaustive()
    }
}

/// Read of the audit side at one point in time
#[derive(Debug, Clone)]
pub struct AuditView {
    /// `None` whenever telemetry is disabled, regardless of snapshot
    pub report: Option<Arc<AuditReport>>,
    pub snapshot: Option<Arc<AuditSnapshot>>,
    pub enabled: bool,
}

/// What an audit panel should render
#[derive(Debug, Clone)]
pub enum AuditState {
    /// Capture is switched off
    Disabled,
    /// No validation run captured yet
    NoData(Arc<AuditReport>),
    /// A run has been captured and reconciled
    Ready(Arc<AuditReport>),
}

impl AuditView {
    pub fn state(&self) -> AuditState {
        match (&self.report, &self.snapshot) {
            (None, _) => AuditState::Disabled,
            (Some(report), None) => AuditState::NoData(Arc::clone(report)),
            (Some(report), Some(_)) => AuditState::Ready(Arc::clone(report)),
        }
    }
}

/// Tracks snapshot and enablement changes for an audit panel
pub struct AuditObserver {
    engine: Arc<AuditEngine>,
    telemetry: Arc<TelemetryStore>,
    version: Arc<AtomicU64>,
    _snapshot_subscription: Subscription,
    _telemetry_subscription: Subscription,
}

impl AuditObserver {
    pub fn new(engine: Arc<AuditEngine>, telemetry: Arc<TelemetryStore>) -> Self {
        let version = Arc::new(AtomicU64::new(0));

        let on_snapshot = Arc::clone(&version);
        let snapshot_subscription = engine.snapshots().subscribe(move |_| {
            on_snapshot.fetch_add(1, Ordering::SeqCst);
        });

        let on_telemetry = Arc::clone(&version);
        let telemetry_subscription = telemetry.subscribe(move |change| {
            use crate::telemetry::TelemetryChange;
            if matches!(
                change,
                TelemetryChange::EnabledChanged(_) | TelemetryChange::Reset
            ) {
                on_telemetry.fetch_add(1, Ordering::SeqCst);
            }
        });

        Self {
            engine,
            telemetry,
            version,
            _snapshot_subscription: snapshot_subscription,
            _telemetry_subscription: telemetry_subscription,
        }
    }

    /// Current view; the report is served from the engine's cache
    pub fn view(&self) -> AuditView {
        let enabled = self.telemetry.is_enabled();
        AuditView {
            report: enabled.then(|| self.engine.report()),
            snapshot: self.engine.snapshots().current(),
            enabled,
        }
    }

    pub fn version(&self) -> u64 {
        self.version.load(Ordering::SeqCst)
    }

    /// Drop the current snapshot; the report falls back to "not evaluated"
    pub fn clear(&self) {
        self.engine.snapshots().clear();
    }
}

impl std::fmt::Debug for AuditObserver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuditObserver")
            .field("version", &self.version())
            .finish_non_exhaustive()
    }
}
