//! Audit snapshot store
//!
//! Holds the errors/warnings of the most recent validation run. A capture
//! replaces the previous snapshot wholesale; nothing is ever patched in
//! place. Every capture or clear bumps a generation counter that the
//! reconciliation engine keys its cache on.

use std::sync::Arc;

use arc_swap::ArcSwap;
use chrono::{DateTime, Utc};
use serde::Serialize;

use ruletap_domain::{CapturedMessage, ValidationResult};

use crate::listeners::{ListenerSet, Subscription};

/// Complete output of one validation run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuditSnapshot {
    pub errors: Vec<CapturedMessage>,
    pub warnings: Vec<CapturedMessage>,
    pub product_key: Option<String>,
    pub captured_at: DateTime<Utc>,
}

impl AuditSnapshot {
    /// Errors first, then warnings, each in original order
    pub fn pool(&self) -> impl Iterator<Item = &CapturedMessage> {
        self.errors.iter().chain(self.warnings.iter())
    }

    pub fn message_count(&self) -> usize {
        self.errors.len() + self.warnings.len()
    }
}

/// Snapshot state as seen by one reader
#[derive(Debug, Clone, Default)]
pub struct SnapshotState {
    /// Incremented on every capture and clear
    pub generation: u64,
    pub snapshot: Option<Arc<AuditSnapshot>>,
}

/// What changed in the snapshot store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotChange {
    Captured { generation: u64 },
    Cleared { generation: u64 },
}

/// Single-slot holder for the latest snapshot
#[derive(Debug)]
pub struct SnapshotStore {
    state: ArcSwap<SnapshotState>,
    listeners: ListenerSet<SnapshotChange>,
}

impl SnapshotStore {
    pub fn new() -> Self {
        Self {
            state: ArcSwap::from_pointee(SnapshotState::default()),
            listeners: ListenerSet::new(),
        }
    }

    /// Replace the current snapshot with a copy of `errors` and `warnings`
    pub fn capture_validation_snapshot(
        &self,
        errors: &[CapturedMessage],
        warnings: &[CapturedMessage],
        product_key: Option<&str>,
    ) -> Arc<AuditSnapshot> {
        let snapshot = Arc::new(AuditSnapshot {
            errors: errors.to_vec(),
            warnings: warnings.to_vec(),
            product_key: product_key.map(str::to_owned),
            captured_at: Utc::now(),
        });
        let generation = self.swap(Some(Arc::clone(&snapshot)));
        tracing::debug!(
            generation,
            errors = snapshot.errors.len(),
            warnings = snapshot.warnings.len(),
            product_key = snapshot.product_key.as_deref().unwrap_or(""),
            "Captured validation snapshot"
        );
        self.listeners.notify(&SnapshotChange::Captured { generation });
        snapshot
    }

    /// Capture a whole [`ValidationResult`]
    pub fn capture_result(
        &self,
        result: &ValidationResult,
        product_key: Option<&str>,
    ) -> Arc<AuditSnapshot> {
        self.capture_validation_snapshot(&result.errors, &result.warnings, product_key)
    }

    /// Drop the current snapshot
    pub fn clear(&self) {
        let generation = self.swap(None);
        self.listeners.notify(&SnapshotChange::Cleared { generation });
    }

    fn swap(&self, snapshot: Option<Arc<AuditSnapshot>>) -> u64 {
        let mut generation = 0;
        self.state.rcu(|current| {
            generation = current.generation + 1;
            SnapshotState {
                generation,
                snapshot: snapshot.clone(),
            }
        });
        generation
    }

    /// Current snapshot and its generation, read atomically
    pub fn state(&self) -> Arc<SnapshotState> {
        self.state.load_full()
    }

    pub fn current(&self) -> Option<Arc<AuditSnapshot>> {
        self.state.load().snapshot.clone()
    }

    pub fn generation(&self) -> u64 {
        self.state.load().generation
    }

    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&SnapshotChange) + Send + Sync + 'static,
    {
        self.listeners.subscribe(listener)
    }
}

impl Default for SnapshotStore {
    fn default() -> Self {
        Self::new()
    }
}
