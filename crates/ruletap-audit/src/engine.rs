//! Audit Reconciliation Engine
//!
//! Turns the latest snapshot into a fired / passed / not-evaluated status
//! for every registry definition.
//!
//! Definitions are visited in registry order. Each one takes the unclaimed
//! message with the highest [`match_score`](crate::matching::match_score)
//! (earliest in the pool on ties) and claims it, so a message is attributed
//! to at most one definition and earlier definitions have first claim.
//!
//! The built report is cached as an `Arc` keyed on the snapshot generation:
//! reads without an intervening capture or clear return the same `Arc`.

use std::sync::{Arc, Mutex, PoisonError};

use chrono::Utc;

use ruletap_domain::{CapturedMessage, RuleCategory, Severity};

use crate::matching::best_match;
use crate::report::{AuditEntry, AuditReport, AuditStatus, AuditSummary, CategoryGroup};
use crate::rules::RuleRegistry;
use crate::snapshot::{AuditSnapshot, SnapshotStore};

/// Lazily rebuilt, cached audit report over a registry and a snapshot store
#[derive(Debug)]
pub struct AuditEngine {
    registry: Arc<RuleRegistry>,
    snapshots: Arc<SnapshotStore>,
    cache: Mutex<Option<Arc<AuditReport>>>,
}

impl AuditEngine {
    pub fn new(registry: Arc<RuleRegistry>, snapshots: Arc<SnapshotStore>) -> Self {
        Self {
            registry,
            snapshots,
            cache: Mutex::new(None),
        }
    }

    /// Current report, rebuilding only if the snapshot changed
    pub fn report(&self) -> Arc<AuditReport> {
        let state = self.snapshots.state();
        let mut cache = self.cache.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(report) = cache.as_ref()
            && report.generation == state.generation
        {
            return Arc::clone(report);
        }

        let report = Arc::new(reconcile(
            &self.registry,
            state.snapshot.as_deref(),
            state.generation,
        ));
        tracing::debug!(
            generation = report.generation,
            fired = report.summary.fired,
            passed = report.summary.passed,
            not_evaluated = report.summary.not_evaluated,
            "Rebuilt audit report"
        );
        *cache = Some(Arc::clone(&report));
        report
    }

    /// True when the cached report matches the current snapshot
    pub fn is_built(&self) -> bool {
        let generation = self.snapshots.generation();
        self.cache
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .is_some_and(|r| r.generation == generation)
    }

    /// Drop the cached report; the next read rebuilds
    pub fn invalidate(&self) {
        *self.cache.lock().unwrap_or_else(PoisonError::into_inner) = None;
    }

    pub fn registry(&self) -> &Arc<RuleRegistry> {
        &self.registry
    }

    pub fn snapshots(&self) -> &Arc<SnapshotStore> {
        &self.snapshots
    }
}

/// Build a report for `snapshot` (or for "no run yet" when `None`)
pub fn reconcile(
    registry: &RuleRegistry,
    snapshot: Option<&AuditSnapshot>,
    generation: u64,
) -> AuditReport {
    let (entries, unmatched_messages) = match snapshot {
        None => (
            registry
                .all()
                .iter()
                .map(|d| AuditEntry::unfired(Arc::clone(d), AuditStatus::NotEvaluated))
                .collect(),
            0,
        ),
        Some(snapshot) => claim_messages(registry, snapshot),
    };

    AuditReport {
        by_category: group_by_category(&entries),
        summary: summarize(&entries),
        entries,
        built_at: Utc::now(),
        product_key: snapshot.and_then(|s| s.product_key.clone()),
        generation,
        unmatched_messages,
    }
}

fn claim_messages(registry: &RuleRegistry, snapshot: &AuditSnapshot) -> (Vec<AuditEntry>, usize) {
    let pool: Vec<&CapturedMessage> = snapshot.pool().collect();
    let mut claimed = vec![false; pool.len()];

    let entries = registry
        .all()
        .iter()
        .map(|definition| {
            let unclaimed = pool
                .iter()
                .enumerate()
                .filter(|(i, _)| !claimed[*i])
                .map(|(i, m)| (i, *m));
            match best_match(definition, unclaimed) {
                Some((index, _score)) => {
                    claimed[index] = true;
                    let message = pool[index];
                    AuditEntry {
                        definition: Arc::clone(definition),
                        status: AuditStatus::Fired,
                        fired_message: Some(message.message.clone()),
                        fired_severity: Some(message.severity),
                        claimed_index: Some(index),
                    }
                }
                None => AuditEntry::unfired(Arc::clone(definition), AuditStatus::Passed),
            }
        })
        .collect();

    let unmatched = claimed.iter().filter(|c| !**c).count();
    (entries, unmatched)
}

fn group_by_category(entries: &[AuditEntry]) -> Vec<CategoryGroup> {
    RuleCategory::ALL
        .into_iter()
        .filter_map(|category| {
            let members: Vec<AuditEntry> = entries
                .iter()
                .filter(|e| e.definition.category == category)
                .cloned()
                .collect();
            if members.is_empty() {
                return None;
            }
            Some(CategoryGroup {
                category,
                label: category.label(),
                fired_count: count_status(&members, AuditStatus::Fired),
                passed_count: count_status(&members, AuditStatus::Passed),
                total: members.len(),
                entries: members,
            })
        })
        .collect()
}

fn count_status(entries: &[AuditEntry], status: AuditStatus) -> usize {
    entries.iter().filter(|e| e.status == status).count()
}

fn summarize(entries: &[AuditEntry]) -> AuditSummary {
    let mut summary = AuditSummary {
        total_rules: entries.len(),
        ..AuditSummary::default()
    };
    for entry in entries {
        match entry.status {
            AuditStatus::Fired => {
                summary.fired += 1;
                match entry.fired_severity {
                    Some(Severity::Error) => summary.errors += 1,
                    Some(Severity::Warning) => summary.warnings += 1,
                    Some(Severity::Info) => summary.info += 1,
                    None => {}
                }
            }
            AuditStatus::Passed => summary.passed += 1,
            AuditStatus::NotEvaluated => summary.not_evaluated += 1,
        }
    }
    summary
}
