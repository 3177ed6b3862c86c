//! Auto-discovered rule registry
//!
//! Telemetry bookkeeping for rule ids generated by the emit layer. Unlike
//! [`RuleRegistry`](super::RuleRegistry) it grows at runtime, with
//! first-write-wins semantics.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use ruletap_domain::DiscoveredRule;

#[derive(Debug, Default)]
struct Inner {
    order: Vec<String>,
    entries: HashMap<String, DiscoveredRule>,
}

/// Registry of rules seen in telemetry but not in the static catalogue
#[derive(Debug, Default)]
pub struct DiscoveredRuleRegistry {
    inner: RwLock<Inner>,
}

impl DiscoveredRuleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an entry; returns `false` if the id was already known
    ///
    /// An existing entry is never overwritten.
    pub fn register(&self, entry: DiscoveredRule) -> bool {
        let mut inner = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        if inner.entries.contains_key(&entry.rule_id) {
            return false;
        }
        inner.order.push(entry.rule_id.clone());
        inner.entries.insert(entry.rule_id.clone(), entry);
        true
    }

    pub fn get(&self, rule_id: &str) -> Option<DiscoveredRule> {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .entries
            .get(rule_id)
            .cloned()
    }

    /// All entries in registration order
    pub fn all(&self) -> Vec<DiscoveredRule> {
        let inner = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        inner
            .order
            .iter()
            .filter_map(|id| inner.entries.get(id).cloned())
            .collect()
    }

    pub fn count(&self) -> usize {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .order
            .len()
    }

    pub fn clear(&self) {
        let mut inner = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        inner.order.clear();
        inner.entries.clear();
    }
}
