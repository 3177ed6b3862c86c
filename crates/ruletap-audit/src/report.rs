//! Audit report types

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;

use ruletap_domain::{RuleCategory, RuleDefinition, Severity};

/// Reconciled status of one rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditStatus {
    /// A captured message was attributed to the rule
    Fired,
    /// A run happened and nothing was attributed to the rule
    Passed,
    /// No run has been captured yet
    NotEvaluated,
}

impl fmt::Display for AuditStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fired => write!(f, "FIRED"),
            Self::Passed => write!(f, "PASSED"),
            Self::NotEvaluated => write!(f, "NOT EVALUATED"),
        }
    }
}

/// Status of one registry definition in one report
#[derive(Debug, Clone, Serialize)]
pub struct AuditEntry {
    /// Shared with the registry, which owns it
    pub definition: Arc<RuleDefinition>,
    pub status: AuditStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fired_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fired_severity: Option<Severity>,
    /// Position of the claimed message in the snapshot pool (errors, then warnings)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub claimed_index: Option<usize>,
}

impl AuditEntry {
    pub(crate) fn unfired(definition: Arc<RuleDefinition>, status: AuditStatus) -> Self {
        Self {
            definition,
            status,
            fired_message: None,
            fired_severity: None,
            claimed_index: None,
        }
    }

    pub fn rule_id(&self) -> &str {
        &self.definition.rule_id
    }

    pub fn is_fired(&self) -> bool {
        self.status == AuditStatus::Fired
    }
}

/// Entries of one category with their counts
#[derive(Debug, Clone, Serialize)]
pub struct CategoryGroup {
    pub category: RuleCategory,
    pub label: &'static str,
    pub fired_count: usize,
    pub passed_count: usize,
    pub total: usize,
    pub entries: Vec<AuditEntry>,
}

/// Aggregate counts across the whole report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct AuditSummary {
    /// Always the registry size
    pub total_rules: usize,
    pub fired: usize,
    pub passed: usize,
    pub not_evaluated: usize,
    /// Fired rules whose message was an error
    pub errors: usize,
    /// Fired rules whose message was a warning
    pub warnings: usize,
    /// Fired rules whose message was informational
    pub info: usize,
}

/// Reconciled, grouped and summarized view of every rule
#[derive(Debug, Clone, Serialize)]
pub struct AuditReport {
    /// One entry per registry definition, in registry order
    pub entries: Vec<AuditEntry>,
    /// Non-empty categories in canonical order
    pub by_category: Vec<CategoryGroup>,
    pub summary: AuditSummary,
    pub built_at: DateTime<Utc>,
    pub product_key: Option<String>,
    /// Snapshot generation the report was built from
    pub generation: u64,
    /// Captured messages no definition claimed
    pub unmatched_messages: usize,
}

impl AuditReport {
    pub fn entry(&self, rule_id: &str) -> Option<&AuditEntry> {
        self.entries.iter().find(|e| e.rule_id() == rule_id)
    }

    pub fn group(&self, category: RuleCategory) -> Option<&CategoryGroup> {
        self.by_category.iter().find(|g| g.category == category)
    }

    /// Fired entries in registry order
    pub fn fired(&self) -> impl Iterator<Item = &AuditEntry> {
        self.entries.iter().filter(|e| e.is_fired())
    }
}
