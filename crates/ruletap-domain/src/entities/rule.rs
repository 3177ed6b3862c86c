//! Rule definition entity

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::value_objects::{RuleCategory, Severity};

/// One validation rule the calculator can fire
///
/// Identity is `rule_id`. Definitions are immutable once a registry owns
/// them; reports hold shared references back to them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleDefinition {
    /// Stable unique identifier (e.g. `vi_conveyor_length_zero`)
    pub rule_id: String,
    /// Short human-readable name
    pub human_name: String,
    /// What the rule checks; also the keyword source for matching
    pub check_description: String,
    /// Category for grouping in reports
    pub category: RuleCategory,
    /// Field the rule is conceptually about
    pub field: String,
    /// Severity the rule fires with
    pub default_severity: Severity,
    /// Validation function that raises the rule (traceability only)
    #[serde(default)]
    pub source_function: String,
    /// Location inside `source_function` (traceability only)
    #[serde(default)]
    pub source_line: Option<u32>,
    /// Explicit substring identifying this rule's message
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_match: Option<String>,
}

impl RuleDefinition {
    /// Check the per-definition part of the registry invariant
    pub fn validate(&self) -> Result<()> {
        if self.rule_id.trim().is_empty() {
            return Err(Error::invalid_rule(&self.rule_id, "rule_id is empty"));
        }
        if self.human_name.trim().is_empty() {
            return Err(Error::invalid_rule(&self.rule_id, "human_name is empty"));
        }
        if self.check_description.trim().is_empty() {
            return Err(Error::invalid_rule(
                &self.rule_id,
                "check_description is empty",
            ));
        }
        if self.field.trim().is_empty() {
            return Err(Error::invalid_rule(&self.rule_id, "field is empty"));
        }
        if self.message_match.as_deref().is_some_and(str::is_empty) {
            return Err(Error::invalid_rule(
                &self.rule_id,
                "message_match must be omitted rather than empty",
            ));
        }
        Ok(())
    }
}
