//! YAML Rule Loader
//!
//! Loads an external rule dataset. The file holds a single `rules:` list;
//! keys are snake_case and mirror [`RuleDefinition`]:
//!
//! ```yaml
//! rules:
//!   - rule_id: vi_conveyor_length_zero
//!     human_name: Conveyor Length Positive
//!     check_description: Conveyor Length (C-C) must be greater than 0
//!     category: geometry
//!     field: conveyor_length_cc_in
//!     default_severity: error
//!     source_function: validate_inputs
//!     source_line: 112
//! ```

use serde::Deserialize;
use std::path::Path;
use std::str::FromStr;

use ruletap_domain::error::{Error, Result};
use ruletap_domain::{RuleCategory, RuleDefinition, Severity};

use super::RuleRegistry;

#[derive(Debug, Deserialize)]
struct RuleFile {
    #[serde(default)]
    rules: Vec<YamlRule>,
}

/// Rule as written in YAML, before category/severity are checked
#[derive(Debug, Deserialize)]
struct YamlRule {
    rule_id: String,
    human_name: String,
    check_description: String,
    category: String,
    field: String,
    default_severity: String,
    #[serde(default)]
    source_function: String,
    #[serde(default)]
    source_line: Option<u32>,
    #[serde(default)]
    message_match: Option<String>,
}

impl YamlRule {
    fn into_definition(self) -> Result<RuleDefinition> {
        let category = RuleCategory::from_key(&self.category).ok_or_else(|| {
            Error::invalid_rule(
                &self.rule_id,
                format!("unknown category '{}'", self.category),
            )
        })?;
        let default_severity = Severity::from_str(&self.default_severity).map_err(|_| {
            Error::invalid_rule(
                &self.rule_id,
                format!("unknown severity '{}'", self.default_severity),
            )
        })?;
        Ok(RuleDefinition {
            rule_id: self.rule_id,
            human_name: self.human_name,
            check_description: self.check_description,
            category,
            field: self.field,
            default_severity,
            source_function: self.source_function,
            source_line: self.source_line,
            message_match: self.message_match,
        })
    }
}

/// Loader for YAML rule datasets
pub struct YamlRuleLoader;

impl YamlRuleLoader {
    /// Parse definitions from YAML text, in file order
    pub fn parse_str(content: &str) -> Result<Vec<RuleDefinition>> {
        let file: RuleFile = serde_yaml::from_str(content)?;
        file.rules
            .into_iter()
            .map(YamlRule::into_definition)
            .collect()
    }

    /// Parse definitions from a YAML file
    pub fn parse_file(path: &Path) -> Result<Vec<RuleDefinition>> {
        let content = std::fs::read_to_string(path)?;
        Self::parse_str(&content)
    }
}

impl RuleRegistry {
    /// Build a registry from YAML text
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        Self::from_definitions(YamlRuleLoader::parse_str(content)?)
    }

    /// Build a registry from a YAML file
    pub fn from_yaml_file(path: &Path) -> Result<Self> {
        let registry = Self::from_definitions(YamlRuleLoader::parse_file(path)?)?;
        tracing::debug!(
            path = %path.display(),
            rules = registry.count(),
            "Loaded rule registry"
        );
        Ok(registry)
    }
}
