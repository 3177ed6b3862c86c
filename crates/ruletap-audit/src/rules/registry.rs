//! Declarative Rule Registry
//!
//! Immutable catalogue of every rule the calculator can fire. Built once at
//! startup and never mutated; iteration order is registration order and is
//! significant for matching.

use std::collections::HashMap;
use std::sync::Arc;

use ruletap_domain::error::{Error, Result};
use ruletap_domain::{RuleCategory, RuleDefinition};

use super::catalog;

/// Registry holding all defined rules
#[derive(Debug, Default, Clone)]
pub struct RuleRegistry {
    rules: Vec<Arc<RuleDefinition>>,
    index: HashMap<String, usize>,
}

impl RuleRegistry {
    /// Create an empty registry
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a registry, enforcing unique ids and non-empty display fields
    pub fn from_definitions(definitions: Vec<RuleDefinition>) -> Result<Self> {
        let mut registry = Self::empty();
        for definition in definitions {
            definition.validate()?;
            if registry.index.contains_key(&definition.rule_id) {
                return Err(Error::DuplicateRule {
                    rule_id: definition.rule_id,
                });
            }
            registry.push(definition);
        }
        Ok(registry)
    }

    /// Registry with the built-in rule catalogue
    pub fn standard() -> Self {
        let mut registry = Self::empty();
        for definition in catalog::standard_rules() {
            debug_assert!(definition.validate().is_ok(), "{}", definition.rule_id);
            debug_assert!(
                !registry.index.contains_key(&definition.rule_id),
                "{}",
                definition.rule_id
            );
            registry.push(definition);
        }
        registry
    }

    fn push(&mut self, definition: RuleDefinition) {
        self.index.insert(definition.rule_id.clone(), self.rules.len());
        self.rules.push(Arc::new(definition));
    }

    /// All rules in iteration order
    pub fn all(&self) -> &[Arc<RuleDefinition>] {
        &self.rules
    }

    /// Get a rule by ID
    pub fn get(&self, id: &str) -> Option<&Arc<RuleDefinition>> {
        self.index.get(id).map(|&i| &self.rules[i])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn count(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Get rules by category, in iteration order
    pub fn rules_by_category(&self, category: RuleCategory) -> Vec<&Arc<RuleDefinition>> {
        self.rules
            .iter()
            .filter(|r| r.category == category)
            .collect()
    }

    /// Categories that have at least one rule, in canonical order
    pub fn categories(&self) -> Vec<RuleCategory> {
        RuleCategory::ALL
            .into_iter()
            .filter(|c| self.rules.iter().any(|r| r.category == *c))
            .collect()
    }
}
