//! Validation output as seen by the audit layer
//!
//! These types describe what the external calculator hands over. The audit
//! layer only ever reads them.

use serde::{Deserialize, Serialize};

use super::Severity;

/// One fired error or warning from a single validation run
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CapturedMessage {
    /// Input/output field the message refers to, if the calculator named one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    /// Message text shown to the user
    pub message: String,
    /// Severity the calculator attached
    pub severity: Severity,
}

impl CapturedMessage {
    /// Message bound to a field
    pub fn new(field: impl Into<String>, message: impl Into<String>, severity: Severity) -> Self {
        Self {
            field: Some(field.into()),
            message: message.into(),
            severity,
        }
    }

    /// Message without a field
    pub fn unbound(message: impl Into<String>, severity: Severity) -> Self {
        Self {
            field: None,
            message: message.into(),
            severity,
        }
    }

    /// Shorthand for an error-severity message
    pub fn error(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(field, message, Severity::Error)
    }

    /// Shorthand for a warning-severity message
    pub fn warning(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(field, message, Severity::Warning)
    }
}

/// Raw result of one validation run: `errors` then `warnings`
///
/// `errors` carry `Severity::Error`; `warnings` carry `Warning` or `Info`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    #[serde(default)]
    pub errors: Vec<CapturedMessage>,
    #[serde(default)]
    pub warnings: Vec<CapturedMessage>,
}

impl ValidationResult {
    pub fn new(errors: Vec<CapturedMessage>, warnings: Vec<CapturedMessage>) -> Self {
        Self { errors, warnings }
    }

    /// Total number of messages
    pub fn len(&self) -> usize {
        self.errors.len() + self.warnings.len()
    }

    /// True when the run produced nothing
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty() && self.warnings.is_empty()
    }

    /// Errors first, then warnings, each in original order
    pub fn messages(&self) -> impl Iterator<Item = &CapturedMessage> {
        self.errors.iter().chain(self.warnings.iter())
    }
}

/// Metadata attached to a validation run by the caller of the emit layer
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmitContext {
    /// Which validation function / module produced the result
    pub source_ref: String,
    /// Product being configured, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_key: Option<String>,
    /// Field names that had values when validation ran
    #[serde(default)]
    pub inputs_present: Vec<String>,
}

impl EmitContext {
    pub fn new(source_ref: impl Into<String>) -> Self {
        Self {
            source_ref: source_ref.into(),
            ..Self::default()
        }
    }

    pub fn with_product_key(mut self, product_key: impl Into<String>) -> Self {
        self.product_key = Some(product_key.into());
        self
    }

    pub fn with_inputs_present<I, S>(mut self, inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.inputs_present = inputs.into_iter().map(Into::into).collect();
        self
    }
}
