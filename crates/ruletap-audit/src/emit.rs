//! Emit Layer
//!
//! Side-channel tap on the validation engine's output. For every error and
//! warning it records a [`RuleEvent`] and forwards it to the optional sink,
//! then replaces the audit snapshot with the whole run. The result handed
//! in is returned untouched; when telemetry is disabled nothing else
//! happens at all.
//!
//! Faults inside the tap (sink errors, panics) are caught here and only
//! logged.

use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use chrono::Utc;

use ruletap_domain::constants::{
    AUTO_RULE_ID_MAX_LEN, AUTO_RULE_ID_MESSAGE_PREFIX_LEN, AUTO_RULE_ID_PREFIX, UNKNOWN_SOURCE_REF,
};
use ruletap_domain::{
    CapturedMessage, DiscoveredRule, EmitContext, RuleEvent, SharedTelemetrySink, ValidationResult,
};

use crate::rules::{DiscoveredRuleRegistry, RuleRegistry};
use crate::snapshot::SnapshotStore;
use crate::telemetry::TelemetryStore;

/// Transparent tap between the validation engine and its callers
pub struct EmitLayer {
    telemetry: Arc<TelemetryStore>,
    snapshots: Arc<SnapshotStore>,
    registry: Arc<RuleRegistry>,
    discovered: Arc<DiscoveredRuleRegistry>,
    sink: Option<SharedTelemetrySink>,
}

impl EmitLayer {
    pub fn new(
        telemetry: Arc<TelemetryStore>,
        snapshots: Arc<SnapshotStore>,
        registry: Arc<RuleRegistry>,
        discovered: Arc<DiscoveredRuleRegistry>,
    ) -> Self {
        Self {
            telemetry,
            snapshots,
            registry,
            discovered,
            sink: None,
        }
    }

    /// Forward every event to an external sink as well
    pub fn with_sink(mut self, sink: SharedTelemetrySink) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Record `result` and hand the same reference back
    pub fn wrap_validation_result<'r>(
        &self,
        result: &'r ValidationResult,
        context: &EmitContext,
    ) -> &'r ValidationResult {
        if !self.telemetry.is_enabled() {
            return result;
        }

        let outcome = panic::catch_unwind(AssertUnwindSafe(|| self.tap(result, context)));
        if outcome.is_err() {
            tracing::warn!(
                source_ref = %context.source_ref,
                "Telemetry tap panicked; validation result passed through untouched"
            );
        }
        result
    }

    /// Owned variant of [`wrap_validation_result`](Self::wrap_validation_result)
    pub fn pass_through(&self, result: ValidationResult, context: &EmitContext) -> ValidationResult {
        self.wrap_validation_result(&result, context);
        result
    }

    fn tap(&self, result: &ValidationResult, context: &EmitContext) {
        let mut emitted = 0usize;
        for message in result.messages() {
            let rule_id = self.resolve_rule_id(message, context);
            let event = RuleEvent::new(
                rule_id,
                message.severity,
                message.message.clone(),
                context.source_ref.clone(),
            )
            .with_field(message.field.clone())
            .with_product_key(context.product_key.clone())
            .with_inputs_present(context.inputs_present.clone());

            self.forward_to_sink(&event);
            if self.telemetry.add_event(event) {
                emitted += 1;
            }
        }

        self.snapshots.capture_result(result, context.product_key.as_deref());

        tracing::debug!(
            source_ref = %context.source_ref,
            emitted,
            "Tapped validation result"
        );
    }

    fn forward_to_sink(&self, event: &RuleEvent) {
        let Some(sink) = self.sink.as_ref() else {
            return;
        };
        // A panicking sink must not cost the run its events or snapshot
        match panic::catch_unwind(AssertUnwindSafe(|| sink.forward(event))) {
            Ok(Ok(())) => {}
            Ok(Err(e)) => {
                tracing::debug!(
                    sink = sink.name(),
                    error = %e,
                    "Telemetry sink failed; event dropped"
                );
            }
            Err(_) => {
                tracing::warn!(
                    sink = sink.name(),
                    rule_id = %event.rule_id,
                    "Telemetry sink panicked; event dropped"
                );
            }
        }
    }

    /// Registry id when a definition explicitly claims the message, else a generated one
    fn resolve_rule_id(&self, message: &CapturedMessage, context: &EmitContext) -> String {
        let known = self.registry.all().iter().find(|d| {
            d.default_severity == message.severity
                && message.field.as_deref() == Some(d.field.as_str())
                && d.message_match
                    .as_deref()
                    .is_some_and(|needle| !needle.is_empty() && message.message.contains(needle))
        });
        if let Some(definition) = known {
            return definition.rule_id.clone();
        }

        let rule_id = generate_rule_id(&context.source_ref, &message.message);
        self.discovered.register(DiscoveredRule {
            rule_id: rule_id.clone(),
            source_ref: context.source_ref.clone(),
            field: message.field.clone(),
            severity: message.severity,
            sample_message: message.message.clone(),
            first_seen: Utc::now(),
        });
        rule_id
    }

    pub fn telemetry(&self) -> &Arc<TelemetryStore> {
        &self.telemetry
    }

    pub fn discovered(&self) -> &Arc<DiscoveredRuleRegistry> {
        &self.discovered
    }
}

impl std::fmt::Debug for EmitLayer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmitLayer")
            .field("enabled", &self.telemetry.is_enabled())
            .field("registry_rules", &self.registry.count())
            .field("sink", &self.sink.as_ref().map(|s| s.name().to_owned()))
            .finish_non_exhaustive()
    }
}

/// Lowercase ASCII alphanumerics; every other run of characters becomes one `_`
///
/// Leading and trailing separators are dropped.
pub fn sanitize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_separator = false;
    for c in text.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_separator && !out.is_empty() {
                out.push('_');
            }
            pending_separator = false;
            out.push(c.to_ascii_lowercase());
        } else {
            pending_separator = true;
        }
    }
    out
}

/// Stable id for a rule that is not in the registry
///
/// `auto.<sanitized source_ref>.<sanitized first 40 chars of message>`,
/// capped at 96 characters. Same inputs always give the same id.
pub fn generate_rule_id(source_ref: &str, message: &str) -> String {
    let source = match sanitize(source_ref) {
        s if s.is_empty() => UNKNOWN_SOURCE_REF.to_owned(),
        s => s,
    };
    let prefix: String = message
        .chars()
        .take(AUTO_RULE_ID_MESSAGE_PREFIX_LEN)
        .collect();
    let message_part = sanitize(&prefix);

    let mut id = if message_part.is_empty() {
        format!("{AUTO_RULE_ID_PREFIX}.{source}")
    } else {
        format!("{AUTO_RULE_ID_PREFIX}.{source}.{message_part}")
    };
    // Only ASCII remains, so byte truncation is char-safe
    id.truncate(AUTO_RULE_ID_MAX_LEN);
    let trimmed_len = id.trim_end_matches(['_', '.']).len();
    id.truncate(trimmed_len);
    id
}
