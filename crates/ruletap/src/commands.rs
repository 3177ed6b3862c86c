//! CLI commands
//!
//! Each command renders its output to a `String`; the binary only prints.

use std::fmt::Write as _;
use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use ruletap_audit::{AuditState, Reporter};
use ruletap_domain::{EmitContext, RuleCategory, ValidationResult};
use ruletap_infrastructure::AuditRuntime;

/// Options for `ruletap audit`
#[derive(Debug, Clone)]
pub struct AuditOptions {
    /// JSON file holding one validation result (`{"errors": [...], "warnings": [...]}`)
    pub run: PathBuf,
    pub product_key: Option<String>,
    pub source_ref: String,
    pub json: bool,
}

/// Push a recorded validation run through the emit layer and render the audit
pub fn run_audit(runtime: &AuditRuntime, options: &AuditOptions) -> Result<String> {
    let content = fs::read_to_string(&options.run)
        .with_context(|| format!("Failed to read validation run {}", options.run.display()))?;
    let result: ValidationResult = serde_json::from_str(&content)
        .with_context(|| format!("Invalid validation run {}", options.run.display()))?;

    let mut context = EmitContext::new(options.source_ref.as_str());
    if let Some(product_key) = &options.product_key {
        context = context.with_product_key(product_key.as_str());
    }

    let observer = runtime.audit_observer();
    runtime
        .emit()
        .wrap_validation_result(&result, &context);
    tracing::debug!(
        messages = result.len(),
        version = observer.version(),
        "Validation run recorded"
    );

    let report = match observer.view().state() {
        AuditState::Ready(report) => report,
        other => return Ok(format!("{}\n", Reporter::state_line(&other))),
    };
    if options.json {
        return Ok(Reporter::to_json(&report));
    }

    let mut output = Reporter::to_human_readable(&report);
    let discovered = runtime.discovered().all();
    if !discovered.is_empty() {
        let _ = writeln!(output, "\n--- Unregistered rules seen ---");
        for rule in discovered {
            let _ = writeln!(
                output,
                "  [{}] {}: {}",
                rule.severity, rule.rule_id, rule.sample_message
            );
        }
    }
    Ok(output)
}

/// List registry rules, optionally limited to one category key
pub fn list_rules(runtime: &AuditRuntime, category: Option<&str>) -> Result<String> {
    let registry = runtime.registry();
    let categories = match category {
        Some(key) => match RuleCategory::from_key(key) {
            Some(category) => vec![category],
            None => bail!(
                "Unknown category '{key}'. Expected one of: {}",
                RuleCategory::ALL.map(|c| c.key()).join(", ")
            ),
        },
        None => registry.categories(),
    };

    let mut output = String::new();
    for category in categories {
        let rules = registry.rules_by_category(category);
        let _ = writeln!(output, "--- {} ({} rules) ---", category.label(), rules.len());
        for rule in rules {
            let _ = writeln!(
                output,
                "  {:<32} {:<8} {:<24} {}",
                rule.rule_id,
                rule.default_severity.as_str(),
                rule.field,
                rule.human_name
            );
        }
    }
    let _ = writeln!(output, "Total: {} rules", registry.count());
    Ok(output)
}
