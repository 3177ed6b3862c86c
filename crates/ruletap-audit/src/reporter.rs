//! Audit Report Rendering
//!
//! Renders reports in two formats:
//! - JSON for tooling and inspection
//! - Human-readable for terminal output

use std::fmt::Write as _;

use crate::observers::AuditState;
use crate::report::{AuditReport, AuditStatus};

/// Report generator
pub struct Reporter;

impl Reporter {
    /// Generate JSON report
    pub fn to_json(report: &AuditReport) -> String {
        serde_json::to_string_pretty(report).unwrap_or_else(|_| "{}".to_string())
    }

    /// Generate human-readable report
    pub fn to_human_readable(report: &AuditReport) -> String {
        let mut output = String::new();

        output.push_str("=== Rules Audit Report ===\n\n");
        let _ = writeln!(output, "Built:   {}", report.built_at.to_rfc3339());
        if let Some(product_key) = &report.product_key {
            let _ = writeln!(output, "Product: {product_key}");
        }
        output.push('\n');

        // Summary
        let summary = &report.summary;
        output.push_str("--- Summary ---\n");
        let _ = writeln!(output, "Total Rules:     {}", summary.total_rules);
        let _ = writeln!(output, "  Fired:         {}", summary.fired);
        let _ = writeln!(output, "    Errors:      {}", summary.errors);
        let _ = writeln!(output, "    Warnings:    {}", summary.warnings);
        let _ = writeln!(output, "    Info:        {}", summary.info);
        let _ = writeln!(output, "  Passed:        {}", summary.passed);
        let _ = writeln!(output, "  Not Evaluated: {}", summary.not_evaluated);
        if report.unmatched_messages > 0 {
            let _ = writeln!(
                output,
                "Unattributed messages: {}",
                report.unmatched_messages
            );
        }
        output.push('\n');

        for group in &report.by_category {
            let _ = writeln!(
                output,
                "--- {} ({} fired / {} passed / {} total) ---",
                group.label, group.fired_count, group.passed_count, group.total
            );
            for entry in group.entries.iter().filter(|e| e.is_fired()) {
                let _ = writeln!(
                    output,
                    "  [{}] {} ({}): {}",
                    entry
                        .fired_severity
                        .unwrap_or(entry.definition.default_severity),
                    entry.definition.human_name,
                    entry.rule_id(),
                    entry.fired_message.as_deref().unwrap_or_default()
                );
            }
            output.push('\n');
        }

        let status = if summary.not_evaluated == summary.total_rules && summary.total_rules > 0 {
            AuditStatus::NotEvaluated.to_string()
        } else if summary.errors > 0 {
            "ERRORS FIRED".to_string()
        } else {
            "NO ERRORS".to_string()
        };
        let _ = writeln!(output, "Status: {status}");

        output
    }

    /// One-line description of what an audit panel would show
    pub fn state_line(state: &AuditState) -> String {
        match state {
            AuditState::Disabled => "Rules audit disabled".to_string(),
            AuditState::NoData(report) => format!(
                "No validation run captured yet ({} rules registered)",
                report.summary.total_rules
            ),
            AuditState::Ready(report) => format!(
                "{} fired / {} passed of {} rules",
                report.summary.fired, report.summary.passed, report.summary.total_rules
            ),
        }
    }
}
