//! Emit layer tests

use std::ptr;
use std::sync::{Arc, Mutex};

use ruletap_audit::generate_rule_id;
use ruletap_domain::{
    CapturedMessage, EmitContext, Error, RuleCategory, RuleEvent, Severity, TelemetrySink,
    ValidationResult,
};

use crate::test_utils::{registry, rule, rule_matching, Harness};

struct RecordingSink {
    seen: Mutex<Vec<String>>,
}

impl TelemetrySink for RecordingSink {
    fn name(&self) -> &str {
        "recording"
    }

    fn forward(&self, event: &RuleEvent) -> ruletap_domain::Result<()> {
        self.seen.lock().unwrap().push(event.rule_id.clone());
        Ok(())
    }
}

struct FailingSink;

impl TelemetrySink for FailingSink {
    fn name(&self) -> &str {
        "failing"
    }

    fn forward(&self, _event: &RuleEvent) -> ruletap_domain::Result<()> {
        Err(Error::sink("endpoint unreachable"))
    }
}

struct PanickingSink;

impl TelemetrySink for PanickingSink {
    fn name(&self) -> &str {
        "panicking"
    }

    fn forward(&self, _event: &RuleEvent) -> ruletap_domain::Result<()> {
        panic!("sink exploded");
    }
}

fn sample_result() -> ValidationResult {
    ValidationResult::new(
        vec![CapturedMessage::error(
            "conveyor_length_cc_in",
            "Conveyor Length (C-C) must be greater than 0",
        )],
        vec![CapturedMessage::warning(
            "material_type",
            "Oily parts need an oil resistant belt",
        )],
    )
}

#[test]
fn test_returns_same_result_reference() {
    let harness = Harness::standard();
    let result = sample_result();
    let context = EmitContext::new("validate_inputs");

    let returned = harness.emit.wrap_validation_result(&result, &context);
    assert!(ptr::eq(returned, &result));
    assert_eq!(*returned, sample_result());
}

#[test]
fn test_records_events_and_snapshot() {
    let harness = Harness::standard();
    let result = sample_result();
    let context = EmitContext::new("validate_inputs")
        .with_product_key("belt_conveyor_v1")
        .with_inputs_present(["conveyor_length_cc_in", "material_type"]);

    harness.emit.wrap_validation_result(&result, &context);

    let events = harness.telemetry.events();
    assert_eq!(events.len(), 2);
    // newest first: the warning was emitted last
    assert_eq!(events[0].severity, Severity::Warning);
    assert_eq!(events[1].severity, Severity::Error);
    assert_eq!(events[1].product_key.as_deref(), Some("belt_conveyor_v1"));
    assert_eq!(events[1].field.as_deref(), Some("conveyor_length_cc_in"));
    assert_eq!(events[1].inputs_present.len(), 2);
    assert_eq!(events[1].source_ref, "validate_inputs");

    let snapshot = harness.snapshots.current().unwrap();
    assert_eq!(snapshot.errors, result.errors);
    assert_eq!(snapshot.warnings, result.warnings);
    assert_eq!(snapshot.product_key.as_deref(), Some("belt_conveyor_v1"));
}

#[test]
fn test_disabled_does_nothing() {
    let harness = Harness::standard();
    harness.telemetry.set_enabled(false);
    let result = sample_result();

    let returned = harness
        .emit
        .wrap_validation_result(&result, &EmitContext::new("validate_inputs"));

    assert!(ptr::eq(returned, &result));
    assert_eq!(harness.telemetry.event_count(), 0);
    assert!(harness.snapshots.current().is_none());
    assert_eq!(harness.snapshots.generation(), 0);
    assert_eq!(harness.discovered.count(), 0);
}

#[test]
fn test_empty_result_still_captures_snapshot() {
    let harness = Harness::standard();
    let result = ValidationResult::default();
    harness
        .emit
        .wrap_validation_result(&result, &EmitContext::new("validate_inputs"));

    assert_eq!(harness.telemetry.event_count(), 0);
    let snapshot = harness.snapshots.current().unwrap();
    assert_eq!(snapshot.message_count(), 0);
}

#[test]
fn test_message_match_resolves_registry_id() {
    let harness = Harness::new(registry(vec![rule_matching(
        "vm_oily_product",
        RuleCategory::Material,
        "material_type",
        Severity::Warning,
        "Oily product requires oil-resistant belt compound",
        "oil",
    )]));
    let result = ValidationResult::new(
        vec![],
        vec![CapturedMessage::warning(
            "material_type",
            "Product is oily; use oil resistant belt",
        )],
    );

    harness
        .emit
        .wrap_validation_result(&result, &EmitContext::new("validate_material"));

    assert_eq!(harness.telemetry.events()[0].rule_id, "vm_oily_product");
    assert_eq!(harness.discovered.count(), 0);
}

#[test]
fn test_unknown_message_gets_auto_id() {
    let harness = Harness::new(registry(vec![rule(
        "vb_belt_width",
        RuleCategory::Belt,
        "belt_width_in",
        Severity::Error,
        "Belt width must be positive",
    )]));
    let message = "Belt width must be positive";
    let result = ValidationResult::new(vec![CapturedMessage::error("belt_width_in", message)], vec![]);

    harness
        .emit
        .wrap_validation_result(&result, &EmitContext::new("validate_belt"));

    // No message_match, so the emit layer does not guess
    let expected = generate_rule_id("validate_belt", message);
    assert_eq!(harness.telemetry.events()[0].rule_id, expected);

    let discovered = harness.discovered.get(&expected).unwrap();
    assert_eq!(discovered.sample_message, message);
    assert_eq!(discovered.field.as_deref(), Some("belt_width_in"));
}

#[test]
fn test_message_match_requires_same_field_and_severity() {
    let harness = Harness::new(registry(vec![rule_matching(
        "vm_oily_product",
        RuleCategory::Material,
        "material_type",
        Severity::Warning,
        "Oily product",
        "oil",
    )]));
    let result = ValidationResult::new(
        vec![CapturedMessage::error("material_type", "oil everywhere")],
        vec![CapturedMessage::warning("belt_type", "oil everywhere")],
    );

    harness
        .emit
        .wrap_validation_result(&result, &EmitContext::new("validate_material"));

    assert!(
        harness
            .telemetry
            .events()
            .iter()
            .all(|e| e.rule_id.starts_with("auto."))
    );
    // Same source and text collapse to one discovered id
    assert_eq!(harness.discovered.count(), 1);
}

#[test]
fn test_sink_receives_every_event() {
    let sink = Arc::new(RecordingSink {
        seen: Mutex::new(Vec::new()),
    });
    let harness = Harness::standard();
    let emit = ruletap_audit::EmitLayer::new(
        Arc::clone(&harness.telemetry),
        Arc::clone(&harness.snapshots),
        Arc::clone(&harness.registry),
        Arc::clone(&harness.discovered),
    )
    .with_sink(sink.clone());

    emit.wrap_validation_result(&sample_result(), &EmitContext::new("validate_inputs"));
    assert_eq!(sink.seen.lock().unwrap().len(), 2);
}

#[test]
fn test_sink_failure_is_swallowed() {
    let harness = Harness::standard();
    let emit = ruletap_audit::EmitLayer::new(
        Arc::clone(&harness.telemetry),
        Arc::clone(&harness.snapshots),
        Arc::clone(&harness.registry),
        Arc::clone(&harness.discovered),
    )
    .with_sink(Arc::new(FailingSink));
    let result = sample_result();

    let returned = emit.wrap_validation_result(&result, &EmitContext::new("validate_inputs"));
    assert!(ptr::eq(returned, &result));
    assert_eq!(harness.telemetry.event_count(), 2);
    assert!(harness.snapshots.current().is_some());
}

#[test]
fn test_panicking_sink_does_not_escape() {
    let harness = Harness::standard();
    let emit = ruletap_audit::EmitLayer::new(
        Arc::clone(&harness.telemetry),
        Arc::clone(&harness.snapshots),
        Arc::clone(&harness.registry),
        Arc::clone(&harness.discovered),
    )
    .with_sink(Arc::new(PanickingSink));
    let result = sample_result();

    let returned = emit.wrap_validation_result(&result, &EmitContext::new("validate_inputs"));
    assert!(ptr::eq(returned, &result));
    // The run is still recorded in full
    assert_eq!(harness.telemetry.event_count(), 2);
    let snapshot = harness.snapshots.current().unwrap();
    assert_eq!(snapshot.errors, result.errors);
    assert_eq!(snapshot.warnings, result.warnings);
    assert_eq!(harness.engine.report().summary.fired, 2);
}

#[test]
fn test_pass_through_returns_owned_result() {
    let harness = Harness::standard();
    let result = harness
        .emit
        .pass_through(sample_result(), &EmitContext::new("validate_inputs"));
    assert_eq!(result, sample_result());
    assert_eq!(harness.telemetry.event_count(), 2);
}

#[test]
fn test_capacity_bounds_events_from_one_run() {
    let harness = Harness::with_capacity(Arc::new(ruletap_audit::RuleRegistry::empty()), 2);
    let errors = (0..5)
        .map(|i| CapturedMessage::error("f", format!("problem {i}")))
        .collect();
    let result = ValidationResult::new(errors, vec![]);

    harness
        .emit
        .wrap_validation_result(&result, &EmitContext::new("calc"));

    let messages: Vec<String> = harness
        .telemetry
        .events()
        .into_iter()
        .map(|e| e.message)
        .collect();
    assert_eq!(messages, vec!["problem 4", "problem 3"]);
    // The snapshot is not bounded by the telemetry buffer
    assert_eq!(harness.snapshots.current().unwrap().errors.len(), 5);
}
