//! Observer adapter tests

use std::sync::Arc;

use ruletap_audit::{AuditObserver, AuditState, TelemetryObserver};
use ruletap_domain::{CapturedMessage, EmitContext, ValidationResult};

use crate::test_utils::Harness;

fn failing_run() -> ValidationResult {
    ValidationResult::new(
        vec![CapturedMessage::error(
            "conveyor_length_cc_in",
            "Conveyor Length (C-C) must be greater than 0",
        )],
        vec![],
    )
}

#[test]
fn test_telemetry_view_stable_until_change() {
    let harness = Harness::standard();
    let observer = TelemetryObserver::new(Arc::clone(&harness.telemetry));

    let first = observer.view();
    let again = observer.view();
    assert!(Arc::ptr_eq(&first, &again));
    assert_eq!(observer.version(), 0);

    harness
        .emit
        .wrap_validation_result(&failing_run(), &EmitContext::new("validate_inputs"));

    let after = observer.view();
    assert!(!Arc::ptr_eq(&first, &after));
    assert_eq!(after.event_count, 1);
    // No message_match on that rule, so telemetry carries a generated id
    assert_eq!(
        after.events[0].rule_id,
        "auto.validate_inputs.conveyor_length_c_c_must_be_greater_th"
    );
    assert_eq!(observer.version(), 1);
}

#[test]
fn test_telemetry_observer_actions() {
    let harness = Harness::standard();
    let observer = TelemetryObserver::new(Arc::clone(&harness.telemetry));
    harness
        .emit
        .wrap_validation_result(&failing_run(), &EmitContext::new("validate_inputs"));

    observer.clear();
    assert_eq!(observer.view().event_count, 0);

    observer.set_enabled(false);
    let view = observer.view();
    assert!(!view.enabled);
    assert_eq!(view.session_id, harness.telemetry.session_id());
    assert_eq!(observer.version(), 3);
}

#[test]
fn test_dropped_observer_unsubscribes() {
    let harness = Harness::standard();
    let observer = TelemetryObserver::new(Arc::clone(&harness.telemetry));
    assert_eq!(harness.telemetry.subscriber_count(), 1);
    drop(observer);
    assert_eq!(harness.telemetry.subscriber_count(), 0);
}

#[test]
fn test_audit_view_no_data_then_ready() {
    let harness = Harness::standard();
    let observer = AuditObserver::new(Arc::clone(&harness.engine), Arc::clone(&harness.telemetry));

    assert!(matches!(observer.view().state(), AuditState::NoData(_)));

    harness
        .emit
        .wrap_validation_result(&failing_run(), &EmitContext::new("validate_inputs"));
    assert_eq!(observer.version(), 1);

    match observer.view().state() {
        AuditState::Ready(report) => assert_eq!(report.summary.fired, 1),
        other => panic!("expected ready state, got {other:?}"),
    }
}

#[test]
fn test_audit_view_reuses_cached_report() {
    let harness = Harness::standard();
    let observer = AuditObserver::new(Arc::clone(&harness.engine), Arc::clone(&harness.telemetry));
    harness
        .emit
        .wrap_validation_result(&failing_run(), &EmitContext::new("validate_inputs"));

    let a = observer.view().report.unwrap();
    let b = observer.view().report.unwrap();
    assert!(Arc::ptr_eq(&a, &b));
}

#[test]
fn test_disabled_hides_report_but_keeps_snapshot() {
    let harness = Harness::standard();
    let observer = AuditObserver::new(Arc::clone(&harness.engine), Arc::clone(&harness.telemetry));
    harness
        .emit
        .wrap_validation_result(&failing_run(), &EmitContext::new("validate_inputs"));

    harness.telemetry.set_enabled(false);
    let view = observer.view();
    assert!(view.report.is_none());
    assert!(view.snapshot.is_some());
    assert!(!view.enabled);
    assert!(matches!(view.state(), AuditState::Disabled));
    assert_eq!(observer.version(), 2);

    harness.telemetry.set_enabled(true);
    assert!(matches!(observer.view().state(), AuditState::Ready(_)));
}

#[test]
fn test_audit_observer_ignores_event_churn() {
    let harness = Harness::standard();
    let observer = AuditObserver::new(Arc::clone(&harness.engine), Arc::clone(&harness.telemetry));
    harness.telemetry.clear_events();
    assert_eq!(observer.version(), 0);
}

#[test]
fn test_audit_clear_returns_to_no_data() {
    let harness = Harness::standard();
    let observer = AuditObserver::new(Arc::clone(&harness.engine), Arc::clone(&harness.telemetry));
    harness
        .emit
        .wrap_validation_result(&failing_run(), &EmitContext::new("validate_inputs"));

    observer.clear();
    match observer.view().state() {
        AuditState::NoData(report) => {
            assert_eq!(report.summary.not_evaluated, harness.registry.count());
        }
        other => panic!("expected no-data state, got {other:?}"),
    }
}
