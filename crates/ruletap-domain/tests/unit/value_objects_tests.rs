//! Unit tests for severities, categories and validation output

use ruletap_domain::{
    CapturedMessage, EmitContext, Error, RuleCategory, Severity, ValidationResult,
};

#[test]
fn test_severity_parse_and_display() {
    assert_eq!("error".parse::<Severity>().unwrap(), Severity::Error);
    assert_eq!("WARN".parse::<Severity>().unwrap(), Severity::Warning);
    assert_eq!("Info".parse::<Severity>().unwrap(), Severity::Info);
    assert!(matches!(
        "fatal".parse::<Severity>(),
        Err(Error::InvalidRule { .. })
    ));

    assert_eq!(Severity::Warning.to_string(), "WARNING");
    assert_eq!(Severity::Warning.as_str(), "warning");
}

#[test]
fn test_severity_serde_is_lowercase() {
    assert_eq!(serde_json::to_string(&Severity::Error).unwrap(), "\"error\"");
    let parsed: Severity = serde_json::from_str("\"info\"").unwrap();
    assert_eq!(parsed, Severity::Info);
}

#[test]
fn test_category_canonical_order() {
    assert_eq!(RuleCategory::ALL.len(), 9);
    assert_eq!(RuleCategory::ALL[0], RuleCategory::Application);
    assert_eq!(RuleCategory::ALL[8], RuleCategory::Parameter);
    assert!(RuleCategory::ALL.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_category_keys_and_labels() {
    for category in RuleCategory::ALL {
        assert_eq!(RuleCategory::from_key(category.key()), Some(category));
    }
    assert_eq!(RuleCategory::from_key(" Pulley "), Some(RuleCategory::Pulley));
    assert_eq!(RuleCategory::from_key("hydraulics"), None);
    assert_eq!(RuleCategory::Pulley.to_string(), "Pulleys");
    assert_eq!(RuleCategory::Speed.label(), "Speed & Throughput");
}

#[test]
fn test_validation_result_messages_order() {
    let result = ValidationResult::new(
        vec![CapturedMessage::error("a", "e1")],
        vec![
            CapturedMessage::warning("b", "w1"),
            CapturedMessage::unbound("i1", Severity::Info),
        ],
    );
    let texts: Vec<&str> = result.messages().map(|m| m.message.as_str()).collect();
    assert_eq!(texts, vec!["e1", "w1", "i1"]);
    assert_eq!(result.len(), 3);
    assert!(!result.is_empty());
    assert!(ValidationResult::default().is_empty());
}

#[test]
fn test_validation_result_from_json() {
    let json = r#"{"errors":[{"field":"belt_width_in","message":"Too narrow","severity":"error"}]}"#;
    let result: ValidationResult = serde_json::from_str(json).unwrap();
    assert_eq!(result.errors[0].field.as_deref(), Some("belt_width_in"));
    assert!(result.warnings.is_empty());
}

#[test]
fn test_emit_context_builder() {
    let context = EmitContext::new("validate_inputs")
        .with_product_key("belt_v1")
        .with_inputs_present(["belt_width_in", "belt_speed_fpm"]);
    assert_eq!(context.source_ref, "validate_inputs");
    assert_eq!(context.product_key.as_deref(), Some("belt_v1"));
    assert_eq!(context.inputs_present.len(), 2);
}
