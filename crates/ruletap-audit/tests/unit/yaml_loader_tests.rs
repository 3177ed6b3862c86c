//! YAML rule dataset loading tests

use std::fs;

use ruletap_audit::{RuleRegistry, YamlRuleLoader};
use ruletap_domain::{Error, RuleCategory, Severity};
use tempfile::TempDir;

const DATASET: &str = r#"
rules:
  - rule_id: vi_conveyor_length_zero
    human_name: Conveyor Length Positive
    check_description: Conveyor Length (C-C) must be greater than 0
    category: geometry
    field: conveyor_length_cc_in
    default_severity: error
    source_function: validate_inputs
    source_line: 112
  - rule_id: vm_oily_product
    human_name: Oily Product
    check_description: Oily product requires oil-resistant belt compound
    category: material
    field: material_type
    default_severity: warning
    message_match: oil
"#;

#[test]
fn test_parse_dataset_in_file_order() {
    let definitions = YamlRuleLoader::parse_str(DATASET).unwrap();
    assert_eq!(definitions.len(), 2);
    assert_eq!(definitions[0].rule_id, "vi_conveyor_length_zero");
    assert_eq!(definitions[0].category, RuleCategory::Geometry);
    assert_eq!(definitions[0].source_line, Some(112));
    assert_eq!(definitions[1].default_severity, Severity::Warning);
    assert_eq!(definitions[1].message_match.as_deref(), Some("oil"));
    assert!(definitions[1].source_function.is_empty());
}

#[test]
fn test_registry_from_yaml_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("rules.yaml");
    fs::write(&path, DATASET).unwrap();

    let registry = RuleRegistry::from_yaml_file(&path).unwrap();
    assert_eq!(registry.count(), 2);
    assert!(registry.contains("vm_oily_product"));
}

#[test]
fn test_unknown_category_is_invalid_rule() {
    let yaml = r"
rules:
  - rule_id: r1
    human_name: R1
    check_description: Something
    category: hydraulics
    field: f
    default_severity: error
";
    let result = YamlRuleLoader::parse_str(yaml);
    assert!(matches!(result, Err(Error::InvalidRule { rule_id, .. }) if rule_id == "r1"));
}

#[test]
fn test_unknown_severity_is_invalid_rule() {
    let yaml = r"
rules:
  - rule_id: r1
    human_name: R1
    check_description: Something
    category: belt
    field: f
    default_severity: fatal
";
    assert!(matches!(
        YamlRuleLoader::parse_str(yaml),
        Err(Error::InvalidRule { .. })
    ));
}

#[test]
fn test_duplicate_ids_in_yaml_rejected() {
    let yaml = format!("{DATASET}{}", &DATASET[DATASET.find("  - rule_id: vm").unwrap()..]);
    assert!(matches!(
        RuleRegistry::from_yaml_str(&yaml),
        Err(Error::DuplicateRule { .. })
    ));
}

#[test]
fn test_malformed_yaml_is_yaml_error() {
    assert!(matches!(
        YamlRuleLoader::parse_str("rules: [ {"),
        Err(Error::Yaml { .. })
    ));
}

#[test]
fn test_missing_file_is_io_error() {
    let temp = TempDir::new().unwrap();
    let result = RuleRegistry::from_yaml_file(&temp.path().join("absent.yaml"));
    assert!(matches!(result, Err(Error::Io { .. })));
}
