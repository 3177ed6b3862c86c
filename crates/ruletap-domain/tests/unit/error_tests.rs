//! Unit tests for domain error types

use ruletap_domain::Error;

#[test]
fn test_config_error() {
    let error = Error::config("buffer_capacity must be positive");
    match error {
        Error::Configuration { message, source } => {
            assert_eq!(message, "buffer_capacity must be positive");
            assert!(source.is_none());
        }
        _ => panic!("Expected Configuration error"),
    }
}

#[test]
fn test_invalid_rule_error_display() {
    let error = Error::invalid_rule("vi_length", "field is empty");
    assert_eq!(error.to_string(), "Invalid rule 'vi_length': field is empty");
}

#[test]
fn test_sink_error() {
    let error = Error::sink("endpoint unreachable");
    match error {
        Error::Sink { message } => assert_eq!(message, "endpoint unreachable"),
        _ => panic!("Expected Sink error"),
    }
}

#[test]
fn test_io_error_conversion() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "rules.yaml");
    let error: Error = io.into();
    assert!(matches!(error, Error::Io { .. }));
    assert!(error.to_string().contains("rules.yaml"));
}

#[test]
fn test_json_error_conversion() {
    let json = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let error: Error = json.into();
    assert!(matches!(error, Error::Json { .. }));
}
