//! Error context extension tests

use ruletap_domain::Error;
use ruletap_infrastructure::ErrorContext;

fn io_failure() -> std::result::Result<(), std::io::Error> {
    Err(std::io::Error::new(
        std::io::ErrorKind::PermissionDenied,
        "denied",
    ))
}

#[test]
fn test_context_wraps_as_internal() {
    let error = io_failure().context("Reading rules").unwrap_err();
    match error {
        Error::Internal { message } => assert_eq!(message, "Reading rules: denied"),
        other => panic!("Expected Internal error, got {other:?}"),
    }
}

#[test]
fn test_with_context_is_lazy() {
    let ok: std::result::Result<u8, std::io::Error> = Ok(1);
    let value = ok
        .with_context(|| -> String { panic!("context built for a success") })
        .unwrap();
    assert_eq!(value, 1);
}

#[test]
fn test_io_context_keeps_io_variant() {
    let error = io_failure().io_context("Writing config").unwrap_err();
    assert!(matches!(error, Error::Io { .. }));
    assert!(error.to_string().contains("Writing config: denied"));
}

#[test]
fn test_config_context_keeps_source() {
    let error = io_failure().config_context("Loading").unwrap_err();
    match error {
        Error::Configuration { message, source } => {
            assert_eq!(message, "Loading: denied");
            assert!(source.is_some());
        }
        other => panic!("Expected Configuration error, got {other:?}"),
    }
}
