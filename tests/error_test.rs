use stancemeter::{Result, StanceError};

#[test]
fn test_error_display() {
    let err = StanceError::Configuration("threshold must be in [0, 1], got 2".to_string());
    assert!(err.to_string().contains("configuration error"));
    assert!(err.to_string().contains("threshold"));
}

#[test]
fn test_malformed_post_display() {
    let err = StanceError::MalformedPost {
        index: 7,
        reason: "missing text field".to_string(),
    };
    let message = err.to_string();
    assert!(message.contains('7'));
    assert!(message.contains("missing text field"));
}

#[test]
fn test_result_alias() {
    fn returns_error() -> Result<()> {
        Err(StanceError::InvalidInput("expected an array of posts".into()))
    }
    assert!(returns_error().is_err());
}

#[test]
fn test_from_json_error() {
    let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let err: StanceError = json_err.into();
    assert!(matches!(err, StanceError::Json(_)));
}

#[test]
fn test_from_io_error() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
    let err: StanceError = io_err.into();
    assert!(matches!(err, StanceError::Io(_)));
}

// ============================================================================
// Fatal error classification
// ============================================================================

#[test]
fn malformed_post_is_not_fatal() {
    let err = StanceError::MalformedPost {
        index: 0,
        reason: "text field is not a string".into(),
    };
    assert!(!err.is_fatal());
}

#[test]
fn fatal_errors() {
    assert!(StanceError::Configuration("bad".into()).is_fatal());
    assert!(StanceError::InvalidInput("bad".into()).is_fatal());
    assert!(StanceError::Io(std::io::Error::other("disk")).is_fatal());
}
