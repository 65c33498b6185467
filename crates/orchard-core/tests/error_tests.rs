// Rust guideline compliant 2026-10-18

//! Unit tests for error types and messages.

use orchard_core::Error;

#[test]
fn test_io_error_formatting() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let error = Error::Io(io_err);
    assert!(
        error.to_string().contains("IO error"),
        "IO error should contain 'IO error' prefix"
    );
}

#[test]
fn test_not_found_error_formatting() {
    let error = Error::NotFound("fruit_0a1b2c3d".to_string());
    let msg = error.to_string();
    assert_eq!(msg, "Fruit not found: fruit_0a1b2c3d");
}

#[test]
fn test_invalid_state_error_formatting() {
    let error = Error::InvalidState("Fruit fruit_0a1b2c3d is not ready yet".to_string());
    let msg = error.to_string();
    assert!(msg.starts_with("Invalid state: "));
    assert!(msg.contains("not ready yet"), "Should preserve context message");
}

#[test]
fn test_invalid_input_error_formatting() {
    let error = Error::InvalidInput("Prompt cannot be empty".to_string());
    assert_eq!(error.to_string(), "Invalid input: Prompt cannot be empty");
}

#[test]
fn test_config_error_formatting() {
    let error = Error::Config("event_buffer must be greater than 0".to_string());
    assert_eq!(
        error.to_string(),
        "Invalid config: event_buffer must be greater than 0"
    );
}

#[test]
fn test_io_error_converts_with_question_mark() {
    fn read_missing() -> orchard_core::Result<String> {
        Ok(std::fs::read_to_string("/definitely/not/here/orchard.toml")?)
    }

    assert!(matches!(read_missing(), Err(Error::Io(_))));
}
