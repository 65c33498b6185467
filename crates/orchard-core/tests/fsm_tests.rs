// Rust guideline compliant 2026-10-18

//! Unit tests for the FSM module.
//!
//! These tests validate the forward-only lifecycle of a fruit.

use orchard_core::{Error, Status};

#[test]
fn test_growing_to_ready() {
    assert!(
        Status::Growing.can_transition_to(Status::Ready).is_ok(),
        "Should allow Growing → Ready"
    );
}

#[test]
fn test_ready_cannot_regress() {
    let result = Status::Ready.can_transition_to(Status::Growing);
    assert!(
        matches!(result, Err(Error::InvalidState(_))),
        "Should reject Ready → Growing"
    );
}

#[test]
fn test_self_transitions_rejected() {
    assert!(Status::Growing.can_transition_to(Status::Growing).is_err());
    assert!(Status::Ready.can_transition_to(Status::Ready).is_err());
}

#[test]
fn test_valid_transitions() {
    assert_eq!(Status::Growing.valid_transitions(), vec![Status::Ready]);
    assert!(Status::Ready.valid_transitions().is_empty());
}

#[test]
fn test_ready_is_terminal() {
    assert!(Status::Ready.is_terminal());
    assert!(!Status::Growing.is_terminal());
}

#[test]
fn test_status_wire_names() {
    assert_eq!(Status::Growing.to_string(), "growing");
    assert_eq!(
        serde_json::to_string(&Status::Ready).unwrap(),
        "\"ready\""
    );
    let parsed: Status = serde_json::from_str("\"growing\"").unwrap();
    assert_eq!(parsed, Status::Growing);
}
