// Rust guideline compliant 2026-10-18

//! Finite State Machine module for fruit status transitions.
//!
//! The lifecycle only moves forward:
//!
//! - Growing → Ready (on generation completion)
//!
//! Every other transition, including staying in the same status, is rejected.

use crate::{Error, Result, Status};

impl Status {
    /// Checks if a transition to the target status is valid.
    ///
    /// # Arguments
    ///
    /// * `target` - The target status to transition to
    ///
    /// # Errors
    ///
    /// Returns `InvalidState` if the transition would regress the fruit or
    /// leave its status unchanged.
    pub fn can_transition_to(&self, target: Status) -> Result<()> {
        match (self, target) {
            (Status::Growing, Status::Ready) => Ok(()),
            (Status::Ready, Status::Growing) => Err(Error::InvalidState(
                "A ready fruit cannot return to growing".to_string(),
            )),
            _ => Err(Error::InvalidState(format!(
                "Cannot transition from {} to {}",
                self, target
            ))),
        }
    }

    /// Returns the list of valid target states for the current status.
    #[must_use]
    pub fn valid_transitions(&self) -> Vec<Status> {
        match self {
            Status::Growing => vec![Status::Ready],
            Status::Ready => Vec::new(),
        }
    }

    /// Returns true if no further status transition is possible.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.valid_transitions().is_empty()
    }
}
