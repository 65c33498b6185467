// Rust guideline compliant 2026-10-18

//! Error types for the Orchard core library.

use thiserror::Error;

/// Result type alias for Orchard operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for Orchard operations.
///
/// Every variant is returned as a value. A rejected operation never mutates
/// the registry, and the registry stays usable after any failure.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// No fruit is registered under the given ID.
    #[error("Fruit not found: {0}")]
    NotFound(String),

    /// The fruit's current status forbids the requested operation.
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// Caller-supplied input was rejected.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration could not be parsed or failed validation.
    #[error("Invalid config: {0}")]
    Config(String),
}
