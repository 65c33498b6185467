// Rust guideline compliant 2026-10-18

//! Error handling for Orchard application services.

use orchard_core::{Error as CoreError, FruitId};
use serde::Serialize;
use thiserror::Error;

/// Result type alias for application-level operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Stable error codes for service responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// The requested fruit was not found.
    NotFound,
    /// The fruit's status forbids the operation.
    InvalidState,
    /// The request included invalid inputs.
    InvalidInput,
    /// Configuration could not be loaded.
    ConfigError,
    /// IO failure.
    IoError,
    /// The mesh generator reported a failure.
    GenerationFailed,
    /// The mesh generator exceeded its time budget.
    GenerationTimedOut,
    /// No async runtime was available to run background generation.
    RuntimeUnavailable,
}

/// Application-level errors with stable mapping to error codes.
#[derive(Debug, Error)]
pub enum AppError {
    /// Invalid input was provided by the caller.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Error from core library operations.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Mesh generation failed for a fruit.
    #[error("Mesh generation failed for {fruit_id}: {reason}")]
    GenerationFailed {
        /// Fruit whose generation failed.
        fruit_id: FruitId,
        /// Failure reported by the generator.
        reason: String,
    },

    /// Mesh generation did not finish within its timeout.
    #[error("Mesh generation timed out for {fruit_id} after {timeout_ms} ms")]
    GenerationTimedOut {
        /// Fruit whose generation timed out.
        fruit_id: FruitId,
        /// Timeout that elapsed.
        timeout_ms: u64,
    },

    /// Background generation needs a Tokio runtime.
    #[error("No async runtime available to dispatch mesh generation")]
    RuntimeUnavailable,

    /// Invalid log level provided.
    #[error("Invalid log level: {0}")]
    InvalidLogLevel(String),

    /// IO error not represented by core errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Returns a stable error code for the error.
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::InvalidInput(_) => ErrorCode::InvalidInput,
            AppError::GenerationFailed { .. } => ErrorCode::GenerationFailed,
            AppError::GenerationTimedOut { .. } => ErrorCode::GenerationTimedOut,
            AppError::RuntimeUnavailable => ErrorCode::RuntimeUnavailable,
            AppError::InvalidLogLevel(_) => ErrorCode::ConfigError,
            AppError::Io(_) => ErrorCode::IoError,
            AppError::Core(core) => match core {
                CoreError::NotFound(_) => ErrorCode::NotFound,
                CoreError::InvalidState(_) => ErrorCode::InvalidState,
                CoreError::InvalidInput(_) => ErrorCode::InvalidInput,
                CoreError::Config(_) => ErrorCode::ConfigError,
                CoreError::Io(_) => ErrorCode::IoError,
            },
        }
    }

    /// Returns the short message shown to external callers.
    ///
    /// Missing fruits are reported as a plain "not found"; everything else
    /// carries its full message.
    #[must_use]
    pub fn public_message(&self) -> String {
        match self {
            AppError::Core(CoreError::NotFound(_)) => "not found".to_string(),
            other => other.to_string(),
        }
    }

    /// Returns structured details for errors that benefit from extra context.
    #[must_use]
    pub fn details(&self) -> Option<serde_json::Value> {
        match self {
            AppError::Core(CoreError::NotFound(id)) => Some(serde_json::json!({
                "fruitId": id,
            })),
            AppError::GenerationFailed { fruit_id, reason } => Some(serde_json::json!({
                "fruitId": fruit_id,
                "reason": reason,
            })),
            AppError::GenerationTimedOut {
                fruit_id,
                timeout_ms,
            } => Some(serde_json::json!({
                "fruitId": fruit_id,
                "timeoutMs": timeout_ms,
            })),
            _ => None,
        }
    }
}
