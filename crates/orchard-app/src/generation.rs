// Rust guideline compliant 2026-10-18

//! Background mesh generation.
//!
//! Generation is an opaque, long-running call to an external provider. The
//! service spawns one task per submitted fruit. The task bounds the call with
//! a timeout, routes a success back into the registry, and publishes the
//! result as a `GenerationEvent` on a broadcast channel.

use crate::error::{AppError, Result};
use orchard_core::{FruitId, GenerationOutcome};
use std::future::Future;
use std::time::Duration;
use thiserror::Error;

/// Failure reported by a mesh generator.
#[derive(Debug, Clone, Error)]
pub enum GenerationError {
    /// The provider rejected or failed the request.
    #[error("provider error: {0}")]
    Provider(String),
}

/// External mesh-generation provider.
pub trait MeshGenerator: Send + Sync + 'static {
    /// Generates the mesh for a fruit.
    ///
    /// Returning `Ok` means the mesh is available and the fruit can be
    /// completed. An error leaves the fruit growing.
    fn generate(
        &self,
        fruit_id: &FruitId,
        prompt: &str,
    ) -> impl Future<Output = std::result::Result<(), GenerationError>> + Send;
}

/// Generator that only waits out a fixed latency.
#[derive(Debug, Clone, Copy)]
pub struct SimulatedGenerator {
    delay: Duration,
}

impl SimulatedGenerator {
    /// Creates a generator that succeeds after `delay`.
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// Returns the simulated latency.
    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl MeshGenerator for SimulatedGenerator {
    fn generate(
        &self,
        _fruit_id: &FruitId,
        _prompt: &str,
    ) -> impl Future<Output = std::result::Result<(), GenerationError>> + Send {
        let delay = self.delay;
        async move {
            tokio::time::sleep(delay).await;
            Ok(())
        }
    }
}

/// Result of one background generation task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationEvent {
    /// The generator finished and its result was routed into the registry.
    Completed {
        fruit_id: FruitId,
        outcome: GenerationOutcome,
    },
    /// The generator reported an error; the fruit was left untouched.
    Failed { fruit_id: FruitId, reason: String },
    /// The generator did not finish in time; the fruit was left untouched.
    TimedOut { fruit_id: FruitId, timeout: Duration },
}

impl GenerationEvent {
    /// Returns the fruit the event refers to.
    #[must_use]
    pub fn fruit_id(&self) -> &FruitId {
        match self {
            GenerationEvent::Completed { fruit_id, .. }
            | GenerationEvent::Failed { fruit_id, .. }
            | GenerationEvent::TimedOut { fruit_id, .. } => fruit_id,
        }
    }

    /// Converts the event into the completion outcome.
    ///
    /// # Errors
    ///
    /// Returns `GenerationFailed` or `GenerationTimedOut` for unsuccessful
    /// generations.
    pub fn into_result(self) -> Result<GenerationOutcome> {
        match self {
            GenerationEvent::Completed { outcome, .. } => Ok(outcome),
            GenerationEvent::Failed { fruit_id, reason } => {
                Err(AppError::GenerationFailed { fruit_id, reason })
            }
            GenerationEvent::TimedOut { fruit_id, timeout } => {
                Err(AppError::GenerationTimedOut {
                    fruit_id,
                    timeout_ms: u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX),
                })
            }
        }
    }
}
