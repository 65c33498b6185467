// Rust guideline compliant 2026-10-18

//! Application services for Orchard.
//!
//! This crate wires the core registry to background mesh generation and
//! exposes the operations the external request layer calls: submitting a
//! fruit, reading its status, and assigning a mesh. It also provides
//! stable error codes, response payloads, and logging setup.

pub mod error;
pub mod generation;
pub mod response;
pub mod service;
pub mod telemetry;

pub use error::{AppError, ErrorCode, Result};
pub use generation::{GenerationError, GenerationEvent, MeshGenerator, SimulatedGenerator};
pub use response::{
    AssignMeshResponse, ErrorEnvelope, FruitStatusResponse, MeshAssignment, SubmitFruitRequest,
    SubmitFruitResponse,
};
pub use service::Orchard;
pub use telemetry::init_tracing;
