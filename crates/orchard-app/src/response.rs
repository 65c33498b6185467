// Rust guideline compliant 2026-10-18

//! Request and response payloads exchanged with the external request layer.

use crate::error::{AppError, ErrorCode};
use orchard_core::{FruitId, FruitView, Rarity, Status};
use serde::{Deserialize, Serialize};

/// Message returned after a successful mesh assignment.
pub const MESH_ASSIGNED_MESSAGE: &str = "Mesh ID assigned";

/// Body of a fruit submission.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitFruitRequest {
    /// Submitting user; required.
    #[serde(default)]
    pub user_id: Option<i64>,
    /// Prompt text; must not be blank.
    pub prompt: String,
}

/// Body of a mesh assignment.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeshAssignment {
    /// Externally minted mesh identifier.
    pub mesh_id: String,
}

/// Response to a fruit submission.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitFruitResponse {
    /// ID of the new fruit.
    pub fruit_id: FruitId,
    /// Initial status; always `growing`.
    pub status: Status,
    /// Rarity tier drawn at creation.
    pub rarity: Rarity,
}

/// Response to a status lookup.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FruitStatusResponse {
    /// Fruit ID.
    pub fruit_id: FruitId,
    /// Current lifecycle status.
    pub status: Status,
    /// Prompt the fruit was submitted with.
    pub prompt: String,
    /// Rarity tier drawn at creation.
    pub rarity: Rarity,
    /// Generated mesh file; `null` until generation completes.
    pub mesh_file: Option<String>,
    /// Assigned mesh ID; omitted unless ready and assigned.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mesh_id: Option<String>,
}

impl From<FruitView> for FruitStatusResponse {
    fn from(view: FruitView) -> Self {
        Self {
            fruit_id: view.fruit_id,
            status: view.status,
            prompt: view.prompt,
            rarity: view.rarity,
            mesh_file: view.mesh_file,
            mesh_id: view.mesh_id,
        }
    }
}

/// Response to a mesh assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignMeshResponse {
    /// Confirmation message.
    pub message: String,
    /// Fruit the mesh was assigned to.
    pub fruit_id: FruitId,
    /// Assigned mesh ID.
    pub mesh_id: String,
}

/// Standard error envelope for service responses.
#[derive(Debug, Serialize)]
pub struct ErrorEnvelope {
    /// Human-readable error message.
    pub error: String,
    /// Stable error code.
    pub code: ErrorCode,
    /// Optional structured details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorEnvelope {
    /// Creates a new error envelope from an application error.
    #[must_use]
    pub fn from_error(error: &AppError) -> Self {
        Self {
            error: error.public_message(),
            code: error.code(),
            details: error.details(),
        }
    }
}
