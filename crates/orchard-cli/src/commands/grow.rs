// Rust guideline compliant 2026-10-18

//! Implementation of the `orchard grow` command.
//!
//! Runs one fruit through its whole lifecycle: submit, wait for background
//! generation, optionally assign a mesh, then read the final status.

use orchard_app::{
    AppError, AssignMeshResponse, FruitStatusResponse, MeshAssignment, MeshGenerator, Orchard,
    Result, SubmitFruitRequest, SubmitFruitResponse,
};
use serde::Serialize;

/// Everything the command observed, in order.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GrowReport {
    /// Response to the submission.
    pub submitted: SubmitFruitResponse,
    /// Response to the mesh assignment, if one was requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignment: Option<AssignMeshResponse>,
    /// Final status of the fruit.
    pub status: FruitStatusResponse,
}

/// Grows a fruit and reports its lifecycle.
///
/// # Arguments
///
/// * `orchard` - Service to run against
/// * `owner_id` - Submitting user
/// * `prompt` - Prompt text
/// * `mesh_id` - Mesh ID to assign once the fruit is ready
///
/// # Errors
///
/// Returns an error if submission is rejected, generation fails or times
/// out, or the mesh assignment is rejected.
pub async fn execute<G: MeshGenerator>(
    orchard: &Orchard<G>,
    owner_id: i64,
    prompt: String,
    mesh_id: Option<String>,
) -> Result<GrowReport> {
    let mut events = orchard.subscribe();
    let submitted = orchard.submit_fruit(SubmitFruitRequest {
        user_id: Some(owner_id),
        prompt,
    })?;

    let event = orchard
        .wait_for_fruit(&mut events, &submitted.fruit_id)
        .await
        .ok_or_else(|| AppError::GenerationFailed {
            fruit_id: submitted.fruit_id.clone(),
            reason: "generation event channel closed".to_string(),
        })?;
    event.into_result()?;

    let assignment = match mesh_id {
        Some(mesh_id) => Some(
            orchard.assign_mesh(submitted.fruit_id.as_str(), MeshAssignment { mesh_id })?,
        ),
        None => None,
    };

    let status = orchard.get_fruit_status(submitted.fruit_id.as_str())?;

    Ok(GrowReport {
        submitted,
        assignment,
        status,
    })
}
