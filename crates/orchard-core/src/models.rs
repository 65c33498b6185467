// Rust guideline compliant 2026-10-18

//! Core data models for Orchard.

use crate::identity::FruitId;
use crate::rarity::Rarity;
use crate::{Error, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Status of a fruit in the lifecycle state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    /// Fruit was submitted and its mesh is still being generated.
    Growing,
    /// Mesh generation finished; a mesh ID may be attached.
    Ready,
}

impl Status {
    /// Returns the lowercase wire name of the status.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Growing => "growing",
            Status::Ready => "ready",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of routing a generation completion into the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationOutcome {
    /// The mesh file was recorded and the fruit became ready.
    Applied {
        /// Derived mesh file name.
        mesh_file: String,
    },
    /// The fruit already had a mesh file; nothing changed.
    AlreadyComplete,
    /// No fruit is registered under the ID; nothing changed.
    Unknown,
}

/// A fruit tracked from submission until it is ready.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fruit {
    /// Unique identifier (format: fruit_XXXXXXXX).
    pub id: FruitId,
    /// Submitting user.
    pub owner_id: i64,
    /// Prompt text the fruit was grown from.
    pub prompt: String,
    /// Current lifecycle status.
    pub status: Status,
    /// Rarity tier drawn once at creation.
    pub rarity: Rarity,
    /// Mesh file written by generation completion.
    #[serde(default)]
    pub mesh_file: Option<String>,
    /// External mesh identifier attached after generation.
    #[serde(default)]
    pub mesh_id: Option<String>,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Time of the last accepted mutation.
    pub updated_at: DateTime<Utc>,
}

impl Fruit {
    /// Creates a new growing fruit with no mesh attached.
    ///
    /// # Arguments
    ///
    /// * `id` - Identifier reserved for the fruit
    /// * `owner_id` - Submitting user
    /// * `prompt` - Prompt text
    /// * `rarity` - Rarity tier computed for the prompt
    ///
    /// # Returns
    ///
    /// A fruit in `Growing` status.
    pub fn new(id: FruitId, owner_id: i64, prompt: String, rarity: Rarity) -> Self {
        let now = Utc::now();
        Self {
            id,
            owner_id,
            prompt,
            status: Status::Growing,
            rarity,
            mesh_file: None,
            mesh_id: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Records the generated mesh file and advances the fruit to `Ready`.
    ///
    /// A fruit keeps the first mesh file it receives. Later completions
    /// leave it untouched and report `AlreadyComplete`.
    pub fn complete_generation(&mut self) -> GenerationOutcome {
        if self.mesh_file.is_some() {
            return GenerationOutcome::AlreadyComplete;
        }

        let mesh_file = self.id.mesh_file_name();
        self.mesh_file = Some(mesh_file.clone());
        if self.status.can_transition_to(Status::Ready).is_ok() {
            self.status = Status::Ready;
        }
        self.updated_at = Utc::now();

        GenerationOutcome::Applied { mesh_file }
    }

    /// Attaches an external mesh identifier.
    ///
    /// # Arguments
    ///
    /// * `mesh_id` - Identifier minted by the external asset registry
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The fruit is still growing
    /// - A different mesh ID is already attached
    pub fn assign_mesh(&mut self, mesh_id: &str) -> Result<()> {
        if self.status != Status::Ready {
            return Err(Error::InvalidState(format!(
                "Fruit {} is not ready yet (status: {})",
                self.id, self.status
            )));
        }

        match self.mesh_id.as_deref() {
            Some(existing) if existing == mesh_id => Ok(()),
            Some(existing) => Err(Error::InvalidState(format!(
                "Fruit {} already has mesh {}",
                self.id, existing
            ))),
            None => {
                self.mesh_id = Some(mesh_id.to_string());
                self.updated_at = Utc::now();
                Ok(())
            }
        }
    }

    /// Returns a read-only snapshot of the fruit.
    ///
    /// The mesh ID is only reported once the fruit is ready.
    #[must_use]
    pub fn view(&self) -> FruitView {
        let mesh_id = match self.status {
            Status::Ready => self.mesh_id.clone(),
            Status::Growing => None,
        };

        FruitView {
            fruit_id: self.id.clone(),
            owner_id: self.owner_id,
            status: self.status,
            prompt: self.prompt.clone(),
            rarity: self.rarity,
            mesh_file: self.mesh_file.clone(),
            mesh_id,
            created_at: self.created_at,
        }
    }
}

/// Consistent snapshot of a fruit as returned by status lookups.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FruitView {
    /// Fruit identifier.
    pub fruit_id: FruitId,
    /// Submitting user.
    pub owner_id: i64,
    /// Current lifecycle status.
    pub status: Status,
    /// Prompt text.
    pub prompt: String,
    /// Rarity tier.
    pub rarity: Rarity,
    /// Mesh file, once generation has completed.
    pub mesh_file: Option<String>,
    /// Mesh ID, present only when ready and assigned.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mesh_id: Option<String>,
    /// Creation time.
    pub created_at: DateTime<Utc>,
}
