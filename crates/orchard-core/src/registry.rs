// Rust guideline compliant 2026-10-18

//! In-memory fruit registry.
//!
//! The registry owns every fruit for the lifetime of the process. Fruits live
//! in a sharded concurrent map, so operations on unrelated fruits do not
//! contend on one global lock. All mutations of a single fruit run inside
//! that fruit's entry guard and are applied as a whole, and reads clone the
//! fruit under a read guard. Readers therefore never observe a half-applied
//! update.

use crate::identity::FruitId;
use crate::models::{Fruit, FruitView, GenerationOutcome, Status};
use crate::rarity::assign_rarity;
use crate::{Error, Result};
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use rand::Rng;
use std::collections::HashMap;
use std::sync::Arc;

/// Attempts made to reserve an unused ID before giving up.
const MAX_ID_ATTEMPTS: usize = 32;

/// Thread-safe registry of every submitted fruit.
///
/// Cloning the registry is cheap; clones share the same underlying map.
#[derive(Clone, Debug, Default)]
pub struct FruitRegistry {
    fruits: Arc<DashMap<FruitId, Fruit>>,
}

impl FruitRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Submits a new fruit, drawing its rarity from the thread-local RNG.
    ///
    /// # Arguments
    ///
    /// * `owner_id` - Submitting user
    /// * `prompt` - Prompt text
    ///
    /// # Returns
    ///
    /// The ID of the new fruit, which starts out `Growing`.
    ///
    /// # Errors
    ///
    /// Returns an error if the prompt is blank or the owner ID is not positive.
    pub fn submit(&self, owner_id: i64, prompt: &str) -> Result<FruitId> {
        self.submit_with_rng(owner_id, prompt, &mut rand::thread_rng())
    }

    /// Submits a new fruit using the given random source for its rarity.
    ///
    /// The rarity is fixed before the fruit is inserted, so no reader can
    /// ever see the fruit without one.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The prompt is blank
    /// - The owner ID is not positive
    /// - No unused ID could be reserved
    pub fn submit_with_rng<R: Rng + ?Sized>(
        &self,
        owner_id: i64,
        prompt: &str,
        rng: &mut R,
    ) -> Result<FruitId> {
        if prompt.trim().is_empty() {
            return Err(Error::InvalidInput("Prompt cannot be empty".to_string()));
        }
        if owner_id <= 0 {
            return Err(Error::InvalidInput(format!(
                "Owner ID must be positive, got {owner_id}"
            )));
        }

        let rarity = assign_rarity(prompt, rng);

        for _ in 0..MAX_ID_ATTEMPTS {
            let id = FruitId::generate();
            if let Entry::Vacant(slot) = self.fruits.entry(id.clone()) {
                slot.insert(Fruit::new(id.clone(), owner_id, prompt.to_string(), rarity));
                return Ok(id);
            }
        }

        Err(Error::InvalidState(format!(
            "Could not reserve a unique fruit ID after {MAX_ID_ATTEMPTS} attempts"
        )))
    }

    /// Routes a finished mesh generation into the fruit.
    ///
    /// Unknown IDs are ignored, since the fruit may never have existed or the
    /// caller may be a stale background task.
    pub fn complete_generation(&self, id: &str) -> GenerationOutcome {
        match self.fruits.get_mut(id) {
            Some(mut fruit) => fruit.complete_generation(),
            None => GenerationOutcome::Unknown,
        }
    }

    /// Returns a consistent snapshot of a fruit.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no fruit has the given ID.
    pub fn get_status(&self, id: &str) -> Result<FruitView> {
        self.fruits
            .get(id)
            .map(|fruit| fruit.view())
            .ok_or_else(|| Error::NotFound(id.to_string()))
    }

    /// Attaches an external mesh ID to a ready fruit.
    ///
    /// Status is left unchanged. Re-sending the mesh ID already attached is
    /// accepted as a no-op.
    ///
    /// # Returns
    ///
    /// A snapshot of the fruit taken under the same guard as the assignment.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The mesh ID is blank
    /// - No fruit has the given ID
    /// - The fruit is still growing, or already carries a different mesh ID
    pub fn assign_mesh(&self, id: &str, mesh_id: &str) -> Result<FruitView> {
        if mesh_id.trim().is_empty() {
            return Err(Error::InvalidInput("Mesh ID cannot be empty".to_string()));
        }

        let mut fruit = self
            .fruits
            .get_mut(id)
            .ok_or_else(|| Error::NotFound(id.to_string()))?;
        fruit.assign_mesh(mesh_id)?;
        Ok(fruit.view())
    }

    /// Returns a full copy of a fruit record, if present.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<Fruit> {
        self.fruits.get(id).map(|fruit| fruit.value().clone())
    }

    /// Returns snapshots of every fruit owned by a user, oldest first.
    #[must_use]
    pub fn list_by_owner(&self, owner_id: i64) -> Vec<FruitView> {
        let mut views: Vec<FruitView> = self
            .fruits
            .iter()
            .filter(|entry| entry.owner_id == owner_id)
            .map(|entry| entry.view())
            .collect();
        views.sort_by(|a, b| {
            a.created_at
                .cmp(&b.created_at)
                .then_with(|| a.fruit_id.cmp(&b.fruit_id))
        });
        views
    }

    /// Counts fruits per status.
    #[must_use]
    pub fn count_by_status(&self) -> HashMap<Status, usize> {
        let mut counts = HashMap::new();
        for entry in self.fruits.iter() {
            *counts.entry(entry.status).or_insert(0) += 1;
        }
        counts
    }

    /// Returns the number of registered fruits.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fruits.len()
    }

    /// Returns true if no fruit has been submitted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fruits.is_empty()
    }
}
