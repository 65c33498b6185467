// Rust guideline compliant 2026-10-18

//! Orchard service: the entry point used by the external request layer.

use crate::error::{AppError, Result};
use crate::generation::{GenerationEvent, MeshGenerator, SimulatedGenerator};
use crate::response::{
    AssignMeshResponse, FruitStatusResponse, MeshAssignment, SubmitFruitRequest,
    SubmitFruitResponse, MESH_ASSIGNED_MESSAGE,
};
use orchard_core::{Config, FruitId, FruitRegistry, GenerationOutcome, Status};
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::broadcast;
use tokio::time::Instant;
use tracing::{debug, info, warn};

/// Fruit lifecycle service.
///
/// Owns an injected registry and a mesh generator. Every submission spawns a
/// background generation task that completes the fruit later. Cloning the
/// service is cheap and clones share all state.
pub struct Orchard<G = SimulatedGenerator> {
    registry: FruitRegistry,
    generator: Arc<G>,
    events: broadcast::Sender<GenerationEvent>,
    generation_timeout: Duration,
}

impl<G> Clone for Orchard<G> {
    fn clone(&self) -> Self {
        Self {
            registry: self.registry.clone(),
            generator: Arc::clone(&self.generator),
            events: self.events.clone(),
            generation_timeout: self.generation_timeout,
        }
    }
}

impl Orchard<SimulatedGenerator> {
    /// Creates a service with an empty registry and a simulated generator.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            FruitRegistry::new(),
            SimulatedGenerator::new(config.generation_delay()),
            config,
        )
    }
}

impl<G: MeshGenerator> Orchard<G> {
    /// Creates a service around an existing registry and generator.
    ///
    /// # Arguments
    ///
    /// * `registry` - Registry that owns the fruits
    /// * `generator` - Mesh generation provider
    /// * `config` - Supplies the generation timeout and event buffer size
    #[must_use]
    pub fn new(registry: FruitRegistry, generator: G, config: &Config) -> Self {
        let (events, _) = broadcast::channel(config.event_buffer.max(1));
        Self {
            registry,
            generator: Arc::new(generator),
            events,
            generation_timeout: config.generation_timeout(),
        }
    }

    /// Returns the underlying registry.
    #[must_use]
    pub fn registry(&self) -> &FruitRegistry {
        &self.registry
    }

    /// Subscribes to generation events.
    ///
    /// Only events published after subscribing are delivered.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<GenerationEvent> {
        self.events.subscribe()
    }

    /// Waits for the generation result of `fruit_id`.
    ///
    /// Events for other fruits are skipped. The registry is checked before
    /// blocking and whenever the receiver lagged, so a fruit that became
    /// ready while its event was missed still resolves. After a lag, waiting
    /// is bounded by the generation timeout, since a missed failure event can
    /// never be replayed.
    ///
    /// # Returns
    ///
    /// The event, or `None` if the fruit does not exist or the channel
    /// closed first.
    pub async fn wait_for_fruit(
        &self,
        events: &mut broadcast::Receiver<GenerationEvent>,
        fruit_id: &FruitId,
    ) -> Option<GenerationEvent> {
        match self.registry.get_status(fruit_id.as_str()) {
            Ok(view) if view.status == Status::Ready => {
                return Some(Self::already_complete(fruit_id));
            }
            Ok(_) => {}
            Err(_) => return None,
        }

        let mut deadline: Option<Instant> = None;
        loop {
            let received = match deadline {
                Some(at) => match tokio::time::timeout_at(at, events.recv()).await {
                    Ok(received) => received,
                    Err(_) => return Some(self.resolve_after_lag(fruit_id)),
                },
                None => events.recv().await,
            };

            match received {
                Ok(event) if event.fruit_id() == fruit_id => return Some(event),
                Ok(_) => continue,
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    warn!(fruit_id = %fruit_id, skipped, "generation event receiver lagged");
                    if self.is_ready(fruit_id) {
                        return Some(Self::already_complete(fruit_id));
                    }
                    deadline.get_or_insert_with(|| Instant::now() + self.generation_timeout);
                }
                Err(broadcast::error::RecvError::Closed) => return None,
            }
        }
    }

    fn is_ready(&self, fruit_id: &FruitId) -> bool {
        self.registry
            .get_status(fruit_id.as_str())
            .is_ok_and(|view| view.status == Status::Ready)
    }

    fn already_complete(fruit_id: &FruitId) -> GenerationEvent {
        GenerationEvent::Completed {
            fruit_id: fruit_id.clone(),
            outcome: GenerationOutcome::AlreadyComplete,
        }
    }

    fn resolve_after_lag(&self, fruit_id: &FruitId) -> GenerationEvent {
        if self.is_ready(fruit_id) {
            return Self::already_complete(fruit_id);
        }
        GenerationEvent::TimedOut {
            fruit_id: fruit_id.clone(),
            timeout: self.generation_timeout,
        }
    }

    /// Submits a fruit and starts its background generation.
    ///
    /// Returns as soon as the fruit is registered; generation finishes later.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The user ID is missing, or the prompt is blank
    /// - The call is made outside a Tokio runtime
    pub fn submit_fruit(&self, request: SubmitFruitRequest) -> Result<SubmitFruitResponse> {
        let owner_id = request
            .user_id
            .ok_or_else(|| AppError::InvalidInput("userId is required".to_string()))?;
        let runtime = Handle::try_current().map_err(|_| AppError::RuntimeUnavailable)?;

        let fruit_id = self.registry.submit(owner_id, &request.prompt)?;
        let view = self.registry.get_status(fruit_id.as_str())?;
        info!(
            fruit_id = %fruit_id,
            owner_id,
            rarity = %view.rarity,
            "fruit submitted"
        );

        runtime.spawn(self.clone().run_generation(fruit_id.clone(), request.prompt));

        Ok(SubmitFruitResponse {
            fruit_id,
            status: view.status,
            rarity: view.rarity,
        })
    }

    /// Returns the current state of a fruit.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the fruit does not exist.
    pub fn get_fruit_status(&self, fruit_id: &str) -> Result<FruitStatusResponse> {
        let view = self.registry.get_status(fruit_id)?;
        debug!(fruit_id, status = %view.status, "fruit status read");
        Ok(view.into())
    }

    /// Attaches an external mesh ID to a ready fruit.
    ///
    /// # Errors
    ///
    /// Returns an error if the fruit does not exist, is not ready, or already
    /// carries a different mesh ID.
    pub fn assign_mesh(
        &self,
        fruit_id: &str,
        assignment: MeshAssignment,
    ) -> Result<AssignMeshResponse> {
        let view = match self.registry.assign_mesh(fruit_id, &assignment.mesh_id) {
            Ok(view) => view,
            Err(err) => {
                warn!(fruit_id, mesh_id = %assignment.mesh_id, error = %err, "mesh assignment rejected");
                return Err(err.into());
            }
        };
        info!(fruit_id, mesh_id = %assignment.mesh_id, "mesh assigned");

        Ok(AssignMeshResponse {
            message: MESH_ASSIGNED_MESSAGE.to_string(),
            fruit_id: view.fruit_id,
            mesh_id: assignment.mesh_id,
        })
    }

    /// Completion callback for background generation.
    ///
    /// Unknown IDs and repeated completions are benign no-ops.
    pub(crate) fn on_generation_complete(&self, fruit_id: &str) -> GenerationOutcome {
        let outcome = self.registry.complete_generation(fruit_id);
        match &outcome {
            GenerationOutcome::Applied { mesh_file } => {
                info!(fruit_id, mesh_file = %mesh_file, "fruit ready");
            }
            GenerationOutcome::AlreadyComplete => {
                debug!(fruit_id, "duplicate generation completion ignored");
            }
            GenerationOutcome::Unknown => {
                debug!(fruit_id, "generation completed for unknown fruit");
            }
        }
        outcome
    }

    async fn run_generation(self, fruit_id: FruitId, prompt: String) {
        let result = tokio::time::timeout(
            self.generation_timeout,
            self.generator.generate(&fruit_id, &prompt),
        )
        .await;

        let event = match result {
            Ok(Ok(())) => {
                let outcome = self.on_generation_complete(fruit_id.as_str());
                GenerationEvent::Completed { fruit_id, outcome }
            }
            Ok(Err(err)) => {
                warn!(fruit_id = %fruit_id, error = %err, "mesh generation failed");
                GenerationEvent::Failed {
                    fruit_id,
                    reason: err.to_string(),
                }
            }
            Err(_) => {
                let timeout_ms =
                    u64::try_from(self.generation_timeout.as_millis()).unwrap_or(u64::MAX);
                warn!(fruit_id = %fruit_id, timeout_ms, "mesh generation timed out");
                GenerationEvent::TimedOut {
                    fruit_id,
                    timeout: self.generation_timeout,
                }
            }
        };

        // Having no subscribers is fine.
        let _ = self.events.send(event);
    }
}
