// Rust guideline compliant 2026-10-18

//! Orchard Core Library
//!
//! This crate provides the foundational components for the Orchard fruit lifecycle:
//! - Data models (Fruit, Status, FruitView)
//! - Weighted rarity draw
//! - FSM logic (forward-only status transitions)
//! - Fruit ID generation and validation
//! - Concurrent in-memory registry
//! - Configuration and error types

pub mod config;
pub mod error;
pub mod fsm;
pub mod identity;
pub mod models;
pub mod rarity;
pub mod registry;

pub use config::Config;
pub use error::{Error, Result};
pub use identity::FruitId;
pub use models::{Fruit, FruitView, GenerationOutcome, Status};
pub use rarity::{assign_rarity, rarity_for_roll, Rarity, RARITY_TABLE};
pub use registry::FruitRegistry;
