// Rust guideline compliant 2026-10-18

//! Command implementations for the Orchard CLI.

pub mod grow;
pub mod rarity;
