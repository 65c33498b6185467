// Rust guideline compliant 2026-10-18

//! Orchard CLI library.
//!
//! Command implementations shared by the `orchard` binary and its tests.

pub mod commands;
