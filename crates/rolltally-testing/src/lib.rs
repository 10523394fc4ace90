//! Testing infrastructure for rolltally integration tests.
//!
//! This crate provides utilities for writing robust integration tests:
//! - `TestWorld`: Isolated temp environment for running the CLI
//! - `assertions`: Invariant checks over aggregation results
//! - `fixtures`: Transcript HTML generation

pub mod assertions;
pub mod fixtures;
pub mod world;

pub use fixtures::{TranscriptBuilder, roll_message};
pub use world::TestWorld;
