//! Core types and definitions for COLREGS encounter scenarios.
//!
//! This crate defines the vocabulary shared across all other crates:
//! actor variables, kinematic values, literal and relation kinds,
//! configuration, errors, and constants. It performs no evaluation itself.

pub mod config;
pub mod constants;
pub mod enums;
pub mod error;
pub mod types;
pub mod visibility;

pub use config::EvaluationConfig;
pub use error::{Result, ScenarioError};
pub use types::{ActorVariable, KinematicEnvelope, Values};

#[cfg(test)]
mod tests;
