//! Error taxonomy for scenario construction and scoring.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScenarioError {
    #[error("decision vector length mismatch: expected {expected}, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("clause has no alternatives")]
    EmptyClause,

    #[error("unknown actor id: {0}")]
    UnknownActorId(usize),

    #[error("malformed scenario topology: {0}")]
    MalformedTopology(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl ScenarioError {
    /// Errors raised while building a scenario, before any search begins.
    pub fn is_construction_error(&self) -> bool {
        match self {
            ScenarioError::EmptyClause => true,
            ScenarioError::MalformedTopology(_) => true,
            ScenarioError::InvalidConfig(_) => true,
            ScenarioError::UnknownActorId(_) => false,
            ScenarioError::LengthMismatch { .. } => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, ScenarioError>;
