//! Search backend configuration.

use serde::{Deserialize, Serialize};

use colregs_core::error::{Result, ScenarioError};

/// Configuration for one search run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// RNG seed for determinism. Same seed = same candidates = same result.
    pub seed: u64,
    /// Upper bound on scored candidates.
    pub max_iterations: usize,
    /// Candidates generated and scored per round.
    pub batch_size: usize,
    /// Fraction of each batch drawn uniformly from the bounds; the rest
    /// perturb the best candidate so far.
    pub exploration: f64,
    /// Initial perturbation half-width as a fraction of each bound's width.
    pub initial_step: f64,
    /// Smallest step before it is reset to `initial_step`.
    pub min_step: f64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            max_iterations: 200_000,
            batch_size: 256,
            exploration: 0.25,
            initial_step: 0.1,
            min_step: 1e-4,
        }
    }
}

impl SearchConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ScenarioError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.batch_size == 0 {
            return Err(ScenarioError::InvalidConfig("batch_size must be positive".to_string()));
        }
        if !(0.0..=1.0).contains(&self.exploration) {
            return Err(ScenarioError::InvalidConfig(format!(
                "exploration must lie in [0, 1], got {}",
                self.exploration
            )));
        }
        if !(self.min_step > 0.0 && self.min_step <= self.initial_step && self.initial_step <= 1.0) {
            return Err(ScenarioError::InvalidConfig(format!(
                "steps must satisfy 0 < min_step <= initial_step <= 1, got {} and {}",
                self.min_step, self.initial_step
            )));
        }
        Ok(())
    }
}
