//! Evaluation configuration.
//!
//! Defaults come from `constants`; a JSON document may override any subset
//! of fields.

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::error::{Result, ScenarioError};

/// Tuning parameters shared by every evaluation of a scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvaluationConfig {
    /// Half angle of the head-on sector (radians).
    pub head_on_half_angle: f64,
    /// Bow-to-stern-sector boundary (radians from the bow).
    pub beam_sector_limit: f64,
    /// Metres per unit of visibility/collision penalty.
    pub distance_scale: f64,
    /// m/s per unit of dimension penalty.
    pub speed_scale: f64,
    /// Half-width of the x/y bounds box around own ship (metres).
    pub max_distance: f64,
    /// Totals at or below this count as satisfied.
    pub zero_tolerance: f64,
    /// Pin own ship to the origin heading north (zero-width bounds).
    pub fixed_own_ship: bool,
}

impl Default for EvaluationConfig {
    fn default() -> Self {
        Self {
            head_on_half_angle: HEAD_ON_HALF_ANGLE,
            beam_sector_limit: BEAM_SECTOR_LIMIT,
            distance_scale: DISTANCE_SCALE,
            speed_scale: SPEED_SCALE,
            max_distance: MAX_DISTANCE,
            zero_tolerance: 0.0,
            fixed_own_ship: true,
        }
    }
}

impl EvaluationConfig {
    /// Parse a (possibly partial) JSON document and validate it.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: EvaluationConfig = serde_json::from_str(json)
            .map_err(|e| ScenarioError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every parameter is usable.
    pub fn validate(&self) -> Result<()> {
        let pi = std::f64::consts::PI;
        if !(self.head_on_half_angle > 0.0 && self.head_on_half_angle < self.beam_sector_limit) {
            return Err(ScenarioError::InvalidConfig(format!(
                "head_on_half_angle {} must lie in (0, beam_sector_limit)",
                self.head_on_half_angle
            )));
        }
        if !(self.beam_sector_limit < pi) {
            return Err(ScenarioError::InvalidConfig(format!(
                "beam_sector_limit {} must be below pi",
                self.beam_sector_limit
            )));
        }
        for (name, value) in [
            ("distance_scale", self.distance_scale),
            ("speed_scale", self.speed_scale),
            ("max_distance", self.max_distance),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ScenarioError::InvalidConfig(format!(
                    "{name} must be positive and finite, got {value}"
                )));
            }
        }
        if !(self.zero_tolerance >= 0.0) {
            return Err(ScenarioError::InvalidConfig(format!(
                "zero_tolerance must be non-negative, got {}",
                self.zero_tolerance
            )));
        }
        Ok(())
    }
}
