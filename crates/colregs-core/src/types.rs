//! Fundamental kinematic types.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::enums::ActorRole;

/// Speed and length limits of one vessel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KinematicEnvelope {
    /// Minimum speed (m/s).
    pub min_speed: f64,
    /// Maximum speed (m/s).
    pub max_speed: f64,
    /// Minimum length overall (m).
    pub min_length: f64,
    /// Maximum length overall (m).
    pub max_length: f64,
}

impl Default for KinematicEnvelope {
    fn default() -> Self {
        Self {
            min_speed: DEFAULT_MIN_SPEED,
            max_speed: DEFAULT_MAX_SPEED,
            min_length: DEFAULT_MIN_LENGTH,
            max_length: DEFAULT_MAX_LENGTH,
        }
    }
}

impl KinematicEnvelope {
    pub fn new(min_speed: f64, max_speed: f64, min_length: f64, max_length: f64) -> Self {
        Self {
            min_speed,
            max_speed,
            min_length,
            max_length,
        }
    }

    /// Whether the limits are finite, positive and ordered.
    pub fn is_valid(&self) -> bool {
        let finite = [self.min_speed, self.max_speed, self.min_length, self.max_length]
            .iter()
            .all(|v| v.is_finite());
        finite
            && self.min_speed >= 0.0
            && self.min_speed <= self.max_speed
            && self.min_length > 0.0
            && self.min_length <= self.max_length
    }
}

/// A vessel taking part in a scenario. Identity is `id`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ActorVariable {
    /// Dense index, 0 is the ego vessel.
    pub id: usize,
    pub role: ActorRole,
    pub envelope: KinematicEnvelope,
}

impl ActorVariable {
    pub fn new(id: usize, role: ActorRole, envelope: KinematicEnvelope) -> Self {
        Self { id, role, envelope }
    }

    /// Own ship with the default envelope.
    pub fn ego(id: usize) -> Self {
        Self::new(id, ActorRole::Ego, KinematicEnvelope::default())
    }

    /// Target vessel with the default envelope.
    pub fn target(id: usize) -> Self {
        Self::new(id, ActorRole::Target, KinematicEnvelope::default())
    }

    pub fn is_ego(&self) -> bool {
        self.role == ActorRole::Ego
    }
}

/// Serialized shape of [`Values`]: only the independent fields.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct RawValues {
    x: f64,
    y: f64,
    heading: f64,
    speed: f64,
    length: f64,
}

/// Instantaneous state of one vessel.
///
/// Position in metres (x = East, y = North), heading in radians
/// (0 = North, clockwise), speed in m/s, length overall in metres.
/// Derived vectors are computed once at construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawValues", into = "RawValues")]
pub struct Values {
    pub x: f64,
    pub y: f64,
    pub heading: f64,
    pub speed: f64,
    pub length: f64,
    pub position: DVec2,
    pub velocity: DVec2,
    /// Unit vector along the heading. Defined even at zero speed.
    pub unit_velocity: DVec2,
    /// Unit vector pointing to the vessel's port side.
    pub perp_unit_velocity: DVec2,
    /// Half the length overall.
    pub radius: f64,
}

impl Values {
    pub fn new(x: f64, y: f64, heading: f64, speed: f64, length: f64) -> Self {
        let position = DVec2::new(x, y);
        let unit_velocity = DVec2::new(heading.sin(), heading.cos());
        let velocity = unit_velocity * speed;
        if speed.abs() <= EPSILON {
            tracing::trace!(x, y, heading, "degenerate speed, using heading direction");
        }
        Self {
            x,
            y,
            heading,
            speed,
            length,
            position,
            velocity,
            unit_velocity,
            perp_unit_velocity: unit_velocity.perp(),
            radius: length / 2.0,
        }
    }

    /// Speed floored at `EPSILON`, safe as a divisor.
    pub fn speed_floor(&self) -> f64 {
        self.speed.abs().max(EPSILON)
    }

    /// Whether every raw field is finite.
    pub fn is_finite(&self) -> bool {
        [self.x, self.y, self.heading, self.speed, self.length]
            .iter()
            .all(|v| v.is_finite())
    }

    /// Fields in decision-vector order: x, y, heading, length, speed.
    pub fn to_block(&self) -> [f64; FIELDS_PER_ACTOR] {
        let mut block = [0.0; FIELDS_PER_ACTOR];
        block[FIELD_X] = self.x;
        block[FIELD_Y] = self.y;
        block[FIELD_HEADING] = self.heading;
        block[FIELD_LENGTH] = self.length;
        block[FIELD_SPEED] = self.speed;
        block
    }

    /// Inverse of [`Values::to_block`]. `block` must hold `FIELDS_PER_ACTOR` items.
    pub fn from_block(block: &[f64]) -> Self {
        Self::new(
            block[FIELD_X],
            block[FIELD_Y],
            block[FIELD_HEADING],
            block[FIELD_SPEED],
            block[FIELD_LENGTH],
        )
    }
}

impl From<RawValues> for Values {
    fn from(raw: RawValues) -> Self {
        Values::new(raw.x, raw.y, raw.heading, raw.speed, raw.length)
    }
}

impl From<Values> for RawValues {
    fn from(v: Values) -> Self {
        RawValues {
            x: v.x,
            y: v.y,
            heading: v.heading,
            speed: v.speed,
            length: v.length,
        }
    }
}
