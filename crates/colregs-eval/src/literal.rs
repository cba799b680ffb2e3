//! Leaf predicates and their violation measures.
//!
//! Each literal and its negation are separate penalty functions over the same
//! geometry. Both are zero on the boundary; off the boundary exactly one of
//! them is positive.

use std::f64::consts::{PI, TAU};

use serde::{Deserialize, Serialize};

use colregs_core::config::EvaluationConfig;
use colregs_core::constants::EPSILON;
use colregs_core::enums::LiteralKind;
use colregs_core::error::Result;
use colregs_core::types::Values;

use crate::cache::EvaluationCache;
use crate::geometry::GeometricProperties;
use crate::penalty::Penalty;

/// A (possibly negated) binary predicate over two actors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Literal {
    pub kind: LiteralKind,
    pub subject: usize,
    pub object: usize,
    #[serde(default)]
    pub negated: bool,
}

/// Arc of signed bearings, `center ± half_width`, port positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sector {
    pub center: f64,
    pub half_width: f64,
}

/// Wrap an angle to `[-PI, PI)`.
fn wrap_angle(angle: f64) -> f64 {
    (angle + PI).rem_euclid(TAU) - PI
}

impl Sector {
    /// Bow sector `[-h, h]`.
    pub fn head_on(config: &EvaluationConfig) -> Self {
        Self {
            center: 0.0,
            half_width: config.head_on_half_angle,
        }
    }

    /// Port sector `[h, limit]`.
    pub fn port(config: &EvaluationConfig) -> Self {
        let (h, limit) = (config.head_on_half_angle, config.beam_sector_limit);
        Self {
            center: (h + limit) / 2.0,
            half_width: (limit - h) / 2.0,
        }
    }

    /// Starboard sector `[-limit, -h]`.
    pub fn starboard(config: &EvaluationConfig) -> Self {
        let port = Self::port(config);
        Self {
            center: -port.center,
            half_width: port.half_width,
        }
    }

    /// Stern sector `|bearing| >= limit`.
    pub fn stern(config: &EvaluationConfig) -> Self {
        Self {
            center: PI,
            half_width: PI - config.beam_sector_limit,
        }
    }

    /// Angular offset of `bearing` from the sector center, `0..=PI`.
    fn offset(&self, bearing: f64) -> f64 {
        wrap_angle(bearing - self.center).abs()
    }

    /// Radians from `bearing` to the sector, zero inside.
    pub fn distance_outside(&self, bearing: f64) -> f64 {
        (self.offset(bearing) - self.half_width).max(0.0)
    }

    /// Radians from `bearing` to the nearest boundary, zero outside.
    pub fn distance_inside(&self, bearing: f64) -> f64 {
        (self.half_width - self.offset(bearing)).max(0.0)
    }

    pub fn contains(&self, bearing: f64) -> bool {
        self.offset(bearing) <= self.half_width
    }
}

/// Sector a sector literal refers to.
fn sector_for(kind: LiteralKind, config: &EvaluationConfig) -> Option<Sector> {
    match kind {
        LiteralKind::InHeadOnSectorOf => Some(Sector::head_on(config)),
        LiteralKind::InPortSideSectorOf => Some(Sector::port(config)),
        LiteralKind::InStarboardSideSectorOf => Some(Sector::starboard(config)),
        LiteralKind::InSternSectorOf => Some(Sector::stern(config)),
        _ => None,
    }
}

/// Violation magnitude of a literal, before category assignment.
///
/// `geo` is oriented subject → object (`p12` points from subject to object).
pub fn violation(
    kind: LiteralKind,
    negated: bool,
    geo: &GeometricProperties,
    subject: &Values,
    object: &Values,
    config: &EvaluationConfig,
) -> f64 {
    match kind {
        LiteralKind::AtVisibility => {
            let vis = geo.visibility_range;
            if negated {
                (vis - geo.distance).max(0.0) / vis.max(EPSILON)
            } else {
                (geo.distance - vis).max(0.0) / config.distance_scale
            }
        }
        LiteralKind::MayCollide => {
            let safety = geo.safety_distance;
            if negated {
                (safety - geo.dcpa).max(0.0) / safety.max(EPSILON)
            } else {
                (geo.dcpa - safety).max(0.0) / config.distance_scale
            }
        }
        LiteralKind::InHeadOnSectorOf
        | LiteralKind::InPortSideSectorOf
        | LiteralKind::InStarboardSideSectorOf
        | LiteralKind::InSternSectorOf => {
            let sector = match sector_for(kind, config) {
                Some(sector) => sector,
                None => return 0.0,
            };
            // Where the subject appears off the object's bow
            let bearing = geo.bearing_1_from_2;
            if negated {
                sector.distance_inside(bearing)
            } else {
                sector.distance_outside(bearing)
            }
        }
        LiteralKind::FasterThan => {
            if negated {
                (subject.speed - object.speed).max(0.0) / config.speed_scale
            } else {
                (object.speed - subject.speed).max(0.0) / config.speed_scale
            }
        }
    }
}

impl Literal {
    pub fn new(kind: LiteralKind, subject: usize, object: usize) -> Self {
        Self {
            kind,
            subject,
            object,
            negated: false,
        }
    }

    pub fn negate(self) -> Self {
        Self {
            negated: !self.negated,
            ..self
        }
    }

    /// Evaluate against one assignment's cached geometry.
    pub fn evaluate(&self, cache: &mut EvaluationCache<'_>, config: &EvaluationConfig) -> Result<Penalty> {
        let geo = cache.get(self.subject, self.object)?;
        let subject = cache.values(self.subject)?;
        let object = cache.values(self.object)?;
        // Non-finite states never satisfy anything, negated or not
        let value = if subject.is_finite() && object.is_finite() {
            violation(self.kind, self.negated, &geo, subject, object, config)
        } else {
            f64::INFINITY
        };
        Ok(Penalty::single(
            self.kind.category(),
            value,
            (self.subject, self.object),
            || self.to_string(),
        ))
    }

    /// Same literal with symmetric operands in ascending order.
    pub fn canonical(&self) -> Self {
        if self.kind.is_symmetric() && self.subject > self.object {
            Self {
                subject: self.object,
                object: self.subject,
                ..*self
            }
        } else {
            *self
        }
    }
}

impl std::fmt::Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.negated {
            write!(f, "not ")?;
        }
        write!(f, "{}({}, {})", self.kind.name(), self.subject, self.object)
    }
}
