//! Pairwise encounter geometry.
//!
//! Provides line-of-sight bearings, light visibility range, and closest point
//! of approach (DCPA/TCPA) for two vessels under their current velocities.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use colregs_core::constants::{BEAM_SECTOR_LIMIT, EPSILON};
use colregs_core::types::Values;
use colregs_core::visibility::visibility_by_length;

/// Derived invariants of an ordered vessel pair `(1, 2)`.
///
/// Swapping the pair with [`GeometricProperties::swapped`] yields the same
/// geometry seen from the other vessel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeometricProperties {
    /// Larger of the two vessel radii (m).
    pub safety_distance: f64,
    /// Position of vessel 2 relative to vessel 1.
    pub p12: DVec2,
    /// Position of vessel 1 relative to vessel 2.
    pub p21: DVec2,
    /// Velocity of vessel 1 relative to vessel 2.
    pub v12: DVec2,
    /// Current separation, floored at `EPSILON` (m).
    pub distance: f64,
    /// Unsigned angle between vessel 1's heading and the line of sight to 2.
    pub angle_p12_v1: f64,
    /// Unsigned angle between vessel 2's heading and the line of sight to 1.
    pub angle_p21_v2: f64,
    /// Bearing of vessel 2 off vessel 1's bow, positive to port.
    pub bearing_2_from_1: f64,
    /// Bearing of vessel 1 off vessel 2's bow, positive to port.
    pub bearing_1_from_2: f64,
    /// Range at which both vessels see each other's lights (m).
    pub visibility_range: f64,
    /// Time to closest point of approach (s). Negative when already past.
    pub tcpa: f64,
    /// Distance at the future closest point of approach (m).
    pub dcpa: f64,
}

/// Unsigned angle between a line-of-sight vector and a unit heading.
fn los_angle(los: DVec2, distance: f64, unit_heading: DVec2) -> f64 {
    (los.dot(unit_heading) / distance).clamp(-1.0, 1.0).acos()
}

/// Give `angle` the sign of the side `los` lies on (port positive).
fn signed_bearing(angle: f64, los: DVec2, perp_unit_heading: DVec2) -> f64 {
    if los.dot(perp_unit_heading) >= 0.0 {
        angle
    } else {
        -angle
    }
}

impl GeometricProperties {
    /// Compute the geometry of vessel 1 (`val1`) and vessel 2 (`val2`) with
    /// the standard 112.5° masthead arc.
    pub fn compute(val1: &Values, val2: &Values) -> Self {
        Self::compute_with_beam_limit(val1, val2, BEAM_SECTOR_LIMIT)
    }

    /// Compute the geometry with the masthead arc ending `beam_limit`
    /// radians from the bow.
    ///
    /// Bearings use the heading direction, so a stopped vessel still has a
    /// defined bow. Coincident vessels are held `EPSILON` apart.
    pub fn compute_with_beam_limit(val1: &Values, val2: &Values, beam_limit: f64) -> Self {
        let safety_distance = val1.radius.max(val2.radius);
        let p12 = val2.position - val1.position;
        let p21 = -p12;
        let v12 = val1.velocity - val2.velocity;
        let distance = p12.length().max(EPSILON);

        let angle_p12_v1 = los_angle(p12, distance, val1.unit_velocity);
        let angle_p21_v2 = los_angle(p21, distance, val2.unit_velocity);

        let visibility_range = visibility_by_length(angle_p12_v1, val1.length, beam_limit)
            .min(visibility_by_length(angle_p21_v2, val2.length, beam_limit));

        let rel_speed = v12.length().max(EPSILON);
        let tcpa = p12.dot(v12) / (rel_speed * rel_speed);
        let dcpa = (p21 + v12 * tcpa.max(0.0)).length();

        Self {
            safety_distance,
            p12,
            p21,
            v12,
            distance,
            angle_p12_v1,
            angle_p21_v2,
            bearing_2_from_1: signed_bearing(angle_p12_v1, p12, val1.perp_unit_velocity),
            bearing_1_from_2: signed_bearing(angle_p21_v2, p21, val2.perp_unit_velocity),
            visibility_range,
            tcpa,
            dcpa,
        }
    }

    /// The same geometry with the roles of the two vessels exchanged.
    pub fn swapped(&self) -> Self {
        Self {
            safety_distance: self.safety_distance,
            p12: self.p21,
            p21: self.p12,
            v12: -self.v12,
            distance: self.distance,
            angle_p12_v1: self.angle_p21_v2,
            angle_p21_v2: self.angle_p12_v1,
            bearing_2_from_1: self.bearing_1_from_2,
            bearing_1_from_2: self.bearing_2_from_1,
            visibility_range: self.visibility_range,
            tcpa: self.tcpa,
            dcpa: self.dcpa,
        }
    }

    /// Whether the vessels are getting closer right now.
    pub fn is_closing(&self) -> bool {
        self.tcpa > 0.0
    }
}
