//! Enumeration types used throughout the evaluation engine.

use serde::{Deserialize, Serialize};

/// Role of an actor in an encounter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ActorRole {
    /// The vessel whose behavior is under evaluation (own ship).
    Ego,
    /// Any other vessel taking part in the encounter.
    #[default]
    Target,
}

/// Penalty category a literal reports its violation in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PenaltyCategory {
    /// Distance past (or short of) the light visibility boundary.
    Visibility,
    /// Angular distance past a sector boundary.
    Bearing,
    /// Distance at closest approach past the safety distance.
    Collision,
    /// Kinematic envelope relations such as relative speed.
    Dimension,
}

/// Leaf predicate kinds of the relation constraint tree.
///
/// Every literal is binary: it relates a `subject` actor to an `object` actor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LiteralKind {
    /// The pair is within mutual light visibility range.
    AtVisibility,
    /// The pair's future closest approach is inside the safety distance.
    MayCollide,
    /// Subject is inside the object's head-on sector.
    InHeadOnSectorOf,
    /// Subject is inside the object's port-side sector.
    InPortSideSectorOf,
    /// Subject is inside the object's starboard-side sector.
    InStarboardSideSectorOf,
    /// Subject is inside the object's stern sector.
    InSternSectorOf,
    /// Subject moves faster than the object.
    FasterThan,
}

impl LiteralKind {
    /// Category this literal's violation is reported in.
    pub fn category(self) -> PenaltyCategory {
        match self {
            LiteralKind::AtVisibility => PenaltyCategory::Visibility,
            LiteralKind::MayCollide => PenaltyCategory::Collision,
            LiteralKind::InHeadOnSectorOf
            | LiteralKind::InPortSideSectorOf
            | LiteralKind::InStarboardSideSectorOf
            | LiteralKind::InSternSectorOf => PenaltyCategory::Bearing,
            LiteralKind::FasterThan => PenaltyCategory::Dimension,
        }
    }

    /// Whether swapping subject and object yields the same predicate.
    pub fn is_symmetric(self) -> bool {
        matches!(self, LiteralKind::AtVisibility | LiteralKind::MayCollide)
    }

    /// Short display name.
    pub fn name(self) -> &'static str {
        match self {
            LiteralKind::AtVisibility => "at_vis",
            LiteralKind::MayCollide => "may_collide",
            LiteralKind::InHeadOnSectorOf => "in_head_on_sector_of",
            LiteralKind::InPortSideSectorOf => "in_port_side_sector_of",
            LiteralKind::InStarboardSideSectorOf => "in_starboard_side_sector_of",
            LiteralKind::InSternSectorOf => "in_stern_sector_of",
            LiteralKind::FasterThan => "faster_than",
        }
    }
}

/// Composite binary relations between two vessels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RelationKind {
    /// Reciprocal courses, each vessel dead ahead of the other.
    HeadOn,
    /// First vessel approaches from the second vessel's port side.
    CrossingFromPort,
    /// First vessel comes up from the second vessel's stern and is faster.
    Overtaking,
    /// The vessels see each other's lights.
    Visible,
    /// The vessels are outside each other's light range.
    Invisible,
    /// The vessels are on a collision course.
    Collision,
    /// The vessels pass clear of each other.
    NoCollision,
}

impl RelationKind {
    /// Parse the short names used on the command line and in scenario files.
    pub fn from_name(name: &str) -> Option<Self> {
        let kind = match name {
            "head_on" | "headon" => RelationKind::HeadOn,
            "crossing" | "crossing_from_port" => RelationKind::CrossingFromPort,
            "overtaking" => RelationKind::Overtaking,
            "visible" => RelationKind::Visible,
            "invisible" => RelationKind::Invisible,
            "collision" => RelationKind::Collision,
            "no_collision" => RelationKind::NoCollision,
            _ => return None,
        };
        Some(kind)
    }
}
