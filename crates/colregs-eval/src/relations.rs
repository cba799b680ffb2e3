//! Composite navigational relations built from literals.
//!
//! Each relation is a `Term` over literals and nested `Clause`s; there is no
//! separate evaluation path for them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use colregs_core::enums::LiteralKind::*;
use colregs_core::enums::{LiteralKind, RelationKind};
use colregs_core::error::ScenarioError;

use crate::constraint::ConstraintNode;

fn lit(kind: LiteralKind, subject: usize, object: usize) -> ConstraintNode {
    ConstraintNode::literal(kind, subject, object)
}

fn not(kind: LiteralKind, subject: usize, object: usize) -> ConstraintNode {
    ConstraintNode::not(kind, subject, object)
}

/// `a` and `b` on reciprocal courses, each in the other's head-on sector.
pub fn head_on(a: usize, b: usize) -> ConstraintNode {
    ConstraintNode::Term(vec![
        lit(AtVisibility, a, b),
        lit(MayCollide, a, b),
        lit(InHeadOnSectorOf, b, a),
        lit(InHeadOnSectorOf, a, b),
    ])
}

/// `a` approaches from `b`'s port side on a crossing course.
pub fn crossing_from_port(a: usize, b: usize) -> ConstraintNode {
    ConstraintNode::Term(vec![
        lit(AtVisibility, a, b),
        lit(MayCollide, a, b),
        lit(InPortSideSectorOf, a, b),
        not(InSternSectorOf, b, a),
        ConstraintNode::Clause(vec![
            not(InHeadOnSectorOf, a, b),
            not(InHeadOnSectorOf, b, a),
        ]),
    ])
}

/// `a` comes up from `b`'s stern sector, faster than `b`, with `b` ahead.
pub fn overtaking(a: usize, b: usize) -> ConstraintNode {
    ConstraintNode::Term(vec![
        lit(AtVisibility, a, b),
        lit(MayCollide, a, b),
        lit(InSternSectorOf, a, b),
        ConstraintNode::Clause(vec![
            lit(InHeadOnSectorOf, b, a),
            lit(InPortSideSectorOf, b, a),
            lit(InStarboardSideSectorOf, b, a),
        ]),
        lit(FasterThan, a, b),
    ])
}

/// Constraint tree of `kind` between `a` and `b`.
pub fn relation(kind: RelationKind, a: usize, b: usize) -> ConstraintNode {
    match kind {
        RelationKind::HeadOn => head_on(a, b),
        RelationKind::CrossingFromPort => crossing_from_port(a, b),
        RelationKind::Overtaking => overtaking(a, b),
        RelationKind::Visible => ConstraintNode::Term(vec![lit(AtVisibility, a, b)]),
        RelationKind::Invisible => ConstraintNode::Term(vec![not(AtVisibility, a, b)]),
        RelationKind::Collision => ConstraintNode::Term(vec![lit(MayCollide, a, b)]),
        RelationKind::NoCollision => ConstraintNode::Term(vec![not(MayCollide, a, b)]),
    }
}

/// A requested relation between two actors, e.g. `head_on:0:1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RelationSpec {
    pub kind: RelationKind,
    pub first: usize,
    pub second: usize,
}

impl RelationSpec {
    pub fn new(kind: RelationKind, first: usize, second: usize) -> Self {
        Self {
            kind,
            first,
            second,
        }
    }

    pub fn to_constraint(&self) -> ConstraintNode {
        relation(self.kind, self.first, self.second)
    }
}

impl FromStr for RelationSpec {
    type Err = ScenarioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(':').collect();
        let malformed = || ScenarioError::MalformedTopology(format!("bad relation spec `{s}`"));
        if parts.len() != 3 {
            return Err(malformed());
        }
        let kind = RelationKind::from_name(parts[0]).ok_or_else(malformed)?;
        let first = parts[1].parse().map_err(|_| malformed())?;
        let second = parts[2].parse().map_err(|_| malformed())?;
        Ok(Self::new(kind, first, second))
    }
}

impl fmt::Display for RelationSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}({}, {})", self.kind, self.first, self.second)
    }
}

/// Root `Term` over a set of relations.
pub fn conjunction(relations: &[RelationSpec]) -> ConstraintNode {
    ConstraintNode::Term(relations.iter().map(|r| r.to_constraint()).collect())
}
