//! Additive penalty structure returned by every evaluation.

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};

use colregs_core::enums::PenaltyCategory;

/// Cost of a configuration, split by category and attributed to actors.
///
/// All components are non-negative. Penalties compare and order by
/// [`Penalty::total`] only.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Penalty {
    pub visibility: f64,
    pub bearing: f64,
    pub collision: f64,
    pub dimension: f64,
    /// Share of the total attributed to each actor id.
    pub per_actor: BTreeMap<usize, f64>,
    /// Human-readable list of violated literals.
    pub note: String,
}

impl Penalty {
    pub fn zero() -> Self {
        Self::default()
    }

    /// Penalty for a candidate that could not be scored at all.
    pub fn invalid(note: impl Into<String>) -> Self {
        Self {
            collision: f64::INFINITY,
            note: note.into(),
            ..Self::default()
        }
    }

    /// A single-category penalty shared evenly by two actors.
    ///
    /// Non-positive values produce a zero penalty; NaN counts as an
    /// infinite violation.
    pub fn single(
        category: PenaltyCategory,
        value: f64,
        actors: (usize, usize),
        note: impl FnOnce() -> String,
    ) -> Self {
        let value = if value.is_nan() { f64::INFINITY } else { value };
        if value <= 0.0 {
            return Self::zero();
        }
        let mut penalty = Self::zero();
        match category {
            PenaltyCategory::Visibility => penalty.visibility = value,
            PenaltyCategory::Bearing => penalty.bearing = value,
            PenaltyCategory::Collision => penalty.collision = value,
            PenaltyCategory::Dimension => penalty.dimension = value,
        }
        let half = value / 2.0;
        *penalty.per_actor.entry(actors.0).or_insert(0.0) += half;
        *penalty.per_actor.entry(actors.1).or_insert(0.0) += half;
        penalty.note = note();
        penalty
    }

    /// Sum of the four categories.
    pub fn total(&self) -> f64 {
        self.visibility + self.bearing + self.collision + self.dimension
    }

    pub fn category(&self, category: PenaltyCategory) -> f64 {
        match category {
            PenaltyCategory::Visibility => self.visibility,
            PenaltyCategory::Bearing => self.bearing,
            PenaltyCategory::Collision => self.collision,
            PenaltyCategory::Dimension => self.dimension,
        }
    }

    /// Exactly satisfied.
    pub fn is_zero(&self) -> bool {
        self.total() == 0.0
    }

    /// Satisfied up to `tolerance`.
    pub fn is_zero_within(&self, tolerance: f64) -> bool {
        self.total() <= tolerance
    }

    /// Penalty attributed to one actor.
    pub fn actor(&self, id: usize) -> f64 {
        self.per_actor.get(&id).copied().unwrap_or(0.0)
    }
}

impl AddAssign for Penalty {
    fn add_assign(&mut self, rhs: Self) {
        self.visibility += rhs.visibility;
        self.bearing += rhs.bearing;
        self.collision += rhs.collision;
        self.dimension += rhs.dimension;
        for (id, value) in rhs.per_actor {
            *self.per_actor.entry(id).or_insert(0.0) += value;
        }
        if !rhs.note.is_empty() {
            if !self.note.is_empty() {
                self.note.push_str("; ");
            }
            self.note.push_str(&rhs.note);
        }
    }
}

impl Add for Penalty {
    type Output = Penalty;

    fn add(mut self, rhs: Self) -> Self::Output {
        self += rhs;
        self
    }
}

impl Sum for Penalty {
    fn sum<I: Iterator<Item = Penalty>>(iter: I) -> Self {
        iter.fold(Penalty::zero(), |acc, p| acc + p)
    }
}

impl PartialEq for Penalty {
    fn eq(&self, other: &Self) -> bool {
        self.total() == other.total()
    }
}

impl PartialOrd for Penalty {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.total().partial_cmp(&other.total())
    }
}

impl fmt::Display for Penalty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Penalty(total: {:.4}, vis: {:.4}, bearing: {:.4}, collision: {:.4}, dimension: {:.4})",
            self.total(),
            self.visibility,
            self.bearing,
            self.collision,
            self.dimension
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_category_and_attribution() {
        let p = Penalty::single(PenaltyCategory::Bearing, 0.4, (0, 2), || "b".to_string());
        assert_eq!(p.bearing, 0.4);
        assert_eq!(p.total(), 0.4);
        assert_eq!(p.actor(0), 0.2);
        assert_eq!(p.actor(2), 0.2);
        assert_eq!(p.actor(1), 0.0);
        assert_eq!(p.note, "b");
    }

    #[test]
    fn test_single_non_positive_is_zero() {
        let p = Penalty::single(PenaltyCategory::Collision, -3.0, (0, 1), || "x".to_string());
        assert!(p.is_zero());
        assert!(p.per_actor.is_empty());
        assert!(p.note.is_empty());
    }

    #[test]
    fn test_single_nan_is_infinite_violation() {
        let nan = Penalty::single(PenaltyCategory::Collision, f64::NAN, (0, 1), || "x".to_string());
        assert!(!nan.is_zero());
        assert_eq!(nan.collision, f64::INFINITY);
        assert_eq!(nan.total(), f64::INFINITY);
        assert_eq!(nan.actor(0), f64::INFINITY);
        assert_eq!(nan.note, "x");
    }

    #[test]
    fn test_addition_merges() {
        let a = Penalty::single(PenaltyCategory::Visibility, 1.0, (0, 1), || "a".to_string());
        let b = Penalty::single(PenaltyCategory::Collision, 2.0, (1, 2), || "b".to_string());
        let sum = a.clone() + b.clone();

        assert_eq!(sum.total(), a.total() + b.total());
        assert_eq!(sum.actor(0), 0.5);
        assert_eq!(sum.actor(1), 1.5);
        assert_eq!(sum.actor(2), 1.0);
        assert_eq!(sum.note, "a; b");
    }

    #[test]
    fn test_ordering_by_total() {
        let small = Penalty::single(PenaltyCategory::Bearing, 0.5, (0, 1), String::new);
        let same = Penalty::single(PenaltyCategory::Dimension, 0.5, (1, 2), String::new);
        let large = Penalty::single(PenaltyCategory::Visibility, 2.0, (0, 1), String::new);

        assert!(small < large);
        assert_eq!(small, same);
        assert!(Penalty::zero() < small);
    }

    #[test]
    fn test_sum_of_empty_is_zero() {
        let total: Penalty = Vec::<Penalty>::new().into_iter().sum();
        assert!(total.is_zero());
    }

    #[test]
    fn test_invalid_is_worst() {
        let invalid = Penalty::invalid("length mismatch");
        let large = Penalty::single(PenaltyCategory::Visibility, 1e9, (0, 1), String::new);
        assert!(large < invalid);
        assert!(!invalid.is_zero_within(f64::MAX));
    }
}
