//! Per-assignment memo of pairwise geometry.
//!
//! Borrowing the `Assignments` ties the cache's lifetime to exactly one
//! decoded candidate, so geometry can never leak between evaluations.

use std::collections::HashMap;

use colregs_core::config::EvaluationConfig;
use colregs_core::constants::BEAM_SECTOR_LIMIT;
use colregs_core::error::Result;
use colregs_core::types::Values;

use crate::assignments::Assignments;
use crate::geometry::GeometricProperties;

pub struct EvaluationCache<'a> {
    assignments: &'a Assignments,
    beam_limit: f64,
    /// Keyed by `(low_id, high_id)`, geometry oriented low → high.
    pairs: HashMap<(usize, usize), GeometricProperties>,
}

impl<'a> EvaluationCache<'a> {
    /// Cache using the standard masthead arc.
    pub fn new(assignments: &'a Assignments) -> Self {
        Self {
            assignments,
            beam_limit: BEAM_SECTOR_LIMIT,
            pairs: HashMap::new(),
        }
    }

    /// Cache whose visibility ranges follow `config.beam_sector_limit`.
    pub fn with_config(assignments: &'a Assignments, config: &EvaluationConfig) -> Self {
        Self {
            beam_limit: config.beam_sector_limit,
            ..Self::new(assignments)
        }
    }

    pub fn assignments(&self) -> &'a Assignments {
        self.assignments
    }

    /// State of actor `id`.
    pub fn values(&self, id: usize) -> Result<&'a Values> {
        self.assignments.values(id)
    }

    /// Geometry of the ordered pair `(a, b)`: `p12` points from `a` to `b`.
    ///
    /// Computed once per unordered pair; the reverse order is served by
    /// swapping the stored geometry.
    pub fn get(&mut self, a: usize, b: usize) -> Result<GeometricProperties> {
        let key = if a <= b { (a, b) } else { (b, a) };
        let geo = match self.pairs.get(&key) {
            Some(geo) => *geo,
            None => {
                let low = self.assignments.values(key.0)?;
                let high = self.assignments.values(key.1)?;
                let geo = GeometricProperties::compute_with_beam_limit(low, high, self.beam_limit);
                self.pairs.insert(key, geo);
                geo
            }
        };
        Ok(if a <= b { geo } else { geo.swapped() })
    }

    /// Number of pairs computed so far.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use colregs_core::error::ScenarioError;
    use colregs_core::types::ActorVariable;

    use super::*;

    fn three_vessels() -> Assignments {
        let vars = [
            ActorVariable::ego(0),
            ActorVariable::target(1),
            ActorVariable::target(2),
        ];
        let flat = [
            0.0, 0.0, 0.0, 100.0, 8.0, //
            1500.0, 3000.0, 3.5, 60.0, 6.0, //
            -2000.0, 800.0, 1.2, 20.0, 4.0,
        ];
        Assignments::decode(&flat, &vars).unwrap()
    }

    #[test]
    fn test_hit_returns_identical_geometry() {
        let assignments = three_vessels();
        let mut cache = EvaluationCache::new(&assignments);

        let first = cache.get(0, 1).unwrap();
        let second = cache.get(0, 1).unwrap();
        assert_eq!(first, second);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_swapped_order_shares_entry() {
        let assignments = three_vessels();
        let mut cache = EvaluationCache::new(&assignments);

        let forward = cache.get(1, 2).unwrap();
        let backward = cache.get(2, 1).unwrap();
        assert_eq!(cache.len(), 1);
        assert_eq!(forward.p12, -backward.p12);
        assert_eq!(forward.p12, backward.p21);
        assert_eq!(forward.dcpa, backward.dcpa);
        assert_eq!(forward.bearing_2_from_1, backward.bearing_1_from_2);
    }

    #[test]
    fn test_reverse_first_matches_direct_computation() {
        let assignments = three_vessels();
        let mut cache = EvaluationCache::new(&assignments);

        let backward = cache.get(2, 0).unwrap();
        let direct = GeometricProperties::compute(
            assignments.values(2).unwrap(),
            assignments.values(0).unwrap(),
        );
        assert!((backward.p12 - direct.p12).length() < 1e-9);
        assert!((backward.tcpa - direct.tcpa).abs() < 1e-9);
    }

    #[test]
    fn test_unknown_actor_not_cached() {
        let assignments = three_vessels();
        let mut cache = EvaluationCache::new(&assignments);
        assert_eq!(cache.get(0, 9).unwrap_err(), ScenarioError::UnknownActorId(9));
        assert!(cache.is_empty());
    }
}
