//! Flat decision vector ⇄ per-actor state codec.

use serde::{Deserialize, Serialize};

use colregs_core::constants::FIELDS_PER_ACTOR;
use colregs_core::error::{Result, ScenarioError};
use colregs_core::types::{ActorVariable, Values};

/// One decoded state per actor, in `actor_variables` order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assignments {
    entries: Vec<(ActorVariable, Values)>,
}

impl Assignments {
    pub fn new(entries: Vec<(ActorVariable, Values)>) -> Self {
        Self { entries }
    }

    /// Decode blocks of `(x, y, heading, length, speed)`, one per actor.
    pub fn decode(flat: &[f64], actor_variables: &[ActorVariable]) -> Result<Self> {
        let expected = FIELDS_PER_ACTOR * actor_variables.len();
        if flat.len() != expected {
            return Err(ScenarioError::LengthMismatch {
                expected,
                actual: flat.len(),
            });
        }
        let entries = actor_variables
            .iter()
            .zip(flat.chunks_exact(FIELDS_PER_ACTOR))
            .map(|(var, block)| (*var, Values::from_block(block)))
            .collect();
        Ok(Self { entries })
    }

    /// Decode with a fixed own-ship block placed before the searched blocks.
    pub fn decode_with_own_ship(
        own_ship: &[f64; FIELDS_PER_ACTOR],
        rest: &[f64],
        actor_variables: &[ActorVariable],
    ) -> Result<Self> {
        let mut flat = Vec::with_capacity(FIELDS_PER_ACTOR + rest.len());
        flat.extend_from_slice(own_ship);
        flat.extend_from_slice(rest);
        Self::decode(&flat, actor_variables)
    }

    /// Inverse of [`Assignments::decode`].
    pub fn encode(&self) -> Vec<f64> {
        self.entries
            .iter()
            .flat_map(|(_, values)| values.to_block())
            .collect()
    }

    /// State of actor `id`, if assigned.
    pub fn get(&self, id: usize) -> Option<&Values> {
        // Dense ids put actor `id` at index `id`
        match self.entries.get(id) {
            Some((var, values)) if var.id == id => Some(values),
            _ => self
                .entries
                .iter()
                .find(|(var, _)| var.id == id)
                .map(|(_, values)| values),
        }
    }

    pub fn values(&self, id: usize) -> Result<&Values> {
        self.get(id).ok_or(ScenarioError::UnknownActorId(id))
    }

    pub fn iter(&self) -> impl Iterator<Item = &(ActorVariable, Values)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn actors(n: usize) -> Vec<ActorVariable> {
        (0..n)
            .map(|id| {
                if id == 0 {
                    ActorVariable::ego(id)
                } else {
                    ActorVariable::target(id)
                }
            })
            .collect()
    }

    #[test]
    fn test_decode_field_order() {
        let vars = actors(2);
        let flat = [0.0, 0.0, 0.0, 80.0, 6.0, 500.0, 1200.0, 3.0, 40.0, 9.0];
        let assignments = Assignments::decode(&flat, &vars).unwrap();

        let target = assignments.values(1).unwrap();
        assert_eq!(target.x, 500.0);
        assert_eq!(target.y, 1200.0);
        assert_eq!(target.heading, 3.0);
        assert_eq!(target.length, 40.0);
        assert_eq!(target.speed, 9.0);
        assert_eq!(assignments.len(), 2);
    }

    #[test]
    fn test_decode_length_mismatch() {
        let vars = actors(3);
        let err = Assignments::decode(&[0.0; 14], &vars).unwrap_err();
        assert_eq!(
            err,
            ScenarioError::LengthMismatch {
                expected: 15,
                actual: 14
            }
        );
    }

    #[test]
    fn test_encode_inverts_decode() {
        let vars = actors(3);
        let flat: Vec<f64> = (0..15).map(|i| i as f64 * 1.5 + 0.25).collect();
        let assignments = Assignments::decode(&flat, &vars).unwrap();
        assert_eq!(assignments.encode(), flat);
        assert_eq!(Assignments::decode(&assignments.encode(), &vars).unwrap(), assignments);
    }

    #[test]
    fn test_own_ship_prepend() {
        let vars = actors(2);
        let own = [0.0, 0.0, 0.0, 120.0, 8.0];
        let rest = [900.0, 900.0, 4.0, 30.0, 5.0];
        let assignments = Assignments::decode_with_own_ship(&own, &rest, &vars).unwrap();
        assert_eq!(assignments.values(0).unwrap().length, 120.0);
        assert_eq!(assignments.values(1).unwrap().x, 900.0);

        let err = Assignments::decode_with_own_ship(&own, &rest[..4], &vars).unwrap_err();
        assert!(matches!(err, ScenarioError::LengthMismatch { .. }));
    }

    #[test]
    fn test_unknown_actor() {
        let vars = actors(1);
        let assignments = Assignments::decode(&[0.0; 5], &vars).unwrap();
        assert_eq!(assignments.values(3).unwrap_err(), ScenarioError::UnknownActorId(3));
    }
}
