//! Logical scenario, the scoring entry point for search backends.
//!
//! A `LogicalScenario` is built once per topology (vessel count + requested
//! relations) and is read-only afterwards. Every `score` call decodes its own
//! `Assignments` and builds its own `EvaluationCache`, so candidates may be
//! scored from any number of threads.

use std::f64::consts::TAU;

use rayon::prelude::*;

use colregs_core::config::EvaluationConfig;
use colregs_core::constants::FIELDS_PER_ACTOR;
use colregs_core::enums::ActorRole;
use colregs_core::error::{Result, ScenarioError};
use colregs_core::types::{ActorVariable, KinematicEnvelope};

use crate::assignments::Assignments;
use crate::cache::EvaluationCache;
use crate::constraint::ConstraintNode;
use crate::penalty::Penalty;
use crate::relations::{conjunction, RelationSpec};

#[derive(Debug, Clone)]
pub struct LogicalScenario {
    actor_variables: Vec<ActorVariable>,
    root: ConstraintNode,
    lower_bounds: Vec<f64>,
    upper_bounds: Vec<f64>,
    config: EvaluationConfig,
}

impl LogicalScenario {
    /// Build a scenario over `actor_variables` constrained by `root`.
    ///
    /// Fails on an invalid configuration, non-dense ids, a missing or
    /// misplaced ego, an invalid envelope, an empty clause, or a literal that
    /// names an unknown actor.
    pub fn new(
        actor_variables: Vec<ActorVariable>,
        root: ConstraintNode,
        config: EvaluationConfig,
    ) -> Result<Self> {
        config.validate()?;
        validate_actors(&actor_variables)?;
        root.validate()?;
        if let Some(unknown) = root
            .actor_ids()
            .into_iter()
            .find(|id| *id >= actor_variables.len())
        {
            return Err(ScenarioError::UnknownActorId(unknown));
        }

        let root = match root {
            ConstraintNode::Term(_) => root,
            other => ConstraintNode::Term(vec![other]),
        };
        let (lower_bounds, upper_bounds) = default_bounds(&actor_variables, &config);

        tracing::debug!(
            vessels = actor_variables.len(),
            nodes = root.size(),
            literals = root.literals().len(),
            "built logical scenario"
        );

        Ok(Self {
            actor_variables,
            root,
            lower_bounds,
            upper_bounds,
            config,
        })
    }

    /// Ego (id 0) plus `vessel_count - 1` targets with default envelopes,
    /// constrained by the conjunction of `relations`.
    pub fn from_relations(
        vessel_count: usize,
        relations: &[RelationSpec],
        config: EvaluationConfig,
    ) -> Result<Self> {
        Self::new(default_actors(vessel_count), conjunction(relations), config)
    }

    /// Replace the default search bounds.
    pub fn with_bounds(mut self, lower: Vec<f64>, upper: Vec<f64>) -> Result<Self> {
        let expected = self.all_variable_count();
        for bounds in [&lower, &upper] {
            if bounds.len() != expected {
                return Err(ScenarioError::LengthMismatch {
                    expected,
                    actual: bounds.len(),
                });
            }
        }
        if lower.iter().chain(&upper).any(|b| !b.is_finite()) {
            return Err(ScenarioError::MalformedTopology(
                "bounds must be finite".to_string(),
            ));
        }
        if lower.iter().zip(&upper).any(|(lo, hi)| lo > hi) {
            return Err(ScenarioError::MalformedTopology(
                "lower bound exceeds upper bound".to_string(),
            ));
        }
        self.lower_bounds = lower;
        self.upper_bounds = upper;
        Ok(self)
    }

    /// Penalty of one flat decision vector.
    pub fn score(&self, flat: &[f64]) -> Result<Penalty> {
        let assignments = Assignments::decode(flat, &self.actor_variables)?;
        self.score_assignments(&assignments)
    }

    /// Penalty with a fixed own-ship block placed before `rest`.
    pub fn score_with_own_ship(
        &self,
        own_ship: &[f64; FIELDS_PER_ACTOR],
        rest: &[f64],
    ) -> Result<Penalty> {
        let assignments = Assignments::decode_with_own_ship(own_ship, rest, &self.actor_variables)?;
        self.score_assignments(&assignments)
    }

    /// Penalty of already decoded states.
    pub fn score_assignments(&self, assignments: &Assignments) -> Result<Penalty> {
        let mut cache = EvaluationCache::with_config(assignments, &self.config);
        self.root.evaluate(&mut cache, &self.config)
    }

    /// Score many candidates in parallel. Results are in input order and
    /// identical to calling [`LogicalScenario::score`] on each.
    pub fn score_batch(&self, candidates: &[Vec<f64>]) -> Vec<Result<Penalty>> {
        candidates.par_iter().map(|c| self.score(c)).collect()
    }

    /// Whether `penalty` counts as an exact instance under this configuration.
    pub fn is_satisfied(&self, penalty: &Penalty) -> bool {
        penalty.is_zero_within(self.config.zero_tolerance)
    }

    pub fn vessel_count(&self) -> usize {
        self.actor_variables.len()
    }

    /// Length of the decision vector.
    pub fn all_variable_count(&self) -> usize {
        FIELDS_PER_ACTOR * self.actor_variables.len()
    }

    /// `(lower, upper)` bounds, parallel to the decision vector.
    pub fn bounds(&self) -> (&[f64], &[f64]) {
        (&self.lower_bounds, &self.upper_bounds)
    }

    pub fn lookup(&self, id: usize) -> Result<&ActorVariable> {
        self.actor_variables
            .get(id)
            .filter(|var| var.id == id)
            .ok_or(ScenarioError::UnknownActorId(id))
    }

    pub fn actor_variables(&self) -> &[ActorVariable] {
        &self.actor_variables
    }

    pub fn root(&self) -> &ConstraintNode {
        &self.root
    }

    pub fn config(&self) -> &EvaluationConfig {
        &self.config
    }
}

/// Ego (id 0) plus `vessel_count - 1` targets, all with default envelopes.
pub fn default_actors(vessel_count: usize) -> Vec<ActorVariable> {
    (0..vessel_count)
        .map(|id| {
            let role = if id == 0 {
                ActorRole::Ego
            } else {
                ActorRole::Target
            };
            ActorVariable::new(id, role, KinematicEnvelope::default())
        })
        .collect()
}

/// Ids dense from 0, a single ego at id 0, valid envelopes.
fn validate_actors(actor_variables: &[ActorVariable]) -> Result<()> {
    if actor_variables.is_empty() {
        return Err(ScenarioError::MalformedTopology("scenario has no actors".to_string()));
    }
    for (index, var) in actor_variables.iter().enumerate() {
        if var.id != index {
            return Err(ScenarioError::MalformedTopology(format!(
                "actor at position {index} has id {}; ids must be dense from 0",
                var.id
            )));
        }
        if var.is_ego() != (index == 0) {
            return Err(ScenarioError::MalformedTopology(format!(
                "actor {index} has role {:?}; exactly actor 0 must be the ego",
                var.role
            )));
        }
        if !var.envelope.is_valid() {
            return Err(ScenarioError::MalformedTopology(format!(
                "actor {index} has an invalid envelope: {:?}",
                var.envelope
            )));
        }
    }
    Ok(())
}

/// Per-actor `(x, y, heading, length, speed)` bounds.
fn default_bounds(
    actor_variables: &[ActorVariable],
    config: &EvaluationConfig,
) -> (Vec<f64>, Vec<f64>) {
    let mut lower = Vec::with_capacity(FIELDS_PER_ACTOR * actor_variables.len());
    let mut upper = Vec::with_capacity(FIELDS_PER_ACTOR * actor_variables.len());
    let d = config.max_distance;
    for var in actor_variables {
        let env = &var.envelope;
        if var.is_ego() && config.fixed_own_ship {
            // Own ship at the origin, heading north
            lower.extend_from_slice(&[0.0, 0.0, 0.0, env.min_length, env.min_speed]);
            upper.extend_from_slice(&[0.0, 0.0, 0.0, env.max_length, env.max_speed]);
        } else {
            lower.extend_from_slice(&[-d, -d, 0.0, env.min_length, env.min_speed]);
            upper.extend_from_slice(&[d, d, TAU, env.max_length, env.max_speed]);
        }
    }
    (lower, upper)
}
