//! Seeded random search over a logical scenario.
//!
//! Each round mixes uniform samples from the scenario bounds with
//! perturbations of the best candidate so far, scores the whole batch through
//! `LogicalScenario::score_batch`, and keeps the lowest penalty. The step
//! halves after a round without improvement. All randomness is drawn on the
//! calling thread from one `ChaCha8Rng`, so a seed fully determines the run.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use colregs_core::error::Result;
use colregs_core::types::Values;
use colregs_eval::{Assignments, LogicalScenario, Penalty};

use crate::config::SearchConfig;
use crate::sampler;

/// Best candidate found by a search run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchOutcome {
    /// Whether `penalty` is within the scenario's zero tolerance.
    pub satisfied: bool,
    /// Number of candidates scored.
    pub iterations: usize,
    /// Candidates rejected with an evaluation error.
    pub invalid: usize,
    pub penalty: Penalty,
    /// Best flat decision vector.
    pub decision_vector: Vec<f64>,
    /// `decision_vector` decoded per vessel.
    pub vessels: Vec<Values>,
}

pub struct ScenarioSearch<'a> {
    scenario: &'a LogicalScenario,
    config: SearchConfig,
    rng: ChaCha8Rng,
}

impl<'a> ScenarioSearch<'a> {
    pub fn new(scenario: &'a LogicalScenario, config: SearchConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            scenario,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            config,
        })
    }

    /// Run until a satisfying candidate is found or the budget is spent.
    pub fn run(&mut self) -> SearchOutcome {
        let scenario = self.scenario;
        let (lower, upper) = scenario.bounds();
        let mut best: Option<(Vec<f64>, Penalty)> = None;
        let mut step = self.config.initial_step;
        let mut iterations = 0;
        let mut invalid = 0;

        tracing::info!(
            vessels = scenario.vessel_count(),
            seed = self.config.seed,
            budget = self.config.max_iterations,
            "starting scenario search"
        );

        while iterations < self.config.max_iterations {
            let size = self
                .config
                .batch_size
                .min(self.config.max_iterations - iterations);
            let batch: Vec<Vec<f64>> = (0..size)
                .map(|_| match &best {
                    Some((center, _)) if !self.rng.gen_bool(self.config.exploration) => {
                        sampler::perturb(&mut self.rng, center, lower, upper, step)
                    }
                    _ => sampler::uniform(&mut self.rng, lower, upper),
                })
                .collect();
            iterations += size;

            let scores = scenario.score_batch(&batch);
            let mut improved = false;
            for (candidate, result) in batch.into_iter().zip(scores) {
                let penalty = result.unwrap_or_else(|err| {
                    invalid += 1;
                    Penalty::invalid(err.to_string())
                });
                let better = best
                    .as_ref()
                    .map_or(true, |(_, incumbent)| penalty.total() < incumbent.total());
                if better {
                    best = Some((candidate, penalty));
                    improved = true;
                }
            }

            if let Some((_, penalty)) = &best {
                if scenario.is_satisfied(penalty) {
                    break;
                }
            }
            if !improved {
                step *= 0.5;
                if step < self.config.min_step {
                    step = self.config.initial_step;
                }
            }
        }

        if invalid > 0 {
            tracing::warn!(invalid, "candidates rejected with evaluation errors");
        }

        let (decision_vector, penalty) =
            best.unwrap_or_else(|| (Vec::new(), Penalty::invalid("no candidates scored")));
        let satisfied = scenario.is_satisfied(&penalty);
        let vessels = Assignments::decode(&decision_vector, scenario.actor_variables())
            .map(|a| a.iter().map(|(_, values)| *values).collect())
            .unwrap_or_default();

        if satisfied {
            tracing::info!(iterations, "found satisfying instance");
        } else {
            tracing::warn!(iterations, best = penalty.total(), "search budget exhausted");
        }

        SearchOutcome {
            satisfied,
            iterations,
            invalid,
            penalty,
            decision_vector,
            vessels,
        }
    }
}
