//! Explicit cache of logical scenarios keyed by topology.
//!
//! One catalog is created per process (or per test) and passed by reference
//! to whatever needs scenarios; there is no global state. Requests are keyed
//! by vessel count and the canonical form of the constraint tree, so
//! reordered or duplicated relation lists share one scenario. That scenario
//! is built from the canonical tree itself: a duplicated relation is
//! counted once, whichever request came first.

use std::collections::HashMap;
use std::sync::Arc;

use colregs_core::config::EvaluationConfig;
use colregs_core::error::Result;

use crate::constraint::ConstraintNode;
use crate::relations::{conjunction, RelationSpec};
use crate::scenario::{default_actors, LogicalScenario};

pub struct ScenarioCatalog {
    config: EvaluationConfig,
    scenarios: HashMap<(usize, ConstraintNode), Arc<LogicalScenario>>,
}

impl ScenarioCatalog {
    pub fn new(config: EvaluationConfig) -> Self {
        Self {
            config,
            scenarios: HashMap::new(),
        }
    }

    /// The shared scenario for `vessel_count` vessels under `relations`,
    /// built on first request.
    pub fn get_or_build(
        &mut self,
        vessel_count: usize,
        relations: &[RelationSpec],
    ) -> Result<Arc<LogicalScenario>> {
        let key = (vessel_count, conjunction(relations).canonical());
        if let Some(scenario) = self.scenarios.get(&key) {
            return Ok(Arc::clone(scenario));
        }
        let scenario = Arc::new(LogicalScenario::new(
            default_actors(vessel_count),
            key.1.clone(),
            self.config.clone(),
        )?);
        tracing::debug!(vessel_count, cached = self.scenarios.len() + 1, "cached new topology");
        self.scenarios.insert(key, Arc::clone(&scenario));
        Ok(scenario)
    }

    /// Number of distinct topologies built so far.
    pub fn len(&self) -> usize {
        self.scenarios.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }

    pub fn clear(&mut self) {
        self.scenarios.clear();
    }

    pub fn config(&self) -> &EvaluationConfig {
        &self.config
    }
}
