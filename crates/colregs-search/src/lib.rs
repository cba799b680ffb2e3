//! Reference search backend for COLREGS logical scenarios.
//!
//! Seeded sampling over a scenario's bounds, scoring candidates through
//! `LogicalScenario::score_batch` until a zero penalty is found or the
//! iteration budget runs out.

pub mod config;
pub mod sampler;
pub mod search;

pub use colregs_eval as eval;
pub use config::SearchConfig;
pub use search::{ScenarioSearch, SearchOutcome};
