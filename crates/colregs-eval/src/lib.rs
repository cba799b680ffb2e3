//! Constraint evaluation engine for COLREGS encounter scenarios.
//!
//! Decodes flat decision vectors into vessel states, evaluates a relation
//! constraint tree against cached pairwise geometry, and returns a
//! `Penalty` that is zero exactly when the requested relations hold.

pub mod assignments;
pub mod cache;
pub mod catalog;
pub mod constraint;
pub mod geometry;
pub mod literal;
pub mod penalty;
pub mod relations;
pub mod scenario;

pub use colregs_core as core;
pub use assignments::Assignments;
pub use cache::EvaluationCache;
pub use catalog::ScenarioCatalog;
pub use constraint::ConstraintNode;
pub use geometry::GeometricProperties;
pub use literal::Literal;
pub use penalty::Penalty;
pub use relations::RelationSpec;
pub use scenario::LogicalScenario;
