//! Relation constraint tree.
//!
//! A tree of literals under conjunctions (`Term`, penalty = sum) and
//! disjunctions (`Clause`, penalty = minimum). Evaluation is a single
//! recursive match over the variants; children are visited in declared order
//! and the first error aborts.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use colregs_core::config::EvaluationConfig;
use colregs_core::enums::LiteralKind;
use colregs_core::error::{Result, ScenarioError};

use crate::cache::EvaluationCache;
use crate::literal::Literal;
use crate::penalty::Penalty;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ConstraintNode {
    Literal(Literal),
    /// All children must hold. Empty is vacuously true.
    Term(Vec<ConstraintNode>),
    /// At least one child must hold. Never empty once validated.
    Clause(Vec<ConstraintNode>),
}

impl ConstraintNode {
    /// `subject kind object`.
    pub fn literal(kind: LiteralKind, subject: usize, object: usize) -> Self {
        ConstraintNode::Literal(Literal::new(kind, subject, object))
    }

    /// `not (subject kind object)`.
    pub fn not(kind: LiteralKind, subject: usize, object: usize) -> Self {
        ConstraintNode::Literal(Literal::new(kind, subject, object).negate())
    }

    pub fn term(children: Vec<ConstraintNode>) -> Self {
        ConstraintNode::Term(children)
    }

    /// Disjunction over `children`; rejects an empty list.
    pub fn clause(children: Vec<ConstraintNode>) -> Result<Self> {
        if children.is_empty() {
            return Err(ScenarioError::EmptyClause);
        }
        Ok(ConstraintNode::Clause(children))
    }

    /// Penalty of this subtree for the assignment behind `cache`.
    pub fn evaluate(
        &self,
        cache: &mut EvaluationCache<'_>,
        config: &EvaluationConfig,
    ) -> Result<Penalty> {
        match self {
            ConstraintNode::Literal(literal) => literal.evaluate(cache, config),
            ConstraintNode::Term(children) => {
                let mut total = Penalty::zero();
                for child in children {
                    total += child.evaluate(cache, config)?;
                }
                Ok(total)
            }
            ConstraintNode::Clause(children) => {
                let mut best: Option<Penalty> = None;
                for child in children {
                    let penalty = child.evaluate(cache, config)?;
                    // Strict comparison keeps the first minimum
                    let better = match &best {
                        Some(current) => penalty.total() < current.total(),
                        None => true,
                    };
                    if better {
                        best = Some(penalty);
                    }
                }
                best.ok_or(ScenarioError::EmptyClause)
            }
        }
    }

    /// Check the structural invariants of a tree built outside the
    /// constructors (e.g. deserialized): no empty clause, no literal relating
    /// an actor to itself.
    pub fn validate(&self) -> Result<()> {
        match self {
            ConstraintNode::Literal(literal) => {
                if literal.subject == literal.object {
                    return Err(ScenarioError::MalformedTopology(format!(
                        "literal {literal} relates an actor to itself"
                    )));
                }
                Ok(())
            }
            ConstraintNode::Term(children) => children.iter().try_for_each(|c| c.validate()),
            ConstraintNode::Clause(children) => {
                if children.is_empty() {
                    return Err(ScenarioError::EmptyClause);
                }
                children.iter().try_for_each(|c| c.validate())
            }
        }
    }

    /// Every literal in declared order.
    pub fn literals(&self) -> Vec<&Literal> {
        let mut out = Vec::new();
        self.collect_literals(&mut out);
        out
    }

    fn collect_literals<'s>(&'s self, out: &mut Vec<&'s Literal>) {
        match self {
            ConstraintNode::Literal(literal) => out.push(literal),
            ConstraintNode::Term(children) | ConstraintNode::Clause(children) => {
                for child in children {
                    child.collect_literals(out);
                }
            }
        }
    }

    /// Actor ids referenced anywhere in the tree.
    pub fn actor_ids(&self) -> BTreeSet<usize> {
        self.literals()
            .into_iter()
            .flat_map(|l| [l.subject, l.object])
            .collect()
    }

    /// Structural normal form: symmetric literals ordered, commutative
    /// children sorted and deduplicated, single-child composites and nested
    /// composites of the same kind flattened. Two trees with equal canonical
    /// forms are satisfied by exactly the same assignments.
    pub fn canonical(&self) -> Self {
        match self {
            ConstraintNode::Literal(literal) => ConstraintNode::Literal(literal.canonical()),
            ConstraintNode::Term(children) => {
                let mut flat = Vec::new();
                for child in children.iter().map(|c| c.canonical()) {
                    match child {
                        ConstraintNode::Term(inner) => flat.extend(inner),
                        other => flat.push(other),
                    }
                }
                flat.sort();
                flat.dedup();
                if flat.len() == 1 {
                    flat.remove(0)
                } else {
                    ConstraintNode::Term(flat)
                }
            }
            ConstraintNode::Clause(children) => {
                let mut flat = Vec::new();
                for child in children.iter().map(|c| c.canonical()) {
                    match child {
                        ConstraintNode::Clause(inner) => flat.extend(inner),
                        other => flat.push(other),
                    }
                }
                flat.sort();
                flat.dedup();
                if flat.len() == 1 {
                    flat.remove(0)
                } else {
                    ConstraintNode::Clause(flat)
                }
            }
        }
    }

    /// Number of nodes in the tree.
    pub fn size(&self) -> usize {
        match self {
            ConstraintNode::Literal(_) => 1,
            ConstraintNode::Term(children) | ConstraintNode::Clause(children) => {
                1 + children.iter().map(|c| c.size()).sum::<usize>()
            }
        }
    }
}
