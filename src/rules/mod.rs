//! Rule representation and inference.
//!
//! Antecedents are tagged expression trees (`Term | And | Or`) built once at
//! load time, so evaluation is a straight fold with no string re-parsing:
//! min over `And`, max over `Or`, membership degree at the leaves. Min/max
//! is the standard deterministic choice; no probabilistic product, so
//! outputs stay reproducible and debuggable.
//!
//! Each rule's consequent shape is clipped at the rule's firing strength and
//! the clipped shapes union by pointwise maximum into one aggregated fuzzy
//! set over the output universe.

mod eval;
mod types;

pub use eval::{aggregate, firing_strength, AggregatedOutput};
pub use types::{Antecedent, Consequent, Rule, RuleBase, Term};
