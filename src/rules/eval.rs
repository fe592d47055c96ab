//! Antecedent folding and consequent aggregation.

use super::types::{Antecedent, RuleBase};
use crate::membership::{MembershipFunction, Variable};
use std::collections::HashMap;
use tracing::trace;

/// Folds an antecedent expression to a firing strength in [0, 1].
///
/// Leaves evaluate the referenced membership function at the variable's
/// input value; `And` folds with min, `Or` with max. A leaf whose variable
/// has no input value contributes 0 (the facade guarantees inputs are
/// complete before inference starts, so this arm is unreachable in
/// practice but keeps the fold total).
pub fn firing_strength(
    antecedent: &Antecedent,
    variables: &HashMap<String, Variable>,
    inputs: &HashMap<String, f64>,
) -> f64 {
    match antecedent {
        Antecedent::Term(term) => {
            let mf = variables
                .get(&term.variable)
                .and_then(|v| v.functions.get(&term.label));
            match (mf, inputs.get(&term.variable)) {
                (Some(mf), Some(&x)) => mf.degree(x),
                _ => 0.0,
            }
        }
        Antecedent::And(children) => children
            .iter()
            .map(|c| firing_strength(c, variables, inputs))
            .fold(1.0, f64::min),
        Antecedent::Or(children) => children
            .iter()
            .map(|c| firing_strength(c, variables, inputs))
            .fold(0.0, f64::max),
    }
}

/// The aggregated fuzzy output set of one inference pass.
///
/// Holds each fired rule's (strength, consequent shape) pair; the set's
/// degree at any point of the output universe is the pointwise maximum of
/// the clipped shapes. Grouping contributions per label first would give
/// the same result, since max is associative and commutative.
///
/// Call-scoped: borrows the engine's membership functions and is discarded
/// after defuzzification.
#[derive(Debug)]
pub struct AggregatedOutput<'a> {
    clipped: Vec<(f64, &'a MembershipFunction)>,
}

impl AggregatedOutput<'_> {
    /// Degree of the aggregated set at output sample `y`.
    pub fn degree(&self, y: f64) -> f64 {
        self.clipped
            .iter()
            .map(|&(strength, mf)| strength.min(mf.degree(y)))
            .fold(0.0, f64::max)
    }

    /// True when no rule fired with positive strength. The set is then
    /// identically zero and defuzzification is undefined.
    pub fn is_degenerate(&self) -> bool {
        self.clipped.is_empty()
    }

    /// Number of rules that contributed (fired with positive strength).
    pub fn fired_count(&self) -> usize {
        self.clipped.len()
    }
}

/// Runs the inference pass: folds every rule's antecedent and collects the
/// clipped consequent shapes of rules that fired.
///
/// `inputs` must already be validated and clamped by the caller.
pub fn aggregate<'a>(
    base: &RuleBase,
    variables: &'a HashMap<String, Variable>,
    inputs: &HashMap<String, f64>,
) -> AggregatedOutput<'a> {
    let mut clipped = Vec::with_capacity(base.len());

    for (index, rule) in base.rules().iter().enumerate() {
        let strength = firing_strength(&rule.antecedent, variables, inputs);
        trace!(
            rule = index,
            strength,
            consequent = %rule.consequent.label,
            "rule evaluated"
        );
        if strength <= 0.0 {
            continue;
        }
        if let Some(mf) = variables
            .get(&rule.consequent.variable)
            .and_then(|v| v.functions.get(&rule.consequent.label))
        {
            clipped.push((strength, mf));
        }
    }

    AggregatedOutput { clipped }
}
