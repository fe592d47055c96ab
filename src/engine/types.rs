//! The immutable engine aggregate.

use crate::config;
use crate::defuzz::DEFAULT_RESOLUTION;
use crate::error::BuildError;
use crate::membership::Variable;
use crate::rules::RuleBase;
use std::collections::HashMap;

/// An immutable fuzzy inference engine.
///
/// Holds the validated variable map, the ordered rule base, the output
/// variable name, and the centroid sampling resolution. Every field is
/// fixed at construction; `predict` takes `&self` and creates only
/// call-scoped state, so concurrent unsynchronized reads are safe.
///
/// Construction goes through the config loader, which is the only place
/// invalid configuration is caught. Two states exist: not yet built, and
/// ready; a failed `predict` leaves the engine exactly as ready as before.
///
/// # Examples
///
/// See the crate-level example for a full construct-and-predict round trip.
#[derive(Debug, Clone)]
pub struct FuzzyEngine {
    variables: HashMap<String, Variable>,
    rules: RuleBase,
    output: String,
    resolution: usize,
}

impl FuzzyEngine {
    /// Builds an engine from a JSON configuration document.
    pub fn from_json(source: &str) -> Result<Self, BuildError> {
        config::load_str(source)
    }

    /// Assembles an engine from already-validated parts. Only the config
    /// loader may call this; the validation pass is what makes the
    /// consistency guarantees hold.
    pub(crate) fn from_parts(
        variables: HashMap<String, Variable>,
        rules: RuleBase,
        output: String,
    ) -> Self {
        Self {
            variables,
            rules,
            output,
            resolution: DEFAULT_RESOLUTION,
        }
    }

    /// Sets the centroid sampling resolution (inclusive sample count across
    /// the output universe). Values below 2 are raised to 2. Defaults to
    /// [`DEFAULT_RESOLUTION`].
    pub fn with_resolution(mut self, resolution: usize) -> Self {
        self.resolution = resolution.max(2);
        self
    }

    /// Name of the output variable (the target of every rule consequent).
    pub fn output_variable(&self) -> &str {
        &self.output
    }

    /// Number of rules in the rule base.
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Centroid sampling resolution.
    pub fn resolution(&self) -> usize {
        self.resolution
    }

    /// Names of the variables `predict` requires as inputs: every declared
    /// variable except the output.
    pub fn required_inputs(&self) -> impl Iterator<Item = &str> {
        self.variables
            .keys()
            .filter(move |name| **name != self.output)
            .map(String::as_str)
    }

    pub(crate) fn variables(&self) -> &HashMap<String, Variable> {
        &self.variables
    }

    pub(crate) fn rules(&self) -> &RuleBase {
        &self.rules
    }
}
