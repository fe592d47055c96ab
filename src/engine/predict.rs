//! The predict operation.

use super::types::FuzzyEngine;
use crate::defuzz;
use crate::error::{InputError, PredictError};
use crate::rules;
use std::collections::HashMap;

impl FuzzyEngine {
    /// Runs one inference pass: fuzzify the inputs, fold every rule's
    /// antecedent, aggregate the clipped consequents, and defuzzify by
    /// centroid.
    ///
    /// `inputs` must hold a finite value for every non-output variable
    /// (see [`FuzzyEngine::required_inputs`]). Values outside a variable's
    /// universe are clamped to the nearest bound, which keeps the engine
    /// robust against noisy upstream sensors; unknown input names are
    /// rejected so key typos fail loudly instead of silently dropping a
    /// signal.
    ///
    /// Pure with respect to the engine: no call mutates state, calls are
    /// order-insensitive, and identical inputs produce bit-identical
    /// results.
    ///
    /// # Errors
    ///
    /// [`InputError`] for missing, non-finite, or unknown inputs;
    /// [`PredictError::DegenerateOutput`] when no rule fires with positive
    /// strength (the aggregated set is zero everywhere and has no
    /// centroid).
    pub fn predict(&self, inputs: &HashMap<String, f64>) -> Result<f64, PredictError> {
        for name in inputs.keys() {
            let declared_input =
                self.variables().contains_key(name) && name != self.output_variable();
            if !declared_input {
                return Err(InputError::Unknown(name.clone()).into());
            }
        }

        let mut clamped = HashMap::with_capacity(self.variables().len());
        for (name, variable) in self.variables() {
            if name == self.output_variable() {
                continue;
            }
            let value = *inputs
                .get(name)
                .ok_or_else(|| InputError::Missing(name.clone()))?;
            if !value.is_finite() {
                return Err(InputError::NonFinite {
                    variable: name.clone(),
                    value,
                }
                .into());
            }
            clamped.insert(name.clone(), variable.clamp(value));
        }

        let aggregated = rules::aggregate(self.rules(), self.variables(), &clamped);

        let output = self
            .variables()
            .get(self.output_variable())
            .expect("validated engine declares its output variable");

        defuzz::centroid(|y| aggregated.degree(y), output.universe, self.resolution())
            .ok_or(PredictError::DegenerateOutput)
    }
}
