//! Error taxonomy.
//!
//! Construction-time errors ([`ConfigError`], [`ValidationError`], summed in
//! [`BuildError`]) abort engine creation; there is no partially usable
//! engine. Predict-time errors ([`InputError`], [`PredictError`]) are
//! returned to the immediate caller and never affect engine state, so a
//! failed call can be retried with corrected inputs.

use thiserror::Error;

/// Structurally malformed configuration.
///
/// Covers syntax and schema problems: invalid JSON, missing required keys,
/// wrong breakpoint arity, non-numeric bounds (all via [`serde_json::Error`]),
/// plus rule shapes serde alone cannot reject.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The document is not valid JSON or does not match the schema.
    #[error("invalid configuration document: {0}")]
    Syntax(#[from] serde_json::Error),

    /// A rule's leaf condition must be exactly one `"variable": "label"` entry.
    #[error("rule {index}: condition leaf must contain exactly one \"variable\": \"label\" entry, found {entries}")]
    MalformedLeaf { index: usize, entries: usize },

    /// A rule's `then` clause must be exactly one `"variable": "label"` entry.
    #[error("rule {index}: consequent must contain exactly one \"variable\": \"label\" entry, found {entries}")]
    MalformedConsequent { index: usize, entries: usize },

    /// An `and`/`or` combinator with no children has no defined fold.
    #[error("rule {index}: \"{combinator}\" combinator has no children")]
    EmptyCombinator {
        index: usize,
        combinator: &'static str,
    },
}

/// Well-formed but semantically invalid configuration.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// Universe bounds must satisfy `min < max`.
    #[error("variable \"{variable}\": universe [{min}, {max}] is empty")]
    EmptyUniverse {
        variable: String,
        min: f64,
        max: f64,
    },

    /// Breakpoints must be non-decreasing: `a <= b <= c`.
    #[error("variable \"{variable}\", label \"{label}\": breakpoints [{a}, {b}, {c}] are not non-decreasing")]
    UnorderedBreakpoints {
        variable: String,
        label: String,
        a: f64,
        b: f64,
        c: f64,
    },

    /// Every breakpoint must lie within the variable's universe.
    #[error("variable \"{variable}\", label \"{label}\": breakpoints [{a}, {c}] extend outside universe [{min}, {max}]")]
    BreakpointsOutsideUniverse {
        variable: String,
        label: String,
        a: f64,
        c: f64,
        min: f64,
        max: f64,
    },

    /// A rule references a variable that is not declared under `memberships`.
    #[error("rule {index} references undeclared variable \"{variable}\"")]
    UnknownVariable { index: usize, variable: String },

    /// A rule references a label the variable does not define.
    #[error("rule {index} references undefined label \"{label}\" on variable \"{variable}\"")]
    UnknownLabel {
        index: usize,
        variable: String,
        label: String,
    },

    /// With no rules there is nothing to infer and no output variable.
    #[error("rule base is empty")]
    EmptyRuleBase,

    /// All rule consequents must target the same output variable.
    #[error("rules disagree on the output variable: \"{first}\" (rule 0) vs \"{other}\" (rule {index})")]
    MixedOutputs {
        first: String,
        other: String,
        index: usize,
    },

    /// The output variable is produced, never consumed; it cannot appear in
    /// an antecedent.
    #[error("rule {index}: output variable \"{variable}\" appears in an antecedent")]
    OutputInAntecedent { index: usize, variable: String },

    /// The output variable's label supports must chain across its whole
    /// universe; otherwise some outputs could never receive membership.
    #[error("output variable \"{variable}\": labels leave the universe uncovered from {from}")]
    CoverageGap { variable: String, from: f64 },
}

/// Any reason engine construction can fail.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// A problem with the inputs handed to `predict`.
///
/// Recoverable: the caller supplies corrected inputs and retries.
#[derive(Debug, Error)]
pub enum InputError {
    /// A declared input variable has no value.
    #[error("missing input for variable \"{0}\"")]
    Missing(String),

    /// Input values must be finite (no NaN or infinity).
    #[error("input \"{variable}\" is not a finite number: {value}")]
    NonFinite { variable: String, value: f64 },

    /// The input name matches no declared input variable. Rejected rather
    /// than ignored so upstream key typos fail loudly.
    #[error("unknown input variable \"{0}\"")]
    Unknown(String),
}

/// Any reason a `predict` call can fail.
#[derive(Debug, Error)]
pub enum PredictError {
    #[error(transparent)]
    Input(#[from] InputError),

    /// No rule fired with positive strength, so the aggregated output set is
    /// identically zero and the centroid is undefined. Deliberately an error
    /// rather than a silent default value.
    #[error("no rule fired: aggregated output membership is zero everywhere")]
    DegenerateOutput,
}
