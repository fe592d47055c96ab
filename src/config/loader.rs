//! Lowering and validation of the raw configuration.

use super::schema::{RawConfig, RawExpr, RawRule};
use crate::engine::FuzzyEngine;
use crate::error::{BuildError, ConfigError, ValidationError};
use crate::membership::{MembershipFunction, Variable};
use crate::rules::{Antecedent, Consequent, Rule, RuleBase, Term};
use std::collections::HashMap;
use tracing::debug;

/// Parses a JSON configuration document into a ready-to-use engine.
///
/// Fails with [`ConfigError`] on malformed documents and
/// [`ValidationError`] on semantically invalid ones; on success the engine
/// is fully validated and immutable.
pub fn load_str(source: &str) -> Result<FuzzyEngine, BuildError> {
    let raw: RawConfig = serde_json::from_str(source).map_err(ConfigError::from)?;
    build(raw)
}

fn build(raw: RawConfig) -> Result<FuzzyEngine, BuildError> {
    let variables = lower_variables(raw.memberships);
    let rules = lower_rules(raw.rules)?;
    let output = validate(&variables, &rules)?;

    debug!(
        variables = variables.len(),
        rules = rules.len(),
        output = %output,
        "fuzzy engine constructed"
    );

    Ok(FuzzyEngine::from_parts(variables, rules, output))
}

fn lower_variables(
    memberships: HashMap<String, super::schema::RawVariable>,
) -> HashMap<String, Variable> {
    memberships
        .into_iter()
        .map(|(name, raw)| {
            let functions = raw
                .functions
                .into_iter()
                .map(|(label, [a, b, c])| (label, MembershipFunction::new(a, b, c)))
                .collect();
            let variable = Variable {
                name: name.clone(),
                universe: (raw.universe[0], raw.universe[1]),
                functions,
            };
            (name, variable)
        })
        .collect()
}

fn lower_rules(raw: Vec<RawRule>) -> Result<RuleBase, ConfigError> {
    let mut rules = Vec::with_capacity(raw.len());
    for (index, rule) in raw.into_iter().enumerate() {
        let antecedent = lower_expr(rule.condition, index)?;

        if rule.then.len() != 1 {
            return Err(ConfigError::MalformedConsequent {
                index,
                entries: rule.then.len(),
            });
        }
        let (variable, label) = rule.then.into_iter().next().unwrap_or_default();

        rules.push(Rule {
            antecedent,
            consequent: Consequent { variable, label },
        });
    }
    Ok(RuleBase::new(rules))
}

fn lower_expr(expr: RawExpr, index: usize) -> Result<Antecedent, ConfigError> {
    match expr {
        RawExpr::And { and } => {
            if and.is_empty() {
                return Err(ConfigError::EmptyCombinator {
                    index,
                    combinator: "and",
                });
            }
            let children = and
                .into_iter()
                .map(|child| lower_expr(child, index))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(Antecedent::And(children))
        }
        RawExpr::Or { or } => {
            if or.is_empty() {
                return Err(ConfigError::EmptyCombinator {
                    index,
                    combinator: "or",
                });
            }
            let children = or
                .into_iter()
                .map(|child| lower_expr(child, index))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(Antecedent::Or(children))
        }
        RawExpr::Leaf(entries) => {
            if entries.len() != 1 {
                return Err(ConfigError::MalformedLeaf {
                    index,
                    entries: entries.len(),
                });
            }
            let (variable, label) = entries.into_iter().next().unwrap_or_default();
            Ok(Antecedent::Term(Term { variable, label }))
        }
    }
}

/// The single static validation pass. Returns the output variable name.
fn validate(
    variables: &HashMap<String, Variable>,
    rules: &RuleBase,
) -> Result<String, ValidationError> {
    for variable in variables.values() {
        let (min, max) = variable.universe;
        if min >= max {
            return Err(ValidationError::EmptyUniverse {
                variable: variable.name.clone(),
                min,
                max,
            });
        }
        for (label, mf) in &variable.functions {
            if !(mf.a <= mf.b && mf.b <= mf.c) {
                return Err(ValidationError::UnorderedBreakpoints {
                    variable: variable.name.clone(),
                    label: label.clone(),
                    a: mf.a,
                    b: mf.b,
                    c: mf.c,
                });
            }
            if mf.a < min || mf.c > max {
                return Err(ValidationError::BreakpointsOutsideUniverse {
                    variable: variable.name.clone(),
                    label: label.clone(),
                    a: mf.a,
                    c: mf.c,
                    min,
                    max,
                });
            }
        }
    }

    let first = rules.rules().first().ok_or(ValidationError::EmptyRuleBase)?;
    let output = first.consequent.variable.clone();

    // Output consistency first, so a rule base targeting two different
    // variables reports that instead of a downstream reference error.
    for (index, rule) in rules.rules().iter().enumerate() {
        if rule.consequent.variable != output {
            return Err(ValidationError::MixedOutputs {
                first: output.clone(),
                other: rule.consequent.variable.clone(),
                index,
            });
        }
    }

    for (index, rule) in rules.rules().iter().enumerate() {
        resolve(variables, &rule.consequent.variable, &rule.consequent.label, index)?;

        for term in rule.antecedent.terms() {
            if term.variable == output {
                return Err(ValidationError::OutputInAntecedent {
                    index,
                    variable: term.variable.clone(),
                });
            }
            resolve(variables, &term.variable, &term.label, index)?;
        }
    }

    let out_var = variables
        .get(&output)
        .ok_or_else(|| ValidationError::UnknownVariable {
            index: 0,
            variable: output.clone(),
        })?;
    check_output_coverage(out_var)?;

    Ok(output)
}

fn resolve(
    variables: &HashMap<String, Variable>,
    variable: &str,
    label: &str,
    index: usize,
) -> Result<(), ValidationError> {
    let var = variables
        .get(variable)
        .ok_or_else(|| ValidationError::UnknownVariable {
            index,
            variable: variable.to_string(),
        })?;
    if !var.functions.contains_key(label) {
        return Err(ValidationError::UnknownLabel {
            index,
            variable: variable.to_string(),
            label: label.to_string(),
        });
    }
    Ok(())
}

/// Checks that the output labels' supports chain across the whole universe.
///
/// Works on the closed supports `[a, c]` rather than sampled degrees, so
/// adjacent triangles whose feet touch (zero membership at one isolated
/// point) still count as covering.
fn check_output_coverage(output: &Variable) -> Result<(), ValidationError> {
    let mut spans: Vec<(f64, f64)> = output.functions.values().map(|mf| mf.support()).collect();
    spans.sort_by(|x, y| x.0.total_cmp(&y.0));

    let (min, max) = output.universe;
    let mut covered = min;
    for (a, c) in spans {
        if a > covered {
            return Err(ValidationError::CoverageGap {
                variable: output.name.clone(),
                from: covered,
            });
        }
        covered = covered.max(c);
    }
    if covered < max {
        return Err(ValidationError::CoverageGap {
            variable: output.name.clone(),
            from: covered,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_config() -> String {
        r#"{
            "memberships": {
                "traffic": {
                    "universe": [0.0, 1.0],
                    "functions": { "low": [0.0, 0.0, 0.3], "high": [0.4, 1.0, 1.0] }
                },
                "temp": {
                    "universe": [-20.0, 40.0],
                    "functions": { "very_cold": [-20.0, -20.0, -5.0], "mild": [5.0, 15.0, 25.0] }
                },
                "speed": {
                    "universe": [0.0, 1.0],
                    "functions": { "slow": [0.0, 0.3, 0.6], "cruise": [0.4, 0.7, 1.0] }
                }
            },
            "rules": [
                { "if": { "traffic": "low" }, "then": { "speed": "cruise" } },
                { "if": { "or": [ { "traffic": "high" }, { "temp": "very_cold" } ] },
                  "then": { "speed": "slow" } }
            ]
        }"#
        .to_string()
    }

    #[test]
    fn test_valid_config_builds() {
        let engine = load_str(&valid_config()).unwrap();
        assert_eq!(engine.output_variable(), "speed");
        assert_eq!(engine.rule_count(), 2);
    }

    #[test]
    fn test_invalid_json_is_config_error() {
        let err = load_str("{ not json").unwrap_err();
        assert!(matches!(err, BuildError::Config(ConfigError::Syntax(_))));
    }

    #[test]
    fn test_undefined_label_fails_validation() {
        let doc = valid_config().replace("\"temp\": \"very_cold\"", "\"temp\": \"extreme\"");
        let err = load_str(&doc).unwrap_err();
        assert!(matches!(
            err,
            BuildError::Validation(ValidationError::UnknownLabel { .. })
        ));
    }

    #[test]
    fn test_undeclared_variable_fails_validation() {
        let doc = valid_config().replace("\"traffic\": \"high\"", "\"visibility\": \"poor\"");
        let err = load_str(&doc).unwrap_err();
        assert!(matches!(
            err,
            BuildError::Validation(ValidationError::UnknownVariable { .. })
        ));
    }

    #[test]
    fn test_output_coverage_gap_fails_validation() {
        // Only `slow` over the bottom of the speed universe.
        let doc = valid_config().replace(
            r#""slow": [0.0, 0.3, 0.6], "cruise": [0.4, 0.7, 1.0]"#,
            r#""slow": [0.0, 0.15, 0.3]"#,
        );
        let doc = doc.replace(r#""then": { "speed": "cruise" }"#, r#""then": { "speed": "slow" }"#);
        let err = load_str(&doc).unwrap_err();
        assert!(matches!(
            err,
            BuildError::Validation(ValidationError::CoverageGap { .. })
        ));
    }

    #[test]
    fn test_touching_feet_count_as_covered() {
        // slow ends at 0.6 and cruise starts at 0.4; membership dips to zero
        // only at isolated triangle feet, which is fine.
        assert!(load_str(&valid_config()).is_ok());
    }

    #[test]
    fn test_unordered_breakpoints_fail_validation() {
        let doc = valid_config().replace("[5.0, 15.0, 25.0]", "[15.0, 5.0, 25.0]");
        let err = load_str(&doc).unwrap_err();
        assert!(matches!(
            err,
            BuildError::Validation(ValidationError::UnorderedBreakpoints { .. })
        ));
    }

    #[test]
    fn test_breakpoints_outside_universe_fail_validation() {
        let doc = valid_config().replace("[5.0, 15.0, 25.0]", "[5.0, 15.0, 45.0]");
        let err = load_str(&doc).unwrap_err();
        assert!(matches!(
            err,
            BuildError::Validation(ValidationError::BreakpointsOutsideUniverse { .. })
        ));
    }

    #[test]
    fn test_empty_universe_fails_validation() {
        let doc = valid_config().replace(
            r#""universe": [-20.0, 40.0]"#,
            r#""universe": [40.0, 40.0]"#,
        );
        let err = load_str(&doc).unwrap_err();
        assert!(matches!(
            err,
            BuildError::Validation(ValidationError::EmptyUniverse { .. })
        ));
    }

    #[test]
    fn test_empty_rule_base_fails_validation() {
        let doc = r#"{
            "memberships": {
                "speed": {
                    "universe": [0.0, 1.0],
                    "functions": { "slow": [0.0, 0.5, 1.0] }
                }
            },
            "rules": []
        }"#;
        let err = load_str(doc).unwrap_err();
        assert!(matches!(
            err,
            BuildError::Validation(ValidationError::EmptyRuleBase)
        ));
    }

    #[test]
    fn test_mixed_outputs_fail_validation() {
        let doc = valid_config().replace(
            r#""then": { "speed": "cruise" }"#,
            r#""then": { "traffic": "low" }"#,
        );
        let err = load_str(&doc).unwrap_err();
        assert!(matches!(
            err,
            BuildError::Validation(ValidationError::MixedOutputs { .. })
        ));
    }

    #[test]
    fn test_output_in_antecedent_fails_validation() {
        let doc = valid_config().replace(r#"{ "traffic": "low" }"#, r#"{ "speed": "slow" }"#);
        let err = load_str(&doc).unwrap_err();
        assert!(matches!(
            err,
            BuildError::Validation(ValidationError::OutputInAntecedent { .. })
        ));
    }

    #[test]
    fn test_empty_combinator_is_config_error() {
        let doc = valid_config().replace(
            r#"{ "or": [ { "traffic": "high" }, { "temp": "very_cold" } ] }"#,
            r#"{ "or": [] }"#,
        );
        let err = load_str(&doc).unwrap_err();
        assert!(matches!(
            err,
            BuildError::Config(ConfigError::EmptyCombinator { .. })
        ));
    }

    #[test]
    fn test_multi_entry_leaf_is_config_error() {
        let doc = valid_config().replace(
            r#"{ "traffic": "low" }"#,
            r#"{ "traffic": "low", "temp": "mild" }"#,
        );
        let err = load_str(&doc).unwrap_err();
        assert!(matches!(
            err,
            BuildError::Config(ConfigError::MalformedLeaf { entries: 2, .. })
        ));
    }

    #[test]
    fn test_multi_entry_consequent_is_config_error() {
        let doc = valid_config().replace(
            r#""then": { "speed": "cruise" }"#,
            r#""then": { "speed": "cruise", "traffic": "low" }"#,
        );
        let err = load_str(&doc).unwrap_err();
        assert!(matches!(
            err,
            BuildError::Config(ConfigError::MalformedConsequent { entries: 2, .. })
        ));
    }
}
