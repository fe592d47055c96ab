//! Serde mirror of the configuration document.
//!
//! These types stay as close to the JSON shape as possible; lowering into
//! the validated model happens in the loader. Arity and numeric-type
//! errors (a two-element breakpoint list, a string universe bound) are
//! rejected here by serde itself.

use serde::Deserialize;
use std::collections::HashMap;

/// Top-level configuration document.
#[derive(Debug, Deserialize)]
pub struct RawConfig {
    /// Variable name to universe and labeled membership shapes.
    pub memberships: HashMap<String, RawVariable>,
    /// Ordered rule list.
    pub rules: Vec<RawRule>,
}

/// One variable declaration.
#[derive(Debug, Deserialize)]
pub struct RawVariable {
    /// Closed range `[min, max]`.
    pub universe: [f64; 2],
    /// Label to `[a, b, c]` breakpoints.
    pub functions: HashMap<String, [f64; 3]>,
}

/// One rule entry.
#[derive(Debug, Deserialize)]
pub struct RawRule {
    /// Antecedent condition tree.
    #[serde(rename = "if")]
    pub condition: RawExpr,
    /// Consequent: exactly one `output variable: label` entry (checked by
    /// the loader; serde cannot express the arity).
    pub then: HashMap<String, String>,
}

/// A nested condition expression.
///
/// Untagged: a map with an `and` (or `or`) key holding a list matches the
/// combinator variants; any other map of string-to-string is a leaf. Variant
/// order matters, combinators are tried first.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum RawExpr {
    And { and: Vec<RawExpr> },
    Or { or: Vec<RawExpr> },
    Leaf(HashMap<String, String>),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_document() {
        let doc = r#"{
            "memberships": {
                "traffic": {
                    "universe": [0.0, 1.0],
                    "functions": { "low": [0.0, 0.0, 0.5] }
                }
            },
            "rules": [
                { "if": { "traffic": "low" }, "then": { "speed": "slow" } }
            ]
        }"#;

        let raw: RawConfig = serde_json::from_str(doc).unwrap();
        assert_eq!(raw.memberships.len(), 1);
        assert_eq!(raw.rules.len(), 1);
        assert!(matches!(raw.rules[0].condition, RawExpr::Leaf(_)));
    }

    #[test]
    fn test_parse_nested_combinators() {
        let doc = r#"{
            "and": [
                { "traffic": "low" },
                { "or": [ { "weather": "good" }, { "fatigue": "fresh" } ] }
            ]
        }"#;

        let expr: RawExpr = serde_json::from_str(doc).unwrap();
        match expr {
            RawExpr::And { and } => {
                assert_eq!(and.len(), 2);
                assert!(matches!(and[0], RawExpr::Leaf(_)));
                assert!(matches!(and[1], RawExpr::Or { .. }));
            }
            other => panic!("expected And, got {other:?}"),
        }
    }

    #[test]
    fn test_wrong_breakpoint_arity_is_rejected() {
        let doc = r#"{
            "memberships": {
                "traffic": {
                    "universe": [0.0, 1.0],
                    "functions": { "low": [0.0, 0.5] }
                }
            },
            "rules": []
        }"#;

        assert!(serde_json::from_str::<RawConfig>(doc).is_err());
    }

    #[test]
    fn test_non_numeric_universe_is_rejected() {
        let doc = r#"{
            "memberships": {
                "traffic": { "universe": [0.0, "one"], "functions": {} }
            },
            "rules": []
        }"#;

        assert!(serde_json::from_str::<RawConfig>(doc).is_err());
    }

    #[test]
    fn test_missing_section_is_rejected() {
        let doc = r#"{ "memberships": {} }"#;
        assert!(serde_json::from_str::<RawConfig>(doc).is_err());
    }
}
