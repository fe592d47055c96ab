//! Rule base types.

/// A leaf reference to one linguistic judgment, e.g. `traffic is low`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Term {
    /// Variable name; must be declared in the engine's variable map.
    pub variable: String,
    /// Label name; must be defined on that variable.
    pub label: String,
}

/// An antecedent expression tree.
///
/// Combinator children are non-empty; the config loader rejects empty
/// `and`/`or` lists before an `Antecedent` is ever built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Antecedent {
    /// A single variable/label judgment.
    Term(Term),
    /// Conjunction: folds to the minimum of its children.
    And(Vec<Antecedent>),
    /// Disjunction: folds to the maximum of its children.
    Or(Vec<Antecedent>),
}

impl Antecedent {
    /// All leaf terms in this expression, in depth-first order.
    pub fn terms(&self) -> Vec<&Term> {
        let mut out = Vec::new();
        self.collect_terms(&mut out);
        out
    }

    fn collect_terms<'a>(&'a self, out: &mut Vec<&'a Term>) {
        match self {
            Antecedent::Term(t) => out.push(t),
            Antecedent::And(children) | Antecedent::Or(children) => {
                for child in children {
                    child.collect_terms(out);
                }
            }
        }
    }
}

/// The `then` side of a rule: assign a label of the output variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Consequent {
    /// Output variable name.
    pub variable: String,
    /// Label whose membership shape this rule contributes.
    pub label: String,
}

/// One inference rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub antecedent: Antecedent,
    pub consequent: Consequent,
}

/// An ordered sequence of rules.
///
/// Aggregation is commutative, so ordering never affects the result; it is
/// preserved for diagnostics (rule indices in errors and trace output).
#[derive(Debug, Clone)]
pub struct RuleBase {
    rules: Vec<Rule>,
}

impl RuleBase {
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
