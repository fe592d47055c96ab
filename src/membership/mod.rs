//! Membership evaluation.
//!
//! Piecewise-linear membership functions over a variable's universe of
//! discourse. Three breakpoints `(a, b, c)` describe a triangle; coincident
//! breakpoints degenerate into left/right shoulders, which is how the
//! reference configurations express "low" and "high" bands at universe
//! bounds.
//!
//! Evaluation is pure and total: defined for every real input, never fails,
//! always lands in [0, 1].

mod types;

pub use types::{MembershipFunction, Variable};
