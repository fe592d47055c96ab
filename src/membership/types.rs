//! Membership function and linguistic variable types.

use std::collections::HashMap;

/// A piecewise-linear membership function with breakpoints `(a, b, c)`.
///
/// With `a < b < c` this is a triangle peaking at `b`. Coincident
/// breakpoints produce shoulders:
///
/// - `a == b`: left shoulder, degree 1 for all `x <= b`;
/// - `b == c`: right shoulder, degree 1 for all `x >= b`.
///
/// # Examples
///
/// ```
/// use fuzzy_advisor::membership::MembershipFunction;
///
/// let tri = MembershipFunction::new(0.0, 0.5, 1.0);
/// assert_eq!(tri.degree(0.5), 1.0);
/// assert_eq!(tri.degree(0.25), 0.5);
/// assert_eq!(tri.degree(2.0), 0.0);
///
/// let left = MembershipFunction::new(0.0, 0.0, 0.4);
/// assert_eq!(left.degree(0.0), 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MembershipFunction {
    /// Left foot.
    pub a: f64,
    /// Peak.
    pub b: f64,
    /// Right foot.
    pub c: f64,
}

impl MembershipFunction {
    /// Creates a membership function from ordered breakpoints.
    ///
    /// Ordering (`a <= b <= c`) is enforced by the config loader, not here;
    /// evaluation stays total either way.
    pub fn new(a: f64, b: f64, c: f64) -> Self {
        Self { a, b, c }
    }

    /// Degree of truth of `x` under this function, in [0, 1].
    pub fn degree(&self, x: f64) -> f64 {
        // Shoulder cases take precedence over the generic support test:
        // a left shoulder is saturated for every x at or below its peak.
        if self.a == self.b && x <= self.b {
            return 1.0;
        }
        if self.b == self.c && x >= self.b {
            return 1.0;
        }
        if x <= self.a || x >= self.c {
            return 0.0;
        }
        let d = if x <= self.b {
            (x - self.a) / (self.b - self.a)
        } else {
            (self.c - x) / (self.c - self.b)
        };
        // Absorb floating-point overshoot near the breakpoints.
        d.clamp(0.0, 1.0)
    }

    /// The closed support interval `[a, c]`.
    pub fn support(&self) -> (f64, f64) {
        (self.a, self.c)
    }
}

/// A linguistic variable: a universe of discourse and its labeled
/// membership functions.
#[derive(Debug, Clone)]
pub struct Variable {
    /// Variable name, e.g. `traffic` or `speed`.
    pub name: String,
    /// Closed range over which the functions are defined.
    pub universe: (f64, f64),
    /// Label (e.g. `low`, `high`) to membership function.
    pub functions: HashMap<String, MembershipFunction>,
}

impl Variable {
    /// Clamps `x` to the universe bounds.
    pub fn clamp(&self, x: f64) -> f64 {
        x.clamp(self.universe.0, self.universe.1)
    }
}
