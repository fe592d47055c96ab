//! Configuration parsing and validation.
//!
//! The configuration is a JSON document with two sections:
//!
//! - `memberships`: variable name → `{ "universe": [min, max],
//!   "functions": { label: [a, b, c] } }`
//! - `rules`: ordered list of `{ "if": <condition>, "then": { output: label } }`
//!   where a condition is either a single `{ "variable": "label" }` entry or
//!   an `{ "and": [...] }` / `{ "or": [...] }` combinator of nested
//!   conditions.
//!
//! Loading is the only place invalid configuration is caught: the document
//! is parsed into a raw serde mirror, lowered into the typed model, and run
//! through a single static validation pass. A successfully built
//! [`crate::engine::FuzzyEngine`] is guaranteed internally consistent, so
//! inference never re-checks references.

mod loader;
mod schema;

pub use loader::load_str;
pub use schema::{RawConfig, RawExpr, RawRule, RawVariable};
