//! Fuzzy-logic inference engine for vehicle speed advisories.
//!
//! Converts a set of normalized risk signals (traffic density, weather
//! severity, driver fatigue, deadline pressure, ambient temperature) into a
//! single continuous speed-advisory factor via Mamdani-style inference:
//!
//! - **Membership evaluation**: piecewise-linear (triangular / shoulder)
//!   functions map each crisp input to degrees of truth per linguistic label.
//! - **Rule inference**: each rule's antecedent — an AND/OR tree over
//!   variable/label terms — folds to a firing strength (min over AND, max
//!   over OR); the consequent's membership function is clipped at that
//!   strength.
//! - **Aggregation**: clipped consequents combine by pointwise maximum into
//!   one fuzzy set over the output universe.
//! - **Defuzzification**: the centroid of the aggregated set, sampled at a
//!   fixed resolution, yields the crisp advisory value.
//!
//! # Architecture
//!
//! Variables, membership shapes, and rules come from a declarative JSON
//! configuration, parsed and validated once into an immutable
//! [`engine::FuzzyEngine`]. After construction the engine holds no mutable
//! state: `predict` is a pure function of the engine and the call's inputs,
//! so any number of threads may evaluate concurrently without coordination,
//! and configuration hot-reload is a whole-engine replacement rather than an
//! in-place edit.
//!
//! Data fetching, caching, and input refresh policy belong to upstream
//! collaborators; this crate starts at "named scalar inputs" and ends at
//! "one scalar output".
//!
//! # Examples
//!
//! ```
//! use fuzzy_advisor::engine::FuzzyEngine;
//! use std::collections::HashMap;
//!
//! let config = r#"{
//!     "memberships": {
//!         "traffic": {
//!             "universe": [0.0, 1.0],
//!             "functions": { "low": [0.0, 0.0, 0.5], "high": [0.5, 1.0, 1.0] }
//!         },
//!         "speed": {
//!             "universe": [0.0, 1.0],
//!             "functions": { "slow": [0.0, 0.0, 0.6], "fast": [0.4, 1.0, 1.0] }
//!         }
//!     },
//!     "rules": [
//!         { "if": { "traffic": "low" },  "then": { "speed": "fast" } },
//!         { "if": { "traffic": "high" }, "then": { "speed": "slow" } }
//!     ]
//! }"#;
//!
//! let engine = FuzzyEngine::from_json(config).unwrap();
//! let inputs = HashMap::from([("traffic".to_string(), 0.2)]);
//! let advisory = engine.predict(&inputs).unwrap();
//! assert!((0.0..=1.0).contains(&advisory));
//! ```

pub mod config;
pub mod defuzz;
pub mod engine;
pub mod error;
pub mod membership;
pub mod rules;
