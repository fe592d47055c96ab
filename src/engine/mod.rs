//! Engine facade.
//!
//! [`FuzzyEngine`] is the one public entry point: built once from a JSON
//! configuration, immutable afterwards, queried through `predict`. There is
//! no global instance and no lazy initialization; callers construct engines
//! explicitly, so several differently tuned engines can coexist (per-fleet
//! tuning) and hot reload is an atomic swap of the whole instance.

mod predict;
mod types;

pub use types::FuzzyEngine;
