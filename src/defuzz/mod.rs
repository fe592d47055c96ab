//! Centroid defuzzification.
//!
//! Reduces an aggregated fuzzy set to one scalar: the membership-weighted
//! mean of evenly spaced samples across the output universe. Sampling is
//! closed-form and endpoint-inclusive, so the same set and resolution always
//! produce bit-identical results.

mod centroid;

pub use centroid::{centroid, DEFAULT_RESOLUTION};
