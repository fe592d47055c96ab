//! Discretized centroid computation.

/// Default number of samples across the output universe.
///
/// 101 inclusive samples give a step of 1% of the universe, which is well
/// below the noise floor of the normalized risk inputs while keeping a
/// `predict` call trivially cheap. Override per engine with
/// `FuzzyEngine::with_resolution`.
pub const DEFAULT_RESOLUTION: usize = 101;

/// Centroid of a fuzzy set over `universe`, sampled at `resolution` evenly
/// spaced points (endpoints inclusive).
///
/// Computes `Σ yᵢ·μ(yᵢ) / Σ μ(yᵢ)`. Returns `None` when total membership is
/// zero; the caller decides how to surface that (the engine facade reports
/// it as a degenerate-output error rather than inventing a value).
///
/// Resolutions below 2 are raised to 2, the minimum that includes both
/// endpoints.
///
/// # Examples
///
/// ```
/// use fuzzy_advisor::defuzz::{centroid, DEFAULT_RESOLUTION};
///
/// // A symmetric triangle balances at its peak.
/// let tri = |y: f64| (1.0 - (y - 0.5).abs() * 2.0).max(0.0);
/// let c = centroid(tri, (0.0, 1.0), DEFAULT_RESOLUTION).unwrap();
/// assert!((c - 0.5).abs() < 1e-9);
/// ```
pub fn centroid<F>(membership: F, universe: (f64, f64), resolution: usize) -> Option<f64>
where
    F: Fn(f64) -> f64,
{
    let (min, max) = universe;
    let n = resolution.max(2);
    let step = (max - min) / (n - 1) as f64;

    let mut weighted = 0.0;
    let mut total = 0.0;
    for i in 0..n {
        let y = min + step * i as f64;
        let mu = membership(y);
        weighted += y * mu;
        total += mu;
    }

    if total == 0.0 {
        None
    } else {
        Some(weighted / total)
    }
}
