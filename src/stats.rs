//! Elementwise statistics shared across modules
//!
//! Sample mean and standard deviation (n - 1 denominator) together with the
//! recenter/rescale helpers used to force a draw onto exact target moments.

use ndarray::{Array1, ArrayView1};

/// Arithmetic mean. Returns NaN for an empty array.
pub fn mean(x: ArrayView1<f64>) -> f64 {
    x.mean().unwrap_or(f64::NAN)
}

/// Sample standard deviation with n - 1 denominator.
/// Returns NaN when fewer than two values are present.
pub fn sample_sd(x: ArrayView1<f64>) -> f64 {
    let n = x.len();
    if n < 2 {
        return f64::NAN;
    }
    // A rounded mean of identical values can still leave nonzero residuals
    if x.iter().all(|&v| v == x[0]) {
        return 0.0;
    }
    let m = mean(x);
    let ss: f64 = x.iter().map(|&v| (v - m) * (v - m)).sum();
    (ss / (n - 1) as f64).sqrt()
}

/// Shift `x` so that its sample mean equals `target`.
pub fn recenter(x: ArrayView1<f64>, target: f64) -> Array1<f64> {
    let m = mean(x);
    x.mapv(|v| v - m + target)
}

/// Force `x` onto sample mean `target_mean` and sample SD `target_sd`.
///
/// A zero-SD input cannot be rescaled, so the result falls back to a constant
/// array of `target_mean`.
pub fn rescale(x: ArrayView1<f64>, target_mean: f64, target_sd: f64) -> Array1<f64> {
    let centered = recenter(x, target_mean);
    let current_sd = sample_sd(centered.view());

    if current_sd == 0.0 || !current_sd.is_finite() {
        log::warn!(
            "Degenerate draw (sample SD = {}); using constant array of {}",
            current_sd,
            target_mean
        );
        return Array1::from_elem(x.len(), target_mean);
    }

    let m = mean(centered.view());
    centered.mapv(|v| (v - m) / current_sd * target_sd + target_mean)
}

/// Clamp every element to `[min, max]`.
pub fn clip(x: ArrayView1<f64>, min: f64, max: f64) -> Array1<f64> {
    x.mapv(|v| v.clamp(min, max))
}
