//! Two-sided paired t-test
//!
//! Equivalent to a one-sample t-test of the differences `after - before`
//! against zero with `n - 1` degrees of freedom.

use ndarray::ArrayView1;
use serde::{Deserialize, Serialize};

use super::pvalue::calculate_pvalue_t;
use crate::error::{PairgenError, Result};
use crate::stats::{mean, sample_sd};

/// Result of a paired t-test
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PairedTTest {
    /// Number of pairs
    pub n: usize,
    /// Degrees of freedom (n - 1)
    pub df: f64,
    /// Mean of after - before
    pub mean_diff: f64,
    /// Sample standard deviation of the differences
    pub sd_diff: f64,
    /// Standard error of the mean difference
    pub std_error: f64,
    /// t statistic
    pub statistic: f64,
    /// Two-sided p-value
    pub pvalue: f64,
}

/// Paired t-test of `after` against `before`
///
/// Zero-variance differences give t = +/-inf and p = 0, or t = NaN and p = NaN
/// when the mean difference is also zero.
pub fn paired_t_test(after: ArrayView1<f64>, before: ArrayView1<f64>) -> Result<PairedTTest> {
    if after.len() != before.len() {
        return Err(PairgenError::DimensionMismatch {
            expected: format!("{} paired values", before.len()),
            got: format!("{} paired values", after.len()),
        });
    }
    let n = after.len();
    if n < 2 {
        return Err(PairgenError::InvalidSampleSize { n });
    }

    let diff = &after - &before;
    let mean_diff = mean(diff.view());
    let sd_diff = sample_sd(diff.view());
    let std_error = sd_diff / (n as f64).sqrt();
    let statistic = mean_diff / std_error;
    let df = (n - 1) as f64;

    Ok(PairedTTest {
        n,
        df,
        mean_diff,
        sd_diff,
        std_error,
        statistic,
        pvalue: calculate_pvalue_t(statistic, df),
    })
}
