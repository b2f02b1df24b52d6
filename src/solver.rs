//! Target parameter solver
//!
//! Inverts the paired t-test: for n pairs with mean difference `d`, the
//! statistic is `t = d / (s / sqrt(n))`. Fixing `t` at the two-sided critical
//! value for the requested p-value gives the difference SD
//! `s = |d| * sqrt(n) / |t|`.

use crate::error::{PairgenError, Result};
use crate::testing::critical_t;

/// Sample SD (n - 1 denominator) of the paired differences that makes a
/// paired t-test on `n` pairs with mean difference `mean_diff` yield `p_value`
pub fn solve_target_sd(n: usize, mean_diff: f64, p_value: f64) -> Result<f64> {
    if n < 2 {
        return Err(PairgenError::InvalidSampleSize { n });
    }
    let df = (n - 1) as f64;

    let t_target = critical_t(p_value, df)?;
    if t_target == 0.0 || !t_target.is_finite() {
        return Err(PairgenError::DegenerateTarget { p_value, df });
    }

    let sd_target = mean_diff.abs() * (n as f64).sqrt() / t_target.abs();
    log::debug!(
        "n = {}, df = {}, t_target = {:.10}, sd_target = {:.10}",
        n,
        df,
        t_target,
        sd_target
    );
    Ok(sd_target)
}
