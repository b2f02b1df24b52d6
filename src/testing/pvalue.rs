//! P-values and critical values of Student's t distribution

use statrs::distribution::{Continuous, ContinuousCDF, StudentsT};

use crate::error::{PairgenError, Result};

fn students_t(df: f64) -> Result<StudentsT> {
    StudentsT::new(0.0, 1.0, df).map_err(|e| PairgenError::InvalidDistribution {
        reason: format!("Student's t with df = {}: {}", df, e),
    })
}

/// Calculate two-sided p-value from t-statistic with given degrees of freedom
///
/// Infinite statistics give 0, NaN statistics and non-positive df give NaN.
pub fn calculate_pvalue_t(stat: f64, df: f64) -> f64 {
    if stat.is_nan() || !(df > 0.0) {
        return f64::NAN;
    }
    if stat.is_infinite() {
        return 0.0;
    }

    match students_t(df) {
        Ok(t_dist) => 2.0 * t_dist.cdf(-stat.abs()),
        Err(_) => f64::NAN,
    }
}

/// Two-sided critical t-value: the quantile at cumulative probability `1 - p/2`
///
/// `p_value` must lie in (0, 1]. The quantile is taken from the lower tail at
/// `p/2` and negated, so it stays finite for p-values far below machine
/// epsilon. The statrs quantile is polished with a few Newton steps on the CDF
/// so that `calculate_pvalue_t(critical_t(p, df), df)` reproduces `p` to near
/// machine precision, with bisection on the CDF when the quantile is unusable.
/// A non-finite result is returned as is.
pub fn critical_t(p_value: f64, df: f64) -> Result<f64> {
    if !(p_value > 0.0 && p_value <= 1.0) {
        return Err(PairgenError::InvalidPValue { p_value });
    }
    let t_dist = students_t(df)?;
    let tail = p_value / 2.0;
    if tail == 0.5 {
        return Ok(0.0);
    }

    let mut t = t_dist.inverse_cdf(tail);
    if !t.is_finite() || !(t_dist.pdf(t) > 0.0) {
        t = bisect_lower_tail(&t_dist, tail);
    }
    for _ in 0..8 {
        let density = t_dist.pdf(t);
        if !t.is_finite() || !(density > 0.0) {
            break;
        }
        let step = (t_dist.cdf(t) - tail) / density;
        if !step.is_finite() || step == 0.0 {
            break;
        }
        t -= step;
    }
    if t.is_finite() && (t > 0.0 || (t_dist.cdf(t) - tail).abs() > 1e-8 * tail) {
        t = bisect_lower_tail(&t_dist, tail);
    }

    log::debug!("critical t (p = {}, df = {}) = {:.15}", p_value, df, -t);
    Ok(-t)
}

/// Lower-tail quantile by bisection, for tails the statrs quantile cannot reach
fn bisect_lower_tail(t_dist: &StudentsT, tail: f64) -> f64 {
    let mut hi = 0.0;
    let mut lo = -1.0;
    while t_dist.cdf(lo) > tail && lo.is_finite() {
        hi = lo;
        lo *= 2.0;
    }
    if !lo.is_finite() {
        return lo;
    }

    loop {
        let mid = 0.5 * (lo + hi);
        if mid == lo || mid == hi {
            return mid;
        }
        if t_dist.cdf(mid) > tail {
            hi = mid;
        } else {
            lo = mid;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pvalue_symmetric() {
        let p1 = calculate_pvalue_t(2.0, 9.0);
        let p2 = calculate_pvalue_t(-2.0, 9.0);
        assert!((p1 - p2).abs() < 1e-12);
    }

    #[test]
    fn test_pvalue_zero_stat() {
        assert!((calculate_pvalue_t(0.0, 5.0) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_pvalue_edge_cases() {
        assert_eq!(calculate_pvalue_t(f64::INFINITY, 4.0), 0.0);
        assert!(calculate_pvalue_t(f64::NAN, 4.0).is_nan());
        assert!(calculate_pvalue_t(1.0, 0.0).is_nan());
    }

    #[test]
    fn test_small_df_more_conservative() {
        let p_small = calculate_pvalue_t(2.0, 3.0);
        let p_large = calculate_pvalue_t(2.0, 1000.0);
        assert!(p_small > p_large);
    }

    #[test]
    fn test_critical_t_known_values() {
        // qt(0.975, 9) = 2.262157
        let t = critical_t(0.05, 9.0).unwrap();
        assert!((t - 2.262157).abs() < 1e-5, "got {}", t);

        // qt(0.995, 1) = 63.65674
        let t = critical_t(0.01, 1.0).unwrap();
        assert!((t - 63.65674).abs() < 1e-3, "got {}", t);
    }

    #[test]
    fn test_critical_t_inverts_pvalue() {
        for &df in &[1.0, 2.0, 5.0, 19.0, 99.0] {
            for &p in &[0.001, 0.01, 0.05, 0.2, 0.5, 0.9] {
                let t = critical_t(p, df).unwrap();
                let back = calculate_pvalue_t(t, df);
                assert!((back - p).abs() < 1e-9, "df={} p={} back={}", df, p, back);
            }
        }
    }

    #[test]
    fn test_critical_t_tiny_pvalue_is_finite() {
        // 1 - p/2 rounds to 1.0 here; the lower tail does not
        for &(p, df) in &[(1e-20, 1.0), (1e-200, 2.0), (1e-300, 999.0)] {
            let t = critical_t(p, df).unwrap();
            assert!(t.is_finite() && t > 0.0, "p={} df={} t={}", p, df, t);
        }
        let t = critical_t(1e-20, 1.0).unwrap();
        let back = calculate_pvalue_t(t, 1.0);
        assert!(((back - 1e-20) / 1e-20).abs() < 1e-6, "back = {}", back);
    }

    #[test]
    fn test_bisect_lower_tail_matches_closed_form() {
        // df = 1 is Cauchy: F(t) = 1/2 + atan(t)/pi
        let t_dist = students_t(1.0).unwrap();
        let t = bisect_lower_tail(&t_dist, 0.025);
        let expected = (std::f64::consts::PI * (0.025 - 0.5)).tan();
        assert!((t - expected).abs() < 1e-9, "t = {}, expected = {}", t, expected);
    }

    #[test]
    fn test_critical_t_at_one_is_zero() {
        let t = critical_t(1.0, 5.0).unwrap();
        assert_eq!(t, 0.0);
    }

    #[test]
    fn test_critical_t_rejects_out_of_range() {
        assert!(matches!(critical_t(0.0, 5.0), Err(PairgenError::InvalidPValue { .. })));
        assert!(matches!(critical_t(1.5, 5.0), Err(PairgenError::InvalidPValue { .. })));
        assert!(matches!(critical_t(f64::NAN, 5.0), Err(PairgenError::InvalidPValue { .. })));
    }
}
