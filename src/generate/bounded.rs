//! Bounded variant: uniform baseline inside `[min, max]`, shifted by data type
//!
//! Clipping perturbs the difference moments, so the difference is recomputed
//! after clipping and normalized once more. That last pass does not clip
//! again, and the final Followup may leave `[min, max]` slightly.

use super::{draw_differences, BoundedTarget, DrawSource};
use crate::data::SampleSet;
use crate::error::Result;
use crate::stats::{clip, recenter, rescale};

pub(super) fn generate_bounded<D: DrawSource + ?Sized>(
    mean_diff: f64,
    sd_target: f64,
    bounds: &BoundedTarget,
    n: usize,
    draws: &mut D,
) -> Result<SampleSet> {
    let BoundedTarget {
        min,
        max,
        baseline_normal,
        followup_normal,
        data_type,
    } = *bounds;

    let baseline_target = baseline_normal + data_type.baseline_offset(min, max);
    let followup_target = followup_normal + data_type.followup_offset(min, max);
    log::debug!(
        "Bounded generation ({}): range [{}, {}], baseline target {}, followup target {}",
        data_type,
        min,
        max,
        baseline_target,
        followup_target
    );

    let raw = draws.uniform(min, max, n)?;
    // Clipping may move the mean off target; accepted
    let baseline = clip(recenter(raw.view(), baseline_target).view(), min, max);

    let diff = draw_differences(draws, mean_diff, sd_target, n)?;
    let followup = &baseline + &diff;
    let followup = clip(recenter(followup.view(), followup_target).view(), min, max);

    let diff = rescale((&followup - &baseline).view(), mean_diff, sd_target);
    let followup = &baseline + &diff;

    let escaped = followup.iter().filter(|&&v| v < min || v > max).count();
    if escaped > 0 {
        log::warn!(
            "{} of {} Followup values fall outside [{}, {}] after the final normalization",
            escaped,
            n,
            min,
            max
        );
    }

    SampleSet::new(baseline, followup)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate::DataType;
    use crate::stats::{mean, sample_sd};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn bounds(data_type: DataType) -> BoundedTarget {
        BoundedTarget {
            min: 0.0,
            max: 100.0,
            baseline_normal: 40.0,
            followup_normal: 45.0,
            data_type,
        }
    }

    #[test]
    fn test_baseline_within_bounds() {
        for seed in 0..10 {
            let mut rng = StdRng::seed_from_u64(seed);
            let s = generate_bounded(5.0, 3.0, &bounds(DataType::Abnormal), 25, &mut rng).unwrap();
            assert!(
                s.baseline().iter().all(|&v| (0.0..=100.0).contains(&v)),
                "baseline escaped bounds for seed {}",
                seed
            );
        }
    }

    #[test]
    fn test_same_seed_same_output() {
        let target = bounds(DataType::Abnormal);
        let a = generate_bounded(5.0, 3.0, &target, 20, &mut StdRng::seed_from_u64(42)).unwrap();
        let b = generate_bounded(5.0, 3.0, &target, 20, &mut StdRng::seed_from_u64(42)).unwrap();
        assert_eq!(a, b);

        let c = generate_bounded(5.0, 3.0, &target, 20, &mut StdRng::seed_from_u64(43)).unwrap();
        assert_ne!(a.baseline(), c.baseline());
        let diff = c.differences();
        assert!((mean(diff.view()) - 5.0).abs() < 1e-9);
        assert!((sample_sd(diff.view()) - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_final_difference_is_authoritative() {
        let mut rng = StdRng::seed_from_u64(3);
        let s = generate_bounded(5.0, 3.0, &bounds(DataType::Normal), 30, &mut rng).unwrap();
        let diff = s.differences();
        assert!((mean(diff.view()) - 5.0).abs() < 1e-9);
        assert!((sample_sd(diff.view()) - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_abnormal_shifts_baseline_up() {
        let normal = generate_bounded(
            5.0,
            3.0,
            &bounds(DataType::Normal),
            40,
            &mut StdRng::seed_from_u64(8),
        )
        .unwrap();
        let abnormal = generate_bounded(
            5.0,
            3.0,
            &bounds(DataType::Abnormal),
            40,
            &mut StdRng::seed_from_u64(8),
        )
        .unwrap();
        assert!(mean(abnormal.baseline().view()) > mean(normal.baseline().view()));
    }

    #[test]
    fn test_narrow_range_keeps_baseline_clipped() {
        let target = BoundedTarget {
            min: 10.0,
            max: 11.0,
            baseline_normal: 10.9,
            followup_normal: 10.1,
            data_type: DataType::Abnormal,
        };
        let mut rng = StdRng::seed_from_u64(21);
        let s = generate_bounded(-0.8, 0.2, &target, 16, &mut rng).unwrap();
        assert!(s.baseline().iter().all(|&v| (10.0..=11.0).contains(&v)));
        let diff = s.differences();
        assert!((mean(diff.view()) + 0.8).abs() < 1e-9);
    }
}
