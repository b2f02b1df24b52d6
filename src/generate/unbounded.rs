//! Unbounded variant: normal baseline plus exactly normalized differences

use super::{draw_differences, BaselineDistribution, DrawSource};
use crate::data::SampleSet;
use crate::error::Result;

pub(super) fn generate_unbounded<D: DrawSource + ?Sized>(
    mean_diff: f64,
    sd_target: f64,
    baseline_dist: &BaselineDistribution,
    n: usize,
    draws: &mut D,
) -> Result<SampleSet> {
    let baseline = draws.normal(baseline_dist.mean, baseline_dist.sd, n)?;
    let diff = draw_differences(draws, mean_diff, sd_target, n)?;
    let followup = &baseline + &diff;

    log::debug!("Unbounded generation: n = {}, sd_target = {:.6}", n, sd_target);
    SampleSet::new(baseline, followup)
}
