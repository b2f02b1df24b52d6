//! Constrained sample generation
//!
//! Produces Baseline/Followup arrays whose paired difference has exactly the
//! requested mean and the sample SD solved from the target p-value.

mod bounded;
mod draws;
mod unbounded;

pub use draws::DrawSource;

use std::fmt;
use std::str::FromStr;

use ndarray::Array1;
use serde::{Deserialize, Serialize};

use crate::data::{GenotypeSpec, SampleSet};
use crate::error::{PairgenError, Result};
use crate::solver::solve_target_sd;
use crate::stats::rescale;

/// Whether bounded data is centred on its reference values or shifted away
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataType {
    #[default]
    Normal,
    Abnormal,
}

impl DataType {
    /// Shift applied to the baseline target, a quarter of the range width for abnormal data
    pub fn baseline_offset(self, min: f64, max: f64) -> f64 {
        match self {
            DataType::Normal => 0.0,
            DataType::Abnormal => 0.25 * (max - min),
        }
    }

    /// Shift applied to the followup target, opposite in sign to the baseline shift
    pub fn followup_offset(self, min: f64, max: f64) -> f64 {
        -self.baseline_offset(min, max)
    }
}

impl FromStr for DataType {
    type Err = PairgenError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "normal" => Ok(DataType::Normal),
            "abnormal" => Ok(DataType::Abnormal),
            other => Err(PairgenError::InvalidInput {
                reason: format!("Unknown data type '{}'. Use 'normal' or 'abnormal'.", other),
            }),
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataType::Normal => write!(f, "normal"),
            DataType::Abnormal => write!(f, "abnormal"),
        }
    }
}

/// Normal distribution the unbounded baseline is drawn from
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BaselineDistribution {
    pub mean: f64,
    pub sd: f64,
}

impl Default for BaselineDistribution {
    fn default() -> Self {
        Self { mean: 100.0, sd: 10.0 }
    }
}

/// Value range and reference levels for the bounded variant
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundedTarget {
    pub min: f64,
    pub max: f64,
    pub baseline_normal: f64,
    pub followup_normal: f64,
    pub data_type: DataType,
}

impl BoundedTarget {
    fn validate(&self) -> Result<()> {
        if !(self.min < self.max) || !self.min.is_finite() || !self.max.is_finite() {
            return Err(PairgenError::InvalidRange {
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }
}

/// Inputs of one generation call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationParameters {
    /// Target mean of Followup - Baseline
    pub mean_diff: f64,
    /// Target two-sided paired t-test p-value
    pub p_value: f64,
    /// Baseline distribution for the unbounded variant
    pub baseline: BaselineDistribution,
    /// Present for the bounded variant
    pub bounds: Option<BoundedTarget>,
}

impl GenerationParameters {
    /// Unbounded parameters with the default baseline distribution
    pub fn new(mean_diff: f64, p_value: f64) -> Self {
        Self {
            mean_diff,
            p_value,
            baseline: BaselineDistribution::default(),
            bounds: None,
        }
    }

    pub fn builder(mean_diff: f64, p_value: f64) -> GenerationParametersBuilder {
        GenerationParametersBuilder::new(mean_diff, p_value)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.mean_diff.is_finite() {
            return Err(PairgenError::InvalidInput {
                reason: format!("mean difference must be finite, got {}", self.mean_diff),
            });
        }
        if !(self.p_value > 0.0 && self.p_value <= 1.0) {
            return Err(PairgenError::InvalidPValue {
                p_value: self.p_value,
            });
        }
        if !self.baseline.mean.is_finite() || !(self.baseline.sd >= 0.0) || !self.baseline.sd.is_finite() {
            return Err(PairgenError::InvalidInput {
                reason: format!(
                    "baseline distribution needs a finite mean and non-negative sd, got mean = {}, sd = {}",
                    self.baseline.mean, self.baseline.sd
                ),
            });
        }
        if let Some(bounds) = &self.bounds {
            bounds.validate()?;
        }
        Ok(())
    }
}

/// Builder for GenerationParameters
///
/// # Example
///
/// ```ignore
/// let params = GenerationParameters::builder(2.0, 0.05)
///     .value_range(0.0, 100.0)
///     .baseline_normal(40.0)
///     .followup_normal(42.0)
///     .data_type(DataType::Abnormal)
///     .build()?;
/// ```
#[derive(Debug, Clone)]
pub struct GenerationParametersBuilder {
    mean_diff: f64,
    p_value: f64,
    baseline: BaselineDistribution,
    value_range: Option<(f64, f64)>,
    baseline_normal: Option<f64>,
    followup_normal: Option<f64>,
    data_type: DataType,
}

impl GenerationParametersBuilder {
    pub fn new(mean_diff: f64, p_value: f64) -> Self {
        Self {
            mean_diff,
            p_value,
            baseline: BaselineDistribution::default(),
            value_range: None,
            baseline_normal: None,
            followup_normal: None,
            data_type: DataType::Normal,
        }
    }

    /// Mean and SD of the unbounded baseline draw
    pub fn baseline_distribution(mut self, mean: f64, sd: f64) -> Self {
        self.baseline = BaselineDistribution { mean, sd };
        self
    }

    /// Bound values to `[min, max]`, selecting the bounded variant
    pub fn value_range(mut self, min: f64, max: f64) -> Self {
        self.value_range = Some((min, max));
        self
    }

    /// Reference baseline level (default: range midpoint)
    pub fn baseline_normal(mut self, value: f64) -> Self {
        self.baseline_normal = Some(value);
        self
    }

    /// Reference followup level (default: baseline reference + mean difference)
    pub fn followup_normal(mut self, value: f64) -> Self {
        self.followup_normal = Some(value);
        self
    }

    pub fn data_type(mut self, data_type: DataType) -> Self {
        self.data_type = data_type;
        self
    }

    /// Build and validate the parameters
    pub fn build(self) -> Result<GenerationParameters> {
        if self.value_range.is_none()
            && (self.baseline_normal.is_some() || self.followup_normal.is_some() || self.data_type != DataType::Normal)
        {
            log::warn!("Reference values and data type only apply when a value range is given; ignoring them");
        }

        let bounds = self.value_range.map(|(min, max)| {
            let baseline_normal = self.baseline_normal.unwrap_or((min + max) / 2.0);
            BoundedTarget {
                min,
                max,
                baseline_normal,
                followup_normal: self.followup_normal.unwrap_or(baseline_normal + self.mean_diff),
                data_type: self.data_type,
            }
        });

        let params = GenerationParameters {
            mean_diff: self.mean_diff,
            p_value: self.p_value,
            baseline: self.baseline,
            bounds,
        };
        params.validate()?;
        Ok(params)
    }
}

/// Generate a paired sample set for the given genotype groups
///
/// Picks the bounded variant when `params.bounds` is set. Labels in
/// `genotypes` only determine the number of rows.
pub fn generate<D: DrawSource + ?Sized>(
    params: &GenerationParameters,
    genotypes: &GenotypeSpec,
    draws: &mut D,
) -> Result<SampleSet> {
    generate_with_target(params, genotypes, draws).map(|(samples, _)| samples)
}

/// Like [`generate`], also returning the solved SD of the paired differences
pub fn generate_with_target<D: DrawSource + ?Sized>(
    params: &GenerationParameters,
    genotypes: &GenotypeSpec,
    draws: &mut D,
) -> Result<(SampleSet, f64)> {
    let n = genotypes.total();
    if n < 2 {
        return Err(PairgenError::InvalidSampleSize { n });
    }
    params.validate()?;

    let sd_target = solve_target_sd(n, params.mean_diff, params.p_value)?;

    let samples = match &params.bounds {
        Some(bounds) => bounded::generate_bounded(params.mean_diff, sd_target, bounds, n, draws)?,
        None => unbounded::generate_unbounded(params.mean_diff, sd_target, &params.baseline, n, draws)?,
    };
    Ok((samples, sd_target))
}

/// Draw differences from Normal(mean_diff, sd_target) and force the exact moments
fn draw_differences<D: DrawSource + ?Sized>(
    draws: &mut D,
    mean_diff: f64,
    sd_target: f64,
    n: usize,
) -> Result<Array1<f64>> {
    let raw = draws.normal(mean_diff, sd_target, n)?;
    Ok(rescale(raw.view(), mean_diff, sd_target))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::{mean, sample_sd};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    /// Every draw returns the same constant
    struct ConstantDraws {
        value: f64,
    }

    impl DrawSource for ConstantDraws {
        fn normal(&mut self, _mean: f64, _sd: f64, n: usize) -> Result<Array1<f64>> {
            Ok(Array1::from_elem(n, self.value))
        }

        fn uniform(&mut self, _low: f64, _high: f64, n: usize) -> Result<Array1<f64>> {
            Ok(Array1::from_elem(n, self.value))
        }
    }

    fn genotypes(n_wt: usize, n_ko: usize) -> GenotypeSpec {
        GenotypeSpec::new(&[("WT", n_wt), ("KO", n_ko)]).unwrap()
    }

    #[test]
    fn test_data_type_parse() {
        assert_eq!("Abnormal".parse::<DataType>().unwrap(), DataType::Abnormal);
        assert_eq!("normal".parse::<DataType>().unwrap(), DataType::Normal);
        assert!("weird".parse::<DataType>().is_err());
    }

    #[test]
    fn test_offsets() {
        assert_eq!(DataType::Normal.baseline_offset(0.0, 100.0), 0.0);
        assert_eq!(DataType::Abnormal.baseline_offset(0.0, 100.0), 25.0);
        assert_eq!(DataType::Abnormal.followup_offset(0.0, 100.0), -25.0);
    }

    #[test]
    fn test_builder_defaults() {
        let params = GenerationParameters::builder(2.0, 0.05)
            .value_range(10.0, 30.0)
            .build()
            .unwrap();
        let bounds = params.bounds.unwrap();
        assert_eq!(bounds.baseline_normal, 20.0);
        assert_eq!(bounds.followup_normal, 22.0);
        assert_eq!(bounds.data_type, DataType::Normal);
    }

    #[test]
    fn test_builder_rejects_bad_range() {
        let res = GenerationParameters::builder(2.0, 0.05).value_range(5.0, 5.0).build();
        assert!(matches!(res, Err(PairgenError::InvalidRange { .. })));
    }

    #[test]
    fn test_generate_invalid_range() {
        let mut params = GenerationParameters::new(2.0, 0.05);
        params.bounds = Some(BoundedTarget {
            min: 10.0,
            max: 0.0,
            baseline_normal: 5.0,
            followup_normal: 5.0,
            data_type: DataType::Normal,
        });
        let mut rng = StdRng::seed_from_u64(1);
        let res = generate(&params, &genotypes(3, 3), &mut rng);
        assert!(matches!(res, Err(PairgenError::InvalidRange { .. })));
    }

    #[test]
    fn test_generate_invalid_sample_size() {
        let params = GenerationParameters::new(2.0, 0.05);
        let mut rng = StdRng::seed_from_u64(1);

        let single = GenotypeSpec::new(&[("A", 1)]).unwrap();
        assert!(matches!(
            generate(&params, &single, &mut rng),
            Err(PairgenError::InvalidSampleSize { n: 1 })
        ));

        let empty = GenotypeSpec::new(&[("A", 0)]).unwrap();
        assert!(matches!(
            generate(&params, &empty, &mut rng),
            Err(PairgenError::InvalidSampleSize { n: 0 })
        ));
    }

    #[test]
    fn test_generate_degenerate_target() {
        let params = GenerationParameters::new(2.0, 1.0);
        let mut rng = StdRng::seed_from_u64(1);
        assert!(matches!(
            generate(&params, &genotypes(4, 4), &mut rng),
            Err(PairgenError::DegenerateTarget { .. })
        ));
    }

    #[test]
    fn test_zero_variance_draw_falls_back_to_constant() {
        let params = GenerationParameters::new(1.5, 0.05);
        let mut draws = ConstantDraws { value: 7.0 };
        let samples = generate(&params, &genotypes(3, 3), &mut draws).unwrap();

        for d in samples.differences().iter() {
            assert!((d - 1.5).abs() < 1e-12, "difference should be constant 1.5, got {}", d);
        }
        assert!(samples.followup().iter().all(|v| v.is_finite()));
    }

    #[test]
    fn test_zero_variance_bounded_falls_back() {
        let params = GenerationParameters::builder(-1.0, 0.05)
            .value_range(0.0, 10.0)
            .build()
            .unwrap();
        let mut draws = ConstantDraws { value: 5.0 };
        let samples = generate(&params, &genotypes(2, 2), &mut draws).unwrap();

        for d in samples.differences().iter() {
            assert!((d + 1.0).abs() < 1e-12, "difference should be constant -1, got {}", d);
        }
    }

    #[test]
    fn test_generate_with_target_returns_solved_sd() {
        let params = GenerationParameters::new(-1.0, 0.01);
        let mut rng = StdRng::seed_from_u64(4);
        let (samples, sd_target) = generate_with_target(&params, &genotypes(4, 3), &mut rng).unwrap();
        assert_eq!(sd_target, solve_target_sd(7, -1.0, 0.01).unwrap());
        assert!((sample_sd(samples.differences().view()) - sd_target).abs() < 1e-9);
    }

    #[test]
    fn test_exact_difference_moments() {
        let params = GenerationParameters::new(2.0, 0.05);
        let sd_target = solve_target_sd(10, 2.0, 0.05).unwrap();

        for seed in 0..5 {
            let mut rng = StdRng::seed_from_u64(seed);
            let samples = generate(&params, &genotypes(5, 5), &mut rng).unwrap();
            let diff = samples.differences();
            assert!((mean(diff.view()) - 2.0).abs() < 1e-9);
            assert!((sample_sd(diff.view()) - sd_target).abs() < 1e-9);
        }
    }
}
