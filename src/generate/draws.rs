//! Random draws consumed by the generator
//!
//! The generator never touches a global random stream; every call receives a
//! caller-owned `DrawSource`. Any `rand::RngCore` is one, and tests can supply
//! their own deterministic implementations.

use ndarray::Array1;
use rand::RngCore;
use rand_distr::{Distribution, Normal, Uniform};

use crate::error::{PairgenError, Result};

/// Source of vectorised random draws
pub trait DrawSource {
    /// `n` draws from Normal(mean, sd)
    fn normal(&mut self, mean: f64, sd: f64, n: usize) -> Result<Array1<f64>>;

    /// `n` draws from Uniform[low, high)
    fn uniform(&mut self, low: f64, high: f64, n: usize) -> Result<Array1<f64>>;
}

impl<R: RngCore + ?Sized> DrawSource for R {
    fn normal(&mut self, mean: f64, sd: f64, n: usize) -> Result<Array1<f64>> {
        let dist = Normal::new(mean, sd).map_err(|e| PairgenError::InvalidDistribution {
            reason: format!("Normal(mean = {}, sd = {}): {}", mean, sd, e),
        })?;
        Ok(Array1::from_iter((0..n).map(|_| dist.sample(self))))
    }

    fn uniform(&mut self, low: f64, high: f64, n: usize) -> Result<Array1<f64>> {
        if !(low < high) || !low.is_finite() || !high.is_finite() {
            return Err(PairgenError::InvalidRange { min: low, max: high });
        }
        let dist = Uniform::new(low, high);
        Ok(Array1::from_iter((0..n).map(|_| dist.sample(self))))
    }
}
