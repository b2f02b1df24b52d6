//! Paired sample arrays and the labelled generated dataset

use ndarray::Array1;
use serde::{Deserialize, Serialize};

use super::table::{ColumnSource, Table};
use super::{GenotypeSpec, BASELINE_COLUMN, FOLLOWUP_COLUMN, GENOTYPE_COLUMN};
use crate::error::{PairgenError, Result};

/// Index-aligned Baseline and Followup measurements
///
/// The paired difference is always derived from the two arrays and never
/// stored on its own.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleSet {
    baseline: Array1<f64>,
    followup: Array1<f64>,
}

impl SampleSet {
    /// Create a sample set, checking that both arrays have the same length
    pub fn new(baseline: Array1<f64>, followup: Array1<f64>) -> Result<Self> {
        if baseline.len() != followup.len() {
            return Err(PairgenError::DimensionMismatch {
                expected: format!("{} Followup values", baseline.len()),
                got: format!("{} Followup values", followup.len()),
            });
        }
        Ok(Self { baseline, followup })
    }

    pub fn baseline(&self) -> &Array1<f64> {
        &self.baseline
    }

    pub fn followup(&self) -> &Array1<f64> {
        &self.followup
    }

    /// Followup - Baseline, recomputed on every call
    pub fn differences(&self) -> Array1<f64> {
        &self.followup - &self.baseline
    }

    pub fn len(&self) -> usize {
        self.baseline.len()
    }

    pub fn is_empty(&self) -> bool {
        self.baseline.is_empty()
    }
}

/// One output row: Genotype, Baseline, Followup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetRow {
    #[serde(rename = "Genotype")]
    pub genotype: String,
    #[serde(rename = "Baseline")]
    pub baseline: f64,
    #[serde(rename = "Followup")]
    pub followup: f64,
}

/// A sample set annotated with the genotype label of every row
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedDataset {
    genotypes: Vec<String>,
    samples: SampleSet,
}

impl GeneratedDataset {
    /// Attach the expanded genotype labels to a sample set
    pub fn new(spec: &GenotypeSpec, samples: SampleSet) -> Result<Self> {
        let genotypes = spec.expand_labels();
        if genotypes.len() != samples.len() {
            return Err(PairgenError::DimensionMismatch {
                expected: format!("{} rows from genotype spec", genotypes.len()),
                got: format!("{} generated rows", samples.len()),
            });
        }
        Ok(Self { genotypes, samples })
    }

    pub fn genotypes(&self) -> &[String] {
        &self.genotypes
    }

    pub fn samples(&self) -> &SampleSet {
        &self.samples
    }

    pub fn n_rows(&self) -> usize {
        self.genotypes.len()
    }

    /// Row-wise view used for CSV serialization
    pub fn rows(&self) -> impl Iterator<Item = DatasetRow> + '_ {
        self.genotypes
            .iter()
            .zip(self.samples.baseline.iter())
            .zip(self.samples.followup.iter())
            .map(|((g, &b), &f)| DatasetRow {
                genotype: g.clone(),
                baseline: b,
                followup: f,
            })
    }

    /// Convert to a generic string table with the three output columns
    pub fn to_table(&self) -> Table {
        let headers = vec![
            GENOTYPE_COLUMN.to_string(),
            BASELINE_COLUMN.to_string(),
            FOLLOWUP_COLUMN.to_string(),
        ];
        let rows = self
            .rows()
            .map(|r| vec![r.genotype, r.baseline.to_string(), r.followup.to_string()])
            .collect();
        Table::from_rows(headers, rows)
    }
}

impl ColumnSource for GeneratedDataset {
    fn has_column(&self, name: &str) -> bool {
        matches!(name, GENOTYPE_COLUMN | BASELINE_COLUMN | FOLLOWUP_COLUMN)
    }

    fn numeric_column(&self, name: &str) -> Result<Array1<f64>> {
        match name {
            BASELINE_COLUMN => Ok(self.samples.baseline.clone()),
            FOLLOWUP_COLUMN => Ok(self.samples.followup.clone()),
            _ => Err(PairgenError::MissingColumns {
                missing: vec![name.to_string()],
            }),
        }
    }
}
