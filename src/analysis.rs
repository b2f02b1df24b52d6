//! Dataset analyzer
//!
//! Recovers the observed mean difference and paired t-test p-value from an
//! existing Baseline/Followup dataset.

use serde::{Deserialize, Serialize};

use crate::data::{ColumnSource, SampleSet, BASELINE_COLUMN, FOLLOWUP_COLUMN};
use crate::error::{PairgenError, Result};
use crate::testing::{paired_t_test, PairedTTest};

/// Summary reported for an analyzed dataset
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Number of rows
    pub n: usize,
    /// mean(Followup - Baseline)
    pub mean_diff: f64,
    /// Two-sided paired t-test p-value of Followup against Baseline
    pub p_value: f64,
    /// Full test details
    pub test: PairedTTest,
}

/// Check that the source exposes both paired columns and extract them
///
/// Absent columns are a hard error listing every missing name.
pub fn paired_samples<S: ColumnSource + ?Sized>(source: &S) -> Result<SampleSet> {
    let missing: Vec<String> = [BASELINE_COLUMN, FOLLOWUP_COLUMN]
        .iter()
        .filter(|name| !source.has_column(name))
        .map(|name| name.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(PairgenError::MissingColumns { missing });
    }

    let baseline = source.numeric_column(BASELINE_COLUMN)?;
    let followup = source.numeric_column(FOLLOWUP_COLUMN)?;
    SampleSet::new(baseline, followup)
}

/// Mean difference and paired t-test p-value of a sample set
pub fn analyze(samples: &SampleSet) -> Result<AnalysisReport> {
    let test = paired_t_test(samples.followup().view(), samples.baseline().view())?;
    Ok(AnalysisReport {
        n: test.n,
        mean_diff: test.mean_diff,
        p_value: test.pvalue,
        test,
    })
}

/// Validate the schema of a tabular source, then analyze it
pub fn analyze_source<S: ColumnSource + ?Sized>(source: &S) -> Result<AnalysisReport> {
    let samples = paired_samples(source)?;
    analyze(&samples)
}
