//! Data structures for paired before/after datasets

mod genotype;
mod samples;
mod table;

pub use genotype::{Genotype, GenotypeSpec};
pub use samples::{DatasetRow, GeneratedDataset, SampleSet};
pub use table::{ColumnSource, Table};

/// Column holding the group label of each row
pub const GENOTYPE_COLUMN: &str = "Genotype";
/// Column holding the before measurement
pub const BASELINE_COLUMN: &str = "Baseline";
/// Column holding the after measurement
pub const FOLLOWUP_COLUMN: &str = "Followup";
