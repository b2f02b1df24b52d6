//! Error types for rust_pairgen

use thiserror::Error;

/// Main error type for paired dataset generation and analysis
#[derive(Error, Debug)]
pub enum PairgenError {
    #[error("Invalid sample size: total sample size must be at least 2, got {n}")]
    InvalidSampleSize { n: usize },

    #[error("Degenerate target: critical t-value is zero for p-value {p_value} with df {df}")]
    DegenerateTarget { p_value: f64, df: f64 },

    #[error("Invalid p-value {p_value}: must lie in (0, 1]")]
    InvalidPValue { p_value: f64 },

    #[error("Invalid value range: min ({min}) must be less than max ({max})")]
    InvalidRange { min: f64, max: f64 },

    #[error("Missing required columns: {}", .missing.join(", "))]
    MissingColumns { missing: Vec<String> },

    #[error("Invalid genotype specification: {reason}")]
    InvalidGenotype { reason: String },

    #[error("Dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: String, got: String },

    #[error("Invalid distribution: {reason}")]
    InvalidDistribution { reason: String },

    #[error("Empty data: {reason}")]
    EmptyData { reason: String },

    #[error("Invalid input: {reason}")]
    InvalidInput { reason: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV parsing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Result type alias for rust_pairgen operations
pub type Result<T> = std::result::Result<T, PairgenError>;
