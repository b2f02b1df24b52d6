//! Minimal named-column table
//!
//! Cells are kept as strings until a numeric column is requested, so a table
//! can be validated for the columns it exposes before anything is parsed.

use ndarray::Array1;

use crate::error::{PairgenError, Result};

/// Anything that exposes named columns, some of which hold numbers
pub trait ColumnSource {
    /// Whether a column with this exact name exists
    fn has_column(&self, name: &str) -> bool;

    /// Parse the named column as floating-point values
    fn numeric_column(&self, name: &str) -> Result<Array1<f64>>;
}

/// Column-major string table with a header row
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    headers: Vec<String>,
    columns: Vec<Vec<String>>,
}

impl Table {
    /// Build from row-major data. Short rows are padded with empty cells.
    pub fn from_rows(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        let mut columns: Vec<Vec<String>> = vec![Vec::with_capacity(rows.len()); headers.len()];
        for row in rows {
            for (j, col) in columns.iter_mut().enumerate() {
                col.push(row.get(j).cloned().unwrap_or_default());
            }
        }
        Self { headers, columns }
    }

    /// Build from named numeric columns
    pub fn from_numeric(columns: &[(&str, &[f64])]) -> Result<Self> {
        let n = columns.first().map_or(0, |(_, v)| v.len());
        if let Some((name, v)) = columns.iter().find(|(_, v)| v.len() != n) {
            return Err(PairgenError::DimensionMismatch {
                expected: format!("{} values", n),
                got: format!("{} values in column '{}'", v.len(), name),
            });
        }
        Ok(Self {
            headers: columns.iter().map(|(name, _)| name.to_string()).collect(),
            columns: columns
                .iter()
                .map(|(_, v)| v.iter().map(|x| x.to_string()).collect())
                .collect(),
        })
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn n_rows(&self) -> usize {
        self.columns.first().map_or(0, |c| c.len())
    }

    pub fn n_cols(&self) -> usize {
        self.headers.len()
    }

    /// Raw string cells of a column
    pub fn column(&self, name: &str) -> Option<&[String]> {
        self.headers
            .iter()
            .position(|h| h == name)
            .map(|j| self.columns[j].as_slice())
    }
}

impl ColumnSource for Table {
    fn has_column(&self, name: &str) -> bool {
        self.headers.iter().any(|h| h == name)
    }

    fn numeric_column(&self, name: &str) -> Result<Array1<f64>> {
        let cells = self.column(name).ok_or_else(|| PairgenError::MissingColumns {
            missing: vec![name.to_string()],
        })?;

        cells
            .iter()
            .enumerate()
            .map(|(i, cell)| {
                cell.trim().parse::<f64>().map_err(|_| PairgenError::InvalidInput {
                    reason: format!("Invalid numeric value '{}' in column '{}' (row {})", cell, name, i + 1),
                })
            })
            .collect::<Result<Vec<f64>>>()
            .map(Array1::from)
    }
}
