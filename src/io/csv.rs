//! CSV reading of generic tables and writing of generated datasets

use std::fs;
use std::path::Path;

use crate::data::{GeneratedDataset, Table};
use crate::error::{PairgenError, Result};

/// Read a delimited text file into a string table
///
/// The first row is the header. Tab is used as delimiter when the header
/// contains one, comma otherwise.
pub fn read_table<P: AsRef<Path>>(path: P) -> Result<Table> {
    let content = fs::read_to_string(path.as_ref())?;

    let header_line = content
        .lines()
        .find(|l| !l.trim().is_empty())
        .ok_or_else(|| PairgenError::EmptyData {
            reason: format!("Empty CSV file: {}", path.as_ref().display()),
        })?;
    let delimiter = if header_line.contains('\t') { b'\t' } else { b',' };

    let mut reader = ::csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .trim(::csv::Trim::All)
        .from_reader(content.as_bytes());

    let headers: Vec<String> = reader.headers()?.iter().map(|h| h.to_string()).collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        if record.iter().all(|f| f.is_empty()) {
            continue;
        }
        rows.push(record.iter().map(|f| f.to_string()).collect());
    }

    log::debug!(
        "Read {} rows x {} columns from {}",
        rows.len(),
        headers.len(),
        path.as_ref().display()
    );
    Ok(Table::from_rows(headers, rows))
}

/// Write a generated dataset with columns Genotype, Baseline, Followup
pub fn write_dataset<P: AsRef<Path>>(path: P, dataset: &GeneratedDataset) -> Result<()> {
    let mut writer = ::csv::Writer::from_path(path.as_ref())?;
    for row in dataset.rows() {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}
