//! CSV input/output for paired datasets

mod csv;

pub use self::csv::{read_table, write_dataset};
