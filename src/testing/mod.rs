//! Statistical testing for paired measurements

mod paired;
mod pvalue;

pub use paired::{paired_t_test, PairedTTest};
pub use pvalue::{calculate_pvalue_t, critical_t};
