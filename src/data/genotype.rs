//! Genotype group specification
//!
//! A genotype spec is an ordered list of (label, count) groups. Row `i` of a
//! generated dataset belongs to the group whose cumulative count range
//! contains `i`. Labels only annotate rows; they never influence the numbers.

use serde::{Deserialize, Serialize};

use crate::error::{PairgenError, Result};

/// A single labelled group of rows
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genotype {
    /// Group label written to the Genotype column
    pub label: String,
    /// Number of rows in this group
    pub count: usize,
}

impl Genotype {
    pub fn new(label: &str, count: usize) -> Result<Self> {
        let label = label.trim();
        if label.is_empty() {
            return Err(PairgenError::InvalidGenotype {
                reason: "genotype label must not be empty".to_string(),
            });
        }
        Ok(Self {
            label: label.to_string(),
            count,
        })
    }

    /// Parse a `LABEL=COUNT` pair (e.g. `WT=5`)
    pub fn parse(spec: &str) -> Result<Self> {
        let (label, count) = spec.rsplit_once('=').ok_or_else(|| PairgenError::InvalidGenotype {
            reason: format!("'{}' is not of the form LABEL=COUNT", spec),
        })?;

        let count = count
            .trim()
            .parse::<usize>()
            .map_err(|_| PairgenError::InvalidGenotype {
                reason: format!("invalid sample size '{}' for genotype '{}'", count.trim(), label.trim()),
            })?;

        Self::new(label, count)
    }
}

/// Ordered genotype groups
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenotypeSpec {
    groups: Vec<Genotype>,
}

impl GenotypeSpec {
    /// Create a spec from `(label, count)` pairs, preserving order
    pub fn new<S: AsRef<str>>(pairs: &[(S, usize)]) -> Result<Self> {
        let groups = pairs
            .iter()
            .map(|(label, count)| Genotype::new(label.as_ref(), *count))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::from_groups(groups))
    }

    pub fn from_groups(groups: Vec<Genotype>) -> Self {
        for g in &groups {
            if g.count == 0 {
                log::warn!("Genotype '{}' has a sample size of 0 and contributes no rows", g.label);
            }
        }
        Self { groups }
    }

    /// Parse a list of `LABEL=COUNT` strings
    pub fn parse_all<S: AsRef<str>>(specs: &[S]) -> Result<Self> {
        let groups = specs
            .iter()
            .map(|s| Genotype::parse(s.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::from_groups(groups))
    }

    pub fn groups(&self) -> &[Genotype] {
        &self.groups
    }

    /// Total sample size n
    pub fn total(&self) -> usize {
        self.groups.iter().map(|g| g.count).sum()
    }

    /// Per-row label sequence of length `total()`, groups kept contiguous and in order
    pub fn expand_labels(&self) -> Vec<String> {
        let mut labels = Vec::with_capacity(self.total());
        for g in &self.groups {
            labels.extend(std::iter::repeat(g.label.clone()).take(g.count));
        }
        labels
    }

    /// Label of the group that row `row` falls into
    pub fn label_of(&self, row: usize) -> Option<&str> {
        let mut end = 0;
        for g in &self.groups {
            end += g.count;
            if row < end {
                return Some(g.label.as_str());
            }
        }
        None
    }
}
