//! Core data structures for ESATAN node output.
//!
//! Defines the parsed node record and the aligned FX/T series produced by
//! an extraction pass.

use serde::{Deserialize, Serialize};

/// One node output line: node number followed by FX, T and QI
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NodeRecord {
    /// `None` when the node number does not fit in `u64`
    pub node: Option<u64>,
    pub fx: f64,
    pub t: f64,
    pub qi: f64,
}

/// Positionally aligned FX and T values from accepted records, in file order
///
/// Values can only be added in pairs, so `fx().len() == t().len()` always holds.
/// The type is serialize-only; there is no way to build one from unpaired vectors.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FxTSeries {
    fx: Vec<f64>,
    t: Vec<f64>,
}

impl FxTSeries {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one FX/T pair
    pub fn push(&mut self, fx: f64, t: f64) {
        self.fx.push(fx);
        self.t.push(t);
    }

    pub fn fx(&self) -> &[f64] {
        &self.fx
    }

    pub fn t(&self) -> &[f64] {
        &self.t
    }

    pub fn len(&self) -> usize {
        self.fx.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fx.is_empty()
    }

    /// Iterate over `(fx, t)` pairs
    pub fn pairs(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.fx.iter().copied().zip(self.t.iter().copied())
    }

    /// Split into the `(fx, t)` vectors
    pub fn into_parts(self) -> (Vec<f64>, Vec<f64>) {
        (self.fx, self.t)
    }
}

impl FromIterator<NodeRecord> for FxTSeries {
    fn from_iter<I: IntoIterator<Item = NodeRecord>>(iter: I) -> Self {
        let mut series = Self::new();
        for record in iter {
            series.push(record.fx, record.t);
        }
        series
    }
}

/// Minimum, maximum and mean of a column
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColumnSummary {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
}

impl ColumnSummary {
    /// Summarise a column; `None` when it is empty
    pub fn from_values(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }

        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let mean = values.iter().sum::<f64>() / values.len() as f64;

        Some(Self { min, max, mean })
    }
}
