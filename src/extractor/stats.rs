//! Extraction statistics and result structures
//!
//! Counters for one pass over an output file, and the result type pairing
//! the extracted series with those counters.

use serde::Serialize;

use crate::models::FxTSeries;

/// Extraction result with aligned FX/T values and pass statistics
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Extraction {
    /// FX/T values from accepted records, in file order
    pub series: FxTSeries,

    /// Counters for the pass that produced `series`
    pub stats: ExtractStats,
}

impl Extraction {
    /// Split into the `(fx, t)` vectors, dropping the statistics
    pub fn into_parts(self) -> (Vec<f64>, Vec<f64>) {
        self.series.into_parts()
    }
}

/// Counters for one extraction pass
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExtractStats {
    /// Total lines read
    pub lines_read: usize,

    /// Lines that matched the node record layout
    pub records_matched: usize,

    /// Matched records dropped because the node is a sentinel
    pub sentinel_excluded: usize,

    /// Matched records dropped by configured exclusions
    pub config_excluded: usize,

    /// Lines that did not match (headers, separators, blanks, malformed rows)
    pub lines_skipped: usize,
}

impl ExtractStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records that made it into the output series
    pub fn records_accepted(&self) -> usize {
        self.records_matched
            .saturating_sub(self.sentinel_excluded)
            .saturating_sub(self.config_excluded)
    }

    /// Percentage of lines that matched the node layout
    pub fn match_rate(&self) -> f64 {
        if self.lines_read == 0 {
            0.0
        } else {
            (self.records_matched as f64 / self.lines_read as f64) * 100.0
        }
    }

    /// Accumulate another pass into this one
    pub fn merge(&mut self, other: &ExtractStats) {
        self.lines_read += other.lines_read;
        self.records_matched += other.records_matched;
        self.sentinel_excluded += other.sentinel_excluded;
        self.config_excluded += other.config_excluded;
        self.lines_skipped += other.lines_skipped;
    }
}
