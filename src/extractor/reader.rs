//! Streaming extraction pass
//!
//! Reads an output file line by line, keeps node lines whose node is not
//! excluded, and collects their FX and T values in file order.

use std::borrow::Cow;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, info, trace};

use super::pattern::NodeLinePattern;
use super::stats::{ExtractStats, Extraction};
use crate::config::ExtractorConfig;
use crate::constants::sentinel_nodes;
use crate::error::{Error, Result};
use crate::models::{FxTSeries, NodeRecord};

/// Label used in I/O errors for readers that have no path
const STREAM_LABEL: &str = "<stream>";

/// Read the FX and T columns of an ESATAN output file.
///
/// Nodes 99998 and 99999 are skipped; every other node is kept. Lines that
/// do not have the node layout are ignored. The returned vectors always have
/// the same length.
pub fn read_fx_t(path: impl AsRef<Path>) -> Result<(Vec<f64>, Vec<f64>)> {
    let reader = FxTReader::new(ExtractorConfig::default())?;
    Ok(reader.read_path(path.as_ref())?.into_parts())
}

/// FX/T extractor for ESATAN node output
#[derive(Debug, Clone)]
pub struct FxTReader {
    pattern: NodeLinePattern,
    config: ExtractorConfig,
}

impl FxTReader {
    pub fn new(config: ExtractorConfig) -> Result<Self> {
        Ok(Self {
            pattern: NodeLinePattern::new()?,
            config,
        })
    }

    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Extract FX/T values and statistics from a file
    pub fn read_path(&self, path: &Path) -> Result<Extraction> {
        info!("Reading ESATAN output: {}", path.display());

        let file = File::open(path).map_err(|e| Error::io(path, e))?;
        let extraction = self.collect_series(BufReader::new(file), path)?;

        info!(
            "Extracted {} FX/T pairs from {}",
            extraction.series.len(),
            path.display()
        );
        Ok(extraction)
    }

    /// Extract FX/T values and statistics from any buffered reader
    pub fn read_from<R: BufRead>(&self, reader: R) -> Result<Extraction> {
        self.collect_series(reader, Path::new(STREAM_LABEL))
    }

    /// Accepted records with all four fields, in input order
    pub fn extract_records<R: BufRead>(&self, reader: R) -> Result<Vec<NodeRecord>> {
        let mut records = Vec::new();
        self.scan(reader, Path::new(STREAM_LABEL), |record| {
            records.push(record)
        })?;
        Ok(records)
    }

    fn collect_series<R: BufRead>(&self, reader: R, origin: &Path) -> Result<Extraction> {
        let mut series = FxTSeries::new();
        let stats = self.scan(reader, origin, |record| series.push(record.fx, record.t))?;
        Ok(Extraction { series, stats })
    }

    /// Single pass over `reader`, handing each accepted record to `accept`
    fn scan<R, F>(&self, mut reader: R, origin: &Path, mut accept: F) -> Result<ExtractStats>
    where
        R: BufRead,
        F: FnMut(NodeRecord),
    {
        let mut stats = ExtractStats::new();
        let mut buf = Vec::new();

        loop {
            buf.clear();
            let read = reader
                .read_until(b'\n', &mut buf)
                .map_err(|e| Error::io(origin, e))?;
            if read == 0 {
                break;
            }

            for raw_line in split_lines(&buf) {
                stats.lines_read += 1;
                let line_number = stats.lines_read;
                // Non-UTF-8 bytes cannot form a node line; decode lossily and let it fail to match
                let line: Cow<'_, str> = String::from_utf8_lossy(raw_line);

                let Some(fields) = self.pattern.captures(&line) else {
                    stats.lines_skipped += 1;
                    trace!("Skipped line {}: no node layout", line_number);
                    continue;
                };

                stats.records_matched += 1;
                let record = fields.parse(line_number)?;

                // A node too large for u64 is neither a sentinel nor a configured exclusion
                if let Some(node) = record.node {
                    if sentinel_nodes::contains(node) {
                        stats.sentinel_excluded += 1;
                        continue;
                    }
                    if self.config.is_excluded(node) {
                        stats.config_excluded += 1;
                        continue;
                    }
                }

                accept(record);
            }
        }

        debug!(
            "{}: {} lines, {} matched, {} sentinel, {} excluded, {} skipped",
            origin.display(),
            stats.lines_read,
            stats.records_matched,
            stats.sentinel_excluded,
            stats.config_excluded,
            stats.lines_skipped
        );

        Ok(stats)
    }
}

/// Split a `read_until(b'\n')` chunk into lines, treating `\n`, `\r\n` and a
/// lone `\r` as line terminators. A `\r\n` pair always ends its chunk.
fn split_lines(chunk: &[u8]) -> impl Iterator<Item = &[u8]> {
    let body = chunk.strip_suffix(b"\n").unwrap_or(chunk);
    let body = body.strip_suffix(b"\r").unwrap_or(body);
    body.split(|&b| b == b'\r')
}
