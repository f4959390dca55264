//! Writers for extracted FX/T series.
//!
//! Each input file produces one [`FileExtraction`]. Writers render a batch of
//! them as CSV, JSON, or a colored human-readable table.

use colored::Colorize;
use serde::Serialize;
use std::io::Write;
use std::path::PathBuf;

use crate::constants::columns;
use crate::error::{Error, Result};
use crate::extractor::{ExtractStats, Extraction};
use crate::models::{ColumnSummary, FxTSeries};

/// Extraction result tagged with the file it came from
#[derive(Debug, Clone, Serialize)]
pub struct FileExtraction {
    pub file: PathBuf,
    #[serde(flatten)]
    pub series: FxTSeries,
    pub stats: ExtractStats,
}

impl FileExtraction {
    pub fn new(file: PathBuf, extraction: Extraction) -> Self {
        Self {
            file,
            series: extraction.series,
            stats: extraction.stats,
        }
    }

    pub fn fx_summary(&self) -> Option<ColumnSummary> {
        ColumnSummary::from_values(self.series.fx())
    }

    pub fn t_summary(&self) -> Option<ColumnSummary> {
        ColumnSummary::from_values(self.series.t())
    }
}

/// Per-file summary used by the `summary` command
#[derive(Debug, Clone, Serialize)]
pub struct FileSummary {
    pub file: PathBuf,
    pub stats: ExtractStats,
    pub fx: Option<ColumnSummary>,
    pub t: Option<ColumnSummary>,
}

impl From<&FileExtraction> for FileSummary {
    fn from(extraction: &FileExtraction) -> Self {
        Self {
            file: extraction.file.clone(),
            stats: extraction.stats.clone(),
            fx: extraction.fx_summary(),
            t: extraction.t_summary(),
        }
    }
}

/// Summaries of every input plus counters totalled across all of them
#[derive(Debug, Clone, Serialize)]
pub struct SummaryReport {
    pub files: Vec<FileSummary>,
    pub total: ExtractStats,
}

impl SummaryReport {
    pub fn from_extractions(extractions: &[FileExtraction]) -> Self {
        let mut total = ExtractStats::new();
        for extraction in extractions {
            total.merge(&extraction.stats);
        }

        Self {
            files: extractions.iter().map(FileSummary::from).collect(),
            total,
        }
    }
}

/// Write FX/T rows as CSV. A `file` column is added when there is more than one input.
pub fn write_csv<W: Write>(writer: W, batches: &[FileExtraction]) -> Result<()> {
    let with_file = batches.len() > 1;
    let mut csv_writer = csv::Writer::from_writer(writer);

    if with_file {
        csv_writer.write_record([columns::FILE, columns::FX, columns::T])?;
    } else {
        csv_writer.write_record([columns::FX, columns::T])?;
    }

    for batch in batches {
        let file = batch.file.display().to_string();
        for (fx, t) in batch.series.pairs() {
            if with_file {
                csv_writer.write_record([file.clone(), fx.to_string(), t.to_string()])?;
            } else {
                csv_writer.write_record([fx.to_string(), t.to_string()])?;
            }
        }
    }

    csv_writer
        .flush()
        .map_err(|e| Error::serialization(format!("Failed to flush CSV output: {}", e)))?;
    Ok(())
}

/// Write any serializable value as pretty JSON followed by a newline
pub fn write_json<W: Write, T: Serialize + ?Sized>(mut writer: W, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, value)?;
    writeln!(writer)
        .map_err(|e| Error::serialization(format!("Failed to write JSON output: {}", e)))?;
    Ok(())
}

/// Write a human-readable table of FX/T values per file
pub fn write_human<W: Write>(mut writer: W, batches: &[FileExtraction]) -> Result<()> {
    let io_err = |e: std::io::Error| Error::serialization(format!("Failed to write output: {}", e));

    for batch in batches {
        writeln!(
            writer,
            "{} {}",
            batch.file.display().to_string().bright_cyan().bold(),
            format!("({} records)", batch.series.len()).bright_black()
        )
        .map_err(io_err)?;
        writeln!(writer, "  {:>6}  {:>16}  {:>16}", "#", "FX", "T").map_err(io_err)?;

        for (i, (fx, t)) in batch.series.pairs().enumerate() {
            writeln!(writer, "  {:>6}  {:>16.6e}  {:>16.6}", i + 1, fx, t).map_err(io_err)?;
        }
        writeln!(writer).map_err(io_err)?;
    }

    Ok(())
}

/// Write a human-readable summary of each file, with a total when there are several
pub fn write_summary_human<W: Write>(mut writer: W, report: &SummaryReport) -> Result<()> {
    let io_err = |e: std::io::Error| Error::serialization(format!("Failed to write output: {}", e));

    for summary in &report.files {
        let stats = &summary.stats;
        writeln!(writer, "{}", summary.file.display().to_string().bright_cyan().bold())
            .map_err(io_err)?;
        writeln!(
            writer,
            "  Lines read:        {}\n  Records matched:   {} ({:.1}%)\n  Sentinel excluded: {}\n  Config excluded:   {}\n  Records accepted:  {}",
            stats.lines_read,
            stats.records_matched,
            stats.match_rate(),
            stats.sentinel_excluded,
            stats.config_excluded,
            stats.records_accepted().to_string().bright_green()
        )
        .map_err(io_err)?;

        for (name, column) in [("FX", &summary.fx), ("T", &summary.t)] {
            let written = match column {
                Some(c) => writeln!(
                    writer,
                    "  {:<2} min {:.6e}  max {:.6e}  mean {:.6e}",
                    name, c.min, c.max, c.mean
                ),
                None => writeln!(writer, "  {:<2} {}", name, "no values".yellow()),
            };
            written.map_err(io_err)?;
        }
        writeln!(writer).map_err(io_err)?;
    }

    if report.files.len() > 1 {
        let total = &report.total;
        writeln!(
            writer,
            "{} {} files, {} lines, {} matched, {} excluded, {} accepted",
            "Total:".bold(),
            report.files.len(),
            total.lines_read,
            total.records_matched,
            total.sentinel_excluded + total.config_excluded,
            total.records_accepted().to_string().bright_green()
        )
        .map_err(io_err)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn batch(file: &str, pairs: &[(f64, f64)]) -> FileExtraction {
        let mut series = FxTSeries::new();
        for (fx, t) in pairs {
            series.push(*fx, *t);
        }
        FileExtraction {
            file: PathBuf::from(file),
            stats: ExtractStats {
                lines_read: pairs.len(),
                records_matched: pairs.len(),
                ..Default::default()
            },
            series,
        }
    }

    #[test]
    fn test_csv_single_file() {
        let mut out = Vec::new();
        write_csv(&mut out, &[batch("a.out", &[(0.5, 273.15), (-5.0, 10.0)])]).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "fx,t\n0.5,273.15\n-5,10\n");
    }

    #[test]
    fn test_csv_multiple_files_adds_file_column() {
        let mut out = Vec::new();
        write_csv(
            &mut out,
            &[batch("a.out", &[(1.0, 2.0)]), batch("b.out", &[(3.0, 4.0)])],
        )
        .unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "file,fx,t\na.out,1,2\nb.out,3,4\n");
    }

    #[test]
    fn test_csv_empty_series_writes_header_only() {
        let mut out = Vec::new();
        write_csv(&mut out, &[batch("a.out", &[])]).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "fx,t\n");
    }

    #[test]
    fn test_json_flattens_series() {
        let mut out = Vec::new();
        write_json(&mut out, &[batch("a.out", &[(1.0, 2.0)])]).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value[0]["file"], "a.out");
        assert_eq!(value[0]["fx"][0], 1.0);
        assert_eq!(value[0]["t"][0], 2.0);
        assert_eq!(value[0]["stats"]["records_matched"], 1);
    }

    #[test]
    fn test_summary_from_extraction() {
        let summary = FileSummary::from(&batch("a.out", &[(1.0, 10.0), (3.0, 30.0)]));

        let fx = summary.fx.unwrap();
        assert_eq!(fx.min, 1.0);
        assert_eq!(fx.max, 3.0);
        assert_eq!(summary.t.unwrap().mean, 20.0);
    }

    #[test]
    fn test_summary_report_totals_across_files() {
        let report = SummaryReport::from_extractions(&[
            batch("a.out", &[(1.0, 2.0)]),
            batch("b.out", &[(3.0, 4.0), (5.0, 6.0)]),
        ]);

        assert_eq!(report.files.len(), 2);
        assert_eq!(report.total.lines_read, 3);
        assert_eq!(report.total.records_accepted(), 3);
    }

    #[test]
    fn test_summary_human_prints_total_for_several_files() {
        colored::control::set_override(false);
        let report = SummaryReport::from_extractions(&[
            batch("a.out", &[(1.0, 2.0)]),
            batch("b.out", &[(3.0, 4.0)]),
        ]);

        let mut out = Vec::new();
        write_summary_human(&mut out, &report).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Total: 2 files, 2 lines, 2 matched, 0 excluded, 2 accepted"));
    }

    #[test]
    fn test_summary_empty_file_has_no_columns() {
        let summary = FileSummary::from(&batch("a.out", &[]));
        assert!(summary.fx.is_none());
        assert!(summary.t.is_none());
    }

    #[test]
    fn test_human_output_lists_records() {
        colored::control::set_override(false);
        let mut out = Vec::new();
        write_human(&mut out, &[batch("a.out", &[(1.0, 2.0)])]).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("a.out"));
        assert!(text.contains("(1 records)"));
        assert!(text.contains("2.000000"));
    }
}
