//! Summary command implementation
//!
//! Reports per-file record counts and FX/T ranges.

use super::shared::{extract_inputs, load_configuration, open_output, setup_logging};
use crate::cli::args::{OutputFormat, SummaryArgs};
use crate::output::{SummaryReport, write_json, write_summary_human};
use anyhow::{Context, Result};
use std::io::Write;
use tracing::debug;

/// Summary command runner
pub fn run_summary(args: SummaryArgs) -> Result<()> {
    setup_logging(&args.common)?;
    debug!("Summary arguments: {:?}", args);

    args.validate()?;

    let config = load_configuration(&args.common)?;
    let results = extract_inputs(&args.common, config)?;
    let report = SummaryReport::from_extractions(&results);

    let mut writer = open_output(None)?;
    match args.output_format {
        OutputFormat::Json => write_json(&mut writer, &report)?,
        OutputFormat::Human | OutputFormat::Csv => write_summary_human(&mut writer, &report)?,
    }
    writer.flush().context("Failed to flush output")?;

    Ok(())
}
