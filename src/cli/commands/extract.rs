//! Extract command implementation
//!
//! Writes the FX and T columns of each input file in the requested format.

use super::shared::{extract_inputs, load_configuration, open_output, setup_logging};
use crate::cli::args::{ExtractArgs, OutputFormat};
use crate::output::{FileExtraction, write_csv, write_human, write_json};
use anyhow::{Context, Result};
use std::io::Write;
use std::time::Instant;
use tracing::{debug, info};

/// Extract command runner
pub fn run_extract(args: ExtractArgs) -> Result<()> {
    let start_time = Instant::now();

    setup_logging(&args.common)?;
    debug!("Extract arguments: {:?}", args);

    args.validate()?;

    let config = load_configuration(&args.common)?;
    let results = extract_inputs(&args.common, config)?;

    let writer = open_output(args.output_file.as_deref())?;
    write_results(writer, args.output_format, &results)?;

    let total: usize = results.iter().map(|r| r.series.len()).sum();
    info!(
        "Wrote {} FX/T pairs from {} files in {:.2?}",
        total,
        results.len(),
        start_time.elapsed()
    );
    Ok(())
}

/// Render extraction results in the requested format
pub fn write_results<W: Write>(
    mut writer: W,
    format: OutputFormat,
    results: &[FileExtraction],
) -> Result<()> {
    match format {
        OutputFormat::Csv => write_csv(&mut writer, results)?,
        OutputFormat::Json => write_json(&mut writer, results)?,
        OutputFormat::Human => write_human(&mut writer, results)?,
    }
    writer.flush().context("Failed to flush output")?;
    Ok(())
}
