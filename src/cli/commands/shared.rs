//! Shared components for CLI commands
//!
//! Logging setup, configuration loading, and the per-file extraction loop
//! used by every subcommand.

use crate::cli::args::CommonArgs;
use crate::cli::input::resolve_inputs;
use crate::config::ExtractorConfig;
use crate::constants::LOG_TARGET;
use crate::extractor::FxTReader;
use crate::output::FileExtraction;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use tracing::{debug, info};

/// Set up structured logging on stderr
pub fn setup_logging(args: &CommonArgs) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    // RUST_LOG wins over -v/-q
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{}={}", LOG_TARGET, log_level)));

    if args.quiet {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(io::stderr)
                    .compact(),
            )
            .try_init()
            .context("Failed to initialise logging")?;
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(io::stderr),
            )
            .try_init()
            .context("Failed to initialise logging")?;
    }

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Build the extractor configuration from the config file and `--exclude`
pub fn load_configuration(args: &CommonArgs) -> Result<ExtractorConfig> {
    let mut config = match &args.config_file {
        Some(path) => ExtractorConfig::from_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => ExtractorConfig::default(),
    };

    config.merge_excluded(args.excluded_nodes().iter().copied());
    config.validate()?;

    debug!("Loaded configuration: {:?}", config);
    Ok(config)
}

/// Resolve inputs and run one extraction pass per file.
///
/// Stops at the first file that cannot be read.
pub fn extract_inputs(args: &CommonArgs, config: ExtractorConfig) -> Result<Vec<FileExtraction>> {
    let paths = resolve_inputs(&args.inputs)?;
    info!("Extracting FX/T from {} files", paths.len());

    let reader = FxTReader::new(config)?;
    if !reader.config().extra_excluded_nodes.is_empty() {
        info!(
            "Excluding nodes {:?} in addition to the sentinels",
            reader.config().extra_excluded_nodes
        );
    }
    let mut results = Vec::with_capacity(paths.len());

    for path in paths {
        let extraction = reader
            .read_path(&path)
            .with_context(|| format!("Failed to extract {}", path.display()))?;
        results.push(FileExtraction::new(path, extraction));
    }

    Ok(results)
}

/// Open the output destination: a file when given, otherwise stdout
pub fn open_output(path: Option<&Path>) -> Result<Box<dyn Write>> {
    match path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file {}", path.display()))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(BufWriter::new(io::stdout().lock()))),
    }
}
