//! Command-line argument definitions for the ESATAN reader
//!
//! Defines the CLI interface using the clap derive API.

use crate::config::parse_node_list;
use crate::error::{Error, Result};
use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::str::FromStr;

/// CLI arguments for the ESATAN reader
///
/// Extracts FX and T node values from ESATAN thermal-simulation output listings.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "esatan-reader",
    version,
    about = "Extract FX and T node values from ESATAN thermal output files",
    long_about = "Reads ESATAN node output listings, keeps every line with the \
                  NODE FX T QI layout, drops the sentinel nodes 99998 and 99999, \
                  and writes the FX and T columns as CSV, JSON or a readable table."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Extract FX/T values from one or more output files
    Extract(ExtractArgs),
    /// Summarise node counts and FX/T ranges per file
    Summary(SummaryArgs),
}

/// Options shared by every subcommand
#[derive(Debug, Clone, Default, ClapArgs)]
pub struct CommonArgs {
    /// Input files or glob patterns (e.g. "runs/*.out")
    #[arg(value_name = "INPUT", required = true, num_args = 1..)]
    pub inputs: Vec<String>,

    /// Extra node numbers to exclude (comma-separated)
    ///
    /// Nodes 99998 and 99999 are always excluded.
    #[arg(
        short = 'x',
        long = "exclude",
        value_name = "NODES",
        help = "Extra node numbers to exclude (comma-separated)"
    )]
    pub exclude: Option<NodeList>,

    /// Path to a JSON configuration file
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        help = "Path to configuration file (JSON format)"
    )]
    pub config_file: Option<PathBuf>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Only show errors
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Arguments for the extract command
#[derive(Debug, Clone, Parser)]
pub struct ExtractArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Output format
    #[arg(
        short = 'f',
        long = "format",
        value_enum,
        default_value = "csv",
        help = "Output format for extracted values"
    )]
    pub output_format: OutputFormat,

    /// Output file; stdout if not given
    #[arg(
        short = 'o',
        long = "output",
        value_name = "FILE",
        help = "Output file for extracted values"
    )]
    pub output_file: Option<PathBuf>,
}

/// Arguments for the summary command
#[derive(Debug, Clone, Parser)]
pub struct SummaryArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Output format
    #[arg(
        short = 'f',
        long = "format",
        value_enum,
        default_value = "human",
        help = "Output format for the summary"
    )]
    pub output_format: OutputFormat,
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON format for scripting
    Json,
    /// CSV format for data analysis
    Csv,
}

/// Wrapper for parsing comma-separated node lists
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeList {
    pub nodes: Vec<u64>,
}

impl FromStr for NodeList {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Ok(NodeList {
            nodes: parse_node_list(s)?,
        })
    }
}

impl CommonArgs {
    /// Log level derived from -v/-q
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Validate arguments that clap cannot check on its own
    pub fn validate(&self) -> Result<()> {
        if let Some(config_file) = &self.config_file {
            if !config_file.is_file() {
                return Err(Error::configuration(format!(
                    "Config file does not exist: {}",
                    config_file.display()
                )));
            }
        }
        Ok(())
    }

    pub fn excluded_nodes(&self) -> &[u64] {
        self.exclude
            .as_ref()
            .map(|list| list.nodes.as_slice())
            .unwrap_or_default()
    }
}

impl SummaryArgs {
    pub fn validate(&self) -> Result<()> {
        self.common.validate()?;
        if self.output_format == OutputFormat::Csv {
            return Err(Error::configuration(
                "Summary supports human and json output only",
            ));
        }
        Ok(())
    }
}

impl ExtractArgs {
    pub fn validate(&self) -> Result<()> {
        self.common.validate()?;
        if let Some(output_file) = &self.output_file {
            if let Some(parent) = output_file.parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    return Err(Error::configuration(format!(
                        "Output directory does not exist: {}",
                        parent.display()
                    )));
                }
            }
        }
        Ok(())
    }
}
