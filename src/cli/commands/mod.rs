//! Command implementations for the ESATAN reader CLI
//!
//! Each subcommand lives in its own module.

pub mod extract;
pub mod shared;
pub mod summary;

use crate::cli::args::Commands;
use anyhow::Result;

/// Dispatch to the handler for `command`
pub fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Extract(extract_args) => extract::run_extract(extract_args),
        Commands::Summary(summary_args) => summary::run_summary(summary_args),
    }
}
