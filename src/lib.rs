//! ESATAN Reader Library
//!
//! Extracts the FX and T node columns from ESATAN thermal-simulation output
//! listings.
//!
//! This library provides tools for:
//! - Matching node lines (`NODE FX T QI`) among headers, separators and blank lines
//! - Dropping the sentinel nodes 99998 and 99999, plus any configured extras
//! - Returning FX and T as aligned, file-ordered series
//! - Writing the results as CSV, JSON or a readable table

pub mod config;
pub mod constants;
pub mod error;
pub mod extractor;
pub mod models;
pub mod output;

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
    pub mod input;
}

// Re-export commonly used types
pub use config::ExtractorConfig;
pub use error::{Error, Result};
pub use extractor::{ExtractStats, Extraction, FxTReader, read_fx_t};
pub use models::{FxTSeries, NodeRecord};
