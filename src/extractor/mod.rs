//! FX/T extractor for ESATAN node output files
//!
//! An ESATAN output listing interleaves node records with headers, separators
//! and blank lines. This module streams such a file once, keeps every line that
//! has the four-column node layout, drops the sentinel nodes, and returns the
//! FX and T columns as aligned series.
//!
//! ## Architecture
//!
//! - [`pattern`] - Anchored node line matcher and field parsing
//! - [`reader`] - Streaming extraction pass over a file or buffered reader
//! - [`stats`] - Per-pass counters and the extraction result
//!
//! ## Usage
//!
//! ```no_run
//! let (fx, t) = esatan_reader::read_fx_t("model.out")?;
//! assert_eq!(fx.len(), t.len());
//! # Ok::<(), esatan_reader::Error>(())
//! ```

pub mod pattern;
pub mod reader;
pub mod stats;

#[cfg(test)]
pub mod tests;

pub use pattern::{NodeFields, NodeLinePattern};
pub use reader::{FxTReader, read_fx_t};
pub use stats::{ExtractStats, Extraction};
