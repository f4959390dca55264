//! Input path resolution
//!
//! Command-line inputs are either plain paths or glob patterns. Plain paths
//! are passed through untouched so that a missing file surfaces as a
//! file-access error from the extractor.

use crate::error::{Error, Result};
use std::path::PathBuf;
use tracing::debug;

/// True if the argument contains glob metacharacters
pub fn is_glob_pattern(input: &str) -> bool {
    input.contains(['*', '?', '['])
}

/// Expand inputs into file paths, preserving argument order.
///
/// Matches of a single pattern are returned in sorted order. A pattern that
/// matches nothing is a configuration error.
pub fn resolve_inputs(inputs: &[String]) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();

    for input in inputs {
        if !is_glob_pattern(input) {
            paths.push(PathBuf::from(input));
            continue;
        }

        let entries = glob::glob(input).map_err(|e| {
            Error::configuration(format!("Invalid glob pattern '{}': {}", input, e))
        })?;

        let mut matched = Vec::new();
        for entry in entries {
            let path = entry.map_err(|e| {
                let path = e.path().to_path_buf();
                Error::io(path, e.into_error())
            })?;
            if path.is_file() {
                matched.push(path);
            }
        }

        if matched.is_empty() {
            return Err(Error::configuration(format!(
                "No files match pattern '{}'",
                input
            )));
        }

        matched.sort();
        debug!("Pattern '{}' matched {} files", input, matched.len());
        paths.extend(matched);
    }

    Ok(paths)
}
