//! Error handling for ESATAN output extraction.
//!
//! File-access failures and field-parse failures are propagated to the caller.
//! Lines that do not match the node record layout are not errors at all.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid {field} value '{value}' on line {line}: {reason}")]
    FieldParse {
        line: usize,
        field: &'static str,
        value: String,
        reason: String,
    },

    #[error("Failed to compile node line pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl Error {
    /// Create a file-access error for the given path
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a field parse error for a matched line
    pub fn field_parse(
        line: usize,
        field: &'static str,
        value: impl Into<String>,
        reason: impl ToString,
    ) -> Self {
        Self::FieldParse {
            line,
            field,
            value: value.into(),
            reason: reason.to_string(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }

    /// True for errors caused by the input file being missing or unreadable
    pub fn is_file_access(&self) -> bool {
        matches!(self, Self::Io { .. })
    }
}

impl From<csv::Error> for Error {
    fn from(error: csv::Error) -> Self {
        Self::serialization(format!("CSV output failed: {}", error))
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::serialization(format!("JSON output failed: {}", error))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
