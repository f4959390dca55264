//! Test utilities for the extractor
//!
//! Fixture content modelled on an ESATAN node output listing, plus helpers
//! for writing fixtures to disk.

use std::io::Write;
use tempfile::NamedTempFile;

mod pattern_tests;

/// A node output listing with headers, separators, sentinel and ordinary nodes
pub fn create_test_listing() -> String {
    r#" ESATAN NODE OUTPUT
 MODEL = SATELLITE   TIME = 3600.0

  NODE        FX            T           QI
 ------------------------------------------------
  100   1.2345E-02   273.15   0.000
  200   -5   10   0.5
  300   0.25   -12.5E+01   1.0E-3
99998   1.0   2.0   3.0
99999   1.0   2.0   3.0

 END OF NODE OUTPUT
"#
    .to_string()
}

/// Helper to create a temporary file with given content
pub fn create_temp_file(content: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    write!(temp_file, "{}", content).unwrap();
    temp_file.flush().unwrap();
    temp_file
}
