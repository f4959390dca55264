//! Application constants for the ESATAN reader
//!
//! Sentinel node numbers, the node record grammar, and output column names.

// =============================================================================
// Node Numbers
// =============================================================================

/// Sentinel/summary nodes that never contribute to extracted output
pub mod sentinel_nodes {
    /// Boundary accounting node
    pub const BOUNDARY: u64 = 99998;

    /// Environment/space node
    pub const ENVIRONMENT: u64 = 99999;

    /// Constant-time membership test for the sentinel set
    pub const fn contains(node: u64) -> bool {
        matches!(node, BOUNDARY | ENVIRONMENT)
    }
}

// =============================================================================
// Record Grammar
// =============================================================================

/// A signed decimal with optional fraction and exponent.
///
/// Digits are ASCII only so that anything matched here is accepted by `f64::from_str`.
pub const NUMBER_PATTERN: &str = r"[+-]?[0-9]+(?:\.[0-9]+)?(?:[Ee][+-]?[0-9]+)?";

/// Unsigned node identifier
pub const NODE_PATTERN: &str = r"[0-9]+";

// =============================================================================
// Output
// =============================================================================

/// Column names used by the CSV writer
pub mod columns {
    pub const FILE: &str = "file";
    pub const FX: &str = "fx";
    pub const T: &str = "t";
}

/// Log target used for the `RUST_LOG`-less default filter
pub const LOG_TARGET: &str = "esatan_reader";
