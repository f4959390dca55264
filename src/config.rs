//! Configuration for the extraction pass.
//!
//! The two sentinel nodes are always excluded. A configuration may name
//! further nodes to drop, either programmatically, from the command line,
//! or from a JSON file.

use crate::constants::sentinel_nodes;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::Path;
use tracing::debug;

/// Extraction settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExtractorConfig {
    /// Nodes excluded in addition to the sentinel set
    pub extra_excluded_nodes: BTreeSet<u64>,
}

impl ExtractorConfig {
    /// Configuration with extra nodes to exclude
    pub fn with_excluded_nodes(nodes: impl IntoIterator<Item = u64>) -> Self {
        Self {
            extra_excluded_nodes: nodes.into_iter().collect(),
        }
    }

    /// Load configuration from a JSON file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let config: Self = serde_json::from_str(&content).map_err(|e| {
            Error::configuration(format!("Invalid config file {}: {}", path.display(), e))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Merge extra exclusions into this configuration
    pub fn merge_excluded(&mut self, nodes: impl IntoIterator<Item = u64>) {
        self.extra_excluded_nodes.extend(nodes);
    }

    /// Check the configuration for redundant entries
    pub fn validate(&self) -> Result<()> {
        for node in &self.extra_excluded_nodes {
            if sentinel_nodes::contains(*node) {
                debug!("Node {} is a sentinel and is always excluded", node);
            }
        }
        Ok(())
    }

    /// True if records for `node` must be dropped
    pub fn is_excluded(&self, node: u64) -> bool {
        sentinel_nodes::contains(node) || self.extra_excluded_nodes.contains(&node)
    }
}

/// Parse a comma-separated list of node numbers, e.g. `"1,2, 30"`
pub fn parse_node_list(s: &str) -> Result<Vec<u64>> {
    let nodes = s
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| {
            part.parse::<u64>().map_err(|e| {
                Error::configuration(format!("Invalid node number '{}': {}", part, e))
            })
        })
        .collect::<Result<Vec<_>>>()?;

    if nodes.is_empty() {
        return Err(Error::configuration("Node list cannot be empty"));
    }

    Ok(nodes)
}
