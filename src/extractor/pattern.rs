//! Node line matching
//!
//! A node line is, after optional leading whitespace, an unsigned node number
//! followed by three whitespace-separated numbers (FX, T, QI). The match is
//! anchored at the start of the line and anything after the fourth field is
//! ignored.

use regex::Regex;

use crate::constants::{NODE_PATTERN, NUMBER_PATTERN};
use crate::error::{Error, Result};
use crate::models::NodeRecord;

/// Compiled node line matcher
#[derive(Debug, Clone)]
pub struct NodeLinePattern {
    regex: Regex,
}

/// Raw text of the four fields of a matched line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeFields<'a> {
    pub node: &'a str,
    pub fx: &'a str,
    pub t: &'a str,
    pub qi: &'a str,
}

impl NodeLinePattern {
    pub fn new() -> Result<Self> {
        let pattern = format!(
            r"^\s*({node})\s+({num})\s+({num})\s+({num})",
            node = NODE_PATTERN,
            num = NUMBER_PATTERN
        );
        Ok(Self {
            regex: Regex::new(&pattern)?,
        })
    }

    /// Match a line, returning its four fields if it has the node layout
    pub fn captures<'a>(&self, line: &'a str) -> Option<NodeFields<'a>> {
        let (_, [node, fx, t, qi]) = self.regex.captures(line)?.extract();
        Some(NodeFields { node, fx, t, qi })
    }
}

impl NodeFields<'_> {
    /// Convert the matched text into a record.
    ///
    /// `line` is the 1-based line number, used only for error reporting. The
    /// node text is all ASCII digits, so it only fails to parse when it
    /// overflows `u64`; such a node is kept with `node: None`.
    pub fn parse(&self, line: usize) -> Result<NodeRecord> {
        Ok(NodeRecord {
            node: self.node.parse::<u64>().ok(),
            fx: parse_number(line, "fx", self.fx)?,
            t: parse_number(line, "t", self.t)?,
            qi: parse_number(line, "qi", self.qi)?,
        })
    }
}

fn parse_number(line: usize, field: &'static str, value: &str) -> Result<f64> {
    value
        .parse::<f64>()
        .map_err(|e| Error::field_parse(line, field, value, e))
}
