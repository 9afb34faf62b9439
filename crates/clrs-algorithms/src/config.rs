use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::io::DEFAULT_PRECISION;
use crate::order::SortOrder;
use crate::two_sum::DEFAULT_MAX_TABLE_RANGE;

/// Defaults applied to every run; command-line flags take precedence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Sort order used when none is given on the command line. When unset
    /// the order is asked for interactively.
    pub sort_order: Option<SortOrder>,
    /// Decimals per number in output files.
    pub precision: usize,
    /// Leaf size for the coarsened merge sort and inversion count.
    pub coarsen_threshold: Option<usize>,
    /// Largest value range the two-sum presence table may allocate.
    pub max_table_range: usize,
    pub parallel_matrix: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            sort_order: None,
            precision: DEFAULT_PRECISION,
            coarsen_threshold: None,
            max_table_range: DEFAULT_MAX_TABLE_RANGE,
            parallel_matrix: false,
        }
    }
}

/// Load a run configuration from a JSON file.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<RunConfig> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config: {}", path.as_ref().display()))?;
    let config: RunConfig = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config: {}", path.as_ref().display()))?;
    Ok(config)
}
