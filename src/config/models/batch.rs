//! Batching rules

use super::*;
use serde::{Deserialize, Serialize};

/// How output folders are named
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BatchNaming {
    /// `batch_1`, `batch_2`, ...
    Sequential,
    /// `0-299`, `300-599`, ... using zero-based positions in the listing
    Range,
}

impl BatchNaming {
    /// Folder name for the batch at `index` covering listing positions
    /// `start..=end`
    pub fn folder_name(&self, index: usize, start: usize, end: usize) -> String {
        match self {
            BatchNaming::Sequential => format!("batch_{}", index + 1),
            BatchNaming::Range => format!("{}-{}", start, end),
        }
    }
}

/// What to do with the remaining batches once one fails to move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoveFailurePolicy {
    /// Stop processing the folder
    #[default]
    Abort,
    /// Record the failure and carry on with the next batch
    Continue,
}

/// Batch configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchConfig {
    /// Maximum pairs per output folder
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,
    /// Output folder naming scheme
    #[serde(default = "default_naming")]
    pub naming: BatchNaming,
    /// Reject folders holding files whose stem is not a plain number
    #[serde(default)]
    pub strict_numeric_names: bool,
    /// Behavior after a failed batch
    #[serde(default)]
    pub on_move_failure: MoveFailurePolicy,
}

fn default_naming() -> BatchNaming {
    BatchNaming::Sequential
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            batch_size: default_batch_size(),
            naming: default_naming(),
            strict_numeric_names: false,
            on_move_failure: MoveFailurePolicy::default(),
        }
    }
}
