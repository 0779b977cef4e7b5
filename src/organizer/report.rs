//! Outcome reports for folders and whole runs

use super::plan::Batch;
use crate::utils::error::BatcherError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// State of a single batch after a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BatchStatus {
    Completed,
    Failed,
    /// Never attempted because an earlier batch aborted the folder
    Skipped,
}

/// Per-batch entry of a [`FolderReport`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchReport {
    pub name: String,
    pub images: usize,
    pub metadata: usize,
    pub status: BatchStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl BatchReport {
    pub fn completed(batch: &Batch) -> Self {
        Self::with_status(batch, BatchStatus::Completed, None)
    }

    pub fn failed(batch: &Batch, error: &BatcherError) -> Self {
        Self::with_status(batch, BatchStatus::Failed, Some(error.to_string()))
    }

    pub fn skipped(batch: &Batch) -> Self {
        Self::with_status(batch, BatchStatus::Skipped, None)
    }

    fn with_status(batch: &Batch, status: BatchStatus, error: Option<String>) -> Self {
        Self {
            name: batch.name.clone(),
            images: batch.images.len(),
            metadata: batch.metadata.len(),
            status,
            error,
        }
    }
}

/// How processing of one source folder ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FolderOutcome {
    /// Every batch moved
    Completed,
    /// Some batches failed and the rest were still attempted
    Partial,
    /// Rejected before anything moved
    Skipped,
    /// Stopped at a failed batch
    Failed,
}

/// Result of organizing one source folder
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FolderReport {
    pub source: PathBuf,
    pub images_found: usize,
    pub metadata_found: usize,
    pub batches: Vec<BatchReport>,
    pub outcome: FolderOutcome,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl FolderReport {
    pub fn new(source: &Path, images_found: usize, metadata_found: usize) -> Self {
        Self {
            source: source.to_path_buf(),
            images_found,
            metadata_found,
            batches: Vec::new(),
            outcome: FolderOutcome::Completed,
            error: None,
        }
    }

    /// Turn an organizer error into the report the caller shows for the folder
    pub fn from_error(source: &Path, error: BatcherError) -> Self {
        match error {
            BatcherError::BatchFailed { report, .. } => *report,
            BatcherError::CountMismatch {
                images, metadata, ..
            } => Self {
                outcome: FolderOutcome::Skipped,
                error: Some(error.to_string()),
                ..Self::new(source, images, metadata)
            },
            other => Self {
                outcome: if other.is_skip() {
                    FolderOutcome::Skipped
                } else {
                    FolderOutcome::Failed
                },
                error: Some(other.to_string()),
                ..Self::new(source, 0, 0)
            },
        }
    }

    /// Settle the outcome from the recorded batches
    pub(crate) fn finish(&mut self) {
        let failed = self
            .batches
            .iter()
            .filter(|b| b.status == BatchStatus::Failed)
            .count();
        self.outcome = if failed == 0 {
            FolderOutcome::Completed
        } else {
            FolderOutcome::Partial
        };
    }

    pub fn is_success(&self) -> bool {
        self.outcome == FolderOutcome::Completed
    }

    /// Pairs that now live in output folders
    pub fn pairs_moved(&self) -> usize {
        self.batches
            .iter()
            .filter(|b| b.status == BatchStatus::Completed)
            .map(|b| b.images)
            .sum()
    }
}

/// Aggregate of one HTTP-triggered run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    pub run_id: Uuid,
    pub started_at: DateTime<Utc>,
    pub folders: Vec<FolderReport>,
    pub succeeded: usize,
    pub failed: usize,
}

impl RunReport {
    pub fn new() -> Self {
        Self {
            run_id: Uuid::new_v4(),
            started_at: Utc::now(),
            folders: Vec::new(),
            succeeded: 0,
            failed: 0,
        }
    }

    pub fn push(&mut self, folder: FolderReport) {
        if folder.is_success() {
            self.succeeded += 1;
        } else {
            self.failed += 1;
        }
        self.folders.push(folder);
    }

    pub fn is_success(&self) -> bool {
        self.failed == 0
    }
}

impl Default for RunReport {
    fn default() -> Self {
        Self::new()
    }
}
