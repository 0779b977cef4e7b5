//! Error types for the batcher

use crate::organizer::FolderReport;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for the batcher
pub type Result<T> = std::result::Result<T, BatcherError>;

/// Main error type for the batcher
#[derive(Error, Debug)]
pub enum BatcherError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A source folder lacks `images/` or `metadata/`
    #[error("Required subfolder '{subfolder}' not found in {}", .folder.display())]
    MissingSubfolder { folder: PathBuf, subfolder: String },

    /// Image and metadata listings differ in length
    #[error(
        "Mismatch between the number of images ({images}) and metadata files ({metadata}) in {}",
        .folder.display()
    )]
    CountMismatch {
        folder: PathBuf,
        images: usize,
        metadata: usize,
    },

    /// A filename stem is not a plain number while strict naming is on
    #[error("Filename '{name}' in {} is not numeric", .folder.display())]
    NonNumericName { folder: PathBuf, name: String },

    /// The destination of a move is already occupied
    #[error("Destination already exists: {}", .0.display())]
    DestinationExists(PathBuf),

    /// A single file move failed
    #[error("Failed to move {} to {}: {source}", .from.display(), .to.display())]
    Move {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A batch could not be committed and the run was aborted
    #[error("Batch {batch} failed: {reason}")]
    BatchFailed {
        batch: String,
        reason: String,
        report: Box<FolderReport>,
    },

    /// Conflict errors
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Server errors
    #[error("Server error: {0}")]
    Server(String),

    /// Internal errors
    #[error("Internal error: {0}")]
    Internal(String),
}
