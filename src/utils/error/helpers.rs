//! Helper functions for creating specific error types

use super::types::BatcherError;
use std::path::Path;

impl BatcherError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    pub fn conflict<S: Into<String>>(message: S) -> Self {
        Self::Conflict(message.into())
    }

    pub fn server<S: Into<String>>(message: S) -> Self {
        Self::Server(message.into())
    }

    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal(message.into())
    }

    pub fn missing_subfolder<S: Into<String>>(folder: &Path, subfolder: S) -> Self {
        Self::MissingSubfolder {
            folder: folder.to_path_buf(),
            subfolder: subfolder.into(),
        }
    }

    pub fn move_failed(from: &Path, to: &Path, source: std::io::Error) -> Self {
        Self::Move {
            from: from.to_path_buf(),
            to: to.to_path_buf(),
            source,
        }
    }

    /// Whether the error means the folder was skipped before anything moved
    pub fn is_skip(&self) -> bool {
        matches!(
            self,
            Self::MissingSubfolder { .. } | Self::CountMismatch { .. } | Self::NonNumericName { .. }
        )
    }

    /// Stable machine-readable code for the error
    pub fn code(&self) -> &'static str {
        match self {
            Self::Config(_) => "CONFIG_ERROR",
            Self::Io(_) => "IO_ERROR",
            Self::Yaml(_) => "YAML_ERROR",
            Self::Serialization(_) => "SERIALIZATION_ERROR",
            Self::MissingSubfolder { .. } => "MISSING_SUBFOLDER",
            Self::CountMismatch { .. } => "COUNT_MISMATCH",
            Self::NonNumericName { .. } => "NON_NUMERIC_NAME",
            Self::DestinationExists(_) => "DESTINATION_EXISTS",
            Self::Move { .. } => "MOVE_FAILED",
            Self::BatchFailed { .. } => "BATCH_FAILED",
            Self::Conflict(_) => "CONFLICT",
            Self::Server(_) => "SERVER_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }
}
