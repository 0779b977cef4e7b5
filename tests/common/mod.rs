//! Common test utilities for asset-batcher

pub mod assertions;
pub mod fixtures;

pub use fixtures::{SourceFolder, Workspace};
