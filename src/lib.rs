//! # asset-batcher
//!
//! Splits folders of paired images and metadata into numbered batches of a
//! fixed size.
//!
//! A source folder holds `images/*.{jpg,png}` and `metadata/*.json`. Both
//! listings are sorted by the number in their filename, checked to be equally
//! long, cut into batches of at most 300 pairs, and moved into
//! `<output>/<batch>/images` and `<output>/<batch>/metadata`.
//!
//! Two entry points drive it:
//!
//! - `batcher`: HTTP server with `POST /organize-files`, which organizes every
//!   folder under a root whose name contains a fragment (`split` by default).
//! - `batch-once`: organizes one configured folder and exits.
//!
//! ```rust,no_run
//! use asset_batcher::{BatchConfig, Organizer};
//! use std::path::Path;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let organizer = Organizer::new(BatchConfig::default());
//!     let report = organizer
//!         .organize(Path::new("split_a"), Path::new("output"))
//!         .await?;
//!     println!("{} pairs moved", report.pairs_moved());
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod config;
pub mod organizer;
pub mod resolver;
pub mod server;
pub mod services;
pub mod utils;

// Re-export main types
pub use config::{BatchConfig, BatchNaming, Config, MoveFailurePolicy};
pub use organizer::{BatchPlan, FolderReport, Organizer, RunReport};
pub use resolver::find_folders;
pub use utils::error::{BatcherError, Result};

// Version information
/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
/// Description of the crate
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Build information
#[derive(Debug, Clone)]
pub struct BuildInfo {
    /// Version number
    pub version: &'static str,
    /// Build timestamp (seconds since the epoch)
    pub build_time: &'static str,
    /// Git commit hash
    pub git_hash: &'static str,
    /// Rust version
    pub rust_version: &'static str,
}

impl Default for BuildInfo {
    fn default() -> Self {
        Self {
            version: VERSION,
            build_time: option_env!("BUILD_TIME").unwrap_or("unknown"),
            git_hash: option_env!("GIT_HASH").unwrap_or("unknown"),
            rust_version: option_env!("RUST_VERSION").unwrap_or("unknown"),
        }
    }
}

/// Build information of the running binary
pub fn build_info() -> BuildInfo {
    BuildInfo::default()
}
