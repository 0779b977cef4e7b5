//! Single pass over the configured source folder

use crate::config::Config;
use crate::organizer::{FolderReport, Organizer};
use crate::utils::error::Result;
use tokio::fs;
use tracing::info;

/// Organize `direct.source` into `output.root` once, naming batches with
/// `direct.naming`.
pub async fn run_once(config: &Config) -> Result<FolderReport> {
    fs::create_dir_all(&config.output.root).await?;

    let organizer = Organizer::new(config.direct_batch());
    let report = organizer
        .organize(&config.direct.source, &config.output.root)
        .await?;

    info!(
        "Files organized into output folders with both images and metadata in order ({} pairs in {} batches).",
        report.pairs_moved(),
        report.batches.len()
    );
    Ok(report)
}
