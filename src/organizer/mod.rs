//! Batch organizer
//!
//! Splits a source folder's `images/` and `metadata/` into output folders of
//! at most `batch_size` pairs each. Pairing is positional: after both
//! listings are sorted, the Nth image and the Nth metadata file always land in
//! the same batch at the same offset.

mod listing;
mod mover;
mod plan;
mod report;

pub use listing::{
    FileKind, IMAGES_DIR, ListedFile, Listing, METADATA_DIR, list_files, numeric_stem,
};
pub use mover::move_file;
pub use plan::{Batch, BatchPlan};
pub use report::{BatchReport, BatchStatus, FolderOutcome, FolderReport, RunReport};

use crate::config::{BatchConfig, MoveFailurePolicy};
use crate::utils::error::{BatcherError, Result};
use std::path::Path;
use tokio::fs;
use tracing::{error, info, warn};

/// Moves paired files of a source folder into numbered batch folders
#[derive(Debug, Clone)]
pub struct Organizer {
    config: BatchConfig,
}

impl Organizer {
    pub fn new(config: BatchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &BatchConfig {
        &self.config
    }

    /// Work out the batches for `source` without touching the filesystem
    pub async fn plan(&self, source: &Path) -> Result<BatchPlan> {
        for kind in [FileKind::Image, FileKind::Metadata] {
            if !is_dir(&source.join(kind.dir_name())).await {
                error!(
                    "Required subfolders (images or metadata) not found in {}.",
                    source.display()
                );
                return Err(BatcherError::missing_subfolder(source, kind.dir_name()));
            }
        }

        let images = list_files(&source.join(IMAGES_DIR), FileKind::Image).await?;
        let metadata = list_files(&source.join(METADATA_DIR), FileKind::Metadata).await?;

        info!("Found {} image files in {}.", images.len(), source.display());
        info!(
            "Found {} metadata files in {}.",
            metadata.len(),
            source.display()
        );

        if images.len() != metadata.len() {
            error!(
                images = images.len(),
                metadata = metadata.len(),
                "Mismatch between the number of images and metadata files in {}.",
                source.display()
            );
            return Err(BatcherError::CountMismatch {
                folder: source.to_path_buf(),
                images: images.len(),
                metadata: metadata.len(),
            });
        }

        if self.config.strict_numeric_names {
            if let Some(file) = images.non_numeric().chain(metadata.non_numeric()).next() {
                error!("Non-numeric filename {} in {}", file.name, source.display());
                return Err(BatcherError::NonNumericName {
                    folder: source.to_path_buf(),
                    name: file.name.clone(),
                });
            }
        }

        Ok(BatchPlan::build(
            source,
            &images.names(),
            &metadata.names(),
            &self.config,
        ))
    }

    /// Organize one source folder into `output_root`.
    ///
    /// Skipped folders (missing subfolder, count mismatch, non-numeric names
    /// in strict mode) return an error before anything is created. Each batch
    /// is committed on its own: a failed batch is rolled back, then the
    /// configured [`MoveFailurePolicy`] decides whether later batches run.
    pub async fn organize(&self, source: &Path, output_root: &Path) -> Result<FolderReport> {
        let plan = self.plan(source).await?;
        let mut report = FolderReport::new(source, plan.images_found, plan.metadata_found);

        for (position, batch) in plan.batches.iter().enumerate() {
            match self.commit_batch(source, output_root, batch).await {
                Ok(()) => {
                    info!(
                        "Created folder: {} with {} images and {} metadata files.",
                        batch.name,
                        batch.images.len(),
                        batch.metadata.len()
                    );
                    report.batches.push(BatchReport::completed(batch));
                }
                Err(e) => {
                    error!(error = %e, "Batch {} of {} failed", batch.name, source.display());
                    report.batches.push(BatchReport::failed(batch, &e));

                    if self.config.on_move_failure == MoveFailurePolicy::Abort {
                        for rest in &plan.batches[position + 1..] {
                            report.batches.push(BatchReport::skipped(rest));
                        }
                        report.outcome = FolderOutcome::Failed;
                        report.error = Some(e.to_string());
                        return Err(BatcherError::BatchFailed {
                            batch: batch.name.clone(),
                            reason: e.to_string(),
                            report: Box::new(report),
                        });
                    }
                }
            }
        }

        report.finish();
        if !report.is_success() {
            warn!(
                "{} finished with failed batches ({} of {} pairs moved)",
                source.display(),
                report.pairs_moved(),
                plan.total_pairs()
            );
        }
        Ok(report)
    }

    async fn commit_batch(&self, source: &Path, output_root: &Path, batch: &Batch) -> Result<()> {
        let batch_dir = output_root.join(&batch.name);
        let moves = mover::batch_moves(source, &batch_dir, batch);

        mover::preflight(&moves).await?;
        mover::prepare_batch_dir(&batch_dir).await?;
        mover::commit(&moves).await
    }
}

async fn is_dir(path: &Path) -> bool {
    fs::metadata(path)
        .await
        .map(|meta| meta.is_dir())
        .unwrap_or(false)
}
