//! Relocation of a batch's files into its output folder

use super::listing::{IMAGES_DIR, METADATA_DIR};
use super::plan::Batch;
use crate::utils::error::{BatcherError, Result};
use std::io;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, warn};

/// A single pending rename
#[derive(Debug, Clone)]
pub(crate) struct FileMove {
    pub from: PathBuf,
    pub to: PathBuf,
}

/// Every move of a batch, images first
pub(crate) fn batch_moves(source: &Path, batch_dir: &Path, batch: &Batch) -> Vec<FileMove> {
    let images = batch.images.iter().map(|name| FileMove {
        from: source.join(IMAGES_DIR).join(name),
        to: batch_dir.join(IMAGES_DIR).join(name),
    });
    let metadata = batch.metadata.iter().map(|name| FileMove {
        from: source.join(METADATA_DIR).join(name),
        to: batch_dir.join(METADATA_DIR).join(name),
    });
    images.chain(metadata).collect()
}

/// Check that every move can be attempted: each source is still there and no
/// destination would be overwritten.
pub(crate) async fn preflight(moves: &[FileMove]) -> Result<()> {
    for m in moves {
        if !entry_exists(&m.from).await? {
            return Err(BatcherError::move_failed(
                &m.from,
                &m.to,
                io::Error::new(io::ErrorKind::NotFound, "source file disappeared"),
            ));
        }
        if entry_exists(&m.to).await? {
            return Err(BatcherError::DestinationExists(m.to.clone()));
        }
    }
    Ok(())
}

/// Whether `path` names a directory entry. Symlinks count even when their
/// target is gone, since `rename` moves the link itself.
async fn entry_exists(path: &Path) -> Result<bool> {
    match fs::symlink_metadata(path).await {
        Ok(_) => Ok(true),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e.into()),
    }
}

/// Create `<batch_dir>/images` and `<batch_dir>/metadata`
pub(crate) async fn prepare_batch_dir(batch_dir: &Path) -> Result<()> {
    fs::create_dir_all(batch_dir.join(IMAGES_DIR)).await?;
    fs::create_dir_all(batch_dir.join(METADATA_DIR)).await?;
    Ok(())
}

/// Perform the moves in order. When one fails, the files already moved are
/// put back before the error is returned.
pub(crate) async fn commit(moves: &[FileMove]) -> Result<()> {
    for (done, m) in moves.iter().enumerate() {
        if let Err(e) = move_file(&m.from, &m.to).await {
            rollback(&moves[..done]).await;
            return Err(e);
        }
    }
    Ok(())
}

async fn rollback(moved: &[FileMove]) {
    if moved.is_empty() {
        return;
    }
    debug!("Rolling back {} moved files", moved.len());
    for m in moved.iter().rev() {
        if let Err(e) = move_file(&m.to, &m.from).await {
            warn!(error = %e, "Could not restore {}", m.from.display());
        }
    }
}

/// Rename `from` to `to`, copying across filesystems when rename cannot
pub async fn move_file(from: &Path, to: &Path) -> Result<()> {
    match fs::rename(from, to).await {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::CrossesDevices => {
            fs::copy(from, to)
                .await
                .map_err(|e| BatcherError::move_failed(from, to, e))?;
            fs::remove_file(from)
                .await
                .map_err(|e| BatcherError::move_failed(from, to, e))
        }
        Err(e) => Err(BatcherError::move_failed(from, to, e)),
    }
}
