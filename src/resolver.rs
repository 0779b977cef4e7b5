//! Source folder discovery
//!
//! Finds the immediate subdirectories of a root whose name contains a given
//! fragment. The result keeps directory-listing order.

use crate::utils::error::Result;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

/// Subdirectories of `root` whose name contains `fragment` (case-sensitive).
///
/// No match is not an error; an unreadable `root` is.
pub async fn find_folders(root: &Path, fragment: &str) -> Result<Vec<PathBuf>> {
    let mut folders = Vec::new();
    let mut entries = fs::read_dir(root).await?;

    while let Some(entry) = entries.next_entry().await? {
        if !entry.file_type().await?.is_dir() {
            continue;
        }
        let Ok(name) = entry.file_name().into_string() else {
            continue;
        };
        if name.contains(fragment) {
            folders.push(root.join(name));
        }
    }

    debug!(
        "Found {} folders matching '{}' in {}",
        folders.len(),
        fragment,
        root.display()
    );
    Ok(folders)
}
