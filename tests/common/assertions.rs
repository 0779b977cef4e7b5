//! Assertions on the filesystem layout a run leaves behind

use asset_batcher::organizer::{IMAGES_DIR, METADATA_DIR};
use std::fs;
use std::path::Path;

/// Number of entries in `dir`, zero when it does not exist
pub fn entry_count(dir: &Path) -> usize {
    fs::read_dir(dir).map(|entries| entries.count()).unwrap_or(0)
}

/// Sorted entry names of `dir`
pub fn entry_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .map(|entries| {
            entries
                .filter_map(|e| e.ok())
                .filter_map(|e| e.file_name().into_string().ok())
                .collect()
        })
        .unwrap_or_default();
    names.sort();
    names
}

/// Assert that `batch` holds `pairs` images and as many metadata files
pub fn assert_batch(output: &Path, batch: &str, pairs: usize) {
    let dir = output.join(batch);
    assert!(dir.is_dir(), "missing batch folder {}", dir.display());
    assert_eq!(
        entry_count(&dir.join(IMAGES_DIR)),
        pairs,
        "image count in {}",
        batch
    );
    assert_eq!(
        entry_count(&dir.join(METADATA_DIR)),
        pairs,
        "metadata count in {}",
        batch
    );
}

/// Assert that a source folder was left exactly as it was
pub fn assert_untouched(source: &Path, images: usize, metadata: usize) {
    assert_eq!(entry_count(&source.join(IMAGES_DIR)), images);
    assert_eq!(entry_count(&source.join(METADATA_DIR)), metadata);
}
