//! Partitioning of sorted listings into batches

use crate::config::BatchConfig;
use std::path::{Path, PathBuf};

/// One output folder worth of paired files
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Batch {
    /// Zero-based batch position
    pub index: usize,
    /// Output folder name
    pub name: String,
    /// Listing position of the first pair
    pub start: usize,
    /// Listing position of the last pair, inclusive
    pub end: usize,
    pub images: Vec<String>,
    pub metadata: Vec<String>,
}

impl Batch {
    /// Number of pairs in the batch
    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Image and metadata names paired by position
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.images
            .iter()
            .map(String::as_str)
            .zip(self.metadata.iter().map(String::as_str))
    }
}

/// The batches a source folder splits into
#[derive(Debug, Clone)]
pub struct BatchPlan {
    pub source: PathBuf,
    pub images_found: usize,
    pub metadata_found: usize,
    pub batches: Vec<Batch>,
}

impl BatchPlan {
    /// Split equally long sorted listings into consecutive batches.
    ///
    /// Batch k takes positions `[k * size, k * size + size)` of both
    /// listings, so the Nth image always lands beside the Nth metadata file.
    pub fn build(
        source: &Path,
        images: &[String],
        metadata: &[String],
        config: &BatchConfig,
    ) -> Self {
        debug_assert_eq!(images.len(), metadata.len());
        let size = config.batch_size.max(1);

        let batches = images
            .chunks(size)
            .zip(metadata.chunks(size))
            .enumerate()
            .map(|(index, (images, metadata))| {
                let start = index * size;
                let end = start + images.len() - 1;
                Batch {
                    index,
                    name: config.naming.folder_name(index, start, end),
                    start,
                    end,
                    images: images.to_vec(),
                    metadata: metadata.to_vec(),
                }
            })
            .collect();

        Self {
            source: source.to_path_buf(),
            images_found: images.len(),
            metadata_found: metadata.len(),
            batches,
        }
    }

    /// Total pairs across all batches
    pub fn total_pairs(&self) -> usize {
        self.batches.iter().map(Batch::len).sum()
    }
}
