//! Test fixtures
//!
//! Real directories under a `TempDir`, never mocks.

use asset_batcher::Config;
use asset_batcher::organizer::{IMAGES_DIR, METADATA_DIR};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary root holding source folders and an `output` folder
pub struct Workspace {
    dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("create temp dir"),
        }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn output(&self) -> PathBuf {
        self.root().join("output")
    }

    /// Config whose resolver and output both point into this workspace
    pub fn config(&self) -> Config {
        let mut config = Config::default();
        config.resolver.root = self.root().to_path_buf();
        config.output.root = self.output();
        config.direct.source = self.root().join("ejs");
        config
    }

    pub fn source(&self, name: &str) -> SourceFolder {
        SourceFolder::create(self.root().join(name))
    }
}

impl Default for Workspace {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for a source folder's contents
pub struct SourceFolder {
    pub path: PathBuf,
}

impl SourceFolder {
    fn create(path: PathBuf) -> Self {
        fs::create_dir_all(path.join(IMAGES_DIR)).expect("create images dir");
        fs::create_dir_all(path.join(METADATA_DIR)).expect("create metadata dir");
        Self { path }
    }

    /// Add pairs `start..start + count`; every file holds its own number so
    /// pairing can be checked after the move.
    pub fn with_pairs(self, start: usize, count: usize) -> Self {
        for i in start..start + count {
            self.write_image(&format!("{}.png", i), &i.to_string());
            self.write_metadata(&format!("{}.json", i), &format!("{{\"id\": {}}}", i));
        }
        self
    }

    pub fn with_image(self, name: &str) -> Self {
        self.write_image(name, name);
        self
    }

    pub fn with_metadata(self, name: &str) -> Self {
        self.write_metadata(name, name);
        self
    }

    /// Remove one of the two subfolders
    pub fn without(self, subfolder: &str) -> Self {
        fs::remove_dir_all(self.path.join(subfolder)).expect("remove subfolder");
        self
    }

    pub fn images(&self) -> PathBuf {
        self.path.join(IMAGES_DIR)
    }

    pub fn metadata(&self) -> PathBuf {
        self.path.join(METADATA_DIR)
    }

    fn write_image(&self, name: &str, content: &str) {
        fs::write(self.images().join(name), content).expect("write image");
    }

    fn write_metadata(&self, name: &str, content: &str) {
        fs::write(self.metadata().join(name), content).expect("write metadata");
    }
}
