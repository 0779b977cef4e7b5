//! Resolve-then-organize run behind the HTTP trigger

use crate::config::Config;
use crate::organizer::{FolderReport, Organizer, RunReport};
use crate::resolver::find_folders;
use crate::utils::error::Result;
use std::path::PathBuf;
use tokio::fs;
use tracing::{info, warn};

/// Organizes every folder under the resolver root that matches the fragment
#[derive(Debug, Clone)]
pub struct BatchRunService {
    organizer: Organizer,
    root: PathBuf,
    fragment: String,
    output_root: PathBuf,
}

impl BatchRunService {
    pub fn new(config: &Config) -> Self {
        Self {
            organizer: Organizer::new(config.batch.clone()),
            root: config.resolver.root.clone(),
            fragment: config.resolver.fragment.clone(),
            output_root: config.output.root.clone(),
        }
    }

    pub fn output_root(&self) -> &PathBuf {
        &self.output_root
    }

    /// Run once over all matching folders, one after another.
    ///
    /// Folder-level failures end up in the report; only failing to list the
    /// root or to create the output root is returned as an error.
    pub async fn run(&self) -> Result<RunReport> {
        let folders = find_folders(&self.root, &self.fragment).await?;
        fs::create_dir_all(&self.output_root).await?;

        let output = fs::canonicalize(&self.output_root).await?;
        let mut report = RunReport::new();
        info!(run_id = %report.run_id, "Organizing {} folders", folders.len());

        for folder in folders {
            if fs::canonicalize(&folder).await.ok().as_ref() == Some(&output) {
                warn!("Skipping {}: it is the output folder", folder.display());
                continue;
            }

            info!("Processing folder: {}", folder.display());
            let folder_report = match self.organizer.organize(&folder, &self.output_root).await {
                Ok(folder_report) => folder_report,
                Err(e) => FolderReport::from_error(&folder, e),
            };
            report.push(folder_report);
        }

        info!(
            run_id = %report.run_id,
            succeeded = report.succeeded,
            failed = report.failed,
            "Run finished"
        );
        Ok(report)
    }
}
