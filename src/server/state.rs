//! Application state shared across HTTP handlers

use crate::config::Config;
use crate::services::BatchRunService;
use std::sync::Arc;
use tokio::sync::Mutex;

/// HTTP server state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Configuration (shared read-only)
    pub config: Arc<Config>,
    /// Resolve-then-organize runner
    pub runner: Arc<BatchRunService>,
    /// Held for the duration of a run so two runs never share the folders
    pub run_lock: Arc<Mutex<()>>,
}

impl AppState {
    /// Create a new AppState with shared resources
    pub fn new(config: Config) -> Self {
        let runner = BatchRunService::new(&config);
        Self {
            config: Arc::new(config),
            runner: Arc::new(runner),
            run_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Get configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}
