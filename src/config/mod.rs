//! Configuration management for the batcher
//!
//! This module handles loading, validation, and management of all batcher configuration.

pub mod models;
pub mod validation;

pub use models::*;
pub use validation::Validate;

use crate::utils::error::{BatcherError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

/// Default location of the configuration file
pub const DEFAULT_CONFIG_PATH: &str = "config/batcher.yaml";

/// Main configuration struct for the batcher
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server configuration
    pub server: ServerConfig,
    /// Batching rules
    pub batch: BatchConfig,
    /// Where the HTTP trigger looks for source folders
    pub resolver: ResolverConfig,
    /// Where batches are written
    pub output: OutputConfig,
    /// One-shot run settings
    pub direct: DirectConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}

impl Config {
    /// Load and validate configuration from file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let config = Self::read_file(path.as_ref()).await?;
        config.validate()?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Load the file if it exists, otherwise start from defaults, then apply
    /// environment overrides. Validation runs once, on the merged result.
    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let mut config = if tokio::fs::try_exists(path).await.unwrap_or(false) {
            Self::read_file(path).await?
        } else {
            info!(
                "Configuration file {:?} not found, using default config",
                path
            );
            Self::default()
        };

        config.apply_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    async fn read_file(path: &Path) -> Result<Self> {
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| BatcherError::Config(format!("Failed to read config file: {}", e)))?;

        Ok(serde_yaml::from_str(&content)?)
    }

    /// Apply `BATCHER_*` overrides from the given lookup
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("BATCHER_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("BATCHER_PORT") {
            self.server.port = port
                .parse()
                .map_err(|e| BatcherError::Config(format!("Invalid port: {}", e)))?;
        }
        if let Some(root) = lookup("BATCHER_ROOT") {
            self.resolver.root = root.into();
        }
        if let Some(fragment) = lookup("BATCHER_FRAGMENT") {
            self.resolver.fragment = fragment;
        }
        if let Some(output) = lookup("BATCHER_OUTPUT") {
            self.output.root = output.into();
        }
        if let Some(size) = lookup("BATCHER_BATCH_SIZE") {
            self.batch.batch_size = size
                .parse()
                .map_err(|e| BatcherError::Config(format!("Invalid batch size: {}", e)))?;
        }
        Ok(())
    }

    /// Get server configuration
    pub fn server(&self) -> &ServerConfig {
        &self.server
    }

    /// Batch rules for the one-shot run, which names folders its own way
    pub fn direct_batch(&self) -> BatchConfig {
        BatchConfig {
            naming: self.direct.naming,
            ..self.batch.clone()
        }
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        self.server
            .validate()
            .map_err(|e| BatcherError::Config(format!("Server config error: {}", e)))?;
        self.batch
            .validate()
            .map_err(|e| BatcherError::Config(format!("Batch config error: {}", e)))?;
        self.resolver
            .validate()
            .map_err(|e| BatcherError::Config(format!("Resolver config error: {}", e)))?;
        self.output
            .validate()
            .map_err(|e| BatcherError::Config(format!("Output config error: {}", e)))?;

        debug!("Configuration validation completed");
        Ok(())
    }

    /// Convert to JSON string
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Convert to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}
