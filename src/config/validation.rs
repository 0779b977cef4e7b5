//! Configuration validation

use crate::config::models::*;
use tracing::debug;

/// Validation trait for configuration structures
pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}

impl Validate for ServerConfig {
    fn validate(&self) -> Result<(), String> {
        debug!("Validating server configuration");

        if self.host.is_empty() {
            return Err("Server host cannot be empty".to_string());
        }
        if self.port == 0 {
            return Err("Server port cannot be 0".to_string());
        }
        if self.workers == Some(0) {
            return Err("Worker count cannot be 0".to_string());
        }
        Ok(())
    }
}

impl Validate for BatchConfig {
    fn validate(&self) -> Result<(), String> {
        if self.batch_size == 0 {
            return Err("Batch size must be greater than 0".to_string());
        }
        Ok(())
    }
}

impl Validate for ResolverConfig {
    fn validate(&self) -> Result<(), String> {
        if self.fragment.is_empty() {
            return Err("Folder name fragment cannot be empty".to_string());
        }
        if self.root.as_os_str().is_empty() {
            return Err("Resolver root cannot be empty".to_string());
        }
        Ok(())
    }
}

impl Validate for OutputConfig {
    fn validate(&self) -> Result<(), String> {
        if self.root.as_os_str().is_empty() {
            return Err("Output root cannot be empty".to_string());
        }
        Ok(())
    }
}
