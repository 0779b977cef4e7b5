//! Configuration data models
//!
//! This module defines all configuration structures used throughout the batcher.

pub mod batch;
pub mod logging;
pub mod paths;
pub mod server;

pub use batch::*;
pub use logging::*;
pub use paths::*;
pub use server::*;

/// Default values for configuration
pub fn default_host() -> String {
    "0.0.0.0".to_string()
}

/// Default server port
pub fn default_port() -> u16 {
    8024
}

/// Default number of pairs per batch
pub fn default_batch_size() -> usize {
    300
}

/// Default substring a source folder name must contain
pub fn default_fragment() -> String {
    "split".to_string()
}

/// Default log level
pub fn default_log_level() -> String {
    "info".to_string()
}
