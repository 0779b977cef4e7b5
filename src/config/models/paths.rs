//! Filesystem locations used by the two entry points

use super::*;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where the HTTP trigger searches for source folders
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolverConfig {
    /// Directory whose immediate children are candidates
    #[serde(default = "default_resolver_root")]
    pub root: PathBuf,
    /// Case-sensitive substring a candidate name must contain
    #[serde(default = "default_fragment")]
    pub fragment: String,
}

fn default_resolver_root() -> PathBuf {
    PathBuf::from(".")
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            root: default_resolver_root(),
            fragment: default_fragment(),
        }
    }
}

/// Output location shared by both entry points
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_output_root")]
    pub root: PathBuf,
}

fn default_output_root() -> PathBuf {
    PathBuf::from("output")
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            root: default_output_root(),
        }
    }
}

/// One-shot run settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectConfig {
    /// Source folder holding `images/` and `metadata/`
    #[serde(default = "default_direct_source")]
    pub source: PathBuf,
    #[serde(default = "default_direct_naming")]
    pub naming: BatchNaming,
}

fn default_direct_source() -> PathBuf {
    PathBuf::from("ejs")
}

fn default_direct_naming() -> BatchNaming {
    BatchNaming::Range
}

impl Default for DirectConfig {
    fn default() -> Self {
        Self {
            source: default_direct_source(),
            naming: default_direct_naming(),
        }
    }
}
