//! asset-batcher HTTP server
//!
//! Serves `POST /organize-files`, which splits every matching source folder
//! into batches.

use asset_batcher::config::{Config, DEFAULT_CONFIG_PATH};
use asset_batcher::server;
use asset_batcher::utils::logging;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

/// Command line arguments
#[derive(Debug, Parser)]
#[command(name = "batcher", version, about = "HTTP trigger for organizing image/metadata batches")]
struct Args {
    /// YAML configuration file; defaults apply when it does not exist
    #[arg(short, long, env = "BATCHER_CONFIG", default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    let config = match Config::load(&args.config).await {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = logging::init(&config.logging) {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }

    match server::builder::run_server(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Print error using Display (not Debug) to preserve newlines
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
