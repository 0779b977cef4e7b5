//! One-shot organizer
//!
//! Splits the configured source folder (`ejs` by default) into range-named
//! batches under `output` and exits.

use asset_batcher::config::{Config, DEFAULT_CONFIG_PATH};
use asset_batcher::services::run_once;
use asset_batcher::utils::logging;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};

/// Command line arguments
#[derive(Debug, Parser)]
#[command(name = "batch-once", version, about = "Organize one image/metadata folder into batches")]
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

    info!(
        "Organizing {} into {}",
        config.direct.source.display(),
        config.output.root.display()
    );

    match run_once(&config).await {
        Ok(report) if report.is_success() => ExitCode::SUCCESS,
        Ok(_) => ExitCode::FAILURE,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
