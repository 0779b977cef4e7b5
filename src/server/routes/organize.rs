//! Organize trigger endpoint

use crate::organizer::RunReport;
use crate::server::state::AppState;
use crate::utils::error::BatcherError;
use actix_web::{HttpResponse, web};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Message returned by every finished run; per-folder outcomes live in the report
pub const SUCCESS_MESSAGE: &str = "Files organized successfully.";

/// Body of a finished organize run
#[derive(Debug, Serialize, Deserialize)]
pub struct OrganizeResponse {
    pub message: String,
    pub report: RunReport,
}

/// Configure the organize route
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/organize-files", web::post().to(organize_files));
}

/// Resolve matching folders and organize each of them.
///
/// The request body is ignored. A second request while a run is active is
/// refused with 409 instead of racing on the same folders.
pub async fn organize_files(state: web::Data<AppState>) -> Result<HttpResponse, BatcherError> {
    let _guard = state.run_lock.try_lock().map_err(|_| {
        warn!("Rejected organize request: a run is already in progress");
        BatcherError::conflict("An organize run is already in progress")
    })?;

    let report = state.runner.run().await?;
    if report.is_success() {
        info!(run_id = %report.run_id, "{}", SUCCESS_MESSAGE);
    } else {
        warn!(
            run_id = %report.run_id,
            failed = report.failed,
            "Organize run finished with failed or skipped folders"
        );
    }

    Ok(HttpResponse::Ok().json(OrganizeResponse {
        message: SUCCESS_MESSAGE.to_string(),
        report,
    }))
}
