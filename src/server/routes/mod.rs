//! HTTP route modules

pub mod organize;

use crate::server::handlers::health_check;
use actix_web::web;

/// Register every route of the batcher
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check));
    organize::configure_routes(cfg);
}
