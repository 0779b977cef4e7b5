//! HTTP server implementation
//!
//! This module provides the HTTP trigger for organize runs.

pub mod builder;
mod handlers;
pub mod routes;
pub mod server;
pub mod state;

pub use server::HttpServer;
pub use state::AppState;
