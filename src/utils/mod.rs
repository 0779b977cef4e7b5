//! Utility modules for the batcher
//!
//! - **error**: Error types and their HTTP rendering
//! - **logging**: Tracing subscriber setup

pub mod error;
pub mod logging;
