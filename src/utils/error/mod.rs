//! Error handling for the batcher
//!
//! This module defines all error types used throughout the crate and how they
//! are rendered as HTTP responses.

mod helpers;
mod response;
mod types;

pub use response::{ErrorDetail, ErrorResponse};
pub use types::{BatcherError, Result};
