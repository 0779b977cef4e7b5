//! HTTP response handling for errors

use super::types::BatcherError;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};

impl ResponseError for BatcherError {
    fn status_code(&self) -> StatusCode {
        match self {
            BatcherError::MissingSubfolder { .. }
            | BatcherError::CountMismatch { .. }
            | BatcherError::NonNumericName { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            BatcherError::DestinationExists(_) | BatcherError::Conflict(_) => StatusCode::CONFLICT,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let message = match self {
            // Paths and io details stay in the logs
            BatcherError::Io(_) | BatcherError::Internal(_) => {
                "An internal error occurred".to_string()
            }
            _ => self.to_string(),
        };

        let error_response = ErrorResponse {
            error: ErrorDetail {
                code: self.code().to_string(),
                message,
                timestamp: chrono::Utc::now().timestamp(),
            },
        };

        HttpResponse::build(self.status_code()).json(error_response)
    }
}

/// Standard error response format
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

/// Error detail structure
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    pub timestamp: i64,
}
