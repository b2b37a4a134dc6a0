use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use thiserror::Error;
use crate::models::ErrorResponse;

/// Errors returned by the HTTP layer
///
/// Scoring itself never fails; these only cover rejected requests.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Coach pool of {count} exceeds the limit of {max}")]
    TooManyCoaches { count: usize, max: usize },

    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    #[error("Invalid query: {0}")]
    InvalidQuery(String),
}

impl ApiError {
    /// Short machine-readable error code
    pub fn code(&self) -> &'static str {
        match self {
            ApiError::Validation(_) => "validation_failed",
            ApiError::TooManyCoaches { .. } => "too_many_coaches",
            ApiError::InvalidJson(_) => "invalid_json",
            ApiError::InvalidQuery(_) => "invalid_query",
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();

        HttpResponse::build(status).json(ErrorResponse {
            error: self.code().to_string(),
            message: self.to_string(),
            status_code: status.as_u16(),
        })
    }
}

/// Handle JSON payload errors
pub fn handle_json_payload_error(
    err: actix_web::error::JsonPayloadError,
    req: &actix_web::HttpRequest,
) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);
    ApiError::InvalidJson(err.to_string()).into()
}

/// Handle query payload errors
pub fn handle_query_payload_error(
    err: actix_web::error::QueryPayloadError,
    req: &actix_web::HttpRequest,
) -> actix_web::Error {
    tracing::info!("Query payload error on {}: {}", req.path(), err);
    ApiError::InvalidQuery(err.to_string()).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_too_many_coaches_message() {
        let err = ApiError::TooManyCoaches { count: 12, max: 10 };

        assert_eq!(err.code(), "too_many_coaches");
        assert_eq!(err.to_string(), "Coach pool of 12 exceeds the limit of 10");
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }
}
