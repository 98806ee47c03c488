// src/errors.rs
// DOCUMENTATION: Custom error types and HTTP responses
// PURPOSE: Centralized error handling for the admin service

use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use serde_json::json;
use thiserror::Error;

/// Application-specific error types
/// DOCUMENTATION: Every failure is scoped to the single request that raised it.
/// Each variant maps to an HTTP status code and a JSON error body.
#[derive(Error, Debug)]
pub enum AdminError {
    #[error("Record not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Authentication required")]
    Unauthorized,

    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Access not authorized. Only administrators may sign in.")]
    Forbidden,

    #[error("External API error: {0}")]
    ExternalApiError(String),

    #[error("Rate limit exceeded")]
    RateLimitExceeded,
}

impl AdminError {
    fn code(&self) -> &'static str {
        match self {
            AdminError::NotFound(_) => "NOT_FOUND",
            AdminError::DatabaseError(_) => "DATABASE_ERROR",
            AdminError::InvalidInput(_) => "INVALID_INPUT",
            AdminError::ValidationError(_) => "VALIDATION_ERROR",
            AdminError::Unauthorized => "UNAUTHORIZED",
            AdminError::InvalidCredentials => "INVALID_CREDENTIALS",
            AdminError::Forbidden => "FORBIDDEN",
            AdminError::ExternalApiError(_) => "EXTERNAL_API_ERROR",
            AdminError::RateLimitExceeded => "RATE_LIMIT_EXCEEDED",
        }
    }
}

impl From<validator::ValidationErrors> for AdminError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AdminError::ValidationError(errors.to_string())
    }
}

/// Convert AdminError to HTTP response
/// DOCUMENTATION: Maps error types to HTTP status codes and JSON responses
impl ResponseError for AdminError {
    fn error_response(&self) -> HttpResponse {
        let body = json!({
            "error": {
                "code": self.code(),
                "message": self.to_string(),
                "timestamp": chrono::Utc::now().to_rfc3339()
            }
        });

        HttpResponse::build(self.status_code()).json(body)
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AdminError::NotFound(_) => StatusCode::NOT_FOUND,
            AdminError::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AdminError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AdminError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AdminError::Unauthorized => StatusCode::UNAUTHORIZED,
            AdminError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            AdminError::Forbidden => StatusCode::FORBIDDEN,
            AdminError::ExternalApiError(_) => StatusCode::BAD_GATEWAY,
            AdminError::RateLimitExceeded => StatusCode::TOO_MANY_REQUESTS,
        }
    }
}
