//! Error handling - every failure is rendered as a `{status: "error"}` envelope.

use actix_web::error::{JsonPayloadError, QueryPayloadError};
use actix_web::{HttpRequest, HttpResponse, ResponseError, http::StatusCode};
use blogger_core::{DomainError, ValidationError};
use blogger_shared::ErrorResponse;
use std::fmt;

/// Application-level error type.
#[derive(Debug)]
pub enum AppError {
    /// Input refused by the post service. Reported with HTTP 200; only the
    /// body signals the failure.
    Rejected(String),
    /// The request could not be decoded at all.
    BadRequest(String),
    /// Storage or other infrastructure fault.
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Rejected(msg) => write!(f, "Rejected: {}", msg),
            AppError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Rejected(_) => StatusCode::OK,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let error = match self {
            AppError::Rejected(msg) | AppError::BadRequest(msg) => ErrorResponse::new(msg),
            AppError::Internal(detail) => {
                tracing::error!("Internal error: {}", detail);
                ErrorResponse::internal_error()
            }
        };

        HttpResponse::build(self.status_code()).json(error)
    }
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(e) => AppError::Rejected(e.to_string()),
            DomainError::NotFound { .. } => AppError::Rejected(err.to_string()),
            DomainError::Repository(e) => AppError::Internal(e.to_string()),
        }
    }
}

/// Render undecodable JSON bodies as envelopes.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    AppError::BadRequest(format!("Invalid JSON body: {}", err)).into()
}

/// Undecodable query strings (e.g. a repeated `id`) are reported as a
/// malformed id; `DELETE /post` is the only route that reads the query.
pub fn query_error_handler(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    tracing::debug!("Undecodable query string: {}", err);
    AppError::from(DomainError::from(ValidationError::InvalidId)).into()
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;
