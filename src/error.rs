use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

/// Service-wide error taxonomy. Every handler returns `Result<_, AppError>`
/// and the `ResponseError` impl renders the JSON body.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    #[error("only {remaining} day(s) left for {leave_type}")]
    InsufficientBalance { leave_type: String, remaining: i32 },

    #[error("{0}")]
    InvalidTransition(String),

    #[error("{0} not found")]
    NotFound(String),

    #[error("{0}")]
    Forbidden(&'static str),

    #[error("storage failure")]
    Storage(#[from] sqlx::Error),
}

#[derive(Serialize)]
struct ErrorBody {
    code: &'static str,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    remaining: Option<i32>,
}

impl AppError {
    fn code(&self) -> &'static str {
        match self {
            AppError::Validation(_) => "validation_error",
            AppError::InsufficientBalance { .. } => "insufficient_balance",
            AppError::InvalidTransition(_) => "invalid_transition",
            AppError::NotFound(_) => "not_found",
            AppError::Forbidden(_) => "forbidden",
            AppError::Storage(_) => "storage_error",
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::InsufficientBalance { .. } | AppError::InvalidTransition(_) => {
                StatusCode::CONFLICT
            }
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Forbidden(_) => StatusCode::FORBIDDEN,
            AppError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        // The underlying cause stays in the log, not in the response body.
        let message = match self {
            AppError::Storage(e) => {
                error!(error = %e, "storage failure");
                "internal server error".to_string()
            }
            other => other.to_string(),
        };

        let remaining = match self {
            AppError::InsufficientBalance { remaining, .. } => Some(*remaining),
            _ => None,
        };

        HttpResponse::build(self.status_code()).json(ErrorBody {
            code: self.code(),
            message,
            remaining,
        })
    }
}
