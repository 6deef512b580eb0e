//! Typed errors and HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {key}: '{value}'")]
    Invalid { key: &'static str, value: String },
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("customer with id [{0}] not found")]
    CustomerNotFound(i32),
    #[error("email already taken: {0}")]
    DuplicateEmail(String),
    #[error("no data changes found")]
    NoChangesRequested,
    #[error("validation: {0}")]
    Validation(String),
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
}

impl AppError {
    /// Map a failed write to `DuplicateEmail` when the datastore rejected it on the email constraint.
    pub fn from_write(err: sqlx::Error, email: &str) -> Self {
        match &err {
            sqlx::Error::Database(db)
                if is_email_violation(db.is_unique_violation(), db.constraint()) =>
            {
                AppError::DuplicateEmail(email.to_string())
            }
            _ => AppError::Db(err),
        }
    }

    pub fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::Config(_) => (StatusCode::INTERNAL_SERVER_ERROR, "config_error"),
            AppError::CustomerNotFound(_) => (StatusCode::NOT_FOUND, "not_found"),
            AppError::DuplicateEmail(_) => (StatusCode::CONFLICT, "duplicate_email"),
            AppError::NoChangesRequested => (StatusCode::BAD_REQUEST, "no_changes"),
            AppError::Validation(_) => (StatusCode::UNPROCESSABLE_ENTITY, "validation_error"),
            AppError::Db(_) => (StatusCode::INTERNAL_SERVER_ERROR, "database_error"),
        }
    }
}

/// Only the email constraint means a taken email; other unique keys stay database errors.
fn is_email_violation(unique: bool, constraint: Option<&str>) -> bool {
    unique && constraint == Some(crate::db::EMAIL_UNIQUE_CONSTRAINT)
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();
        let message = if status.is_server_error() {
            tracing::error!(error = ?self, "request failed");
            "an internal error occurred".to_string()
        } else {
            self.to_string()
        };
        let body = ErrorBody {
            error: ErrorDetail {
                code: code.to_string(),
                message,
            },
        };
        (status, Json(body)).into_response()
    }
}
