//! Directory Error Types

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Directory-specific result type alias
pub type DirectoryResult<T> = Result<T, DirectoryError>;

/// Directory-specific error variants
#[derive(Debug, Error)]
pub enum DirectoryError {
    /// Record with the requested id does not exist
    #[error("{0} not found")]
    NotFound(&'static str),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl DirectoryError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            DirectoryError::NotFound(_) => StatusCode::NOT_FOUND,
            DirectoryError::Database(_) | DirectoryError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            DirectoryError::NotFound(_) => ErrorKind::NotFound,
            DirectoryError::Database(_) | DirectoryError::Internal(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    /// Convert to AppError, collapsing backend failures to a generic message
    pub fn to_app_error(&self) -> AppError {
        match self {
            DirectoryError::Database(_) | DirectoryError::Internal(_) => {
                AppError::internal("Internal server error")
            }
            other => AppError::new(other.kind(), other.to_string()),
        }
    }

    fn log(&self) {
        match self {
            DirectoryError::Database(e) => {
                tracing::error!(error = %e, "Directory database error");
            }
            DirectoryError::Internal(msg) => {
                tracing::error!(message = %msg, "Directory internal error");
            }
            DirectoryError::NotFound(resource) => {
                tracing::debug!(resource = %resource, "Directory record not found");
            }
        }
    }
}

impl IntoResponse for DirectoryError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        assert_eq!(
            DirectoryError::NotFound("Station").to_string(),
            "Station not found"
        );
        assert_eq!(
            DirectoryError::NotFound("Station").status_code(),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn test_internal_errors_do_not_leak_details() {
        let err = DirectoryError::Internal("pool exhausted".to_string());
        assert_eq!(err.to_app_error().message(), "Internal server error");
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
