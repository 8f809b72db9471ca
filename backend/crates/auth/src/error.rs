//! Auth Error Types
//!
//! This module provides auth-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.
//!
//! Variant display strings are wire contract: clients match on the
//! `error` field of the JSON body.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// Admin credential pair not present in server configuration
    #[error("Server configuration error - missing credentials")]
    ConfigMissing,

    /// Wrong username or password (single generic message for both)
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// No valid session on a route that requires one
    #[error("Unauthorized")]
    Unauthorized,

    /// Programmatic caller supplied no API key
    #[error("API key is required")]
    ApiKeyMissing,

    /// Supplied API key does not match the stored one (or none is stored)
    #[error("Invalid API key")]
    ApiKeyInvalid,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::ConfigMissing => StatusCode::INTERNAL_SERVER_ERROR,
            AuthError::InvalidCredentials
            | AuthError::Unauthorized
            | AuthError::ApiKeyMissing
            | AuthError::ApiKeyInvalid => StatusCode::UNAUTHORIZED,
            AuthError::Database(_) | AuthError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::ConfigMissing => ErrorKind::InternalServerError,
            AuthError::InvalidCredentials
            | AuthError::Unauthorized
            | AuthError::ApiKeyMissing
            | AuthError::ApiKeyInvalid => ErrorKind::Unauthorized,
            AuthError::Database(_) | AuthError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    ///
    /// Database and internal failures collapse to a generic message so no
    /// backend detail reaches the client.
    pub fn to_app_error(&self) -> AppError {
        match self {
            AuthError::Database(_) | AuthError::Internal(_) => {
                AppError::internal("Internal server error")
            }
            other => AppError::new(other.kind(), other.to_string()),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AuthError::Database(e) => {
                tracing::error!(error = %e, "Auth database error");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::ConfigMissing => {
                tracing::error!("Admin credentials not configured");
            }
            AuthError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<AppError> for AuthError {
    fn from(err: AppError) -> Self {
        AuthError::Internal(err.to_string())
    }
}
