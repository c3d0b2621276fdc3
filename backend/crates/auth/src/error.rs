//! Auth Error Types
//!
//! This module provides auth-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.
//!
//! Token and credential failures deliberately share one client-visible
//! outcome: a 401 that does not say which check failed. The log keeps
//! the distinction.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// No token supplied with the request
    #[error("No session token supplied")]
    MissingToken,

    /// Token could not be parsed or its signature does not verify
    #[error("Session token is malformed or has an invalid signature")]
    MalformedToken,

    /// Token is past its encoded expiry
    #[error("Session token has expired")]
    ExpiredToken,

    /// Unknown email or wrong password (never distinguished to clients)
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Email already has an account
    #[error("Email is already registered")]
    EmailTaken,

    /// Signup input validation error
    #[error("Validation failed: {0}")]
    Validation(String),

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
            AuthError::MissingToken
            | AuthError::MalformedToken
            | AuthError::ExpiredToken
            | AuthError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            AuthError::EmailTaken => StatusCode::CONFLICT,
            AuthError::Validation(_) => StatusCode::BAD_REQUEST,
            AuthError::Database(_) | AuthError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::MissingToken
            | AuthError::MalformedToken
            | AuthError::ExpiredToken
            | AuthError::InvalidCredentials => ErrorKind::Unauthorized,
            AuthError::EmailTaken => ErrorKind::Conflict,
            AuthError::Validation(_) => ErrorKind::BadRequest,
            AuthError::Database(_) | AuthError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
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
            AuthError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            AuthError::ExpiredToken => {
                tracing::debug!("Request with expired token");
            }
            AuthError::MalformedToken => {
                tracing::warn!("Request with malformed token");
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
        match &self {
            // Gate rejections: bare 401, nothing leaks
            AuthError::MissingToken | AuthError::MalformedToken | AuthError::ExpiredToken => {
                StatusCode::UNAUTHORIZED.into_response()
            }
            // Login rejection: the body shape clients key on
            AuthError::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                Json(serde_json::json!({ "message": "auth error" })),
            )
                .into_response(),
            // Server errors: empty body, detail stays in the log
            AuthError::Database(_) | AuthError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
            _ => self.to_app_error().into_response(),
        }
    }
}

impl From<AppError> for AuthError {
    fn from(err: AppError) -> Self {
        AuthError::Internal(err.to_string())
    }
}
