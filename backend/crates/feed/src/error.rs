//! Feed Error Types
//!
//! This module provides feed-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Feed-specific result type alias
pub type FeedResult<T> = Result<T, FeedError>;

/// Feed-specific error variants
#[derive(Debug, Error)]
pub enum FeedError {
    /// Message missing or empty after trimming
    #[error("Message cannot be empty")]
    EmptyMessage,

    /// Message exceeds the configured length cap
    #[error("Message must be at most {max} characters")]
    MessageTooLong { max: usize },

    /// Operation on a post that does not exist
    #[error("Post not found")]
    PostNotFound,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl FeedError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            FeedError::EmptyMessage | FeedError::MessageTooLong { .. } => StatusCode::BAD_REQUEST,
            FeedError::PostNotFound => StatusCode::NOT_FOUND,
            FeedError::Database(_) | FeedError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            FeedError::EmptyMessage | FeedError::MessageTooLong { .. } => ErrorKind::BadRequest,
            FeedError::PostNotFound => ErrorKind::NotFound,
            FeedError::Database(_) | FeedError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            FeedError::Database(e) => {
                tracing::error!(error = %e, "Feed database error");
            }
            FeedError::Internal(msg) => {
                tracing::error!(message = %msg, "Feed internal error");
            }
            _ => {
                tracing::debug!(error = %self, "Feed error");
            }
        }
    }
}

impl IntoResponse for FeedError {
    fn into_response(self) -> Response {
        self.log();
        match &self {
            // Server errors return an empty body; detail stays in the log
            FeedError::Database(_) | FeedError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
            _ => self.to_app_error().into_response(),
        }
    }
}
