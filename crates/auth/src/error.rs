//! Auth Error Types

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// Unknown username or wrong password; deliberately one variant so the
    /// response cannot reveal which half was wrong
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Session token missing, malformed, tampered with, or expired
    #[error("Session not found or expired")]
    SessionInvalid,

    /// Account with that username already exists
    #[error("Username already exists")]
    UsernameTaken,

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
            AuthError::InvalidCredentials | AuthError::SessionInvalid => StatusCode::UNAUTHORIZED,
            AuthError::UsernameTaken => StatusCode::CONFLICT,
            AuthError::Database(_) | AuthError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Log the error with a level matched to the variant
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
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        let status = self.status_code();
        (status, status.canonical_reason().unwrap_or("Error").to_string()).into_response()
    }
}

impl From<platform::password::PasswordError> for AuthError {
    fn from(err: platform::password::PasswordError) -> Self {
        AuthError::Internal(err.to_string())
    }
}
