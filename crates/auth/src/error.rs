//! Auth Error Types
//!
//! This module provides auth-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use platform::password::{PasswordHashError, PasswordPolicyError};
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// Malformed email address
    #[error("Invalid email format")]
    InvalidEmail,

    /// Password fails the signup policy
    #[error("{0}")]
    PasswordPolicy(PasswordPolicyError),

    /// Email already registered
    #[error("Email already in use")]
    EmailTaken,

    /// Unknown email or wrong password. Deliberately a single variant so the
    /// response never reveals which emails are registered.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Refresh token absent, already consumed, or expired
    #[error("Invalid refresh token")]
    InvalidRefreshToken,

    /// Access token missing, malformed, expired, or badly signed
    #[error("Unauthorized")]
    InvalidAccessToken,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::InvalidEmail | AuthError::PasswordPolicy(_) => ErrorKind::BadRequest,
            AuthError::EmailTaken => ErrorKind::Conflict,
            AuthError::InvalidCredentials
            | AuthError::InvalidRefreshToken
            | AuthError::InvalidAccessToken => ErrorKind::Unauthorized,
            AuthError::Database(e) => match e {
                // A lost signup race surfaces as a unique violation; it gets
                // the same status a pre-checked duplicate would have produced.
                sqlx::Error::Database(db) if db.code().as_deref() == Some("23505") => {
                    ErrorKind::Conflict
                }
                sqlx::Error::PoolTimedOut | sqlx::Error::Io(_) => ErrorKind::ServiceUnavailable,
                _ => ErrorKind::InternalServerError,
            },
            AuthError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.kind().status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Convert to AppError
    pub fn to_app_error(self) -> AppError {
        match self {
            AuthError::Database(e) => {
                let app = AppError::from(e);
                if app.kind() == ErrorKind::Conflict {
                    AppError::conflict("Email already in use")
                } else {
                    app
                }
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
            AuthError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            AuthError::InvalidRefreshToken => {
                tracing::warn!("Rejected refresh token");
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

impl From<PasswordPolicyError> for AuthError {
    fn from(err: PasswordPolicyError) -> Self {
        AuthError::PasswordPolicy(err)
    }
}

impl From<PasswordHashError> for AuthError {
    fn from(err: PasswordHashError) -> Self {
        AuthError::Internal(err.to_string())
    }
}
