//! HTTP error envelope and mapping from service errors.
//!
//! Keeps the services free of transport concerns by translating their error
//! taxonomies into Actix responses here.

use crate::task::services::TaskServiceError;
use crate::user::services::UserServiceError;
use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::error;

/// Stable machine-readable error codes carried in the envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// The request was malformed or failed validation.
    InvalidRequest,
    /// The referenced resource does not exist.
    NotFound,
    /// The request conflicts with existing state.
    Conflict,
    /// An unclassified server-side failure.
    InternalError,
}

/// Standard error envelope returned by the HTTP adapter.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    code: ErrorCode,
    message: String,
}

impl ApiError {
    /// Creates a `400 Bad Request` error.
    #[must_use]
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::InvalidRequest,
            message: message.into(),
        }
    }

    /// Creates a `404 Not Found` error.
    #[must_use]
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::NotFound,
            message: message.into(),
        }
    }

    /// Creates a `409 Conflict` error.
    #[must_use]
    pub fn conflict(message: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::Conflict,
            message: message.into(),
        }
    }

    /// Creates a `500 Internal Server Error` error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::InternalError,
            message: message.into(),
        }
    }

    /// Stable machine-readable error code.
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        self.code
    }

    /// Human readable message.
    #[must_use]
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    const fn to_status_code(&self) -> StatusCode {
        match self.code {
            ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
            ErrorCode::NotFound => StatusCode::NOT_FOUND,
            ErrorCode::Conflict => StatusCode::CONFLICT,
            ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        self.to_status_code()
    }

    fn error_response(&self) -> HttpResponse {
        let mut builder = HttpResponse::build(self.status_code());
        if matches!(self.code, ErrorCode::InternalError) {
            let mut redacted = self.clone();
            redacted.message = "Internal server error".to_owned();
            return builder.json(redacted);
        }
        builder.json(self)
    }
}

impl From<UserServiceError> for ApiError {
    fn from(err: UserServiceError) -> Self {
        match err {
            UserServiceError::NotFound(_) | UserServiceError::PassportNotFound(_) => {
                Self::not_found(err.to_string())
            }
            UserServiceError::PassportTaken(_) => Self::conflict(err.to_string()),
            UserServiceError::Validation(_) => Self::invalid_request(err.to_string()),
            UserServiceError::Repository(repo_err) => {
                error!(error = %repo_err, "user repository failure");
                Self::internal(repo_err.to_string())
            }
        }
    }
}

impl From<TaskServiceError> for ApiError {
    fn from(err: TaskServiceError) -> Self {
        match err {
            TaskServiceError::UserNotFound(_)
            | TaskServiceError::NoActiveTask(_)
            | TaskServiceError::NoCompletedTasks(_) => Self::not_found(err.to_string()),
            TaskServiceError::UnknownUser(_) | TaskServiceError::Validation(_) => {
                Self::invalid_request(err.to_string())
            }
            TaskServiceError::ActiveTaskExists(_) => Self::conflict(err.to_string()),
            TaskServiceError::Repository(repo_err) => {
                error!(error = %repo_err, "task repository failure");
                Self::internal(repo_err.to_string())
            }
        }
    }
}
