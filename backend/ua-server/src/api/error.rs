//! REST API error types
//!
//! Every failure leaves the API as either an `ErrorResponse`
//! (`{error, code, details?}`) or, for field validation, a
//! `ValidationErrorResponse` (`{error, details: {field: message}}`).

use crate::api::error_codes::{
    EMAIL_EXISTS, USER_COUNT_ERROR, USER_CREATE_ERROR, USER_FETCH_ERROR, USER_LOOKUP_ERROR,
    USER_NOT_FOUND,
};

use ua_core::{CreateUserError, FieldErrors, GetUserError, ListUsersError, StoreError};

use std::panic::Location;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

const VALIDATION_FAILED: &str = "Validation failed";

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable summary
    pub error: String,
    /// Machine-readable error code (e.g., "USER_NOT_FOUND")
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// JSON body for field validation failures
#[derive(Debug, Serialize)]
pub struct ValidationErrorResponse {
    pub error: String,
    pub details: FieldErrors,
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed request (400)
    #[error("Bad request [{code}]: {message} {location}")]
    BadRequest {
        code: &'static str,
        message: String,
        details: Option<String>,
        location: ErrorLocation,
    },

    /// Field validation failed (400)
    #[error("Validation failed: {errors} {location}")]
    Validation {
        errors: FieldErrors,
        location: ErrorLocation,
    },

    /// Resource not found (404)
    #[error("Not found [{code}]: {message} {location}")]
    NotFound {
        code: &'static str,
        message: String,
        details: Option<String>,
        location: ErrorLocation,
    },

    /// Uniqueness conflict (409)
    #[error("Conflict [{code}]: {message} {location}")]
    Conflict {
        code: &'static str,
        message: String,
        details: Option<String>,
        location: ErrorLocation,
    },

    /// Store failure (500). The store error is logged, never rendered.
    #[error("Internal error [{code}]: {message}: {source} {location}")]
    Internal {
        code: &'static str,
        message: String,
        details: Option<String>,
        source: StoreError,
        location: ErrorLocation,
    },
}

impl ApiError {
    #[track_caller]
    pub fn bad_request<M: Into<String>, D: Into<String>>(
        code: &'static str,
        message: M,
        details: D,
    ) -> Self {
        ApiError::BadRequest {
            code,
            message: message.into(),
            details: Some(details.into()),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    fn internal(code: &'static str, message: &str, source: StoreError) -> Self {
        ApiError::Internal {
            code,
            message: message.to_string(),
            details: Some(source.public_detail().to_string()),
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest { .. } | ApiError::Validation { .. } => StatusCode::BAD_REQUEST,
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Conflict { .. } => StatusCode::CONFLICT,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        // The only place API failures are logged
        if status.is_server_error() {
            log::error!("{}", self);
        } else {
            log::warn!("{}", self);
        }

        let (code, message, details) = match self {
            ApiError::Validation { errors, .. } => {
                let body = ValidationErrorResponse {
                    error: VALIDATION_FAILED.to_string(),
                    details: errors,
                };
                return (status, Json(body)).into_response();
            }
            ApiError::BadRequest {
                code,
                message,
                details,
                ..
            }
            | ApiError::NotFound {
                code,
                message,
                details,
                ..
            }
            | ApiError::Conflict {
                code,
                message,
                details,
                ..
            }
            | ApiError::Internal {
                code,
                message,
                details,
                ..
            } => (code, message, details),
        };

        let body = ErrorResponse {
            error: message,
            code: code.to_string(),
            details,
        };

        (status, Json(body)).into_response()
    }
}

/// Convert listing failures to API errors
impl From<ListUsersError> for ApiError {
    #[track_caller]
    fn from(e: ListUsersError) -> Self {
        match e {
            ListUsersError::CountFailed { source, .. } => {
                ApiError::internal(USER_COUNT_ERROR, "Failed to count users", source)
            }
            ListUsersError::FetchFailed { source, .. } => {
                ApiError::internal(USER_FETCH_ERROR, "Failed to fetch users", source)
            }
        }
    }
}

/// Convert creation failures to API errors
impl From<CreateUserError> for ApiError {
    #[track_caller]
    fn from(e: CreateUserError) -> Self {
        match e {
            CreateUserError::Validation { errors, .. } => ApiError::Validation {
                errors,
                location: ErrorLocation::from(Location::caller()),
            },
            CreateUserError::EmailExists { .. } => ApiError::Conflict {
                code: EMAIL_EXISTS,
                message: "Email already exists".to_string(),
                details: Some("A user with this email address already exists".to_string()),
                location: ErrorLocation::from(Location::caller()),
            },
            CreateUserError::LookupFailed { source, .. } => {
                ApiError::internal(
                    USER_LOOKUP_ERROR,
                    "Failed to check email availability",
                    source,
                )
            }
            CreateUserError::CreateFailed { source, .. } => {
                ApiError::internal(USER_CREATE_ERROR, "Failed to create user", source)
            }
        }
    }
}

/// Convert lookup failures to API errors
impl From<GetUserError> for ApiError {
    #[track_caller]
    fn from(e: GetUserError) -> Self {
        match e {
            GetUserError::NotFound { .. } => ApiError::NotFound {
                code: USER_NOT_FOUND,
                message: "User not found".to_string(),
                details: Some("No user exists with the provided ID".to_string()),
                location: ErrorLocation::from(Location::caller()),
            },
            GetUserError::FetchFailed { source, .. } => {
                ApiError::internal(USER_FETCH_ERROR, "Failed to fetch user", source)
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
