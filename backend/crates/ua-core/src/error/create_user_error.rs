use crate::{FieldErrors, StoreError};

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CreateUserError {
    /// One or more input fields failed validation (client error)
    #[error("Validation failed: {errors} {location}")]
    Validation {
        errors: FieldErrors,
        location: ErrorLocation,
    },

    /// A non-deleted user already holds the email
    #[error("Email already exists: {email} {location}")]
    EmailExists {
        email: String,
        location: ErrorLocation,
    },

    /// The uniqueness pre-check could not be executed
    #[error("Failed to look up email: {source} {location}")]
    LookupFailed {
        source: StoreError,
        location: ErrorLocation,
    },

    /// The insert itself failed
    #[error("Failed to create user: {source} {location}")]
    CreateFailed {
        source: StoreError,
        location: ErrorLocation,
    },
}

impl CreateUserError {
    #[track_caller]
    pub fn validation(errors: FieldErrors) -> Self {
        CreateUserError::Validation {
            errors,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn email_exists<S: Into<String>>(email: S) -> Self {
        CreateUserError::EmailExists {
            email: email.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn lookup_failed(source: StoreError) -> Self {
        CreateUserError::LookupFailed {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn create_failed(source: StoreError) -> Self {
        CreateUserError::CreateFailed {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
