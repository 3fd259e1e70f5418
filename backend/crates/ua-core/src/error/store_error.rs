//! Gateway-neutral store failures.
//!
//! Store adapters translate their driver errors into `StoreError` so the
//! services never see `sqlx` (or any other driver) types.

use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    /// The store could not be reached (pool closed, timed out, I/O failure)
    #[error("Store unavailable: {message} {location}")]
    Unavailable {
        message: String,
        location: ErrorLocation,
    },

    /// The store was reached but the statement failed
    #[error("Store query failed: {message} {location}")]
    Query {
        message: String,
        location: ErrorLocation,
    },

    /// An insert collided with a uniqueness constraint
    #[error("Unique constraint violated: {message} {location}")]
    UniqueViolation {
        message: String,
        location: ErrorLocation,
    },
}

impl StoreError {
    #[track_caller]
    pub fn unavailable<S: Into<String>>(message: S) -> Self {
        StoreError::Unavailable {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn query<S: Into<String>>(message: S) -> Self {
        StoreError::Query {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn unique_violation<S: Into<String>>(message: S) -> Self {
        StoreError::UniqueViolation {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn is_unique_violation(&self) -> bool {
        matches!(self, StoreError::UniqueViolation { .. })
    }

    /// Short description that is safe to hand back to API clients.
    pub fn public_detail(&self) -> &'static str {
        match self {
            StoreError::Unavailable { .. } => "Database unavailable",
            StoreError::Query { .. } | StoreError::UniqueViolation { .. } => {
                "Database query failed"
            }
        }
    }
}

pub type StoreResult<T> = StdResult<T, StoreError>;
