use crate::{StoreError, UserId};

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GetUserError {
    #[error("User {id} not found {location}")]
    NotFound { id: UserId, location: ErrorLocation },

    #[error("Failed to fetch user: {source} {location}")]
    FetchFailed {
        source: StoreError,
        location: ErrorLocation,
    },
}

impl GetUserError {
    #[track_caller]
    pub fn not_found(id: UserId) -> Self {
        GetUserError::NotFound {
            id,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn fetch_failed(source: StoreError) -> Self {
        GetUserError::FetchFailed {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
