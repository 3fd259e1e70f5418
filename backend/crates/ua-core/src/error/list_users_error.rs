use crate::StoreError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Failures of the paginated user listing, split by phase.
#[derive(Error, Debug)]
pub enum ListUsersError {
    #[error("Failed to count users: {source} {location}")]
    CountFailed {
        source: StoreError,
        location: ErrorLocation,
    },

    #[error("Failed to fetch users: {source} {location}")]
    FetchFailed {
        source: StoreError,
        location: ErrorLocation,
    },
}

impl ListUsersError {
    #[track_caller]
    pub fn count_failed(source: StoreError) -> Self {
        ListUsersError::CountFailed {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn fetch_failed(source: StoreError) -> Self {
        ListUsersError::FetchFailed {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
