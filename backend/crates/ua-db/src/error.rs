use ua_core::StoreError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

// SQLite primary result codes worth retrying while connecting
const SQLITE_BUSY: i32 = 5;
const SQLITE_LOCKED: i32 = 6;
const SQLITE_CANTOPEN: i32 = 14;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("SQLx error: {source} {location}")]
    Sqlx {
        source: sqlx::Error,
        location: ErrorLocation,
    },

    #[error("Migration error: {message} {location}")]
    Migration {
        message: String,
        location: ErrorLocation,
    },

    #[error("Row decode failed: {message} {location}")]
    Decode {
        message: String,
        location: ErrorLocation,
    },

    #[error("Database initialization failed: {message} {location}")]
    Initialization {
        message: String,
        location: ErrorLocation,
    },
}

impl DbError {
    #[track_caller]
    pub fn initialization<S: Into<String>>(message: S) -> Self {
        DbError::Initialization {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// A stored value that does not fit the domain type
    #[track_caller]
    pub fn decode<S: Into<String>>(message: S) -> Self {
        DbError::Decode {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// True if the statement failed on a UNIQUE constraint
    pub fn is_unique_violation(&self) -> bool {
        match self {
            DbError::Sqlx { source, .. } => source
                .as_database_error()
                .is_some_and(|e| e.is_unique_violation()),
            _ => false,
        }
    }

    /// True if the failure means the database could not be reached at all
    pub fn is_connection_error(&self) -> bool {
        match self {
            DbError::Sqlx { source, .. } => matches!(
                source,
                sqlx::Error::Io(_)
                    | sqlx::Error::Tls(_)
                    | sqlx::Error::PoolTimedOut
                    | sqlx::Error::PoolClosed
                    | sqlx::Error::WorkerCrashed
            ),
            _ => false,
        }
    }

    fn sqlite_primary_code(&self) -> Option<i32> {
        match self {
            DbError::Sqlx { source, .. } => source
                .as_database_error()
                .and_then(|e| e.code())
                .and_then(|code| code.parse::<i32>().ok())
                .map(|code| code & 0xff),
            _ => None,
        }
    }

    pub(crate) fn is_transient(&self) -> bool {
        self.is_connection_error()
            || matches!(
                self.sqlite_primary_code(),
                Some(SQLITE_BUSY | SQLITE_LOCKED | SQLITE_CANTOPEN)
            )
    }
}

impl From<sqlx::Error> for DbError {
    #[track_caller]
    fn from(source: sqlx::Error) -> Self {
        Self::Sqlx {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<DbError> for StoreError {
    #[track_caller]
    fn from(error: DbError) -> Self {
        if error.is_unique_violation() {
            StoreError::unique_violation(error.to_string())
        } else if error.is_connection_error() {
            StoreError::unavailable(error.to_string())
        } else {
            StoreError::query(error.to_string())
        }
    }
}

pub type Result<T> = std::result::Result<T, DbError>;
