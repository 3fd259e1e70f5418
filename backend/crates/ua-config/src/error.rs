//! Configuration failures: the file could not be read, could not be
//! parsed, or holds a value the server cannot start with.

use std::io;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// `key` is the dotted setting name, e.g. `database.max_connections`
    #[error("Invalid {key}: {reason} {location}")]
    InvalidValue {
        key: &'static str,
        reason: String,
        location: ErrorLocation,
    },

    #[error("Cannot access {}: {source} {location}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
        location: ErrorLocation,
    },

    #[error("Cannot parse {}: {source} {location}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
        location: ErrorLocation,
    },
}

impl ConfigError {
    #[track_caller]
    pub fn invalid<R: Into<String>>(key: &'static str, reason: R) -> Self {
        ConfigError::InvalidValue {
            key,
            reason: reason.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn io(path: &Path, source: io::Error) -> Self {
        ConfigError::Io {
            path: path.to_path_buf(),
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn parse(path: &Path, source: toml::de::Error) -> Self {
        ConfigError::Parse {
            path: path.to_path_buf(),
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// The rejected setting, if this is a validation failure
    pub fn key(&self) -> Option<&'static str> {
        match self {
            ConfigError::InvalidValue { key, .. } => Some(*key),
            _ => None,
        }
    }
}

pub type ConfigErrorResult<T> = StdResult<T, ConfigError>;
