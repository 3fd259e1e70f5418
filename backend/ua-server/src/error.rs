use std::path::PathBuf;

use thiserror::Error;

/// Startup and shutdown failures of the server process
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Config error: {0}")]
    Config(#[from] ua_config::ConfigError),

    #[error("Database error: {0}")]
    Database(#[from] ua_db::DbError),

    #[error("Cannot open log file {}: {source}", .path.display())]
    LogFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Logger already installed: {source}")]
    Logger {
        #[source]
        source: log::SetLoggerError,
    },

    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Server error: {source}")]
    Serve {
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, ServerError>;
