//! Process-wide logger.
//!
//! Every record is one line: `[<rfc3339 time> - <LEVEL>] <message> [<file>:<line>]`.

use crate::error::{Result as ServerErrorResult, ServerError};

use ua_config::LogLevel;

use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use fern::Dispatch;
use fern::colors::{Color, ColoredLevelConfig};
use log::{LevelFilter, info};

/// Where log lines go
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stdout { colored: bool },
    /// Appended to, never colored
    File(PathBuf),
}

impl LogTarget {
    pub fn from_config(log_file: Option<PathBuf>, colored: bool) -> Self {
        match log_file {
            Some(path) => LogTarget::File(path),
            None => LogTarget::Stdout { colored },
        }
    }
}

pub fn initialize(level: LogLevel, target: LogTarget) -> ServerErrorResult<()> {
    let dispatch = match &target {
        LogTarget::File(path) => line_format(None).chain(open_log_file(path)?),
        LogTarget::Stdout { colored } => {
            let colors = colored.then(level_colors);
            line_format(colors).chain(std::io::stdout())
        }
    };

    Dispatch::new()
        .level(*level)
        // sqlx logs every statement at info
        .level_for("sqlx", LevelFilter::Warn)
        .chain(dispatch)
        .apply()
        .map_err(|source| ServerError::Logger { source })?;

    match target {
        LogTarget::File(path) => info!("Logging at {} to {}", *level, path.display()),
        LogTarget::Stdout { .. } => info!("Logging at {} to stdout", *level),
    }

    Ok(())
}

/// Open `path` for appending, creating missing parent directories
pub(crate) fn open_log_file(path: &Path) -> ServerErrorResult<File> {
    let to_error = |source| ServerError::LogFile {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(to_error)?;
    }

    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(to_error)
}

fn level_colors() -> ColoredLevelConfig {
    ColoredLevelConfig::new()
        .trace(Color::Magenta)
        .debug(Color::Blue)
        .info(Color::Green)
        .warn(Color::Yellow)
        .error(Color::Red)
}

fn line_format(colors: Option<ColoredLevelConfig>) -> Dispatch {
    Dispatch::new().format(move |out, message, record| {
        let time = humantime::format_rfc3339(SystemTime::now());
        let file = record.file().unwrap_or("unknown");
        let line = record.line().unwrap_or(0);

        match colors {
            Some(colors) => out.finish(format_args!(
                "[{} - {}] {} [{}:{}]",
                time,
                colors.color(record.level()),
                message,
                file,
                line
            )),
            None => out.finish(format_args!(
                "[{} - {}] {} [{}:{}]",
                time,
                record.level(),
                message,
                file,
                line
            )),
        }
    })
}
