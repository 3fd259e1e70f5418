use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_CONNECT_ATTEMPTS, DEFAULT_CONNECT_DELAY_MS,
    DEFAULT_DATABASE_FILENAME, DEFAULT_DATABASE_MAX_CONNECTIONS, MAX_CONNECT_ATTEMPTS,
    MAX_CONNECT_DELAY_MS, MAX_DATABASE_MAX_CONNECTIONS, MIN_CONNECT_ATTEMPTS, MIN_CONNECT_DELAY_MS,
    MIN_DATABASE_MAX_CONNECTIONS,
};

use std::path::Path;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// SQLite file, relative to the config directory
    pub path: String,
    /// Full `sqlite:` URL; takes precedence over `path` when set
    pub url: Option<String>,
    pub max_connections: u32,
    /// Connection attempts at startup, including the first one
    pub connect_attempts: u32,
    /// Delay before the second attempt; doubles after each failure
    pub connect_delay_ms: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: String::from(DEFAULT_DATABASE_FILENAME),
            url: None,
            max_connections: DEFAULT_DATABASE_MAX_CONNECTIONS,
            connect_attempts: DEFAULT_CONNECT_ATTEMPTS,
            connect_delay_ms: DEFAULT_CONNECT_DELAY_MS,
        }
    }
}

impl DatabaseConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        match &self.url {
            Some(url) => {
                if !url.starts_with("sqlite:") {
                    return Err(ConfigError::invalid(
                        "database.url",
                        format!("must start with 'sqlite:', got {}", url),
                    ));
                }
            }
            None => {
                // Keep the database inside the config dir
                if Path::new(&self.path).is_absolute() || self.path.contains("..") {
                    return Err(ConfigError::invalid(
                        "database.path",
                        "must be relative and cannot contain '..'",
                    ));
                }
                if self.path.trim().is_empty() {
                    return Err(ConfigError::invalid("database.path", "cannot be empty"));
                }
            }
        }

        if !(MIN_DATABASE_MAX_CONNECTIONS..=MAX_DATABASE_MAX_CONNECTIONS)
            .contains(&self.max_connections)
        {
            return Err(ConfigError::invalid(
                "database.max_connections",
                format!("must be {}-{}, got {}", MIN_DATABASE_MAX_CONNECTIONS, MAX_DATABASE_MAX_CONNECTIONS, self.max_connections),
            ));
        }

        if !(MIN_CONNECT_ATTEMPTS..=MAX_CONNECT_ATTEMPTS).contains(&self.connect_attempts) {
            return Err(ConfigError::invalid(
                "database.connect_attempts",
                format!("must be {}-{}, got {}", MIN_CONNECT_ATTEMPTS, MAX_CONNECT_ATTEMPTS, self.connect_attempts),
            ));
        }

        if !(MIN_CONNECT_DELAY_MS..=MAX_CONNECT_DELAY_MS).contains(&self.connect_delay_ms) {
            return Err(ConfigError::invalid(
                "database.connect_delay_ms",
                format!("must be {}-{}, got {}", MIN_CONNECT_DELAY_MS, MAX_CONNECT_DELAY_MS, self.connect_delay_ms),
            ));
        }

        Ok(())
    }
}
