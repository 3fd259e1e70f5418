use crate::{
    CONFIG_DIR_ENV, CONFIG_FILENAME, ConfigError, ConfigErrorResult, DEFAULT_CONFIG_DIR,
    DatabaseConfig, LoggingConfig, ServerConfig,
};

use std::path::{Path, PathBuf};

use log::{info, warn};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for UA_CONFIG_DIR env var, else use ./.ua/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply UA_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::io(&config_dir, e))?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::io(path, e))?;

        toml::from_str(&contents).map_err(|e| ConfigError::parse(path, e))
    }

    /// Get the config directory.
    /// Priority: UA_CONFIG_DIR env var > ./.ua/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir().map_err(|e| ConfigError::io(Path::new("."), e))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.database.validate()?;

        if let Some(file) = &self.logging.file
            && (Path::new(file).is_absolute() || file.contains(".."))
        {
            return Err(ConfigError::invalid(
                "logging.file",
                "must be relative and cannot contain '..'",
            ));
        }

        Ok(())
    }

    /// Effective SQLite URL: `database.url` if set, else a file in the config dir.
    pub fn database_url(&self) -> ConfigErrorResult<String> {
        if let Some(url) = &self.database.url {
            return Ok(url.clone());
        }

        let path = Self::config_dir()?.join(&self.database.path);
        Ok(format!("sqlite://{}?mode=rwc", path.display()))
    }

    /// Absolute log file path, or None for stdout.
    pub fn log_file_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        match &self.logging.file {
            None => Ok(None),
            Some(file) => {
                let dir = Self::config_dir()?.join(&self.logging.dir);
                Ok(Some(dir.join(file)))
            }
        }
    }

    /// Get bind address as string.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log configuration summary.
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  server: {}:{}", self.server.host, self.server.port);

        match &self.database.url {
            Some(_) => info!("  database: <url> (from UA_DATABASE_URL / database.url)"),
            None => info!("  database: {}", self.database.path),
        }

        info!(
            "  database pool: max {} connections, connect attempts={}, initial delay={}ms",
            self.database.max_connections,
            self.database.connect_attempts,
            self.database.connect_delay_ms
        );

        info!(
            "  logging: {} (colored: {}, file: {})",
            *self.logging.level,
            self.logging.colored,
            self.logging.file.as_deref().unwrap_or("stdout")
        );
    }

    fn apply_env_overrides(&mut self) {
        let server = &mut self.server;
        env_override("UA_SERVER_HOST", &mut server.host, text);
        env_override("UA_SERVER_PORT", &mut server.port, number);

        let database = &mut self.database;
        env_override("UA_DATABASE_PATH", &mut database.path, text);
        env_override("UA_DATABASE_URL", &mut database.url, optional_text);
        env_override("UA_DATABASE_MAX_CONNECTIONS", &mut database.max_connections, number);
        env_override("UA_DATABASE_CONNECT_ATTEMPTS", &mut database.connect_attempts, number);
        env_override("UA_DATABASE_CONNECT_DELAY_MS", &mut database.connect_delay_ms, number);

        let logging = &mut self.logging;
        env_override("UA_LOG_LEVEL", &mut logging.level, |raw| raw.parse().ok());
        env_override("UA_LOG_COLORED", &mut logging.colored, flag);
        env_override("UA_LOG_FILE", &mut logging.file, optional_text);
    }
}

/// Replace `target` with the parsed value of `var`, if set.
/// A value that does not parse leaves the target alone.
fn env_override<T>(var: &str, target: &mut T, parse: impl FnOnce(&str) -> Option<T>) {
    let Ok(raw) = std::env::var(var) else {
        return;
    };
    match parse(&raw) {
        Some(value) => *target = value,
        None => warn!("Ignoring {}={:?}: not a valid value", var, raw),
    }
}

fn text(raw: &str) -> Option<String> {
    Some(raw.to_string())
}

/// Empty clears the setting
fn optional_text(raw: &str) -> Option<Option<String>> {
    Some((!raw.is_empty()).then(|| raw.to_string()))
}

fn number<T: std::str::FromStr>(raw: &str) -> Option<T> {
    raw.trim().parse().ok()
}

/// "true"/"1" enable, anything else disables
fn flag(raw: &str) -> Option<bool> {
    Some(raw == "true" || raw == "1")
}
