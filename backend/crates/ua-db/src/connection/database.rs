//! Connection lifecycle for the SQLite store.
//!
//! `open` -> `health_check`* -> `close`. The composition root owns the
//! `Database`; repositories get clones of the pool.

use crate::{DbError, Result, RetryPolicy, with_retry};

use std::panic::Location;
use std::str::FromStr;
use std::time::Duration;

use error_location::ErrorLocation;
use log::info;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};

const BUSY_TIMEOUT_SECS: u64 = 5;

pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Connect (retrying transient failures per `retry`) and apply migrations.
    pub async fn open(url: &str, max_connections: u32, retry: &RetryPolicy) -> Result<Self> {
        if !url.starts_with("sqlite:") {
            return Err(DbError::initialization(format!(
                "Unsupported database URL (expected sqlite:): {}",
                url
            )));
        }

        let options = SqliteConnectOptions::from_str(url)?
            .create_if_missing(true)
            .foreign_keys(true)
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(Duration::from_secs(BUSY_TIMEOUT_SECS));

        // SQLite creates the file but not its directory
        let filename = options.get_filename().to_path_buf();
        if let Some(parent) = filename.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| DbError::Initialization {
                    message: format!("Failed to create database directory: {}", e),
                    location: ErrorLocation::from(Location::caller()),
                })?;
        }

        let pool = with_retry(retry, "database connect", || {
            Self::connect(options.clone(), max_connections)
        })
        .await?;

        Self::run_migrations(&pool).await?;

        info!(
            "Database ready at {} (max {} connections)",
            filename.display(),
            max_connections
        );

        Ok(Self { pool })
    }

    /// Wrap an existing pool. The caller is responsible for migrations.
    pub fn from_pool(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    pub async fn health_check(&self) -> Result<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    /// Close every pooled connection. Subsequent queries fail with `PoolClosed`.
    pub async fn close(&self) {
        self.pool.close().await;
        info!("Database connections closed");
    }

    pub async fn run_migrations(pool: &SqlitePool) -> Result<()> {
        sqlx::migrate!("./migrations")
            .run(pool)
            .await
            .map_err(|e| DbError::Migration {
                message: format!("Migration failed: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        Ok(())
    }

    async fn connect(options: SqliteConnectOptions, max_connections: u32) -> Result<SqlitePool> {
        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await?;

        Ok(pool)
    }
}
