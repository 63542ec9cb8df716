pub mod config;
pub mod operations;

use std::str::FromStr;

use sqlx::postgres::PgPoolOptions;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{PgPool, SqlitePool};
use thiserror::Error;

use crate::db::config::{DbBackend, DbConfig, DbConfigError};

pub use operations::words::StoredWord;

const WORDS_SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS "words" (
    "id" TEXT PRIMARY KEY,
    "source" TEXT NOT NULL,
    "translation" TEXT NOT NULL,
    "createdAt" TEXT NOT NULL,
    "updatedAt" TEXT NOT NULL
)
"#;

/// Durable word-pair collection backed by Postgres or SQLite
#[derive(Clone, Debug)]
pub enum WordStore {
    Postgres(PgPool),
    Sqlite(SqlitePool),
}

impl WordStore {
    /// Open a pool for `config.url` and create the schema if missing
    pub async fn connect(config: &DbConfig) -> Result<Self, DbInitError> {
        let store = match config.backend()? {
            DbBackend::Postgres => {
                let pool = PgPoolOptions::new()
                    .max_connections(config.max_connections)
                    .acquire_timeout(config.acquire_timeout)
                    .connect(&config.url)
                    .await?;
                Self::Postgres(pool)
            }
            DbBackend::Sqlite => {
                ensure_sqlite_parent_dir(&config.url)?;
                let options = SqliteConnectOptions::from_str(&config.url)?
                    .create_if_missing(true)
                    .journal_mode(config.sqlite_journal_mode.to_sqlx())
                    .busy_timeout(config.sqlite_busy_timeout);
                let pool = SqlitePoolOptions::new()
                    .max_connections(config.max_connections)
                    .acquire_timeout(config.acquire_timeout)
                    .connect_with(options)
                    .await?;
                Self::Sqlite(pool)
            }
        };

        store.ensure_schema().await?;
        tracing::info!(backend = store.backend().as_str(), "word store ready");

        Ok(store)
    }

    pub fn backend(&self) -> DbBackend {
        match self {
            WordStore::Postgres(_) => DbBackend::Postgres,
            WordStore::Sqlite(_) => DbBackend::Sqlite,
        }
    }

    pub async fn ensure_schema(&self) -> Result<(), sqlx::Error> {
        match self {
            WordStore::Postgres(pool) => {
                sqlx::query(WORDS_SCHEMA).execute(pool).await?;
            }
            WordStore::Sqlite(pool) => {
                sqlx::query(WORDS_SCHEMA).execute(pool).await?;
            }
        }
        Ok(())
    }

    /// Round-trip a trivial query
    pub async fn ping(&self) -> Result<(), sqlx::Error> {
        match self {
            WordStore::Postgres(pool) => {
                sqlx::query("SELECT 1").execute(pool).await?;
            }
            WordStore::Sqlite(pool) => {
                sqlx::query("SELECT 1").execute(pool).await?;
            }
        }
        Ok(())
    }

    pub async fn close(&self) {
        match self {
            WordStore::Postgres(pool) => pool.close().await,
            WordStore::Sqlite(pool) => pool.close().await,
        }
    }
}

fn ensure_sqlite_parent_dir(url: &str) -> Result<(), std::io::Error> {
    let path = url
        .trim_start_matches("sqlite://")
        .trim_start_matches("sqlite:")
        .split('?')
        .next()
        .unwrap_or_default();

    if path.is_empty() || path.contains(":memory:") {
        return Ok(());
    }

    match std::path::Path::new(path).parent() {
        Some(parent) if !parent.as_os_str().is_empty() => std::fs::create_dir_all(parent),
        _ => Ok(()),
    }
}

#[derive(Debug, Error)]
pub enum DbInitError {
    #[error(transparent)]
    Config(#[from] DbConfigError),
    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
    #[error("failed to prepare database directory: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum DbError {
    #[error("database query failed: {0}")]
    Sqlx(#[from] sqlx::Error),
}
