use std::time::Duration;

use thiserror::Error;

const DEFAULT_DATABASE_URL: &str = "sqlite://./data/words.db?mode=rwc";

#[derive(Debug, Clone)]
pub struct DbConfig {
    pub url: String,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
    pub sqlite_journal_mode: SqliteJournalMode,
    pub sqlite_busy_timeout: Duration,
}

impl DbConfig {
    pub fn from_vars<F>(var: &F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let url = var("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());
        let max_connections = var_parse(var, "DB_MAX_CONNECTIONS").unwrap_or(5u32).max(1);
        let acquire_timeout_ms = var_parse(var, "DB_ACQUIRE_TIMEOUT_MS").unwrap_or(5000u64);
        let busy_timeout_ms = var_parse(var, "SQLITE_BUSY_TIMEOUT_MS").unwrap_or(5000u64);

        let sqlite_journal_mode = var("SQLITE_JOURNAL_MODE")
            .as_deref()
            .and_then(SqliteJournalMode::parse)
            .unwrap_or(SqliteJournalMode::Wal);

        Self {
            url,
            max_connections,
            acquire_timeout: Duration::from_millis(acquire_timeout_ms),
            sqlite_journal_mode,
            sqlite_busy_timeout: Duration::from_millis(busy_timeout_ms),
        }
    }

    /// Config pointing at a specific database, other settings default
    pub fn with_url(url: impl Into<String>) -> Self {
        let url = url.into();
        let mut config = Self::from_vars(&|_: &str| None);
        config.url = url;
        config
    }

    pub fn backend(&self) -> Result<DbBackend, DbConfigError> {
        DbBackend::from_url(&self.url)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DbBackend {
    Postgres,
    Sqlite,
}

impl DbBackend {
    pub fn from_url(url: &str) -> Result<Self, DbConfigError> {
        let scheme = url.split(':').next().unwrap_or_default().to_ascii_lowercase();
        match scheme.as_str() {
            "postgres" | "postgresql" => Ok(Self::Postgres),
            "sqlite" => Ok(Self::Sqlite),
            _ => Err(DbConfigError::UnsupportedScheme { scheme }),
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            DbBackend::Postgres => "postgres",
            DbBackend::Sqlite => "sqlite",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SqliteJournalMode {
    Wal,
    Delete,
    Truncate,
    Memory,
}

impl SqliteJournalMode {
    fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_uppercase().as_str() {
            "WAL" => Some(Self::Wal),
            "DELETE" => Some(Self::Delete),
            "TRUNCATE" => Some(Self::Truncate),
            "MEMORY" => Some(Self::Memory),
            _ => None,
        }
    }

    pub fn to_sqlx(self) -> sqlx::sqlite::SqliteJournalMode {
        match self {
            SqliteJournalMode::Wal => sqlx::sqlite::SqliteJournalMode::Wal,
            SqliteJournalMode::Delete => sqlx::sqlite::SqliteJournalMode::Delete,
            SqliteJournalMode::Truncate => sqlx::sqlite::SqliteJournalMode::Truncate,
            SqliteJournalMode::Memory => sqlx::sqlite::SqliteJournalMode::Memory,
        }
    }
}

#[derive(Debug, Error)]
pub enum DbConfigError {
    #[error("unsupported database scheme: {scheme:?} (expected postgres or sqlite)")]
    UnsupportedScheme { scheme: String },
}

fn var_parse<F, T>(var: &F, key: &str) -> Option<T>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    var(key).and_then(|value| value.trim().parse::<T>().ok())
}
