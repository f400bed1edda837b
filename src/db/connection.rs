//! Database Connection Management
//!
//! Opens the SQLite file backing the key-value store.

use std::path::{Path, PathBuf};
use std::time::Duration;

use rusqlite::{Connection, OpenFlags};

use super::{queries, schema::init_schema, DbResult, KeyValueStore};

const MEMORY_PATH: &str = ":memory:";

/// Database configuration
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Path to the database file
    pub path: PathBuf,
    /// Enable WAL mode
    pub wal_mode: bool,
    /// How long a locked database is retried before failing
    pub busy_timeout: Duration,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_db_path(),
            wal_mode: true,
            busy_timeout: Duration::from_secs(5),
        }
    }
}

impl DatabaseConfig {
    /// Create config for in-memory database (testing)
    #[cfg(test)]
    pub fn in_memory() -> Self {
        Self {
            path: PathBuf::from(MEMORY_PATH),
            wal_mode: false,
            ..Default::default()
        }
    }

    /// Create config for a specific path
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            ..Default::default()
        }
    }

    fn is_memory(&self) -> bool {
        self.path.to_str() == Some(MEMORY_PATH)
    }
}

/// Default database path (<data dir>/savepass/savepass.db)
pub fn default_db_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("savepass")
        .join("savepass.db")
}

/// Database wrapper with connection management
pub struct Database {
    conn: Connection,
    config: DatabaseConfig,
}

impl Database {
    /// Open or create a database with the given config
    pub fn open(config: DatabaseConfig) -> DbResult<Self> {
        if !config.is_memory() {
            if let Some(parent) = config.path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)?;
            }
        }

        let conn = if config.is_memory() {
            Connection::open_in_memory()?
        } else {
            let flags = OpenFlags::SQLITE_OPEN_READ_WRITE
                | OpenFlags::SQLITE_OPEN_CREATE
                | OpenFlags::SQLITE_OPEN_NO_MUTEX;
            Connection::open_with_flags(&config.path, flags)?
        };

        if config.wal_mode && !config.is_memory() {
            conn.execute_batch("PRAGMA journal_mode = WAL;")?;
        }
        conn.busy_timeout(config.busy_timeout)?;

        init_schema(&conn)?;
        tracing::debug!(path = %config.path.display(), "database opened");

        Ok(Self { conn, config })
    }

    /// Open in-memory database for testing
    #[cfg(test)]
    pub fn open_in_memory() -> DbResult<Self> {
        Self::open(DatabaseConfig::in_memory())
    }

    /// Get reference to connection
    #[cfg(test)]
    pub fn conn(&self) -> &Connection {
        &self.conn
    }

    /// Get database path
    pub fn path(&self) -> &Path {
        &self.config.path
    }
}

impl KeyValueStore for Database {
    fn get_item(&self, key: &str) -> DbResult<Option<String>> {
        queries::get_value(&self.conn, key)
    }

    fn set_item(&self, key: &str, value: &str) -> DbResult<()> {
        queries::set_value(&self.conn, key, value)
    }
}
