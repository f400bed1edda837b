//! Database Module
//!
//! SQLite-backed key-value store holding the serialized login list.

pub mod connection;
#[cfg(test)]
pub mod memory;
pub mod queries;
pub mod schema;

use thiserror::Error;

/// Database errors
#[derive(Debug, Error)]
pub enum DbError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type DbResult<T> = Result<T, DbError>;

/// Read/write access to string values stored under string keys.
///
/// The login list only ever reads through this; registration is the
/// single writer.
pub trait KeyValueStore {
    /// Raw value stored under `key`, or `None` when the key is unset.
    fn get_item(&self, key: &str) -> DbResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    fn set_item(&self, key: &str, value: &str) -> DbResult<()>;
}

// Re-exports
pub use connection::{Database, DatabaseConfig};
#[cfg(test)]
pub use memory::MemoryStore;
