//! Database Queries
//!
//! Parameterized key-value queries.

use rusqlite::{params, Connection, OptionalExtension};

use super::DbResult;

/// Get the value stored under `key`
pub fn get_value(conn: &Connection, key: &str) -> DbResult<Option<String>> {
    let value = conn
        .query_row("SELECT value FROM kv WHERE key = ?1", [key], |row| row.get(0))
        .optional()?;

    Ok(value)
}

/// Insert or replace the value stored under `key`
pub fn set_value(conn: &Connection, key: &str, value: &str) -> DbResult<()> {
    conn.execute(
        r#"
        INSERT INTO kv (key, value, updated_at) VALUES (?1, ?2, datetime('now'))
        ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at
        "#,
        params![key, value],
    )?;

    Ok(())
}
