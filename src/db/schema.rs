//! Database Schema
//!
//! A single key-value table.

use rusqlite::Connection;

use super::DbResult;

/// Initialize the database schema
pub fn init_schema(conn: &Connection) -> DbResult<()> {
    conn.execute_batch(
        r#"
        -- Opaque values keyed by namespace, e.g. 'savepass:logins'
        CREATE TABLE IF NOT EXISTS kv (
            key TEXT PRIMARY KEY,
            value TEXT NOT NULL,
            updated_at TEXT NOT NULL DEFAULT (datetime('now'))
        );
        "#,
    )?;

    Ok(())
}
