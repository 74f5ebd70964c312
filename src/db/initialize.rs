use crate::errors::AppResult;
use rusqlite::Connection;

/// Initialize the key/value schema.
/// Both the record database and the session file share this layout.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS kv_store (
            key         TEXT PRIMARY KEY,
            value       TEXT NOT NULL,
            updated_at  TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Check if the `kv_store` table exists.
pub fn is_initialized(conn: &Connection) -> AppResult<bool> {
    let count: i64 = conn.query_row(
        "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name='kv_store'",
        [],
        |row| row.get(0),
    )?;
    Ok(count > 0)
}
