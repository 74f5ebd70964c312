//! Key/value persistence used for the record collection and the admin marker.

use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use chrono::Utc;
use rusqlite::{OptionalExtension, params};

/// Namespace key holding the JSON-serialized record collection.
pub const RECORDS_KEY: &str = "pluvio_records";

/// Session-scoped key holding the admin marker.
pub const ADMIN_KEY: &str = "pluvio_admin";

/// Minimal string key/value store.
pub trait Storage {
    fn get(&self, key: &str) -> AppResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> AppResult<()>;
    /// Removing an absent key is not an error.
    fn remove(&self, key: &str) -> AppResult<()>;
}

impl<S: Storage + ?Sized> Storage for &S {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> AppResult<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> AppResult<()> {
        (**self).remove(key)
    }
}

pub struct SqliteStorage {
    pool: DbPool,
}

impl SqliteStorage {
    pub fn open(path: &str) -> AppResult<Self> {
        Self::with_pool(DbPool::new(path)?)
    }

    pub fn in_memory() -> AppResult<Self> {
        Self::with_pool(DbPool::in_memory()?)
    }

    fn with_pool(pool: DbPool) -> AppResult<Self> {
        init_db(&pool.conn)?;
        Ok(Self { pool })
    }
}

impl Storage for SqliteStorage {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        let value = self
            .pool
            .conn
            .query_row(
                "SELECT value FROM kv_store WHERE key = ?1",
                [key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    fn set(&self, key: &str, value: &str) -> AppResult<()> {
        self.pool.conn.execute(
            "INSERT INTO kv_store (key, value, updated_at)
             VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
            params![key, value, Utc::now().to_rfc3339()],
        )?;
        Ok(())
    }

    fn remove(&self, key: &str) -> AppResult<()> {
        self.pool
            .conn
            .execute("DELETE FROM kv_store WHERE key = ?1", [key])?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_get_remove() {
        let s = SqliteStorage::in_memory().unwrap();
        assert_eq!(s.get("k").unwrap(), None);

        s.set("k", "one").unwrap();
        s.set("k", "two").unwrap();
        assert_eq!(s.get("k").unwrap().as_deref(), Some("two"));

        s.remove("k").unwrap();
        s.remove("k").unwrap();
        assert_eq!(s.get("k").unwrap(), None);
    }

    #[test]
    fn file_storage_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("kv.sqlite");
        let path = path.to_string_lossy().to_string();

        SqliteStorage::open(&path).unwrap().set(RECORDS_KEY, "[]").unwrap();
        let reopened = SqliteStorage::open(&path).unwrap();
        assert_eq!(reopened.get(RECORDS_KEY).unwrap().as_deref(), Some("[]"));
    }
}
