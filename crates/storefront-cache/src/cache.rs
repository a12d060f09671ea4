use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;
use std::sync::{Mutex, MutexGuard};
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum CacheError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Cache connection lock was poisoned")]
    Poisoned,
}

pub type Result<T> = std::result::Result<T, CacheError>;

/// Key-value store on top of a single SQLite table
///
/// Values are opaque strings; callers decide the encoding. The connection
/// sits behind a mutex so one manager can be shared across tasks.
pub struct CacheManager {
    conn: Mutex<Connection>,
}

impl CacheManager {
    pub fn new<P: AsRef<Path>>(db_path: P) -> Result<Self> {
        let db_path = db_path.as_ref();

        if let Some(parent) = db_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open(db_path)?;
        debug!("Opened cache database at {}", db_path.display());

        // Initialize schema on first run
        Self::init_schema(&conn)?;

        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Database that disappears with the manager
    pub fn in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Self::init_schema(&conn)?;

        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn init_schema(conn: &Connection) -> Result<()> {
        conn.execute(
            "CREATE TABLE IF NOT EXISTS kv_store (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL,
                updated_at INTEGER NOT NULL
            )",
            [],
        )?;

        Ok(())
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>> {
        self.conn.lock().map_err(|_| CacheError::Poisoned)
    }

    /// Read the value stored under `key`, if any
    pub fn get_value(&self, key: &str) -> Result<Option<String>> {
        let conn = self.lock()?;
        let value = conn
            .query_row(
                "SELECT value FROM kv_store WHERE key = ?1",
                params![key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;

        Ok(value)
    }

    /// Store `value` under `key`, replacing whatever was there
    pub fn set_value(&self, key: &str, value: &str) -> Result<()> {
        let conn = self.lock()?;
        conn.execute(
            "INSERT INTO kv_store (key, value, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
            params![key, value, Utc::now().timestamp()],
        )?;

        Ok(())
    }

    /// Remove `key`; returns whether anything was deleted
    pub fn delete_value(&self, key: &str) -> Result<bool> {
        let conn = self.lock()?;
        let deleted = conn.execute("DELETE FROM kv_store WHERE key = ?1", params![key])?;
        Ok(deleted > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_key_returns_none() {
        let cache = CacheManager::in_memory().unwrap();
        assert_eq!(cache.get_value("nope").unwrap(), None);
    }

    #[test]
    fn test_set_then_overwrite() {
        let cache = CacheManager::in_memory().unwrap();

        cache.set_value("favorites", "[1,2]").unwrap();
        assert_eq!(cache.get_value("favorites").unwrap().as_deref(), Some("[1,2]"));

        cache.set_value("favorites", "[3]").unwrap();
        assert_eq!(cache.get_value("favorites").unwrap().as_deref(), Some("[3]"));
    }

    #[test]
    fn test_delete_value() {
        let cache = CacheManager::in_memory().unwrap();

        cache.set_value("k", "v").unwrap();
        assert!(cache.delete_value("k").unwrap());
        assert!(!cache.delete_value("k").unwrap());
        assert_eq!(cache.get_value("k").unwrap(), None);
    }

    #[test]
    fn test_values_survive_reopen() {
        let dir = TempDir::new().unwrap();
        let db_path = dir.path().join("nested").join("storefront.db");

        {
            let cache = CacheManager::new(&db_path).unwrap();
            cache.set_value("favorites", "[7]").unwrap();
        }

        let reopened = CacheManager::new(&db_path).unwrap();
        assert_eq!(reopened.get_value("favorites").unwrap().as_deref(), Some("[7]"));
    }
}
