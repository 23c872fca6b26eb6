//! SQLite storage backend
//!
//! One `kv_store` table holding JSON values, durable across restarts.
//! Schema versions are tracked in `schema_migrations` and applied in order.

use std::path::Path;

use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension};
use tracing::{info, instrument};

use super::StorageBackend;
use crate::error::Result;

/// A database migration
struct Migration {
    /// Version number (must be sequential starting from 1)
    version: u32,
    /// Description of what this migration does
    description: &'static str,
    /// SQL to run for this migration
    sql: &'static str,
}

/// All migrations in order
const MIGRATIONS: &[Migration] = &[Migration {
    version: 1,
    description: "Initial key-value schema",
    sql: r#"
        CREATE TABLE IF NOT EXISTS kv_store (
            key TEXT PRIMARY KEY,
            value TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );
    "#,
}];

/// Storage backed by a SQLite database file
pub struct SqliteBackend {
    conn: Connection,
}

impl SqliteBackend {
    /// Open or create the database at the given path
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let conn = Connection::open(path)?;
        let backend = Self { conn };
        backend.run_migrations()?;
        Ok(backend)
    }

    /// Open an in-memory database (for testing)
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let backend = Self { conn };
        backend.run_migrations()?;
        Ok(backend)
    }

    /// Get current schema version
    pub fn schema_version(&self) -> u32 {
        self.conn
            .query_row("SELECT MAX(version) FROM schema_migrations", [], |row| {
                row.get(0)
            })
            .unwrap_or(0)
    }

    fn run_migrations(&self) -> Result<()> {
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS schema_migrations (
                version INTEGER PRIMARY KEY,
                description TEXT NOT NULL,
                applied_at TEXT NOT NULL
            )",
            [],
        )?;

        let current: u32 = self.conn.query_row(
            "SELECT COALESCE(MAX(version), 0) FROM schema_migrations",
            [],
            |row| row.get(0),
        )?;

        for migration in MIGRATIONS.iter().filter(|m| m.version > current) {
            info!(
                version = migration.version,
                description = migration.description,
                "applying migration"
            );
            self.conn.execute_batch(migration.sql)?;
            self.conn.execute(
                "INSERT INTO schema_migrations (version, description, applied_at) VALUES (?1, ?2, ?3)",
                params![
                    migration.version,
                    migration.description,
                    Utc::now().to_rfc3339()
                ],
            )?;
        }

        Ok(())
    }
}

impl StorageBackend for SqliteBackend {
    fn load(&self, key: &str) -> Result<Option<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT value FROM kv_store WHERE key = ?1")?;
        let value = stmt.query_row(params![key], |row| row.get(0)).optional()?;
        Ok(value)
    }

    fn store(&self, key: &str, value: &str) -> Result<()> {
        self.conn.execute(
            "INSERT OR REPLACE INTO kv_store (key, value, updated_at) VALUES (?1, ?2, ?3)",
            params![key, value, Utc::now().to_rfc3339()],
        )?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.conn
            .execute("DELETE FROM kv_store WHERE key = ?1", params![key])?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_missing_key() {
        let backend = SqliteBackend::open_in_memory().unwrap();
        assert_eq!(backend.load("nope").unwrap(), None);
    }

    #[test]
    fn test_store_and_load() {
        let backend = SqliteBackend::open_in_memory().unwrap();
        backend.store("k", "[1,2,3]").unwrap();
        assert_eq!(backend.load("k").unwrap().as_deref(), Some("[1,2,3]"));
    }

    #[test]
    fn test_store_replaces_existing() {
        let backend = SqliteBackend::open_in_memory().unwrap();
        backend.store("k", "old").unwrap();
        backend.store("k", "new").unwrap();
        assert_eq!(backend.load("k").unwrap().as_deref(), Some("new"));
    }

    #[test]
    fn test_remove_is_idempotent() {
        let backend = SqliteBackend::open_in_memory().unwrap();
        backend.store("k", "v").unwrap();
        backend.remove("k").unwrap();
        backend.remove("k").unwrap();
        assert_eq!(backend.load("k").unwrap(), None);
    }

    #[test]
    fn test_migrations_applied_once() {
        let backend = SqliteBackend::open_in_memory().unwrap();
        assert_eq!(backend.schema_version(), 1);
    }

    #[test]
    fn test_values_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.db");

        {
            let backend = SqliteBackend::open(&path).unwrap();
            backend.store("k", "persisted").unwrap();
        }

        let backend = SqliteBackend::open(&path).unwrap();
        assert_eq!(backend.load("k").unwrap().as_deref(), Some("persisted"));
        assert_eq!(backend.schema_version(), 1);
    }
}
