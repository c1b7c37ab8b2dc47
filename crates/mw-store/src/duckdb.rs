//! DuckDB version store

use duckdb::Connection;
use mw_core::{StoreError, StoreResult, VersionStore};
use std::path::Path;

/// Version store backed by a DuckDB database.
///
/// The `schema_version` table holds the single current row; an empty table
/// reads as version 0. Writes replace the row wholesale because the
/// version moves down as well as up. No transactional semantics are
/// assumed, matching the store contract.
pub struct DuckDbStore {
    conn: Connection,
}

impl DuckDbStore {
    /// Open (or create) the database at `path` and ensure the version
    /// table exists.
    pub fn open(path: &Path) -> StoreResult<Self> {
        let conn = Connection::open(path)
            .map_err(|e| StoreError::Connection(format!("{e}: {}", path.display())))?;
        Self::from_connection(conn)
    }

    /// Open an in-memory database.
    ///
    /// Useful for unit tests that don't need persistence.
    pub fn open_memory() -> StoreResult<Self> {
        let conn =
            Connection::open_in_memory().map_err(|e| StoreError::Connection(e.to_string()))?;
        Self::from_connection(conn)
    }

    /// Wrap an existing connection, ensuring the version table exists.
    pub fn from_connection(conn: Connection) -> StoreResult<Self> {
        ensure_version_table(&conn)?;
        Ok(Self { conn })
    }

    /// Borrow the underlying DuckDB connection.
    pub fn conn(&self) -> &Connection {
        &self.conn
    }
}

/// Ensure the `schema_version` table exists.
fn ensure_version_table(conn: &Connection) -> StoreResult<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS schema_version (
             version     BIGINT NOT NULL,
             recorded_at TIMESTAMP NOT NULL DEFAULT now()
         );",
    )
    .map_err(|e| StoreError::Connection(format!("failed to create schema_version table: {e}")))?;
    Ok(())
}

impl VersionStore for DuckDbStore {
    fn version(&self) -> StoreResult<i64> {
        let version: i64 = self
            .conn
            .query_row("SELECT COALESCE(MAX(version), 0) FROM schema_version", [], |row| {
                row.get(0)
            })
            .map_err(|e| StoreError::Read(e.to_string()))?;
        Ok(version)
    }

    fn set_version(&mut self, version: i64) -> StoreResult<()> {
        self.conn
            .execute("DELETE FROM schema_version", [])
            .map_err(|e| StoreError::Write(e.to_string()))?;
        self.conn
            .execute(
                "INSERT INTO schema_version (version) VALUES (?)",
                duckdb::params![version],
            )
            .map_err(|e| StoreError::Write(e.to_string()))?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "duckdb_test.rs"]
mod tests;
