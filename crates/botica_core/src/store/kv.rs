//! Key-value record adapter.
//!
//! # Responsibility
//! - Wrap get/put/remove of named text records on a migrated connection.
//! - Keep SQL details inside the store boundary.
//!
//! # Invariants
//! - A `put` overwrites any prior value for the key in one statement.
//! - Absent keys read back as `None`, never as an error.

use super::StoreResult;
use rusqlite::{params, Connection, OptionalExtension};

/// Record name for the serialized supervisor task list.
pub const TASKS_KEY: &str = "supervisor_tasks";
/// Record name for the daily-reset marker date.
pub const RESET_MARKER_KEY: &str = "last_reset_date";

/// Thin adapter over a migrated store connection.
///
/// Copyable by construction so several owners (task repository, reset policy)
/// can address the same connection without coordination.
#[derive(Clone, Copy)]
pub struct KvStore<'conn> {
    conn: &'conn Connection,
}

impl<'conn> KvStore<'conn> {
    /// Wraps a connection previously opened through [`super::open_store`].
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    /// Returns the value stored under `key`, or `None` when absent.
    pub fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let value = self
            .conn
            .query_row("SELECT value FROM kv WHERE key = ?1;", [key], |row| {
                row.get::<_, String>(0)
            })
            .optional()?;
        Ok(value)
    }

    /// Stores `value` under `key`, overwriting any prior value.
    pub fn put(&self, key: &str, value: &str) -> StoreResult<()> {
        self.conn.execute(
            "INSERT INTO kv (key, value, updated_at)
             VALUES (?1, ?2, strftime('%s', 'now') * 1000)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at;",
            params![key, value],
        )?;
        Ok(())
    }

    /// Removes `key` if present. Removing an absent key is a no-op.
    pub fn remove(&self, key: &str) -> StoreResult<()> {
        self.conn
            .execute("DELETE FROM kv WHERE key = ?1;", [key])?;
        Ok(())
    }
}
