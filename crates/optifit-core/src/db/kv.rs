//! Key-value register operations.
//!
//! The workout plan is persisted as a single serialized record in a scoped,
//! string-keyed register: last writer wins, one row per (namespace, key).
//! Each write is a single statement, so no partial-write state is ever
//! observable.

use rusqlite::{params, OptionalExtension};

use crate::error::{DatabaseResultExt, Result};

const SELECT_VALUE_SQL: &str = "SELECT value FROM kv_store WHERE namespace = ?1 AND key = ?2";
const UPSERT_VALUE_SQL: &str =
    "INSERT OR REPLACE INTO kv_store (namespace, key, value) VALUES (?1, ?2, ?3)";

impl super::Database {
    /// Reads the value stored under the given namespace and key.
    ///
    /// A missing record is a normal state and maps to `None`, never an
    /// error.
    pub fn kv_get(&self, namespace: &str, key: &str) -> Result<Option<String>> {
        self.connection
            .query_row(SELECT_VALUE_SQL, params![namespace, key], |row| row.get(0))
            .optional()
            .db_context("Failed to read key-value record")
    }

    /// Writes the value under the given namespace and key, replacing any
    /// previous value.
    pub fn kv_set(&self, namespace: &str, key: &str, value: &str) -> Result<()> {
        self.connection
            .execute(UPSERT_VALUE_SQL, params![namespace, key, value])
            .db_context("Failed to write key-value record")?;
        Ok(())
    }
}
