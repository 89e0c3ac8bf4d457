//! Database operations and SQLite management for the workout store.
//!
//! This module provides the low-level persistence for OptiFit. It handles
//! the SQLite connection and schema, the string-keyed key-value register
//! that backs the workout plan, and the relational queries for the session
//! log.

use std::path::Path;

use rusqlite::Connection;

use crate::error::{DatabaseResultExt, Result};

pub mod kv;
pub mod migrations;
pub mod session_queries;

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Creates a new database connection and initializes the schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }
}
