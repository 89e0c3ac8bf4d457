//! Database schema initialization and migrations.

use crate::error::{DatabaseResultExt, Result, StoreError};

impl super::Database {
    /// Initializes the database schema using the embedded SQL file.
    pub(super) fn initialize_schema(&self) -> Result<()> {
        // Execute the schema SQL
        let schema_sql = include_str!("../../assets/schema.sql");
        self.connection
            .execute_batch(schema_sql)
            .db_context("Failed to initialize database schema")?;

        // Apply migrations for existing databases
        self.apply_migrations()?;

        Ok(())
    }

    /// Apply database migrations for existing databases
    fn apply_migrations(&self) -> Result<()> {
        // Early session logs predate the feedback column
        let has_feedback_column: bool = self
            .connection
            .query_row(
                "SELECT COUNT(*) FROM pragma_table_info('sessions') WHERE name = 'feedback'",
                [],
                |row| row.get(0),
            )
            .map(|count: i64| count > 0)
            .unwrap_or(false);

        if !has_feedback_column {
            self.connection
                .execute(
                    "ALTER TABLE sessions ADD COLUMN feedback TEXT NOT NULL DEFAULT ''",
                    [],
                )
                .map_err(|e| {
                    StoreError::database_error(
                        "Failed to add feedback column to sessions table",
                        e,
                    )
                })?;
        }

        Ok(())
    }
}
