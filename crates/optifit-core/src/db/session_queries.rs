//! Session log queries.

use jiff::Timestamp;
use rusqlite::{params, types::Type};

use crate::{
    error::{DatabaseResultExt, Result, StoreError},
    models::WorkoutSession,
};

const INSERT_SESSION_SQL: &str = "INSERT INTO sessions (workout_name, duration_seconds, rating, feedback, recorded_at) VALUES (?1, ?2, ?3, ?4, ?5)";
const SELECT_SESSIONS_SQL: &str = "SELECT id, workout_name, duration_seconds, rating, feedback, recorded_at FROM sessions ORDER BY recorded_at DESC, id DESC";

impl super::Database {
    /// Inserts a completed session and returns it with its assigned id.
    pub fn insert_session(
        &mut self,
        workout_name: &str,
        duration_seconds: u64,
        rating: u8,
        feedback: &str,
    ) -> Result<WorkoutSession> {
        let now = Timestamp::now();
        let now_str = now.to_string();

        self.connection
            .execute(
                INSERT_SESSION_SQL,
                params![
                    workout_name,
                    duration_seconds as i64,
                    i64::from(rating),
                    feedback,
                    &now_str
                ],
            )
            .map_err(|e| StoreError::database_error("Failed to insert session", e))?;

        let id = self.connection.last_insert_rowid() as u64;

        Ok(WorkoutSession {
            id,
            workout_name: workout_name.into(),
            duration_seconds,
            rating,
            feedback: feedback.into(),
            recorded_at: now,
        })
    }

    /// Lists all recorded sessions, newest first.
    pub fn list_sessions(&self) -> Result<Vec<WorkoutSession>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_SESSIONS_SQL)
            .map_err(|e| StoreError::database_error("Failed to prepare query", e))?;

        let sessions = stmt
            .query_map([], |row| {
                Ok(WorkoutSession {
                    id: row.get::<_, i64>(0)? as u64,
                    workout_name: row.get(1)?,
                    duration_seconds: row.get::<_, i64>(2)? as u64,
                    rating: row.get::<_, i64>(3)? as u8,
                    feedback: row.get(4)?,
                    recorded_at: row.get::<_, String>(5)?.parse::<Timestamp>().map_err(|e| {
                        rusqlite::Error::FromSqlConversionFailure(5, Type::Text, Box::new(e))
                    })?,
                })
            })
            .map_err(|e| StoreError::database_error("Failed to query sessions", e))?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch sessions")?;

        Ok(sessions)
    }
}
