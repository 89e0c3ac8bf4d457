//! Session log operations for the WorkoutStore.

use tokio::task;

use super::WorkoutStore;
use crate::{
    db::Database,
    error::{Result, StoreError},
    models::WorkoutSession,
    params::RecordSession,
};

impl WorkoutStore {
    /// Records a completed workout session with the user's feedback.
    pub async fn record_session(&self, params: &RecordSession) -> Result<WorkoutSession> {
        params.validate()?;

        let db_path = self.db_path.clone();
        let workout_name = params.workout_name.clone();
        let duration_seconds = params.duration_seconds;
        let rating = params.rating;
        let feedback = params.feedback.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.insert_session(&workout_name, duration_seconds, rating, &feedback)
        })
        .await
        .map_err(|e| StoreError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Lists all recorded sessions, newest first.
    pub async fn list_sessions(&self) -> Result<Vec<WorkoutSession>> {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.list_sessions()
        })
        .await
        .map_err(|e| StoreError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }
}
