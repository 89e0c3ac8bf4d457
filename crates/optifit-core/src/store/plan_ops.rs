//! Plan operations for the WorkoutStore.

use log::warn;
use tokio::task;

use super::{WorkoutStore, PLAN_KEY, PLAN_NAMESPACE};
use crate::{
    db::Database,
    error::{Result, StoreError},
    models::{with_defaults, Workout},
    params::AppendWorkout,
};

impl WorkoutStore {
    /// Returns exactly what is persisted: `None` when no plan record
    /// exists, the deserialized list otherwise.
    ///
    /// A malformed stored payload is reported as
    /// `StoreError::Serialization`; the fallback policy lives in [`load`]
    /// so this method stays a truthful view of storage.
    ///
    /// [`load`]: WorkoutStore::load
    pub async fn load_raw(&self) -> Result<Option<Vec<Workout>>> {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            match db.kv_get(PLAN_NAMESPACE, PLAN_KEY)? {
                Some(json) => {
                    let workouts: Vec<Workout> = serde_json::from_str(&json)?;
                    Ok(Some(workouts))
                }
                None => Ok(None),
            }
        })
        .await
        .map_err(|e| StoreError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Hydrates the plan for a planning session.
    ///
    /// A missing record or an empty persisted list yields the seed plan,
    /// which is immediately persisted so the defaults survive the first
    /// run. A payload that fails to deserialize also yields the seed plan,
    /// but without touching storage: the unreadable record is left in place
    /// rather than overwritten.
    pub async fn load(&self) -> Result<Vec<Workout>> {
        match self.load_raw().await {
            Ok(raw) => {
                let had_entries = raw.as_ref().is_some_and(|w| !w.is_empty());
                let workouts = with_defaults(raw);
                if !had_entries {
                    self.save(&workouts).await?;
                }
                Ok(workouts)
            }
            Err(StoreError::Serialization { source }) => {
                warn!("Stored workout plan is unreadable, serving defaults: {source}");
                Ok(with_defaults(None))
            }
            Err(e) => Err(e),
        }
    }

    /// Serializes the full list and rewrites the single plan record.
    ///
    /// On success the persisted state exactly equals the input. An I/O
    /// failure propagates to the caller; no retry is attempted and the
    /// caller's in-memory list is not rolled back.
    pub async fn save(&self, workouts: &[Workout]) -> Result<()> {
        let db_path = self.db_path.clone();
        let json = serde_json::to_string(workouts)?;

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.kv_set(PLAN_NAMESPACE, PLAN_KEY, &json)
        })
        .await
        .map_err(|e| StoreError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Appends a new workout to the plan and persists the result.
    ///
    /// The entry's id is derived from its name. Returns the updated list
    /// with the new entry at the end.
    pub async fn append(&self, params: &AppendWorkout) -> Result<Vec<Workout>> {
        params.validate()?;

        let mut workouts = self.load().await?;
        workouts.push(Workout::new(
            params.day.clone(),
            params.name.clone(),
            params.duration.clone(),
        ));
        self.save(&workouts).await?;

        Ok(workouts)
    }
}
