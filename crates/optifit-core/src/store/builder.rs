//! Builder for creating and configuring WorkoutStore instances.

use std::path::{Path, PathBuf};

use tokio::task;

use super::WorkoutStore;
use crate::{
    db::Database,
    error::{Result, StoreError},
};

/// Builder for creating and configuring WorkoutStore instances.
#[derive(Debug, Clone)]
pub struct WorkoutStoreBuilder {
    database_path: Option<PathBuf>,
}

impl WorkoutStoreBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            database_path: None,
        }
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/optifit/optifit.db` or
    /// `~/.local/share/optifit/optifit.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Builds the configured store instance.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::FileSystem` if the database path is invalid
    /// Returns `StoreError::Database` if database initialization fails
    pub async fn build(self) -> Result<WorkoutStore> {
        let db_path = if let Some(path) = self.database_path {
            path
        } else {
            Self::default_database_path()?
        };

        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| StoreError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let db_path_clone = db_path.clone();
        task::spawn_blocking(move || {
            let _db = Database::new(&db_path_clone)?;
            Ok::<(), StoreError>(())
        })
        .await
        .map_err(|e| StoreError::Configuration {
            message: format!("Task join error: {e}"),
        })??;

        Ok(WorkoutStore::new(db_path))
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("optifit")
            .place_data_file("optifit.db")
            .map_err(|e| StoreError::XdgDirectory(e.to_string()))
    }
}

impl Default for WorkoutStoreBuilder {
    fn default() -> Self {
        Self::new()
    }
}
