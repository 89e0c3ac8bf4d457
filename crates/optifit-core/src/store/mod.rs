//! High-level store API for the workout plan and session log.
//!
//! This module provides the main [`WorkoutStore`] interface. The store owns
//! the durable copy of the user's plan: it hydrates the list at the start
//! of a planning session (falling back to the seed plan when nothing usable
//! is persisted), and rewrites the whole record after every mutation.
//!
//! # Architecture Overview
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Presentation   │    │   WorkoutStore  │    │    Database     │
//! │  (CLI / MCP)    │───▶│ (plan_ops,      │───▶│   (via db/)     │
//! │                 │    │  session_ops)   │    │                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Submodules
//!
//! - [`builder`]: Factory for creating [`WorkoutStore`] instances
//! - [`plan_ops`]: Plan operations (load, save, append)
//! - [`session_ops`]: Session log operations (record, list)
//!
//! ## Design Principles
//!
//! 1. **Write-through**: every plan mutation is immediately followed by a
//!    full rewrite of the persisted record
//! 2. **Load-or-default**: a missing record is a normal state, mapped to
//!    the seed plan rather than an error
//! 3. **Single writer**: one live store per planning session; operations
//!    run sequentially, never concurrently
//! 4. **Async first**: blocking database work is offloaded so callers never
//!    stall an event loop
//!
//! # Usage Examples
//!
//! ```rust
//! use optifit_core::{params::AppendWorkout, WorkoutStoreBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = WorkoutStoreBuilder::new()
//!     .with_database_path(Some("optifit.db"))
//!     .build()
//!     .await?;
//!
//! // Hydrate the plan; a fresh profile gets the three-entry seed plan
//! let plan = store.load().await?;
//! assert_eq!(plan.len(), 3);
//!
//! // Append a workout; the updated list is persisted before returning
//! let plan = store
//!     .append(&AppendWorkout {
//!         day: "Day 4".to_string(),
//!         name: "Leg Day".to_string(),
//!         duration: Some("30 min".to_string()),
//!     })
//!     .await?;
//! assert_eq!(plan.last().unwrap().id, "leg_day");
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;

// Module declarations
pub mod builder;
pub mod plan_ops;
pub mod session_ops;


// Re-export the main types
pub use builder::WorkoutStoreBuilder;

/// Namespace the plan record is scoped to.
pub(crate) const PLAN_NAMESPACE: &str = "workout_store";

/// Key the serialized plan list is stored under.
pub(crate) const PLAN_KEY: &str = "workouts";

/// Main store interface for the workout plan and session log.
pub struct WorkoutStore {
    pub(crate) db_path: PathBuf,
}

impl WorkoutStore {
    /// Creates a new store with the specified database path.
    pub(crate) fn new(db_path: PathBuf) -> Self {
        Self { db_path }
    }
}
