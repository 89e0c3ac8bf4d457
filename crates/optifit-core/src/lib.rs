//! Core library for the OptiFit workout planning application.
//!
//! This crate provides the business logic for managing a user's workout
//! plan and session log: durable load/save/append of the plan with
//! load-or-default semantics, write-through persistence, and recording of
//! completed sessions.
//!
//! # Persistence Model
//!
//! The plan is a single serialized record in a scoped key-value register
//! (namespace `workout_store`, key `workouts`), rewritten in full after
//! every mutation. A missing record is a normal state and hydrates to the
//! fixed seed plan; the session log lives in relational rows next to it.
//!
//! # Quick Start
//!
//! ```rust
//! use optifit_core::{params::AppendWorkout, WorkoutStoreBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Create a store instance
//! let store = WorkoutStoreBuilder::new()
//!     .with_database_path(Some("optifit.db"))
//!     .build()
//!     .await?;
//!
//! // Hydrate the plan (seed plan on first run)
//! let plan = store.load().await?;
//! for workout in &plan {
//!     println!("{}: {}", workout.day, workout.name);
//! }
//!
//! // Append a workout; the updated plan is persisted before returning
//! let plan = store
//!     .append(&AppendWorkout {
//!         day: "Day 4".to_string(),
//!         name: "Leg Day".to_string(),
//!         duration: Some("30 min".to_string()),
//!     })
//!     .await?;
//! println!("{} workouts planned", plan.len());
//! # Ok(())
//! # }
//! ```

pub mod db;
pub mod display;
pub mod error;
pub mod models;
pub mod params;
pub mod store;

// Re-export commonly used types
pub use db::Database;
pub use display::{
    AppendResult, ElapsedTime, LocalDateTime, OperationStatus, PlanEntries, RecordResult, Sessions,
};
pub use error::{Result, StoreError};
pub use models::{default_plan, derive_workout_id, with_defaults, Workout, WorkoutSession};
pub use params::{AppendWorkout, RecordSession};
pub use store::{WorkoutStore, WorkoutStoreBuilder};
