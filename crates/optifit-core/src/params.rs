//! Parameter structures for store operations
//!
//! This module contains shared parameter structures that can be used across
//! different interfaces (CLI, MCP, etc.) without framework-specific derives
//! or dependencies.
//!
//! ## Architecture: Parameter Wrapper Pattern
//!
//! Interface layers define their own wrapper structs (clap arg structs, MCP
//! request structs) and convert into these core types via `From`/`into()`:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │   MCP Params    │    │  Core Params    │
//! │  (clap derives) │───▶│ (serde derives) │───▶│ (minimal deps)  │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! Core parameter types stay free of UI-framework derives, each interface
//! adds its own, and conversion is checked at compile time. JSON schema
//! generation is available behind the `schema` feature where an interface
//! needs it.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{Result, StoreError};

/// Parameters for appending a workout to the plan.
///
/// The entry's id is derived from `name`; a completion status is never set
/// through this path.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct AppendWorkout {
    /// Display label for the scheduled day (required)
    pub day: String,
    /// Workout title (required)
    pub name: String,
    /// Optional free-form duration label
    pub duration: Option<String>,
}

impl AppendWorkout {
    /// Validate append parameters.
    ///
    /// # Errors
    ///
    /// * `StoreError::InvalidInput` - When `day` or `name` is blank
    pub fn validate(&self) -> Result<()> {
        if self.day.trim().is_empty() {
            return Err(StoreError::invalid_input("day", "Day must not be empty"));
        }
        if self.name.trim().is_empty() {
            return Err(StoreError::invalid_input(
                "name",
                "Workout name must not be empty",
            ));
        }
        Ok(())
    }
}

/// Parameters for recording a completed workout session.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct RecordSession {
    /// Name of the workout that was performed (required)
    pub workout_name: String,
    /// Elapsed time on the workout timer, in seconds
    pub duration_seconds: u64,
    /// Difficulty rating from 1 (easy) to 5 (hard)
    pub rating: u8,
    /// Free-form comments (optional)
    #[serde(default)]
    pub feedback: String,
}

impl RecordSession {
    /// Validate session parameters.
    ///
    /// # Errors
    ///
    /// * `StoreError::InvalidInput` - When `workout_name` is blank
    /// * `StoreError::InvalidInput` - When `rating` is outside 1..=5
    pub fn validate(&self) -> Result<()> {
        if self.workout_name.trim().is_empty() {
            return Err(StoreError::invalid_input(
                "workout_name",
                "Workout name must not be empty",
            ));
        }
        if !(1..=5).contains(&self.rating) {
            return Err(StoreError::invalid_input(
                "rating",
                format!("Invalid rating: {}. Must be between 1 and 5", self.rating),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_workout_valid() {
        let params = AppendWorkout {
            day: "Day 4".to_string(),
            name: "Leg Day".to_string(),
            duration: Some("30 min".to_string()),
        };
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_append_workout_blank_day() {
        let params = AppendWorkout {
            day: "   ".to_string(),
            name: "Leg Day".to_string(),
            duration: None,
        };
        match params.validate().unwrap_err() {
            StoreError::InvalidInput { field, .. } => assert_eq!(field, "day"),
            other => panic!("Expected InvalidInput error, got {other:?}"),
        }
    }

    #[test]
    fn test_append_workout_blank_name() {
        let params = AppendWorkout {
            day: "Day 4".to_string(),
            name: String::new(),
            duration: None,
        };
        match params.validate().unwrap_err() {
            StoreError::InvalidInput { field, .. } => assert_eq!(field, "name"),
            other => panic!("Expected InvalidInput error, got {other:?}"),
        }
    }

    #[test]
    fn test_record_session_valid() {
        let params = RecordSession {
            workout_name: "Full Body".to_string(),
            duration_seconds: 1800,
            rating: 3,
            feedback: String::new(),
        };
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_record_session_rating_bounds() {
        for rating in [0u8, 6] {
            let params = RecordSession {
                workout_name: "Full Body".to_string(),
                duration_seconds: 60,
                rating,
                feedback: String::new(),
            };
            match params.validate().unwrap_err() {
                StoreError::InvalidInput { field, reason } => {
                    assert_eq!(field, "rating");
                    assert!(reason.contains("between 1 and 5"));
                }
                other => panic!("Expected InvalidInput error, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_record_session_blank_name() {
        let params = RecordSession {
            workout_name: " ".to_string(),
            duration_seconds: 60,
            rating: 2,
            feedback: String::new(),
        };
        assert!(params.validate().is_err());
    }
}
