//! Completed-session record model.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// A finished workout session with the user's feedback.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WorkoutSession {
    /// Unique identifier for the session
    pub id: u64,

    /// Name of the workout that was performed
    pub workout_name: String,

    /// Elapsed time on the workout timer, in seconds
    pub duration_seconds: u64,

    /// Difficulty rating from 1 (easy) to 5 (hard)
    pub rating: u8,

    /// Free-form comments; may be empty
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub feedback: String,

    /// Timestamp when the session was recorded (UTC)
    pub recorded_at: Timestamp,
}
