//! Planned-workout entry model and id derivation.

use serde::{Deserialize, Serialize};

/// A single planned workout within the user's plan.
///
/// `duration` and `status` are both free-form display labels. By convention
/// an entry carries one or the other (a scheduled workout has a duration, a
/// finished one has a status), but nothing enforces mutual exclusivity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Workout {
    /// Display label for the scheduled day (e.g. "Day 1"); not a calendar date
    pub day: String,

    /// Workout title
    pub name: String,

    /// Free-form duration label (e.g. "40 min")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,

    /// Free-form completion label (e.g. "Complete")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// Stable identifier, derived from the name for interactively created
    /// entries
    pub id: String,
}

impl Workout {
    /// Creates a new entry with an id derived from the name.
    ///
    /// This is the path used for interactively added workouts: `status` is
    /// never set here, and the id follows [`derive_workout_id`].
    pub fn new(day: impl Into<String>, name: impl Into<String>, duration: Option<String>) -> Self {
        let name = name.into();
        let id = derive_workout_id(&name);
        Self {
            day: day.into(),
            name,
            duration,
            status: None,
            id,
        }
    }
}

/// Derives a workout id from its name: lowercased, each space replaced by an
/// underscore.
///
/// The substitution is literal, not collapsing: `"Leg  Day"` (double space)
/// becomes `"leg__day"`. The derivation is NOT unique across entries; names
/// differing only by case or punctuation collide. The store accepts such
/// duplicates rather than rejecting or deduplicating them.
pub fn derive_workout_id(name: &str) -> String {
    name.to_lowercase().replace(' ', "_")
}
