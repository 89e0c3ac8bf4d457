//! Seed plan and default-fallback policy.
//!
//! Loading is split into two layers: the store reports exactly what was
//! persisted, and [`with_defaults`] is the pure policy that fills the gap
//! when nothing usable was found. Keeping the policy out of the I/O path
//! makes both halves independently testable.

use super::Workout;

/// Returns the fixed three-entry plan a fresh profile starts with.
pub fn default_plan() -> Vec<Workout> {
    vec![
        Workout {
            day: "Day 1".to_string(),
            name: "Full Body".to_string(),
            duration: None,
            status: Some("Complete".to_string()),
            id: "full_body".to_string(),
        },
        Workout {
            day: "Day 2".to_string(),
            name: "Cardio & Core".to_string(),
            duration: Some("40 min".to_string()),
            status: None,
            id: "cardio_core".to_string(),
        },
        Workout {
            day: "Day 3".to_string(),
            name: "Upper Body".to_string(),
            duration: Some("45 min".to_string()),
            status: None,
            id: "upper_body".to_string(),
        },
    ]
}

/// Applies the default-plan policy to a raw load result.
///
/// An absent record and an empty persisted list are both treated as "no
/// plan yet" and mapped to [`default_plan`]. A non-empty list passes
/// through untouched.
pub fn with_defaults(raw: Option<Vec<Workout>>) -> Vec<Workout> {
    match raw {
        Some(workouts) if !workouts.is_empty() => workouts,
        _ => default_plan(),
    }
}
