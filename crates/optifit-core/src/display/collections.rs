//! Collection wrapper types for displaying groups of domain objects.
//!
//! This module provides wrapper types that format collections of domain
//! objects with consistent structure and empty collection handling.

use std::{fmt, ops::Index};

use crate::models::{Workout, WorkoutSession};

/// Newtype wrapper for displaying the workout plan as a list.
///
/// Formats each entry in insertion order (insertion order is display
/// order) and handles the empty case gracefully.
pub struct PlanEntries(pub Vec<Workout>);

impl PlanEntries {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of entries in the plan.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get a reference to the entry at the given index.
    pub fn get(&self, index: usize) -> Option<&Workout> {
        self.0.get(index)
    }

    /// Get an iterator over the entries.
    pub fn iter(&self) -> std::slice::Iter<'_, Workout> {
        self.0.iter()
    }
}

impl Index<usize> for PlanEntries {
    type Output = Workout;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IntoIterator for PlanEntries {
    type Item = Workout;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a PlanEntries {
    type Item = &'a Workout;
    type IntoIter = std::slice::Iter<'a, Workout>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for PlanEntries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No workouts planned.")
        } else {
            for workout in &self.0 {
                write!(f, "{}", workout)?;
            }
            Ok(())
        }
    }
}

/// Newtype wrapper for displaying collections of recorded sessions.
pub struct Sessions(pub Vec<WorkoutSession>);

impl Sessions {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of sessions in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get a reference to the session at the given index.
    pub fn get(&self, index: usize) -> Option<&WorkoutSession> {
        self.0.get(index)
    }

    /// Get an iterator over the sessions.
    pub fn iter(&self) -> std::slice::Iter<'_, WorkoutSession> {
        self.0.iter()
    }
}

impl Index<usize> for Sessions {
    type Output = WorkoutSession;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IntoIterator for Sessions {
    type Item = WorkoutSession;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Sessions {
    type Item = &'a WorkoutSession;
    type IntoIter = std::slice::Iter<'a, WorkoutSession>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Sessions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No sessions recorded.")
        } else {
            for session in &self.0 {
                write!(f, "{}", session)?;
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;

    use super::*;
    use crate::models::default_plan;

    fn create_test_session() -> WorkoutSession {
        WorkoutSession {
            id: 1,
            workout_name: "Full Body".to_string(),
            duration_seconds: 1800,
            rating: 3,
            feedback: String::new(),
            recorded_at: Timestamp::from_second(1640995200).unwrap(),
        }
    }

    #[test]
    fn test_plan_entries_display() {
        let entries = PlanEntries(default_plan());
        let output = format!("{}", entries);
        assert!(output.contains("Full Body"));
        assert!(output.contains("Cardio & Core"));
        assert!(output.contains("Upper Body"));

        let empty = PlanEntries(vec![]);
        assert_eq!(format!("{}", empty), "No workouts planned.\n");
    }

    #[test]
    fn test_plan_entries_preserve_order() {
        let entries = PlanEntries(default_plan());
        let output = format!("{}", entries);
        let full_body = output.find("Full Body").unwrap();
        let cardio = output.find("Cardio & Core").unwrap();
        let upper = output.find("Upper Body").unwrap();
        assert!(full_body < cardio && cardio < upper);
    }

    #[test]
    fn test_sessions_display_empty() {
        let sessions = Sessions(vec![]);
        assert_eq!(format!("{}", sessions), "No sessions recorded.\n");
    }

    #[test]
    fn test_sessions_display_multiple() {
        let session1 = create_test_session();
        let mut session2 = create_test_session();
        session2.id = 2;
        session2.workout_name = "Cardio & Core".to_string();

        let sessions = Sessions(vec![session1, session2]);
        let output = format!("{}", sessions);
        assert!(output.contains("Full Body"));
        assert!(output.contains("Cardio & Core"));
        assert!(output.contains("ID: 1"));
        assert!(output.contains("ID: 2"));
    }
}
