//! Result wrapper types for displaying operation outcomes.

use std::fmt;

use super::collections::PlanEntries;
use crate::models::{Workout, WorkoutSession};

/// Wrapper type for displaying the result of appending a workout.
///
/// Shows the appended entry followed by the full updated plan, so the
/// caller sees the new list exactly as it was persisted.
pub struct AppendResult {
    pub appended: Workout,
    pub plan: PlanEntries,
}

impl AppendResult {
    /// Create a new AppendResult from the updated plan.
    ///
    /// Expects the plan the store returned from `append`, whose last entry
    /// is the one just added.
    pub fn new(plan: Vec<Workout>) -> Option<Self> {
        let appended = plan.last()?.clone();
        Some(Self {
            appended,
            plan: PlanEntries(plan),
        })
    }
}

impl fmt::Display for AppendResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Added workout '{}' (id: {})",
            self.appended.name, self.appended.id
        )?;
        writeln!(f)?;
        writeln!(f, "# Workout Plan")?;
        writeln!(f)?;
        write!(f, "{}", self.plan)
    }
}

/// Wrapper type for displaying the result of recording a session.
pub struct RecordResult {
    pub session: WorkoutSession,
}

impl RecordResult {
    /// Create a new RecordResult wrapper.
    pub fn new(session: WorkoutSession) -> Self {
        Self { session }
    }
}

impl fmt::Display for RecordResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Recorded session with ID: {}", self.session.id)?;
        writeln!(f)?;
        write!(f, "{}", self.session)
    }
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;

    use super::*;
    use crate::models::default_plan;

    #[test]
    fn test_append_result_display() {
        let mut plan = default_plan();
        plan.push(Workout::new("Day 4", "Leg Day", Some("30 min".to_string())));

        let result = AppendResult::new(plan).expect("non-empty plan");
        let output = format!("{}", result);
        assert!(output.contains("Added workout 'Leg Day' (id: leg_day)"));
        assert!(output.contains("# Workout Plan"));
        assert!(output.contains("Full Body"));
    }

    #[test]
    fn test_append_result_empty_plan() {
        assert!(AppendResult::new(Vec::new()).is_none());
    }

    #[test]
    fn test_record_result_display() {
        let session = WorkoutSession {
            id: 3,
            workout_name: "Cardio & Core".to_string(),
            duration_seconds: 2400,
            rating: 5,
            feedback: String::new(),
            recorded_at: Timestamp::from_second(1640995200).unwrap(),
        };
        let output = format!("{}", RecordResult::new(session));
        assert!(output.contains("Recorded session with ID: 3"));
        assert!(output.contains("Cardio & Core"));
    }
}
