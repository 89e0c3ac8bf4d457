//! Display implementations for domain models.
//!
//! All implementations produce markdown for rich terminal display. A plan
//! entry renders as one list card line; a session renders with its elapsed
//! time and rating.

use std::fmt;

use super::datetime::{ElapsedTime, LocalDateTime};
use crate::models::{Workout, WorkoutSession};

impl fmt::Display for Workout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "- **{}**: {}", self.day, self.name)?;
        // A finished entry shows its status; a scheduled one its duration.
        if let Some(status) = &self.status {
            write!(f, " ({status})")?;
        } else if let Some(duration) = &self.duration {
            write!(f, " ({duration})")?;
        }
        writeln!(f, " `{}`", self.id)
    }
}

impl fmt::Display for WorkoutSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "## {} (ID: {})",
            self.workout_name, self.id
        )?;
        writeln!(f)?;
        writeln!(f, "- **Duration**: {}", ElapsedTime(self.duration_seconds))?;
        writeln!(f, "- **Rating**: {}/5", self.rating)?;
        if !self.feedback.is_empty() {
            writeln!(f, "- **Feedback**: {}", self.feedback)?;
        }
        writeln!(f, "- **Recorded**: {}", LocalDateTime(&self.recorded_at))?;
        writeln!(f)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;

    use crate::models::{Workout, WorkoutSession};

    #[test]
    fn test_workout_display_prefers_status_over_duration() {
        let workout = Workout {
            day: "Day 1".to_string(),
            name: "Full Body".to_string(),
            duration: Some("40 min".to_string()),
            status: Some("Complete".to_string()),
            id: "full_body".to_string(),
        };
        let output = format!("{workout}");
        assert!(output.contains("(Complete)"));
        assert!(!output.contains("40 min"));
    }

    #[test]
    fn test_workout_display_duration_only() {
        let workout = Workout::new("Day 2", "Cardio & Core", Some("40 min".to_string()));
        let output = format!("{workout}");
        assert!(output.contains("Day 2"));
        assert!(output.contains("Cardio & Core"));
        assert!(output.contains("(40 min)"));
        assert!(output.contains("`cardio_&_core`"));
    }

    #[test]
    fn test_session_display() {
        let session = WorkoutSession {
            id: 7,
            workout_name: "Upper Body".to_string(),
            duration_seconds: 2712,
            rating: 4,
            feedback: "Felt strong".to_string(),
            recorded_at: Timestamp::from_second(1640995200).unwrap(),
        };
        let output = format!("{session}");
        assert!(output.contains("Upper Body"));
        assert!(output.contains("ID: 7"));
        assert!(output.contains("00:45:12"));
        assert!(output.contains("4/5"));
        assert!(output.contains("Felt strong"));
    }

    #[test]
    fn test_session_display_omits_empty_feedback() {
        let session = WorkoutSession {
            id: 1,
            workout_name: "Cardio".to_string(),
            duration_seconds: 60,
            rating: 2,
            feedback: String::new(),
            recorded_at: Timestamp::from_second(1640995200).unwrap(),
        };
        assert!(!format!("{session}").contains("Feedback"));
    }
}
