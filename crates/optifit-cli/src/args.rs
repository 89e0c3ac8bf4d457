//! Command-line argument definitions using clap
//!
//! This module defines the CLI structure using clap's derive API,
//! implementing the parameter wrapper pattern: each arg struct adds
//! CLI-specific attributes and converts into a framework-free core
//! parameter type via `From`.

use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand};
use optifit_core::params::{AppendWorkout, RecordSession};

/// Main command-line interface for the OptiFit workout planner
///
/// OptiFit keeps a durable workout plan and a log of completed sessions.
/// It provides a command-line interface for viewing and extending the plan
/// and recording finished workouts, with support for both local CLI
/// operations and MCP (Model Context Protocol) server mode for integration
/// with AI coaching assistants.
#[derive(Parser)]
#[command(version, about, name = "optifit")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/optifit/optifit.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the OptiFit CLI
///
/// The CLI is organized into three main command categories:
/// - `plan`: Operations on the workout plan (list, add)
/// - `session`: Operations on the session log (record, list)
/// - `serve`: Start the MCP server for AI assistant integration
#[derive(Subcommand)]
pub enum Commands {
    /// Manage the workout plan
    #[command(alias = "p")]
    Plan {
        #[command(subcommand)]
        command: PlanCommands,
    },
    /// Manage recorded workout sessions
    #[command(alias = "s")]
    Session {
        #[command(subcommand)]
        command: SessionCommands,
    },
    /// Start the MCP server
    Serve,
}

#[derive(Subcommand)]
pub enum PlanCommands {
    /// List the planned workouts
    #[command(aliases = ["l", "ls"])]
    List,
    /// Add a workout to the plan
    #[command(alias = "a")]
    Add(AddWorkoutArgs),
}

#[derive(Subcommand)]
pub enum SessionCommands {
    /// Record a completed workout session
    #[command(alias = "r")]
    Record(RecordSessionArgs),
    /// List recorded sessions, newest first
    #[command(aliases = ["l", "ls"])]
    List,
}

/// Add a workout to the plan
///
/// The new entry is appended at the end of the plan and the updated plan is
/// persisted immediately. Its identifier is derived from the name
/// (lowercased, spaces replaced by underscores).
#[derive(ClapArgs)]
pub struct AddWorkoutArgs {
    /// Display label for the scheduled day (e.g. "Day 4")
    pub day: String,
    /// Workout title
    pub name: String,
    /// Duration label shown next to the workout
    #[arg(short = 't', long, help = "Optional duration label (e.g. \"30 min\")")]
    pub duration: Option<String>,
}

impl From<AddWorkoutArgs> for AppendWorkout {
    fn from(val: AddWorkoutArgs) -> Self {
        AppendWorkout {
            day: val.day,
            name: val.name,
            duration: val.duration,
        }
    }
}

/// Record a completed workout session
///
/// Stores the workout name, the elapsed timer seconds, a 1-5 difficulty
/// rating, and optional free-form feedback.
#[derive(ClapArgs)]
pub struct RecordSessionArgs {
    /// Name of the workout that was performed
    pub workout_name: String,
    /// Elapsed time in seconds
    pub duration_seconds: u64,
    /// Difficulty rating from 1 (easy) to 5 (hard)
    #[arg(short, long)]
    pub rating: u8,
    /// Additional comments
    #[arg(short, long, default_value = "")]
    pub feedback: String,
}

impl From<RecordSessionArgs> for RecordSession {
    fn from(val: RecordSessionArgs) -> Self {
        RecordSession {
            workout_name: val.workout_name,
            duration_seconds: val.duration_seconds,
            rating: val.rating,
            feedback: val.feedback,
        }
    }
}
