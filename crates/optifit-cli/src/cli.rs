//! Command handlers bridging parsed arguments to store operations.

use anyhow::{Context, Result};
use optifit_core::{
    display::{AppendResult, OperationStatus, PlanEntries, RecordResult, Sessions},
    WorkoutStore,
};

use crate::{
    args::{PlanCommands, SessionCommands},
    renderer::TerminalRenderer,
};

/// CLI command dispatcher holding the store and renderer.
pub struct Cli {
    store: WorkoutStore,
    renderer: TerminalRenderer,
}

impl Cli {
    /// Create a new CLI dispatcher.
    pub fn new(store: WorkoutStore, renderer: TerminalRenderer) -> Self {
        Self { store, renderer }
    }

    /// Handle a `plan` subcommand.
    pub async fn handle_plan_command(&self, command: PlanCommands) -> Result<()> {
        match command {
            PlanCommands::List => self.list_plan().await,
            PlanCommands::Add(args) => self.add_workout(args.into()).await,
        }
    }

    /// Handle a `session` subcommand.
    pub async fn handle_session_command(&self, command: SessionCommands) -> Result<()> {
        match command {
            SessionCommands::Record(args) => self.record_session(args.into()).await,
            SessionCommands::List => self.list_sessions().await,
        }
    }

    /// Render the workout plan, seeding defaults on first run.
    pub async fn list_plan(&self) -> Result<()> {
        let plan = self.store.load().await.context("Failed to load plan")?;

        let mut output = String::from("# Workout Plan\n\n");
        output.push_str(&PlanEntries(plan).to_string());
        self.renderer.render(&output)
    }

    async fn add_workout(&self, params: optifit_core::params::AppendWorkout) -> Result<()> {
        match self.store.append(&params).await {
            Ok(plan) => {
                // append never returns an empty list
                let result = AppendResult::new(plan)
                    .context("Append returned an empty plan")?;
                self.renderer.render(&result.to_string())
            }
            Err(e) => {
                // The entry may still be visible in the caller's session;
                // persistence is best-effort from the user's point of view.
                let status = OperationStatus::failure(format!("Workout not saved: {e}"));
                self.renderer.render(&status.to_string())?;
                Err(e.into())
            }
        }
    }

    async fn record_session(&self, params: optifit_core::params::RecordSession) -> Result<()> {
        let session = self
            .store
            .record_session(&params)
            .await
            .context("Failed to record session")?;

        self.renderer.render(&RecordResult::new(session).to_string())
    }

    async fn list_sessions(&self) -> Result<()> {
        let sessions = self
            .store
            .list_sessions()
            .await
            .context("Failed to list sessions")?;

        let mut output = String::from("# Workout Sessions\n\n");
        output.push_str(&Sessions(sessions).to_string());
        self.renderer.render(&output)
    }
}
