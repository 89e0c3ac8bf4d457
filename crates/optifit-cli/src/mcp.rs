//! MCP server implementation for OptiFit
//!
//! This module implements the Model Context Protocol server for OptiFit,
//! providing a standardized interface for AI coaching assistants to read
//! and extend the user's workout plan and session log.

use std::sync::Arc;

use anyhow::Result;
use log::{debug, error, info};
use optifit_core::{
    display::{ElapsedTime, PlanEntries, Sessions},
    params::{AppendWorkout, RecordSession},
    WorkoutStore,
};
use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{
        CallToolResult, Content, GetPromptRequestParam, GetPromptResult, Implementation,
        ListPromptsResult, PaginatedRequestParam, Prompt, PromptArgument, PromptMessage,
        PromptMessageContent, PromptMessageRole, ProtocolVersion, ServerCapabilities, ServerInfo,
    },
    service::RequestContext,
    tool, tool_handler, tool_router, ErrorData, ErrorData as McpError, RoleServer, ServerHandler,
};
use schemars::JsonSchema;
use serde::Deserialize;
use tokio::sync::Mutex;

/// Parameters for listing the workout plan
#[derive(Debug, Deserialize, JsonSchema)]
struct ListWorkoutsParams {}

/// Parameters for adding a workout to the plan
#[derive(Debug, Deserialize, JsonSchema)]
struct AddWorkoutParams {
    /// Display label for the scheduled day (e.g. "Day 4")
    day: String,
    /// Workout title
    name: String,
    /// Optional free-form duration label (e.g. "30 min")
    duration: Option<String>,
}

/// Parameters for recording a completed session
#[derive(Debug, Deserialize, JsonSchema)]
struct RecordSessionParams {
    /// Name of the workout that was performed
    workout_name: String,
    /// Elapsed time in seconds
    duration_seconds: u64,
    /// Difficulty rating from 1 (easy) to 5 (hard)
    rating: u8,
    /// Free-form comments
    #[serde(default)]
    feedback: String,
}

/// Parameters for listing recorded sessions
#[derive(Debug, Deserialize, JsonSchema)]
struct ListSessionsParams {}

/// Definition of a prompt template
#[derive(Debug, Clone)]
struct PromptTemplate {
    name: String,
    description: String,
    template: String,
    arguments: Vec<PromptTemplateArg>,
}

/// Argument definition for a prompt template
#[derive(Debug, Clone)]
struct PromptTemplateArg {
    name: String,
    description: String,
    required: bool,
}

/// Get predefined prompt templates for workout coaching
fn get_prompt_templates() -> Vec<PromptTemplate> {
    vec![PromptTemplate {
        name: "coach".to_string(),
        description: "Suggest additions to the workout plan from a fitness goal".to_string(),
        template: r#"You are a fitness coach. Review the user's current workout plan with the list_workouts tool and their recent history with the list_sessions tool, then suggest workouts toward the following goal:

Goal: {goal}

For each suggestion, give a day label, a workout name, and a duration, and add the ones the user confirms with the add_workout tool. Take recent session ratings into account: back off intensity after sessions rated 5, progress after sessions rated 1 or 2.
"#
        .to_string(),
        arguments: vec![PromptTemplateArg {
            name: "goal".to_string(),
            description: "The fitness goal to plan workouts for".to_string(),
            required: true,
        }],
    }]
}

/// MCP server for OptiFit
#[derive(Clone)]
pub struct OptifitMcpServer {
    store: Arc<Mutex<WorkoutStore>>,
    tool_router: ToolRouter<Self>,
}

type McpResult = Result<CallToolResult, ErrorData>;

#[tool_router]
impl OptifitMcpServer {
    /// Create a new OptiFit MCP server
    pub fn new(store: WorkoutStore) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
            tool_router: Self::tool_router(),
        }
    }

    #[tool(
        name = "list_workouts",
        description = "List the user's workout plan in order. A fresh profile gets a three-entry starter plan. Returns day labels, workout names, durations or completion status, and stable ids."
    )]
    async fn list_workouts(&self, Parameters(params): Parameters<ListWorkoutsParams>) -> McpResult {
        debug!("list_workouts: {:?}", params);

        let store = self.store.lock().await;
        let plan = store
            .load()
            .await
            .map_err(|e| ErrorData::internal_error(format!("Failed to load plan: {e}"), None))?;

        let mut result = String::from("# Workout Plan\n\n");
        result.push_str(&PlanEntries(plan).to_string());

        Ok(CallToolResult::success(vec![Content::text(result)]))
    }

    #[tool(
        name = "add_workout",
        description = "Append a workout to the end of the plan and persist it. Provide a day label (e.g. \"Day 4\"), a workout name, and an optional duration label (e.g. \"30 min\"). The workout's id is derived from its name."
    )]
    async fn add_workout(&self, Parameters(params): Parameters<AddWorkoutParams>) -> McpResult {
        debug!("add_workout: {:?}", params);

        let store = self.store.lock().await;
        let plan = store
            .append(&AppendWorkout {
                day: params.day,
                name: params.name,
                duration: params.duration,
            })
            .await
            .map_err(|e| ErrorData::internal_error(format!("Failed to add workout: {e}"), None))?;

        let added = plan.last().ok_or_else(|| {
            ErrorData::internal_error("Append returned an empty plan".to_string(), None)
        })?;
        let result = format!(
            "Added workout: {} on {} (id: {})\n\nThe plan now has {} workouts.",
            added.name,
            added.day,
            added.id,
            plan.len()
        );

        Ok(CallToolResult::success(vec![Content::text(result)]))
    }

    #[tool(
        name = "record_session",
        description = "Record a completed workout session: the workout name, elapsed seconds on the timer, a 1-5 difficulty rating, and optional free-form feedback."
    )]
    async fn record_session(
        &self,
        Parameters(params): Parameters<RecordSessionParams>,
    ) -> McpResult {
        debug!("record_session: {:?}", params);

        let store = self.store.lock().await;
        let session = store
            .record_session(&RecordSession {
                workout_name: params.workout_name,
                duration_seconds: params.duration_seconds,
                rating: params.rating,
                feedback: params.feedback,
            })
            .await
            .map_err(|e| {
                ErrorData::internal_error(format!("Failed to record session: {e}"), None)
            })?;

        let result = format!(
            "Recorded session {} for '{}': {} at rating {}/5",
            session.id,
            session.workout_name,
            ElapsedTime(session.duration_seconds),
            session.rating
        );

        Ok(CallToolResult::success(vec![Content::text(result)]))
    }

    #[tool(
        name = "list_sessions",
        description = "List recorded workout sessions, newest first, with durations, ratings, and feedback. Useful for judging how hard recent workouts were before suggesting new ones."
    )]
    async fn list_sessions(&self, Parameters(params): Parameters<ListSessionsParams>) -> McpResult {
        debug!("list_sessions: {:?}", params);

        let store = self.store.lock().await;
        let sessions = store.list_sessions().await.map_err(|e| {
            ErrorData::internal_error(format!("Failed to list sessions: {e}"), None)
        })?;

        let mut result = String::from("# Workout Sessions\n\n");
        result.push_str(&Sessions(sessions).to_string());

        Ok(CallToolResult::success(vec![Content::text(result)]))
    }

    /// List all available prompts
    async fn list_prompts(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListPromptsResult, McpError> {
        debug!("list_prompts");

        let templates = get_prompt_templates();
        let prompts = templates
            .iter()
            .map(|template| {
                Prompt::new(
                    &template.name,
                    Some(&template.description),
                    Some(
                        template
                            .arguments
                            .iter()
                            .map(|arg| PromptArgument {
                                name: arg.name.clone(),
                                title: None,
                                description: Some(arg.description.clone()),
                                required: Some(arg.required),
                            })
                            .collect(),
                    ),
                )
            })
            .collect();

        Ok(ListPromptsResult {
            next_cursor: None,
            prompts,
        })
    }

    /// Get a specific prompt by name and apply arguments
    async fn get_prompt(
        &self,
        request: GetPromptRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<GetPromptResult, McpError> {
        debug!("get_prompt: {}", request.name);

        let templates = get_prompt_templates();
        let template = templates
            .iter()
            .find(|t| t.name == request.name)
            .ok_or_else(|| McpError::invalid_params("Prompt not found", None))?;

        let mut prompt_text = template.template.clone();

        // Apply argument substitution if arguments are provided
        if let Some(args) = &request.arguments {
            for arg_def in &template.arguments {
                if let Some(arg_value) = args.get(&arg_def.name) {
                    if let Some(arg_str) = arg_value.as_str() {
                        let placeholder = format!("{{{}}}", arg_def.name);
                        prompt_text = prompt_text.replace(&placeholder, arg_str);
                    } else if arg_def.required {
                        return Err(McpError::invalid_params(
                            format!("Argument '{}' must be a string", arg_def.name),
                            None,
                        ));
                    }
                } else if arg_def.required {
                    return Err(McpError::invalid_params(
                        format!("Required argument '{}' is missing", arg_def.name),
                        None,
                    ));
                }
            }
        } else {
            // Check if any required arguments are missing
            let required_args: Vec<_> = template
                .arguments
                .iter()
                .filter(|arg| arg.required)
                .map(|arg| arg.name.as_str())
                .collect();
            if !required_args.is_empty() {
                return Err(McpError::invalid_params(
                    format!("Required arguments missing: {}", required_args.join(", ")),
                    None,
                ));
            }
        }

        Ok(GetPromptResult {
            description: Some(template.description.clone()),
            messages: vec![PromptMessage {
                role: PromptMessageRole::User,
                content: PromptMessageContent::text(prompt_text),
            }],
        })
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for OptifitMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_prompts()
                .build(),
            server_info: Implementation {
                name: "optifit".to_string(),
                title: None,
                version: env!("CARGO_PKG_VERSION").to_string(),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                r#"OptiFit keeps a user's workout plan and a log of completed sessions.

## Core Concepts
- **Plan**: an ordered list of planned workouts, each with a day label, a name, and either a duration label or a completion status. A fresh profile starts from a three-entry starter plan.
- **Sessions**: completed workouts with elapsed time, a 1-5 difficulty rating, and optional feedback.

## Workflow Examples

### Reviewing and extending the plan
1. Call `list_workouts` to see the current plan
2. Append new workouts with `add_workout` - the plan is persisted after every addition

### Logging a finished workout
1. Call `record_session` with the workout name, elapsed seconds, and rating
2. Use `list_sessions` to review history before suggesting what to do next

## Best Practices
- Keep day labels consistent with the existing plan ("Day 4" after "Day 3")
- Workout ids are derived from names; reusing a name produces a duplicate id, so prefer distinct names
- Use recent session ratings to calibrate suggested intensity"#
                    .to_string(),
            ),
        }
    }

    async fn list_prompts(
        &self,
        request: Option<PaginatedRequestParam>,
        context: RequestContext<RoleServer>,
    ) -> Result<ListPromptsResult, McpError> {
        self.list_prompts(request, context).await
    }

    async fn get_prompt(
        &self,
        request: GetPromptRequestParam,
        context: RequestContext<RoleServer>,
    ) -> Result<GetPromptResult, McpError> {
        self.get_prompt(request, context).await
    }
}

/// Run the MCP server with stdio transport
pub async fn run_stdio_server(server: OptifitMcpServer) -> Result<()> {
    use rmcp::{transport::stdio, ServiceExt};

    info!("Starting OptiFit MCP server on stdio");

    let service = server.serve(stdio()).await.inspect_err(|e| {
        error!("serving error: {e:?}");
    })?;

    // Set up signal handlers for graceful shutdown
    let mut sigint = tokio::signal::unix::signal(tokio::signal::unix::SignalKind::interrupt())?;
    let mut sigterm = tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())?;

    tokio::select! {
        result = service.waiting() => {
            match result {
                Ok(_) => info!("MCP server stopped normally"),
                Err(e) => error!("MCP server error: {e:?}"),
            }
        }
        _ = sigint.recv() => {
            info!("Received SIGINT, shutting down gracefully...");
        }
        _ = sigterm.recv() => {
            info!("Received SIGTERM, shutting down gracefully...");
        }
    }

    info!("MCP server shutdown complete");
    Ok(())
}
