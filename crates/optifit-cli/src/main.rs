//! OptiFit CLI Application
//!
//! Command-line interface for the OptiFit workout planning tool.

mod args;
mod cli;
mod mcp;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use mcp::{run_stdio_server, OptifitMcpServer};
use optifit_core::WorkoutStoreBuilder;
use renderer::TerminalRenderer;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        command,
    } = Args::parse();

    let store = WorkoutStoreBuilder::new()
        .with_database_path(database_file)
        .build()
        .await
        .context("Failed to initialize workout store")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("OptiFit started");

    match command {
        Some(Commands::Plan { command }) => {
            Cli::new(store, renderer).handle_plan_command(command).await
        }
        Some(Commands::Session { command }) => {
            Cli::new(store, renderer)
                .handle_session_command(command)
                .await
        }
        Some(Commands::Serve) => {
            info!("Starting OptiFit MCP server");
            run_stdio_server(OptifitMcpServer::new(store))
                .await
                .context("MCP server failed")
        }
        None => Cli::new(store, renderer).list_plan().await,
    }
}
