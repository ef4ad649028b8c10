//! Derrick CLI Application
//!
//! Command-line interface and REST server for the Derrick milestone
//! tracker.

mod args;
mod cli;
mod commands;
mod renderer;

use std::path::PathBuf;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use commands::CommandRunner;
use derrick_cli::{
    config::{server_addr, Config},
    server::{self, AppState},
};
use derrick_core::{StatusPolicy, TrackerBuilder};
use log::info;
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        strict_status,
        command,
    } = Args::parse();

    let strict = strict_status
        || Config::load()
            .context("Invalid environment configuration")?
            .strict_status;
    let policy = if strict {
        StatusPolicy::Strict
    } else {
        StatusPolicy::Permissive
    };

    match command {
        Milestone { command } => {
            runner(database_file, policy, no_color)
                .await?
                .handle_milestone_command(command)
                .await
        }
        Task { command } => {
            runner(database_file, policy, no_color)
                .await?
                .handle_task_command(command)
                .await
        }
        Progress(args) => {
            runner(database_file, policy, no_color)
                .await?
                .show_progress(&args)
                .await
        }
        Serve(args) => {
            let addr = server_addr(args.bind, args.port)
                .context("Invalid server configuration")?;
            info!("Starting Derrick API server ({policy:?} status policy)");
            let state = AppState::new(database_file, policy).await?;
            server::serve(addr, state).await
        }
    }
}

async fn runner(
    database_file: Option<PathBuf>,
    policy: StatusPolicy,
    no_color: bool,
) -> Result<CommandRunner> {
    let tracker = TrackerBuilder::new()
        .with_database_path(database_file)
        .with_status_policy(policy)
        .build()
        .await
        .context("Failed to initialize tracker")?;
    Ok(CommandRunner::new(tracker, TerminalRenderer::new(!no_color)))
}
