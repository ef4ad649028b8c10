use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{MilestoneCommands, ProgressArgs, ServeArgs, TaskCommands};

/// Milestone and progress tracking for projects
///
/// Derrick records the milestones of a project, the tasks under each
/// milestone, and derives completion progress from task status. It can be
/// driven from the command line or served as a REST API with a real-time
/// event channel.
#[derive(Parser)]
#[command(version, about, name = "derrick")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/derrick/derrick.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Reject status changes that skip steps (planned -> in-progress ->
    /// completed). Also enabled by DERRICK_STRICT_STATUS=1
    #[arg(long, global = true)]
    pub strict_status: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands for the Derrick CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Manage milestones
    #[command(alias = "m")]
    Milestone {
        #[command(subcommand)]
        command: MilestoneCommands,
    },
    /// Manage tasks within milestones
    #[command(alias = "t")]
    Task {
        #[command(subcommand)]
        command: TaskCommands,
    },
    /// Show derived progress for a project
    #[command(alias = "p")]
    Progress(ProgressArgs),
    /// Start the REST API server
    Serve(ServeArgs),
}
