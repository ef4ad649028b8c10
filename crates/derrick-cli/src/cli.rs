//! Subcommand argument definitions using clap.
//!
//! Each argument struct converts into the matching core parameter type with
//! `From`, so clap attributes stay out of `derrick_core` and all validation
//! (required text, ISO dates, status names, percentage range) happens in one
//! place regardless of front end:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Tracker
//! ```

use std::net::IpAddr;

use clap::{Args, Subcommand};
use derrick_core::params::{CreateMilestone, CreateTask, UpdateMilestone, UpdateTask};

/// Create a milestone in a project
#[derive(Args)]
pub struct CreateMilestoneArgs {
    /// Project the milestone belongs to
    pub project_id: String,
    /// Name of the milestone
    pub name: String,
    /// What the milestone delivers
    #[arg(short, long)]
    pub description: String,
    /// Date the milestone is expected to complete (YYYY-MM-DD)
    #[arg(short, long)]
    pub planned_date: String,
    /// Initial status: planned, in-progress, completed or delayed
    #[arg(short, long)]
    pub status: Option<String>,
}

impl From<CreateMilestoneArgs> for CreateMilestone {
    fn from(val: CreateMilestoneArgs) -> Self {
        CreateMilestone {
            project_id: val.project_id,
            name: Some(val.name),
            description: Some(val.description),
            planned_date: Some(val.planned_date),
            status: val.status,
        }
    }
}

/// List the milestones of a project
#[derive(Args)]
pub struct ListMilestonesArgs {
    /// Project to list
    pub project_id: String,
}

/// Show one milestone with its tasks
#[derive(Args)]
pub struct MilestoneIdArgs {
    /// ID of the milestone
    pub id: u64,
}

/// Update fields of a milestone
///
/// Setting the status to completed records the actual completion date
/// (today unless --actual-date is given). Moving away from completed clears
/// it.
#[derive(Args)]
pub struct UpdateMilestoneArgs {
    /// ID of the milestone to update
    pub id: u64,
    /// New status: planned, in-progress, completed or delayed
    #[arg(short, long)]
    pub status: Option<String>,
    /// Actual completion date (YYYY-MM-DD); only with status completed
    #[arg(long)]
    pub actual_date: Option<String>,
    /// New name
    #[arg(long)]
    pub name: Option<String>,
    /// New description
    #[arg(short, long)]
    pub description: Option<String>,
    /// New planned date (YYYY-MM-DD)
    #[arg(short, long)]
    pub planned_date: Option<String>,
}

impl From<UpdateMilestoneArgs> for UpdateMilestone {
    fn from(val: UpdateMilestoneArgs) -> Self {
        UpdateMilestone {
            status: val.status,
            actual_date: val.actual_date,
            name: val.name,
            description: val.description,
            planned_date: val.planned_date,
        }
    }
}

#[derive(Subcommand)]
pub enum MilestoneCommands {
    /// Create a new milestone
    Create(CreateMilestoneArgs),
    /// List milestones of a project
    List(ListMilestonesArgs),
    /// Show a milestone and its tasks
    Show(MilestoneIdArgs),
    /// Update a milestone
    Update(UpdateMilestoneArgs),
    /// Delete a milestone and its tasks
    Delete(MilestoneIdArgs),
}

/// Append a task to a milestone
#[derive(Args)]
pub struct AddTaskArgs {
    /// Milestone to add the task to
    pub milestone_id: u64,
    /// Name of the task
    pub name: String,
    /// Planned start (YYYY-MM-DD)
    #[arg(long)]
    pub start_date: String,
    /// Planned end (YYYY-MM-DD), on or after the start
    #[arg(long)]
    pub end_date: String,
    /// Initial status: planned, in-progress, completed or delayed
    #[arg(short, long)]
    pub status: Option<String>,
    /// Completion percentage, 0 to 100
    #[arg(short, long)]
    pub completion: Option<i64>,
    /// IDs of tasks this one depends on, comma separated
    #[arg(long, value_delimiter = ',')]
    pub depends_on: Vec<u64>,
}

impl From<AddTaskArgs> for CreateTask {
    fn from(val: AddTaskArgs) -> Self {
        CreateTask {
            name: Some(val.name),
            start_date: Some(val.start_date),
            end_date: Some(val.end_date),
            status: val.status,
            completion_percentage: val.completion,
            depends_on: val.depends_on,
        }
    }
}

/// Update fields of a task
///
/// Status and completion percentage are independent: changing one never
/// changes the other.
#[derive(Args)]
pub struct UpdateTaskArgs {
    /// Milestone the task belongs to
    pub milestone_id: u64,
    /// ID of the task to update
    pub task_id: u64,
    /// New status: planned, in-progress, completed or delayed
    #[arg(short, long)]
    pub status: Option<String>,
    /// New completion percentage, 0 to 100
    #[arg(short, long)]
    pub completion: Option<i64>,
    /// New name
    #[arg(long)]
    pub name: Option<String>,
    /// New planned start (YYYY-MM-DD)
    #[arg(long)]
    pub start_date: Option<String>,
    /// New planned end (YYYY-MM-DD)
    #[arg(long)]
    pub end_date: Option<String>,
    /// Replace dependencies with these task IDs, comma separated
    #[arg(long, value_delimiter = ',', conflicts_with = "clear_depends_on")]
    pub depends_on: Option<Vec<u64>>,
    /// Remove all dependencies
    #[arg(long)]
    pub clear_depends_on: bool,
}

impl From<UpdateTaskArgs> for UpdateTask {
    fn from(val: UpdateTaskArgs) -> Self {
        UpdateTask {
            status: val.status,
            completion_percentage: val.completion,
            name: val.name,
            start_date: val.start_date,
            end_date: val.end_date,
            depends_on: if val.clear_depends_on {
                Some(Vec::new())
            } else {
                val.depends_on
            },
        }
    }
}

/// Identify a task within its milestone
#[derive(Args)]
pub struct TaskIdArgs {
    /// Milestone the task belongs to
    pub milestone_id: u64,
    /// ID of the task
    pub task_id: u64,
}

#[derive(Subcommand)]
pub enum TaskCommands {
    /// Append a task to a milestone
    Add(AddTaskArgs),
    /// Update a task
    Update(UpdateTaskArgs),
    /// Delete a task
    Delete(TaskIdArgs),
}

/// Show project progress
#[derive(Args)]
pub struct ProgressArgs {
    /// Project to summarize
    pub project_id: String,
    /// Print JSON instead of markdown
    #[arg(long)]
    pub json: bool,
}

/// Run the REST API
#[derive(Args)]
pub struct ServeArgs {
    /// Address to bind. Defaults to DERRICK_BIND or 127.0.0.1
    #[arg(long)]
    pub bind: Option<IpAddr>,
    /// Port to listen on. Defaults to DERRICK_PORT or 4000
    #[arg(long)]
    pub port: Option<u16>,
}
