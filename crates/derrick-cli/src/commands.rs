//! Command dispatch: runs a parsed subcommand against the tracker and
//! renders the outcome.

use anyhow::{Context, Result};
use derrick_core::{
    display::{CreateResult, OperationStatus},
    Tracker, TrackerError,
};

use crate::{
    cli::{MilestoneCommands, ProgressArgs, TaskCommands},
    renderer::TerminalRenderer,
};

/// Runs milestone, task and progress commands.
pub struct CommandRunner {
    tracker: Tracker,
    renderer: TerminalRenderer,
}

impl CommandRunner {
    pub fn new(tracker: Tracker, renderer: TerminalRenderer) -> Self {
        Self { tracker, renderer }
    }

    pub async fn handle_milestone_command(&self, command: MilestoneCommands) -> Result<()> {
        match command {
            MilestoneCommands::Create(args) => {
                let milestone = self
                    .tracker
                    .create_milestone(&args.into())
                    .await
                    .context("Failed to create milestone")?;
                self.renderer
                    .render(&CreateResult::new(milestone).to_string())
            }
            MilestoneCommands::List(args) => {
                let milestones = self
                    .tracker
                    .list_milestones(&args.project_id)
                    .await
                    .context("Failed to list milestones")?;
                self.renderer.render(&milestones.to_string())
            }
            MilestoneCommands::Show(args) => {
                let milestone = self
                    .tracker
                    .get_milestone(args.id)
                    .await
                    .context("Failed to load milestone")?
                    .ok_or(TrackerError::MilestoneNotFound { id: args.id })?;
                self.renderer.render(&milestone.to_string())
            }
            MilestoneCommands::Update(args) => {
                let id = args.id;
                let result = self
                    .tracker
                    .update_milestone(id, &args.into())
                    .await
                    .with_context(|| format!("Failed to update milestone {id}"))?;
                self.renderer.render(&result.to_string())
            }
            MilestoneCommands::Delete(args) => {
                let milestone = self
                    .tracker
                    .delete_milestone(args.id)
                    .await
                    .with_context(|| format!("Failed to delete milestone {}", args.id))?;
                self.renderer.render(
                    &OperationStatus::success(format!(
                        "Deleted milestone {} ({}) with {} tasks",
                        milestone.id,
                        milestone.name,
                        milestone.tasks.len()
                    ))
                    .to_string(),
                )
            }
        }
    }

    pub async fn handle_task_command(&self, command: TaskCommands) -> Result<()> {
        match command {
            TaskCommands::Add(args) => {
                let milestone_id = args.milestone_id;
                let task = self
                    .tracker
                    .create_task(milestone_id, &args.into())
                    .await
                    .with_context(|| format!("Failed to add task to milestone {milestone_id}"))?;
                self.renderer.render(&CreateResult::new(task).to_string())
            }
            TaskCommands::Update(args) => {
                let (milestone_id, task_id) = (args.milestone_id, args.task_id);
                let result = self
                    .tracker
                    .update_task(milestone_id, task_id, &args.into())
                    .await
                    .with_context(|| format!("Failed to update task {task_id}"))?;
                self.renderer.render(&result.to_string())
            }
            TaskCommands::Delete(args) => {
                let task = self
                    .tracker
                    .delete_task(args.milestone_id, args.task_id)
                    .await
                    .with_context(|| format!("Failed to delete task {}", args.task_id))?;
                self.renderer.render(
                    &OperationStatus::success(format!(
                        "Deleted task {} ({}) from milestone {}",
                        task.id, task.name, task.milestone_id
                    ))
                    .to_string(),
                )
            }
        }
    }

    pub async fn show_progress(&self, args: &ProgressArgs) -> Result<()> {
        let progress = self
            .tracker
            .project_progress(&args.project_id)
            .await
            .context("Failed to compute progress")?;

        if args.json {
            println!("{}", serde_json::to_string_pretty(&progress)?);
            Ok(())
        } else {
            self.renderer.render(&progress.to_string())
        }
    }
}
