//! Display implementations for domain models.
//!
//! Kept apart from the model definitions so the structs stay plain data.

use std::fmt;

use super::datetime::LocalDateTime;
use crate::models::{
    Milestone, MilestoneProgress, MilestoneTask, ProgressSummary, ProjectProgress, Status,
};

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Milestone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}. {}", self.id, self.name)?;
        writeln!(f)?;

        let progress = ProgressSummary::from_tasks(&self.tasks);
        writeln!(f, "- Project: {}", self.project_id)?;
        writeln!(f, "- Status: {}", self.status.with_icon())?;
        writeln!(f, "- Planned: {}", self.planned_date)?;
        if let Some(actual) = self.actual_date {
            writeln!(f, "- Actual: {actual}")?;
        }
        writeln!(
            f,
            "- Progress: {}% ({}/{} completed)",
            progress.overall,
            progress.completed,
            progress.total()
        )?;
        writeln!(f, "- Created: {}", LocalDateTime(&self.created_at))?;
        writeln!(f, "- Updated: {}", LocalDateTime(&self.updated_at))?;

        if !self.description.is_empty() {
            writeln!(f)?;
            writeln!(f, "{}", self.description)?;
        }

        if self.tasks.is_empty() {
            writeln!(f, "\nNo tasks in this milestone.")?;
        } else {
            writeln!(f, "\n## Tasks")?;
            writeln!(f)?;
            for task in &self.tasks {
                write!(f, "{task}")?;
            }
        }

        Ok(())
    }
}

impl fmt::Display for MilestoneTask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "### {}. {} ({}, {}%)",
            self.id,
            self.name,
            self.status.with_icon(),
            self.completion_percentage
        )?;
        writeln!(f)?;
        writeln!(f, "- Window: {} to {}", self.start_date, self.end_date)?;
        if !self.depends_on.is_empty() {
            let ids: Vec<String> = self.depends_on.iter().map(u64::to_string).collect();
            writeln!(f, "- Depends on: {}", ids.join(", "))?;
        }
        writeln!(f)
    }
}

impl fmt::Display for ProgressSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "- Overall: {}%", self.overall)?;
        for status in Status::ALL {
            writeln!(f, "- {}: {}", status.with_icon(), self.count(status))?;
        }
        Ok(())
    }
}

impl fmt::Display for MilestoneProgress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "- **{}** (ID: {}, {}): {}% of {} tasks",
            self.name,
            self.milestone_id,
            self.status.with_icon(),
            self.summary.overall,
            self.summary.total()
        )
    }
}

impl fmt::Display for ProjectProgress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Progress for project {}", self.project_id)?;
        writeln!(f)?;
        write!(f, "{}", self.summary)?;

        if !self.milestones.is_empty() {
            writeln!(f, "\n## Milestones")?;
            writeln!(f)?;
            for milestone in &self.milestones {
                write!(f, "{milestone}")?;
            }
        }
        Ok(())
    }
}
