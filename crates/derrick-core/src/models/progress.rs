//! Progress derivation over milestone task sets.
//!
//! Progress is never stored. Every read recomputes it from the current tasks:
//! completed tasks count fully, in-progress tasks count half, planned and
//! delayed tasks count nothing.

use serde::{Deserialize, Serialize};

use super::{Milestone, MilestoneTask, Status};

/// Per-status task counts plus the derived overall percentage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressSummary {
    /// Overall completion, 0 to 100
    pub overall: u8,
    /// Number of completed tasks
    pub completed: u32,
    /// Number of in-progress tasks
    pub in_progress: u32,
    /// Number of planned tasks
    pub planned: u32,
    /// Number of delayed tasks
    pub delayed: u32,
}

impl ProgressSummary {
    /// Derives the summary from a sequence of task statuses.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use derrick_core::models::{ProgressSummary, Status};
    ///
    /// let summary = ProgressSummary::from_statuses([
    ///     Status::Completed,
    ///     Status::InProgress,
    ///     Status::Planned,
    ///     Status::Delayed,
    /// ]);
    /// // (1 + 0.5) / 4 = 37.5%, rounded half up
    /// assert_eq!(summary.overall, 38);
    /// assert_eq!(summary.total(), 4);
    /// ```
    pub fn from_statuses<I>(statuses: I) -> Self
    where
        I: IntoIterator<Item = Status>,
    {
        let mut summary = Self::default();
        for status in statuses {
            match status {
                Status::Completed => summary.completed += 1,
                Status::InProgress => summary.in_progress += 1,
                Status::Planned => summary.planned += 1,
                Status::Delayed => summary.delayed += 1,
            }
        }
        summary.overall = overall_percentage(summary.completed, summary.in_progress, summary.total());
        summary
    }

    /// Derives the summary from a set of tasks.
    pub fn from_tasks<'a, I>(tasks: I) -> Self
    where
        I: IntoIterator<Item = &'a MilestoneTask>,
    {
        Self::from_statuses(tasks.into_iter().map(|task| task.status))
    }

    /// Flattens the tasks of every milestone and derives one summary.
    pub fn from_milestones(milestones: &[Milestone]) -> Self {
        Self::from_tasks(milestones.iter().flat_map(|m| m.tasks.iter()))
    }

    /// Total number of tasks counted.
    pub fn total(&self) -> u32 {
        self.completed + self.in_progress + self.planned + self.delayed
    }

    /// Count for a single status bucket.
    pub fn count(&self, status: Status) -> u32 {
        match status {
            Status::Completed => self.completed,
            Status::InProgress => self.in_progress,
            Status::Planned => self.planned,
            Status::Delayed => self.delayed,
        }
    }
}

/// `round((completed + 0.5 * in_progress) / total * 100)`, half up, in
/// integer arithmetic. Zero tasks means zero progress.
fn overall_percentage(completed: u32, in_progress: u32, total: u32) -> u8 {
    if total == 0 {
        return 0;
    }
    let doubled_credit = 2 * u64::from(completed) + u64::from(in_progress);
    let doubled_total = 2 * u64::from(total);
    let percent = (doubled_credit * 100 + u64::from(total)) / doubled_total;
    percent.min(100) as u8
}

/// Progress of a single milestone within a project breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MilestoneProgress {
    pub milestone_id: u64,
    pub name: String,
    pub status: Status,
    pub summary: ProgressSummary,
}

impl From<&Milestone> for MilestoneProgress {
    fn from(milestone: &Milestone) -> Self {
        Self {
            milestone_id: milestone.id,
            name: milestone.name.clone(),
            status: milestone.status,
            summary: ProgressSummary::from_tasks(&milestone.tasks),
        }
    }
}

/// Project-wide progress: the flattened summary plus a per-milestone
/// breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectProgress {
    pub project_id: String,
    pub summary: ProgressSummary,
    pub milestones: Vec<MilestoneProgress>,
}

impl ProjectProgress {
    /// Builds the project progress from the project's current milestones.
    pub fn from_milestones(project_id: impl Into<String>, milestones: &[Milestone]) -> Self {
        Self {
            project_id: project_id.into(),
            summary: ProgressSummary::from_milestones(milestones),
            milestones: milestones.iter().map(MilestoneProgress::from).collect(),
        }
    }
}
