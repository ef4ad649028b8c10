//! Milestone model definition.

use jiff::{civil::Date, Timestamp};
use serde::{Deserialize, Serialize};

use super::{MilestoneTask, Status};

/// A planned deliverable of a project, owning an ordered list of tasks.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Milestone {
    /// Unique identifier for the milestone
    pub id: u64,

    /// Project the milestone belongs to (owned by the surrounding system)
    pub project_id: String,

    /// Name of the milestone
    pub name: String,

    /// Free-text description
    pub description: String,

    /// Date the milestone is expected to complete
    pub planned_date: Date,

    /// Date the milestone actually completed; only set while completed
    #[serde(default)]
    pub actual_date: Option<Date>,

    /// Current status of the milestone
    #[serde(default)]
    pub status: Status,

    /// Timestamp when the milestone was created (UTC)
    pub created_at: Timestamp,

    /// Timestamp when the milestone was last modified (UTC)
    pub updated_at: Timestamp,

    /// Tasks in insertion order
    #[serde(default)]
    pub tasks: Vec<MilestoneTask>,
}

impl Milestone {
    /// Looks up a task of this milestone by ID.
    pub fn task(&self, task_id: u64) -> Option<&MilestoneTask> {
        self.tasks.iter().find(|task| task.id == task_id)
    }
}
