//! Milestone task model definition.

use jiff::{civil::Date, Timestamp};
use serde::{Deserialize, Serialize};

use super::Status;

/// A unit of work belonging to exactly one milestone.
///
/// `status` and `completion_percentage` are tracked independently; a task may
/// report 100% while still marked in progress.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MilestoneTask {
    /// Unique identifier for the task
    pub id: u64,

    /// ID of the owning milestone
    pub milestone_id: u64,

    /// Name of the task
    pub name: String,

    /// Current status of the task
    #[serde(default)]
    pub status: Status,

    /// Completion percentage, 0 to 100
    #[serde(default)]
    pub completion_percentage: u8,

    /// Planned start of the work window
    pub start_date: Date,

    /// Planned end of the work window
    pub end_date: Date,

    /// Tasks this one depends on; informational only
    #[serde(default)]
    pub depends_on: Vec<u64>,

    /// Position of the task within its milestone (0-indexed)
    pub order: u32,

    /// Timestamp when the task was created (UTC)
    pub created_at: Timestamp,

    /// Timestamp when the task was last updated (UTC)
    pub updated_at: Timestamp,
}
