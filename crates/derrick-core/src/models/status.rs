//! Status enumeration shared by milestones and tasks, and the policy that
//! decides which status changes are accepted.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TrackerError};

/// Type-safe enumeration of milestone and task statuses.
///
/// Milestones and tasks use the same four values, so both carry this type.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    /// Not started yet
    #[default]
    Planned,

    /// Work is underway
    InProgress,

    /// Finished
    Completed,

    /// Behind schedule
    Delayed,
}

impl FromStr for Status {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "planned" => Ok(Status::Planned),
            "in-progress" | "in_progress" | "inprogress" => Ok(Status::InProgress),
            "completed" => Ok(Status::Completed),
            "delayed" => Ok(Status::Delayed),
            _ => Err(format!("Invalid status: {s}")),
        }
    }
}

impl Status {
    /// All statuses, in display order.
    pub const ALL: [Status; 4] = [
        Status::Completed,
        Status::InProgress,
        Status::Planned,
        Status::Delayed,
    ];

    /// Wire and database representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Planned => "planned",
            Status::InProgress => "in-progress",
            Status::Completed => "completed",
            Status::Delayed => "delayed",
        }
    }

    /// Get status with consistent icon formatting for display.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use derrick_core::models::Status;
    ///
    /// assert_eq!(Status::Completed.with_icon(), "✓ Completed");
    /// assert_eq!(Status::Delayed.with_icon(), "⚠ Delayed");
    /// ```
    pub fn with_icon(&self) -> &'static str {
        match self {
            Status::Completed => "✓ Completed",
            Status::InProgress => "➤ In Progress",
            Status::Planned => "○ Planned",
            Status::Delayed => "⚠ Delayed",
        }
    }

    /// Whether the strict transition table allows moving from `self` to
    /// `next`. Setting the current status again is always allowed.
    pub fn can_transition_to(&self, next: Status) -> bool {
        use Status::*;

        if *self == next {
            return true;
        }
        matches!(
            (*self, next),
            (Planned, InProgress)
                | (Planned, Delayed)
                | (InProgress, Completed)
                | (InProgress, Delayed)
                | (Delayed, InProgress)
        )
    }
}

/// How status changes are validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusPolicy {
    /// Any status may be assigned in any order.
    #[default]
    Permissive,

    /// Only transitions from [`Status::can_transition_to`] are accepted;
    /// `completed` is terminal.
    Strict,
}

impl StatusPolicy {
    /// Checks a status change for the named field, returning a validation
    /// error when the policy rejects it.
    pub fn check(&self, field: &str, from: Status, to: Status) -> Result<()> {
        match self {
            StatusPolicy::Permissive => Ok(()),
            StatusPolicy::Strict if from.can_transition_to(to) => Ok(()),
            StatusPolicy::Strict => Err(TrackerError::invalid_input(field).with_reason(format!(
                "Cannot change status from '{}' to '{}'",
                from.as_str(),
                to.as_str()
            ))),
        }
    }
}
