//! Validated inputs applied by the database layer.
//!
//! These are produced from the loosely typed parameter structs in
//! [`crate::params`] once every field has been parsed and checked. Merging a
//! change set into a loaded record happens here so the rules (status policy,
//! `actual_date` only while completed, task window ordering) live in one
//! place regardless of which front end issued the update.

use jiff::civil::Date;

use super::{Milestone, MilestoneTask, Status, StatusPolicy};
use crate::error::{Result, TrackerError};

/// A milestone ready to insert.
#[derive(Debug, Clone, PartialEq)]
pub struct NewMilestone {
    pub project_id: String,
    pub name: String,
    pub description: String,
    pub planned_date: Date,
    pub status: Status,
}

/// A task ready to append to a milestone.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTask {
    pub name: String,
    pub status: Status,
    pub completion_percentage: u8,
    pub start_date: Date,
    pub end_date: Date,
    pub depends_on: Vec<u64>,
}

/// Fields to overwrite on a milestone. `None` leaves the field untouched.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct MilestoneChanges {
    pub name: Option<String>,
    pub description: Option<String>,
    pub planned_date: Option<Date>,
    pub status: Option<Status>,
    pub actual_date: Option<Date>,
}

/// Fields to overwrite on a task. `None` leaves the field untouched.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct TaskChanges {
    pub name: Option<String>,
    pub status: Option<Status>,
    pub completion_percentage: Option<u8>,
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
    pub depends_on: Option<Vec<u64>>,
}

impl MilestoneChanges {
    /// Whether the change set touches nothing.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Merges the changes into `milestone`, returning a description of each
    /// field that changed.
    ///
    /// Moving to `completed` stamps `actual_date` with the supplied date or
    /// `today`; leaving `completed` clears it. Supplying an actual date for a
    /// milestone that will not be completed is rejected.
    pub fn apply_to(
        &self,
        milestone: &mut Milestone,
        policy: StatusPolicy,
        today: Date,
    ) -> Result<Vec<String>> {
        let mut changes = Vec::new();
        let next_status = self.status.unwrap_or(milestone.status);
        policy.check("status", milestone.status, next_status)?;

        let next_actual = if next_status == Status::Completed {
            let keep = if milestone.status == Status::Completed {
                milestone.actual_date
            } else {
                None
            };
            Some(self.actual_date.or(keep).unwrap_or(today))
        } else if self.actual_date.is_some() {
            return Err(TrackerError::invalid_input("actualDate")
                .with_reason("can only be set when the milestone status is 'completed'"));
        } else {
            None
        };

        if let Some(name) = &self.name {
            if *name != milestone.name {
                changes.push(format!("Renamed to '{name}'"));
                milestone.name = name.clone();
            }
        }
        if let Some(description) = &self.description {
            if *description != milestone.description {
                changes.push("Updated description".to_string());
                milestone.description = description.clone();
            }
        }
        if let Some(planned) = self.planned_date {
            if planned != milestone.planned_date {
                changes.push(format!("Planned date set to {planned}"));
                milestone.planned_date = planned;
            }
        }
        if next_status != milestone.status {
            changes.push(format!(
                "Status changed from {} to {}",
                milestone.status, next_status
            ));
            milestone.status = next_status;
        }
        if next_actual != milestone.actual_date {
            match next_actual {
                Some(date) => changes.push(format!("Actual date set to {date}")),
                None => changes.push("Cleared actual date".to_string()),
            }
            milestone.actual_date = next_actual;
        }

        Ok(changes)
    }
}

impl TaskChanges {
    /// Whether the change set touches nothing.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Merges the changes into `task`, returning a description of each field
    /// that changed. The merged window must still end on or after its start.
    pub fn apply_to(&self, task: &mut MilestoneTask, policy: StatusPolicy) -> Result<Vec<String>> {
        let mut changes = Vec::new();

        if let Some(status) = self.status {
            policy.check("status", task.status, status)?;
        }
        let start = self.start_date.unwrap_or(task.start_date);
        let end = self.end_date.unwrap_or(task.end_date);
        if end < start {
            return Err(TrackerError::invalid_input("endDate")
                .with_reason(format!("{end} is before the start date {start}")));
        }

        if let Some(name) = &self.name {
            if *name != task.name {
                changes.push(format!("Renamed to '{name}'"));
                task.name = name.clone();
            }
        }
        if let Some(status) = self.status {
            if status != task.status {
                changes.push(format!("Status changed from {} to {}", task.status, status));
                task.status = status;
            }
        }
        if let Some(percentage) = self.completion_percentage {
            if percentage != task.completion_percentage {
                changes.push(format!("Completion set to {percentage}%"));
                task.completion_percentage = percentage;
            }
        }
        if start != task.start_date || end != task.end_date {
            changes.push(format!("Window set to {start} to {end}"));
            task.start_date = start;
            task.end_date = end;
        }
        if let Some(depends_on) = &self.depends_on {
            if *depends_on != task.depends_on {
                changes.push("Updated dependencies".to_string());
                task.depends_on = depends_on.clone();
            }
        }

        Ok(changes)
    }
}
