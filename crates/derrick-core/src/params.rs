//! Parameter structures for Derrick operations.
//!
//! These are the shapes front ends fill in (CLI arguments, REST request
//! bodies). Dates and statuses arrive as strings and required fields as
//! `Option`; `validate()` turns a missing or malformed value into a
//! field-level [`TrackerError::InvalidInput`].
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │ CLI Args /      │    │  Core Params    │    │ Validated       │
//! │ JSON bodies     │───▶│ (this module)   │───▶│ NewTask, …      │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```

use jiff::{civil::Date, tz::TimeZone, Timestamp};
use serde::{Deserialize, Serialize};

use crate::{
    error::{Result, TrackerError},
    models::{MilestoneChanges, NewMilestone, NewTask, Status, TaskChanges},
};

/// Parameters for creating a milestone.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMilestone {
    /// Project the milestone belongs to; REST callers take it from the path
    #[serde(default)]
    pub project_id: String,
    pub name: Option<String>,
    pub description: Option<String>,
    /// ISO date, e.g. `2024-01-01`
    pub planned_date: Option<String>,
    /// Defaults to `planned`
    pub status: Option<String>,
}

impl CreateMilestone {
    /// Checks required fields and parses dates and status.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use derrick_core::{models::Status, params::CreateMilestone};
    ///
    /// let params = CreateMilestone {
    ///     project_id: "well-7".to_string(),
    ///     name: Some("Site Prep".to_string()),
    ///     description: Some("Level the pad".to_string()),
    ///     planned_date: Some("2024-01-01".to_string()),
    ///     status: None,
    /// };
    /// let milestone = params.validate()?;
    /// assert_eq!(milestone.status, Status::Planned);
    ///
    /// let missing = CreateMilestone { planned_date: None, ..params };
    /// assert!(missing.validate().is_err());
    /// # Ok::<(), derrick_core::TrackerError>(())
    /// ```
    pub fn validate(&self) -> Result<NewMilestone> {
        Ok(NewMilestone {
            project_id: required_text("projectId", Some(&self.project_id))?,
            name: required_text("name", self.name.as_ref())?,
            description: required_text("description", self.description.as_ref())?,
            planned_date: parse_date(
                "plannedDate",
                &required_text("plannedDate", self.planned_date.as_ref())?,
            )?,
            status: optional_status(self.status.as_deref())?.unwrap_or_default(),
        })
    }
}

/// Parameters for updating a milestone. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMilestone {
    pub status: Option<String>,
    /// Only accepted when the milestone ends up `completed`
    pub actual_date: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub planned_date: Option<String>,
}

impl UpdateMilestone {
    /// Parses the supplied fields into a change set.
    pub fn validate(&self) -> Result<MilestoneChanges> {
        Ok(MilestoneChanges {
            name: optional_text("name", self.name.as_ref())?,
            description: optional_text("description", self.description.as_ref())?,
            planned_date: optional_date("plannedDate", self.planned_date.as_deref())?,
            status: optional_status(self.status.as_deref())?,
            actual_date: optional_date("actualDate", self.actual_date.as_deref())?,
        })
    }
}

/// Parameters for appending a task to a milestone.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTask {
    pub name: Option<String>,
    /// ISO date
    pub start_date: Option<String>,
    /// ISO date, on or after `start_date`
    pub end_date: Option<String>,
    /// Defaults to `planned`
    pub status: Option<String>,
    /// 0 to 100, defaults to 0
    pub completion_percentage: Option<i64>,
    #[serde(default)]
    pub depends_on: Vec<u64>,
}

impl CreateTask {
    /// Checks required fields, parses dates and status, and validates the
    /// window and percentage.
    pub fn validate(&self) -> Result<NewTask> {
        let name = required_text("name", self.name.as_ref())?;
        let start_date = parse_date(
            "startDate",
            &required_text("startDate", self.start_date.as_ref())?,
        )?;
        let end_date = parse_date(
            "endDate",
            &required_text("endDate", self.end_date.as_ref())?,
        )?;
        if end_date < start_date {
            return Err(TrackerError::invalid_input("endDate")
                .with_reason(format!("{end_date} is before the start date {start_date}")));
        }

        Ok(NewTask {
            name,
            status: optional_status(self.status.as_deref())?.unwrap_or_default(),
            completion_percentage: optional_percentage(self.completion_percentage)?.unwrap_or(0),
            start_date,
            end_date,
            depends_on: self.depends_on.clone(),
        })
    }
}

/// Parameters for updating a task. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTask {
    pub status: Option<String>,
    pub completion_percentage: Option<i64>,
    pub name: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub depends_on: Option<Vec<u64>>,
}

impl UpdateTask {
    /// Parses the supplied fields into a change set. Window ordering is
    /// checked later against the stored dates.
    pub fn validate(&self) -> Result<TaskChanges> {
        Ok(TaskChanges {
            name: optional_text("name", self.name.as_ref())?,
            status: optional_status(self.status.as_deref())?,
            completion_percentage: optional_percentage(self.completion_percentage)?,
            start_date: optional_date("startDate", self.start_date.as_deref())?,
            end_date: optional_date("endDate", self.end_date.as_deref())?,
            depends_on: self.depends_on.clone(),
        })
    }
}

fn required_text(field: &str, value: Option<&String>) -> Result<String> {
    match value.map(|v| v.trim()) {
        Some(v) if !v.is_empty() => Ok(v.to_string()),
        _ => Err(TrackerError::invalid_input(field).with_reason("is required")),
    }
}

fn optional_text(field: &str, value: Option<&String>) -> Result<Option<String>> {
    value.map(|_| required_text(field, value)).transpose()
}

fn optional_date(field: &str, value: Option<&str>) -> Result<Option<Date>> {
    value.map(|v| parse_date(field, v)).transpose()
}

fn optional_status(value: Option<&str>) -> Result<Option<Status>> {
    value
        .map(|v| {
            v.parse::<Status>().map_err(|_| {
                TrackerError::invalid_input("status").with_reason(format!(
                    "Invalid status: {v}. Must be 'planned', 'in-progress', 'completed', or 'delayed'"
                ))
            })
        })
        .transpose()
}

fn optional_percentage(value: Option<i64>) -> Result<Option<u8>> {
    value
        .map(|v| {
            u8::try_from(v)
                .ok()
                .filter(|p| *p <= 100)
                .ok_or_else(|| {
                    TrackerError::invalid_input("completionPercentage")
                        .with_reason(format!("{v} is outside 0-100"))
                })
        })
        .transpose()
}

/// Parses an ISO calendar date. Full ISO timestamps (as sent by browsers)
/// are accepted and reduced to their UTC date.
pub fn parse_date(field: &str, value: &str) -> Result<Date> {
    let value = value.trim();
    if let Ok(date) = value.parse::<Date>() {
        return Ok(date);
    }
    value
        .parse::<Timestamp>()
        .map(|ts| ts.to_zoned(TimeZone::UTC).date())
        .map_err(|_| {
            TrackerError::invalid_input(field)
                .with_reason(format!("'{value}' is not an ISO date (YYYY-MM-DD)"))
        })
}
