//! Data models for milestones and their tasks.
//!
//! A milestone owns its tasks exclusively; no task exists outside a
//! milestone. Display implementations live in [`crate::display::models`] so
//! the structs here stay plain data with serde derives shaped for the JSON
//! contract (camelCase fields, kebab-case statuses, ISO dates).
//!
//! # Examples
//!
//! ```rust
//! use derrick_core::models::{Milestone, ProgressSummary, Status};
//! use jiff::{civil::date, Timestamp};
//!
//! let milestone = Milestone {
//!     id: 1,
//!     project_id: "well-7".to_string(),
//!     name: "Site Prep".to_string(),
//!     description: "Clear and level the pad".to_string(),
//!     planned_date: date(2024, 1, 1),
//!     actual_date: None,
//!     status: Status::Planned,
//!     created_at: Timestamp::now(),
//!     updated_at: Timestamp::now(),
//!     tasks: vec![],
//! };
//!
//! let progress = ProgressSummary::from_milestones(&[milestone]);
//! assert_eq!(progress.overall, 0);
//! ```

pub mod milestone;
pub mod progress;
pub mod requests;
pub mod status;
pub mod task;

#[cfg(test)]
mod tests;

pub use milestone::Milestone;
pub use progress::{MilestoneProgress, ProgressSummary, ProjectProgress};
pub use requests::{MilestoneChanges, NewMilestone, NewTask, TaskChanges};
pub use status::{Status, StatusPolicy};
pub use task::MilestoneTask;
