//! High-level async tracker API for milestones and tasks.
//!
//! [`Tracker`] is the service layer between front ends (CLI, REST) and the
//! SQLite store:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Front ends     │    │    Tracker      │    │    Database     │
//! │ (CLI, REST)     │───▶│ validate, run,  │───▶│   (via db/)     │
//! │                 │    │ publish event   │    │                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! Every operation validates its parameters before touching storage, runs
//! one blocking database unit of work on tokio's blocking pool, and on
//! success hands a [`TrackerEvent`](crate::events::TrackerEvent) to the
//! injected [`EventPublisher`]. Progress is derived from the current rows on
//! every read.
//!
//! # Usage
//!
//! ```rust,no_run
//! use derrick_core::{params::{CreateMilestone, CreateTask}, TrackerBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let tracker = TrackerBuilder::new()
//!     .with_database_path(Some("derrick.db"))
//!     .build()
//!     .await?;
//!
//! let milestone = tracker
//!     .create_milestone(&CreateMilestone {
//!         project_id: "well-7".to_string(),
//!         name: Some("Site Prep".to_string()),
//!         description: Some("Clear and level the pad".to_string()),
//!         planned_date: Some("2024-01-01".to_string()),
//!         status: None,
//!     })
//!     .await?;
//!
//! tracker
//!     .create_task(
//!         milestone.id,
//!         &CreateTask {
//!             name: Some("Survey".to_string()),
//!             start_date: Some("2024-01-01".to_string()),
//!             end_date: Some("2024-01-05".to_string()),
//!             ..Default::default()
//!         },
//!     )
//!     .await?;
//!
//! let progress = tracker.project_progress("well-7").await?;
//! println!("{}", progress);
//! # Ok(())
//! # }
//! ```

use std::{path::PathBuf, sync::Arc};

use tokio::task;

use crate::{
    db::Database,
    error::{Result, TrackerError},
    events::{EventPublisher, TrackerEvent},
    models::StatusPolicy,
};

pub mod builder;
pub mod milestone_ops;
pub mod task_ops;


pub use builder::TrackerBuilder;

/// Main tracker interface for managing milestones and tasks.
pub struct Tracker {
    pub(crate) db_path: PathBuf,
    pub(crate) policy: StatusPolicy,
    pub(crate) publisher: Arc<dyn EventPublisher>,
}

impl Tracker {
    pub(crate) fn new(
        db_path: PathBuf,
        policy: StatusPolicy,
        publisher: Arc<dyn EventPublisher>,
    ) -> Self {
        Self {
            db_path,
            policy,
            publisher,
        }
    }

    /// The status policy applied to updates.
    pub fn status_policy(&self) -> StatusPolicy {
        self.policy
    }

    /// Runs `f` against a fresh connection on the blocking pool.
    async fn with_database<T, F>(&self, f: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut Database) -> Result<T> + Send + 'static,
    {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            f(&mut db)
        })
        .await
        .map_err(TrackerError::join_error)?
    }

    fn publish(&self, event: TrackerEvent) {
        self.publisher.publish(event);
    }
}
