//! Core library for the Derrick project milestone tracker.
//!
//! This crate provides the business logic for tracking project milestones
//! and the tasks under them: SQLite persistence, data models, progress
//! derivation, status policy, change events, and error handling.
//!
//! # Display Architecture
//!
//! The crate implements a Display-based architecture for formatting output:
//!
//! - **Domain Models** ([`models`]): Implement [`std::fmt::Display`] for direct
//!   formatting
//! - **Display Wrappers** ([`display`]): Provide contextual and specialized
//!   formatting
//! - **Terminal Rendering**: Rich markdown output via the CLI's terminal
//!   renderer
//!
//! The same models serialize to the camelCase JSON served by the REST API.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use derrick_core::{params::CreateMilestone, TrackerBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let tracker = TrackerBuilder::new()
//!     .with_database_path(Some("test.db"))
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
//! println!("Created milestone: {}", milestone);
//!
//! for milestone in &tracker.list_milestones("well-7").await? {
//!     println!("Milestone: {}", milestone.name);
//! }
//! # Ok(())
//! # }
//! ```

pub mod db;
pub mod display;
pub mod error;
pub mod events;
pub mod models;
pub mod params;
pub mod tracker;

// Re-export commonly used types
pub use db::Database;
pub use display::{CreateResult, LocalDateTime, Milestones, OperationStatus, UpdateResult};
pub use error::{ErrorKind, Result, TrackerError};
pub use events::{
    BroadcastPublisher, EntityKind, EventAction, EventPublisher, NoopPublisher, RecordingPublisher,
    TrackerEvent,
};
pub use models::{
    Milestone, MilestoneProgress, MilestoneTask, ProgressSummary, ProjectProgress, Status,
    StatusPolicy,
};
pub use params::{CreateMilestone, CreateTask, UpdateMilestone, UpdateTask};
pub use tracker::{Tracker, TrackerBuilder};
