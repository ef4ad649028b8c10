//! Markdown display helpers and result wrappers.
//!
//! Domain models implement [`std::fmt::Display`] (see [`models`]) producing
//! markdown that the CLI renders through its terminal renderer. Collections
//! and operation outcomes get newtype wrappers so the same data can be framed
//! differently depending on context:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Wrappers        │    │   Markdown      │
//! │ (Milestone, …)  │───▶│ (Milestones,    │───▶│    Output       │
//! │                 │    │  CreateResult)  │    │  (terminal)     │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ```rust
//! use derrick_core::display::OperationStatus;
//!
//! let status = OperationStatus::success("Deleted milestone 3".to_string());
//! assert_eq!(status.to_string(), "Success: Deleted milestone 3\n");
//! ```

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;
pub mod status;

pub use collections::Milestones;
pub use datetime::LocalDateTime;
pub use results::{CreateResult, UpdateResult};
pub use status::OperationStatus;
