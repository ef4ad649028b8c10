//! Error types for the tracker library.

use std::path::PathBuf;

use thiserror::Error;

/// Comprehensive error type for all tracker operations.
#[derive(Error, Debug)]
pub enum TrackerError {
    /// Database connection or query errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// Milestone not found (or soft-deleted) for the given ID
    #[error("Milestone with ID {id} not found")]
    MilestoneNotFound { id: u64 },
    /// Task not found within the given milestone
    #[error("Task with ID {id} not found in milestone {milestone_id}")]
    TaskNotFound { milestone_id: u64, id: u64 },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
    /// A blocking database task panicked or was cancelled
    #[error("Background task failed: {0}")]
    TaskJoin(#[source] tokio::task::JoinError),
}

/// Coarse classification of a [`TrackerError`], used by front ends to pick a
/// response status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Missing or malformed input; the caller can fix and resubmit.
    Validation,
    /// A referenced milestone or task does not exist.
    NotFound,
    /// Anything else (storage unavailable, runtime failures).
    Unexpected,
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> TrackerError {
        TrackerError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl TrackerError {
    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Creates a new database error with additional context.
    pub fn database_error(message: &str, source: rusqlite::Error) -> Self {
        Self::Database {
            message: message.to_string(),
            source,
        }
    }

    /// Wraps a failed blocking task join.
    pub(crate) fn join_error(e: tokio::task::JoinError) -> Self {
        Self::TaskJoin(e)
    }

    /// Classifies the error for callers that only care about its category.
    pub fn kind(&self) -> ErrorKind {
        match self {
            TrackerError::InvalidInput { .. } => ErrorKind::Validation,
            TrackerError::MilestoneNotFound { .. } | TrackerError::TaskNotFound { .. } => {
                ErrorKind::NotFound
            }
            _ => ErrorKind::Unexpected,
        }
    }
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| TrackerError::database_error(message, e))
    }
}

/// Result type alias for tracker operations
pub type Result<T> = std::result::Result<T, TrackerError>;
