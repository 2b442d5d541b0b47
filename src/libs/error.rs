//! Error types shared by the repositories and the task service.

use std::fmt;
use thiserror::Error;
use uuid::Uuid;

/// Failures of the storage medium itself.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("database error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// A stored value could not be mapped back to a task.
    #[error("corrupt record: {0}")]
    Corrupt(String),
}

impl From<tempfile::PersistError> for StorageError {
    fn from(e: tempfile::PersistError) -> Self {
        StorageError::Io(e.error)
    }
}

/// Errors returned by every [`Repository`](crate::db::repository::Repository).
#[derive(Debug, Error)]
pub enum TaskError {
    #[error("task not found: {0}")]
    NotFound(String),

    #[error("invalid task: {0}")]
    Validation(String),

    #[error("{matches} tasks found with partial ID {prefix}")]
    AmbiguousMatch { prefix: String, matches: usize },

    #[error("task {0} already exists")]
    AlreadyExists(Uuid),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl TaskError {
    pub fn not_found(id: impl fmt::Display) -> Self {
        TaskError::NotFound(id.to_string())
    }
}

/// Service operation names carried by [`ServiceError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Create,
    GetById,
    GetByPartialId,
    List,
    Complete,
    Delete,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::Create => "Create",
            Operation::GetById => "GetByID",
            Operation::GetByPartialId => "GetByPartialID",
            Operation::List => "List",
            Operation::Complete => "Complete",
            Operation::Delete => "Delete",
        };
        f.write_str(name)
    }
}

/// A repository or validation failure tagged with the service operation.
#[derive(Debug, Error)]
#[error("{op}: {source}")]
pub struct ServiceError {
    pub op: Operation,
    #[source]
    pub source: TaskError,
}

impl ServiceError {
    pub fn new(op: Operation, source: TaskError) -> Self {
        ServiceError { op, source }
    }

    pub fn kind(&self) -> &TaskError {
        &self.source
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self.source, TaskError::NotFound(_))
    }
}
