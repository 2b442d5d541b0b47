//! Display text for [`Message`].
//!
//! All user-facing wording is kept in this one match, so changing how the
//! application talks to the user never means hunting through command code.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === TASK MESSAGES ===
            Message::TaskCreated(id) => format!("Task created with ID: {}", id),
            Message::TaskCompleted(id) => format!("Task {} marked as completed", id),
            Message::TaskAlreadyCompleted(id) => format!("Task {} was already completed", id),
            Message::TaskDeleted(id) => format!("Task {} deleted", id),
            Message::TasksNotFound => "No tasks found.".to_string(),
            Message::TaskDetailsHeader => "Task:".to_string(),
            Message::ConfirmDeleteTask(description) => format!("Delete task '{}'? This cannot be undone", description),
            Message::DeleteCancelled => "Nothing deleted.".to_string(),
            Message::InvalidDueDate(phrase) => format!("Invalid due date '{}'. Try 'tomorrow', 'in 3 days' or an RFC 3339 timestamp", phrase),

            // === STORAGE MESSAGES ===
            Message::StorageModeUpdated(mode) => format!("Storage mode set to {}", mode),
            Message::CsvRowsSkipped(count) => format!("Skipped {} malformed CSV row(s); they will be dropped on the next write", count),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration removed, defaults apply".to_string(),
            Message::ConfigModuleStorage => "Storage".to_string(),
            Message::ConfigModuleColumns => "List columns".to_string(),
            Message::PromptStorageMode => "Select the storage backend".to_string(),
            Message::PromptDisplayColumns => "Select the columns shown by `list` (space to toggle)".to_string(),

            // === DATABASE MESSAGES ===
            Message::DatabaseVersion(version) => format!("Database schema version: {}", version),
            Message::DatabaseNeedsUpdate => "Database has pending migrations".to_string(),
            Message::DatabaseUpToDate => "Database is up to date".to_string(),
            Message::RunningMigration(version, name) => format!("Running migration v{}: {}", version, name),
            Message::MigrationHistory => "Migration history:".to_string(),
        };

        write!(f, "{}", text)
    }
}
