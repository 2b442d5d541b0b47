//! Task entity, field selection and list filtering.
//!
//! A [`Task`] is the only record the application persists. Listing goes through
//! two small value objects: [`TaskSelector`] decides which fields are populated
//! on the returned [`TaskProjection`]s, and [`TaskFilter`] decides which tasks
//! are returned at all.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// A unit of work with a description and a due date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Assigned by the repository on first save.
    pub id: Option<Uuid>,
    pub description: String,
    pub is_completed: bool,
    pub created_at: DateTime<Utc>,
    pub due_date: DateTime<Utc>,
}

impl Task {
    pub fn new(description: &str, due_date: DateTime<Utc>) -> Self {
        Task {
            id: None,
            description: description.to_string(),
            is_completed: false,
            created_at: Utc::now(),
            due_date,
        }
    }

    /// Rejects tasks that could never be shown meaningfully.
    pub fn validate(&self) -> Result<(), String> {
        if self.description.trim().is_empty() {
            return Err("task description cannot be empty".to_string());
        }
        Ok(())
    }

    /// Hyphenated lowercase form used for prefix matching and display.
    pub fn id_string(&self) -> String {
        self.id.map(|id| id.to_string()).unwrap_or_default()
    }

    pub fn short_id(&self) -> String {
        self.id_string().chars().take(8).collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
#[value(rename_all = "snake_case")]
pub enum TaskField {
    Id,
    Description,
    IsCompleted,
    CreatedAt,
    DueDate,
}

impl TaskField {
    pub const ALL: [TaskField; 5] = [
        TaskField::Id,
        TaskField::Description,
        TaskField::IsCompleted,
        TaskField::CreatedAt,
        TaskField::DueDate,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TaskField::Id => "id",
            TaskField::Description => "description",
            TaskField::IsCompleted => "is_completed",
            TaskField::CreatedAt => "created_at",
            TaskField::DueDate => "due_date",
        }
    }
}

impl fmt::Display for TaskField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fields a caller wants populated when listing.
///
/// Selection never changes which records come back, only which slots of each
/// [`TaskProjection`] are filled. An empty selector selects every field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskSelector {
    fields: Vec<TaskField>,
}

impl TaskSelector {
    pub fn new(fields: &[TaskField]) -> Self {
        let mut selector = TaskSelector::default();
        for field in fields {
            if !selector.fields.contains(field) {
                selector.fields.push(*field);
            }
        }
        selector
    }

    pub fn all() -> Self {
        TaskSelector::new(&TaskField::ALL)
    }

    pub fn is_selected(&self, field: TaskField) -> bool {
        self.fields.is_empty() || self.fields.contains(&field)
    }

    /// Selected fields in display order.
    pub fn fields(&self) -> Vec<TaskField> {
        if self.fields.is_empty() {
            TaskField::ALL.to_vec()
        } else {
            self.fields.clone()
        }
    }

    pub fn project(&self, task: &Task) -> TaskProjection {
        TaskProjection {
            id: self.is_selected(TaskField::Id).then_some(task.id).flatten(),
            description: self.is_selected(TaskField::Description).then(|| task.description.clone()),
            is_completed: self.is_selected(TaskField::IsCompleted).then_some(task.is_completed),
            created_at: self.is_selected(TaskField::CreatedAt).then_some(task.created_at),
            due_date: self.is_selected(TaskField::DueDate).then_some(task.due_date),
        }
    }
}

/// Row predicate for listing. The default hides completed tasks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskFilter {
    pub include_completed: bool,
}

impl TaskFilter {
    pub fn new(include_completed: bool) -> Self {
        TaskFilter { include_completed }
    }

    pub fn matches(&self, task: &Task) -> bool {
        self.include_completed || !task.is_completed
    }
}

/// A listed task with only the selected fields populated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TaskProjection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_completed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,
}
