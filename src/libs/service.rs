//! Task service: the only entry point above the repositories.
//!
//! The service owns one boxed [`Repository`] for the life of the process,
//! validates input, leaves identity assignment to the repository, and tags every
//! failure with the operation that produced it.
//!
//! ```rust,no_run
//! use chrono::{Duration, Utc};
//! use tasks::db::json_store::JsonRepository;
//! use tasks::libs::service::TaskService;
//!
//! let service = TaskService::new(Box::new(JsonRepository::new("tasks.json")));
//! let task = service.create("buy milk", Utc::now() + Duration::days(1))?;
//! service.complete(task.id.unwrap())?;
//! # Ok::<(), tasks::libs::error::ServiceError>(())
//! ```

use super::error::{Operation, ServiceError, TaskError};
use super::task::{Task, TaskFilter, TaskProjection, TaskSelector};
use crate::db::repository::Repository;
use chrono::{DateTime, Utc};
use tracing::debug;
use uuid::Uuid;

pub struct TaskService {
    repository: Box<dyn Repository>,
}

impl TaskService {
    pub fn new(repository: Box<dyn Repository>) -> Self {
        TaskService { repository }
    }

    pub fn create(&self, description: &str, due_date: DateTime<Utc>) -> Result<Task, ServiceError> {
        let mut task = Task::new(description, due_date);
        task.validate()
            .map_err(|e| ServiceError::new(Operation::Create, TaskError::Validation(e)))?;

        self.repository
            .save(&mut task)
            .map_err(|e| ServiceError::new(Operation::Create, e))?;

        debug!(id = %task.id_string(), "task created");
        Ok(task)
    }

    pub fn get_by_id(&self, id: Uuid) -> Result<Task, ServiceError> {
        self.repository
            .get_by_id(id)
            .map_err(|e| ServiceError::new(Operation::GetById, e))
    }

    pub fn get_by_partial_id(&self, prefix: &str) -> Result<Task, ServiceError> {
        self.repository
            .get_by_partial_id(prefix)
            .map_err(|e| ServiceError::new(Operation::GetByPartialId, e))
    }

    /// Full UUIDs are looked up directly, anything else as an id prefix.
    pub fn resolve(&self, reference: &str) -> Result<Task, ServiceError> {
        match Uuid::parse_str(reference.trim()) {
            Ok(id) => self.get_by_id(id),
            Err(_) => self.get_by_partial_id(reference),
        }
    }

    /// `None` falls back to every field and to hiding completed tasks.
    pub fn list(&self, selector: Option<TaskSelector>, filter: Option<TaskFilter>) -> Result<Vec<TaskProjection>, ServiceError> {
        let selector = selector.unwrap_or_default();
        let filter = filter.unwrap_or_default();

        self.repository
            .list(&selector, &filter)
            .map_err(|e| ServiceError::new(Operation::List, e))
    }

    /// Marks the task completed. Two processes completing the same task race
    /// with last-write-wins, which is harmless for this flag.
    pub fn complete(&self, id: Uuid) -> Result<Task, ServiceError> {
        let wrap = |e| ServiceError::new(Operation::Complete, e);

        let mut task = self.repository.get_by_id(id).map_err(wrap)?;
        task.is_completed = true;
        self.repository.update(&task).map_err(wrap)?;

        debug!(%id, "task completed");
        Ok(task)
    }

    /// Removes the task and returns the record that was deleted.
    pub fn delete(&self, id: Uuid) -> Result<Task, ServiceError> {
        let wrap = |e| ServiceError::new(Operation::Delete, e);

        let task = self.repository.get_by_id(id).map_err(wrap)?;
        self.repository.delete(&task).map_err(wrap)?;

        debug!(%id, "task deleted");
        Ok(task)
    }
}
