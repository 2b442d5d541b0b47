//! SQLite storage backend.
//!
//! Statements are parameterized constants in the style of the rest of the
//! database layer. Rows are read into [`TaskRow`] and mapped to the domain
//! [`Task`], so a corrupt id surfaces as a storage error instead of a panic.

use super::db::Db;
use super::repository::{match_prefix, stored_id, Repository};
use crate::libs::error::{StorageError, TaskError};
use crate::libs::task::{Task, TaskFilter, TaskProjection, TaskSelector};
use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use rusqlite::{params, Connection, ErrorCode, OptionalExtension, Row};
use std::path::Path;
use tracing::debug;
use uuid::Uuid;

const TASK_COLUMNS: &str = "id, description, is_completed, created_at, due_date";
const INSERT_TASK: &str = "INSERT INTO tasks (id, description, is_completed, created_at, due_date) VALUES (?1, ?2, ?3, ?4, ?5)";
const UPDATE_TASK: &str = "UPDATE tasks SET description = ?2, is_completed = ?3, created_at = ?4, due_date = ?5 WHERE id = ?1";
const DELETE_TASK: &str = "DELETE FROM tasks WHERE id = ?1";
const WHERE_ID: &str = "WHERE id = ?1";
const WHERE_ID_PREFIX: &str = "WHERE substr(id, 1, length(?1)) = ?1";
const WHERE_PENDING: &str = "WHERE is_completed = FALSE";
const ORDER_BY_INSERTION: &str = "ORDER BY rowid";

/// A `tasks` table row before it is mapped to the domain type.
#[derive(Debug)]
struct TaskRow {
    id: String,
    description: String,
    is_completed: bool,
    created_at: DateTime<Utc>,
    due_date: DateTime<Utc>,
}

impl TaskRow {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(TaskRow {
            id: row.get(0)?,
            description: row.get(1)?,
            is_completed: row.get(2)?,
            created_at: row.get(3)?,
            due_date: row.get(4)?,
        })
    }

    fn into_task(self) -> Result<Task, StorageError> {
        let id = Uuid::parse_str(&self.id).map_err(|e| StorageError::Corrupt(format!("task id {:?}: {}", self.id, e)))?;

        Ok(Task {
            id: Some(id),
            description: self.description,
            is_completed: self.is_completed,
            created_at: self.created_at,
            due_date: self.due_date,
        })
    }
}

/// [`Repository`] over the `tasks` table of a migrated SQLite database.
///
/// The connection sits behind a mutex so the repository is `Sync`. Access
/// from other processes is serialized by SQLite itself.
pub struct SqlRepository {
    conn: Mutex<Connection>,
}

impl SqlRepository {
    pub fn new(db: Db) -> Self {
        SqlRepository {
            conn: Mutex::new(db.conn),
        }
    }

    pub fn open(path: impl AsRef<Path>) -> Result<Self, StorageError> {
        Ok(Self::new(Db::open(path)?))
    }

    pub fn open_in_memory() -> Result<Self, StorageError> {
        Ok(Self::new(Db::open_in_memory()?))
    }

    fn select(&self, clause: &str, param: Option<&str>) -> Result<Vec<Task>, StorageError> {
        let conn = self.conn.lock();
        let mut stmt = conn.prepare(&format!("SELECT {} FROM tasks {} {}", TASK_COLUMNS, clause, ORDER_BY_INSERTION))?;

        let rows = match param {
            Some(value) => stmt.query_map(params![value], TaskRow::from_row)?.collect::<rusqlite::Result<Vec<_>>>()?,
            None => stmt.query_map([], TaskRow::from_row)?.collect::<rusqlite::Result<Vec<_>>>()?,
        };

        rows.into_iter().map(TaskRow::into_task).collect()
    }
}

impl Repository for SqlRepository {
    fn save(&self, task: &mut Task) -> Result<(), TaskError> {
        let id = task.id.unwrap_or_else(Uuid::new_v4);

        let inserted = self.conn.lock().execute(
            INSERT_TASK,
            params![id.to_string(), task.description, task.is_completed, task.created_at, task.due_date],
        );

        match inserted {
            Ok(_) => {
                task.id = Some(id);
                debug!(%id, "task inserted");
                Ok(())
            }
            Err(rusqlite::Error::SqliteFailure(e, _)) if e.code == ErrorCode::ConstraintViolation => Err(TaskError::AlreadyExists(id)),
            Err(e) => Err(StorageError::from(e).into()),
        }
    }

    fn get_by_id(&self, id: Uuid) -> Result<Task, TaskError> {
        let row = {
            let conn = self.conn.lock();
            conn.query_row(
                &format!("SELECT {} FROM tasks {}", TASK_COLUMNS, WHERE_ID),
                params![id.to_string()],
                TaskRow::from_row,
            )
            .optional()
            .map_err(StorageError::from)?
        };

        match row {
            Some(row) => Ok(row.into_task()?),
            None => Err(TaskError::not_found(id)),
        }
    }

    fn get_by_partial_id(&self, prefix: &str) -> Result<Task, TaskError> {
        let prefix = prefix.trim().to_lowercase();
        let candidates = self.select(WHERE_ID_PREFIX, Some(&prefix))?;
        match_prefix(&prefix, &candidates)
    }

    fn list(&self, selector: &TaskSelector, filter: &TaskFilter) -> Result<Vec<TaskProjection>, TaskError> {
        let clause = if filter.include_completed { "" } else { WHERE_PENDING };
        let tasks = self.select(clause, None)?;

        Ok(tasks.iter().map(|t| selector.project(t)).collect())
    }

    fn update(&self, task: &Task) -> Result<(), TaskError> {
        let id = stored_id(task)?;
        let affected = self
            .conn
            .lock()
            .execute(
                UPDATE_TASK,
                params![id.to_string(), task.description, task.is_completed, task.created_at, task.due_date],
            )
            .map_err(StorageError::from)?;

        if affected == 0 {
            return Err(TaskError::not_found(id));
        }
        Ok(())
    }

    fn delete(&self, task: &Task) -> Result<(), TaskError> {
        let id = stored_id(task)?;
        let affected = self.conn.lock().execute(DELETE_TASK, params![id.to_string()]).map_err(StorageError::from)?;

        if affected == 0 {
            return Err(TaskError::not_found(id));
        }
        Ok(())
    }
}
