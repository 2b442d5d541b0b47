use crate::libs::error::TaskError;
use crate::libs::task::{Task, TaskFilter, TaskProjection, TaskSelector};
use uuid::Uuid;

/// Persistence contract implemented by every storage backend.
///
/// Implementations serialize their own access; all methods take `&self` so a
/// single boxed repository can be owned by the service for the whole process.
pub trait Repository: Send + Sync {
    /// Assigns `task.id` when unset and appends a new record.
    ///
    /// Fails with [`TaskError::AlreadyExists`] rather than overwrite a stored
    /// record carrying the same id.
    fn save(&self, task: &mut Task) -> Result<(), TaskError>;

    /// Fails with [`TaskError::NotFound`] when no record carries `id`.
    fn get_by_id(&self, id: Uuid) -> Result<Task, TaskError>;

    /// Resolves a task by a prefix of its hyphenated id.
    ///
    /// Succeeds only on exactly one match; more than one yields
    /// [`TaskError::AmbiguousMatch`]. An empty prefix matches every task.
    fn get_by_partial_id(&self, prefix: &str) -> Result<Task, TaskError>;

    /// Tasks accepted by `filter`, in insertion order, projected by `selector`.
    fn list(&self, selector: &TaskSelector, filter: &TaskFilter) -> Result<Vec<TaskProjection>, TaskError>;

    /// Replaces the whole stored record with the same id.
    fn update(&self, task: &Task) -> Result<(), TaskError>;

    /// Permanently removes the record with `task.id`.
    ///
    /// Deleting a task that is no longer stored is [`TaskError::NotFound`],
    /// so a second delete of the same task fails.
    fn delete(&self, task: &Task) -> Result<(), TaskError>;
}

/// Id of a task that is expected to be stored already.
pub(crate) fn stored_id(task: &Task) -> Result<Uuid, TaskError> {
    task.id.ok_or_else(|| TaskError::not_found("<unassigned>"))
}

/// Picks the single task whose id starts with `prefix`.
pub(crate) fn match_prefix<'a, I>(prefix: &str, tasks: I) -> Result<Task, TaskError>
where
    I: IntoIterator<Item = &'a Task>,
{
    // An empty prefix matches every task.
    let prefix = prefix.trim().to_lowercase();
    let mut found: Option<&Task> = None;
    let mut matches = 0;

    for task in tasks {
        if task.id_string().starts_with(&prefix) {
            found = Some(task);
            matches += 1;
        }
    }

    match (matches, found) {
        (1, Some(task)) => Ok(task.clone()),
        (0, _) | (_, None) => Err(TaskError::not_found(prefix)),
        _ => Err(TaskError::AmbiguousMatch { prefix, matches }),
    }
}
