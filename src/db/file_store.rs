//! Shared machinery for the flat-file backends.
//!
//! Both the CSV and the JSON backend keep every task in one file and follow the
//! same discipline: take the in-process mutex, take the cross-process file lock,
//! read the whole file, modify the list in memory, and write the whole list to a
//! temporary file that is then renamed over the original. Only the encoding
//! differs, which is what [`TaskFormat`] abstracts.

use super::file_lock::FileLock;
use super::repository::{match_prefix, stored_id, Repository};
use crate::libs::error::{StorageError, TaskError};
use crate::libs::task::{Task, TaskFilter, TaskProjection, TaskSelector};
use parking_lot::Mutex;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::debug;
use uuid::Uuid;

/// On-disk encoding of a complete task list.
pub trait TaskFormat: Default + Send + Sync {
    /// Format name used in log events.
    const NAME: &'static str;

    /// Content of a freshly created, empty store.
    const EMPTY: &'static [u8];

    fn decode(&self, reader: BufReader<File>) -> Result<Vec<Task>, StorageError>;

    fn encode(&self, writer: &mut dyn Write, tasks: &[Task]) -> Result<(), StorageError>;
}

/// A [`Repository`] over a single file in format `F`.
///
/// Every operation loads the whole file. Mutations write the whole list back
/// before returning, so two instances on the same path always agree.
///
/// ```rust,no_run
/// use chrono::Utc;
/// use tasks::db::csv_store::CsvRepository;
/// use tasks::db::repository::Repository;
/// use tasks::libs::task::Task;
///
/// let repository = CsvRepository::new("/tmp/tasks.csv");
/// let mut task = Task::new("buy milk", Utc::now());
/// repository.save(&mut task)?;
/// # Ok::<(), tasks::libs::error::TaskError>(())
/// ```
pub struct FileRepository<F: TaskFormat> {
    path: PathBuf,
    lock: Mutex<()>,
    format: F,
}

impl<F: TaskFormat> FileRepository<F> {
    /// Nothing touches the disk until the first operation.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileRepository {
            path: path.into(),
            lock: Mutex::new(()),
            format: F::default(),
        }
    }

    fn read<T>(&self, f: impl FnOnce(Vec<Task>) -> Result<T, TaskError>) -> Result<T, TaskError> {
        let _guard = self.lock.lock();
        let _file_lock = self.open()?;

        let tasks = self.read_tasks()?;
        f(tasks)
    }

    fn modify<T>(&self, f: impl FnOnce(&mut Vec<Task>) -> Result<T, TaskError>) -> Result<T, TaskError> {
        let _guard = self.lock.lock();
        let _file_lock = self.open()?;

        let mut tasks = self.read_tasks()?;
        let result = f(&mut tasks)?;
        self.write_tasks(&tasks)?;
        Ok(result)
    }

    fn dir(&self) -> &Path {
        match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        }
    }

    /// Takes the file lock, creating the directory and an empty store first
    /// when needed.
    fn open(&self) -> Result<FileLock, StorageError> {
        fs::create_dir_all(self.dir())?;
        let file_lock = FileLock::acquire(&self.path)?;
        if !self.path.exists() {
            debug!(format = F::NAME, path = %self.path.display(), "creating task file");
            fs::write(&self.path, F::EMPTY)?;
        }
        Ok(file_lock)
    }

    fn read_tasks(&self) -> Result<Vec<Task>, StorageError> {
        let file = File::open(&self.path)?;
        self.format.decode(BufReader::new(file))
    }

    fn write_tasks(&self, tasks: &[Task]) -> Result<(), StorageError> {
        let mut tmp = NamedTempFile::new_in(self.dir())?;
        {
            let mut writer = BufWriter::new(tmp.as_file_mut());
            self.format.encode(&mut writer, tasks)?;
            writer.flush()?;
        }
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path)?;

        debug!(format = F::NAME, count = tasks.len(), "task file rewritten");
        Ok(())
    }
}

impl<F: TaskFormat> Repository for FileRepository<F> {
    fn save(&self, task: &mut Task) -> Result<(), TaskError> {
        let id = task.id.unwrap_or_else(Uuid::new_v4);
        let record = Task {
            id: Some(id),
            ..task.clone()
        };

        self.modify(|tasks| {
            if tasks.iter().any(|t| t.id == Some(id)) {
                return Err(TaskError::AlreadyExists(id));
            }
            tasks.push(record);
            Ok(())
        })?;

        task.id = Some(id);
        debug!(format = F::NAME, %id, "task saved");
        Ok(())
    }

    fn get_by_id(&self, id: Uuid) -> Result<Task, TaskError> {
        self.read(|tasks| {
            tasks
                .into_iter()
                .find(|t| t.id == Some(id))
                .ok_or_else(|| TaskError::not_found(id))
        })
    }

    fn get_by_partial_id(&self, prefix: &str) -> Result<Task, TaskError> {
        self.read(|tasks| match_prefix(prefix, &tasks))
    }

    fn list(&self, selector: &TaskSelector, filter: &TaskFilter) -> Result<Vec<TaskProjection>, TaskError> {
        self.read(|tasks| {
            Ok(tasks
                .iter()
                .filter(|t| filter.matches(t))
                .map(|t| selector.project(t))
                .collect())
        })
    }

    fn update(&self, task: &Task) -> Result<(), TaskError> {
        let id = stored_id(task)?;
        self.modify(|tasks| {
            let slot = tasks
                .iter_mut()
                .find(|t| t.id == Some(id))
                .ok_or_else(|| TaskError::not_found(id))?;
            *slot = task.clone();
            Ok(())
        })
    }

    fn delete(&self, task: &Task) -> Result<(), TaskError> {
        let id = stored_id(task)?;
        self.modify(|tasks| {
            let index = tasks
                .iter()
                .position(|t| t.id == Some(id))
                .ok_or_else(|| TaskError::not_found(id))?;
            tasks.remove(index);
            Ok(())
        })
    }
}
