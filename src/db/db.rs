use crate::db::migrations::init_with_migrations;
use crate::libs::data_storage::DataStorage;
use anyhow::Result;
use rusqlite::Connection;
use std::env;
use std::path::{Path, PathBuf};

pub const DB_FILE_NAME: &str = "tasks.db";

/// Overrides the database location, e.g. from a `.env` file.
pub const DB_PATH_ENV: &str = "TASKS_DB_PATH";

/// An open SQLite connection whose schema has been migrated.
pub struct Db {
    pub conn: Connection,
}

impl Db {
    /// Opens the database of `storage` and brings its schema up to date.
    pub fn open_at(storage: &DataStorage) -> Result<Db> {
        Ok(Self::open(Self::path_in(storage)?)?)
    }

    pub fn open(path: impl AsRef<Path>) -> rusqlite::Result<Db> {
        let mut conn = Connection::open(path)?;
        init_with_migrations(&mut conn)?;

        Ok(Db { conn })
    }

    /// In-memory database with the full schema.
    pub fn open_in_memory() -> rusqlite::Result<Db> {
        let mut conn = Connection::open_in_memory()?;
        init_with_migrations(&mut conn)?;

        Ok(Db { conn })
    }

    /// Opens the default database without applying migrations.
    pub fn new_without_migrations() -> Result<Connection> {
        Ok(Connection::open(Self::path_in(&DataStorage::new())?)?)
    }

    /// `TASKS_DB_PATH` when set, otherwise `tasks.db` in the data directory.
    pub fn path_in(storage: &DataStorage) -> Result<PathBuf> {
        match env::var(DB_PATH_ENV) {
            Ok(path) if !path.trim().is_empty() => Ok(PathBuf::from(path)),
            _ => storage.get_path(DB_FILE_NAME),
        }
    }
}
