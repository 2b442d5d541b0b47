//! Storage layer for the tasks application.
//!
//! One [`Repository`](repository::Repository) contract, three backends:
//!
//! - **CSV** ([`csv_store`]): one headerless row per task
//! - **JSON** ([`json_store`]): one array holding every task
//! - **SQL** ([`tasks`]): a SQLite `tasks` table behind versioned migrations
//!
//! The flat-file backends share [`file_store`]: whole-file read, in-memory
//! change, temp-file write and atomic rename, serialized by an in-process mutex
//! and a cross-process [`file_lock`].
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tasks::db::{open_repository, repository::Repository};
//! use tasks::libs::{config::StorageMode, data_storage::DataStorage};
//!
//! let repository = open_repository(StorageMode::Json, &DataStorage::new())?;
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod csv_store;
pub mod db;
pub mod file_lock;
pub mod file_store;
pub mod json_store;
pub mod migrations;
pub mod repository;
pub mod tasks;

use crate::libs::config::StorageMode;
use crate::libs::data_storage::DataStorage;
use anyhow::Result;
use csv_store::{CsvRepository, CSV_FILE_NAME};
use json_store::{JsonRepository, JSON_FILE_NAME};
use repository::Repository;
use tasks::SqlRepository;

/// Builds the repository for `mode` inside the data directory.
pub fn open_repository(mode: StorageMode, storage: &DataStorage) -> Result<Box<dyn Repository>> {
    let repository: Box<dyn Repository> = match mode {
        StorageMode::Csv => Box::new(CsvRepository::new(storage.get_path(CSV_FILE_NAME)?)),
        StorageMode::Json => Box::new(JsonRepository::new(storage.get_path(JSON_FILE_NAME)?)),
        StorageMode::Sql => Box::new(SqlRepository::new(db::Db::open_at(storage)?)),
    };
    tracing::debug!(?mode, "repository opened");

    Ok(repository)
}
