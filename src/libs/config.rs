//! Configuration management for the tasks application.
//!
//! The configuration is a small JSON file in the data directory holding the
//! storage backend to use and the columns `list` shows by default.
//!
//! ```json
//! {
//!   "storage_mode": "json",
//!   "display_columns": ["id", "description", "due_date"]
//! }
//! ```
//!
//! A missing file is not an error: [`Config::read`] falls back to
//! [`Config::default`], which selects the SQL backend and every column.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tasks::libs::config::{Config, StorageMode};
//!
//! let mut config = Config::read()?;
//! config.update_storage_mode(StorageMode::Csv)?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use super::task::{TaskField, TaskSelector};
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, MultiSelect, Select};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::{self, File};
use std::path::Path;

pub const CONFIG_FILE_NAME: &str = "config.json";

/// Storage backend selected at startup.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum StorageMode {
    /// One headerless CSV row per task
    Csv,
    /// A JSON array of tasks
    Json,
    /// A SQLite database
    #[default]
    Sql,
}

impl StorageMode {
    pub const ALL: [StorageMode; 3] = [StorageMode::Csv, StorageMode::Json, StorageMode::Sql];

    pub fn as_str(&self) -> &'static str {
        match self {
            StorageMode::Csv => "csv",
            StorageMode::Json => "json",
            StorageMode::Sql => "sql",
        }
    }
}

impl fmt::Display for StorageMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub storage_mode: StorageMode,

    /// Columns `list` shows when none are given; empty means all.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub display_columns: Vec<TaskField>,
}

impl Config {
    /// Reads the configuration from the data directory, or the defaults when
    /// no file exists yet.
    pub fn read() -> Result<Config> {
        Self::read_from(DataStorage::new().get_path(CONFIG_FILE_NAME)?)
    }

    pub fn read_from(path: impl AsRef<Path>) -> Result<Config> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(path)?;
        if config_str.trim().is_empty() {
            return Ok(Config::default());
        }
        Ok(serde_json::from_str(&config_str)?)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(DataStorage::new().get_path(CONFIG_FILE_NAME)?)
    }

    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<()> {
        let config_file = File::create(path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Removes the configuration file; a missing file is not an error.
    pub fn delete() -> Result<()> {
        let path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }

    pub fn update_storage_mode(&mut self, mode: StorageMode) -> Result<()> {
        self.storage_mode = mode;
        self.save()
    }

    /// Default selector for listing.
    pub fn selector(&self) -> TaskSelector {
        TaskSelector::new(&self.display_columns)
    }

    /// Interactive setup: storage backend and default columns.
    pub fn init() -> Result<Self> {
        // A broken config file should not block fixing it here.
        let mut config = Self::read().unwrap_or_default();

        msg_print!(Message::ConfigModuleStorage);
        let modes: Vec<&str> = StorageMode::ALL.iter().map(StorageMode::as_str).collect();
        let current = StorageMode::ALL.iter().position(|m| *m == config.storage_mode).unwrap_or(0);
        let selected = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptStorageMode.to_string())
            .items(&modes)
            .default(current)
            .interact()?;
        config.storage_mode = StorageMode::ALL[selected];

        msg_print!(Message::ConfigModuleColumns);
        let selector = config.selector();
        let columns: Vec<&str> = TaskField::ALL.iter().map(TaskField::as_str).collect();
        let defaults: Vec<bool> = TaskField::ALL.iter().map(|f| selector.is_selected(*f)).collect();
        let picked = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptDisplayColumns.to_string())
            .items(&columns)
            .defaults(&defaults)
            .interact()?;

        // Selecting every column is stored as "no preference".
        config.display_columns = if picked.len() == TaskField::ALL.len() {
            Vec::new()
        } else {
            picked.into_iter().map(|i| TaskField::ALL[i]).collect()
        };

        Ok(config)
    }
}
