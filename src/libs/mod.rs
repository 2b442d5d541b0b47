//! Core library modules for the tasks application.
//!
//! - **Domain**: [`task`] (record, selector, filter), [`error`]
//! - **Service**: [`service`], the only layer commands talk to
//! - **Infrastructure**: [`config`], [`data_storage`], [`messages`]
//! - **Presentation**: [`view`], [`human_time`]
//!
//! ```rust,no_run
//! use chrono::Utc;
//! use tasks::db::open_repository;
//! use tasks::libs::{config::Config, data_storage::DataStorage, service::TaskService};
//!
//! let config = Config::read()?;
//! let service = TaskService::new(open_repository(config.storage_mode, &DataStorage::new())?);
//! let task = service.create("Pay rent", Utc::now())?;
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod config;
pub mod data_storage;
pub mod error;
pub mod human_time;
pub mod messages;
pub mod service;
pub mod task;
pub mod view;
