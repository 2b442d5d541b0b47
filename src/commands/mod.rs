//! Command tree of the `tasks` binary.
//!
//! One module per subcommand, each exposing an `XxxArgs` struct and a
//! `cmd(args)` entry point. Commands that touch tasks get a [`TaskService`]
//! from [`Cli::service`], which honours the global `--storage` override.

pub mod add;
pub mod complete;
pub mod delete;
pub mod init;
pub mod list;
#[cfg(debug_assertions)]
pub mod migrations;
pub mod mode;
pub mod show;

use crate::db::open_repository;
use crate::libs::config::{Config, StorageMode};
use crate::libs::data_storage::DataStorage;
use crate::libs::service::TaskService;
use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Add a task")]
    Add(add::AddArgs),
    #[command(about = "List tasks", visible_alias = "ls")]
    List(list::ListArgs),
    #[command(about = "Show every field of one task")]
    Show(show::ShowArgs),
    #[command(about = "Mark a task as completed", visible_alias = "done")]
    Complete(complete::CompleteArgs),
    #[command(about = "Delete a task", visible_alias = "rm")]
    Delete(delete::DeleteArgs),
    #[command(about = "Set the storage backend")]
    Mode(mode::ModeArgs),
    #[command(about = "Configuration initialization", visible_alias = "config")]
    Init(init::InitArgs),
    #[cfg(debug_assertions)]
    #[command(about = "Database migrations (debug builds only)")]
    Migrations(migrations::MigrationsArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    /// Storage backend for this run, overriding the configured one
    #[arg(short = 'm', long, global = true, value_enum)]
    storage: Option<StorageMode>,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        let storage = cli.storage;

        match cli.command {
            Commands::Add(args) => add::cmd(args, &Self::service(storage)?),
            Commands::List(args) => list::cmd(args, &Self::service(storage)?),
            Commands::Show(args) => show::cmd(args, &Self::service(storage)?),
            Commands::Complete(args) => complete::cmd(args, &Self::service(storage)?),
            Commands::Delete(args) => delete::cmd(args, &Self::service(storage)?),
            Commands::Mode(args) => mode::cmd(args),
            Commands::Init(args) => init::cmd(args),
            #[cfg(debug_assertions)]
            Commands::Migrations(args) => migrations::cmd(args),
        }
    }

    /// Service over the override when given, otherwise the configured backend.
    pub fn service(storage: Option<StorageMode>) -> Result<TaskService> {
        let mode = match storage {
            Some(mode) => mode,
            None => Config::read()?.storage_mode,
        };
        tracing::debug!(%mode, "storage selected");

        Ok(TaskService::new(open_repository(mode, &DataStorage::new())?))
    }
}
