//! # Tasks - a small command-line task tracker
//!
//! Tasks are created with a description and a due date, listed, completed and
//! deleted. Where they live is a startup choice between three interchangeable
//! backends (CSV file, JSON file, SQLite database) behind one repository
//! contract, so every command behaves the same whichever is active.
//!
//! ## Layout
//!
//! - [`libs`]: domain types, the task service, configuration, messages and views
//! - [`db`]: the repository contract and its three backends
//! - [`commands`]: the clap command tree
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tasks::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
