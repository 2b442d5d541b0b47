use crate::{
    libs::{
        config::Config,
        messages::Message,
        service::TaskService,
        task::{TaskField, TaskFilter, TaskSelector},
        view::View,
    },
    msg_info,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Include completed tasks
    #[arg(short, long)]
    all: bool,

    /// Comma-separated columns, e.g. `id,description,due_date`
    #[arg(short, long, value_enum, value_delimiter = ',')]
    columns: Vec<TaskField>,
}

pub fn cmd(args: ListArgs, service: &TaskService) -> Result<()> {
    let selector = if args.columns.is_empty() {
        Config::read()?.selector()
    } else {
        TaskSelector::new(&args.columns)
    };

    let tasks = service.list(Some(selector.clone()), Some(TaskFilter::new(args.all)))?;
    if tasks.is_empty() {
        msg_info!(Message::TasksNotFound);
        return Ok(());
    }

    View::tasks(&tasks, &selector);
    Ok(())
}
