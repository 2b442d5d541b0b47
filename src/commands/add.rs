use crate::{
    libs::{human_time::parse_human, messages::Message, service::TaskService},
    msg_bail_anyhow, msg_success,
};
use anyhow::Result;
use chrono::Utc;
use clap::Args;

#[derive(Debug, Args)]
pub struct AddArgs {
    /// What needs to be done
    #[arg(required = true, num_args = 1..)]
    description: Vec<String>,

    /// When it is due: "tomorrow", "in 3 days", "2 hours ago" or RFC 3339
    #[arg(short, long, default_value = "tomorrow")]
    due: String,
}

pub fn cmd(args: AddArgs, service: &TaskService) -> Result<()> {
    let due_date = match parse_human(&args.due, Utc::now()) {
        Ok(due_date) => due_date,
        Err(_) => msg_bail_anyhow!(Message::InvalidDueDate(args.due)),
    };

    // Unquoted words are joined back into one description.
    let task = service.create(&args.description.join(" "), due_date)?;

    msg_success!(Message::TaskCreated(task.id_string()));
    Ok(())
}
