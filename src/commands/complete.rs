use crate::{
    db::repository::stored_id,
    libs::{messages::Message, service::TaskService},
    msg_info, msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct CompleteArgs {
    /// Task id or a unique prefix of it
    id: String,
}

pub fn cmd(args: CompleteArgs, service: &TaskService) -> Result<()> {
    let task = service.resolve(&args.id)?;
    let id = stored_id(&task)?;

    if task.is_completed {
        msg_info!(Message::TaskAlreadyCompleted(task.short_id()));
        return Ok(());
    }

    let task = service.complete(id)?;
    msg_success!(Message::TaskCompleted(task.short_id()));
    Ok(())
}
