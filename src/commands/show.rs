use crate::{
    libs::{messages::Message, service::TaskService, view::View},
    msg_print,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Task id or a unique prefix of it
    id: String,
}

pub fn cmd(args: ShowArgs, service: &TaskService) -> Result<()> {
    let task = service.resolve(&args.id)?;

    msg_print!(Message::TaskDetailsHeader);
    View::task(&task);
    Ok(())
}
