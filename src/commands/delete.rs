use crate::{
    db::repository::stored_id,
    libs::{messages::Message, service::TaskService},
    msg_info, msg_success,
};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// Task id or a unique prefix of it
    id: String,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    yes: bool,
}

pub fn cmd(args: DeleteArgs, service: &TaskService) -> Result<()> {
    let task = service.resolve(&args.id)?;
    let id = stored_id(&task)?;

    if !args.yes {
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmDeleteTask(task.description.clone()).to_string())
            .default(false)
            .interact()?;

        if !confirmed {
            msg_info!(Message::DeleteCancelled);
            return Ok(());
        }
    }

    let task = service.delete(id)?;
    msg_success!(Message::TaskDeleted(task.short_id()));
    Ok(())
}
