use crate::{
    libs::{config::{Config, StorageMode}, messages::Message},
    msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ModeArgs {
    #[arg(value_enum)]
    mode: StorageMode,
}

pub fn cmd(args: ModeArgs) -> Result<()> {
    let mut config = Config::read()?;
    config.update_storage_mode(args.mode)?;

    msg_success!(Message::StorageModeUpdated(args.mode.to_string()));
    Ok(())
}
