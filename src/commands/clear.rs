//! Deletes every stored report. Rules and settings are kept.

use crate::{
    db::reports::Reports,
    libs::messages::Message,
    msg_info, msg_success,
};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct ClearArgs {
    /// Skip the confirmation prompt
    #[arg(short, long)]
    yes: bool,
}

pub fn cmd(args: ClearArgs) -> Result<()> {
    let confirmed = args.yes
        || Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmClearAll.to_string())
            .default(false)
            .interact()?;

    if !confirmed {
        msg_info!(Message::OperationCancelled);
        return Ok(());
    }

    let days = Reports::new()?.clear()?;
    msg_success!(Message::AllDataCleared(days));
    Ok(())
}
