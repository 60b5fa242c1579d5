//! Restore from a JSON backup.
//!
//! The backup replaces the whole report store. Alias rules and the trend
//! view state are left as they are.

use crate::{
    db::reports::Reports,
    libs::{export::read_backup, messages::Message},
    msg_error_anyhow, msg_info, msg_success,
};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct RestoreArgs {
    /// Backup file written by `dayboard backup`
    path: PathBuf,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    yes: bool,
}

pub fn cmd(args: RestoreArgs) -> Result<()> {
    let reports = read_backup(&args.path).map_err(|e| msg_error_anyhow!(Message::BackupParseFailed(e.to_string())))?;

    let confirmed = args.yes
        || Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmRestore(reports.len()).to_string())
            .default(false)
            .interact()?;

    if !confirmed {
        msg_info!(Message::OperationCancelled);
        return Ok(());
    }

    Reports::new()?.restore(&reports)?;
    msg_success!(Message::RestoreCompleted(reports.len()));
    Ok(())
}
