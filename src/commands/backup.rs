//! JSON backup of every stored report.

use crate::{
    db::reports::Reports,
    libs::{export::write_backup, messages::Message},
    msg_info, msg_success,
};
use anyhow::Result;
use chrono::Local;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct BackupArgs {
    /// Output file, `dayboard_backup_<timestamp>.json` if omitted
    #[arg(short, long)]
    output: Option<PathBuf>,
}

pub fn cmd(args: BackupArgs) -> Result<()> {
    let reports = Reports::new()?.fetch_all()?;
    if reports.is_empty() {
        msg_info!(Message::NoDataToBackup);
        return Ok(());
    }

    let path = args
        .output
        .unwrap_or_else(|| PathBuf::from(format!("dayboard_backup_{}.json", Local::now().format("%Y%m%d_%H%M%S"))));
    let days = write_backup(&path, &reports)?;

    msg_success!(Message::BackupCreated(path.display().to_string(), days));
    Ok(())
}
