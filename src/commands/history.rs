//! Lists every stored report date, newest first.

use crate::{
    db::reports::Reports,
    libs::{messages::Message, view::View},
    msg_info, msg_print,
};
use anyhow::Result;

pub fn cmd() -> Result<()> {
    let reports = Reports::new()?;
    let dates = reports.dates()?;

    if dates.is_empty() {
        msg_info!(Message::NoHistory);
        return Ok(());
    }

    let days = reports
        .fetch_window(&dates)?
        .into_iter()
        .map(|report| (report.date, report.entries.len(), report.total_hours()))
        .collect::<Vec<_>>();

    msg_print!(Message::HistoryHeader, true);
    View::history(&days)?;
    Ok(())
}
