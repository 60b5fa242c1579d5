//! Import of daily report sheets.
//!
//! Reads a CSV export of the team's report sheet and stores one report per
//! date. Every imported date replaces what was stored for it before, so
//! re-importing a corrected sheet is safe.
//!
//! ## Scopes
//!
//! - `--date D`: only day `D`. The day is replaced even when the sheet has
//!   no rows for it, which clears a report that was withdrawn.
//! - `--days N`: the last `N` days up to today.
//! - `--all`: every dated row in the sheet.
//!
//! Without a scope flag the configured trend window is imported.

use crate::{
    commands::parse_date,
    db::reports::Reports,
    libs::{
        config::Config,
        import::{import_file, ImportScope},
        messages::Message,
    },
    msg_info, msg_success, msg_warning,
};
use anyhow::Result;
use chrono::Local;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ImportArgs {
    /// CSV file exported from the report sheet
    path: PathBuf,

    /// Import a single day (YYYY-MM-DD, today or yesterday)
    #[arg(short, long, conflicts_with_all = ["days", "all"])]
    date: Option<String>,

    /// Import the last N days
    #[arg(short = 'n', long, conflicts_with = "all")]
    days: Option<u32>,

    /// Import every row of the file
    #[arg(short, long)]
    all: bool,

    /// Text encoding of the file, such as utf-8, gbk or windows-1252
    #[arg(short, long)]
    encoding: Option<String>,
}

pub fn cmd(args: ImportArgs) -> Result<()> {
    let config = Config::read()?;
    let today = Local::now().date_naive();

    let scope = if let Some(date) = &args.date {
        ImportScope::Day(parse_date(date)?)
    } else if args.all {
        ImportScope::All
    } else {
        ImportScope::LastDays(args.days.unwrap_or(config.analysis.default_days).max(1))
    };

    let mut source = config.source;
    if args.encoding.is_some() {
        source.encoding = args.encoding;
    }

    msg_info!(Message::ImportReading(args.path.display().to_string()));
    let outcome = import_file(&args.path, &source, scope, today)?;
    if outcome.skipped_rows > 0 {
        msg_warning!(Message::ImportSkippedRows(outcome.skipped_rows));
    }

    Reports::new()?.replace_days(&outcome.reports)?;

    match scope {
        ImportScope::Day(date) => {
            msg_success!(Message::ImportDayReplaced(date.format("%Y-%m-%d").to_string(), outcome.row_count()));
        }
        _ if outcome.reports.is_empty() => msg_info!(Message::ImportNoRows),
        _ => msg_success!(Message::ImportCompleted(outcome.reports.len(), outcome.row_count())),
    }

    Ok(())
}
