//! CSV import of daily report sheets.
//!
//! Teams keep their daily reports in a shared spreadsheet. This module reads
//! a CSV export of that sheet, maps columns through the configured
//! [`ColumnMap`], and groups the rows into one [`DailyReport`] per date.
//!
//! ## Row handling
//!
//! - Cells are trimmed. Short rows are padded with blanks.
//! - Rows with a blank name are dropped.
//! - Rows whose date cell is blank are dropped silently. Rows whose date
//!   cannot be parsed are dropped and counted in
//!   [`ImportOutcome::skipped_rows`].
//! - Hours go through [`parse_hours`], so `"2.5h"` is 2.5 and `"n/a"` is 0.
//! - Raw group and project labels are stored unchanged. Tag stripping and
//!   alias resolution happen when reports are aggregated.
//!
//! ## Scopes
//!
//! | Scope          | Kept rows                          | Days written           |
//! |----------------|------------------------------------|------------------------|
//! | `Day(d)`       | rows dated `d`                     | `d`, even if empty     |
//! | `LastDays(n)`  | rows dated `today - (n-1)` or later| days that have rows    |
//! | `All`          | every row                          | days that have rows    |

use crate::libs::config::{ColumnMap, SourceConfig};
use crate::libs::entry::{parse_hours, DailyReport, WorkEntry};
use crate::libs::error::{Error, Result as CoreResult};
use crate::libs::messages::Message;
use crate::{msg_debug, msg_error_anyhow};
use anyhow::Result;
use chrono::{Duration, NaiveDate};
use encoding_rs::Encoding;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Which rows of a sheet to import.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportScope {
    Day(NaiveDate),
    LastDays(u32),
    All,
}

/// Parsed reports, ascending by date.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImportOutcome {
    pub reports: Vec<DailyReport>,
    pub skipped_rows: usize,
}

impl ImportOutcome {
    pub fn row_count(&self) -> usize {
        self.reports.iter().map(|r| r.entries.len()).sum()
    }
}

/// Parses a spreadsheet date cell.
///
/// Accepts `YYYY-MM-DD` and `YYYY/M/D`, optionally followed by a time part
/// after a space or `T`.
pub fn parse_report_date(raw: &str) -> CoreResult<NaiveDate> {
    let invalid = || Error::InvalidDate(raw.to_string());
    let token = raw.trim().split(|c: char| c.is_whitespace() || c == 'T').next().ok_or_else(invalid)?;

    let parts: Vec<&str> = token.split(|c: char| c == '-' || c == '/').collect();
    if parts.len() != 3 {
        return Err(invalid());
    }

    let year: i32 = parts[0].parse().map_err(|_| invalid())?;
    let month: u32 = parts[1].parse().map_err(|_| invalid())?;
    let day: u32 = parts[2].parse().map_err(|_| invalid())?;

    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(invalid)
}

/// Decodes raw file bytes with the configured encoding label, UTF-8 by default.
pub fn decode(bytes: &[u8], encoding: Option<&str>) -> Result<String> {
    let encoding = match encoding {
        Some(label) => Encoding::for_label(label.trim().as_bytes())
            .ok_or_else(|| msg_error_anyhow!(Message::ImportUnknownEncoding(label.to_string())))?,
        None => encoding_rs::UTF_8,
    };

    let (text, used, had_errors) = encoding.decode(bytes);
    if had_errors {
        msg_debug!(format!("Malformed {} sequences replaced during import", used.name()));
    }
    Ok(text.into_owned())
}

/// Reads and parses the CSV file at `path`.
pub fn import_file(path: &Path, source: &SourceConfig, scope: ImportScope, today: NaiveDate) -> Result<ImportOutcome> {
    let bytes = fs::read(path)?;
    let text = decode(&bytes, source.encoding.as_deref())?;
    parse_csv(&text, source, scope, today)
}

/// Parses CSV text into per-day reports.
pub fn parse_csv(text: &str, source: &SourceConfig, scope: ImportScope, today: NaiveDate) -> Result<ImportOutcome> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(source.has_headers)
        .flexible(true)
        .from_reader(text.as_bytes());

    let cutoff = match scope {
        ImportScope::LastDays(days) => Some(
            today
                .checked_sub_signed(Duration::days(days.saturating_sub(1) as i64))
                .unwrap_or(NaiveDate::MIN),
        ),
        _ => None,
    };

    let mut days: BTreeMap<NaiveDate, Vec<WorkEntry>> = BTreeMap::new();
    if let ImportScope::Day(date) = scope {
        days.insert(date, Vec::new());
    }
    let mut skipped_rows = 0;

    for record in reader.records() {
        let record = record?;
        let cell = |i: usize| record.get(i).unwrap_or("").trim();

        let raw_date = cell(source.columns.date);
        if raw_date.is_empty() {
            continue;
        }
        let date = match parse_report_date(raw_date) {
            Ok(date) => date,
            Err(err) => {
                msg_debug!(err);
                skipped_rows += 1;
                continue;
            }
        };

        let keep = match scope {
            ImportScope::Day(day) => date == day,
            ImportScope::LastDays(_) => cutoff.map_or(true, |c| date >= c),
            ImportScope::All => true,
        };
        if !keep {
            continue;
        }

        if let Some(entry) = entry_from_cells(&cell, &source.columns) {
            days.entry(date).or_default().push(entry);
        }
    }

    Ok(ImportOutcome {
        reports: days.into_iter().map(|(date, entries)| DailyReport::new(date, entries)).collect(),
        skipped_rows,
    })
}

fn entry_from_cells<'a, F>(cell: &F, columns: &ColumnMap) -> Option<WorkEntry>
where
    F: Fn(usize) -> &'a str,
{
    let person = cell(columns.name);
    if person.is_empty() {
        return None;
    }

    Some(WorkEntry {
        person: person.to_string(),
        raw_group: cell(columns.group).to_string(),
        raw_project: cell(columns.project).to_string(),
        issue_id: cell(columns.issue).to_string(),
        content: cell(columns.content).to_string(),
        hours: parse_hours(cell(columns.hours)),
        link: cell(columns.link).to_string(),
    })
}
