use crate::db::db::Db;
use crate::libs::entry::{DailyReport, WorkEntry};
use anyhow::Result;
use chrono::NaiveDate;
use rusqlite::{params, Connection, OptionalExtension, Transaction};

const INSERT_DAY: &str = "INSERT OR REPLACE INTO report_days (date) VALUES (?1)";
const DELETE_DAY_ENTRIES: &str = "DELETE FROM entries WHERE date = ?1";
const INSERT_ENTRY: &str = "INSERT INTO entries (date, position, person, raw_group, raw_project, issue_id, content, hours, link)
    VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)";
const SELECT_DAY: &str = "SELECT date FROM report_days WHERE date = ?1";
const SELECT_DAY_ENTRIES: &str = "SELECT person, raw_group, raw_project, issue_id, content, hours, link
    FROM entries WHERE date = ?1 ORDER BY position";
const SELECT_DATES_DESC: &str = "SELECT date FROM report_days ORDER BY date DESC";
const DELETE_ALL_ENTRIES: &str = "DELETE FROM entries";
const DELETE_ALL_DAYS: &str = "DELETE FROM report_days";

/// Stored daily reports, one row per imported line.
pub struct Reports {
    conn: Connection,
}

impl Reports {
    pub fn new() -> Result<Self> {
        let db = Db::new()?;
        Ok(Self { conn: db.conn })
    }

    /// Replaces everything stored for `report.date` with `report.entries`.
    pub fn replace_day(&mut self, report: &DailyReport) -> Result<()> {
        let tx = self.conn.transaction()?;
        write_day(&tx, report)?;
        tx.commit()?;
        Ok(())
    }

    /// Replaces several days in one transaction.
    pub fn replace_days(&mut self, reports: &[DailyReport]) -> Result<()> {
        let tx = self.conn.transaction()?;
        for report in reports {
            write_day(&tx, report)?;
        }
        tx.commit()?;
        Ok(())
    }

    /// The stored report for `date`, or `None` if that day was never imported.
    pub fn fetch_day(&self, date: NaiveDate) -> Result<Option<DailyReport>> {
        let known: Option<NaiveDate> = self.conn.query_row(SELECT_DAY, params![date], |row| row.get(0)).optional()?;
        if known.is_none() {
            return Ok(None);
        }

        Ok(Some(DailyReport::new(date, self.fetch_entries(date)?)))
    }

    /// One report per date in `dates`, with empty reports for missing days.
    pub fn fetch_window(&self, dates: &[NaiveDate]) -> Result<Vec<DailyReport>> {
        dates
            .iter()
            .map(|&date| -> Result<DailyReport> { Ok(DailyReport::new(date, self.fetch_entries(date)?)) })
            .collect()
    }

    /// Every stored date, newest first.
    pub fn dates(&self) -> Result<Vec<NaiveDate>> {
        let mut stmt = self.conn.prepare(SELECT_DATES_DESC)?;
        let dates = stmt.query_map([], |row| row.get(0))?.collect::<rusqlite::Result<Vec<NaiveDate>>>()?;
        Ok(dates)
    }

    /// Every stored report, oldest first.
    pub fn fetch_all(&self) -> Result<Vec<DailyReport>> {
        let mut dates = self.dates()?;
        dates.reverse();
        dates
            .into_iter()
            .map(|date| -> Result<DailyReport> { Ok(DailyReport::new(date, self.fetch_entries(date)?)) })
            .collect()
    }

    /// Replaces the whole store with `reports`.
    pub fn restore(&mut self, reports: &[DailyReport]) -> Result<()> {
        let tx = self.conn.transaction()?;
        tx.execute(DELETE_ALL_ENTRIES, [])?;
        tx.execute(DELETE_ALL_DAYS, [])?;
        for report in reports {
            write_day(&tx, report)?;
        }
        tx.commit()?;
        Ok(())
    }

    /// Deletes every stored report. Returns the number of days removed.
    pub fn clear(&mut self) -> Result<usize> {
        let tx = self.conn.transaction()?;
        tx.execute(DELETE_ALL_ENTRIES, [])?;
        let days = tx.execute(DELETE_ALL_DAYS, [])?;
        tx.commit()?;
        Ok(days)
    }

    fn fetch_entries(&self, date: NaiveDate) -> Result<Vec<WorkEntry>> {
        let mut stmt = self.conn.prepare(SELECT_DAY_ENTRIES)?;
        let entries = stmt
            .query_map(params![date], |row| {
                Ok(WorkEntry {
                    person: row.get(0)?,
                    raw_group: row.get(1)?,
                    raw_project: row.get(2)?,
                    issue_id: row.get(3)?,
                    content: row.get(4)?,
                    hours: row.get(5)?,
                    link: row.get(6)?,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(entries)
    }
}

fn write_day(tx: &Transaction, report: &DailyReport) -> Result<()> {
    tx.execute(DELETE_DAY_ENTRIES, params![report.date])?;
    tx.execute(INSERT_DAY, params![report.date])?;
    for (position, entry) in report.entries.iter().enumerate() {
        tx.execute(
            INSERT_ENTRY,
            params![
                report.date,
                position as i64,
                entry.person,
                entry.raw_group,
                entry.raw_project,
                entry.issue_id,
                entry.content,
                entry.hours,
                entry.link
            ],
        )?;
    }
    Ok(())
}
