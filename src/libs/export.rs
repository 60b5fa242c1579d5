//! Export of analysis results and JSON backups of the report store.
//!
//! Two kinds of files leave the application:
//!
//! - **Exports** of a computed view: one day's entity stats or a trend
//!   matrix, written as CSV, JSON or Excel for spreadsheets and scripts.
//! - **Backups** of the stored reports as a single JSON document keyed by
//!   date, which [`read_backup`] turns back into reports for a restore.
//!
//! ## File naming
//!
//! Without an explicit path the exporter writes
//! `dayboard_export_YYYYMMDD_HHMMSS.<ext>` into the working directory.
//!
//! ## Backup format
//!
//! ```json
//! {
//!   "2025-03-03": { "rows": [ { "name": "Alice", "group": "QA", "project": "Website", ... } ] },
//!   "2025-03-04": { "rows": [] }
//! }
//! ```
//!
//! On read, rows may also use the `person`, `raw_group`, `raw_project` and
//! `issue_id` keys, and hours may be given as strings. Any other keys of a
//! day object are ignored.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use dayboard::libs::aggregate::AggregationResult;
//! use dayboard::libs::export::{Exporter, ExportFormat};
//! use chrono::NaiveDate;
//!
//! let exporter = Exporter::new(ExportFormat::Csv, None);
//! let date = NaiveDate::from_ymd_opt(2025, 3, 3).unwrap();
//! exporter.export_stats(date, &AggregationResult::default())?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use crate::libs::aggregate::AggregationResult;
use crate::libs::entry::{DailyReport, WorkEntry};
use crate::libs::formatter::{format_average, format_hours, format_percent};
use crate::libs::import::parse_report_date;
use crate::libs::trend::TrendMatrix;
use anyhow::Result;
use chrono::{Local, NaiveDate};
use rust_xlsxwriter::{Format, Workbook};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Output formats for exports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportFormat {
    /// Comma-separated values.
    Csv,
    /// Pretty-printed JSON.
    Json,
    /// Excel workbook with a bold header row.
    Excel,
}

/// Which computed view to export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportData {
    /// Entity totals of one day.
    Stats,
    /// Date × entity matrix over a window.
    Trend,
}

#[derive(Serialize)]
struct StatsExport<'a> {
    date: NaiveDate,
    #[serde(flatten)]
    stats: &'a AggregationResult,
}

/// Writes computed views to a file in one of the [`ExportFormat`]s.
pub struct Exporter {
    format: ExportFormat,
    output_path: PathBuf,
}

impl Exporter {
    /// Creates an exporter writing to `output_path`, or to a timestamped
    /// default file name with the format's extension.
    pub fn new(format: ExportFormat, output_path: Option<PathBuf>) -> Self {
        let default_name = format!("dayboard_export_{}", Local::now().format("%Y%m%d_%H%M%S"));
        let extension = match format {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Excel => "xlsx",
        };
        let output_path = output_path.unwrap_or_else(|| PathBuf::from(format!("{}.{}", default_name, extension)));

        Self { format, output_path }
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Exports one day's entity totals.
    pub fn export_stats(&self, date: NaiveDate, stats: &AggregationResult) -> Result<()> {
        match self.format {
            ExportFormat::Csv => self.stats_csv(stats),
            ExportFormat::Json => self.write_json(&StatsExport { date, stats }),
            ExportFormat::Excel => self.stats_excel(date, stats),
        }
    }

    /// Exports a trend matrix, oldest date first.
    pub fn export_trend(&self, matrix: &TrendMatrix) -> Result<()> {
        match self.format {
            ExportFormat::Csv => self.trend_csv(matrix),
            ExportFormat::Json => self.write_json(matrix),
            ExportFormat::Excel => self.trend_excel(matrix),
        }
    }

    fn write_json<T: Serialize + ?Sized>(&self, value: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        File::create(&self.output_path)?.write_all(json.as_bytes())?;
        Ok(())
    }

    fn stats_csv(&self, stats: &AggregationResult) -> Result<()> {
        let mut wtr = csv::Writer::from_path(&self.output_path)?;

        wtr.write_record(["Name", "Hours", "Share"])?;
        for entity in &stats.entities {
            wtr.write_record([entity.name.clone(), format_hours(entity.hours), format_percent(entity.percent)])?;
        }
        wtr.write_record(["Total".to_string(), format_hours(stats.total_hours), String::new()])?;

        wtr.flush()?;
        Ok(())
    }

    fn stats_excel(&self, date: NaiveDate, stats: &AggregationResult) -> Result<()> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        let header_format = Format::new().set_bold().set_background_color(rust_xlsxwriter::Color::Gray);

        worksheet.set_name(date.format("%Y-%m-%d").to_string())?;
        worksheet.write_string_with_format(0, 0, "Name", &header_format)?;
        worksheet.write_string_with_format(0, 1, "Hours", &header_format)?;
        worksheet.write_string_with_format(0, 2, "Share %", &header_format)?;

        let mut row = 1;
        for entity in &stats.entities {
            worksheet.write_string(row, 0, &entity.name)?;
            worksheet.write_number(row, 1, entity.hours)?;
            worksheet.write_number(row, 2, entity.percent)?;
            row += 1;
        }
        worksheet.write_string_with_format(row, 0, "Total", &header_format)?;
        worksheet.write_number_with_format(row, 1, stats.total_hours, &header_format)?;

        worksheet.autofit();
        workbook.save(&self.output_path)?;
        Ok(())
    }

    fn trend_header(matrix: &TrendMatrix) -> Vec<String> {
        let mut header = vec!["Date".to_string()];
        header.extend(matrix.entities.iter().cloned());
        header.push("Total".to_string());
        if matrix.group_stats.is_some() {
            header.push("People".to_string());
            header.push("Avg/person".to_string());
        }
        header
    }

    fn trend_csv(&self, matrix: &TrendMatrix) -> Result<()> {
        let mut wtr = csv::Writer::from_path(&self.output_path)?;

        wtr.write_record(Self::trend_header(matrix))?;
        for &date in &matrix.dates {
            let mut record = vec![date.format("%Y-%m-%d").to_string()];
            record.extend(matrix.row(date).unwrap_or(&[]).iter().map(|&h| format_hours(h)));
            record.push(format_hours(matrix.row_total(date).unwrap_or(0.0)));
            if let Some(stats) = matrix.group_day(date) {
                record.push(stats.people.to_string());
                record.push(format_average(stats.average));
            }
            wtr.write_record(&record)?;
        }

        wtr.flush()?;
        Ok(())
    }

    fn trend_excel(&self, matrix: &TrendMatrix) -> Result<()> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        let header_format = Format::new().set_bold().set_background_color(rust_xlsxwriter::Color::Gray);

        worksheet.set_name(format!("Trend by {}", matrix.mode))?;
        for (col, title) in Self::trend_header(matrix).iter().enumerate() {
            worksheet.write_string_with_format(0, col as u16, title, &header_format)?;
        }

        let mut row = 1;
        for &date in &matrix.dates {
            worksheet.write_string(row, 0, date.format("%Y-%m-%d").to_string())?;
            let cells = matrix.row(date).unwrap_or(&[]);
            for (col, &hours) in cells.iter().enumerate() {
                worksheet.write_number(row, col as u16 + 1, hours)?;
            }
            let mut col = cells.len() as u16 + 1;
            worksheet.write_number(row, col, matrix.row_total(date).unwrap_or(0.0))?;
            if let Some(stats) = matrix.group_day(date) {
                col += 1;
                worksheet.write_number(row, col, stats.people as f64)?;
                if let Some(average) = stats.average {
                    worksheet.write_number(row, col + 1, average)?;
                }
            }
            row += 1;
        }

        worksheet.autofit();
        workbook.save(&self.output_path)?;
        Ok(())
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct BackupDay {
    #[serde(default)]
    rows: Vec<WorkEntry>,
}

/// Writes `reports` as a JSON backup. Returns the number of days written.
pub fn write_backup(path: &Path, reports: &[DailyReport]) -> Result<usize> {
    let days: BTreeMap<String, BackupDay> = reports
        .iter()
        .map(|r| (r.date.format("%Y-%m-%d").to_string(), BackupDay { rows: r.entries.clone() }))
        .collect();

    let json = serde_json::to_string_pretty(&days)?;
    File::create(path)?.write_all(json.as_bytes())?;
    Ok(days.len())
}

/// Reads a JSON backup into reports, ascending by date.
pub fn read_backup(path: &Path) -> Result<Vec<DailyReport>> {
    let text = fs::read_to_string(path)?;
    let days: BTreeMap<String, BackupDay> = serde_json::from_str(&text)?;

    let mut reports = days
        .into_iter()
        .map(|(date, day)| -> Result<DailyReport> { Ok(DailyReport::new(parse_report_date(&date)?, day.rows)) })
        .collect::<Result<Vec<_>>>()?;
    reports.sort_by_key(|r| r.date);
    Ok(reports)
}
