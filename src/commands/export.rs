//! Export of day stats and trend tables.
//!
//! `stats` writes one day's totals per entity. `trend` writes the date ×
//! entity matrix using the current trend view, so the file matches what
//! `dayboard trend` shows. Passing `--mode` exports a fresh view of that
//! mode with every entity selected instead.
//!
//! ## Supported Export Formats
//!
//! - **CSV**: Comma-separated values for spreadsheet applications
//! - **JSON**: Structured data for programmatic processing
//! - **Excel**: Native spreadsheet format with a formatted header row

use crate::{
    commands::parse_date,
    db::{reports::Reports, rules::Rules, settings::Settings},
    libs::{
        aggregate::aggregate_by_entity,
        config::Config,
        entry::AnalysisMode,
        export::{ExportData, ExportFormat, Exporter},
        messages::Message,
        normalize::Normalizer,
        selection::{AnalysisContext, SelectionState},
        trend::{build_trend_matrix, window_dates},
    },
    msg_info, msg_success,
};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExportArgs {
    #[arg(value_enum, default_value = "stats")]
    data: ExportData,

    #[arg(short, long, value_enum, default_value = "csv")]
    format: ExportFormat,

    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Day of the stats export, or last day of the trend window
    #[arg(short, long, default_value = "today")]
    date: String,

    /// Trend window length in days
    #[arg(short = 'n', long)]
    days: Option<u32>,

    #[arg(short, long, value_enum)]
    mode: Option<AnalysisMode>,
}

pub fn cmd(args: ExportArgs) -> Result<()> {
    let date = parse_date(&args.date)?;
    let config = Config::read()?;
    let rules = Rules::new()?.load()?;
    let normalizer = Normalizer::new(&rules, &config.labels.fallbacks);
    let reports = Reports::new()?;
    let exporter = Exporter::new(args.format, args.output);

    match args.data {
        ExportData::Stats => {
            let entries = reports.fetch_day(date)?.map(|r| r.entries).unwrap_or_default();
            let stats = aggregate_by_entity(&entries, args.mode.unwrap_or_default(), &normalizer);
            if stats.is_empty() {
                msg_info!(Message::ExportNoData);
                return Ok(());
            }
            exporter.export_stats(date, &stats)?;
        }
        ExportData::Trend => {
            let days = args.days.unwrap_or(config.analysis.default_days).max(1);
            let window = reports.fetch_window(&window_dates(date, days)?)?;

            let mut context = match args.mode {
                Some(mode) => {
                    let mut fresh = AnalysisContext::default();
                    fresh.set_mode(mode);
                    fresh
                }
                None => Settings::new()?.analysis_context()?,
            };
            let mode = context.mode;
            let filter = context.active_filter.clone();
            let mut scratch = SelectionState::default();
            let selection = context.selection_mut().unwrap_or(&mut scratch);

            let matrix = build_trend_matrix(&window, mode, filter.as_deref(), selection, &normalizer)?;
            if matrix.is_empty() {
                msg_info!(Message::ExportNoData);
                return Ok(());
            }
            exporter.export_trend(&matrix)?;
        }
    }

    msg_success!(Message::ExportCompleted(exporter.output_path().display().to_string()));
    Ok(())
}
