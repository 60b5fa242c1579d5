//! Command-line interface of dayboard.
//!
//! Each subcommand lives in its own module with an `Args` struct and a
//! `cmd` function. [`Cli::menu`] parses the arguments and [`Cli::run`]
//! dispatches.

pub mod backup;
pub mod clear;
pub mod export;
pub mod history;
pub mod import;
pub mod init;
pub mod report;
pub mod restore;
pub mod rules;
pub mod stats;
pub mod trend;

use crate::libs::import::parse_report_date;
use anyhow::Result;
use chrono::{Duration, Local, NaiveDate};
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Import daily reports from a CSV export", arg_required_else_help = true)]
    Import(import::ImportArgs),
    #[command(about = "Show who worked on what for one day")]
    Report(report::ReportArgs),
    #[command(about = "Show hours per project, person or group for one day")]
    Stats(stats::StatsArgs),
    #[command(about = "Show hours over the last days and edit the trend view")]
    Trend(trend::TrendArgs),
    #[command(about = "Manage project and group alias rules")]
    Rules(rules::RulesArgs),
    #[command(about = "List imported report dates")]
    History,
    #[command(about = "Export stats or trends to CSV, JSON or Excel")]
    Export(export::ExportArgs),
    #[command(about = "Write all stored reports to a JSON backup")]
    Backup(backup::BackupArgs),
    #[command(about = "Replace all stored reports with a JSON backup", arg_required_else_help = true)]
    Restore(restore::RestoreArgs),
    #[command(about = "Delete all stored reports")]
    Clear(clear::ClearArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        Self::parse().run()
    }

    /// Runs the parsed subcommand.
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Import(args) => import::cmd(args),
            Commands::Report(args) => report::cmd(args),
            Commands::Stats(args) => stats::cmd(args),
            Commands::Trend(args) => trend::cmd(args),
            Commands::Rules(args) => rules::cmd(args),
            Commands::History => history::cmd(),
            Commands::Export(args) => export::cmd(args),
            Commands::Backup(args) => backup::cmd(args),
            Commands::Restore(args) => restore::cmd(args),
            Commands::Clear(args) => clear::cmd(args),
        }
    }
}

/// Parses `today`, `yesterday` or a `YYYY-MM-DD` date argument.
pub fn parse_date(date_str: &str) -> Result<NaiveDate> {
    let today = Local::now().date_naive();
    match date_str.trim().to_lowercase().as_str() {
        "today" => Ok(today),
        "yesterday" => Ok(today - Duration::days(1)),
        other => Ok(parse_report_date(other)?),
    }
}
