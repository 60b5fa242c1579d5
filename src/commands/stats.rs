//! Single-day totals per project, person or group.

use crate::{
    commands::parse_date,
    db::{reports::Reports, rules::Rules},
    libs::{aggregate::aggregate_by_entity, config::Config, entry::AnalysisMode, messages::Message, normalize::Normalizer, view::View},
    msg_info, msg_print,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct StatsArgs {
    #[arg(short, long, default_value = "today")]
    date: String,

    #[arg(short, long, value_enum, default_value_t = AnalysisMode::Project)]
    mode: AnalysisMode,
}

pub fn cmd(args: StatsArgs) -> Result<()> {
    let date = parse_date(&args.date)?;
    let date_str = date.format("%Y-%m-%d").to_string();

    let report = match Reports::new()?.fetch_day(date)? {
        Some(report) => report,
        None => {
            msg_info!(Message::NoReportForDate(date_str));
            return Ok(());
        }
    };

    let config = Config::read()?;
    let rules = Rules::new()?.load()?;
    let stats = aggregate_by_entity(&report.entries, args.mode, &Normalizer::new(&rules, &config.labels.fallbacks));

    msg_print!(Message::StatsHeader(args.mode.to_string(), date_str), true);
    View::stats(&stats)?;
    Ok(())
}
