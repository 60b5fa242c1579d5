//! Day overview command.
//!
//! Lists everyone who reported on a date with their total hours, flags short
//! and long days, and breaks the hours down by project. `--group` narrows
//! the list to one canonical group.

use crate::{
    commands::parse_date,
    db::{reports::Reports, rules::Rules},
    libs::{config::Config, formatter::format_hours, messages::Message, normalize::Normalizer, overview::summarize_day, view::View},
    msg_info, msg_print, msg_warning,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ReportArgs {
    #[arg(short, long, default_value = "today")]
    date: String,

    /// Only show people of this canonical group
    #[arg(short, long)]
    group: Option<String>,
}

pub fn cmd(args: ReportArgs) -> Result<()> {
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
    let normalizer = Normalizer::new(&rules, &config.labels.fallbacks);
    let overview = summarize_day(&report.entries, args.group.as_deref(), &normalizer);

    msg_print!(Message::ReportHeader(date_str), true);
    if let (Some(group), None) = (&args.group, &overview.filter) {
        msg_warning!(Message::GroupFilterReset(group.clone()));
    }
    msg_print!(Message::GroupsAvailable(overview.groups.join(", ")));
    msg_print!(Message::OverviewTotals(overview.people_count, format_hours(overview.total_hours)));
    if let Some(group) = &overview.filter {
        msg_print!(Message::OverviewFilteredTotals(
            group.clone(),
            overview.filtered_people_count,
            format_hours(overview.filtered_hours)
        ));
    }

    View::people(&overview)?;

    msg_print!(Message::ProjectStatsHeader, true);
    View::stats(&overview.projects)?;

    Ok(())
}
