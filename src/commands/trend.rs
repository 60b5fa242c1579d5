//! Multi-day trend command.
//!
//! Shows a date × entity table of hours for the last days. The view state
//! (mode, selected entities and group drill-down) is kept between runs, and
//! the sub-actions edit it before the table is drawn:
//!
//! - `trend mode <project|person|group>` switches the mode and starts over
//!   with everything selected.
//! - `trend toggle <name>` adds or removes an entity in project and person
//!   mode, or drills into a group in group mode.
//! - `trend reset` selects every entity again.
//! - `trend clear` leaves the group drill-down.

use crate::{
    commands::parse_date,
    db::{reports::Reports, rules::Rules, settings::Settings},
    libs::{
        config::Config,
        entry::AnalysisMode,
        messages::Message,
        normalize::Normalizer,
        selection::{AnalysisContext, SelectionPhase, SelectionState, ToggleOutcome},
        trend::{build_trend_matrix, window_dates},
        view::View,
    },
    msg_info, msg_print, msg_success,
};
use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Debug, Args)]
pub struct TrendArgs {
    #[command(subcommand)]
    action: Option<TrendAction>,

    /// Window length in days, the configured default if omitted
    #[arg(short = 'n', long, global = true)]
    days: Option<u32>,

    /// Last day of the window
    #[arg(short, long, default_value = "today", global = true)]
    today: String,
}

#[derive(Debug, Subcommand)]
enum TrendAction {
    /// Switch between project, person and group trends
    Mode {
        #[arg(value_enum)]
        mode: AnalysisMode,
    },
    /// Select or deselect an entity, or drill into a group
    Toggle { name: String },
    /// Select every entity again
    Reset,
    /// Leave the group drill-down
    Clear,
}

pub fn cmd(args: TrendArgs) -> Result<()> {
    let mut settings = Settings::new()?;
    let mut context = settings.analysis_context()?;

    if let Some(action) = args.action {
        apply_action(&mut context, action);
    }

    let config = Config::read()?;
    let days = args.days.unwrap_or(config.analysis.default_days).max(1);
    let today = parse_date(&args.today)?;
    let reports = Reports::new()?.fetch_window(&window_dates(today, days)?)?;

    let rules = Rules::new()?.load()?;
    let normalizer = Normalizer::new(&rules, &config.labels.fallbacks);

    let mode = context.mode;
    let filter = context.active_filter.clone();
    let mut scratch = SelectionState::default();
    let selection = context.selection_mut().unwrap_or(&mut scratch);
    let matrix = build_trend_matrix(&reports, mode, filter.as_deref(), selection, &normalizer)?;
    settings.save_analysis_context(&context)?;

    msg_print!(Message::TrendHeader(mode.to_string(), days as usize), true);
    if let Some(group) = &filter {
        msg_print!(Message::TrendDrillDown(group.clone()));
    }
    if matrix.is_empty() {
        msg_info!(Message::TrendNoData);
        return Ok(());
    }

    View::trend(&matrix)?;

    let unselected = matrix.unselected(&config.labels.project_bucket);
    if !unselected.is_empty() {
        msg_print!(Message::TrendUnselectedHeader, true);
        View::unselected(&unselected)?;
    }

    Ok(())
}

fn apply_action(context: &mut AnalysisContext, action: TrendAction) {
    match action {
        TrendAction::Mode { mode } => {
            context.set_mode(mode);
            msg_success!(Message::ModeSwitched(mode.to_string()));
        }
        TrendAction::Toggle { name } => match context.toggle(&name) {
            ToggleOutcome::Selection(SelectionPhase::All) => msg_info!(Message::SelectionAll),
            ToggleOutcome::Selection(SelectionPhase::Single) => msg_info!(Message::SelectionSingle(name)),
            ToggleOutcome::Selection(SelectionPhase::Partial) => {
                let count = context.selection().map_or(0, |s| s.selected.len());
                msg_info!(Message::SelectionPartial(count));
            }
            ToggleOutcome::FilterSet(group) => msg_info!(Message::FilterSet(group)),
            ToggleOutcome::FilterCleared => msg_info!(Message::FilterCleared),
        },
        TrendAction::Reset => {
            if context.selection().is_some() {
                context.reset_selection();
                msg_info!(Message::SelectionReset);
            } else {
                msg_info!(Message::SelectionNotApplicable);
            }
        }
        TrendAction::Clear => {
            context.clear_filter();
            msg_info!(Message::FilterCleared);
        }
    }
}
