//! Display implementation for dayboard messages.
//!
//! Every user-facing string lives here so that command handlers only deal
//! with typed [`Message`] values. The `msg_*!` macros add the status prefix
//! (✅, ❌, ⚠️, ℹ️) and route the text to stdout, stderr or tracing.
//!
//! ## Text Formatting Standards
//!
//! - **Sentence Case**: Natural capitalization, no trailing period
//! - **Specific Details**: Dates, counts and names are always interpolated
//! - **Hours**: Passed in pre-formatted so tables and messages agree

use super::types::Message;
use std::fmt;

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration removed, defaults will be used".to_string(),
            Message::ConfigNotFound => "No configuration file found, nothing to remove".to_string(),
            Message::ConfigModuleSource => "Source spreadsheet columns".to_string(),
            Message::ConfigModuleAnalysis => "Analysis defaults".to_string(),
            Message::ConfigModuleLabels => "Fallback labels".to_string(),
            Message::PromptSelectModules => "Select sections to configure (space to toggle)".to_string(),
            Message::PromptColumn(field) => format!("Column index of '{}' (0-based)", field),
            Message::PromptHasHeaders => "Does the first row contain headers?".to_string(),
            Message::PromptDefaultDays => "Default trend window in days".to_string(),
            Message::PromptGroupFallback => "Label for rows without a group".to_string(),
            Message::PromptProjectFallback => "Label for rows without a project".to_string(),
            Message::PromptPersonFallback => "Label for rows without a name".to_string(),
            Message::PromptProjectBucket => "Heading for unselected projects".to_string(),

            // === IMPORT MESSAGES ===
            Message::ImportReading(path) => format!("Reading {}", path),
            Message::ImportCompleted(days, rows) => format!("Imported {} rows across {} days", rows, days),
            Message::ImportSkippedRows(count) => format!("Skipped {} rows without a recognizable date", count),
            Message::ImportNoRows => "No rows matched the requested range".to_string(),
            Message::ImportUnknownEncoding(label) => format!("Unknown text encoding: {}", label),
            Message::ImportDayReplaced(date, rows) => format!("{}: {} rows", date, rows),

            // === REPORT MESSAGES ===
            Message::ReportHeader(date) => format!("Daily report for {}", date),
            Message::NoReportForDate(date) => format!("No report stored for {}", date),
            Message::OverviewTotals(people, hours) => format!("{} people / {} hr", people, hours),
            Message::OverviewFilteredTotals(group, people, hours) => format!("{}: {} people / {} hr", group, people, hours),
            Message::GroupFilterReset(group) => format!("Group '{}' has no rows on this day, showing all groups", group),
            Message::GroupsAvailable(groups) => format!("Groups: {}", groups),
            Message::ProjectStatsHeader => "Project breakdown".to_string(),
            Message::StatsHeader(mode, date) => format!("Hours by {} for {}", mode, date),

            // === TREND MESSAGES ===
            Message::TrendHeader(mode, days) => format!("Hours by {} over the last {} days", mode, days),
            Message::TrendNoData => "No reports in this window".to_string(),
            Message::TrendDrillDown(group) => format!("Drill-down: {}", group),
            Message::TrendUnselectedHeader => "Not shown (toggle to add):".to_string(),
            Message::ModeSwitched(mode) => format!("Trend mode set to {}", mode),
            Message::SelectionAll => "All entities selected".to_string(),
            Message::SelectionSingle(name) => format!("Showing only {}", name),
            Message::SelectionPartial(count) => format!("{} entities selected", count),
            Message::SelectionReset => "Selection reset to all entities".to_string(),
            Message::SelectionNotApplicable => "Group mode has no selection, use toggle to drill down".to_string(),
            Message::FilterSet(group) => format!("Drilling down into {}", group),
            Message::FilterCleared => "Drill-down cleared".to_string(),

            // === RULE MESSAGES ===
            Message::RulesHeader(kind) => format!("{} rules", capitalize(kind)),
            Message::NoRules(kind) => format!("No {} rules defined", kind),
            Message::RuleAdded(alias) => format!("Rule '{}' added", alias),
            Message::RuleUpdated(alias) => format!("Rule '{}' updated", alias),
            Message::RulesMerged(alias, count) => format!("Merged {} names into '{}'", count, alias),
            Message::RuleRenamed(alias) => format!("Rule renamed to '{}'", alias),
            Message::RuleDeleted(alias) => format!("Rule '{}' deleted", alias),
            Message::RuleEditFailed(reason) => format!("Rule not saved: {}", reason),
            Message::ConfirmDeleteRule(alias) => format!("Delete rule '{}'?", alias),

            // === HISTORY MESSAGES ===
            Message::HistoryHeader => "Stored reports".to_string(),
            Message::NoHistory => "No reports stored yet".to_string(),

            // === EXPORT AND BACKUP MESSAGES ===
            Message::ExportCompleted(path) => format!("Data exported to {}", path),
            Message::ExportNoData => "Nothing to export for this selection".to_string(),
            Message::BackupCreated(path, days) => format!("Backed up {} days to {}", days, path),
            Message::NoDataToBackup => "No data to back up".to_string(),
            Message::BackupParseFailed(err) => format!("Backup file is not valid: {}", err),
            Message::ConfirmRestore(days) => format!("Replace all stored reports with {} days from the backup?", days),
            Message::RestoreCompleted(days) => format!("Restored {} days", days),
            Message::ConfirmClearAll => "Delete all stored reports? This cannot be undone".to_string(),
            Message::AllDataCleared(days) => format!("Deleted {} stored report days", days),
            Message::OperationCancelled => "Operation cancelled".to_string(),

            // === MIGRATION MESSAGES ===
            Message::MigrationsFound(count) => format!("Found {} pending database migrations", count),
            Message::RunningMigration(version, name) => format!("Running migration v{}: {}", version, name),
            Message::MigrationCompleted(version) => format!("✓ Migration v{} completed", version),
            Message::MigrationFailed(version, error) => format!("✗ Migration v{} failed: {}", version, error),
            Message::AllMigrationsCompleted => "All database migrations completed successfully".to_string(),
        };

        write!(f, "{}", text)
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
