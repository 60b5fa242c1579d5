#[derive(Debug, Clone)]
pub enum Message {
    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    ConfigNotFound,
    ConfigModuleSource,
    ConfigModuleAnalysis,
    ConfigModuleLabels,
    PromptSelectModules,
    PromptColumn(String), // field name
    PromptHasHeaders,
    PromptDefaultDays,
    PromptGroupFallback,
    PromptProjectFallback,
    PromptPersonFallback,
    PromptProjectBucket,

    // === IMPORT MESSAGES ===
    ImportReading(String),          // path
    ImportCompleted(usize, usize),  // days, rows
    ImportSkippedRows(usize),       // rows without a usable date
    ImportNoRows,
    ImportUnknownEncoding(String),  // label
    ImportDayReplaced(String, usize), // date, rows

    // === REPORT MESSAGES ===
    ReportHeader(String),               // date
    NoReportForDate(String),            // date
    OverviewTotals(usize, String),      // people, hours
    OverviewFilteredTotals(String, usize, String), // group, people, hours
    GroupFilterReset(String),           // group
    GroupsAvailable(String),            // comma separated
    ProjectStatsHeader,
    StatsHeader(String, String),        // mode, date

    // === TREND MESSAGES ===
    TrendHeader(String, usize),         // mode, days
    TrendNoData,
    TrendDrillDown(String),             // group
    TrendUnselectedHeader,
    ModeSwitched(String),
    SelectionAll,
    SelectionSingle(String),
    SelectionPartial(usize),
    SelectionReset,
    SelectionNotApplicable,
    FilterSet(String),
    FilterCleared,

    // === RULE MESSAGES ===
    RulesHeader(String),                // kind
    NoRules(String),                    // kind
    RuleAdded(String),                  // alias
    RuleUpdated(String),                // alias
    RulesMerged(String, usize),         // alias, source count
    RuleRenamed(String),                // alias
    RuleDeleted(String),                // alias
    RuleEditFailed(String),             // reason
    ConfirmDeleteRule(String),          // alias

    // === HISTORY MESSAGES ===
    HistoryHeader,
    NoHistory,

    // === EXPORT AND BACKUP MESSAGES ===
    ExportCompleted(String),            // path
    ExportNoData,
    BackupCreated(String, usize),       // path, days
    NoDataToBackup,
    BackupParseFailed(String),
    ConfirmRestore(usize),              // days
    RestoreCompleted(usize),
    ConfirmClearAll,
    AllDataCleared(usize),              // days
    OperationCancelled,

    // === MIGRATION MESSAGES ===
    MigrationsFound(usize),
    RunningMigration(u32, String),
    MigrationCompleted(u32),
    MigrationFailed(u32, String),
    AllMigrationsCompleted,
}
