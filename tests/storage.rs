#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use dayboard::db::db::Db;
    use dayboard::db::migrations::{get_db_version, MigrationManager};
    use dayboard::db::reports::Reports;
    use dayboard::db::rules::Rules;
    use dayboard::db::settings::Settings;
    use dayboard::libs::entry::{AnalysisMode, DailyReport, WorkEntry};
    use dayboard::libs::rules::{default_group_rules, RuleSet};
    use dayboard::libs::selection::AnalysisContext;
    use serial_test::serial;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct StorageTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for StorageTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            StorageTestContext { _temp_dir: temp_dir }
        }
    }

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, d).unwrap()
    }

    fn report(d: u32, entries: &[(&str, &str, &str, f64)]) -> DailyReport {
        DailyReport::new(
            day(d),
            entries.iter().map(|(person, group, project, hours)| WorkEntry::new(person, group, project, *hours)).collect(),
        )
    }

    #[test_context(StorageTestContext)]
    #[test]
    #[serial]
    fn test_migrations_run_automatically(_ctx: &mut StorageTestContext) {
        let db = Db::new().unwrap();

        let version = get_db_version(&db.conn).unwrap();
        assert_eq!(version, MigrationManager::new().latest_version());
    }

    #[test_context(StorageTestContext)]
    #[test]
    #[serial]
    fn test_migrations_are_idempotent(_ctx: &mut StorageTestContext) {
        let mut db = Db::new().unwrap();
        MigrationManager::new().run_migrations(&mut db.conn).unwrap();

        // Default group rules are seeded once
        assert_eq!(Rules::new().unwrap().load().unwrap().group_rules.len(), default_group_rules().len());
    }

    #[test_context(StorageTestContext)]
    #[test]
    #[serial]
    fn test_replace_and_fetch_day(_ctx: &mut StorageTestContext) {
        let mut reports = Reports::new().unwrap();
        assert!(reports.fetch_day(day(3)).unwrap().is_none());

        let mut stored = report(3, &[("Alice", "QA", "Website", 4.0), ("Bob", "Web", "API", 2.5)]);
        stored.entries[0].issue_id = "#12".to_string();
        stored.entries[0].link = "https://example.test/12".to_string();
        reports.replace_day(&stored).unwrap();

        let fetched = reports.fetch_day(day(3)).unwrap().unwrap();
        assert_eq!(fetched, stored);

        // Replacing keeps only the new rows
        reports.replace_day(&report(3, &[("Carol", "QA", "Docs", 1.0)])).unwrap();
        let fetched = reports.fetch_day(day(3)).unwrap().unwrap();
        assert_eq!(fetched.entries.len(), 1);
        assert_eq!(fetched.entries[0].person, "Carol");
    }

    #[test_context(StorageTestContext)]
    #[test]
    #[serial]
    fn test_empty_day_is_still_known(_ctx: &mut StorageTestContext) {
        let mut reports = Reports::new().unwrap();
        reports.replace_day(&DailyReport::empty(day(4))).unwrap();

        let fetched = reports.fetch_day(day(4)).unwrap().unwrap();
        assert!(fetched.entries.is_empty());
        assert_eq!(reports.dates().unwrap(), vec![day(4)]);
    }

    #[test_context(StorageTestContext)]
    #[test]
    #[serial]
    fn test_fetch_window_fills_gaps(_ctx: &mut StorageTestContext) {
        let mut reports = Reports::new().unwrap();
        reports
            .replace_days(&[report(3, &[("Alice", "QA", "Website", 4.0)]), report(5, &[("Bob", "Web", "API", 2.0)])])
            .unwrap();

        let window = reports.fetch_window(&[day(3), day(4), day(5)]).unwrap();

        assert_eq!(window.len(), 3);
        assert_eq!(window[1], DailyReport::empty(day(4)));
        assert_eq!(window[2].entries[0].person, "Bob");
        assert_eq!(reports.dates().unwrap(), vec![day(5), day(3)]);
    }

    #[test_context(StorageTestContext)]
    #[test]
    #[serial]
    fn test_restore_replaces_everything(_ctx: &mut StorageTestContext) {
        let mut reports = Reports::new().unwrap();
        reports.replace_day(&report(1, &[("Old", "QA", "Legacy", 8.0)])).unwrap();

        let backup = vec![report(3, &[("Alice", "QA", "Website", 4.0)]), report(4, &[])];
        reports.restore(&backup).unwrap();

        assert_eq!(reports.fetch_all().unwrap(), backup);
        assert!(reports.fetch_day(day(1)).unwrap().is_none());
    }

    #[test_context(StorageTestContext)]
    #[test]
    #[serial]
    fn test_clear(_ctx: &mut StorageTestContext) {
        let mut reports = Reports::new().unwrap();
        reports.replace_days(&[report(3, &[("Alice", "QA", "Website", 4.0)]), report(4, &[])]).unwrap();

        assert_eq!(reports.clear().unwrap(), 2);
        assert!(reports.dates().unwrap().is_empty());
        assert!(reports.fetch_all().unwrap().is_empty());
    }

    #[test_context(StorageTestContext)]
    #[test]
    #[serial]
    fn test_rules_round_trip_in_order(_ctx: &mut StorageTestContext) {
        let mut store = Rules::new().unwrap();
        let rules = store
            .load()
            .unwrap()
            .with_group_rule("Mobile", "iOS, Android")
            .unwrap()
            .with_project_merge("Site", &["Web", "Homepage"])
            .unwrap()
            .with_project_merge("Billing", &["Invoices", "Payments"])
            .unwrap();

        store.save(&rules).unwrap();
        let loaded = Rules::new().unwrap().load().unwrap();

        assert_eq!(loaded, rules);
        assert_eq!(loaded.group_rules[0].canonical_name, "Mobile");
        assert_eq!(loaded.project_rules[1].canonical_name, "Billing");
    }

    #[test_context(StorageTestContext)]
    #[test]
    #[serial]
    fn test_deleted_default_rules_stay_deleted(_ctx: &mut StorageTestContext) {
        let mut store = Rules::new().unwrap();
        store.save(&RuleSet::default()).unwrap();

        // Opening the database again must not re-seed the defaults
        let loaded = Rules::new().unwrap().load().unwrap();
        assert!(loaded.group_rules.is_empty());
    }

    #[test_context(StorageTestContext)]
    #[test]
    #[serial]
    fn test_analysis_context_persists(_ctx: &mut StorageTestContext) {
        let mut settings = Settings::new().unwrap();
        assert_eq!(settings.analysis_context().unwrap(), AnalysisContext::default());

        let mut context = AnalysisContext::default();
        context.set_mode(AnalysisMode::Group);
        context.toggle("QA");
        settings.save_analysis_context(&context).unwrap();

        let loaded = Settings::new().unwrap().analysis_context().unwrap();
        assert_eq!(loaded.mode, AnalysisMode::Group);
        assert_eq!(loaded.active_filter.as_deref(), Some("QA"));
    }

    #[test_context(StorageTestContext)]
    #[test]
    #[serial]
    fn test_settings_overwrite(_ctx: &mut StorageTestContext) {
        let mut settings = Settings::new().unwrap();
        settings.set("window", &7u32).unwrap();
        settings.set("window", &14u32).unwrap();

        assert_eq!(settings.get::<u32>("window").unwrap(), Some(14));
        assert_eq!(settings.get::<u32>("missing").unwrap(), None);
    }
}
