#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use dayboard::libs::aggregate::aggregate_by_entity;
    use dayboard::libs::entry::{AnalysisMode, DailyReport, WorkEntry};
    use dayboard::libs::export::{read_backup, write_backup, ExportFormat, Exporter};
    use dayboard::libs::normalize::{FallbackLabels, Normalizer};
    use dayboard::libs::rules::RuleSet;
    use dayboard::libs::selection::SelectionState;
    use dayboard::libs::trend::{build_trend_matrix, TrendMatrix};
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct ExportTestContext {
        temp_dir: TempDir,
    }

    impl TestContext for ExportTestContext {
        fn setup() -> Self {
            ExportTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
            }
        }
    }

    impl ExportTestContext {
        fn path(&self, name: &str) -> PathBuf {
            self.temp_dir.path().join(name)
        }
    }

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, d).unwrap()
    }

    fn reports() -> Vec<DailyReport> {
        vec![
            DailyReport::new(
                day(3),
                vec![WorkEntry::new("Alice", "QA", "Website", 4.0), WorkEntry::new("Bob", "QA", "API", 6.0)],
            ),
            DailyReport::empty(day(4)),
        ]
    }

    fn group_trend() -> TrendMatrix {
        let rules = RuleSet::with_defaults();
        let labels = FallbackLabels::default();
        build_trend_matrix(&reports(), AnalysisMode::Group, None, &mut SelectionState::default(), &Normalizer::new(&rules, &labels))
            .unwrap()
    }

    #[test]
    fn test_default_output_name() {
        let exporter = Exporter::new(ExportFormat::Excel, None);
        let name = exporter.output_path().to_string_lossy().to_string();

        assert!(name.starts_with("dayboard_export_"));
        assert!(name.ends_with(".xlsx"));
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_stats_csv(ctx: &mut ExportTestContext) {
        let rules = RuleSet::default();
        let labels = FallbackLabels::default();
        let stats = aggregate_by_entity(&reports()[0].entries, AnalysisMode::Project, &Normalizer::new(&rules, &labels));
        let path = ctx.path("stats.csv");

        Exporter::new(ExportFormat::Csv, Some(path.clone())).export_stats(day(3), &stats).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Name,Hours,Share");
        assert_eq!(lines[1], "API,6.0,60.0%");
        assert_eq!(lines[2], "Website,4.0,40.0%");
        assert_eq!(lines[3], "Total,10.0,");
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_trend_csv_with_group_average(ctx: &mut ExportTestContext) {
        let path = ctx.path("trend.csv");

        Exporter::new(ExportFormat::Csv, Some(path.clone())).export_trend(&group_trend()).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Date,QA,Total,People,Avg/person");
        assert_eq!(lines[1], "2025-03-03,10.0,10.0,2,5.0");
        assert_eq!(lines[2], "2025-03-04,0.0,0.0,0,-");
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_trend_json(ctx: &mut ExportTestContext) {
        let path = ctx.path("trend.json");

        Exporter::new(ExportFormat::Json, Some(path.clone())).export_trend(&group_trend()).unwrap();

        let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(json["mode"], "group");
        assert_eq!(json["stacked"], true);
        assert_eq!(json["dates"][0], "2025-03-03");
        assert_eq!(json["group_stats"][0]["average"], 5.0);
        assert!(json["group_stats"][1]["average"].is_null());
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_trend_excel(ctx: &mut ExportTestContext) {
        let path = ctx.path("trend.xlsx");

        Exporter::new(ExportFormat::Excel, Some(path.clone())).export_trend(&group_trend()).unwrap();

        assert!(fs::metadata(&path).unwrap().len() > 0);
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_backup_restores_reports(ctx: &mut ExportTestContext) {
        let path = ctx.path("backup.json");

        assert_eq!(write_backup(&path, &reports()).unwrap(), 2);
        let restored = read_backup(&path).unwrap();

        assert_eq!(restored, reports());
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_backup_uses_row_keys(ctx: &mut ExportTestContext) {
        let path = ctx.path("backup.json");
        write_backup(&path, &reports()).unwrap();

        let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        let row = &json["2025-03-03"]["rows"][0];

        assert_eq!(row["name"], "Alice");
        assert_eq!(row["group"], "QA");
        assert_eq!(row["project"], "Website");
        assert_eq!(row["issue"], "");
        assert_eq!(row["hours"], 4.0);
        assert!(row.get("person").is_none());
        assert!(row.get("raw_project").is_none());
        assert_eq!(json["2025-03-04"]["rows"], serde_json::json!([]));
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_backup_accepts_field_name_rows(ctx: &mut ExportTestContext) {
        let path = ctx.path("legacy.json");
        fs::write(
            &path,
            r#"{
                "2025-03-04": {"config": {"projectRules": []}, "rows": [{"person": "Bob", "raw_group": "Web", "raw_project": "API", "hours": "2"}]},
                "2025/3/3": {"rows": []}
            }"#,
        )
        .unwrap();

        let restored = read_backup(&path).unwrap();

        assert_eq!(restored.len(), 2);
        assert_eq!(restored[0].date, day(3));
        assert_eq!(restored[1].entries[0].person, "Bob");
        assert_eq!(restored[1].entries[0].raw_project, "API");
        assert_eq!(restored[1].entries[0].hours, 2.0);
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_backup_rejects_bad_dates(ctx: &mut ExportTestContext) {
        let path = ctx.path("broken.json");
        fs::write(&path, r#"{"yesterday": {"rows": []}}"#).unwrap();

        assert!(read_backup(&path).is_err());
    }
}
