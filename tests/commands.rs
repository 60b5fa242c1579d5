#[cfg(test)]
mod tests {
    use clap::Parser;
    use dayboard::commands::Cli;
    use dayboard::db::rules::Rules;
    use dayboard::libs::rules::default_group_rules;
    use serial_test::serial;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct CommandTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for CommandTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            CommandTestContext { _temp_dir: temp_dir }
        }
    }

    fn run(args: &[&str]) -> anyhow::Result<()> {
        let mut argv = vec!["dayboard"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv)?.run()
    }

    fn group_rule_count() -> usize {
        Rules::new().unwrap().load().unwrap().group_rules.len()
    }

    #[test_context(CommandTestContext)]
    #[test]
    #[serial]
    fn test_rules_list_by_default(_ctx: &mut CommandTestContext) {
        assert!(run(&["rules"]).is_ok());
    }

    #[test_context(CommandTestContext)]
    #[test]
    #[serial]
    fn test_add_group_rule(_ctx: &mut CommandTestContext) {
        run(&["rules", "add-group", "Mobile", "iOS, Android"]).unwrap();

        let rules = Rules::new().unwrap().load().unwrap();
        assert_eq!(rules.group_rules[0].canonical_name, "Mobile");
        assert_eq!(rules.group_rules.len(), default_group_rules().len() + 1);
    }

    #[test_context(CommandTestContext)]
    #[test]
    #[serial]
    fn test_blank_alias_fails_the_command(_ctx: &mut CommandTestContext) {
        let err = run(&["rules", "add-group", "  ", "iOS"]).unwrap_err();

        assert!(err.to_string().contains("Rule not saved"));
        assert_eq!(group_rule_count(), default_group_rules().len());
    }

    #[test_context(CommandTestContext)]
    #[test]
    #[serial]
    fn test_blank_merge_target_fails_the_command(_ctx: &mut CommandTestContext) {
        assert!(run(&["rules", "merge", "--into", " ", "Web", "Homepage"]).is_err());
        assert!(Rules::new().unwrap().load().unwrap().project_rules.is_empty());
    }

    #[test_context(CommandTestContext)]
    #[test]
    #[serial]
    fn test_merge_needs_two_names(_ctx: &mut CommandTestContext) {
        assert!(Cli::try_parse_from(["dayboard", "rules", "merge", "--into", "Site", "Web"]).is_err());
    }

    #[test_context(CommandTestContext)]
    #[test]
    #[serial]
    fn test_missing_rule_index_fails_the_command(_ctx: &mut CommandTestContext) {
        assert!(run(&["rules", "rename", "0", "Site"]).is_err());
        assert!(run(&["rules", "delete", "project", "0", "--yes"]).is_err());
        assert!(run(&["rules", "edit-group", "99", "QA", "QA Team"]).is_err());
    }

    #[test_context(CommandTestContext)]
    #[test]
    #[serial]
    fn test_delete_group_rule(_ctx: &mut CommandTestContext) {
        run(&["rules", "delete", "group", "0", "--yes"]).unwrap();

        assert_eq!(group_rule_count(), default_group_rules().len() - 1);
    }

    #[test_context(CommandTestContext)]
    #[test]
    #[serial]
    fn test_trend_rejects_oversized_window(_ctx: &mut CommandTestContext) {
        assert!(run(&["trend", "--days", "100000000", "--today", "2025-03-03"]).is_err());
        assert!(run(&["trend", "--days", "3", "--today", "2025-03-03"]).is_ok());
    }
}
