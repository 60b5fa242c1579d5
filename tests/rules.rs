#[cfg(test)]
mod tests {
    use dayboard::libs::error::{Error, ErrorKind};
    use dayboard::libs::rules::{split_source_names, AliasRule, RuleKind, RuleSet};

    fn project_rules(rules: &[(&str, &[&str])]) -> RuleSet {
        RuleSet {
            project_rules: rules.iter().map(|(alias, sources)| AliasRule::new(alias, sources.iter().copied())).collect(),
            group_rules: Vec::new(),
        }
    }

    #[test]
    fn test_alias_rule_drops_duplicates_and_blanks() {
        let rule = AliasRule::new("QA", ["QA Team", "", "QA", "QA Team", "  "]);
        assert_eq!(rule.source_names, vec!["QA Team", "QA"]);
        assert!(rule.matches("QA"));
        assert!(!rule.matches("qa"));
    }

    #[test]
    fn test_split_source_names() {
        assert_eq!(split_source_names("QA Team, QA，Support\nWeb\r\n"), vec!["QA Team", "QA", "Support", "Web"]);
        assert!(split_source_names(" , \n ").is_empty());
    }

    #[test]
    fn test_defaults_seed_group_rules_only() {
        let rules = RuleSet::with_defaults();
        assert!(rules.project_rules.is_empty());
        assert_eq!(rules.group_rules.len(), 5);
        assert_eq!(rules.group_rules[0].canonical_name, "QA");
    }

    #[test]
    fn test_add_group_rule_prepends() {
        let rules = RuleSet::with_defaults();
        let edited = rules.with_group_rule(" Mobile ", "iOS, Android").unwrap();

        assert_eq!(edited.group_rules.len(), 6);
        assert_eq!(edited.group_rules[0].canonical_name, "Mobile");
        assert_eq!(edited.group_rules[0].source_names, vec!["iOS", "Android"]);
        // Copy-on-write: the original is untouched
        assert_eq!(rules.group_rules.len(), 5);
    }

    #[test]
    fn test_add_group_rule_validation() {
        let rules = RuleSet::default();

        let err = rules.with_group_rule("  ", "A").unwrap_err();
        assert_eq!(err, Error::BlankAlias);
        assert_eq!(err.kind(), ErrorKind::InvalidInput);

        assert_eq!(rules.with_group_rule("QA", " , ").unwrap_err(), Error::NoSourceNames);
    }

    #[test]
    fn test_replace_group_rule() {
        let rules = RuleSet::with_defaults();
        let edited = rules.with_group_rule_replaced(1, "Engineering", "Tech, Tech Team, Dev").unwrap();

        assert_eq!(edited.group_rules[1].canonical_name, "Engineering");
        assert_eq!(edited.group_rules[1].source_names, vec!["Tech", "Tech Team", "Dev"]);
        assert_eq!(edited.group_rules.len(), 5);

        let err = rules.with_group_rule_replaced(9, "X", "Y").unwrap_err();
        assert_eq!(err, Error::RuleNotFound { kind: RuleKind::Group, index: 9 });
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn test_merge_requires_two_names() {
        let rules = RuleSet::default();

        assert_eq!(rules.with_project_merge("Site", &["Web"]).unwrap_err(), Error::TooFewMergeNames(1));
        assert_eq!(rules.with_project_merge(" ", &["Web", "Blog"]).unwrap_err(), Error::BlankAlias);
    }

    #[test]
    fn test_merge_appends_new_rule() {
        let rules = project_rules(&[("Billing", &["Invoices", "Payments"])]);
        let edited = rules.with_project_merge("Site", &["Web", "Homepage"]).unwrap();

        assert_eq!(edited.project_rules.len(), 2);
        assert_eq!(edited.project_rules[0].canonical_name, "Billing");
        assert_eq!(edited.project_rules[1].canonical_name, "Site");
        assert_eq!(edited.project_rules[1].source_names, vec!["Web", "Homepage"]);
    }

    #[test]
    fn test_merge_absorbs_existing_rules() {
        let rules = project_rules(&[("Site", &["Web", "Homepage"]), ("Billing", &["Invoices"])]);
        let edited = rules.with_project_merge("Portal", &["Site", "Blog"]).unwrap();

        assert_eq!(edited.project_rules.len(), 2);
        assert_eq!(edited.project_rules[0].canonical_name, "Billing");
        assert_eq!(edited.project_rules[1].canonical_name, "Portal");
        assert_eq!(edited.project_rules[1].source_names, vec!["Web", "Homepage", "Blog"]);
    }

    #[test]
    fn test_rename_project_rule() {
        let rules = project_rules(&[("Site", &["Web", "Homepage"])]);
        let edited = rules.with_project_rule_renamed(0, "Website").unwrap();

        assert_eq!(edited.project_rules[0].canonical_name, "Website");
        assert_eq!(edited.project_rules[0].source_names, rules.project_rules[0].source_names);
        assert_eq!(rules.with_project_rule_renamed(0, "").unwrap_err(), Error::BlankAlias);
        assert_eq!(
            rules.with_project_rule_renamed(1, "X").unwrap_err(),
            Error::RuleNotFound { kind: RuleKind::Project, index: 1 }
        );
    }

    #[test]
    fn test_delete_rule() {
        let rules = RuleSet::with_defaults();
        let edited = rules.without_rule(RuleKind::Group, 0).unwrap();

        assert_eq!(edited.group_rules.len(), 4);
        assert_eq!(edited.group_rules[0].canonical_name, "Tech");
        assert!(rules.without_rule(RuleKind::Project, 0).is_err());
    }
}
