#[cfg(test)]
mod tests {
    use dayboard::libs::entry::{AnalysisMode, WorkEntry};
    use dayboard::libs::normalize::{person_key, resolve_label, strip_tags, FallbackLabels, Normalizer};
    use dayboard::libs::rules::{default_group_rules, AliasRule, RuleSet};

    #[test]
    fn test_strip_tags() {
        assert_eq!(strip_tags("【Tag】Website"), "Website");
        assert_eq!(strip_tags("  【a】X【b】Y "), "XY");
        assert_eq!(strip_tags("Website"), "Website");
        assert_eq!(strip_tags("【Tag】"), "");
    }

    #[test]
    fn test_strip_tags_keeps_unclosed_bracket() {
        assert_eq!(strip_tags("【open Website"), "【open Website");
        assert_eq!(strip_tags("【a】X【open"), "X【open");
    }

    #[test]
    fn test_resolve_label_with_rules() {
        let rules = default_group_rules();

        assert_eq!(resolve_label("QA Team", &rules, "Other"), "QA");
        assert_eq!(resolve_label("  QA  ", &rules, "Other"), "QA");
        assert_eq!(resolve_label("【Support Team】", &rules, "Other"), "Support");
        assert_eq!(resolve_label("Design", &rules, "Other"), "Design");
    }

    #[test]
    fn test_resolve_label_blank_uses_fallback() {
        let rules = default_group_rules();

        assert_eq!(resolve_label("", &rules, "Other"), "Other");
        assert_eq!(resolve_label("   ", &rules, "Uncategorized"), "Uncategorized");
    }

    #[test]
    fn test_resolve_label_is_case_sensitive() {
        let rules = default_group_rules();
        assert_eq!(resolve_label("qa team", &rules, "Other"), "qa team");
    }

    #[test]
    fn test_resolve_label_first_rule_wins() {
        let rules = vec![
            AliasRule::new("First", ["Shared", "A"]),
            AliasRule::new("Second", ["Shared", "B"]),
        ];

        assert_eq!(resolve_label("Shared", &rules, "Other"), "First");
        assert_eq!(resolve_label("B", &rules, "Other"), "Second");
    }

    #[test]
    fn test_resolve_label_idempotent() {
        let rules = default_group_rules();

        for raw in ["QA Team", "Web", "Database Team", "Design", ""] {
            let once = resolve_label(raw, &rules, "Other");
            assert_eq!(resolve_label(&once, &rules, "Other"), once);
        }
    }

    #[test]
    fn test_person_key() {
        assert_eq!(person_key("Alexander", "Unknown"), "ander");
        assert_eq!(person_key("Bob", "Unknown"), "Bob");
        assert_eq!(person_key("  Alice  ", "Unknown"), "Alice");
        assert_eq!(person_key("Alexander  ", "Unknown"), person_key("Alexander", "Unknown"));
        assert_eq!(person_key("", "Unknown"), "Unknown");
        assert_eq!(person_key("王小明同学们", "Unknown"), "小明同学们");
    }

    #[test]
    fn test_normalizer_project_strips_tags_before_rules() {
        let rules = RuleSet {
            project_rules: vec![AliasRule::new("Site", ["Website"])],
            group_rules: Vec::new(),
        };
        let labels = FallbackLabels::default();
        let normalizer = Normalizer::new(&rules, &labels);

        assert_eq!(normalizer.project("【Tag】Website"), "Site");
        assert_eq!(normalizer.project("Website"), "Site");
        assert_eq!(normalizer.project("【Tag】"), "Uncategorized");
    }

    #[test]
    fn test_normalizer_separate_fallbacks() {
        let rules = RuleSet::default();
        let labels = FallbackLabels::default();
        let normalizer = Normalizer::new(&rules, &labels);

        assert_eq!(normalizer.group(""), "Other");
        assert_eq!(normalizer.project(""), "Uncategorized");
        assert_eq!(normalizer.person(""), "Unknown");
    }

    #[test]
    fn test_normalizer_custom_fallbacks() {
        let rules = RuleSet::default();
        let labels = FallbackLabels {
            group: "其他".to_string(),
            project: "未分類".to_string(),
            person: "?".to_string(),
        };
        let normalizer = Normalizer::new(&rules, &labels);

        assert_eq!(normalizer.group(" "), "其他");
        assert_eq!(normalizer.project(""), "未分類");
        assert_eq!(normalizer.person(""), "?");
    }

    #[test]
    fn test_entity_key_per_mode() {
        let rules = RuleSet::with_defaults();
        let labels = FallbackLabels::default();
        let normalizer = Normalizer::new(&rules, &labels);
        let entry = WorkEntry::new("Alexander", "Web Team", "【Q1】Checkout", 3.0);

        assert_eq!(normalizer.entity_key(&entry, AnalysisMode::Project), "Checkout");
        assert_eq!(normalizer.entity_key(&entry, AnalysisMode::Person), "ander");
        assert_eq!(normalizer.entity_key(&entry, AnalysisMode::Group), "Web");
    }
}
