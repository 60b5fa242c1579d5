#[cfg(test)]
mod tests {
    use dayboard::libs::entry::WorkEntry;
    use dayboard::libs::normalize::{FallbackLabels, Normalizer};
    use dayboard::libs::overview::{summarize_day, DayOverview, HoursBand};
    use dayboard::libs::rules::RuleSet;

    fn summarize(entries: &[WorkEntry], filter: Option<&str>) -> DayOverview {
        let rules = RuleSet::with_defaults();
        let labels = FallbackLabels::default();
        summarize_day(entries, filter, &Normalizer::new(&rules, &labels))
    }

    fn sample_day() -> Vec<WorkEntry> {
        vec![
            WorkEntry::new("Alice", "QA Team", "Website", 4.0),
            WorkEntry::new("Bob", "Web", "API", 11.0),
            WorkEntry::new("Alice", "Web", "【Bug】Website", 4.5),
            WorkEntry::new("Carol", "QA", "API", 3.0),
            WorkEntry::new("", "", "Docs", 1.0),
        ]
    }

    #[test]
    fn test_hours_band() {
        assert_eq!(HoursBand::of(7.9), HoursBand::Under);
        assert_eq!(HoursBand::of(8.0), HoursBand::Normal);
        assert_eq!(HoursBand::of(10.0), HoursBand::Normal);
        assert_eq!(HoursBand::of(10.5), HoursBand::Over);
    }

    #[test]
    fn test_people_grouped_by_full_name() {
        let overview = summarize(&sample_day(), None);

        assert_eq!(overview.people_count, 4);
        assert_eq!(overview.total_hours, 23.5);

        let alice = overview.people.iter().find(|p| p.name == "Alice").unwrap();
        assert_eq!(alice.total_hours, 8.5);
        assert_eq!(alice.entries.len(), 2);
        assert_eq!(alice.band, HoursBand::Normal);
        // The first row decides the group
        assert_eq!(alice.group, "QA");
        assert_eq!(alice.original_group, "QA Team");
    }

    #[test]
    fn test_blank_names_and_groups_use_fallbacks() {
        let overview = summarize(&sample_day(), None);
        let unknown = overview.people.iter().find(|p| p.name == "Unknown").unwrap();

        assert_eq!(unknown.group, "Other");
        assert_eq!(unknown.original_group, "Other");
        assert_eq!(unknown.band, HoursBand::Under);
    }

    #[test]
    fn test_people_sorted_by_group_then_hours() {
        let overview = summarize(&sample_day(), None);
        let order: Vec<(&str, &str)> = overview.people.iter().map(|p| (p.group.as_str(), p.name.as_str())).collect();

        assert_eq!(order, vec![("Other", "Unknown"), ("QA", "Alice"), ("QA", "Carol"), ("Web", "Bob")]);
        assert_eq!(overview.groups, vec!["Other", "QA", "Web"]);
    }

    #[test]
    fn test_group_filter() {
        let overview = summarize(&sample_day(), Some("QA"));

        assert_eq!(overview.filter.as_deref(), Some("QA"));
        assert_eq!(overview.people_count, 4);
        assert_eq!(overview.filtered_people_count, 2);
        assert_eq!(overview.filtered_hours, 11.5);
        assert_eq!(overview.total_hours, 23.5);

        // Project breakdown follows the filtered people
        assert_eq!(overview.projects.get("Website").map(|e| e.hours), Some(8.5));
        assert_eq!(overview.projects.get("API").map(|e| e.hours), Some(3.0));
        assert!(overview.projects.get("Docs").is_none());
    }

    #[test]
    fn test_missing_group_filter_falls_back_to_all() {
        let overview = summarize(&sample_day(), Some("Sales"));

        assert_eq!(overview.filter, None);
        assert_eq!(overview.filtered_people_count, 4);
        assert_eq!(overview.filtered_hours, overview.total_hours);
    }

    #[test]
    fn test_overtime_band() {
        let overview = summarize(&sample_day(), Some("Web"));
        let bob = &overview.people[0];

        assert_eq!(bob.name, "Bob");
        assert_eq!(bob.band, HoursBand::Over);
    }

    #[test]
    fn test_empty_day() {
        let overview = summarize(&[], None);

        assert!(overview.people.is_empty());
        assert!(overview.groups.is_empty());
        assert!(overview.projects.is_empty());
        assert_eq!(overview.total_hours, 0.0);
    }
}
