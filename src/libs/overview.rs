//! Day overview: who reported what, grouped by person.
//!
//! Builds the per-person summary shown by the `report` command. People are
//! identified by their full trimmed name. Each person keeps the canonical
//! group of their first row, so later rows with a different group label do
//! not move them.
//!
//! ## Group filter
//!
//! An optional group filter narrows the person list and the filtered totals.
//! A filter naming a group that does not appear that day is dropped and the
//! overview falls back to "all groups".

use crate::libs::aggregate::{aggregate_by_entity, AggregationResult};
use crate::libs::entry::{AnalysisMode, WorkEntry};
use crate::libs::normalize::Normalizer;
use serde::Serialize;
use std::collections::{BTreeSet, HashMap};

/// Hours below this mark a short day.
pub const SHORT_DAY_HOURS: f64 = 8.0;
/// Hours above this mark an overtime day.
pub const LONG_DAY_HOURS: f64 = 10.0;

/// Classification of a person's reported day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum HoursBand {
    Under,
    Normal,
    Over,
}

impl HoursBand {
    pub fn of(hours: f64) -> Self {
        if hours < SHORT_DAY_HOURS {
            HoursBand::Under
        } else if hours > LONG_DAY_HOURS {
            HoursBand::Over
        } else {
            HoursBand::Normal
        }
    }
}

/// One person's rows for the day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PersonDay {
    pub name: String,
    pub group: String,
    pub original_group: String,
    pub total_hours: f64,
    pub band: HoursBand,
    pub entries: Vec<WorkEntry>,
}

/// Summary of a single day's report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayOverview {
    /// Canonical groups present that day, sorted.
    pub groups: Vec<String>,
    /// Effective group filter after validation.
    pub filter: Option<String>,
    pub people_count: usize,
    pub total_hours: f64,
    pub filtered_people_count: usize,
    pub filtered_hours: f64,
    /// Filtered people, ordered by group then by descending hours.
    pub people: Vec<PersonDay>,
    /// Project breakdown of the filtered people's rows.
    pub projects: AggregationResult,
}

/// Summarizes one day's entries.
pub fn summarize_day(entries: &[WorkEntry], group_filter: Option<&str>, normalizer: &Normalizer) -> DayOverview {
    let groups: Vec<String> = entries
        .iter()
        .map(|e| normalizer.group(&e.raw_group))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    let filter = group_filter.filter(|f| groups.iter().any(|g| g == f)).map(str::to_string);

    let mut order: Vec<String> = Vec::new();
    let mut people: HashMap<String, PersonDay> = HashMap::new();
    let mut total_hours = 0.0;

    for entry in entries {
        let name = match entry.person.trim() {
            "" => normalizer.labels().person.clone(),
            name => name.to_string(),
        };
        let person = people.entry(name.clone()).or_insert_with(|| {
            order.push(name.clone());
            let original = entry.raw_group.trim();
            PersonDay {
                name,
                group: normalizer.group(&entry.raw_group),
                original_group: if original.is_empty() {
                    normalizer.labels().group.clone()
                } else {
                    original.to_string()
                },
                total_hours: 0.0,
                band: HoursBand::Under,
                entries: Vec::new(),
            }
        });
        person.total_hours += entry.hours;
        person.entries.push(entry.clone());
        total_hours += entry.hours;
    }

    let people_count = order.len();
    let mut filtered: Vec<PersonDay> = order
        .into_iter()
        .filter_map(|name| people.remove(&name))
        .filter(|p| filter.as_deref().map_or(true, |f| p.group == f))
        .map(|mut p| {
            p.band = HoursBand::of(p.total_hours);
            p
        })
        .collect();

    filtered.sort_by(|a, b| a.group.cmp(&b.group).then_with(|| b.total_hours.total_cmp(&a.total_hours)));

    let filtered_hours = filtered.iter().map(|p| p.total_hours).sum();
    let projects = aggregate_by_entity(filtered.iter().flat_map(|p| p.entries.iter()), AnalysisMode::Project, normalizer);

    DayOverview {
        groups,
        filter,
        people_count,
        total_hours,
        filtered_people_count: filtered.len(),
        filtered_hours,
        people: filtered,
        projects,
    }
}
