//! Multi-day trend pivot.
//!
//! Turns an ascending run of daily reports into a dense date × entity matrix
//! of hours. Missing combinations are stored as `0.0`, so every cell of the
//! matrix exists.
//!
//! ## Columns
//!
//! All entity keys seen in the window are collected and sorted by their
//! window total, largest first. Which of them become matrix columns depends
//! on the mode:
//!
//! - **Person / Project**: the entities in the caller's [`SelectionState`].
//!   A pending select-all is resolved here, once, against the discovered set.
//! - **Group**: every group, or only the drill-down group when a filter is
//!   active.
//!
//! ## Group averages
//!
//! In group mode each day also carries the number of distinct people who
//! reported (restricted to the drill-down group when one is active) and their
//! average hours. A day nobody reported on has no average rather than a
//! division by zero.
//!
//! ## Usage
//!
//! ```rust
//! use chrono::NaiveDate;
//! use dayboard::libs::entry::{AnalysisMode, DailyReport, WorkEntry};
//! use dayboard::libs::normalize::{FallbackLabels, Normalizer};
//! use dayboard::libs::rules::RuleSet;
//! use dayboard::libs::selection::SelectionState;
//! use dayboard::libs::trend::build_trend_matrix;
//!
//! let day = NaiveDate::from_ymd_opt(2025, 3, 3).unwrap();
//! let reports = vec![DailyReport::new(day, vec![WorkEntry::new("Alice", "QA", "Website", 4.0)])];
//! let (rules, labels) = (RuleSet::default(), FallbackLabels::default());
//! let mut selection = SelectionState::default();
//!
//! let matrix = build_trend_matrix(&reports, AnalysisMode::Project, None, &mut selection, &Normalizer::new(&rules, &labels))?;
//! assert_eq!(matrix.cell(day, "Website"), Some(4.0));
//! # Ok::<(), dayboard::libs::error::Error>(())
//! ```

use crate::libs::entry::{AnalysisMode, DailyReport};
use crate::libs::error::{Error, Result};
use crate::libs::normalize::Normalizer;
use crate::libs::selection::SelectionState;
use chrono::{Duration, NaiveDate};
use serde::Serialize;
use std::collections::{BTreeMap, HashMap, HashSet};

/// Per-day head count and average hours in group mode.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupDayStats {
    pub total_hours: f64,
    pub people: usize,
    /// `None` when nobody reported that day.
    pub average: Option<f64>,
}

/// Entities left out of a comparison view, bucketed for a picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnselectedGroup {
    pub label: String,
    pub entities: Vec<String>,
}

/// Dense hours matrix over a date window.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendMatrix {
    pub mode: AnalysisMode,
    pub dates: Vec<NaiveDate>,
    /// Columns of the matrix, in descending window-total order.
    pub entities: Vec<String>,
    /// Every entity seen in the window, in descending window-total order.
    pub discovered: Vec<String>,
    /// Hint for chart hosts: draw columns stacked.
    pub stacked: bool,
    pub group_stats: Option<Vec<GroupDayStats>>,
    cells: Vec<Vec<f64>>,
    row_totals: Vec<f64>,
    discovered_totals: Vec<f64>,
    #[serde(skip)]
    selected: HashSet<String>,
    #[serde(skip)]
    person_groups: HashMap<String, String>,
}

impl TrendMatrix {
    /// Hours for `entity` on `date`, or `None` if either is not in the matrix.
    pub fn cell(&self, date: NaiveDate, entity: &str) -> Option<f64> {
        let row = self.date_index(date)?;
        let col = self.entities.iter().position(|e| e == entity)?;
        Some(self.cells[row][col])
    }

    /// Hours of one date across all columns.
    pub fn row(&self, date: NaiveDate) -> Option<&[f64]> {
        self.date_index(date).map(|i| self.cells[i].as_slice())
    }

    /// Sum of the displayed columns on `date`.
    pub fn row_total(&self, date: NaiveDate) -> Option<f64> {
        self.date_index(date).map(|i| self.row_totals[i])
    }

    /// Window total of any discovered entity, displayed or not.
    pub fn entity_total(&self, entity: &str) -> Option<f64> {
        let i = self.discovered.iter().position(|e| e == entity)?;
        Some(self.discovered_totals[i])
    }

    pub fn group_day(&self, date: NaiveDate) -> Option<&GroupDayStats> {
        let i = self.date_index(date)?;
        self.group_stats.as_ref().map(|stats| &stats[i])
    }

    pub fn is_empty(&self) -> bool {
        self.discovered.is_empty()
    }

    /// Entities that are discovered but not selected in a comparison mode.
    ///
    /// People are bucketed by their canonical group. Projects all land in one
    /// bucket named `project_bucket`. Buckets are sorted by label and keep the
    /// window-total order inside.
    pub fn unselected(&self, project_bucket: &str) -> Vec<UnselectedGroup> {
        if !self.mode.is_comparison() {
            return Vec::new();
        }

        let mut buckets: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for entity in self.discovered.iter().filter(|e| !self.selected.contains(*e)) {
            let label = match self.mode {
                AnalysisMode::Person => self.person_groups.get(entity).cloned().unwrap_or_default(),
                _ => project_bucket.to_string(),
            };
            buckets.entry(label).or_default().push(entity.clone());
        }

        buckets
            .into_iter()
            .map(|(label, entities)| UnselectedGroup { label, entities })
            .collect()
    }

    fn date_index(&self, date: NaiveDate) -> Option<usize> {
        self.dates.iter().position(|d| *d == date)
    }
}

/// Longest trend window, about ten years.
pub const MAX_WINDOW_DAYS: u32 = 3660;

/// The `days` consecutive dates ending with `today`, oldest first.
///
/// Fails with [`Error::WindowOutOfRange`] above [`MAX_WINDOW_DAYS`] or when
/// the window would start before the earliest representable date.
pub fn window_dates(today: NaiveDate, days: u32) -> Result<Vec<NaiveDate>> {
    if days > MAX_WINDOW_DAYS {
        return Err(Error::WindowOutOfRange(days));
    }

    (0..days as i64)
        .rev()
        .map(|back| today.checked_sub_signed(Duration::days(back)).ok_or(Error::WindowOutOfRange(days)))
        .collect()
}

/// Pivots `reports` into a [`TrendMatrix`].
///
/// `reports` must be strictly ascending by date. Gaps are allowed but callers
/// normally fill them with [`DailyReport::empty`] so that every day of the
/// window gets a row.
///
/// `selection` is only consulted in person and project mode. A pending
/// select-all is resolved against the discovered entities and cleared, which
/// is visible to the caller afterwards.
pub fn build_trend_matrix(
    reports: &[DailyReport],
    mode: AnalysisMode,
    active_filter: Option<&str>,
    selection: &mut SelectionState,
    normalizer: &Normalizer,
) -> Result<TrendMatrix> {
    for pair in reports.windows(2) {
        if pair[1].date <= pair[0].date {
            return Err(Error::NonMonotonicDates {
                previous: pair[0].date,
                next: pair[1].date,
            });
        }
    }

    let mut first_seen: Vec<String> = Vec::new();
    let mut totals: HashMap<String, f64> = HashMap::new();
    let mut per_day: Vec<HashMap<String, f64>> = Vec::with_capacity(reports.len());
    let mut person_groups: HashMap<String, String> = HashMap::new();
    let mut day_stats: Vec<GroupDayStats> = Vec::with_capacity(reports.len());

    for report in reports {
        let mut day: HashMap<String, f64> = HashMap::new();
        let mut people: HashSet<&str> = HashSet::new();
        let mut day_hours = 0.0;

        for entry in &report.entries {
            let key = normalizer.entity_key(entry, mode);

            if mode == AnalysisMode::Person {
                person_groups.insert(key.clone(), normalizer.group(&entry.raw_group));
            }
            if mode == AnalysisMode::Group && active_filter.map_or(true, |f| f == key) {
                day_hours += entry.hours;
                people.insert(entry.person.trim());
            }

            *day.entry(key.clone()).or_insert(0.0) += entry.hours;
            match totals.get_mut(&key) {
                Some(total) => *total += entry.hours,
                None => {
                    totals.insert(key.clone(), entry.hours);
                    first_seen.push(key);
                }
            }
        }

        day_stats.push(GroupDayStats {
            total_hours: day_hours,
            people: people.len(),
            average: (!people.is_empty()).then(|| day_hours / people.len() as f64),
        });
        per_day.push(day);
    }

    let mut discovered = first_seen;
    discovered.sort_by(|a, b| {
        let (ta, tb) = (totals.get(a).copied().unwrap_or(0.0), totals.get(b).copied().unwrap_or(0.0));
        tb.total_cmp(&ta)
    });
    let discovered_totals: Vec<f64> = discovered.iter().map(|e| totals.get(e).copied().unwrap_or(0.0)).collect();

    let mut selected: HashSet<String> = HashSet::new();
    let (entities, stacked): (Vec<String>, bool) = match mode {
        AnalysisMode::Group => {
            let columns = match active_filter {
                Some(filter) => discovered.iter().filter(|e| *e == filter).cloned().collect(),
                None => discovered.clone(),
            };
            (columns, true)
        }
        AnalysisMode::Person | AnalysisMode::Project => {
            selection.apply_pending(&discovered);
            let columns: Vec<String> = discovered.iter().filter(|e| selection.is_selected(e)).cloned().collect();
            let all_selected = !discovered.is_empty() && columns.len() == discovered.len();
            selected = columns.iter().cloned().collect();
            (columns, mode == AnalysisMode::Project && all_selected)
        }
    };

    let cells: Vec<Vec<f64>> = per_day
        .iter()
        .map(|day| entities.iter().map(|e| day.get(e).copied().unwrap_or(0.0)).collect())
        .collect();
    let row_totals: Vec<f64> = cells.iter().map(|row| row.iter().sum()).collect();

    Ok(TrendMatrix {
        mode,
        dates: reports.iter().map(|r| r.date).collect(),
        entities,
        discovered,
        stacked,
        group_stats: (mode == AnalysisMode::Group).then_some(day_stats),
        cells,
        row_totals,
        discovered_totals,
        selected,
        person_groups,
    })
}
