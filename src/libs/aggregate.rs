//! Single-day aggregation of hours per entity.
//!
//! Folds one day's entries into a table of canonical entity names, their
//! summed hours and their share of the day's total. Used by the `stats`
//! command, the project breakdown of the day overview and the exporter.

use crate::libs::entry::{AnalysisMode, WorkEntry};
use crate::libs::normalize::Normalizer;
use serde::Serialize;
use std::collections::HashMap;

/// Hours booked against one canonical entity.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntityTotal {
    pub name: String,
    pub hours: f64,
    /// Share of the day's total, rounded to one decimal place.
    pub percent: f64,
}

/// Per-entity totals for a single day, ordered by descending hours.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AggregationResult {
    pub entities: Vec<EntityTotal>,
    pub total_hours: f64,
}

impl AggregationResult {
    pub fn get(&self, name: &str) -> Option<&EntityTotal> {
        self.entities.iter().find(|e| e.name == name)
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

/// Sums `entries` by their entity key in `mode`.
///
/// Entities with equal hours keep the order in which they were first seen.
/// A zero total yields 0% for every entity instead of NaN.
pub fn aggregate_by_entity<'e, I>(entries: I, mode: AnalysisMode, normalizer: &Normalizer) -> AggregationResult
where
    I: IntoIterator<Item = &'e WorkEntry>,
{
    let mut order: Vec<String> = Vec::new();
    let mut sums: HashMap<String, f64> = HashMap::new();
    let mut total_hours = 0.0;

    for entry in entries {
        let key = normalizer.entity_key(entry, mode);
        match sums.get_mut(&key) {
            Some(hours) => *hours += entry.hours,
            None => {
                sums.insert(key.clone(), entry.hours);
                order.push(key);
            }
        }
        total_hours += entry.hours;
    }

    let mut totals: Vec<(String, f64)> = order
        .into_iter()
        .map(|name| {
            let hours = sums.get(&name).copied().unwrap_or(0.0);
            (name, hours)
        })
        .collect();
    totals.sort_by(|a, b| b.1.total_cmp(&a.1));

    let hours: Vec<f64> = totals.iter().map(|(_, h)| *h).collect();
    let entities = totals
        .into_iter()
        .zip(share_percents(&hours, total_hours))
        .map(|((name, hours), percent)| EntityTotal { name, hours, percent })
        .collect();

    AggregationResult { entities, total_hours }
}

/// Shares of `parts` in `total` as percentages with one decimal.
///
/// Rounds by largest remainder: every share is first cut down to a whole
/// tenth, then the tenths still missing from the rounded total go to the
/// shares that lost the most. The shares of a complete split therefore add
/// up to exactly 100.0. Ties go to the earlier part. A zero total yields 0
/// for every part.
pub fn share_percents(parts: &[f64], total: f64) -> Vec<f64> {
    if total <= 0.0 {
        return vec![0.0; parts.len()];
    }

    let exact: Vec<f64> = parts.iter().map(|part| part / total * 1000.0).collect();
    let mut tenths: Vec<i64> = exact.iter().map(|e| e.floor() as i64).collect();
    let remainders: Vec<f64> = exact.iter().zip(&tenths).map(|(e, t)| e - *t as f64).collect();

    let target = exact.iter().sum::<f64>().round() as i64;
    let missing = (target - tenths.iter().sum::<i64>()).max(0) as usize;

    let mut by_remainder: Vec<usize> = (0..parts.len()).collect();
    by_remainder.sort_by(|&a, &b| remainders[b].total_cmp(&remainders[a]));
    for &i in by_remainder.iter().take(missing) {
        tenths[i] += 1;
    }

    tenths.into_iter().map(|t| t as f64 / 10.0).collect()
}
