//! Imported report rows and the analysis dimensions they are grouped by.
//!
//! A [`WorkEntry`] is one line of a team's daily timesheet exactly as it was
//! imported. Raw labels are never rewritten here; canonical names are derived
//! on demand by the normalizer so that rule edits apply retroactively.
//!
//! ## Hours
//!
//! Spreadsheet exports are messy. The `hours` field accepts numbers, numeric
//! strings (`"2.5"`, `"3h"`), blanks and nulls. Anything that does not start
//! with a number, and any negative or non-finite value, becomes `0.0`.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Dimension used to pivot hours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisMode {
    /// Hours per canonical project name.
    #[default]
    Project,
    /// Hours per person, keyed by the short display name.
    Person,
    /// Hours per canonical group name.
    Group,
}

impl AnalysisMode {
    /// Person and project views compare a user-chosen subset of entities.
    pub fn is_comparison(self) -> bool {
        matches!(self, AnalysisMode::Person | AnalysisMode::Project)
    }
}

impl fmt::Display for AnalysisMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AnalysisMode::Project => "project",
            AnalysisMode::Person => "person",
            AnalysisMode::Group => "group",
        };
        write!(f, "{}", name)
    }
}

/// One row of reported work.
///
/// Serialized with the backup row keys `name`, `group`, `project` and
/// `issue`. The field names themselves are accepted as aliases on read.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkEntry {
    #[serde(default, rename = "name", alias = "person")]
    pub person: String,
    #[serde(default, rename = "group", alias = "raw_group")]
    pub raw_group: String,
    #[serde(default, rename = "project", alias = "raw_project")]
    pub raw_project: String,
    #[serde(default, rename = "issue", alias = "issue_id")]
    pub issue_id: String,
    #[serde(default)]
    pub content: String,
    #[serde(default, deserialize_with = "lenient_hours")]
    pub hours: f64,
    #[serde(default)]
    pub link: String,
}

impl WorkEntry {
    pub fn new(person: &str, raw_group: &str, raw_project: &str, hours: f64) -> Self {
        Self {
            person: person.to_string(),
            raw_group: raw_group.to_string(),
            raw_project: raw_project.to_string(),
            hours: sanitize_hours(hours),
            ..Default::default()
        }
    }
}

/// All entries reported for a single calendar date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyReport {
    pub date: NaiveDate,
    pub entries: Vec<WorkEntry>,
}

impl DailyReport {
    pub fn new(date: NaiveDate, entries: Vec<WorkEntry>) -> Self {
        Self { date, entries }
    }

    /// A report for a date nobody filed anything on.
    pub fn empty(date: NaiveDate) -> Self {
        Self { date, entries: Vec::new() }
    }

    pub fn total_hours(&self) -> f64 {
        self.entries.iter().map(|e| e.hours).sum()
    }
}

/// Parses the leading decimal number of `raw`, ignoring surrounding text.
///
/// `"2.5"` gives 2.5, `" 3h"` gives 3.0, `"-1"` and `"abc"` give 0.0.
pub fn parse_hours(raw: &str) -> f64 {
    let trimmed = raw.trim_start();
    let mut end = 0;
    let mut seen_digit = false;
    let mut seen_dot = false;

    for (i, c) in trimmed.char_indices() {
        match c {
            '+' | '-' if i == 0 => {}
            '0'..='9' => seen_digit = true,
            '.' if !seen_dot => seen_dot = true,
            _ => break,
        }
        end = i + c.len_utf8();
    }

    if !seen_digit {
        return 0.0;
    }

    trimmed[..end].parse::<f64>().map(sanitize_hours).unwrap_or(0.0)
}

fn sanitize_hours(hours: f64) -> f64 {
    if hours.is_finite() && hours > 0.0 {
        hours
    } else {
        0.0
    }
}

fn lenient_hours<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
        Other(serde_json::Value),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Number(n) => sanitize_hours(n),
        Raw::Text(s) => parse_hours(&s),
        Raw::Other(_) => 0.0,
    })
}
