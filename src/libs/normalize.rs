//! Label normalization for raw report rows.
//!
//! Teams type project and group names by hand, so the same project shows up
//! as `【Urgent】Website`, `Website ` and `Website`. This module maps those
//! raw labels onto canonical names using the user's alias rules.
//!
//! ## Resolution order
//!
//! 1. Trim surrounding whitespace
//! 2. Blank input resolves to the context fallback (`Other` for groups,
//!    `Uncategorized` for projects)
//! 3. The first rule whose source names contain the value wins
//! 4. Otherwise the trimmed value is returned unchanged
//!
//! Every function here is pure. Rules are read at call time and nothing is
//! cached, so edits to the rule lists take effect on the next aggregation.
//!
//! ## Usage
//!
//! ```rust
//! use dayboard::libs::normalize::{resolve_label, FallbackLabels};
//! use dayboard::libs::rules::AliasRule;
//!
//! let rules = vec![AliasRule::new("QA", ["QA Team", "QA"])];
//! let labels = FallbackLabels::default();
//! assert_eq!(resolve_label(" QA Team ", &rules, &labels.group), "QA");
//! assert_eq!(resolve_label("", &rules, &labels.group), "Other");
//! ```

use crate::libs::entry::{AnalysisMode, WorkEntry};
use crate::libs::rules::{AliasRule, RuleSet};
use serde::{Deserialize, Serialize};

/// Number of trailing characters kept for a person's display key.
pub const PERSON_KEY_LEN: usize = 5;

/// Labels substituted for blank values.
///
/// Group and project fallbacks are kept apart so that an unlabeled group and
/// an unlabeled project never collapse into the same bucket name by accident.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FallbackLabels {
    pub group: String,
    pub project: String,
    pub person: String,
}

impl Default for FallbackLabels {
    fn default() -> Self {
        Self {
            group: "Other".to_string(),
            project: "Uncategorized".to_string(),
            person: "Unknown".to_string(),
        }
    }
}

/// Resolves `raw` to its canonical name using `rules` in list order.
pub fn resolve_label(raw: &str, rules: &[AliasRule], fallback: &str) -> String {
    let value = raw.trim();
    if value.is_empty() {
        return fallback.to_string();
    }

    rules
        .iter()
        .find(|rule| rule.matches(value))
        .map(|rule| rule.canonical_name.clone())
        .unwrap_or_else(|| value.to_string())
}

/// Removes every `【...】` tag from `raw` and trims the remainder.
///
/// Tags are matched shortest-first, so `【a】X【b】Y` becomes `XY`. An opening
/// bracket without a matching close is kept as text.
pub fn strip_tags(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut rest = raw;

    while let Some(open) = rest.find('【') {
        let after_open = &rest[open + '【'.len_utf8()..];
        match after_open.find('】') {
            Some(close) => {
                out.push_str(&rest[..open]);
                rest = &after_open[close + '】'.len_utf8()..];
            }
            None => break,
        }
    }
    out.push_str(rest);

    out.trim().to_string()
}

/// Short display key for a person: the last five characters of the trimmed
/// name, so trailing spaces in a cell do not change the key.
pub fn person_key(raw: &str, fallback: &str) -> String {
    let name = raw.trim();
    if name.is_empty() {
        return fallback.to_string();
    }

    let count = name.chars().count();
    name.chars().skip(count.saturating_sub(PERSON_KEY_LEN)).collect()
}

/// Bundles the current rule lists and fallbacks for one aggregation pass.
#[derive(Debug, Clone, Copy)]
pub struct Normalizer<'a> {
    rules: &'a RuleSet,
    labels: &'a FallbackLabels,
}

impl<'a> Normalizer<'a> {
    pub fn new(rules: &'a RuleSet, labels: &'a FallbackLabels) -> Self {
        Self { rules, labels }
    }

    pub fn labels(&self) -> &'a FallbackLabels {
        self.labels
    }

    /// Canonical project name with bracketed tags stripped first.
    pub fn project(&self, raw: &str) -> String {
        resolve_label(&strip_tags(raw), &self.rules.project_rules, &self.labels.project)
    }

    pub fn group(&self, raw: &str) -> String {
        resolve_label(raw, &self.rules.group_rules, &self.labels.group)
    }

    pub fn person(&self, raw: &str) -> String {
        person_key(raw, &self.labels.person)
    }

    /// The pivot key of `entry` in the given analysis mode.
    pub fn entity_key(&self, entry: &WorkEntry, mode: AnalysisMode) -> String {
        match mode {
            AnalysisMode::Project => self.project(&entry.raw_project),
            AnalysisMode::Person => self.person(&entry.person),
            AnalysisMode::Group => self.group(&entry.raw_group),
        }
    }
}
