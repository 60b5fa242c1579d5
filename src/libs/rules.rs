//! Alias rules that merge inconsistent project and group names.
//!
//! Two independent rule lists are kept in a [`RuleSet`]: one for projects and
//! one for groups. Within a list, rules are evaluated in order and the first
//! rule whose source names contain a label wins.
//!
//! ## Editing
//!
//! All edit operations are copy-on-write. They validate their input, build a
//! new `RuleSet` and leave the receiver untouched, so a failed edit never
//! leaves a half-modified list behind.
//!
//! - **Group rules**: added to the front of the list, edited in place
//! - **Project rules**: created by merging two or more names, appended to the
//!   end of the list, renamed in place
//! - **Either kind**: removed by index
//!
//! ## Usage
//!
//! ```rust
//! use dayboard::libs::rules::RuleSet;
//!
//! let rules = RuleSet::default()
//!     .with_group_rule("QA", "QA Team, QA")?
//!     .with_project_merge("Website", &["Web", "Homepage"])?;
//! assert_eq!(rules.group_rules[0].canonical_name, "QA");
//! # Ok::<(), dayboard::libs::error::Error>(())
//! ```

use crate::libs::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which rule list an operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum RuleKind {
    Project,
    Group,
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleKind::Project => write!(f, "project"),
            RuleKind::Group => write!(f, "group"),
        }
    }
}

/// Maps a set of raw names onto one canonical name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AliasRule {
    pub canonical_name: String,
    pub source_names: Vec<String>,
}

impl AliasRule {
    /// Builds a rule, dropping duplicate and blank source names while keeping
    /// first-seen order.
    pub fn new<I, S>(canonical_name: &str, source_names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut names: Vec<String> = Vec::new();
        for name in source_names {
            let name: String = name.into();
            if !name.trim().is_empty() && !names.contains(&name) {
                names.push(name);
            }
        }

        Self {
            canonical_name: canonical_name.to_string(),
            source_names: names,
        }
    }

    /// Exact, case-sensitive membership test against the source names.
    pub fn matches(&self, value: &str) -> bool {
        self.source_names.iter().any(|name| name == value)
    }
}

/// The two rule lists consulted during normalization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSet {
    #[serde(default)]
    pub project_rules: Vec<AliasRule>,
    #[serde(default)]
    pub group_rules: Vec<AliasRule>,
}

/// Group rules seeded on first run.
pub fn default_group_rules() -> Vec<AliasRule> {
    vec![
        AliasRule::new("QA", ["QA Team", "QA"]),
        AliasRule::new("Tech", ["Tech", "Tech Team"]),
        AliasRule::new("Web", ["Web Team", "Web"]),
        AliasRule::new("Database", ["Database Team", "Database"]),
        AliasRule::new("Support", ["Support Team", "【Support Team】"]),
    ]
}

/// Splits a free-form list of source names.
///
/// Names are separated by ASCII commas, full-width commas or line breaks.
/// Spaces inside a name are kept so that `QA Team` stays one name.
pub fn split_source_names(raw: &str) -> Vec<String> {
    raw.split(|c: char| matches!(c, ',' | '，' | '\n' | '\r'))
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

impl RuleSet {
    /// A rule set holding only the default group rules.
    pub fn with_defaults() -> Self {
        Self {
            project_rules: Vec::new(),
            group_rules: default_group_rules(),
        }
    }

    pub fn rules(&self, kind: RuleKind) -> &[AliasRule] {
        match kind {
            RuleKind::Project => &self.project_rules,
            RuleKind::Group => &self.group_rules,
        }
    }

    /// Adds a group rule at the front of the list so it takes precedence over
    /// every existing rule.
    pub fn with_group_rule(&self, alias: &str, sources_raw: &str) -> Result<Self> {
        let rule = validated_group_rule(alias, sources_raw)?;
        let mut next = self.clone();
        next.group_rules.insert(0, rule);
        Ok(next)
    }

    /// Replaces the group rule at `index` with a new alias and source list.
    pub fn with_group_rule_replaced(&self, index: usize, alias: &str, sources_raw: &str) -> Result<Self> {
        self.check_index(RuleKind::Group, index)?;
        let rule = validated_group_rule(alias, sources_raw)?;
        let mut next = self.clone();
        next.group_rules[index] = rule;
        Ok(next)
    }

    /// Merges the `selected` project names into one rule called `new_name`.
    ///
    /// A selected name that is already the canonical name of a project rule
    /// contributes that rule's sources, and the old rule is dropped. Any other
    /// name contributes itself. The merged rule is appended.
    pub fn with_project_merge<S: AsRef<str>>(&self, new_name: &str, selected: &[S]) -> Result<Self> {
        let alias = new_name.trim();
        if alias.is_empty() {
            return Err(Error::BlankAlias);
        }
        if selected.len() < 2 {
            return Err(Error::TooFewMergeNames(selected.len()));
        }

        let mut next = self.clone();
        let mut sources: Vec<String> = Vec::new();

        for name in selected {
            let name = name.as_ref();
            match next.project_rules.iter().position(|r| r.canonical_name == name) {
                Some(existing) => {
                    let old = next.project_rules.remove(existing);
                    sources.extend(old.source_names);
                }
                None => sources.push(name.to_string()),
            }
        }

        next.project_rules.push(AliasRule::new(alias, sources));
        Ok(next)
    }

    /// Renames the canonical name of the project rule at `index`.
    pub fn with_project_rule_renamed(&self, index: usize, alias: &str) -> Result<Self> {
        self.check_index(RuleKind::Project, index)?;
        let alias = alias.trim();
        if alias.is_empty() {
            return Err(Error::BlankAlias);
        }

        let mut next = self.clone();
        next.project_rules[index].canonical_name = alias.to_string();
        Ok(next)
    }

    /// Removes the rule at `index` from the list of the given kind.
    pub fn without_rule(&self, kind: RuleKind, index: usize) -> Result<Self> {
        self.check_index(kind, index)?;
        let mut next = self.clone();
        match kind {
            RuleKind::Project => next.project_rules.remove(index),
            RuleKind::Group => next.group_rules.remove(index),
        };
        Ok(next)
    }

    fn check_index(&self, kind: RuleKind, index: usize) -> Result<()> {
        if index < self.rules(kind).len() {
            Ok(())
        } else {
            Err(Error::RuleNotFound { kind, index })
        }
    }
}

fn validated_group_rule(alias: &str, sources_raw: &str) -> Result<AliasRule> {
    let alias = alias.trim();
    if alias.is_empty() {
        return Err(Error::BlankAlias);
    }

    let sources = split_source_names(sources_raw);
    if sources.is_empty() {
        return Err(Error::NoSourceNames);
    }

    Ok(AliasRule::new(alias, sources))
}
