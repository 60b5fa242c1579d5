//! Error types for the aggregation core.
//!
//! The pure engine modules (`normalize`, `rules`, `aggregate`, `selection`,
//! `trend`, `overview`, `import`) return [`Error`] so callers can tell invalid
//! input apart from a missing rule. Command handlers and the storage layer
//! wrap these into `anyhow::Error` at the boundary.

use crate::libs::rules::RuleKind;
use chrono::NaiveDate;
use thiserror::Error;

/// Coarse classification of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The caller passed data the engine cannot work with.
    InvalidInput,
    /// A referenced rule does not exist.
    NotFound,
}

/// Main error type for the dayboard core
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Trend input was not ordered by date
    #[error("report dates must be strictly ascending, but {previous} is followed by {next}")]
    NonMonotonicDates { previous: NaiveDate, next: NaiveDate },

    /// Rule alias was empty after trimming
    #[error("alias name must not be blank")]
    BlankAlias,

    /// Group rule had no source names
    #[error("at least one source name is required")]
    NoSourceNames,

    /// Project merge needs two or more names
    #[error("merging requires at least 2 names, got {0}")]
    TooFewMergeNames(usize),

    /// Rule index out of range
    #[error("{kind} rule #{index} does not exist")]
    RuleNotFound { kind: RuleKind, index: usize },

    /// Trend window too long, or reaching before the earliest date
    #[error("a window of {0} days is out of range")]
    WindowOutOfRange(u32),

    /// Date string that could not be parsed
    #[error("unrecognized date: {0}")]
    InvalidDate(String),
}

impl Error {
    /// Returns the classification used by callers to branch on failures.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::RuleNotFound { .. } => ErrorKind::NotFound,
            _ => ErrorKind::InvalidInput,
        }
    }
}

/// Result type alias for the dayboard core
pub type Result<T> = std::result::Result<T, Error>;
