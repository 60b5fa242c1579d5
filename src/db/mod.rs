//! Database layer for dayboard.
//!
//! Stores imported reports, alias rules and trend view state in a single
//! SQLite file in the per-user data directory. Each store opens its own
//! connection through [`db::Db`], which applies pending migrations first.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use dayboard::db::{reports::Reports, rules::Rules};
//! use chrono::NaiveDate;
//!
//! let reports = Reports::new()?;
//! let rules = Rules::new()?.load()?;
//! let day = reports.fetch_day(NaiveDate::from_ymd_opt(2025, 3, 3).unwrap())?;
//! # Ok::<(), anyhow::Error>(())
//! ```

/// Connection setup.
pub mod db;

/// Versioned schema changes.
pub mod migrations;

/// Daily reports keyed by date.
pub mod reports;

/// Project and group alias rules.
pub mod rules;

/// Persisted JSON settings such as the trend view state.
pub mod settings;
