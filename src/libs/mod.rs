//! Core library modules for dayboard.
//!
//! Everything that does not touch the terminal or the database lives here:
//! the work entry model, label normalization, aggregation, the trend pivot
//! and its selection state, plus the supporting pieces the commands share.
//!
//! ## Layout
//!
//! - **Model**: [`entry`], [`rules`], [`error`]
//! - **Engine**: [`normalize`], [`aggregate`], [`selection`], [`trend`], [`overview`]
//! - **Input and output**: [`import`], [`export`], [`view`], [`formatter`]
//! - **Infrastructure**: [`config`], [`data_storage`], [`messages`]
//!
//! ## Usage
//!
//! ```rust
//! use dayboard::libs::aggregate::aggregate_by_entity;
//! use dayboard::libs::entry::{AnalysisMode, WorkEntry};
//! use dayboard::libs::normalize::{FallbackLabels, Normalizer};
//! use dayboard::libs::rules::RuleSet;
//!
//! let rules = RuleSet::with_defaults();
//! let labels = FallbackLabels::default();
//! let entries = vec![WorkEntry::new("Alice", "QA Team", "Website", 6.0)];
//!
//! let stats = aggregate_by_entity(&entries, AnalysisMode::Group, &Normalizer::new(&rules, &labels));
//! assert_eq!(stats.entities[0].name, "QA");
//! ```

pub mod aggregate;
pub mod config;
pub mod data_storage;
pub mod entry;
pub mod error;
pub mod export;
pub mod formatter;
pub mod import;
pub mod messages;
pub mod normalize;
pub mod overview;
pub mod rules;
pub mod selection;
pub mod trend;
pub mod view;
