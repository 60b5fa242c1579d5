//! # Dayboard - daily report aggregation and trends
//!
//! A command-line utility that imports a team's daily work reports and
//! answers two questions about them: where did the hours of one day go, and
//! how did that change over the last days.
//!
//! ## Features
//!
//! - **Import**: CSV exports of the report sheet, any text encoding
//! - **Normalization**: Alias rules that fold spelling variants of project
//!   and group names into one canonical name
//! - **Day Overview**: People, hours bands and project shares per day
//! - **Trends**: Date × entity matrices by project, person or group, with
//!   per-person averages for groups
//! - **Data Export**: CSV, JSON and Excel exports plus JSON backups
//!
//! ## Usage
//!
//! ```rust,no_run
//! use dayboard::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
