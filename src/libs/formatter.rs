//! Number formatting for tables, messages and exports.
//!
//! Hours are shown with one decimal place everywhere (`7.5`, `0.0`) so that
//! totals in the terminal, CSV and Excel output match. Group averages use a
//! dash when no one reported that day.
//!
//! ## Examples
//!
//! ```rust
//! use dayboard::libs::formatter::{format_average, format_hours, format_percent};
//!
//! assert_eq!(format_hours(7.46), "7.5");
//! assert_eq!(format_percent(33.3), "33.3%");
//! assert_eq!(format_average(None), "-");
//! ```

/// Placeholder for a value that does not exist, such as an average over nobody.
pub const NO_VALUE: &str = "-";

/// One decimal place, no unit.
pub fn format_hours(hours: f64) -> String {
    format!("{:.1}", hours)
}

pub fn format_percent(percent: f64) -> String {
    format!("{:.1}%", percent)
}

/// Average hours per person, or [`NO_VALUE`] for an empty day.
pub fn format_average(average: Option<f64>) -> String {
    average.map(format_hours).unwrap_or_else(|| NO_VALUE.to_string())
}

/// Hours cell of a trend table: blank for zero so sparse tables stay readable.
pub fn format_cell(hours: f64) -> String {
    if hours > 0.0 {
        format_hours(hours)
    } else {
        String::new()
    }
}
