use crate::libs::aggregate::AggregationResult;
use crate::libs::formatter::{format_average, format_cell, format_hours, format_percent};
use crate::libs::overview::{DayOverview, HoursBand};
use crate::libs::rules::AliasRule;
use crate::libs::trend::{TrendMatrix, UnselectedGroup};
use anyhow::Result;
use chrono::NaiveDate;
use prettytable::{row, Cell, Row, Table};

pub struct View {}

impl View {
    /// Entity totals of a single day.
    pub fn stats(stats: &AggregationResult) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["#", "NAME", "HOURS", "SHARE"]);
        for (index, entity) in stats.entities.iter().enumerate() {
            table.add_row(row![index + 1, entity.name, r->format_hours(entity.hours), r->format_percent(entity.percent)]);
        }
        table.add_row(row!["", "TOTAL", r->format_hours(stats.total_hours), ""]);
        table.printstd();

        Ok(())
    }

    /// People of the day overview with their hours band.
    pub fn people(overview: &DayOverview) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["GROUP", "NAME", "HOURS", "", "PROJECTS"]);
        for person in &overview.people {
            let band = match person.band {
                HoursBand::Under => "▼",
                HoursBand::Normal => "",
                HoursBand::Over => "▲",
            };
            let mut projects: Vec<&str> = Vec::new();
            for entry in &person.entries {
                if !projects.contains(&entry.raw_project.as_str()) {
                    projects.push(entry.raw_project.as_str());
                }
            }
            table.add_row(row![person.group, person.name, r->format_hours(person.total_hours), band, projects.join(", ")]);
        }
        table.printstd();

        Ok(())
    }

    /// Trend matrix with dates as rows, newest first.
    ///
    /// Group mode adds the head count and the average hours per person.
    pub fn trend(matrix: &TrendMatrix) -> Result<()> {
        let mut table = Table::new();
        let with_stats = matrix.group_stats.is_some();

        let mut header: Vec<Cell> = vec![Cell::new("DATE")];
        header.extend(matrix.entities.iter().map(|e| Cell::new(e)));
        header.push(Cell::new("TOTAL"));
        if with_stats {
            header.push(Cell::new("PEOPLE"));
            header.push(Cell::new("AVG"));
        }
        table.add_row(Row::new(header));

        for &date in matrix.dates.iter().rev() {
            table.add_row(Self::trend_row(matrix, date, with_stats));
        }

        let mut totals: Vec<Cell> = vec![Cell::new("TOTAL")];
        totals.extend(
            matrix
                .entities
                .iter()
                .map(|e| Cell::new_align(&format_hours(matrix.entity_total(e).unwrap_or(0.0)), prettytable::format::Alignment::RIGHT)),
        );
        table.add_row(Row::new(totals));
        table.printstd();

        Ok(())
    }

    fn trend_row(matrix: &TrendMatrix, date: NaiveDate, with_stats: bool) -> Row {
        let right = prettytable::format::Alignment::RIGHT;
        let mut cells: Vec<Cell> = vec![Cell::new(&date.format("%Y-%m-%d %a").to_string())];
        for &hours in matrix.row(date).unwrap_or(&[]) {
            cells.push(Cell::new_align(&format_cell(hours), right));
        }
        cells.push(Cell::new_align(&format_hours(matrix.row_total(date).unwrap_or(0.0)), right));

        if with_stats {
            if let Some(stats) = matrix.group_day(date) {
                cells.push(Cell::new_align(&stats.people.to_string(), right));
                cells.push(Cell::new_align(&format_average(stats.average), right));
            }
        }
        Row::new(cells)
    }

    /// Entities hidden from a comparison trend, bucketed by label.
    pub fn unselected(groups: &[UnselectedGroup]) -> Result<()> {
        let mut table = Table::new();

        for group in groups {
            table.add_row(row![b->group.label, group.entities.join(", ")]);
        }
        table.printstd();

        Ok(())
    }

    /// Alias rules with their list position, which is the index used by edit commands.
    pub fn rules(rules: &[AliasRule]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["#", "CANONICAL NAME", "SOURCE NAMES"]);
        for (index, rule) in rules.iter().enumerate() {
            table.add_row(row![index, rule.canonical_name, rule.source_names.join(", ")]);
        }
        table.printstd();

        Ok(())
    }

    /// Stored report dates with their row counts and total hours.
    pub fn history(days: &[(NaiveDate, usize, f64)]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["DATE", "ROWS", "HOURS"]);
        for (date, rows, hours) in days {
            table.add_row(row![date.format("%Y-%m-%d %a"), r->rows, r->format_hours(*hours)]);
        }
        table.printstd();

        Ok(())
    }
}
