use std::fmt;

use chrono::Weekday;

use super::model::{Trip, TripTable};
use crate::config::City;

// ---------------------------------------------------------------------------
// Filter predicates
// ---------------------------------------------------------------------------

/// Month restriction: every month, or one calendar month (1-6).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthFilter {
    All,
    Only(u32),
}

/// Weekday restriction: every day, or one weekday.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayFilter {
    All,
    Only(Weekday),
}

/// Normalised form: `all` or the month number.
impl fmt::Display for MonthFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MonthFilter::All => f.write_str("all"),
            MonthFilter::Only(month) => write!(f, "{month}"),
        }
    }
}

/// Normalised form: `all` or the weekday number, Monday = 0.
impl fmt::Display for DayFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DayFilter::All => f.write_str("all"),
            DayFilter::Only(day) => write!(f, "{}", day.num_days_from_monday()),
        }
    }
}

/// The month and day predicates applied to every row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowFilter {
    pub month: MonthFilter,
    pub day: DayFilter,
}

impl RowFilter {
    /// Whether `trip` satisfies both predicates.
    pub fn accepts(&self, trip: &Trip) -> bool {
        let month_ok = match self.month {
            MonthFilter::All => true,
            MonthFilter::Only(month) => trip.start_month() == month,
        };
        let day_ok = match self.day {
            DayFilter::All => true,
            DayFilter::Only(day) => trip.start_weekday() == day,
        };
        month_ok && day_ok
    }
}

/// What the operator asked to explore.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub city: City,
    pub month: MonthFilter,
    pub day: DayFilter,
}

impl Selection {
    pub fn filter(&self) -> RowFilter {
        RowFilter {
            month: self.month,
            day: self.day,
        }
    }
}

// ---------------------------------------------------------------------------
// Applying filters
// ---------------------------------------------------------------------------

/// Return indices of trips that pass `filter`, in row order.
pub fn filtered_indices(table: &TripTable, filter: &RowFilter) -> Vec<usize> {
    table
        .trips
        .iter()
        .enumerate()
        .filter(|(_, trip)| filter.accepts(trip))
        .map(|(i, _)| i)
        .collect()
}

/// A filtered copy of `table`. The source table is left untouched.
pub fn apply_filter(table: &TripTable, filter: &RowFilter) -> TripTable {
    let indices = filtered_indices(table, filter);
    log::debug!(
        "Filter month={} day={} kept {}/{} trips",
        filter.month,
        filter.day,
        indices.len(),
        table.len()
    );
    table.select(&indices)
}
