//! Total and average trip duration.

use std::io::{BufRead, Write};
use std::time::Instant;

use super::{footer, heading, NO_TRIPS};
use crate::console::{Console, ConsoleError};
use crate::data::model::TripTable;

const SECONDS_PER_DAY: f64 = 86_400.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DurationStats {
    pub total_seconds: f64,
    pub mean_seconds: f64,
}

impl DurationStats {
    pub fn total_days(&self) -> f64 {
        self.total_seconds / SECONDS_PER_DAY
    }

    /// Mean duration in whole minutes, truncated.
    pub fn mean_minutes(&self) -> i64 {
        (self.mean_seconds / 60.0).trunc() as i64
    }
}

/// `None` when the table is empty.
pub fn compute(table: &TripTable) -> Option<DurationStats> {
    if table.is_empty() {
        return None;
    }
    let total_seconds: f64 = table.trips.iter().map(|t| t.duration).sum();
    Some(DurationStats {
        total_seconds,
        mean_seconds: total_seconds / table.len() as f64,
    })
}

/// Format with two decimals and comma thousands separators: `1234567.891`
/// becomes `1,234,567.89`.
pub fn format_thousands(value: f64) -> String {
    let fixed = format!("{:.2}", value.abs());
    let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if value.is_sign_negative() && !fixed.trim_matches(['0', '.']).is_empty() {
        "-"
    } else {
        ""
    };
    format!("{sign}{grouped}.{fraction}")
}

/// Print the trip duration statistics.
pub fn report<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    table: &TripTable,
) -> Result<(), ConsoleError> {
    heading(console, "Calculating Trip Duration...")?;
    let started = Instant::now();

    match compute(table) {
        Some(stats) => {
            console.say(format_args!(
                "A total of {} seconds of trips were taken.",
                format_thousands(stats.total_seconds)
            ))?;
            console.say(format_args!(
                "This is a total of {} days of trips!",
                format_thousands(stats.total_days())
            ))?;
            console.say(format_args!(
                "The average trip took {} seconds, or over {} minutes.",
                stats.mean_seconds,
                stats.mean_minutes()
            ))?;
        }
        None => console.say(NO_TRIPS)?,
    }

    footer(console, "This took", started.elapsed())
}
