//! Most frequent times of travel.

use std::io::{BufRead, Write};
use std::time::Instant;

use chrono::Weekday;

use super::{footer, heading, mode, NO_TRIPS};
use crate::config::{month_name, weekday_name};
use crate::console::{Console, ConsoleError};
use crate::data::filter::{DayFilter, MonthFilter, Selection};
use crate::data::model::TripTable;

/// Popular start times. Month and weekday are only computed when the
/// selection does not already pin them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeStats {
    pub popular_month: Option<u32>,
    pub popular_day: Option<Weekday>,
    pub popular_hour: Option<u32>,
}

pub fn compute(table: &TripTable, selection: &Selection) -> TimeStats {
    let popular_month = match selection.month {
        MonthFilter::All => mode(table.trips.iter().map(|t| t.start_month())),
        MonthFilter::Only(_) => None,
    };
    // Weekday is not Ord; count by days-from-Monday instead.
    let popular_day = match selection.day {
        DayFilter::All => mode(
            table
                .trips
                .iter()
                .map(|t| t.start_weekday().num_days_from_monday()),
        )
        .map(weekday_from_monday),
        DayFilter::Only(_) => None,
    };
    TimeStats {
        popular_month,
        popular_day,
        popular_hour: mode(table.trips.iter().map(|t| t.start_hour())),
    }
}

fn weekday_from_monday(days: u32) -> Weekday {
    let mut day = Weekday::Mon;
    for _ in 0..days % 7 {
        day = day.succ();
    }
    day
}

/// 12-hour label for an hour of day: 13-23 → "1 pm".."11 pm", 12 → "12 pm",
/// 0-11 → "0 am".."11 am". Midnight keeps the "0 am" form of the trip-log
/// reports this tool reproduces.
pub fn hour_label(hour: u32) -> String {
    match hour {
        h if h > 12 => format!("{} pm", h - 12),
        12 => "12 pm".to_owned(),
        h => format!("{h} am"),
    }
}

/// Print the time-of-travel statistics.
pub fn report<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    table: &TripTable,
    selection: &Selection,
) -> Result<(), ConsoleError> {
    heading(console, "Calculating The Most Frequent Times of Travel...")?;
    let started = Instant::now();
    let stats = compute(table, selection);
    let city = selection.city;

    match (selection.month, stats.popular_month) {
        (MonthFilter::Only(month), _) => console.say(format_args!(
            "You chose to look at rides in the month of {} in {city}.",
            month_name(month).unwrap_or("an unknown month")
        ))?,
        (MonthFilter::All, Some(month)) => console.say(format_args!(
            "The most popular month to use the bikeshare in {city} is {}.",
            month_name(month).unwrap_or("an unknown month")
        ))?,
        (MonthFilter::All, None) => console.say(NO_TRIPS)?,
    }

    match (selection.day, stats.popular_day) {
        (DayFilter::Only(day), _) => console.say(format_args!(
            "You chose to look at rides on the day of {} in {city}.",
            weekday_name(day)
        ))?,
        (DayFilter::All, Some(day)) => console.say(format_args!(
            "The most popular day to use the bikeshare in {city} is {}.",
            weekday_name(day)
        ))?,
        (DayFilter::All, None) => console.say(NO_TRIPS)?,
    }

    match stats.popular_hour {
        Some(hour) => console.say(format_args!(
            "The most popular start hour is at {}.",
            hour_label(hour)
        ))?,
        None => console.say(NO_TRIPS)?,
    }

    footer(console, "This took", started.elapsed())
}
